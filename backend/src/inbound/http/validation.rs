//! Shared validation helpers for inbound HTTP adapters.

use chrono::NaiveDate;
use serde_json::json;
use uuid::Uuid;

use crate::domain::Error;

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidUuid,
    InvalidDate,
    InvalidChoice,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::InvalidUuid => "invalid_uuid",
            Self::InvalidDate => "invalid_date",
            Self::InvalidChoice => "invalid_choice",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

/// Builder for validation errors with field context.
struct ValidationError {
    field: String,
    message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    fn with_code(self, code: ErrorCode) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "code": code.as_str(),
        }))
    }

    fn with_value(self, code: ErrorCode, value: impl Into<String>) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "value": value.into(),
            "code": code.as_str(),
        }))
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("missing required field: {field}"))
        .with_code(ErrorCode::MissingField)
}

pub(crate) fn invalid_uuid_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("{field} must be a valid UUID"))
        .with_value(ErrorCode::InvalidUuid, value)
}

pub(crate) fn parse_uuid(value: String, field: FieldName) -> Result<Uuid, Error> {
    Uuid::parse_str(&value).map_err(|_| invalid_uuid_error(field, &value))
}

pub(crate) fn invalid_date_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("{field} must be an ISO 8601 date"))
        .with_value(ErrorCode::InvalidDate, value)
}

pub(crate) fn parse_date(value: String, field: FieldName) -> Result<NaiveDate, Error> {
    NaiveDate::parse_from_str(&value, "%Y-%m-%d").map_err(|_| invalid_date_error(field, &value))
}

/// Error for enum-like string fields, listing the accepted values.
pub(crate) fn invalid_choice_error(
    field: FieldName,
    value: &str,
    expected: &'static str,
) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("{field} must be one of: {expected}"))
        .with_value(ErrorCode::InvalidChoice, value)
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn parse_uuid_accepts_canonical_form() {
        let parsed = parse_uuid(
            "3fa85f64-5717-4562-b3fc-2c963f66afa6".to_owned(),
            FieldName::new("tourId"),
        )
        .expect("valid uuid");
        assert_eq!(parsed.to_string(), "3fa85f64-5717-4562-b3fc-2c963f66afa6");
    }

    #[rstest]
    fn parse_uuid_reports_field_and_value() {
        let error = parse_uuid("nope".to_owned(), FieldName::new("tourId"))
            .expect_err("invalid uuid");
        let details = error.details().expect("details present");
        assert_eq!(details["field"], "tourId");
        assert_eq!(details["value"], "nope");
        assert_eq!(details["code"], "invalid_uuid");
    }

    #[rstest]
    #[case::dashed("2024-02-01", true)]
    #[case::slashed("2024/02/01", false)]
    #[case::partial("2024-02", false)]
    #[case::garbage("tomorrow", false)]
    fn parse_date_requires_iso_format(#[case] input: &str, #[case] ok: bool) {
        let result = parse_date(input.to_owned(), FieldName::new("startDate"));
        assert_eq!(result.is_ok(), ok);
    }

    #[rstest]
    fn missing_field_error_names_the_field() {
        let error = missing_field_error(FieldName::new("bookingId"));
        assert!(error.message().contains("bookingId"));
        let details = error.details().expect("details present");
        assert_eq!(details["code"], "missing_field");
    }

    #[rstest]
    fn invalid_choice_error_lists_expected_values() {
        let error = invalid_choice_error(
            FieldName::new("status"),
            "paused",
            "pending|confirmed|cancelled|completed",
        );
        assert!(error.message().contains("pending|confirmed"));
        let details = error.details().expect("details present");
        assert_eq!(details["value"], "paused");
    }
}
