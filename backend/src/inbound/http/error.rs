//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while allowing Actix
//! handlers to turn domain failures into consistent JSON responses and status
//! codes.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::error;

use crate::domain::{Error, ErrorCode};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::IllegalTransition | ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_internal(error: &Error) -> Error {
    if matches!(error.code(), ErrorCode::InternalError) {
        Error::internal("Internal server error")
    } else {
        error.clone()
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(redact_if_internal(self))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        // Do not leak implementation details to clients.
        error!(error = %err, "actix error promoted to domain error");
        Error::internal("Internal server error")
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use actix_web::body::to_bytes;
    use rstest::rstest;
    use serde_json::Value;

    use super::*;

    #[rstest]
    #[case::invalid(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
    #[case::unauthorized(Error::unauthorized("nope"), StatusCode::UNAUTHORIZED)]
    #[case::not_found(Error::not_found("missing"), StatusCode::NOT_FOUND)]
    #[case::illegal(
        Error::illegal_transition("completed is terminal"),
        StatusCode::CONFLICT
    )]
    #[case::conflict(Error::conflict("sold out"), StatusCode::CONFLICT)]
    #[case::unavailable(
        Error::service_unavailable("store down"),
        StatusCode::SERVICE_UNAVAILABLE
    )]
    #[case::internal(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
    fn codes_map_to_expected_statuses(#[case] error: Error, #[case] expected: StatusCode) {
        assert_eq!(error.status_code(), expected);
    }

    #[actix_web::test]
    async fn internal_errors_are_redacted() {
        let error = Error::internal("db password was hunter2");
        let response = error.error_response();

        let body = to_bytes(response.into_body()).await.expect("body bytes");
        let json: Value = serde_json::from_slice(&body).expect("json body");
        assert_eq!(json["message"], "Internal server error");
        assert_eq!(json["code"], "internal_error");
    }

    #[actix_web::test]
    async fn client_errors_keep_message_and_details() {
        let error = Error::conflict("tour sold out")
            .with_details(serde_json::json!({ "remaining": 0 }));
        let response = error.error_response();

        let body = to_bytes(response.into_body()).await.expect("body bytes");
        let json: Value = serde_json::from_slice(&body).expect("json body");
        assert_eq!(json["message"], "tour sold out");
        assert_eq!(json["details"]["remaining"], 0);
    }
}
