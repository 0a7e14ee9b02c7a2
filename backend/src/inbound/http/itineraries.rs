//! Itinerary synthesis endpoints.
//!
//! ```text
//! POST /api/v1/itineraries
//! GET  /api/v1/itineraries
//! ```

use std::str::FromStr;

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::GenerateItineraryRequest;
use crate::domain::{Itinerary, TravelPreferences, TravelStyle};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::tours::to_json_value;
use crate::inbound::http::validation::{FieldName, invalid_choice_error};

/// Request payload for generating an itinerary.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateItineraryRequestBody {
    pub destination: String,
    /// Trip length in days.
    pub duration_days: u32,
    /// Total budget in VND.
    pub budget: i64,
    /// One of `budget`, `comfort`, `luxury`.
    pub travel_style: String,
    pub interests: Vec<String>,
    pub group_size: u32,
}

/// Response payload for a generated itinerary.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryResponseBody {
    #[schema(format = "uuid")]
    pub id: String,
    pub title: String,
    pub destination: String,
    pub duration_days: u32,
    pub total_budget: i64,
    pub estimated_cost: i64,
    /// Ordered day plans with priced activities and accommodation.
    #[schema(value_type = Vec<serde_json::Value>)]
    pub days: serde_json::Value,
    pub highlights: Vec<String>,
    pub tips: Vec<String>,
    #[schema(format = "date-time")]
    pub created_at: String,
    #[schema(format = "uuid")]
    pub user_id: String,
}

impl TryFrom<Itinerary> for ItineraryResponseBody {
    type Error = crate::domain::Error;

    fn try_from(itinerary: Itinerary) -> Result<Self, Self::Error> {
        Ok(Self {
            id: itinerary.id.to_string(),
            title: itinerary.title,
            destination: itinerary.destination,
            duration_days: itinerary.duration_days,
            total_budget: itinerary.total_budget,
            estimated_cost: itinerary.estimated_cost,
            days: to_json_value(itinerary.days)?,
            highlights: itinerary.highlights,
            tips: itinerary.tips,
            created_at: itinerary.created_at.to_rfc3339(),
            user_id: itinerary.user_id.to_string(),
        })
    }
}

fn parse_preferences(body: GenerateItineraryRequestBody) -> ApiResult<TravelPreferences> {
    let travel_style = TravelStyle::from_str(&body.travel_style).map_err(|_| {
        invalid_choice_error(
            FieldName::new("travelStyle"),
            &body.travel_style,
            "budget|comfort|luxury",
        )
    })?;
    Ok(TravelPreferences {
        destination: body.destination,
        duration_days: body.duration_days,
        budget: body.budget,
        travel_style,
        interests: body.interests,
        group_size: body.group_size,
    })
}

/// Synthesise and save an itinerary for the signed-in user.
#[utoipa::path(
    post,
    path = "/api/v1/itineraries",
    request_body = GenerateItineraryRequestBody,
    responses(
        (status = 200, description = "Generated itinerary", body = ItineraryResponseBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorized", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["itineraries"],
    operation_id = "generateItinerary",
    security(("SessionCookie" = []))
)]
#[post("/itineraries")]
pub async fn generate_itinerary(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<GenerateItineraryRequestBody>,
) -> ApiResult<web::Json<ItineraryResponseBody>> {
    let user_id = session.require_user_id()?;
    let preferences = parse_preferences(payload.into_inner())?;

    let itinerary = state
        .planner
        .generate(GenerateItineraryRequest {
            user_id,
            preferences,
        })
        .await?;

    Ok(web::Json(ItineraryResponseBody::try_from(itinerary)?))
}

/// List the signed-in user's saved itineraries, newest first.
#[utoipa::path(
    get,
    path = "/api/v1/itineraries",
    responses(
        (status = 200, description = "Saved itineraries", body = Vec<ItineraryResponseBody>),
        (status = 401, description = "Unauthorized", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["itineraries"],
    operation_id = "listItineraries",
    security(("SessionCookie" = []))
)]
#[get("/itineraries")]
pub async fn list_itineraries(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<Vec<ItineraryResponseBody>>> {
    let user_id = session.require_user_id()?;

    let itineraries = state.planner.list_for_user(&user_id).await?;
    let body = itineraries
        .into_iter()
        .map(ItineraryResponseBody::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(web::Json(body))
}

#[cfg(test)]
#[path = "itineraries_tests.rs"]
mod tests;
