//! Tour catalogue read endpoints.
//!
//! ```text
//! GET /api/v1/tours
//! GET /api/v1/tours/{id}
//! ```

use actix_web::{get, web};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::ports::TourCatalogueError;
use crate::domain::{Error, TourService};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Convert a serializable value to `serde_json::Value`, mapping errors to
/// `domain::Error::internal`.
pub(crate) fn to_json_value<T: Serialize>(value: T) -> Result<serde_json::Value, Error> {
    serde_json::to_value(value).map_err(|err| Error::internal(err.to_string()))
}

fn map_catalogue_error(error: TourCatalogueError) -> Error {
    match error {
        TourCatalogueError::NotFound { tour_id } => {
            Error::not_found(format!("tour {tour_id} not found"))
        }
        TourCatalogueError::Connection { .. } => {
            Error::service_unavailable("tour catalogue unavailable")
        }
        // Reservation-only variants; listing and lookup never produce them.
        other => Error::internal(other.to_string()),
    }
}

/// Response payload for a bookable tour.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TourResponseBody {
    #[schema(format = "uuid")]
    pub id: String,
    pub name: String,
    pub description: String,
    /// Providing company: id, name, email, phone.
    #[schema(value_type = Object)]
    pub provider: serde_json::Value,
    /// Price per person in VND.
    pub price: i64,
    pub duration: String,
    pub location: String,
    pub max_people: u32,
    pub amenities: Vec<String>,
    pub cancellation_policy: String,
    pub rating: f64,
    pub review_count: u32,
    /// Bookable date windows with remaining seats.
    #[schema(value_type = Vec<serde_json::Value>)]
    pub availability: serde_json::Value,
}

impl TryFrom<TourService> for TourResponseBody {
    type Error = Error;

    fn try_from(tour: TourService) -> Result<Self, Self::Error> {
        Ok(Self {
            id: tour.id.to_string(),
            name: tour.name,
            description: tour.description,
            provider: to_json_value(tour.provider)?,
            price: tour.price,
            duration: tour.duration,
            location: tour.location,
            max_people: tour.max_people,
            amenities: tour.amenities,
            cancellation_policy: tour.cancellation_policy,
            rating: tour.rating,
            review_count: tour.review_count,
            availability: to_json_value(tour.availability)?,
        })
    }
}

/// List every bookable tour.
#[utoipa::path(
    get,
    path = "/api/v1/tours",
    responses(
        (status = 200, description = "Tour catalogue", body = Vec<TourResponseBody>),
        (status = 401, description = "Unauthorized", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["tours"],
    operation_id = "listTours",
    security(("SessionCookie" = []))
)]
#[get("/tours")]
pub async fn list_tours(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<Vec<TourResponseBody>>> {
    session.require_user_id()?;

    let tours = state
        .tours
        .list_tours()
        .await
        .map_err(map_catalogue_error)?;
    let body = tours
        .into_iter()
        .map(TourResponseBody::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(web::Json(body))
}

/// Fetch a single tour by id.
#[utoipa::path(
    get,
    path = "/api/v1/tours/{id}",
    params(("id" = Uuid, Path, description = "Tour identifier")),
    responses(
        (status = 200, description = "The tour", body = TourResponseBody),
        (status = 401, description = "Unauthorized", body = ErrorSchema),
        (status = 404, description = "Unknown tour", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["tours"],
    operation_id = "getTour",
    security(("SessionCookie" = []))
)]
#[get("/tours/{id}")]
pub async fn get_tour(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<Uuid>,
) -> ApiResult<web::Json<TourResponseBody>> {
    session.require_user_id()?;
    let tour_id = path.into_inner();

    let tour = state
        .tours
        .find_tour(&tour_id)
        .await
        .map_err(map_catalogue_error)?
        .ok_or_else(|| Error::not_found(format!("tour {tour_id} not found")))?;

    Ok(web::Json(TourResponseBody::try_from(tour)?))
}

#[cfg(test)]
#[path = "tours_tests.rs"]
mod tests;
