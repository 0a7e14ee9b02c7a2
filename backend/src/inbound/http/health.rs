//! Liveness probe for orchestration and load balancers.

use actix_web::{HttpResponse, get, http::header};

/// Liveness probe. Returns 200 while the process is serving requests.
#[utoipa::path(
    get,
    path = "/healthz",
    tags = ["health"],
    security([]),
    responses(
        (status = 200, description = "Server is alive")
    )
)]
#[get("/healthz")]
pub async fn healthz() -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .finish()
}
