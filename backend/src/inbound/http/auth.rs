//! Session sign-in and sign-out endpoints.
//!
//! ```text
//! POST /api/v1/auth/sign-in
//! POST /api/v1/auth/sign-out
//! ```
//!
//! There is no credential check here: the mock platform trusts the supplied
//! user id and the session cookie scopes every other endpoint to it.

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::UserId;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::validation::{FieldName, parse_uuid};

/// Request payload for signing in.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignInRequestBody {
    /// The user to open a session for.
    #[schema(format = "uuid")]
    pub user_id: String,
}

/// Response payload confirming the signed-in user.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignInResponseBody {
    #[schema(format = "uuid")]
    pub user_id: String,
}

/// Open a session for the supplied user id.
#[utoipa::path(
    post,
    path = "/api/v1/auth/sign-in",
    request_body = SignInRequestBody,
    responses(
        (status = 200, description = "Session opened", body = SignInResponseBody),
        (status = 400, description = "Invalid request", body = ErrorSchema)
    ),
    tags = ["auth"],
    operation_id = "signIn",
    security([])
)]
#[post("/auth/sign-in")]
pub async fn sign_in(
    session: SessionContext,
    payload: web::Json<SignInRequestBody>,
) -> ApiResult<web::Json<SignInResponseBody>> {
    let raw = payload.into_inner().user_id;
    let user_id = UserId::from(parse_uuid(raw, FieldName::new("userId"))?);
    session.persist_user(&user_id)?;

    Ok(web::Json(SignInResponseBody {
        user_id: user_id.to_string(),
    }))
}

/// Close the current session.
#[utoipa::path(
    post,
    path = "/api/v1/auth/sign-out",
    responses(
        (status = 204, description = "Session closed")
    ),
    tags = ["auth"],
    operation_id = "signOut",
    security(("SessionCookie" = []))
)]
#[post("/auth/sign-out")]
pub async fn sign_out(session: SessionContext) -> HttpResponse {
    session.purge();
    HttpResponse::NoContent().finish()
}
