//! Credential verification handler.

use axum::{extract::State, response::Json, routing::post, Router};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use common::AppResult;
use domain::UserResponse;

use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// Credential check request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct VerifyCredentialsRequest {
    /// User email address
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "user@example.com")]
    pub email: String,
    /// User password
    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "password123")]
    pub password: String,
}

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/verify", post(verify_credentials))
}

/// Check an email/password pair. Issues no session.
#[utoipa::path(
    post,
    path = "/api/auth/verify",
    tag = "Authentication",
    request_body = VerifyCredentialsRequest,
    responses(
        (status = 200, description = "Credentials valid", body = UserResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn verify_credentials(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<VerifyCredentialsRequest>,
) -> AppResult<Json<UserResponse>> {
    let user = state
        .user_service
        .authenticate(&payload.email, payload.password)
        .await?;

    Ok(Json(UserResponse::from(user)))
}
