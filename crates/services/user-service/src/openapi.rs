//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::handlers::auth_handler::VerifyCredentialsRequest;
use crate::handlers::health_handler::HealthResponse;
use crate::handlers::user_handler::{CreateUserRequest, UpdateUserRequest};
use domain::UserResponse;

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health_handler::health_check,
        crate::handlers::user_handler::create_user,
        crate::handlers::user_handler::get_user,
        crate::handlers::user_handler::update_user,
        crate::handlers::user_handler::delete_user,
        crate::handlers::auth_handler::verify_credentials,
    ),
    components(
        schemas(
            HealthResponse,
            CreateUserRequest,
            UpdateUserRequest,
            VerifyCredentialsRequest,
            UserResponse,
        )
    ),
    tags(
        (name = "Health", description = "Service health"),
        (name = "Users", description = "User management endpoints"),
        (name = "Authentication", description = "Credential verification"),
    )
)]
pub struct ApiDoc;
