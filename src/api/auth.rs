//! Authentication endpoints

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppResult;

use super::AuthenticatedUser;

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    /// Account email, matched exactly including case
    pub email: String,
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    /// Signed JWT to present as a Bearer token
    pub token: String,
    pub token_type: String,
    pub username: String,
    pub authorities: Vec<String>,
}

#[derive(Serialize, ToSchema)]
pub struct UserInfo {
    pub username: String,
    pub authorities: Vec<String>,
}

/// Authenticate and obtain a JWT token
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<crate::AppState>,
    Json(request): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let (token, principal) = state
        .services
        .auth
        .authenticate(&request.email, &request.password)
        .await?;

    Ok(Json(LoginResponse {
        token,
        token_type: "Bearer".to_string(),
        username: principal.username,
        authorities: principal.authorities,
    }))
}

/// Get the authenticated user's identity
#[utoipa::path(
    get,
    path = "/auth/me",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current user info", body = UserInfo),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn me(AuthenticatedUser(claims): AuthenticatedUser) -> Json<UserInfo> {
    Json(UserInfo {
        username: claims.sub,
        authorities: claims.authorities,
    })
}
