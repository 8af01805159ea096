//! API handlers for Libris REST endpoints

pub mod auth;
pub mod authors;
pub mod books;
pub mod categories;
pub mod export;
pub mod health;
pub mod openapi;
pub mod publishers;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{error::AppError, models::user::UserClaims, AppState};

/// Extractor for authenticated user from JWT token
pub struct AuthenticatedUser(pub UserClaims);

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        // Get the Authorization header
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::Authentication("Missing authorization header".to_string()))?;

        // Check for Bearer token
        if !auth_header.starts_with("Bearer ") {
            return Err(AppError::Authentication("Invalid authorization header format".to_string()));
        }

        let token = &auth_header[7..];

        // Validate JWT token using the secret from configuration
        let claims = UserClaims::from_token(token, &state.config.auth.jwt_secret)
            .map_err(|e| AppError::Authentication(e.to_string()))?;

        Ok(AuthenticatedUser(claims))
    }
}

/// Paginated response wrapper
#[derive(Serialize, ToSchema)]
pub struct PaginatedResponse<T>
where
    T: for<'a> ToSchema<'a>,
{
    /// List of items on this page
    pub items: Vec<T>,
    /// Total number of items across all pages
    pub total: usize,
    /// Current page number (1-based)
    pub page: usize,
    /// Items per page
    pub per_page: usize,
}

/// Pagination query parameters shared by the list endpoints. `page` is
/// 1-based on the wire and shifted down before it reaches the services.
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<usize>,
    pub size: Option<usize>,
}

impl PageQuery {
    /// 1-based page number as requested, defaulting to the first page.
    pub fn page(&self) -> usize {
        self.page.unwrap_or(1).max(1)
    }

    pub fn size(&self) -> usize {
        self.size.unwrap_or(20)
    }
}
