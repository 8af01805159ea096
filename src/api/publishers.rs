//! Publisher endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{error::AppResult, models::Publisher};

use super::{AuthenticatedUser, PageQuery, PaginatedResponse};

/// List publishers with pagination
#[utoipa::path(
    get,
    path = "/publishers",
    tag = "publishers",
    security(("bearer_auth" = [])),
    params(
        ("page" = Option<usize>, Query, description = "Page number, 1-based (default: 1)"),
        ("size" = Option<usize>, Query, description = "Items per page (default: 20)")
    ),
    responses(
        (status = 200, description = "One page of publishers", body = PaginatedResponse<Publisher>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_publishers(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Query(query): Query<PageQuery>,
) -> AppResult<Json<PaginatedResponse<Publisher>>> {
    let page = state
        .services
        .publishers
        .find_paginated(query.page() - 1, query.size())
        .await?;

    Ok(Json(PaginatedResponse {
        items: page.content,
        total: page.total_elements,
        page: query.page(),
        per_page: page.per_page,
    }))
}

/// Get publisher by ID
#[utoipa::path(
    get,
    path = "/publishers/{id}",
    tag = "publishers",
    security(("bearer_auth" = [])),
    params(
        ("id" = i64, Path, description = "Publisher ID")
    ),
    responses(
        (status = 200, description = "Publisher details", body = Publisher),
        (status = 404, description = "Publisher not found")
    )
)]
pub async fn get_publisher(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i64>,
) -> AppResult<Json<Publisher>> {
    let publisher = state.services.publishers.find_by_id(id).await?;
    Ok(Json(publisher))
}

/// Create a new publisher
#[utoipa::path(
    post,
    path = "/publishers",
    tag = "publishers",
    security(("bearer_auth" = [])),
    request_body = Publisher,
    responses(
        (status = 201, description = "Publisher created", body = Publisher),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_publisher(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Json(publisher): Json<Publisher>,
) -> AppResult<(StatusCode, Json<Publisher>)> {
    publisher.validate()?;

    let created = state.services.publishers.create(&publisher).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update an existing publisher
#[utoipa::path(
    put,
    path = "/publishers/{id}",
    tag = "publishers",
    security(("bearer_auth" = [])),
    params(
        ("id" = i64, Path, description = "Publisher ID")
    ),
    request_body = Publisher,
    responses(
        (status = 200, description = "Publisher updated", body = Publisher),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn update_publisher(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i64>,
    Json(mut publisher): Json<Publisher>,
) -> AppResult<Json<Publisher>> {
    publisher.id = Some(id);
    publisher.validate()?;

    let updated = state.services.publishers.update(&publisher).await?;
    Ok(Json(updated))
}

/// Delete a publisher
#[utoipa::path(
    delete,
    path = "/publishers/{id}",
    tag = "publishers",
    security(("bearer_auth" = [])),
    params(
        ("id" = i64, Path, description = "Publisher ID")
    ),
    responses(
        (status = 204, description = "Publisher deleted"),
        (status = 404, description = "Publisher not found"),
        (status = 409, description = "Publisher is still referenced by books")
    )
)]
pub async fn delete_publisher(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.publishers.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
