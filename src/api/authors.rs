//! Author endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{error::AppResult, models::Author};

use super::{AuthenticatedUser, PageQuery, PaginatedResponse};

/// List authors with pagination
#[utoipa::path(
    get,
    path = "/authors",
    tag = "authors",
    security(("bearer_auth" = [])),
    params(
        ("page" = Option<usize>, Query, description = "Page number, 1-based (default: 1)"),
        ("size" = Option<usize>, Query, description = "Items per page (default: 20)")
    ),
    responses(
        (status = 200, description = "One page of authors", body = PaginatedResponse<Author>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_authors(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Query(query): Query<PageQuery>,
) -> AppResult<Json<PaginatedResponse<Author>>> {
    let page = state
        .services
        .authors
        .find_paginated(query.page() - 1, query.size())
        .await?;

    Ok(Json(PaginatedResponse {
        items: page.content,
        total: page.total_elements,
        page: query.page(),
        per_page: page.per_page,
    }))
}

/// Get author by ID
#[utoipa::path(
    get,
    path = "/authors/{id}",
    tag = "authors",
    security(("bearer_auth" = [])),
    params(
        ("id" = i64, Path, description = "Author ID")
    ),
    responses(
        (status = 200, description = "Author details", body = Author),
        (status = 404, description = "Author not found")
    )
)]
pub async fn get_author(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i64>,
) -> AppResult<Json<Author>> {
    let author = state.services.authors.find_by_id(id).await?;
    Ok(Json(author))
}

/// Create a new author
#[utoipa::path(
    post,
    path = "/authors",
    tag = "authors",
    security(("bearer_auth" = [])),
    request_body = Author,
    responses(
        (status = 201, description = "Author created", body = Author),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_author(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Json(author): Json<Author>,
) -> AppResult<(StatusCode, Json<Author>)> {
    author.validate()?;

    let created = state.services.authors.create(&author).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update an existing author
#[utoipa::path(
    put,
    path = "/authors/{id}",
    tag = "authors",
    security(("bearer_auth" = [])),
    params(
        ("id" = i64, Path, description = "Author ID")
    ),
    request_body = Author,
    responses(
        (status = 200, description = "Author updated", body = Author),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn update_author(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i64>,
    Json(mut author): Json<Author>,
) -> AppResult<Json<Author>> {
    author.id = Some(id);
    author.validate()?;

    let updated = state.services.authors.update(&author).await?;
    Ok(Json(updated))
}

/// Delete an author
#[utoipa::path(
    delete,
    path = "/authors/{id}",
    tag = "authors",
    security(("bearer_auth" = [])),
    params(
        ("id" = i64, Path, description = "Author ID")
    ),
    responses(
        (status = 204, description = "Author deleted"),
        (status = 404, description = "Author not found"),
        (status = 409, description = "Author is still referenced by books")
    )
)]
pub async fn delete_author(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.authors.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
