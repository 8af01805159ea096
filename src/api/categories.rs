//! Category endpoints
//!
//! Category payloads are accepted as-is; there is no blank-name check on
//! this entity, unlike books, authors and publishers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{error::AppResult, models::Category};

use super::{AuthenticatedUser, PageQuery, PaginatedResponse};

/// List categories with pagination
#[utoipa::path(
    get,
    path = "/categories",
    tag = "categories",
    security(("bearer_auth" = [])),
    params(
        ("page" = Option<usize>, Query, description = "Page number, 1-based (default: 1)"),
        ("size" = Option<usize>, Query, description = "Items per page (default: 20)")
    ),
    responses(
        (status = 200, description = "One page of categories", body = PaginatedResponse<Category>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_categories(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Query(query): Query<PageQuery>,
) -> AppResult<Json<PaginatedResponse<Category>>> {
    let page = state
        .services
        .categories
        .find_paginated(query.page() - 1, query.size())
        .await?;

    Ok(Json(PaginatedResponse {
        items: page.content,
        total: page.total_elements,
        page: query.page(),
        per_page: page.per_page,
    }))
}

/// Get category by ID
#[utoipa::path(
    get,
    path = "/categories/{id}",
    tag = "categories",
    security(("bearer_auth" = [])),
    params(
        ("id" = i64, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category details", body = Category),
        (status = 404, description = "Category not found")
    )
)]
pub async fn get_category(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i64>,
) -> AppResult<Json<Category>> {
    let category = state.services.categories.find_by_id(id).await?;
    Ok(Json(category))
}

/// Create a new category
#[utoipa::path(
    post,
    path = "/categories",
    tag = "categories",
    security(("bearer_auth" = [])),
    request_body = Category,
    responses(
        (status = 201, description = "Category created", body = Category)
    )
)]
pub async fn create_category(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Json(category): Json<Category>,
) -> AppResult<(StatusCode, Json<Category>)> {
    let created = state.services.categories.create(&category).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update an existing category
#[utoipa::path(
    put,
    path = "/categories/{id}",
    tag = "categories",
    security(("bearer_auth" = [])),
    params(
        ("id" = i64, Path, description = "Category ID")
    ),
    request_body = Category,
    responses(
        (status = 200, description = "Category updated", body = Category)
    )
)]
pub async fn update_category(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i64>,
    Json(mut category): Json<Category>,
) -> AppResult<Json<Category>> {
    category.id = Some(id);

    let updated = state.services.categories.update(&category).await?;
    Ok(Json(updated))
}

/// Delete a category
#[utoipa::path(
    delete,
    path = "/categories/{id}",
    tag = "categories",
    security(("bearer_auth" = [])),
    params(
        ("id" = i64, Path, description = "Category ID")
    ),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 404, description = "Category not found"),
        (status = 409, description = "Category is still referenced by books")
    )
)]
pub async fn delete_category(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.categories.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
