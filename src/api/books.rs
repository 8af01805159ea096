//! Book catalog endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use validator::Validate;

use crate::{error::AppResult, models::Book};

use super::{AuthenticatedUser, PageQuery, PaginatedResponse};

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub keyword: Option<String>,
}

/// List books with pagination
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    security(("bearer_auth" = [])),
    params(
        ("page" = Option<usize>, Query, description = "Page number, 1-based (default: 1)"),
        ("size" = Option<usize>, Query, description = "Items per page (default: 20)")
    ),
    responses(
        (status = 200, description = "One page of books", body = PaginatedResponse<Book>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Query(query): Query<PageQuery>,
) -> AppResult<Json<PaginatedResponse<Book>>> {
    let page = state
        .services
        .books
        .find_paginated(query.page() - 1, query.size())
        .await?;

    Ok(Json(PaginatedResponse {
        items: page.content,
        total: page.total_elements,
        page: query.page(),
        per_page: page.per_page,
    }))
}

/// Search books by name
#[utoipa::path(
    get,
    path = "/books/search",
    tag = "books",
    security(("bearer_auth" = [])),
    params(
        ("keyword" = Option<String>, Query, description = "Substring to match in book names; empty lists everything")
    ),
    responses(
        (status = 200, description = "Matching books", body = Vec<Book>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn search_books(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.books.search(query.keyword.as_deref()).await?;
    Ok(Json(books))
}

/// Get book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    security(("bearer_auth" = [])),
    params(
        ("id" = i64, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i64>,
) -> AppResult<Json<Book>> {
    let book = state.services.books.find_by_id(id).await?;
    Ok(Json(book))
}

/// Create a new book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    security(("bearer_auth" = [])),
    request_body = Book,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Invalid input"),
        (status = 409, description = "Book conflicts with existing data")
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Json(book): Json<Book>,
) -> AppResult<(StatusCode, Json<Book>)> {
    book.validate()?;

    let created = state.services.books.create(&book).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update an existing book
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    security(("bearer_auth" = [])),
    params(
        ("id" = i64, Path, description = "Book ID")
    ),
    request_body = Book,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i64>,
    Json(mut book): Json<Book>,
) -> AppResult<Json<Book>> {
    // The path owns the identity; any id in the body is replaced.
    book.id = Some(id);
    book.validate()?;

    let updated = state.services.books.update(&book).await?;
    Ok(Json(updated))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    security(("bearer_auth" = [])),
    params(
        ("id" = i64, Path, description = "Book ID")
    ),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.books.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
