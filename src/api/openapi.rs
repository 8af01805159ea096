//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{auth, authors, books, categories, export, health, publishers};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Libris API",
        version = "1.0.0",
        description = "Library Catalog REST API",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT"),
        contact(name = "Libris Team", email = "contact@libris.local")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::login,
        auth::me,
        // Books
        books::list_books,
        books::search_books,
        books::get_book,
        books::create_book,
        books::update_book,
        books::delete_book,
        // Authors
        authors::list_authors,
        authors::get_author,
        authors::create_author,
        authors::update_author,
        authors::delete_author,
        // Categories
        categories::list_categories,
        categories::get_category,
        categories::create_category,
        categories::update_category,
        categories::delete_category,
        // Publishers
        publishers::list_publishers,
        publishers::get_publisher,
        publishers::create_publisher,
        publishers::update_publisher,
        publishers::delete_publisher,
        // Export
        export::export_collection,
    ),
    components(
        schemas(
            // Auth
            auth::LoginRequest,
            auth::LoginResponse,
            auth::UserInfo,
            // Catalog
            crate::models::Book,
            crate::models::Author,
            crate::models::Category,
            crate::models::Publisher,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Authentication endpoints"),
        (name = "books", description = "Book catalog management"),
        (name = "authors", description = "Author management"),
        (name = "categories", description = "Category management"),
        (name = "publishers", description = "Publisher management"),
        (name = "export", description = "CSV exports")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
