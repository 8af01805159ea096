//! Business logic services

pub mod auth;
pub mod crud;
pub mod export;

use crate::{config::AuthConfig, repository::Repository};

pub use crud::{AuthorService, BookService, CategoryService, CrudService, PublisherService};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub books: BookService,
    pub authors: AuthorService,
    pub categories: CategoryService,
    pub publishers: PublisherService,
    pub export: export::ExportService,
    pub auth: auth::AuthService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, auth_config: AuthConfig) -> Self {
        let books = CrudService::new(repository.books.clone(), "Book");
        let authors = CrudService::new(repository.authors.clone(), "Author");
        let categories = CrudService::new(repository.categories.clone(), "Category");
        let publishers = CrudService::new(repository.publishers.clone(), "Publisher");

        Self {
            export: export::ExportService::new(
                books.clone(),
                authors.clone(),
                categories.clone(),
                publishers.clone(),
            ),
            auth: auth::AuthService::new(repository.users, auth_config),
            books,
            authors,
            categories,
            publishers,
        }
    }
}
