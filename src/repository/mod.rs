//! Repository layer for database operations

pub mod authors;
pub mod books;
pub mod categories;
pub mod publishers;
pub mod users;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{error::AppResult, models::Identified};

/// Uniform persistence contract shared by the four catalog entities.
///
/// Listing order is the stable storage order (id ascending); pagination
/// slices are computed against that same order.
#[async_trait]
pub trait EntityRepository: Send + Sync {
    type Entity: Identified + Send + Sync + 'static;

    async fn find_all(&self) -> AppResult<Vec<Self::Entity>>;
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Self::Entity>>;
    async fn insert(&self, entity: &Self::Entity) -> AppResult<Self::Entity>;
    async fn update(&self, entity: &Self::Entity) -> AppResult<Self::Entity>;
    async fn delete_by_id(&self, id: i64) -> AppResult<()>;
}

/// Free-text lookup over an entity's name column.
#[async_trait]
pub trait SearchRepository: EntityRepository {
    async fn search(&self, keyword: &str) -> AppResult<Vec<Self::Entity>>;
}

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub books: books::BooksRepository,
    pub authors: authors::AuthorsRepository,
    pub categories: categories::CategoriesRepository,
    pub publishers: publishers::PublishersRepository,
    pub users: users::UsersRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            books: books::BooksRepository::new(pool.clone()),
            authors: authors::AuthorsRepository::new(pool.clone()),
            categories: categories::CategoriesRepository::new(pool.clone()),
            publishers: publishers::PublishersRepository::new(pool.clone()),
            users: users::UsersRepository::new(pool.clone()),
            pool,
        }
    }
}
