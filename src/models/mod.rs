//! Data models for Libris

pub mod author;
pub mod book;
pub mod category;
pub mod page;
pub mod publisher;
pub mod user;

/// Surrogate-identity access shared by the catalog entities.
/// `None` marks a record storage has not assigned an id to yet.
pub trait Identified {
    fn id(&self) -> Option<i64>;
}

// Re-export commonly used types
pub use author::Author;
pub use book::Book;
pub use category::Category;
pub use page::Page;
pub use publisher::Publisher;
pub use user::{Principal, Role, User, UserClaims};
