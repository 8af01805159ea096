//! Book model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Catalog entry for a single book title.
///
/// One shape serves storage rows and request payloads: `id` is absent on
/// create (storage assigns it) and mandatory on update, which replaces the
/// full row as sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema, Validate)]
pub struct Book {
    pub id: Option<i64>,
    #[validate(length(min = 1, message = "isbn must not be blank"))]
    pub isbn: String,
    #[validate(length(min = 1, message = "name must not be blank"))]
    pub name: String,
    pub serial_name: Option<String>,
    pub description: Option<String>,
}

impl super::Identified for Book {
    fn id(&self) -> Option<i64> {
        self.id
    }
}
