//! Author model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Person or collective credited for books in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema, Validate)]
pub struct Author {
    pub id: Option<i64>,
    #[validate(length(min = 1, message = "name must not be blank"))]
    pub name: String,
    pub description: Option<String>,
}

impl super::Identified for Author {
    fn id(&self) -> Option<i64> {
        self.id
    }
}
