//! Category model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Shelving category.
///
/// `name` carries no blank check; empty categories are accepted and stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Category {
    pub id: Option<i64>,
    pub name: String,
}

impl super::Identified for Category {
    fn id(&self) -> Option<i64> {
        self.id
    }
}
