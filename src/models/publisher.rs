//! Publisher model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Publishing house referenced by catalog entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema, Validate)]
pub struct Publisher {
    pub id: Option<i64>,
    #[validate(length(min = 1, message = "name must not be blank"))]
    pub name: String,
}

impl super::Identified for Publisher {
    fn id(&self) -> Option<i64> {
        self.id
    }
}
