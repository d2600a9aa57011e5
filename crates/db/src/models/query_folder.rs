//! Saved-query folder model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use sqlhub_core::types::DbId;

/// A row from the `query_folders` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct QueryFolder {
    pub id: DbId,
    pub name: String,
}

/// DTO for creating or renaming a folder.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateQueryFolder {
    #[validate(length(min = 1, max = 128))]
    pub name: String,
}
