//! Saved query model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use sqlhub_core::types::{DbId, Timestamp};

/// A row from the `saved_queries` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct SavedQuery {
    pub id: DbId,
    pub folder_id: Option<DbId>,
    pub name: String,
    pub sql_text: String,
    pub description: Option<String>,
    pub is_favorite: bool,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
}

/// DTO for creating a saved query. Also the export/import interchange shape.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateSavedQuery {
    pub folder_id: Option<DbId>,
    #[validate(length(min = 1, max = 256))]
    pub name: String,
    #[validate(length(min = 1))]
    pub sql_text: String,
    pub description: Option<String>,
    pub is_favorite: Option<bool>,
}

/// DTO for updating a saved query.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateSavedQuery {
    pub folder_id: Option<DbId>,
    #[validate(length(min = 1, max = 256))]
    pub name: Option<String>,
    #[validate(length(min = 1))]
    pub sql_text: Option<String>,
    pub description: Option<String>,
    pub is_favorite: Option<bool>,
}
