//! Operator note model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use sqlhub_core::types::{DbId, Timestamp};

/// A row from the `notes` table, optionally pinned to a server or target.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Note {
    pub id: DbId,
    pub server_id: Option<DbId>,
    pub target_id: Option<DbId>,
    pub title: String,
    pub body: String,
    pub created_by: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a note.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateNote {
    pub server_id: Option<DbId>,
    pub target_id: Option<DbId>,
    #[validate(length(min = 1, max = 256))]
    pub title: String,
    pub body: String,
    pub created_by: Option<String>,
}

/// DTO for updating a note.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateNote {
    #[validate(length(min = 1, max = 256))]
    pub title: Option<String>,
    pub body: Option<String>,
}
