//! Registered database target model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use sqlhub_core::types::{DbId, Timestamp};

/// A row from the `targets` table: one database on one registered server.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Target {
    pub id: DbId,
    pub server_id: DbId,
    pub database_name: String,
    pub is_active: bool,
    pub tags: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for registering a new target.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTarget {
    pub server_id: DbId,
    #[validate(length(min = 1, max = 128))]
    pub database_name: String,
    pub is_active: Option<bool>,
    pub tags: Option<String>,
}

/// DTO for updating a target.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTarget {
    #[validate(length(min = 1, max = 128))]
    pub database_name: Option<String>,
    pub is_active: Option<bool>,
    pub tags: Option<String>,
}
