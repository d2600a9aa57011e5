//! Registered server model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use sqlhub_core::types::{DbId, Timestamp};

/// A row from the `servers` table.
///
/// `password` is stored as provided by the operator; protecting it at rest
/// is handled outside the hub.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Server {
    pub id: DbId,
    pub name: String,
    pub host: String,
    pub instance_name: Option<String>,
    pub port: Option<i32>,
    pub use_integrated_security: bool,
    pub username: Option<String>,
    #[serde(skip_serializing)]
    pub password: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for registering a new server.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateServer {
    #[validate(length(min = 1, max = 128))]
    pub name: String,
    #[validate(length(min = 1, max = 255))]
    pub host: String,
    pub instance_name: Option<String>,
    #[validate(range(min = 1, max = 65535))]
    pub port: Option<i32>,
    pub use_integrated_security: Option<bool>,
    pub username: Option<String>,
    pub password: Option<String>,
}

/// DTO for updating a registered server.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateServer {
    #[validate(length(min = 1, max = 128))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub host: Option<String>,
    pub instance_name: Option<String>,
    #[validate(range(min = 1, max = 65535))]
    pub port: Option<i32>,
    pub use_integrated_security: Option<bool>,
    pub username: Option<String>,
    pub password: Option<String>,
}
