//! Maintenance run model.
//!
//! A run is inserted as `running` when an operation begins and updated to a
//! terminal status exactly once when it finishes. Rows are never deleted by
//! the executor; retention is an external concern.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use sqlhub_core::types::{DbId, Timestamp};

/// A row from the `runs` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Run {
    pub id: DbId,
    pub server_id: DbId,
    pub target_id: Option<DbId>,
    pub run_kind: String,
    pub status: String,
    pub started_at: Timestamp,
    pub completed_at: Option<Timestamp>,
    pub message: Option<String>,
}

/// DTO for starting a new run.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRun {
    pub server_id: DbId,
    pub target_id: Option<DbId>,
    pub run_kind: String,
}
