//! Run step model: one unit of work within a run.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use sqlhub_core::types::{DbId, Timestamp};

/// A row from the `run_steps` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct RunStep {
    pub id: DbId,
    pub run_id: DbId,
    pub step_name: String,
    pub status: String,
    pub started_at: Timestamp,
    pub completed_at: Option<Timestamp>,
    pub details: Option<String>,
}

/// DTO for starting a new run step.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRunStep {
    pub run_id: DbId,
    pub step_name: String,
}
