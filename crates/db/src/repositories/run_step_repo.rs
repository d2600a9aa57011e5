//! Repository for the `run_steps` table.

use sqlx::PgPool;

use sqlhub_core::run_types::{RunStatus, STATUS_RUNNING};
use sqlhub_core::types::{DbId, Timestamp};

use crate::models::run_step::{CreateRunStep, RunStep};

/// Column list for `run_steps` queries.
const COLUMNS: &str = "id, run_id, step_name, status, started_at, completed_at, details";

/// Provides ledger operations for run steps.
pub struct RunStepRepo;

impl RunStepRepo {
    /// Start a new step with status `running`, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateRunStep) -> Result<RunStep, sqlx::Error> {
        let query = format!(
            "INSERT INTO run_steps (run_id, step_name, status) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RunStep>(&query)
            .bind(input.run_id)
            .bind(&input.step_name)
            .bind(STATUS_RUNNING)
            .fetch_one(pool)
            .await
    }

    /// Record the terminal outcome of a step.
    pub async fn finish(
        pool: &PgPool,
        id: DbId,
        status: RunStatus,
        completed_at: Timestamp,
        details: Option<&str>,
    ) -> Result<Option<RunStep>, sqlx::Error> {
        let query = format!(
            "UPDATE run_steps SET status = $2, completed_at = $3, details = $4 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RunStep>(&query)
            .bind(id)
            .bind(status.as_str())
            .bind(completed_at)
            .bind(details)
            .fetch_optional(pool)
            .await
    }

    /// List the steps of a run in start order.
    pub async fn list_by_run(pool: &PgPool, run_id: DbId) -> Result<Vec<RunStep>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM run_steps WHERE run_id = $1 ORDER BY started_at"
        );
        sqlx::query_as::<_, RunStep>(&query)
            .bind(run_id)
            .fetch_all(pool)
            .await
    }
}
