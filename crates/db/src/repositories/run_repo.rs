//! Repository for the `runs` table.
//!
//! A run is inserted as `running` and mutated exactly once more, to a
//! terminal status via [`RunRepo::finish`]. Rows are never deleted here.

use sqlx::PgPool;

use sqlhub_core::run_types::{RunStatus, STATUS_RUNNING};
use sqlhub_core::types::{DbId, Timestamp};

use crate::models::run::{CreateRun, Run};

/// Column list for `runs` queries.
const COLUMNS: &str =
    "id, server_id, target_id, run_kind, status, started_at, completed_at, message";

/// Provides ledger operations for maintenance runs.
pub struct RunRepo;

impl RunRepo {
    /// Start a new run with status `running`, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateRun) -> Result<Run, sqlx::Error> {
        let query = format!(
            "INSERT INTO runs (server_id, target_id, run_kind, status) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Run>(&query)
            .bind(input.server_id)
            .bind(input.target_id)
            .bind(&input.run_kind)
            .bind(STATUS_RUNNING)
            .fetch_one(pool)
            .await
    }

    /// Record the terminal outcome of a run.
    pub async fn finish(
        pool: &PgPool,
        id: DbId,
        status: RunStatus,
        completed_at: Timestamp,
        message: Option<&str>,
    ) -> Result<Option<Run>, sqlx::Error> {
        let query = format!(
            "UPDATE runs SET status = $2, completed_at = $3, message = $4 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Run>(&query)
            .bind(id)
            .bind(status.as_str())
            .bind(completed_at)
            .bind(message)
            .fetch_optional(pool)
            .await
    }

    /// Find a run by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Run>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM runs WHERE id = $1");
        sqlx::query_as::<_, Run>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List recent runs, newest first.
    pub async fn list_recent(pool: &PgPool, limit: i64) -> Result<Vec<Run>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM runs ORDER BY started_at DESC LIMIT $1");
        sqlx::query_as::<_, Run>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
