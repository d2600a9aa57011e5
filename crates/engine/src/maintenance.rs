//! Maintenance execution and run ledger orchestration.
//!
//! Lifecycle per invocation: insert a run (running), insert its step
//! (running), execute the script against the target, then persist the step
//! outcome followed by the run outcome. Script failures never propagate —
//! the returned run carries the failed status and the error text, and
//! operators discover failures through run history. Only hub-side ledger
//! failures and cancellation surface as errors.
//!
//! The lifecycle runs on its own task, so a caller that stops waiting
//! (request timeout, dropped connection) never strands a run in the
//! running state: the terminal ledger updates still land.
//!
//! Two simultaneous operations on the same target are not coordinated
//! here; each call owns its run/step rows and its own connection.

use chrono::Utc;
use tokio_util::sync::CancellationToken;

use sqlhub_core::run_types::{RunKind, RunStatus};
use sqlhub_db::models::run::{CreateRun, Run};
use sqlhub_db::models::run_step::CreateRunStep;
use sqlhub_db::models::server::Server;
use sqlhub_db::models::target::Target;

use crate::error::{EngineError, TargetError};
use crate::ledger::RunLedger;
use crate::target::{resolve_target, TargetExecutor};

/// Rebuild every index in the target database.
pub const REBUILD_INDEXES_SCRIPT: &str = "REINDEX DATABASE;";
pub const REBUILD_INDEXES_LABEL: &str = "Rebuild indexes";

/// Refresh planner statistics for the target database.
pub const UPDATE_STATISTICS_SCRIPT: &str = "ANALYZE;";
pub const UPDATE_STATISTICS_LABEL: &str = "Update statistics";

/// Verify index consistency via amcheck.
pub const CHECK_DB_SCRIPT: &str = "\
CREATE EXTENSION IF NOT EXISTS amcheck;
SELECT bt_index_check(i.indexrelid)
FROM pg_index i
JOIN pg_class c ON c.oid = i.indexrelid
JOIN pg_namespace n ON n.oid = c.relnamespace
JOIN pg_am am ON am.oid = c.relam
WHERE n.nspname NOT IN ('pg_catalog', 'pg_toast') AND am.amname = 'btree';";
pub const CHECK_DB_LABEL: &str = "CHECKDB";

/// Orchestrates maintenance scripts against registered targets.
pub struct MaintenanceExecutor<L, X> {
    ledger: L,
    executor: X,
}

impl<L, X> MaintenanceExecutor<L, X>
where
    L: RunLedger + Clone + 'static,
    X: TargetExecutor + Clone + 'static,
{
    pub fn new(ledger: L, executor: X) -> Self {
        Self { ledger, executor }
    }

    /// Rebuild all indexes in the target database.
    pub async fn rebuild_indexes(
        &self,
        server: &Server,
        target: &Target,
        cancel: &CancellationToken,
    ) -> Result<Run, EngineError> {
        self.execute_maintenance(
            server,
            target,
            RunKind::IndexRebuild,
            REBUILD_INDEXES_SCRIPT,
            REBUILD_INDEXES_LABEL,
            cancel,
        )
        .await
    }

    /// Refresh planner statistics in the target database.
    pub async fn update_statistics(
        &self,
        server: &Server,
        target: &Target,
        cancel: &CancellationToken,
    ) -> Result<Run, EngineError> {
        self.execute_maintenance(
            server,
            target,
            RunKind::UpdateStatistics,
            UPDATE_STATISTICS_SCRIPT,
            UPDATE_STATISTICS_LABEL,
            cancel,
        )
        .await
    }

    /// Run a consistency check over the target database.
    pub async fn run_check_db(
        &self,
        server: &Server,
        target: &Target,
        cancel: &CancellationToken,
    ) -> Result<Run, EngineError> {
        self.execute_maintenance(
            server,
            target,
            RunKind::CheckDb,
            CHECK_DB_SCRIPT,
            CHECK_DB_LABEL,
            cancel,
        )
        .await
    }

    /// Execute one maintenance script, recording the full run lifecycle.
    ///
    /// The lifecycle is spawned onto its own task and awaited, so dropping
    /// the returned future (a caller that times out or disconnects) leaves
    /// the task running to completion and the ledger consistent.
    ///
    /// Returns the finished run; its status reflects the actual outcome.
    /// There are no retries and no dedup — invoking this twice creates two
    /// independent run/step pairs.
    pub async fn execute_maintenance(
        &self,
        server: &Server,
        target: &Target,
        kind: RunKind,
        script: &str,
        step_label: &str,
        cancel: &CancellationToken,
    ) -> Result<Run, EngineError> {
        let task = tokio::spawn(run_lifecycle(
            self.ledger.clone(),
            self.executor.clone(),
            server.clone(),
            target.clone(),
            kind,
            script.to_string(),
            step_label.to_string(),
            cancel.clone(),
        ));
        task.await
            .map_err(|e| EngineError::Execution(format!("maintenance task failed: {e}")))?
    }
}

async fn run_lifecycle<L: RunLedger, X: TargetExecutor>(
    ledger: L,
    executor: X,
    server: Server,
    target: Target,
    kind: RunKind,
    script: String,
    step_label: String,
    cancel: CancellationToken,
) -> Result<Run, EngineError> {
    let descriptor = resolve_target(&server, &target.database_name);

    let run = ledger
        .insert_run(&CreateRun {
            server_id: server.id,
            target_id: Some(target.id),
            run_kind: kind.as_str().to_string(),
        })
        .await?;
    let step = ledger
        .insert_step(&CreateRunStep {
            run_id: run.id,
            step_name: step_label,
        })
        .await?;

    tracing::info!(
        run_id = run.id,
        kind = kind.as_str(),
        server = %server.name,
        database = %target.database_name,
        "Maintenance run started"
    );

    let outcome = executor.execute_batch(&descriptor, &script, &cancel).await;
    let completed_at = Utc::now();

    match outcome {
        Ok(rows_affected) => {
            tracing::info!(run_id = run.id, rows_affected, "Maintenance run succeeded");
            // Step terminal update must land before the run's.
            ledger
                .finish_step(step.id, RunStatus::Succeeded, completed_at, None)
                .await?;
            ledger
                .finish_run(run.id, RunStatus::Succeeded, completed_at, None)
                .await?
                .ok_or(EngineError::Ledger(sqlx::Error::RowNotFound))
        }
        Err(TargetError::Cancelled) => {
            // Best-effort failure-path updates before propagating.
            let message = EngineError::Cancelled.to_string();
            if let Err(e) = ledger
                .finish_step(step.id, RunStatus::Failed, completed_at, Some(&message))
                .await
            {
                tracing::warn!(run_id = run.id, error = %e, "Step update lost on cancel");
            }
            if let Err(e) = ledger
                .finish_run(run.id, RunStatus::Failed, completed_at, Some(&message))
                .await
            {
                tracing::warn!(run_id = run.id, error = %e, "Run update lost on cancel");
            }
            Err(EngineError::Cancelled)
        }
        Err(err) => {
            // Swallow and record: the run itself is the failure signal.
            let message = err.to_string();
            tracing::warn!(run_id = run.id, error = %message, "Maintenance run failed");
            ledger
                .finish_step(step.id, RunStatus::Failed, completed_at, Some(&message))
                .await?;
            ledger
                .finish_run(run.id, RunStatus::Failed, completed_at, Some(&message))
                .await?
                .ok_or(EngineError::Ledger(sqlx::Error::RowNotFound))
        }
    }
}
