//! Ad-hoc query execution with safe-mode guarding and history logging.

use std::time::Instant;

use tokio_util::sync::CancellationToken;

use sqlhub_core::results::QueryResults;
use sqlhub_core::safe_mode;
use sqlhub_core::types::DbId;
use sqlhub_db::models::query_run::{CreateQueryRun, QueryRun};
use sqlhub_db::models::server::Server;
use sqlhub_db::models::target::Target;

use crate::error::{EngineError, TargetError};
use crate::ledger::QueryLog;
use crate::target::{resolve_target, TargetExecutor};

/// Executes operator-submitted statements against registered targets.
///
/// Unlike maintenance runs, query failures are logged to history and then
/// re-raised, so the caller sees the actual error. Statements rejected by
/// safe mode never reach a target and leave no history entry.
pub struct QueryExecutor<Q, X> {
    log: Q,
    executor: X,
}

impl<Q: QueryLog, X: TargetExecutor> QueryExecutor<Q, X> {
    pub fn new(log: Q, executor: X) -> Self {
        Self { log, executor }
    }

    pub async fn execute_query(
        &self,
        server: &Server,
        target: &Target,
        sql: &str,
        saved_query_id: Option<DbId>,
        safe_mode_enabled: bool,
        cancel: &CancellationToken,
    ) -> Result<(QueryResults, QueryRun), EngineError> {
        if safe_mode::is_blocked(sql, safe_mode_enabled) {
            tracing::warn!(server = %server.name, "Statement blocked by safe mode");
            return Err(EngineError::BlockedByPolicy);
        }

        let descriptor = resolve_target(server, &target.database_name);
        let started = Instant::now();
        let outcome = self.executor.fetch_rows(&descriptor, sql, cancel).await;
        let duration_ms = started.elapsed().as_millis() as i32;

        match outcome {
            Ok(results) => {
                let entry = self
                    .log
                    .log(&CreateQueryRun {
                        saved_query_id,
                        target_id: Some(target.id),
                        duration_ms,
                        row_count: results.row_count(),
                        error: None,
                    })
                    .await?;
                tracing::info!(
                    query_run_id = entry.id,
                    duration_ms,
                    row_count = entry.row_count,
                    "Query executed"
                );
                Ok((results, entry))
            }
            Err(err) => {
                // Log first, then re-raise with the original error.
                let message = match &err {
                    TargetError::Cancelled => EngineError::Cancelled.to_string(),
                    other => other.to_string(),
                };
                if let Err(e) = self
                    .log
                    .log(&CreateQueryRun {
                        saved_query_id,
                        target_id: Some(target.id),
                        duration_ms,
                        row_count: 0,
                        error: Some(message.clone()),
                    })
                    .await
                {
                    tracing::warn!(error = %e, "Query history entry lost");
                }
                tracing::warn!(duration_ms, error = %message, "Query failed");
                Err(err.into())
            }
        }
    }
}
