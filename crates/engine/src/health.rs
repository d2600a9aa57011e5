//! Read-only server health insights.
//!
//! Canned diagnostic statements run against a server's admin database.
//! All three are plain SELECTs, so they pass the safe-mode guard and leave
//! no run-ledger rows.

use tokio_util::sync::CancellationToken;

use sqlhub_core::results::QueryResults;
use sqlhub_db::models::server::Server;

use crate::error::TargetError;
use crate::target::{resolve_target, TargetExecutor};

const BLOCKING_SESSIONS_SQL: &str = "\
SELECT blocked.pid AS blocked_pid,
       blocked.usename AS blocked_user,
       blocked.query AS blocked_query,
       blocking.pid AS blocking_pid,
       blocking.usename AS blocking_user,
       blocking.query AS blocking_query
FROM pg_stat_activity blocked
JOIN LATERAL unnest(pg_blocking_pids(blocked.pid)) AS b(pid) ON true
JOIN pg_stat_activity blocking ON blocking.pid = b.pid
ORDER BY blocked.pid;";

const DATABASE_SIZES_SQL: &str = "\
SELECT datname AS database_name,
       pg_database_size(datname)::FLOAT8 AS size_bytes
FROM pg_database
WHERE NOT datistemplate
ORDER BY pg_database_size(datname) DESC;";

// Requires the pg_stat_statements extension on the target server.
const TOP_QUERIES_SQL: &str = "\
SELECT query,
       calls,
       total_exec_time::FLOAT8 AS total_ms,
       mean_exec_time::FLOAT8 AS mean_ms,
       rows
FROM pg_stat_statements
ORDER BY total_exec_time DESC
LIMIT 20;";

/// Runs diagnostic queries against a server's admin database.
pub struct HealthInspector<X> {
    executor: X,
    admin_database: String,
}

impl<X: TargetExecutor> HealthInspector<X> {
    pub fn new(executor: X, admin_database: impl Into<String>) -> Self {
        Self {
            executor,
            admin_database: admin_database.into(),
        }
    }

    /// Sessions currently waiting on locks, paired with their blockers.
    pub async fn blocking_sessions(
        &self,
        server: &Server,
        cancel: &CancellationToken,
    ) -> Result<QueryResults, TargetError> {
        self.inspect(server, BLOCKING_SESSIONS_SQL, cancel).await
    }

    /// Per-database on-disk sizes, largest first.
    pub async fn database_sizes(
        &self,
        server: &Server,
        cancel: &CancellationToken,
    ) -> Result<QueryResults, TargetError> {
        self.inspect(server, DATABASE_SIZES_SQL, cancel).await
    }

    /// Most expensive statements by cumulative execution time.
    pub async fn top_queries(
        &self,
        server: &Server,
        cancel: &CancellationToken,
    ) -> Result<QueryResults, TargetError> {
        self.inspect(server, TOP_QUERIES_SQL, cancel).await
    }

    async fn inspect(
        &self,
        server: &Server,
        sql: &str,
        cancel: &CancellationToken,
    ) -> Result<QueryResults, TargetError> {
        let descriptor = resolve_target(server, &self.admin_database);
        tracing::debug!(server = %server.name, "Running health inspection");
        self.executor.fetch_rows(&descriptor, sql, cancel).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    use sqlhub_core::results::CellValue;

    use crate::test_support::{sample_server, MockExecutor, Outcome};

    #[tokio::test]
    async fn inspection_returns_executor_rows() {
        let results = QueryResults {
            columns: vec!["database_name".into(), "size_bytes".into()],
            rows: vec![vec![
                CellValue::Text("inventory".into()),
                CellValue::Float(8_192_000.0),
            ]],
        };
        let inspector = HealthInspector::new(MockExecutor::new(Outcome::Rows(results)), "postgres");
        let cancel = CancellationToken::new();

        let sizes = inspector
            .database_sizes(&sample_server(), &cancel)
            .await
            .unwrap();
        assert_eq!(sizes.row_count(), 1);
        assert_eq!(sizes.columns[0], "database_name");
    }

    #[tokio::test]
    async fn unreachable_server_surfaces_connection_error() {
        let inspector = HealthInspector::new(
            MockExecutor::new(Outcome::ConnectionError("refused".into())),
            "postgres",
        );
        let cancel = CancellationToken::new();

        let err = inspector
            .blocking_sessions(&sample_server(), &cancel)
            .await
            .unwrap_err();
        assert_matches!(err, TargetError::Connection(_));
    }
}
