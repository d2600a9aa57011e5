//! In-memory fakes for the ledger and target executor traits.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tokio_util::sync::CancellationToken;

use sqlhub_core::connection::ConnectionDescriptor;
use sqlhub_core::results::QueryResults;
use sqlhub_core::run_types::{RunStatus, STATUS_RUNNING};
use sqlhub_core::types::{DbId, Timestamp};
use sqlhub_db::models::query_run::{CreateQueryRun, QueryRun};
use sqlhub_db::models::run::{CreateRun, Run};
use sqlhub_db::models::run_step::{CreateRunStep, RunStep};
use sqlhub_db::models::server::Server;
use sqlhub_db::models::target::Target;

use crate::error::TargetError;
use crate::ledger::{QueryLog, RunLedger};
use crate::target::TargetExecutor;

pub fn sample_server() -> Server {
    Server {
        id: 7,
        name: "prod".into(),
        host: "db01".into(),
        instance_name: None,
        port: Some(5432),
        use_integrated_security: false,
        username: Some("ops".into()),
        password: Some("secret".into()),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn sample_target() -> Target {
    Target {
        id: 11,
        server_id: 7,
        database_name: "inventory".into(),
        is_active: true,
        tags: None,
        created_at: Utc::now(),
    }
}

#[derive(Default)]
struct LedgerState {
    runs: Mutex<Vec<Run>>,
    steps: Mutex<Vec<RunStep>>,
    entries: Mutex<Vec<QueryRun>>,
    call_log: Mutex<Vec<&'static str>>,
    fail_inserts: bool,
}

/// Ledger fake that assigns ids in memory and records call order.
///
/// Clones share state, so a test can keep a handle while the executor
/// owns another.
#[derive(Clone, Default)]
pub struct MockLedger {
    state: Arc<LedgerState>,
}

impl MockLedger {
    pub fn failing_inserts() -> Self {
        Self {
            state: Arc::new(LedgerState {
                fail_inserts: true,
                ..LedgerState::default()
            }),
        }
    }

    pub fn snapshot(&self) -> (Vec<Run>, Vec<RunStep>) {
        (
            self.state.runs.lock().unwrap().clone(),
            self.state.steps.lock().unwrap().clone(),
        )
    }

    pub fn entries(&self) -> Vec<QueryRun> {
        self.state.entries.lock().unwrap().clone()
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.state.call_log.lock().unwrap().clone()
    }

    fn record(&self, call: &'static str) {
        self.state.call_log.lock().unwrap().push(call);
    }
}

#[async_trait]
impl RunLedger for MockLedger {
    async fn insert_run(&self, input: &CreateRun) -> Result<Run, sqlx::Error> {
        self.record("insert_run");
        if self.state.fail_inserts {
            return Err(sqlx::Error::PoolClosed);
        }
        let mut runs = self.state.runs.lock().unwrap();
        let run = Run {
            id: runs.len() as DbId + 1,
            server_id: input.server_id,
            target_id: input.target_id,
            run_kind: input.run_kind.clone(),
            status: STATUS_RUNNING.to_string(),
            started_at: Utc::now(),
            completed_at: None,
            message: None,
        };
        runs.push(run.clone());
        Ok(run)
    }

    async fn finish_run(
        &self,
        id: DbId,
        status: RunStatus,
        completed_at: Timestamp,
        message: Option<&str>,
    ) -> Result<Option<Run>, sqlx::Error> {
        self.record("finish_run");
        let mut runs = self.state.runs.lock().unwrap();
        Ok(runs.iter_mut().find(|r| r.id == id).map(|run| {
            run.status = status.as_str().to_string();
            run.completed_at = Some(completed_at);
            run.message = message.map(str::to_string);
            run.clone()
        }))
    }

    async fn insert_step(&self, input: &CreateRunStep) -> Result<RunStep, sqlx::Error> {
        self.record("insert_step");
        if self.state.fail_inserts {
            return Err(sqlx::Error::PoolClosed);
        }
        let mut steps = self.state.steps.lock().unwrap();
        let step = RunStep {
            id: steps.len() as DbId + 1,
            run_id: input.run_id,
            step_name: input.step_name.clone(),
            status: STATUS_RUNNING.to_string(),
            started_at: Utc::now(),
            completed_at: None,
            details: None,
        };
        steps.push(step.clone());
        Ok(step)
    }

    async fn finish_step(
        &self,
        id: DbId,
        status: RunStatus,
        completed_at: Timestamp,
        details: Option<&str>,
    ) -> Result<Option<RunStep>, sqlx::Error> {
        self.record("finish_step");
        let mut steps = self.state.steps.lock().unwrap();
        Ok(steps.iter_mut().find(|s| s.id == id).map(|step| {
            step.status = status.as_str().to_string();
            step.completed_at = Some(completed_at);
            step.details = details.map(str::to_string);
            step.clone()
        }))
    }
}

#[async_trait]
impl QueryLog for MockLedger {
    async fn log(&self, input: &CreateQueryRun) -> Result<QueryRun, sqlx::Error> {
        self.record("log");
        if self.state.fail_inserts {
            return Err(sqlx::Error::PoolClosed);
        }
        let mut entries = self.state.entries.lock().unwrap();
        let entry = QueryRun {
            id: entries.len() as DbId + 1,
            saved_query_id: input.saved_query_id,
            target_id: input.target_id,
            executed_at: Utc::now(),
            duration_ms: input.duration_ms,
            row_count: input.row_count,
            error: input.error.clone(),
        };
        entries.push(entry.clone());
        Ok(entry)
    }
}

/// Scripted outcome for a mock target execution.
#[derive(Debug, Clone)]
pub enum Outcome {
    Success(u64),
    Rows(QueryResults),
    ConnectionError(String),
    ExecutionError(String),
    Cancelled,
}

/// Target executor fake that replays one scripted outcome.
#[derive(Clone)]
pub struct MockExecutor {
    outcome: Outcome,
    delay: Option<Duration>,
    invocations: Arc<AtomicUsize>,
}

impl MockExecutor {
    pub fn new(outcome: Outcome) -> Self {
        Self {
            outcome,
            delay: None,
            invocations: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Like `new`, but each call sleeps before producing the outcome.
    pub fn delayed(outcome: Outcome, delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::new(outcome)
        }
    }

    pub fn invocations(&self) -> usize {
        self.invocations.load(Ordering::SeqCst)
    }

    async fn pause(&self) {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
    }

    fn error_for(&self) -> Option<TargetError> {
        match &self.outcome {
            Outcome::ConnectionError(msg) => Some(TargetError::Connection(msg.clone())),
            Outcome::ExecutionError(msg) => Some(TargetError::Execution(msg.clone())),
            Outcome::Cancelled => Some(TargetError::Cancelled),
            _ => None,
        }
    }
}

#[async_trait]
impl TargetExecutor for MockExecutor {
    async fn execute_batch(
        &self,
        _descriptor: &ConnectionDescriptor,
        _script: &str,
        _cancel: &CancellationToken,
    ) -> Result<u64, TargetError> {
        self.invocations.fetch_add(1, Ordering::SeqCst);
        self.pause().await;
        if let Some(err) = self.error_for() {
            return Err(err);
        }
        match &self.outcome {
            Outcome::Success(rows) => Ok(*rows),
            Outcome::Rows(results) => Ok(results.row_count() as u64),
            _ => unreachable!(),
        }
    }

    async fn fetch_rows(
        &self,
        _descriptor: &ConnectionDescriptor,
        _sql: &str,
        _cancel: &CancellationToken,
    ) -> Result<QueryResults, TargetError> {
        self.invocations.fetch_add(1, Ordering::SeqCst);
        self.pause().await;
        if let Some(err) = self.error_for() {
            return Err(err);
        }
        match &self.outcome {
            Outcome::Rows(results) => Ok(results.clone()),
            Outcome::Success(_) => Ok(QueryResults::default()),
            _ => unreachable!(),
        }
    }
}
