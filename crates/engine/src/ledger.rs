//! Run and query-run ledger seams.
//!
//! The executors talk to the hub database through these traits so the
//! orchestration logic stays testable without a live database. The
//! production implementation delegates to the repositories.

use async_trait::async_trait;

use sqlhub_core::run_types::RunStatus;
use sqlhub_core::types::{DbId, Timestamp};
use sqlhub_db::models::query_run::{CreateQueryRun, QueryRun};
use sqlhub_db::models::run::{CreateRun, Run};
use sqlhub_db::models::run_step::{CreateRunStep, RunStep};
use sqlhub_db::repositories::{QueryRunRepo, RunRepo, RunStepRepo};
use sqlhub_db::DbPool;

/// Persistence of the run/step lifecycle.
///
/// Callers must persist a step's terminal update strictly before the owning
/// run's terminal update, so a crash mid-operation never leaves a finished
/// run with a step still marked running.
#[async_trait]
pub trait RunLedger: Send + Sync {
    async fn insert_run(&self, input: &CreateRun) -> Result<Run, sqlx::Error>;

    async fn finish_run(
        &self,
        id: DbId,
        status: RunStatus,
        completed_at: Timestamp,
        message: Option<&str>,
    ) -> Result<Option<Run>, sqlx::Error>;

    async fn insert_step(&self, input: &CreateRunStep) -> Result<RunStep, sqlx::Error>;

    async fn finish_step(
        &self,
        id: DbId,
        status: RunStatus,
        completed_at: Timestamp,
        details: Option<&str>,
    ) -> Result<Option<RunStep>, sqlx::Error>;
}

/// Append-only log of ad-hoc query executions.
#[async_trait]
pub trait QueryLog: Send + Sync {
    async fn log(&self, input: &CreateQueryRun) -> Result<QueryRun, sqlx::Error>;
}

/// Hub-database-backed ledger.
#[derive(Clone)]
pub struct PgLedger {
    pool: DbPool,
}

impl PgLedger {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RunLedger for PgLedger {
    async fn insert_run(&self, input: &CreateRun) -> Result<Run, sqlx::Error> {
        RunRepo::create(&self.pool, input).await
    }

    async fn finish_run(
        &self,
        id: DbId,
        status: RunStatus,
        completed_at: Timestamp,
        message: Option<&str>,
    ) -> Result<Option<Run>, sqlx::Error> {
        RunRepo::finish(&self.pool, id, status, completed_at, message).await
    }

    async fn insert_step(&self, input: &CreateRunStep) -> Result<RunStep, sqlx::Error> {
        RunStepRepo::create(&self.pool, input).await
    }

    async fn finish_step(
        &self,
        id: DbId,
        status: RunStatus,
        completed_at: Timestamp,
        details: Option<&str>,
    ) -> Result<Option<RunStep>, sqlx::Error> {
        RunStepRepo::finish(&self.pool, id, status, completed_at, details).await
    }
}

#[async_trait]
impl QueryLog for PgLedger {
    async fn log(&self, input: &CreateQueryRun) -> Result<QueryRun, sqlx::Error> {
        QueryRunRepo::create(&self.pool, input).await
    }
}
