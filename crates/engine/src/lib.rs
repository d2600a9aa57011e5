//! Execution engine: maintenance and ad-hoc query orchestration.
//!
//! The two executors share the same collaborators — a run/query ledger and
//! a target executor — but keep deliberately different failure policies:
//! maintenance failures are swallowed and recorded on the run, ad-hoc query
//! failures are logged and re-raised to the caller.

pub mod error;
pub mod health;
pub mod ledger;
pub mod maintenance;
pub mod query;
pub mod target;

pub use error::{EngineError, TargetError};
pub use health::HealthInspector;
pub use ledger::{PgLedger, QueryLog, RunLedger};
pub use maintenance::MaintenanceExecutor;
pub use query::QueryExecutor;
pub use target::{resolve_target, PgTargetExecutor, TargetExecutor};

#[cfg(test)]
pub(crate) mod test_support;
