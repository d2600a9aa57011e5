//! Domain layer for the sqlhub administration console.
//!
//! Pure types and decision logic shared by the storage and execution crates:
//! run kind/status taxonomy, the safe-mode statement guard, connection
//! descriptor resolution, operator settings, and query result shapes.

pub mod connection;
pub mod error;
pub mod results;
pub mod run_types;
pub mod safe_mode;
pub mod settings;
pub mod types;
