//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod note;
pub mod query_folder;
pub mod query_run;
pub mod run;
pub mod run_step;
pub mod saved_query;
pub mod server;
pub mod target;
