pub mod insights;
pub mod maintenance;
pub mod notes;
pub mod query;
pub mod saved_queries;
pub mod servers;
pub mod settings;
pub mod targets;
