//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod note_repo;
pub mod query_folder_repo;
pub mod query_run_repo;
pub mod run_repo;
pub mod run_step_repo;
pub mod saved_query_repo;
pub mod server_repo;
pub mod target_repo;

pub use note_repo::NoteRepo;
pub use query_folder_repo::QueryFolderRepo;
pub use query_run_repo::QueryRunRepo;
pub use run_repo::RunRepo;
pub use run_step_repo::RunStepRepo;
pub use saved_query_repo::SavedQueryRepo;
pub use server_repo::ServerRepo;
pub use target_repo::TargetRepo;
