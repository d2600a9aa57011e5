//! Repository for the `query_folders` table.

use sqlx::PgPool;

use sqlhub_core::types::DbId;

use crate::models::query_folder::{CreateQueryFolder, QueryFolder};

/// Column list for `query_folders` queries.
const COLUMNS: &str = "id, name";

/// Provides CRUD operations for saved-query folders.
pub struct QueryFolderRepo;

impl QueryFolderRepo {
    /// Create a folder, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateQueryFolder,
    ) -> Result<QueryFolder, sqlx::Error> {
        let query = format!(
            "INSERT INTO query_folders (name) VALUES ($1) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, QueryFolder>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// List all folders, ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<QueryFolder>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM query_folders ORDER BY name");
        sqlx::query_as::<_, QueryFolder>(&query)
            .fetch_all(pool)
            .await
    }

    /// Rename a folder, returning the updated row.
    pub async fn rename(
        pool: &PgPool,
        id: DbId,
        input: &CreateQueryFolder,
    ) -> Result<Option<QueryFolder>, sqlx::Error> {
        let query = format!(
            "UPDATE query_folders SET name = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, QueryFolder>(&query)
            .bind(id)
            .bind(&input.name)
            .fetch_optional(pool)
            .await
    }

    /// Delete a folder. Saved queries inside it are detached, not deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM query_folders WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
