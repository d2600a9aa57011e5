//! Repository for the `targets` table.

use sqlx::PgPool;

use sqlhub_core::types::DbId;

use crate::models::target::{CreateTarget, Target, UpdateTarget};

/// Column list for `targets` queries.
const COLUMNS: &str = "id, server_id, database_name, is_active, tags, created_at";

/// Provides CRUD operations for registered database targets.
pub struct TargetRepo;

impl TargetRepo {
    /// Register a new target, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateTarget) -> Result<Target, sqlx::Error> {
        let query = format!(
            "INSERT INTO targets (server_id, database_name, is_active, tags) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Target>(&query)
            .bind(input.server_id)
            .bind(&input.database_name)
            .bind(input.is_active.unwrap_or(true))
            .bind(&input.tags)
            .fetch_one(pool)
            .await
    }

    /// Find a target by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Target>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM targets WHERE id = $1");
        sqlx::query_as::<_, Target>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all targets, ordered by database name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Target>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM targets ORDER BY database_name");
        sqlx::query_as::<_, Target>(&query).fetch_all(pool).await
    }

    /// List the targets registered under a server.
    pub async fn list_by_server(pool: &PgPool, server_id: DbId) -> Result<Vec<Target>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM targets WHERE server_id = $1 ORDER BY database_name"
        );
        sqlx::query_as::<_, Target>(&query)
            .bind(server_id)
            .fetch_all(pool)
            .await
    }

    /// Update a target, returning the updated row.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTarget,
    ) -> Result<Option<Target>, sqlx::Error> {
        let query = format!(
            "UPDATE targets SET \
                database_name = COALESCE($2, database_name), \
                is_active = COALESCE($3, is_active), \
                tags = COALESCE($4, tags) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Target>(&query)
            .bind(id)
            .bind(&input.database_name)
            .bind(input.is_active)
            .bind(&input.tags)
            .fetch_optional(pool)
            .await
    }

    /// Delete a target. Returns `true` when a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM targets WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
