//! Repository for the `servers` table.

use sqlx::PgPool;

use sqlhub_core::types::DbId;

use crate::models::server::{CreateServer, Server, UpdateServer};

/// Column list for `servers` queries.
const COLUMNS: &str = "\
    id, name, host, instance_name, port, use_integrated_security, \
    username, password, created_at, updated_at";

/// Provides CRUD operations for registered servers.
pub struct ServerRepo;

impl ServerRepo {
    /// Register a new server, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateServer) -> Result<Server, sqlx::Error> {
        let query = format!(
            "INSERT INTO servers \
                (name, host, instance_name, port, use_integrated_security, username, password) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Server>(&query)
            .bind(&input.name)
            .bind(&input.host)
            .bind(&input.instance_name)
            .bind(input.port)
            .bind(input.use_integrated_security.unwrap_or(true))
            .bind(&input.username)
            .bind(&input.password)
            .fetch_one(pool)
            .await
    }

    /// Find a server by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Server>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM servers WHERE id = $1");
        sqlx::query_as::<_, Server>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all registered servers, ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Server>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM servers ORDER BY name");
        sqlx::query_as::<_, Server>(&query).fetch_all(pool).await
    }

    /// Update a server registration, returning the updated row.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateServer,
    ) -> Result<Option<Server>, sqlx::Error> {
        let query = format!(
            "UPDATE servers SET \
                name = COALESCE($2, name), \
                host = COALESCE($3, host), \
                instance_name = COALESCE($4, instance_name), \
                port = COALESCE($5, port), \
                use_integrated_security = COALESCE($6, use_integrated_security), \
                username = COALESCE($7, username), \
                password = COALESCE($8, password), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Server>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.host)
            .bind(&input.instance_name)
            .bind(input.port)
            .bind(input.use_integrated_security)
            .bind(&input.username)
            .bind(&input.password)
            .fetch_optional(pool)
            .await
    }

    /// Delete a server registration. Returns `true` when a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM servers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
