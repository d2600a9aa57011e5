//! Repository for the `notes` table.

use sqlx::PgPool;

use sqlhub_core::types::DbId;

use crate::models::note::{CreateNote, Note, UpdateNote};

/// Column list for `notes` queries.
const COLUMNS: &str = "id, server_id, target_id, title, body, created_by, created_at";

/// Provides CRUD operations for operator notes.
pub struct NoteRepo;

impl NoteRepo {
    /// Create a note, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateNote) -> Result<Note, sqlx::Error> {
        let query = format!(
            "INSERT INTO notes (server_id, target_id, title, body, created_by) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(input.server_id)
            .bind(input.target_id)
            .bind(&input.title)
            .bind(&input.body)
            .bind(&input.created_by)
            .fetch_one(pool)
            .await
    }

    /// Find a note by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Note>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notes WHERE id = $1");
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all notes, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Note>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notes ORDER BY created_at DESC");
        sqlx::query_as::<_, Note>(&query).fetch_all(pool).await
    }

    /// List the notes pinned to a server, newest first.
    pub async fn list_for_server(pool: &PgPool, server_id: DbId) -> Result<Vec<Note>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM notes WHERE server_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(server_id)
            .fetch_all(pool)
            .await
    }

    /// Update a note's title/body, returning the updated row.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateNote,
    ) -> Result<Option<Note>, sqlx::Error> {
        let query = format!(
            "UPDATE notes SET \
                title = COALESCE($2, title), \
                body = COALESCE($3, body) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.body)
            .fetch_optional(pool)
            .await
    }

    /// Delete a note. Returns `true` when a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
