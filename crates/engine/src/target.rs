//! Target execution seam and the PostgreSQL implementation.
//!
//! Every call opens one scoped connection and releases it on every exit
//! path; the executors never share connections between operations.

use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgRow};
use sqlx::{Column, ConnectOptions, Row, TypeInfo};
use tokio_util::sync::CancellationToken;

use sqlhub_core::connection::{AuthMode, ConnectionDescriptor};
use sqlhub_core::results::{CellValue, QueryResults};
use sqlhub_db::models::server::Server;

use crate::error::TargetError;

/// Resolve a registered server plus database name into a descriptor.
///
/// The stored password is used as-is; protecting it at rest is handled
/// outside the hub.
pub fn resolve_target(server: &Server, database: &str) -> ConnectionDescriptor {
    let auth = AuthMode::from_parts(
        server.use_integrated_security,
        server.username.as_deref(),
        server.password.as_deref(),
    );
    ConnectionDescriptor::new(
        server.host.clone(),
        server.instance_name.clone(),
        server.port.and_then(|p| u16::try_from(p).ok()),
        database,
        auth,
    )
}

/// Executes scripts and queries against a resolved target.
#[async_trait]
pub trait TargetExecutor: Send + Sync {
    /// Execute a script as a single batch, returning rows affected.
    async fn execute_batch(
        &self,
        descriptor: &ConnectionDescriptor,
        script: &str,
        cancel: &CancellationToken,
    ) -> Result<u64, TargetError>;

    /// Execute a statement and collect its result set.
    async fn fetch_rows(
        &self,
        descriptor: &ConnectionDescriptor,
        sql: &str,
        cancel: &CancellationToken,
    ) -> Result<QueryResults, TargetError>;
}

/// PostgreSQL-backed target executor.
#[derive(Clone, Copy)]
pub struct PgTargetExecutor;

impl PgTargetExecutor {
    fn connect_options(descriptor: &ConnectionDescriptor) -> Result<PgConnectOptions, TargetError> {
        if let Some(instance) = descriptor.instance.as_deref().filter(|i| !i.trim().is_empty()) {
            return Err(TargetError::Connection(format!(
                "named instance '{instance}' is not routable for PostgreSQL targets"
            )));
        }

        let mut options = PgConnectOptions::new()
            .host(&descriptor.host)
            .database(&descriptor.database);
        if let Some(port) = descriptor.port {
            options = options.port(port);
        }
        if let AuthMode::Password { username, password } = &descriptor.auth {
            options = options.username(username).password(password);
        }
        Ok(options)
    }

    async fn open(
        descriptor: &ConnectionDescriptor,
    ) -> Result<sqlx::postgres::PgConnection, TargetError> {
        let options = Self::connect_options(descriptor)?;
        options
            .connect()
            .await
            .map_err(|e| TargetError::Connection(e.to_string()))
    }
}

#[async_trait]
impl TargetExecutor for PgTargetExecutor {
    async fn execute_batch(
        &self,
        descriptor: &ConnectionDescriptor,
        script: &str,
        cancel: &CancellationToken,
    ) -> Result<u64, TargetError> {
        let mut conn = Self::open(descriptor).await?;
        tracing::debug!(data_source = %descriptor.data_source(), database = %descriptor.database, "Executing batch");

        tokio::select! {
            _ = cancel.cancelled() => Err(TargetError::Cancelled),
            result = sqlx::Executor::execute(&mut conn, sqlx::raw_sql(script)) => result
                .map(|done| done.rows_affected())
                .map_err(|e| TargetError::Execution(e.to_string())),
        }
    }

    async fn fetch_rows(
        &self,
        descriptor: &ConnectionDescriptor,
        sql: &str,
        cancel: &CancellationToken,
    ) -> Result<QueryResults, TargetError> {
        let mut conn = Self::open(descriptor).await?;
        tracing::debug!(data_source = %descriptor.data_source(), database = %descriptor.database, "Executing query");

        let rows = tokio::select! {
            _ = cancel.cancelled() => return Err(TargetError::Cancelled),
            result = sqlx::query(sql).fetch_all(&mut conn) => result
                .map_err(|e| TargetError::Execution(e.to_string()))?,
        };

        decode_rows(&rows)
    }
}

/// Decode Postgres rows into the variant-cell result shape.
///
/// Column names come from the first row; a statement returning zero rows
/// yields an empty result set with no column metadata.
fn decode_rows(rows: &[PgRow]) -> Result<QueryResults, TargetError> {
    let Some(first) = rows.first() else {
        return Ok(QueryResults::default());
    };

    let columns: Vec<String> = first
        .columns()
        .iter()
        .map(|c| c.name().to_string())
        .collect();

    let mut decoded = Vec::with_capacity(rows.len());
    for row in rows {
        let mut cells = Vec::with_capacity(columns.len());
        for (index, column) in row.columns().iter().enumerate() {
            cells.push(
                decode_cell(row, index, column.type_info().name())
                    .map_err(|e| TargetError::Execution(e.to_string()))?,
            );
        }
        decoded.push(cells);
    }

    Ok(QueryResults {
        columns,
        rows: decoded,
    })
}

fn decode_cell(row: &PgRow, index: usize, type_name: &str) -> Result<CellValue, sqlx::Error> {
    let value = match type_name {
        "BOOL" => row.try_get::<Option<bool>, _>(index)?.map(CellValue::Bool),
        "INT2" => row
            .try_get::<Option<i16>, _>(index)?
            .map(|v| CellValue::Int(v.into())),
        "INT4" => row
            .try_get::<Option<i32>, _>(index)?
            .map(|v| CellValue::Int(v.into())),
        "INT8" => row.try_get::<Option<i64>, _>(index)?.map(CellValue::Int),
        "FLOAT4" => row
            .try_get::<Option<f32>, _>(index)?
            .map(|v| CellValue::Float(v.into())),
        "FLOAT8" => row.try_get::<Option<f64>, _>(index)?.map(CellValue::Float),
        "TIMESTAMPTZ" => row
            .try_get::<Option<chrono::DateTime<chrono::Utc>>, _>(index)?
            .map(CellValue::Timestamp),
        "TIMESTAMP" => row
            .try_get::<Option<chrono::NaiveDateTime>, _>(index)?
            .map(|v| CellValue::Timestamp(v.and_utc())),
        "DATE" => row
            .try_get::<Option<chrono::NaiveDate>, _>(index)?
            .map(|v| CellValue::Text(v.to_string())),
        "TEXT" | "VARCHAR" | "CHAR" | "BPCHAR" | "NAME" => row
            .try_get::<Option<String>, _>(index)?
            .map(CellValue::Text),
        // Types without a cell mapping render as text when the driver
        // allows it, otherwise as NULL.
        _ => row
            .try_get::<Option<String>, _>(index)
            .ok()
            .flatten()
            .map(CellValue::Text),
    };
    Ok(value.unwrap_or(CellValue::Null))
}
