use std::sync::Arc;

use tokio::sync::RwLock;

use sqlhub_core::settings::{AppSettings, SettingsStore};
use sqlhub_engine::{HealthInspector, MaintenanceExecutor, PgLedger, PgTargetExecutor, QueryExecutor};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Hub database connection pool.
    pub pool: sqlhub_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Current operator settings. Handlers read the safe-mode flag from
    /// here; the settings handler is the only writer.
    pub settings: Arc<RwLock<AppSettings>>,
    /// Persistence for operator settings.
    pub settings_store: Arc<SettingsStore>,
    /// Maintenance run orchestrator.
    pub maintenance: Arc<MaintenanceExecutor<PgLedger, PgTargetExecutor>>,
    /// Ad-hoc query executor.
    pub query: Arc<QueryExecutor<PgLedger, PgTargetExecutor>>,
    /// Server health inspections.
    pub insights: Arc<HealthInspector<PgTargetExecutor>>,
}

impl AppState {
    pub fn new(pool: sqlhub_db::DbPool, config: ServerConfig, settings: AppSettings) -> Self {
        let settings_store = Arc::new(SettingsStore::new(config.settings_path.clone()));
        let ledger = PgLedger::new(pool.clone());
        Self {
            pool,
            settings: Arc::new(RwLock::new(settings)),
            settings_store,
            maintenance: Arc::new(MaintenanceExecutor::new(ledger.clone(), PgTargetExecutor)),
            query: Arc::new(QueryExecutor::new(ledger, PgTargetExecutor)),
            insights: Arc::new(HealthInspector::new(
                PgTargetExecutor,
                config.admin_database.clone(),
            )),
            config: Arc::new(config),
        }
    }
}
