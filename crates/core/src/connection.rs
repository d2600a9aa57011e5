//! Connection descriptor resolution.
//!
//! Pure and stateless: given the registered coordinates of a server and a
//! database name, produce a ready-to-open [`ConnectionDescriptor`]. Actual
//! drivers live behind the execution seam; passwords arriving here are
//! already decrypted (protection at rest is an external concern).

use serde::{Deserialize, Serialize};

/// Credential mode for a connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode")]
pub enum AuthMode {
    /// Ambient OS credentials of the hub process.
    Integrated,
    /// Explicit username/password credentials.
    Password { username: String, password: String },
}

impl AuthMode {
    /// Derive the credential mode from registration fields.
    ///
    /// A registration with integrated security set, or with no username,
    /// resolves to [`AuthMode::Integrated`].
    pub fn from_parts(
        use_integrated_security: bool,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Self {
        match (use_integrated_security, username) {
            (false, Some(user)) => Self::Password {
                username: user.to_string(),
                password: password.unwrap_or_default().to_string(),
            },
            _ => Self::Integrated,
        }
    }
}

/// A ready-to-open description of one database on one server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectionDescriptor {
    pub host: String,
    pub instance: Option<String>,
    pub port: Option<u16>,
    pub database: String,
    pub auth: AuthMode,
}

impl ConnectionDescriptor {
    pub fn new(
        host: impl Into<String>,
        instance: Option<String>,
        port: Option<u16>,
        database: impl Into<String>,
        auth: AuthMode,
    ) -> Self {
        Self {
            host: host.into(),
            instance,
            port,
            database: database.into(),
            auth,
        }
    }

    /// Build the data-source string for this descriptor.
    ///
    /// A named instance takes precedence over an explicit port when both
    /// are registered.
    pub fn data_source(&self) -> String {
        if let Some(instance) = self.instance.as_deref().filter(|i| !i.trim().is_empty()) {
            return format!("{}\\{}", self.host, instance);
        }
        if let Some(port) = self.port {
            return format!("{},{}", self.host, port);
        }
        self.host.clone()
    }
}
