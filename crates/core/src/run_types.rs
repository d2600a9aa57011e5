//! Run kind and status taxonomy for the maintenance ledger.
//!
//! Both enums round-trip through their database string representation;
//! unknown strings are rejected as validation errors.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Run kind constants
// ---------------------------------------------------------------------------

/// Full index rebuild across the target database.
pub const KIND_INDEX_REBUILD: &str = "index_rebuild";
/// Planner statistics refresh.
pub const KIND_UPDATE_STATISTICS: &str = "update_statistics";
/// Consistency check of the target database.
pub const KIND_CHECK_DB: &str = "check_db";
/// Operator-supplied ad-hoc statement.
pub const KIND_AD_HOC_QUERY: &str = "ad_hoc_query";

/// All valid run kinds.
pub const VALID_RUN_KINDS: &[&str] = &[
    KIND_INDEX_REBUILD,
    KIND_UPDATE_STATISTICS,
    KIND_CHECK_DB,
    KIND_AD_HOC_QUERY,
];

// ---------------------------------------------------------------------------
// Run status constants
// ---------------------------------------------------------------------------

/// Created but not yet started.
pub const STATUS_PENDING: &str = "pending";
/// Currently executing.
pub const STATUS_RUNNING: &str = "running";
/// Finished without error.
pub const STATUS_SUCCEEDED: &str = "succeeded";
/// Finished with an error recorded on the row.
pub const STATUS_FAILED: &str = "failed";

/// All valid run statuses.
pub const VALID_RUN_STATUSES: &[&str] = &[
    STATUS_PENDING,
    STATUS_RUNNING,
    STATUS_SUCCEEDED,
    STATUS_FAILED,
];

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Kind of maintenance operation a run records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunKind {
    IndexRebuild,
    UpdateStatistics,
    CheckDb,
    AdHocQuery,
}

impl RunKind {
    /// Return the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IndexRebuild => KIND_INDEX_REBUILD,
            Self::UpdateStatistics => KIND_UPDATE_STATISTICS,
            Self::CheckDb => KIND_CHECK_DB,
            Self::AdHocQuery => KIND_AD_HOC_QUERY,
        }
    }

    /// Parse from a string, returning an error for unknown kinds.
    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        match s {
            KIND_INDEX_REBUILD => Ok(Self::IndexRebuild),
            KIND_UPDATE_STATISTICS => Ok(Self::UpdateStatistics),
            KIND_CHECK_DB => Ok(Self::CheckDb),
            KIND_AD_HOC_QUERY => Ok(Self::AdHocQuery),
            other => Err(CoreError::Validation(format!(
                "Unknown run kind: '{other}'. Valid kinds: {}",
                VALID_RUN_KINDS.join(", ")
            ))),
        }
    }
}

/// Lifecycle status shared by runs and run steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Pending,
    Running,
    Succeeded,
    Failed,
}

impl RunStatus {
    /// Return the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => STATUS_PENDING,
            Self::Running => STATUS_RUNNING,
            Self::Succeeded => STATUS_SUCCEEDED,
            Self::Failed => STATUS_FAILED,
        }
    }

    /// Parse from a string, returning an error for unknown statuses.
    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        match s {
            STATUS_PENDING => Ok(Self::Pending),
            STATUS_RUNNING => Ok(Self::Running),
            STATUS_SUCCEEDED => Ok(Self::Succeeded),
            STATUS_FAILED => Ok(Self::Failed),
            other => Err(CoreError::Validation(format!(
                "Unknown run status: '{other}'. Valid statuses: {}",
                VALID_RUN_STATUSES.join(", ")
            ))),
        }
    }

    /// A status is terminal once it can no longer change.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }
}
