//! Result shapes for ad-hoc query execution.
//!
//! Rows are ordered lists of variant-typed cells, paired with an ordered
//! column-name list, so result sets survive serialization without relying
//! on dynamically typed values.

use serde::Serialize;

use crate::types::Timestamp;

/// A single cell of a result row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Timestamp(Timestamp),
}

/// One result set: ordered column names plus rows of cells.
///
/// Every row has exactly `columns.len()` cells, in column order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QueryResults {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl QueryResults {
    pub fn row_count(&self) -> i32 {
        self.rows.len() as i32
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
