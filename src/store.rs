// src/store.rs
//
// String tables. Every source is loaded into a `DataSet` as-is; typed access
// happens through column lookups so that a missing column only fails the view
// that needs it.

use std::{fs, io, path::Path};

use serde::Serialize;

use crate::csv::{parse_rows, split_headers};
use crate::error::SchemaError;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DataSet {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers: Some(headers), rows }
    }

    /// Same headers, different rows.
    pub fn with_rows(&self, rows: Vec<Vec<String>>) -> Self {
        Self { headers: self.headers.clone(), rows }
    }

    pub fn row_count(&self) -> usize { self.rows.len() }

    pub fn header_count(&self) -> usize {
        self.headers.as_ref().map(|h| h.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Resolve a column name to its index (exact match).
    pub fn column(&self, name: &str) -> Result<usize, SchemaError> {
        let Some(headers) = self.headers.as_ref() else {
            return Err(SchemaError::NoHeaders { column: s!(name) });
        };
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| SchemaError::MissingColumn {
                column: s!(name),
                available: headers.clone(),
            })
    }

    /// Resolve several columns at once; first missing one wins.
    pub fn columns(&self, names: &[&str]) -> Result<Vec<usize>, SchemaError> {
        names.iter().map(|n| self.column(n)).collect()
    }

    /// Trimmed cell value; short rows read as empty.
    #[inline]
    pub fn cell<'a>(row: &'a [String], ix: usize) -> &'a str {
        row.get(ix).map(|s| s.trim()).unwrap_or("")
    }
}

/// Load a CSV file with a header row.
pub fn load_csv(path: &Path) -> io::Result<DataSet> {
    let text = fs::read_to_string(path)?;
    let (headers, rows) = split_headers(parse_rows(&text, ','));
    Ok(DataSet { headers, rows })
}
