// src/error.rs
//
// Error taxonomy.
// - DataError: a raw source could not be obtained. Fatal for the session.
// - SchemaError: a view asked for a column the table doesn't have. Fatal for that view only.
// - SelectionError: caller-supplied selection/format input rejected at the boundary.
//
// An empty brand selection is NOT an error; views render empty/absent rows.

use std::path::PathBuf;

use crate::catalogue::Source;

#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("{source_kind} data unavailable at {}: {reason}", path.display())]
    Unavailable {
        source_kind: Source,
        path: PathBuf,
        reason: String,
    },

    #[error("{source_kind} data at {} has no header row", path.display())]
    Empty { source_kind: Source, path: PathBuf },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("missing column `{column}` (available: {})", available.join(", "))]
    MissingColumn {
        column: String,
        available: Vec<String>,
    },

    #[error("table has no header row; cannot resolve column `{column}`")]
    NoHeaders { column: String },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("too many brands selected (max {max})")]
    TooManyBrands { max: usize },

    #[error("unknown export format: {0}")]
    UnknownFormat(String),
}
