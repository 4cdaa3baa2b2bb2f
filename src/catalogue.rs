// src/catalogue.rs
//
// The two raw sources, loaded once per session and never mutated afterwards.
// `Catalogues` is the explicit data-access object handed to the comparator
// (wrapped in an Arc by callers that share it).

use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::config::consts::*;
use crate::config::options::SourceOptions;
use crate::error::DataError;
use crate::store::{self, DataSet};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Source {
    Chrono24,
    Luxtech,
}

impl Source {
    pub fn label(&self) -> &'static str {
        match self {
            Source::Chrono24 => "Chrono24",
            Source::Luxtech => "Luxtech",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Column names of one source.
/// `identifier` is `reference` for Chrono24 and `modelNumber` for Luxtech.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSchema {
    pub brand: String,
    pub identifier: String,
    pub year: Option<String>,
}

impl SourceSchema {
    pub fn chrono24() -> Self {
        Self {
            brand: s!(COL_BRAND),
            identifier: s!(COL_REFERENCE),
            year: Some(s!(COL_YEAR_OF_PRODUCTION)),
        }
    }

    pub fn luxtech() -> Self {
        Self {
            brand: s!(COL_BRAND),
            identifier: s!(COL_MODEL_NUMBER),
            year: None,
        }
    }

    pub fn for_source(source: Source) -> Self {
        match source {
            Source::Chrono24 => Self::chrono24(),
            Source::Luxtech => Self::luxtech(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Catalogue {
    source: Source,
    schema: SourceSchema,
    table: DataSet,
}

impl Catalogue {
    pub fn new(source: Source, schema: SourceSchema, table: DataSet) -> Self {
        Self { source, schema, table }
    }

    pub fn source(&self) -> Source { self.source }
    pub fn schema(&self) -> &SourceSchema { &self.schema }
    pub fn table(&self) -> &DataSet { &self.table }

    /// Read one source from disk. Any I/O failure is `Unavailable`.
    pub fn load(source: Source, path: &Path) -> Result<Self, DataError> {
        let table = store::load_csv(path).map_err(|e| DataError::Unavailable {
            source_kind: source,
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        if table.headers.is_none() {
            return Err(DataError::Empty { source_kind: source, path: path.to_path_buf() });
        }

        logf!(
            "Load: {} from {} (rows={}, headers={})",
            source,
            path.display(),
            table.row_count(),
            table.header_count()
        );
        Ok(Self::new(source, SourceSchema::for_source(source), table))
    }
}

/// Both sources. Immutable after construction.
#[derive(Clone, Debug)]
pub struct Catalogues {
    pub chrono24: Catalogue,
    pub luxtech: Catalogue,
}

impl Catalogues {
    /// Tables with the default schemas (no I/O).
    pub fn from_tables(chrono24: DataSet, luxtech: DataSet) -> Self {
        Self {
            chrono24: Catalogue::new(Source::Chrono24, SourceSchema::chrono24(), chrono24),
            luxtech: Catalogue::new(Source::Luxtech, SourceSchema::luxtech(), luxtech),
        }
    }

    /// Load both sources; either one missing aborts the session.
    pub fn load(opts: &SourceOptions) -> Result<Self, DataError> {
        let chrono24 = Catalogue::load(Source::Chrono24, &opts.chrono24)?;
        let luxtech = Catalogue::load(Source::Luxtech, &opts.luxtech)?;
        Ok(Self { chrono24, luxtech })
    }

    pub fn get(&self, source: Source) -> &Catalogue {
        match source {
            Source::Chrono24 => &self.chrono24,
            Source::Luxtech => &self.luxtech,
        }
    }
}
