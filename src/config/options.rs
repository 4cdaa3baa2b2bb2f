// src/config/options.rs
use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::consts::*;
use crate::aggregate::MatchPolicy;
use crate::error::SelectionError;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub sources: SourceOptions,
    pub export: ExportOptions,
    pub match_policy: MatchPolicy,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageKind {
    Overview,
    TopRankings,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceOptions {
    pub chrono24: PathBuf,
    pub luxtech: PathBuf,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            chrono24: PathBuf::from(DEFAULT_DATA_DIR).join(DEFAULT_CHRONO24_FILE),
            luxtech: PathBuf::from(DEFAULT_DATA_DIR).join(DEFAULT_LUXTECH_FILE),
        }
    }
}

impl SourceOptions {
    /// Defaults, overridden by `WATCHREF_CHRONO24` / `WATCHREF_LUXTECH`.
    /// A `.env` file in the working directory is honored if present.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::default().with_overrides(
            env::var_os(ENV_CHRONO24),
            env::var_os(ENV_LUXTECH),
        )
    }

    /// Non-empty overrides replace the current paths.
    pub fn with_overrides(mut self, chrono24: Option<OsString>, luxtech: Option<OsString>) -> Self {
        if let Some(p) = chrono24.filter(|p| !p.is_empty()) {
            self.chrono24 = PathBuf::from(p);
        }
        if let Some(p) = luxtech.filter(|p| !p.is_empty()) {
            self.luxtech = PathBuf::from(p);
        }
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
    Json,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Json => "json",
        }
    }

    /// Cell separator for delimited formats.
    pub fn delim(&self) -> Option<char> {
        match self {
            ExportFormat::Csv => Some(','),
            ExportFormat::Tsv => Some('\t'),
            ExportFormat::Json => None,
        }
    }
}

impl FromStr for ExportFormat {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "tsv" => Ok(ExportFormat::Tsv),
            "json" => Ok(ExportFormat::Json),
            other => Err(SelectionError::UnknownFormat(s!(other))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
    dir: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            include_headers: true,
            dir: PathBuf::from(DEFAULT_OUT_DIR),
        }
    }
}

impl ExportOptions {
    pub fn dir(&self) -> &Path { &self.dir }

    pub fn set_dir(&mut self, text: &str) {
        let s = text.trim();
        if !s.is_empty() {
            self.dir = PathBuf::from(s);
        }
    }

    /// "<dir>/<stem>.<ext>"; the format controls the extension.
    pub fn out_path(&self, stem: &str) -> PathBuf {
        self.dir.join(format!("{stem}.{}", self.format.ext()))
    }
}
