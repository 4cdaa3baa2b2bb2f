// src/file.rs
//
// Export of derived tables (Copy + Export share `to_export_string`).

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde_json::{Map, Value};

use crate::config::options::{ExportFormat, ExportOptions};
use crate::csv::rows_to_string;
use crate::store::DataSet;

/// Table as a JSON array of `{header: cell}` objects.
/// Headerless tables fall back to arrays of cells.
pub fn to_json(table: &DataSet) -> Value {
    let rows = table.rows.iter().map(|row| match &table.headers {
        Some(h) => {
            let obj: Map<String, Value> = h
                .iter()
                .zip(row.iter())
                .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                .collect();
            Value::Object(obj)
        }
        None => Value::Array(row.iter().cloned().map(Value::String).collect()),
    });
    Value::Array(rows.collect())
}

/// Create a full export string (Copy/Export) from a display table.
pub fn to_export_string(export: &ExportOptions, table: &DataSet) -> String {
    match export.format.delim() {
        Some(sep) => {
            let headers = if export.include_headers { table.headers.as_deref() } else { None };
            rows_to_string(headers, &table.rows, sep)
        }
        None => {
            let v = to_json(table);
            serde_json::to_string_pretty(&v).unwrap_or_else(|_| v.to_string())
        }
    }
}

/// Several titled tables in one string; JSON becomes `{title: rows}`.
pub fn to_export_string_many(export: &ExportOptions, tables: &[(&str, DataSet)]) -> String {
    if export.format == ExportFormat::Json {
        let obj: Map<String, Value> = tables
            .iter()
            .map(|(title, t)| (s!(*title), to_json(t)))
            .collect();
        let v = Value::Object(obj);
        return serde_json::to_string_pretty(&v).unwrap_or_else(|_| v.to_string());
    }
    tables
        .iter()
        .map(|(title, t)| format!("# {title}\n{}", to_export_string(export, t)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write one table to `<dir>/<sanitized title>.<ext>`. Returns the path written.
pub fn write_export(
    export: &ExportOptions,
    title: &str,
    table: &DataSet,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = export.out_path(&sanitize_filename(title));
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(&path, to_export_string(export, table))?;
    logf!("Export: {} rows → {}", table.row_count(), path.display());
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/// "Top 200 References - YOP" → "top_200_references_yop"
pub fn sanitize_filename(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch.to_ascii_lowercase());
            last_us = false;
        } else if !last_us {
            out.push('_');
            last_us = true;
        }
    }
    let out = out.trim_matches('_').to_string();
    if out.is_empty() { s!("export") } else { out }
}
