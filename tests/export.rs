// tests/export.rs
use std::ffi::OsString;
use std::fs;
use std::path::PathBuf;

use watchref::aggregate::{CatalogueCount, OverlapRow};
use watchref::config::options::{ExportFormat, ExportOptions, SourceOptions};
use watchref::file;
use watchref::views;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("watchref_export_{}", name));
    let _ = fs::remove_dir_all(&p);
    p
}

fn overlap() -> watchref::store::DataSet {
    views::overlap_table(&[
        OverlapRow { brand: "Audemars Piguet".into(), percentage: 100.0, source_a: CatalogueCount::Present(1), common: 1 },
        OverlapRow { brand: "Breitling".into(), percentage: 0.0, source_a: CatalogueCount::Present(1), common: 0 },
    ])
}

#[test]
fn csv_keeps_headers_and_display_text() {
    let export = ExportOptions::default();
    let out = file::to_export_string(&export, &overlap());
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "brand,% of Chrono24,# CH24,# common");
    assert_eq!(lines[1], "Audemars Piguet,100.0,1,1");
    assert_eq!(lines[2], "Breitling,0.0,1,No reference shared for the moment.");
}

#[test]
fn tsv_without_headers() {
    let mut export = ExportOptions::default();
    export.format = ExportFormat::Tsv;
    export.include_headers = false;
    let out = file::to_export_string(&export, &overlap());
    assert!(out.starts_with("Audemars Piguet\t100.0\t1\t1"));
    assert_eq!(out.lines().count(), 2);
}

#[test]
fn json_is_keyed_by_header() {
    let mut export = ExportOptions::default();
    export.format = ExportFormat::Json;
    let out = file::to_export_string_many(&export, &[("Common references", overlap())]);
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["Common references"][0]["brand"], "Audemars Piguet");
    assert_eq!(v["Common references"][1]["% of Chrono24"], "0.0");
}

#[test]
fn write_export_creates_dir_and_file() {
    let dir = tmp_dir("write");
    let mut export = ExportOptions::default();
    export.set_dir(dir.to_str().unwrap());

    let path = file::write_export(&export, "Top 200 References - YOP", &overlap()).unwrap();
    assert_eq!(path, dir.join("top_200_references_yop.csv"));
    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("brand,"));
}

#[test]
fn blank_dir_text_keeps_previous_dir() {
    let mut export = ExportOptions::default();
    export.set_dir("reports");
    export.set_dir("   ");
    assert_eq!(export.dir(), PathBuf::from("reports"));
}

#[test]
fn format_parses_case_insensitively() {
    assert_eq!("JSON".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
    assert!("xlsx".parse::<ExportFormat>().is_err());
}

#[test]
fn source_overrides_skip_empty_values() {
    let opts = SourceOptions::default().with_overrides(Some(OsString::from("a.csv")), Some(OsString::new()));
    assert_eq!(opts.chrono24, PathBuf::from("a.csv"));
    assert_eq!(opts.luxtech, SourceOptions::default().luxtech);
}
