// src/cli.rs
//
// Headless front end: same Comparator queries as the GUI, printed or written
// through the export layer.

use std::{error::Error, ffi::OsString, path::PathBuf};

use clap::{Args, Parser, Subcommand};

use crate::{
    aggregate::MatchPolicy,
    catalogue::Catalogues,
    config::{
        consts::*,
        options::{ExportFormat, ExportOptions, SourceOptions},
    },
    error::SchemaError,
    file,
    selection::BrandSelection,
    store::DataSet,
    views::{self, Comparator, ViewResult},
};

/// Compare Chrono24 and Luxtech watch-reference catalogues.
#[derive(Parser, Debug)]
#[command(name = "watchref", version, about)]
pub struct Cli {
    /// Chrono24 CSV (overrides WATCHREF_CHRONO24)
    #[arg(long, global = true)]
    pub chrono24: Option<OsString>,

    /// Luxtech CSV (overrides WATCHREF_LUXTECH)
    #[arg(long, global = true)]
    pub luxtech: Option<OsString>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the selectable brands (Chrono24 brands, first-appearance order)
    Brands,

    /// Unique-reference counts per catalogue and the Chrono24/Luxtech overlap
    Overview {
        #[command(flatten)]
        query: Query,

        /// Count a reference as shared only under the same brand
        #[arg(long)]
        strict_match: bool,
    },

    /// Most frequent Chrono24 references (and reference + year)
    Top {
        #[command(flatten)]
        query: Query,

        /// Rows per ranking
        #[arg(short, long, default_value_t = TOP_N)]
        n: usize,
    },
}

#[derive(Args, Debug)]
pub struct Query {
    /// Brand to include (repeatable, max 3). Defaults to the preset brands.
    #[arg(short, long = "brand")]
    pub brands: Vec<String>,

    /// csv, tsv or json
    #[arg(long, default_value = "csv")]
    pub format: ExportFormat,

    /// Omit header rows in csv/tsv output
    #[arg(long)]
    pub no_headers: bool,

    /// Write one file per table into this directory instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

impl Query {
    fn export_options(&self) -> ExportOptions {
        let mut export = ExportOptions::default();
        export.format = self.format;
        export.include_headers = !self.no_headers;
        if let Some(dir) = &self.out {
            export.set_dir(&dir.to_string_lossy());
        }
        export
    }

    fn selection(&self, cmp: &Comparator) -> Result<BrandSelection, Box<dyn Error>> {
        if self.brands.is_empty() {
            return Ok(cmp.default_selection());
        }
        Ok(BrandSelection::from_brands(&self.brands)?)
    }
}

pub fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let sources = SourceOptions::from_env().with_overrides(cli.chrono24, cli.luxtech);
    let cmp = Comparator::new(Catalogues::load(&sources)?.into());

    match cli.command {
        Command::Brands => {
            for b in cmp.brands() {
                println!("{b}");
            }
            Ok(())
        }
        Command::Overview { query, strict_match } => {
            let policy = if strict_match { MatchPolicy::IdentifierAndBrand } else { MatchPolicy::IdentifierOnly };
            let sel = query.selection(&cmp)?;
            logf!("CLI: overview {:?} policy={:?}", sel.as_slice(), policy);
            emit(&query, overview_tables(&cmp, &sel, policy))
        }
        Command::Top { query, n } => {
            let sel = query.selection(&cmp)?;
            logf!("CLI: top n={} {:?}", n, sel.as_slice());
            emit(&query, top_tables(&cmp, &sel, n))
        }
    }
}

type TitledView = (&'static str, ViewResult<DataSet>);

/// Overview display tables; each one fails on its own.
pub fn overview_tables(cmp: &Comparator, sel: &BrandSelection, policy: MatchPolicy) -> Vec<TitledView> {
    let ov = cmp.overview(sel, policy);
    vec![
        ("Chrono24 unique references", ov.chrono24.map(|c| views::counts_table(&c, ABSENT_TEXT))),
        ("Common references", ov.overlap.map(|o| views::overlap_table(&o))),
        ("Luxtech unique references", ov.luxtech.map(|c| views::counts_table(&c, LUXTECH_ABSENT_TEXT))),
    ]
}

pub fn top_tables(cmp: &Comparator, sel: &BrandSelection, n: usize) -> Vec<TitledView> {
    let top = cmp.top_rankings(sel, n);
    vec![
        ("Top References", top.by_reference.map(|r| views::rankings_table(&r, &[COL_BRAND, COL_REFERENCE]))),
        (
            "Top References - YOP",
            top.by_reference_year
                .map(|r| views::rankings_table(&r, &[COL_BRAND, COL_REFERENCE, COL_YEAR_OF_PRODUCTION])),
        ),
    ]
}

/// Usable tables and failed views, both in input order.
fn split_views(views: Vec<TitledView>) -> (Vec<(&'static str, DataSet)>, Vec<(&'static str, SchemaError)>) {
    let mut ok = Vec::new();
    let mut failed = Vec::new();
    for (title, view) in views {
        match view {
            Ok(t) => ok.push((title, t)),
            Err(e) => failed.push((title, e)),
        }
    }
    (ok, failed)
}

/// Every usable view is emitted; failures are reported afterwards and make
/// the command fail.
fn emit(query: &Query, views: Vec<TitledView>) -> Result<(), Box<dyn Error>> {
    let total = views.len();
    let (tables, failed) = split_views(views);
    let export = query.export_options();

    if query.out.is_none() {
        if !tables.is_empty() {
            print!("{}", file::to_export_string_many(&export, &tables));
        }
    } else {
        for (title, table) in &tables {
            let path = file::write_export(&export, title, table)?;
            eprintln!("Wrote {}", path.display());
        }
    }

    for (title, e) in &failed {
        loge!("CLI: {} unavailable: {}", title, e);
        eprintln!("{title}: view unavailable: {e}");
    }
    if failed.is_empty() {
        Ok(())
    } else {
        Err(format!("{} of {} views unavailable", failed.len(), total).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_repeated_brands_and_format() {
        let cli = Cli::try_parse_from([
            "watchref", "overview", "--brand", "Rolex", "-b", "Omega", "--format", "json", "--strict-match",
        ])
        .unwrap();
        let Command::Overview { query, strict_match } = cli.command else { panic!("wrong subcommand") };
        assert_eq!(query.brands, vec!["Rolex", "Omega"]);
        assert_eq!(query.format, ExportFormat::Json);
        assert!(strict_match);
    }

    #[test]
    fn top_defaults_to_two_hundred() {
        let cli = Cli::try_parse_from(["watchref", "top", "--chrono24", "a.csv"]).unwrap();
        assert_eq!(cli.chrono24, Some(OsString::from("a.csv")));
        let Command::Top { n, .. } = cli.command else { panic!("wrong subcommand") };
        assert_eq!(n, TOP_N);
    }

    fn comparator_without_model_numbers() -> Comparator {
        let chrono24 = DataSet::new(
            row![COL_BRAND, COL_REFERENCE, COL_YEAR_OF_PRODUCTION],
            vec![row!["Breitling", "AB123", "2020"], row!["Breitling", "AB124", "2021"]],
        );
        let luxtech = DataSet::new(row![COL_BRAND, "sku"], vec![row!["Breitling", "1"]]);
        Comparator::new(Catalogues::from_tables(chrono24, luxtech).into())
    }

    #[test]
    fn broken_luxtech_schema_keeps_chrono24_counts() {
        let cmp = comparator_without_model_numbers();
        let sel = BrandSelection::from_brands(["Breitling"]).unwrap();

        let (ok, failed) = split_views(overview_tables(&cmp, &sel, MatchPolicy::IdentifierOnly));
        assert_eq!(ok.len(), 1);
        assert_eq!(ok[0].0, "Chrono24 unique references");
        assert_eq!(ok[0].1.rows, vec![row!["Breitling", 2]]);
        let titles: Vec<&str> = failed.iter().map(|(t, _)| *t).collect();
        assert_eq!(titles, ["Common references", "Luxtech unique references"]);

        let query = Query { brands: vec![], format: ExportFormat::Csv, no_headers: false, out: None };
        assert!(emit(&query, overview_tables(&cmp, &sel, MatchPolicy::IdentifierOnly)).is_err());
    }

    #[test]
    fn top_rankings_fail_independently() {
        let chrono24 = DataSet::new(row![COL_BRAND, COL_REFERENCE], vec![row!["Omega", "311"]]);
        let luxtech = DataSet::new(row![COL_BRAND, COL_MODEL_NUMBER], vec![]);
        let cmp = Comparator::new(Catalogues::from_tables(chrono24, luxtech).into());
        let sel = BrandSelection::from_brands(["Omega"]).unwrap();

        let (ok, failed) = split_views(top_tables(&cmp, &sel, TOP_N));
        assert_eq!(ok.len(), 1);
        assert_eq!(ok[0].1.rows, vec![row!["Omega", "311", 1]]);
        assert_eq!(failed[0].0, "Top References - YOP");
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["watchref", "top", "--format", "xlsx"]).is_err());
    }
}
