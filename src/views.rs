// src/views.rs
//
// Comparator: the stateless query surface the GUI and CLI call whenever the
// brand selection changes. Holds the immutable `Catalogues` and nothing else.
//
// Each view is its own `Result`, so a schema problem in one source only
// blanks the views that read it.

use std::collections::HashSet;
use std::sync::Arc;

use crate::aggregate::{
    self, BrandCount, CatalogueCount, MatchPolicy, OverlapRow, RankingRow,
};
use crate::catalogue::{Catalogue, Catalogues, Source};
use crate::charts::{self, Series, ShareRow};
use crate::config::consts::*;
use crate::error::SchemaError;
use crate::selection::BrandSelection;
use crate::store::DataSet;

pub type ViewResult<T> = Result<T, SchemaError>;

/// Overview page: catalogue sizes and overlap.
#[derive(Clone, Debug)]
pub struct Overview {
    pub chrono24: ViewResult<Vec<BrandCount>>,
    pub luxtech: ViewResult<Vec<BrandCount>>,
    pub overlap: ViewResult<Vec<OverlapRow>>,
}

/// Detail section under the overview (rows + chart inputs).
/// Sections that don't apply to a source are left empty.
#[derive(Clone, Debug, Default)]
pub struct Detail {
    pub rows: DataSet,
    pub year_histogram: Vec<Series>,
    pub reference_share: Vec<ShareRow>,
    pub reference_frequency: Vec<Series>,
}

/// Top-N page.
#[derive(Clone, Debug)]
pub struct TopRankings {
    pub by_reference: ViewResult<Vec<RankingRow>>,
    pub by_reference_year: ViewResult<Vec<RankingRow>>,
    pub year_distribution: Vec<Series>,
}

#[derive(Clone, Debug)]
pub struct Comparator {
    catalogues: Arc<Catalogues>,
}

fn year_field(cat: &Catalogue) -> ViewResult<&str> {
    cat.schema().year.as_deref().ok_or_else(|| SchemaError::MissingColumn {
        column: s!(COL_YEAR_OF_PRODUCTION),
        available: cat.table().headers.clone().unwrap_or_default(),
    })
}

fn logged<T>(view: &str, r: ViewResult<T>) -> ViewResult<T> {
    if let Err(e) = &r {
        loge!("View: {} failed: {}", view, e);
    }
    r
}

impl Comparator {
    pub fn new(catalogues: Arc<Catalogues>) -> Self {
        Self { catalogues }
    }

    pub fn catalogues(&self) -> &Catalogues { &self.catalogues }

    /// Selectable brands: distinct Chrono24 brands, first-appearance order.
    pub fn brands(&self) -> Vec<String> {
        let cat = &self.catalogues.chrono24;
        let Ok(ix) = cat.table().column(&cat.schema().brand) else {
            loge!("Brands: {} has no `{}` column", cat.source(), cat.schema().brand);
            return Vec::new();
        };
        let mut seen = HashSet::new();
        cat.table()
            .rows
            .iter()
            .map(|r| DataSet::cell(r, ix))
            .filter(|b| !b.is_empty() && seen.insert(*b))
            .map(String::from)
            .collect()
    }

    pub fn default_selection(&self) -> BrandSelection {
        BrandSelection::defaults_in(&self.brands())
    }

    fn counts(&self, source: Source, selection: &BrandSelection) -> ViewResult<Vec<BrandCount>> {
        let cat = self.catalogues.get(source);
        aggregate::count_unique_references(
            cat.table(),
            &cat.schema().identifier,
            &cat.schema().brand,
            selection,
        )
    }

    fn overlap(&self, selection: &BrandSelection, policy: MatchPolicy) -> ViewResult<Vec<OverlapRow>> {
        let (a, b) = (&self.catalogues.chrono24, &self.catalogues.luxtech);
        aggregate::compute_overlap(
            a.table(),
            &a.schema().identifier,
            b.table(),
            &b.schema().identifier,
            &a.schema().brand,
            selection,
            policy,
        )
    }

    pub fn overview(&self, selection: &BrandSelection, policy: MatchPolicy) -> Overview {
        logd!("View: overview for {:?} ({:?})", selection.as_slice(), policy);
        Overview {
            chrono24: logged("chrono24 counts", self.counts(Source::Chrono24, selection)),
            luxtech: logged("luxtech counts", self.counts(Source::Luxtech, selection)),
            overlap: logged("overlap", self.overlap(selection, policy)),
        }
    }

    /// Chrono24 rows for the selection, by year, with its charts.
    pub fn chrono24_detail(&self, selection: &BrandSelection) -> ViewResult<Detail> {
        let cat = &self.catalogues.chrono24;
        let detail = aggregate::filter_brands(cat.table(), &cat.schema().brand, selection)
            .and_then(|rows| year_detail(cat, rows));
        logged("chrono24 detail", detail)
    }

    /// Chrono24 rows whose reference is also listed by Luxtech.
    pub fn common_detail(&self, selection: &BrandSelection, policy: MatchPolicy) -> ViewResult<Detail> {
        let (a, b) = (&self.catalogues.chrono24, &self.catalogues.luxtech);
        let detail = aggregate::common_rows(
            a.table(),
            &a.schema().identifier,
            b.table(),
            &b.schema().identifier,
            &a.schema().brand,
            selection,
            policy,
        )
        .and_then(|rows| year_detail(a, rows));
        logged("common detail", detail)
    }

    /// Luxtech rows for the selection (no year data) and reference frequency.
    pub fn luxtech_detail(&self, selection: &BrandSelection) -> ViewResult<Detail> {
        let cat = &self.catalogues.luxtech;
        let schema = cat.schema();
        let detail = aggregate::filter_brands(cat.table(), &schema.brand, selection).and_then(|rows| {
            let reference_frequency = charts::reference_frequency(&rows, &schema.brand, &schema.identifier)?;
            Ok(Detail { rows, reference_frequency, ..Detail::default() })
        });
        logged("luxtech detail", detail)
    }

    pub fn top_rankings(&self, selection: &BrandSelection, n: usize) -> TopRankings {
        let cat = &self.catalogues.chrono24;
        let schema = cat.schema();

        let filtered = aggregate::filter_brands(cat.table(), &schema.brand, selection);
        let by_reference = filtered.as_ref().map_err(|e| e.clone()).and_then(|t| {
            aggregate::top_n_rankings(t, &[schema.brand.as_str(), schema.identifier.as_str()], n)
        });
        let by_reference_year = filtered.as_ref().map_err(|e| e.clone()).and_then(|t| {
            let year = year_field(cat)?;
            aggregate::top_n_rankings(t, &[schema.brand.as_str(), schema.identifier.as_str(), year], n)
        });

        let year_distribution = by_reference_year
            .as_ref()
            .map(|rows| charts::ranking_year_histogram(rows, 0, 2))
            .unwrap_or_default();

        TopRankings {
            by_reference: logged("top by reference", by_reference),
            by_reference_year: logged("top by reference+year", by_reference_year),
            year_distribution,
        }
    }
}

fn year_detail(cat: &Catalogue, rows: DataSet) -> ViewResult<Detail> {
    let schema = cat.schema();
    let year = year_field(cat)?;
    let rows = aggregate::sort_by_year(&rows, year)?;
    Ok(Detail {
        year_histogram: charts::year_histogram(&rows, &schema.brand, year)?,
        reference_share: charts::reference_share(&rows, &schema.brand, &schema.identifier)?,
        reference_frequency: charts::reference_frequency(&rows, &schema.brand, &schema.identifier)?,
        rows,
    })
}

/* ---------------- Display tables ---------------- */

pub fn count_text(count: CatalogueCount, absent_text: &str) -> String {
    match count {
        CatalogueCount::Present(n) => n.to_string(),
        CatalogueCount::AbsentFromCatalogue => s!(absent_text),
    }
}

/// Percentages always show one decimal ("100.0", "0.0").
pub fn percentage_text(p: f64) -> String {
    format!("{p:.1}")
}

/// (brand, #) table.
pub fn counts_table(counts: &[BrandCount], absent_text: &str) -> DataSet {
    DataSet::new(
        row![COL_BRAND, "#"],
        counts
            .iter()
            .map(|c| vec![c.brand.clone(), count_text(c.count, absent_text)])
            .collect(),
    )
}

/// (brand, % of Chrono24, # CH24, # common) table.
pub fn overlap_table(rows: &[OverlapRow]) -> DataSet {
    DataSet::new(
        row![COL_BRAND, "% of Chrono24", "# CH24", "# common"],
        rows.iter()
            .map(|r| {
                let common = if r.common == 0 { s!(NO_SHARED_TEXT) } else { r.common.to_string() };
                vec![
                    r.brand.clone(),
                    percentage_text(r.percentage),
                    count_text(r.source_a, ABSENT_TEXT),
                    common,
                ]
            })
            .collect(),
    )
}

/// Group fields + count.
pub fn rankings_table(rows: &[RankingRow], key_headers: &[&str]) -> DataSet {
    let mut headers: Vec<String> = key_headers.iter().map(|h| s!(*h)).collect();
    headers.push(s!("count"));
    DataSet::new(
        headers,
        rows.iter()
            .map(|r| {
                let mut out = r.key.clone();
                out.push(r.count.to_string());
                out
            })
            .collect(),
    )
}

pub fn share_table(rows: &[ShareRow]) -> DataSet {
    DataSet::new(
        row![COL_BRAND, COL_REFERENCE, "count", "percentage"],
        rows.iter()
            .map(|r| row![r.brand, r.reference, r.count, percentage_text(r.percentage)])
            .collect(),
    )
}
