// src/aggregate.rs
//! # Aggregator
//!
//! Pure reductions over the raw string tables. Every function takes the
//! table(s), the column names to read and the current `BrandSelection`, and
//! returns fresh rows. Nothing is cached; callers rerun these on every
//! selection change.
//!
//! ## Conventions
//! - Cells are compared **trimmed** and by exact string match.
//! - Empty identifiers are not references: they never count towards a
//!   catalogue size and never match across sources.
//! - Per-brand outputs carry **one row per selected brand, in selection
//!   order**. A brand with no rows in the table is `AbsentFromCatalogue`, never
//!   a silent zero.
//! - Missing columns are reported as `SchemaError`; nothing here panics on
//!   malformed rows (short rows read as empty cells).

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::error::SchemaError;
use crate::selection::BrandSelection;
use crate::store::DataSet;

/// Per-brand catalogue size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "count", rename_all = "snake_case")]
pub enum CatalogueCount {
    Present(usize),
    AbsentFromCatalogue,
}

impl CatalogueCount {
    pub fn count(&self) -> Option<usize> {
        match self {
            CatalogueCount::Present(n) => Some(*n),
            CatalogueCount::AbsentFromCatalogue => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, CatalogueCount::AbsentFromCatalogue)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BrandCount {
    pub brand: String,
    pub count: CatalogueCount,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OverlapRow {
    pub brand: String,
    /// common / source_a × 100, one decimal; 0.0 when source A is absent or empty.
    pub percentage: f64,
    pub source_a: CatalogueCount,
    pub common: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RankingRow {
    /// Group field values, in the order the fields were requested.
    pub key: Vec<String>,
    pub count: usize,
}

/// How a source-A identifier is matched against source B.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MatchPolicy {
    /// Identifier found anywhere in (brand-filtered) source B.
    #[default]
    IdentifierOnly,
    /// Identifier found in source B under the same brand.
    IdentifierAndBrand,
}

/* ---------------- Brand filter ---------------- */

/// Rows whose brand is selected, original order kept.
pub fn filter_brands(
    table: &DataSet,
    brand_field: &str,
    selection: &BrandSelection,
) -> Result<DataSet, SchemaError> {
    let brand_ix = table.column(brand_field)?;
    let rows = table
        .rows
        .iter()
        .filter(|r| selection.contains(DataSet::cell(r, brand_ix)))
        .cloned()
        .collect();
    Ok(table.with_rows(rows))
}

/* ---------------- Catalogue sizes ---------------- */

/// Distinct identifiers per selected brand. A brand key exists iff the brand
/// has at least one row (even if all its identifiers are empty).
fn distinct_per_brand<'a, I>(
    rows: I,
    id_ix: usize,
    brand_ix: usize,
    selection: &BrandSelection,
) -> HashMap<&'a str, HashSet<&'a str>>
where
    I: IntoIterator<Item = &'a Vec<String>>,
{
    let mut per_brand: HashMap<&str, HashSet<&str>> = HashMap::new();
    for row in rows {
        let brand = DataSet::cell(row, brand_ix);
        if !selection.contains(brand) { continue; }
        let ids = per_brand.entry(brand).or_default();
        let id = DataSet::cell(row, id_ix);
        if !id.is_empty() { ids.insert(id); }
    }
    per_brand
}

fn counts_in_selection_order(
    per_brand: &HashMap<&str, HashSet<&str>>,
    selection: &BrandSelection,
) -> Vec<BrandCount> {
    selection
        .iter()
        .map(|brand| BrandCount {
            brand: s!(brand),
            count: per_brand
                .get(brand)
                .map(|ids| CatalogueCount::Present(ids.len()))
                .unwrap_or(CatalogueCount::AbsentFromCatalogue),
        })
        .collect()
}

/// Number of distinct identifiers per selected brand.
///
/// Duplicate listings of the same reference count once. Every brand of the
/// selection gets exactly one entry, `AbsentFromCatalogue` when the table
/// has no row for it.
pub fn count_unique_references(
    table: &DataSet,
    identifier_field: &str,
    brand_field: &str,
    selection: &BrandSelection,
) -> Result<Vec<BrandCount>, SchemaError> {
    let id_ix = table.column(identifier_field)?;
    let brand_ix = table.column(brand_field)?;
    let per_brand = distinct_per_brand(&table.rows, id_ix, brand_ix, selection);
    Ok(counts_in_selection_order(&per_brand, selection))
}

/* ---------------- Overlap ---------------- */

/// Identifiers of the selected-brand rows of source B, as needed by `policy`.
struct Membership<'a> {
    policy: MatchPolicy,
    ids: HashSet<&'a str>,
    pairs: HashSet<(&'a str, &'a str)>,
}

impl<'a> Membership<'a> {
    fn build(
        table_b: &'a DataSet,
        id_ix: usize,
        brand_ix: usize,
        selection: &BrandSelection,
        policy: MatchPolicy,
    ) -> Self {
        let mut ids = HashSet::new();
        let mut pairs = HashSet::new();
        for row in &table_b.rows {
            let brand = DataSet::cell(row, brand_ix);
            let id = DataSet::cell(row, id_ix);
            if id.is_empty() || !selection.contains(brand) { continue; }
            match policy {
                MatchPolicy::IdentifierOnly => { ids.insert(id); }
                MatchPolicy::IdentifierAndBrand => { pairs.insert((brand, id)); }
            }
        }
        Self { policy, ids, pairs }
    }

    fn contains(&self, brand: &str, id: &str) -> bool {
        if id.is_empty() { return false; }
        match self.policy {
            MatchPolicy::IdentifierOnly => self.ids.contains(id),
            MatchPolicy::IdentifierAndBrand => self.pairs.contains(&(brand, id)),
        }
    }
}

/// Indices of source-A rows (selected brands) whose identifier is also in source B.
fn common_row_indices(
    table_a: &DataSet,
    id_field_a: &str,
    table_b: &DataSet,
    id_field_b: &str,
    brand_field: &str,
    selection: &BrandSelection,
    policy: MatchPolicy,
) -> Result<(Vec<usize>, usize, usize), SchemaError> {
    let a_id = table_a.column(id_field_a)?;
    let a_brand = table_a.column(brand_field)?;
    let b_id = table_b.column(id_field_b)?;
    let b_brand = table_b.column(brand_field)?;

    let members = Membership::build(table_b, b_id, b_brand, selection, policy);
    let ix = table_a
        .rows
        .iter()
        .enumerate()
        .filter(|(_, r)| {
            let brand = DataSet::cell(r, a_brand);
            selection.contains(brand) && members.contains(brand, DataSet::cell(r, a_id))
        })
        .map(|(i, _)| i)
        .collect();
    Ok((ix, a_id, a_brand))
}

/// Source-A rows shared with source B, duplicates kept (detail view).
pub fn common_rows(
    table_a: &DataSet,
    id_field_a: &str,
    table_b: &DataSet,
    id_field_b: &str,
    brand_field: &str,
    selection: &BrandSelection,
    policy: MatchPolicy,
) -> Result<DataSet, SchemaError> {
    let (ix, _, _) = common_row_indices(
        table_a, id_field_a, table_b, id_field_b, brand_field, selection, policy,
    )?;
    Ok(table_a.with_rows(ix.into_iter().map(|i| table_a.rows[i].clone()).collect()))
}

/// Shared-reference statistics per selected brand.
///
/// `common` counts distinct source-A identifiers (within the brand) that
/// also occur in source B; it is a subset of the source-A catalogue, so the
/// percentage always lands in `[0, 100]`. The per-brand merge is keyed by
/// brand name, never by row position.
pub fn compute_overlap(
    table_a: &DataSet,
    id_field_a: &str,
    table_b: &DataSet,
    id_field_b: &str,
    brand_field: &str,
    selection: &BrandSelection,
    policy: MatchPolicy,
) -> Result<Vec<OverlapRow>, SchemaError> {
    let (ix, a_id, a_brand) = common_row_indices(
        table_a, id_field_a, table_b, id_field_b, brand_field, selection, policy,
    )?;

    let source_a = distinct_per_brand(&table_a.rows, a_id, a_brand, selection);
    let common = distinct_per_brand(ix.iter().map(move |&i| &table_a.rows[i]), a_id, a_brand, selection);

    let rows = counts_in_selection_order(&source_a, selection)
        .into_iter()
        .map(|bc| {
            let shared = common.get(bc.brand.as_str()).map(|s| s.len()).unwrap_or(0);
            OverlapRow {
                percentage: percentage(shared, bc.count),
                source_a: bc.count,
                common: shared,
                brand: bc.brand,
            }
        })
        .collect();
    Ok(rows)
}

/// `part / whole × 100` rounded to one decimal; 0.0 unless `whole` is a
/// present, non-zero count.
pub fn percentage(part: usize, whole: CatalogueCount) -> f64 {
    match whole {
        CatalogueCount::Present(n) if n > 0 => round1(part as f64 / n as f64 * 100.0),
        _ => 0.0,
    }
}

/// One decimal, halves to even ("6.25" → 6.2).
#[inline]
pub(crate) fn round1(x: f64) -> f64 {
    (x * 10.0).round_ties_even() / 10.0
}

/* ---------------- Rankings ---------------- */

fn numeric(cell: &str) -> Option<f64> {
    cell.parse::<f64>().ok().filter(|f| f.is_finite())
}

/// Numeric-aware total order on cells: every number sorts before every
/// non-number, numbers by value, then text breaks the remaining ties
/// ("1" vs "1.0").
pub(crate) fn cmp_cells(a: &str, b: &str) -> Ordering {
    let by_kind = match (numeric(a), numeric(b)) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    by_kind.then_with(|| a.cmp(b))
}

fn cmp_keys(a: &[&str], b: &[&str]) -> Ordering {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| cmp_cells(x, y))
        .find(|o| o.is_ne())
        .unwrap_or_else(|| a.len().cmp(&b.len()))
}

/// Top-`n` groups by row count.
///
/// Groups are first ordered by key (ascending, numeric-aware), then stably
/// sorted by count descending, so equal counts keep key order. Rows with an
/// empty value in any group field form no group.
pub fn top_n_rankings(
    table: &DataSet,
    group_fields: &[&str],
    n: usize,
) -> Result<Vec<RankingRow>, SchemaError> {
    let cols = table.columns(group_fields)?;

    let mut counts: HashMap<Vec<&str>, usize> = HashMap::new();
    for row in &table.rows {
        let key: Vec<&str> = cols.iter().map(|&c| DataSet::cell(row, c)).collect();
        if key.iter().any(|k| k.is_empty()) { continue; }
        *counts.entry(key).or_insert(0) += 1;
    }

    let mut groups: Vec<(Vec<&str>, usize)> = counts.into_iter().collect();
    groups.sort_by(|a, b| cmp_keys(&a.0, &b.0));
    groups.sort_by(|a, b| b.1.cmp(&a.1));
    groups.truncate(n);

    Ok(groups
        .into_iter()
        .map(|(key, count)| RankingRow {
            key: key.into_iter().map(String::from).collect(),
            count,
        })
        .collect())
}

/* ---------------- Detail tables ---------------- */

/// Production year from a cell. Accepts "2015" and float renderings like "2015.0".
pub fn parse_year(cell: &str) -> Option<i32> {
    let t = cell.trim();
    if t.is_empty() { return None; }
    if let Ok(y) = t.parse::<i32>() { return Some(y); }
    t.parse::<f64>()
        .ok()
        .filter(|f| f.is_finite() && f.fract() == 0.0)
        .filter(|f| (i32::MIN as f64..=i32::MAX as f64).contains(f))
        .map(|f| f as i32)
}

/// Rows sorted by production year ascending (stable); missing years last.
pub fn sort_by_year(table: &DataSet, year_field: &str) -> Result<DataSet, SchemaError> {
    let year_ix = table.column(year_field)?;
    let mut rows = table.rows.clone();
    rows.sort_by(|a, b| {
        match (parse_year(DataSet::cell(a, year_ix)), parse_year(DataSet::cell(b, year_ix))) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    });
    Ok(table.with_rows(rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_rounds_to_one_decimal() {
        assert_eq!(percentage(1, CatalogueCount::Present(3)), 33.3);
        assert_eq!(percentage(2, CatalogueCount::Present(3)), 66.7);
        assert_eq!(percentage(0, CatalogueCount::Present(0)), 0.0);
        assert_eq!(percentage(0, CatalogueCount::AbsentFromCatalogue), 0.0);
        // exact halves go to even
        assert_eq!(percentage(1, CatalogueCount::Present(16)), 6.2);
        assert_eq!(percentage(3, CatalogueCount::Present(16)), 18.8);
    }

    #[test]
    fn years_parse_from_int_and_float_text() {
        assert_eq!(parse_year("2015"), Some(2015));
        assert_eq!(parse_year(" 2016.0 "), Some(2016));
        assert_eq!(parse_year("2016.5"), None);
        assert_eq!(parse_year("nan"), None);
        assert_eq!(parse_year(""), None);
        assert_eq!(parse_year("1e12"), None);
        assert_eq!(parse_year("-1e12"), None);
    }

    #[test]
    fn cells_compare_numerically_when_possible() {
        assert_eq!(cmp_cells("999", "2015"), Ordering::Less);
        assert_eq!(cmp_cells("AB123", "15400"), Ordering::Greater);
        assert_eq!(cmp_keys(&["a", "2"], &["a", "10"]), Ordering::Less);
    }

    #[test]
    fn cell_order_is_transitive_on_mixed_references() {
        let mut cells = vec!["15400ST", "5711", "15400", "nan", "1.0", "1", "AB123"];
        cells.sort_by(|a, b| cmp_cells(a, b));
        assert_eq!(cells, ["1", "1.0", "5711", "15400", "15400ST", "AB123", "nan"]);
        for a in &cells {
            for b in &cells {
                assert_eq!(cmp_cells(a, b), cmp_cells(b, a).reverse(), "{a} vs {b}");
            }
        }
    }
}
