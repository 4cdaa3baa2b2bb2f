// src/charts.rs
//
// Chart inputs. Each series is a direct reduction of a table the views
// already produce; the GUI only paints them.
//
// Series are per brand, brands ascending by name, bars in key order.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::aggregate::{cmp_cells, parse_year, round1, RankingRow};
use crate::error::SchemaError;
use crate::store::DataSet;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Bar {
    pub label: String,
    pub value: f64,
}

/// One colored group of bars (one brand).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Series {
    pub name: String,
    pub bars: Vec<Bar>,
}

impl Series {
    pub fn max_value(&self) -> f64 {
        self.bars.iter().map(|b| b.value).fold(0.0, f64::max)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ShareRow {
    pub brand: String,
    pub reference: String,
    pub count: usize,
    /// Share of the brand's rows, one decimal.
    pub percentage: f64,
}

fn year_series(per_brand: BTreeMap<String, BTreeMap<i32, usize>>) -> Vec<Series> {
    per_brand
        .into_iter()
        .map(|(name, years)| Series {
            name,
            bars: years
                .into_iter()
                .map(|(y, n)| Bar { label: y.to_string(), value: n as f64 })
                .collect(),
        })
        .collect()
}

/// Rows per production year, per brand. Rows without a usable year are skipped.
pub fn year_histogram(
    table: &DataSet,
    brand_field: &str,
    year_field: &str,
) -> Result<Vec<Series>, SchemaError> {
    let brand_ix = table.column(brand_field)?;
    let year_ix = table.column(year_field)?;

    let mut per_brand: BTreeMap<String, BTreeMap<i32, usize>> = BTreeMap::new();
    for row in &table.rows {
        let Some(year) = parse_year(DataSet::cell(row, year_ix)) else { continue };
        let brand = DataSet::cell(row, brand_ix);
        *per_brand.entry(s!(brand)).or_default().entry(year).or_insert(0) += 1;
    }
    Ok(year_series(per_brand))
}

/// Count per (brand, identifier), in key order.
fn counts_by_reference<'a>(
    table: &'a DataSet,
    brand_ix: usize,
    id_ix: usize,
) -> Vec<((&'a str, &'a str), usize)> {
    let mut counts: HashMap<(&str, &str), usize> = HashMap::new();
    for row in &table.rows {
        let id = DataSet::cell(row, id_ix);
        if id.is_empty() { continue; }
        *counts.entry((DataSet::cell(row, brand_ix), id)).or_insert(0) += 1;
    }
    let mut out: Vec<_> = counts.into_iter().collect();
    out.sort_by(|a, b| a.0.0.cmp(b.0.0).then_with(|| cmp_cells(a.0.1, b.0.1)));
    out
}

/// Percentage share of each reference within its brand.
pub fn reference_share(
    table: &DataSet,
    brand_field: &str,
    id_field: &str,
) -> Result<Vec<ShareRow>, SchemaError> {
    let brand_ix = table.column(brand_field)?;
    let id_ix = table.column(id_field)?;
    let counts = counts_by_reference(table, brand_ix, id_ix);

    let mut totals: HashMap<&str, usize> = HashMap::new();
    for ((brand, _), n) in &counts {
        *totals.entry(*brand).or_insert(0) += n;
    }

    Ok(counts
        .iter()
        .map(|((brand, reference), n)| {
            let total = totals.get(brand).copied().unwrap_or(0);
            let percentage = if total > 0 { round1(*n as f64 / total as f64 * 100.0) } else { 0.0 };
            ShareRow { brand: s!(*brand), reference: s!(*reference), count: *n, percentage }
        })
        .collect())
}

/// Share rows as bar series (value = percentage).
pub fn share_series(rows: &[ShareRow]) -> Vec<Series> {
    let mut per_brand: BTreeMap<&str, Vec<Bar>> = BTreeMap::new();
    for r in rows {
        per_brand.entry(r.brand.as_str()).or_default().push(Bar {
            label: r.reference.clone(),
            value: r.percentage,
        });
    }
    per_brand
        .into_iter()
        .map(|(name, bars)| Series { name: s!(name), bars })
        .collect()
}

/// Listings per reference, per brand.
pub fn reference_frequency(
    table: &DataSet,
    brand_field: &str,
    id_field: &str,
) -> Result<Vec<Series>, SchemaError> {
    let brand_ix = table.column(brand_field)?;
    let id_ix = table.column(id_field)?;

    let mut per_brand: BTreeMap<&str, Vec<Bar>> = BTreeMap::new();
    for ((brand, reference), n) in counts_by_reference(table, brand_ix, id_ix) {
        per_brand.entry(brand).or_default().push(Bar { label: s!(reference), value: n as f64 });
    }
    Ok(per_brand
        .into_iter()
        .map(|(name, bars)| Series { name: s!(name), bars })
        .collect())
}

/// Number of ranking groups per year, per brand.
/// `brand_pos` / `year_pos` index into `RankingRow::key`.
pub fn ranking_year_histogram(rankings: &[RankingRow], brand_pos: usize, year_pos: usize) -> Vec<Series> {
    let mut per_brand: BTreeMap<String, BTreeMap<i32, usize>> = BTreeMap::new();
    for r in rankings {
        let (Some(brand), Some(year)) = (r.key.get(brand_pos), r.key.get(year_pos).and_then(|y| parse_year(y))) else {
            continue;
        };
        *per_brand.entry(brand.clone()).or_default().entry(year).or_insert(0) += 1;
    }
    year_series(per_brand)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> DataSet {
        DataSet::new(
            row!["brand", "reference", "yearOfProduction"],
            vec![
                row!["Rolex", "116610", "2015"],
                row!["Omega", "311", "2015.0"],
                row!["Rolex", "116610", "2016"],
                row!["Rolex", "124060", ""],
                row!["Omega", "311", "2015"],
            ],
        )
    }

    #[test]
    fn year_histogram_skips_missing_years() {
        let s = year_histogram(&table(), "brand", "yearOfProduction").unwrap();
        assert_eq!(s.iter().map(|x| x.name.as_str()).collect::<Vec<_>>(), ["Omega", "Rolex"]);
        assert_eq!(s[0].bars, vec![Bar { label: s!("2015"), value: 2.0 }]);
        assert_eq!(s[1].bars.len(), 2);
    }

    #[test]
    fn share_sums_per_brand() {
        let rows = reference_share(&table(), "brand", "reference").unwrap();
        let rolex: Vec<_> = rows.iter().filter(|r| r.brand == "Rolex").collect();
        assert_eq!(rolex[0].reference, "116610");
        assert_eq!(rolex[0].percentage, 66.7);
        assert_eq!(rolex[1].percentage, 33.3);
        assert_eq!(share_series(&rows).len(), 2);
    }

    #[test]
    fn ranking_histogram_counts_groups() {
        let rankings = vec![
            RankingRow { key: row!["Rolex", "A", "2015"], count: 9 },
            RankingRow { key: row!["Rolex", "B", "2015"], count: 3 },
            RankingRow { key: row!["Rolex", "C", "n/a"], count: 1 },
        ];
        let s = ranking_year_histogram(&rankings, 0, 2);
        assert_eq!(s.len(), 1);
        assert_eq!(s[0].bars, vec![Bar { label: s!("2015"), value: 2.0 }]);
    }
}
