// tests/aggregate.rs
use watchref::aggregate::{
    compute_overlap, count_unique_references, top_n_rankings, BrandCount, CatalogueCount, MatchPolicy,
};
use watchref::selection::BrandSelection;
use watchref::store::DataSet;

fn table(headers: &[&str], rows: &[&[&str]]) -> DataSet {
    DataSet::new(
        headers.iter().map(|h| h.to_string()).collect(),
        rows.iter().map(|r| r.iter().map(|c| c.to_string()).collect()).collect(),
    )
}

fn chrono24() -> DataSet {
    table(
        &["brand", "reference", "yearOfProduction"],
        &[
            &["Audemars Piguet", "15400", "2015"],
            &["Audemars Piguet", "15400", "2016"],
            &["Breitling", "AB123", "2020"],
        ],
    )
}

fn luxtech() -> DataSet {
    table(&["brand", "modelNumber"], &[&["Audemars Piguet", "15400"]])
}

fn sel(brands: &[&str]) -> BrandSelection {
    BrandSelection::from_brands(brands).unwrap()
}

#[test]
fn duplicate_listings_count_once() {
    let counts = count_unique_references(&chrono24(), "reference", "brand", &sel(&["Audemars Piguet", "Breitling"])).unwrap();
    assert_eq!(
        counts,
        vec![
            BrandCount { brand: "Audemars Piguet".into(), count: CatalogueCount::Present(1) },
            BrandCount { brand: "Breitling".into(), count: CatalogueCount::Present(1) },
        ]
    );
}

#[test]
fn overlap_reports_full_and_no_share() {
    let rows = compute_overlap(
        &chrono24(), "reference", &luxtech(), "modelNumber", "brand",
        &sel(&["Audemars Piguet", "Breitling"]), MatchPolicy::IdentifierOnly,
    )
    .unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].brand, "Audemars Piguet");
    assert_eq!((rows[0].common, rows[0].source_a, rows[0].percentage), (1, CatalogueCount::Present(1), 100.0));
    assert_eq!(rows[1].brand, "Breitling");
    assert_eq!((rows[1].common, rows[1].source_a, rows[1].percentage), (0, CatalogueCount::Present(1), 0.0));
}

#[test]
fn brand_missing_from_luxtech_is_absent_not_zero() {
    let counts = count_unique_references(&luxtech(), "modelNumber", "brand", &sel(&["Audemars Piguet", "Breitling"])).unwrap();
    assert_eq!(counts[0].count, CatalogueCount::Present(1));
    assert_eq!(counts[1].count, CatalogueCount::AbsentFromCatalogue);
    assert!(counts[1].count.is_absent());
}

#[test]
fn output_follows_selection_order() {
    let counts = count_unique_references(&chrono24(), "reference", "brand", &sel(&["Breitling", "Audemars Piguet"])).unwrap();
    let brands: Vec<&str> = counts.iter().map(|c| c.brand.as_str()).collect();
    assert_eq!(brands, ["Breitling", "Audemars Piguet"]);
}

#[test]
fn empty_selection_yields_empty_views() {
    let empty = BrandSelection::new();
    assert!(count_unique_references(&chrono24(), "reference", "brand", &empty).unwrap().is_empty());
    let overlap = compute_overlap(&chrono24(), "reference", &luxtech(), "modelNumber", "brand", &empty, MatchPolicy::IdentifierOnly).unwrap();
    assert!(overlap.is_empty());
}

#[test]
fn duplicating_rows_changes_nothing() {
    let mut doubled = chrono24();
    let copy = doubled.rows.clone();
    doubled.rows.extend(copy);
    let s = sel(&["Audemars Piguet", "Breitling"]);

    assert_eq!(
        count_unique_references(&doubled, "reference", "brand", &s).unwrap(),
        count_unique_references(&chrono24(), "reference", "brand", &s).unwrap(),
    );
    assert_eq!(
        compute_overlap(&doubled, "reference", &luxtech(), "modelNumber", "brand", &s, MatchPolicy::IdentifierOnly).unwrap(),
        compute_overlap(&chrono24(), "reference", &luxtech(), "modelNumber", "brand", &s, MatchPolicy::IdentifierOnly).unwrap(),
    );
}

#[test]
fn percentage_stays_within_bounds() {
    let a = table(
        &["brand", "reference"],
        &[&["Omega", "1"], &["Omega", "2"], &["Omega", "3"], &["Rolex", "9"]],
    );
    let b = table(&["brand", "modelNumber"], &[&["Omega", "1"], &["Omega", "1"], &["Omega", "7"], &["Rolex", "9"]]);
    let rows = compute_overlap(&a, "reference", &b, "modelNumber", "brand", &sel(&["Omega", "Rolex"]), MatchPolicy::IdentifierOnly).unwrap();
    for r in &rows {
        assert!((0.0..=100.0).contains(&r.percentage), "{r:?}");
        assert!(r.common <= r.source_a.count().unwrap());
    }
    assert_eq!(rows[0].percentage, 33.3);
    assert_eq!(rows[1].percentage, 100.0);
}

#[test]
fn strict_policy_requires_same_brand() {
    // Same reference listed under a different brand in Luxtech
    let a = table(&["brand", "reference"], &[&["Omega", "X1"], &["Rolex", "X1"]]);
    let b = table(&["brand", "modelNumber"], &[&["Rolex", "X1"]]);
    let s = sel(&["Omega", "Rolex"]);

    let loose = compute_overlap(&a, "reference", &b, "modelNumber", "brand", &s, MatchPolicy::IdentifierOnly).unwrap();
    assert_eq!((loose[0].common, loose[1].common), (1, 1));

    let strict = compute_overlap(&a, "reference", &b, "modelNumber", "brand", &s, MatchPolicy::IdentifierAndBrand).unwrap();
    assert_eq!((strict[0].common, strict[1].common), (0, 1));
}

#[test]
fn overlap_ignores_unselected_luxtech_brands() {
    let a = table(&["brand", "reference"], &[&["Omega", "X1"]]);
    let b = table(&["brand", "modelNumber"], &[&["Tudor", "X1"]]);
    let rows = compute_overlap(&a, "reference", &b, "modelNumber", "brand", &sel(&["Omega"]), MatchPolicy::IdentifierOnly).unwrap();
    assert_eq!(rows[0].common, 0);
}

#[test]
fn empty_identifiers_are_not_references() {
    let a = table(&["brand", "reference"], &[&["Omega", ""], &["Omega", " "]]);
    let b = table(&["brand", "modelNumber"], &[&["Omega", ""]]);
    let s = sel(&["Omega"]);
    assert_eq!(count_unique_references(&a, "reference", "brand", &s).unwrap()[0].count, CatalogueCount::Present(0));
    let rows = compute_overlap(&a, "reference", &b, "modelNumber", "brand", &s, MatchPolicy::IdentifierOnly).unwrap();
    assert_eq!((rows[0].common, rows[0].percentage), (0, 0.0));
}

#[test]
fn top_n_returns_all_groups_when_fewer_than_n() {
    let t = table(
        &["brand", "reference"],
        &[
            &["Omega", "A"], &["Omega", "A"], &["Omega", "A"],
            &["Omega", "B"], &["Omega", "B"],
            &["Rolex", "C"], &["Rolex", "D"], &["Rolex", "E"],
        ],
    );
    let rows = top_n_rankings(&t, &["brand", "reference"], 200).unwrap();
    assert_eq!(rows.len(), 5);
    assert!(rows.windows(2).all(|w| w[0].count >= w[1].count));
    assert_eq!(rows[0].key, ["Omega", "A"]);
    assert_eq!(rows[0].count, 3);
    // ties in key order
    let tail: Vec<&str> = rows[2..].iter().map(|r| r.key[1].as_str()).collect();
    assert_eq!(tail, ["C", "D", "E"]);
}

#[test]
fn top_n_truncates() {
    let t = chrono24();
    let rows = top_n_rankings(&t, &["brand", "reference", "yearOfProduction"], 2).unwrap();
    assert_eq!(rows.len(), 2);
    assert!(top_n_rankings(&t, &["brand"], 0).unwrap().is_empty());
}

#[test]
fn missing_column_is_a_schema_error() {
    let err = count_unique_references(&luxtech(), "reference", "brand", &sel(&["Omega"])).unwrap_err();
    assert!(err.to_string().contains("reference"));
}

#[test]
fn ranking_ties_are_reproducible_across_mixed_references() {
    let mut refs: Vec<String> = Vec::new();
    for i in 0..160 {
        refs.push(format!("{}", 100_000 + i * 7));
        refs.push(format!("{}ST", 15000 + i));
        refs.push(format!("{}", 10 + i * 3));
    }
    let rows: Vec<Vec<String>> = refs.iter().map(|r| vec!["Patek Philippe".to_string(), r.clone()]).collect();
    let t = DataSet::new(vec!["brand".into(), "reference".into()], rows);

    let first = top_n_rankings(&t, &["brand", "reference"], 1_000).unwrap();
    assert_eq!(first.len(), 480);
    for _ in 0..20 {
        assert_eq!(top_n_rankings(&t, &["brand", "reference"], 1_000).unwrap(), first);
    }

    let small = table(&["brand", "reference"], &[&["Patek Philippe", "15400ST"], &["Patek Philippe", "5711"], &["Patek Philippe", "15400"]]);
    for _ in 0..50 {
        let order: Vec<String> = top_n_rankings(&small, &["brand", "reference"], 10)
            .unwrap()
            .into_iter()
            .map(|r| r.key[1].clone())
            .collect();
        assert_eq!(order, ["5711", "15400", "15400ST"]);
    }
}

#[test]
fn brand_missing_from_chrono24_has_absent_overlap_row() {
    let rows = compute_overlap(
        &chrono24(), "reference", &luxtech(), "modelNumber", "brand",
        &sel(&["Rolex"]), MatchPolicy::IdentifierOnly,
    )
    .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].brand, "Rolex");
    assert_eq!(rows[0].source_a, CatalogueCount::AbsentFromCatalogue);
    assert_eq!(rows[0].common, 0);
    assert_eq!(rows[0].percentage, 0.0);
}
