// tests/selection.rs
use watchref::error::SelectionError;
use watchref::selection::BrandSelection;

#[test]
fn at_most_three_brands() {
    let mut s = BrandSelection::from_brands(["Omega", "Rolex", "Tudor"]).unwrap();
    assert!(s.is_full());
    assert_eq!(s.insert("Zenith"), Err(SelectionError::TooManyBrands { max: 3 }));
    assert_eq!(s.len(), 3);

    assert!(BrandSelection::from_brands(["A", "B", "C", "D"]).is_err());
}

#[test]
fn duplicates_and_blanks_collapse() {
    let s = BrandSelection::from_brands(["Omega", "Omega", " ", "Rolex"]).unwrap();
    assert_eq!(s.as_slice(), ["Omega", "Rolex"]);
}

#[test]
fn toggle_adds_and_removes() {
    let mut s = BrandSelection::new();
    assert!(s.toggle("Omega"));
    assert!(s.contains("Omega"));
    assert!(s.toggle("Omega"));
    assert!(s.is_empty());
}

#[test]
fn toggle_refuses_when_full() {
    let mut s = BrandSelection::from_brands(["A", "B", "C"]).unwrap();
    assert!(!s.toggle("D"));
    assert!(!s.contains("D"));
    // removing still works when full
    assert!(s.toggle("B"));
    assert_eq!(s.as_slice(), ["A", "C"]);
}

#[test]
fn defaults_keep_only_known_brands() {
    let available = vec!["Breitling".to_string(), "Omega".to_string(), "Audemars Piguet".to_string()];
    let s = BrandSelection::defaults_in(&available);
    assert_eq!(s.as_slice(), ["Audemars Piguet", "Breitling"]);
}
