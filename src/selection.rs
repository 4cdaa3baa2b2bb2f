// src/selection.rs
//
// BrandSelection: the ordered set of brands that constrains every view.
// Ordered by insertion, no duplicates, at most MAX_SELECTED_BRANDS.

use serde::Serialize;

use crate::config::consts::{DEFAULT_BRANDS, MAX_SELECTED_BRANDS};
use crate::error::SelectionError;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BrandSelection {
    brands: Vec<String>,
}

impl BrandSelection {
    pub fn new() -> Self { Self::default() }

    /// Build from caller input. Blank names are ignored, repeats collapse.
    pub fn from_brands<I, S>(brands: I) -> Result<Self, SelectionError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut sel = Self::new();
        for b in brands {
            sel.insert(b.as_ref())?;
        }
        Ok(sel)
    }

    /// The stock defaults that actually exist among `available`.
    pub fn defaults_in(available: &[String]) -> Self {
        let brands = DEFAULT_BRANDS
            .iter()
            .filter(|d| available.iter().any(|a| a == *d))
            .map(|d| s!(*d))
            .collect();
        Self { brands }
    }

    /// Ok(true) if added, Ok(false) if already present or blank.
    pub fn insert(&mut self, brand: &str) -> Result<bool, SelectionError> {
        let brand = brand.trim();
        if brand.is_empty() || self.contains(brand) {
            return Ok(false);
        }
        if self.is_full() {
            return Err(SelectionError::TooManyBrands { max: MAX_SELECTED_BRANDS });
        }
        self.brands.push(s!(brand));
        Ok(true)
    }

    pub fn remove(&mut self, brand: &str) -> bool {
        let before = self.brands.len();
        self.brands.retain(|b| b != brand);
        self.brands.len() != before
    }

    /// Click semantics for the brand panel: deselect if selected, otherwise
    /// select unless the selection is full. Returns whether anything changed.
    pub fn toggle(&mut self, brand: &str) -> bool {
        if self.remove(brand) {
            return true;
        }
        matches!(self.insert(brand), Ok(true))
    }

    pub fn clear(&mut self) { self.brands.clear(); }

    pub fn contains(&self, brand: &str) -> bool {
        self.brands.iter().any(|b| b == brand)
    }

    pub fn len(&self) -> usize { self.brands.len() }
    pub fn is_empty(&self) -> bool { self.brands.is_empty() }
    pub fn is_full(&self) -> bool { self.brands.len() >= MAX_SELECTED_BRANDS }

    pub fn as_slice(&self) -> &[String] { &self.brands }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.brands.iter().map(String::as_str)
    }
}
