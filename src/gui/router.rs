// src/gui/router.rs
use super::pages::{ self, Page };

pub static PAGES: &[&'static dyn Page] = &[
    &pages::overview::PAGE,
    &pages::top_rankings::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}
