// src/gui/mod.rs
pub mod app;
pub mod actions;
pub mod components;
pub mod pages;
pub mod router;

pub use app::run;
