// src/gui/pages/mod.rs
use eframe::egui;

use crate::{
    config::options::PageKind,
    gui::app::App,
    store::DataSet,
};

pub mod overview;
pub mod top_rankings;

pub trait Page: Send + Sync + 'static {
    fn title(&self) -> &'static str;
    fn kind(&self) -> PageKind;

    /// Draw the page body from `app.views`. Pages may flip GUI toggles and
    /// call `app.rebuild_view()`; they never compute aggregates themselves.
    fn draw(&self, ui: &mut egui::Ui, app: &mut App);

    /// Titled display tables for Copy/Export, as currently shown.
    /// Views that failed are left out.
    fn export_tables(&self, app: &App) -> Vec<(&'static str, DataSet)>;
}
