// src/gui/pages/top_rankings.rs
use eframe::egui;

use crate::{
    config::{consts::*, options::PageKind},
    gui::{
        app::App,
        components::{bar_chart, data_table},
    },
    store::DataSet,
    views::{self, TopRankings, ViewResult},
};

use super::Page;

const TABLE_H: f32 = 320.0;

pub struct TopRankingsPage;
pub static PAGE: TopRankingsPage = TopRankingsPage;

const BY_REFERENCE: [&str; 2] = [COL_BRAND, COL_REFERENCE];
const BY_REFERENCE_YEAR: [&str; 3] = [COL_BRAND, COL_REFERENCE, COL_YEAR_OF_PRODUCTION];

fn tables(top: &TopRankings) -> [(&'static str, ViewResult<DataSet>); 2] {
    [
        (
            "Top 200 References",
            top.by_reference.as_ref().map(|r| views::rankings_table(r, &BY_REFERENCE)).map_err(|e| e.clone()),
        ),
        (
            "Top 200 References - YOP",
            top.by_reference_year.as_ref().map(|r| views::rankings_table(r, &BY_REFERENCE_YEAR)).map_err(|e| e.clone()),
        ),
    ]
}

impl Page for TopRankingsPage {
    fn title(&self) -> &'static str { "Top 200" }
    fn kind(&self) -> PageKind { PageKind::TopRankings }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        let Some(top) = app.views.top.as_ref() else {
            ui.weak("(no data)");
            return;
        };

        let [by_ref, by_ref_year] = tables(top);
        ui.columns(2, |cols| {
            cols[0].strong(by_ref.0);
            data_table::draw_result(&mut cols[0], "top_by_reference", &by_ref.1, TABLE_H);
            cols[1].strong(by_ref_year.0);
            data_table::draw_result(&mut cols[1], "top_by_reference_year", &by_ref_year.1, TABLE_H);
        });

        ui.separator();
        ui.heading("Watch Year of Production Distribution");
        bar_chart::draw(ui, "Top references by year of production", &top.year_distribution, 180.0);
    }

    fn export_tables(&self, app: &App) -> Vec<(&'static str, DataSet)> {
        let Some(top) = app.views.top.as_ref() else { return Vec::new() };
        tables(top)
            .into_iter()
            .filter_map(|(title, t)| t.ok().map(|t| (title, t)))
            .collect()
    }
}
