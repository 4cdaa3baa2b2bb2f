// src/gui/pages/overview.rs
use eframe::egui;

use crate::{
    charts,
    config::{consts::*, options::PageKind},
    gui::{
        app::App,
        components::{bar_chart, data_table},
    },
    store::DataSet,
    views::{self, Detail, ViewResult},
};

use super::Page;

const TABLE_H: f32 = 200.0;
const CHART_H: f32 = 160.0;

pub struct OverviewPage;
pub static PAGE: OverviewPage = OverviewPage;

fn draw_detail(ui: &mut egui::Ui, id: &str, detail: &ViewResult<Detail>, with_years: bool) {
    let d = match detail {
        Ok(d) => d,
        Err(e) => return data_table::error_label(ui, e),
    };
    data_table::draw(ui, (id, "rows"), &d.rows, TABLE_H);
    ui.add_space(6.0);
    if with_years {
        bar_chart::draw(ui, "Distribution of Year of Production by Brand", &d.year_histogram, CHART_H);
        ui.add_space(6.0);
        bar_chart::draw(ui, "Reference share by Brand (%)", &charts::share_series(&d.reference_share), CHART_H);
        ui.add_space(6.0);
    }
    bar_chart::draw(ui, "Reference Frequency by Brand", &d.reference_frequency, CHART_H);
}

impl Page for OverviewPage {
    fn title(&self) -> &'static str { "Overview" }
    fn kind(&self) -> PageKind { PageKind::Overview }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        ui.heading("About datas");

        let Some(ov) = app.views.overview.as_ref() else {
            ui.weak("(no data)");
            return;
        };

        ui.columns(3, |cols| {
            cols[0].strong("Chrono24 unique references");
            match &ov.chrono24 {
                Ok(c) => data_table::draw(&mut cols[0], "ov_chrono24", &views::counts_table(c, ABSENT_TEXT), TABLE_H),
                Err(e) => data_table::error_label(&mut cols[0], e),
            }

            cols[1].strong("Common references");
            match &ov.overlap {
                Ok(o) => data_table::draw(&mut cols[1], "ov_common", &views::overlap_table(o), TABLE_H),
                Err(e) => data_table::error_label(&mut cols[1], e),
            }

            cols[2].strong("Luxtech unique references");
            match &ov.luxtech {
                Ok(c) => data_table::draw(&mut cols[2], "ov_luxtech", &views::counts_table(c, LUXTECH_ABSENT_TEXT), TABLE_H),
                Err(e) => data_table::error_label(&mut cols[2], e),
            }
        });

        ui.separator();

        // Toggles are copied out, drawn, then written back once the view borrows end
        let mut show_a = app.state.gui.show_chrono24_details;
        let mut show_common = app.state.gui.show_common_details;
        let mut show_b = app.state.gui.show_luxtech_details;

        ui.checkbox(&mut show_a, "Show Chrono24 details");
        if let (true, Some(d)) = (show_a, app.views.chrono24_detail.as_ref()) {
            draw_detail(ui, "detail_chrono24", d, true);
            ui.separator();
        }

        ui.checkbox(&mut show_common, "Show details (common ref. in both catalogue)");
        if let (true, Some(d)) = (show_common, app.views.common_detail.as_ref()) {
            draw_detail(ui, "detail_common", d, true);
            ui.separator();
        }

        ui.checkbox(&mut show_b, "Show Luxtech catalogue details");
        if let (true, Some(d)) = (show_b, app.views.luxtech_detail.as_ref()) {
            draw_detail(ui, "detail_luxtech", d, false);
        }

        let gui = &mut app.state.gui;
        let changed = gui.show_chrono24_details != show_a
            || gui.show_common_details != show_common
            || gui.show_luxtech_details != show_b;
        if changed {
            gui.show_chrono24_details = show_a;
            gui.show_common_details = show_common;
            gui.show_luxtech_details = show_b;
            logf!("UI: Details → chrono24={}, common={}, luxtech={}", show_a, show_common, show_b);
            app.rebuild_view();
        }
    }

    fn export_tables(&self, app: &App) -> Vec<(&'static str, DataSet)> {
        let mut out = Vec::new();
        let Some(ov) = app.views.overview.as_ref() else { return out };

        if let Ok(c) = &ov.chrono24 {
            out.push(("Chrono24 unique references", views::counts_table(c, ABSENT_TEXT)));
        }
        if let Ok(o) = &ov.overlap {
            out.push(("Common references", views::overlap_table(o)));
        }
        if let Ok(c) = &ov.luxtech {
            out.push(("Luxtech unique references", views::counts_table(c, LUXTECH_ABSENT_TEXT)));
        }

        let details = [
            ("Chrono24 details", &app.views.chrono24_detail),
            ("Common details", &app.views.common_detail),
            ("Luxtech details", &app.views.luxtech_detail),
        ];
        for (title, detail) in details {
            if let Some(Ok(d)) = detail {
                out.push((title, d.rows.clone()));
            }
        }
        out
    }
}
