// src/gui/components/export_bar.rs

use eframe::egui;
use crate::{
    aggregate::MatchPolicy,
    config::options::ExportFormat,
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        let export = &mut app.state.options.export;
        let prev_fmt = export.format;

        ui.label("Format:");
        ui.selectable_value(&mut export.format, ExportFormat::Csv, "CSV");
        ui.selectable_value(&mut export.format, ExportFormat::Tsv, "TSV");
        ui.selectable_value(&mut export.format, ExportFormat::Json, "JSON");
        if export.format != prev_fmt {
            logf!("UI: Export format → {:?}", export.format);
        }

        let before_headers = export.include_headers;
        ui.add_enabled(
            export.format != ExportFormat::Json,
            egui::Checkbox::new(&mut export.include_headers, "Include headers"),
        );
        if export.include_headers != before_headers {
            logf!("UI: Include_headers → {}", export.include_headers);
        }

        ui.separator();

        // Tightened matching: identifier must exist in Luxtech under the same brand.
        let mut strict = app.state.options.match_policy == MatchPolicy::IdentifierAndBrand;
        if ui
            .checkbox(&mut strict, "Match brand too")
            .on_hover_text("Count a reference as shared only when Luxtech lists it under the same brand")
            .changed()
        {
            app.state.options.match_policy = if strict {
                MatchPolicy::IdentifierAndBrand
            } else {
                MatchPolicy::IdentifierOnly
            };
            logf!("UI: Match policy → {:?}", app.state.options.match_policy);
            app.rebuild_view();
        }
    });

    ui.horizontal(|ui| {
        ui.label("Output dir:");
        ui.add(egui::TextEdit::singleline(&mut app.out_dir_text).font(egui::TextStyle::Monospace));

        if ui.button("Copy").clicked() {
            actions::copy(app, ui.ctx());
        }
        if ui.button("Export").clicked() {
            actions::export(app);
        }
    });
}
