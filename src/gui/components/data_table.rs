// src/gui/components/data_table.rs
//
// Draws one read-only table. Purely a view over a `DataSet`.
// Numeric cells are centered, text cells left-aligned.

use std::hash::Hash;

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::error::SchemaError;
use crate::store::DataSet;

const ROW_H: f32 = 20.0;
const HEADER_H: f32 = 24.0;

fn is_numeric(cell: &str) -> bool {
    !cell.is_empty() && cell.parse::<f64>().is_ok()
}

/// Either the table, or the schema problem that replaced it.
pub fn draw_result(
    ui: &mut egui::Ui,
    id_salt: impl Hash,
    table: &Result<DataSet, SchemaError>,
    max_height: f32,
) {
    match table {
        Ok(t) => draw(ui, id_salt, t, max_height),
        Err(e) => error_label(ui, e),
    }
}

pub fn error_label(ui: &mut egui::Ui, e: &SchemaError) {
    ui.colored_label(
        egui::Color32::from_rgb(0xDC, 0x61, 0x49),
        format!("View unavailable: {e}"),
    );
}

pub fn draw(ui: &mut egui::Ui, id_salt: impl Hash, table: &DataSet, max_height: f32) {
    let cols = table
        .headers
        .as_ref()
        .map(|h| h.len())
        .or_else(|| table.rows.first().map(|r| r.len()))
        .unwrap_or(0);
    if cols == 0 {
        ui.weak("(no data)");
        return;
    }

    // Match the scroll bar look of the side panel
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
        s.foreground_color = true;
    }

    let mut builder = TableBuilder::new(ui)
        .id_salt(id_salt)
        .striped(true)
        .min_scrolled_height(0.0)
        .max_scroll_height(max_height)
        .cell_layout(Layout::left_to_right(Align::Center));
    for ci in 0..cols {
        let col = if ci + 1 == cols {
            Column::remainder().at_least(60.0).clip(true)
        } else {
            Column::auto().at_least(60.0).resizable(true).clip(true)
        };
        builder = builder.column(col);
    }

    builder
        .header(HEADER_H, |mut header| {
            for ci in 0..cols {
                header.col(|ui| {
                    let label = table
                        .headers
                        .as_ref()
                        .and_then(|h| h.get(ci).cloned())
                        .unwrap_or_else(|| format!("Col {}", ci + 1));
                    ui.add(egui::Label::new(RichText::new(label).strong()).selectable(false));
                });
            }
        })
        .body(|body| {
            body.rows(ROW_H, table.rows.len(), |mut row| {
                let Some(data) = table.rows.get(row.index()) else { return };
                for ci in 0..cols {
                    let cell = data.get(ci).map(String::as_str).unwrap_or("");
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                        if is_numeric(cell) {
                            ui.centered_and_justified(|ui| { ui.label(cell); });
                        } else {
                            ui.label(cell);
                        }
                    });
                }
            });
        });
}
