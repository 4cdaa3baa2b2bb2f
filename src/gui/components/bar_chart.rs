// src/gui/components/bar_chart.rs
//
// Grouped bar chart painted straight onto the egui painter.
// One color per series (brand); bars of the same label sit side by side.

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Vec2};

use crate::aggregate::cmp_cells;
use crate::charts::Series;

// Colors matched to the dashboard palette (blue, yellow, red, orange)
const PALETTE: [Color32; 4] = [
    Color32::from_rgb(0x64, 0xB4, 0xFF),
    Color32::from_rgb(0xF0, 0xD2, 0x3C),
    Color32::from_rgb(0xDC, 0x61, 0x49),
    Color32::from_rgb(0xFF, 0xA5, 0x00),
];

const MIN_SLOT_W: f32 = 14.0;
const AXIS_H: f32 = 18.0;

pub fn color_for(ix: usize) -> Color32 {
    PALETTE[ix % PALETTE.len()]
}

/// Union of labels across series, numeric-aware order.
fn labels(series: &[Series]) -> Vec<&str> {
    let mut out: Vec<&str> = Vec::new();
    for s in series {
        for b in &s.bars {
            if !out.contains(&b.label.as_str()) { out.push(b.label.as_str()); }
        }
    }
    out.sort_by(|a, b| cmp_cells(a, b));
    out
}

fn value_at(s: &Series, label: &str) -> f64 {
    s.bars.iter().find(|b| b.label == label).map(|b| b.value).unwrap_or(0.0)
}

pub fn draw(ui: &mut egui::Ui, title: &str, series: &[Series], height: f32) {
    ui.label(egui::RichText::new(title).strong());

    let labels = labels(series);
    if labels.is_empty() {
        ui.weak("(no data)");
        return;
    }

    // Legend
    ui.horizontal_wrapped(|ui| {
        for (i, s) in series.iter().enumerate() {
            let (rect, _) = ui.allocate_exact_size(Vec2::splat(10.0), Sense::hover());
            ui.painter().rect_filled(rect, 2.0, color_for(i));
            ui.label(s.name.as_str());
        }
    });

    let max = series.iter().map(Series::max_value).fold(0.0, f64::max).max(1.0);
    let slot_w = (ui.available_width() / labels.len() as f32).max(MIN_SLOT_W);
    let width = slot_w * labels.len() as f32;

    egui::ScrollArea::horizontal()
        .id_salt(("bar_chart", title))
        .show(ui, |ui| {
            let (rect, resp) = ui.allocate_exact_size(Vec2::new(width, height + AXIS_H), Sense::hover());
            let painter = ui.painter_at(rect);
            let visuals = ui.visuals();
            let plot = Rect::from_min_max(rect.min, Pos2::new(rect.max.x, rect.max.y - AXIS_H));

            painter.line_segment(
                [plot.left_bottom(), plot.right_bottom()],
                Stroke::new(1.0, visuals.weak_text_color()),
            );

            let n_series = series.len().max(1) as f32;
            let bar_w = ((slot_w - 2.0) / n_series).max(1.0);
            // Skip axis labels that would overlap
            let label_every = (40.0 / slot_w).ceil().max(1.0) as usize;

            for (li, label) in labels.iter().enumerate() {
                let x0 = plot.left() + li as f32 * slot_w + 1.0;
                for (si, s) in series.iter().enumerate() {
                    let v = value_at(s, label);
                    if v <= 0.0 { continue; }
                    let h = (v / max) as f32 * plot.height();
                    let bx = x0 + si as f32 * bar_w;
                    let bar = Rect::from_min_max(
                        Pos2::new(bx, plot.bottom() - h),
                        Pos2::new(bx + bar_w, plot.bottom()),
                    );
                    painter.rect_filled(bar, 0.0, color_for(si));
                }
                if li % label_every == 0 {
                    painter.text(
                        Pos2::new(x0 + slot_w * 0.5, plot.bottom() + 2.0),
                        Align2::CENTER_TOP,
                        *label,
                        FontId::proportional(10.0),
                        visuals.text_color(),
                    );
                }
            }
            painter.text(
                plot.left_top() + Vec2::new(2.0, 0.0),
                Align2::LEFT_TOP,
                format!("{max}"),
                FontId::proportional(10.0),
                visuals.weak_text_color(),
            );

            // Tooltip for the hovered slot
            if let Some(pos) = resp.hover_pos() {
                let li = ((pos.x - plot.left()) / slot_w).floor();
                if li >= 0.0 && (li as usize) < labels.len() {
                    let label = labels[li as usize];
                    let text = series
                        .iter()
                        .map(|s| format!("{}: {}", s.name, value_at(s, label)))
                        .collect::<Vec<_>>()
                        .join("\n");
                    resp.on_hover_text(format!("{label}\n{text}"));
                }
            }
        });
}
