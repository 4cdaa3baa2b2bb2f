// src/gui/components/brand_panel.rs
//
// Renders the left brand list and applies selection changes directly to `app`.
// Click toggles a brand; a full selection (max 3) refuses new picks.

use eframe::egui;

use crate::config::consts::MAX_SELECTED_BRANDS;
use crate::gui::app::App;
use crate::selection::BrandSelection;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Brands");
    ui.label(format!("Select {MAX_SELECTED_BRANDS} Brands (max {MAX_SELECTED_BRANDS}):"));

    // Apply current selection → rebuild views, set status.
    let apply_selection_change = |app: &mut App| {
        app.rebuild_view();
        app.set_selection_message();
        logf!("UI: Selection changed → {:?}", app.state.gui.selection.as_slice());
    };

    ui.horizontal(|ui| {
        if ui.button("Defaults").clicked() {
            app.state.gui.selection = BrandSelection::defaults_in(&app.brands);
            apply_selection_change(app);
        }
        if ui.button("None").clicked() {
            app.state.gui.selection.clear();
            apply_selection_change(app);
        }
    });

    // Current picks, in selection order
    ui.horizontal_wrapped(|ui| {
        for b in app.state.gui.selection.iter() {
            ui.label(format!("• {b}"));
        }
    });

    ui.add(egui::TextEdit::singleline(&mut app.brand_filter).hint_text("Filter…"));
    ui.separator();

    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.bar_inner_margin = 0.0;
        s.bar_outer_margin = -6.0;
        s.handle_min_length = 48.0;
        s.foreground_color = true;
        let visuals = &mut ui.style_mut().visuals;
        visuals.extreme_bg_color = visuals.panel_fill;
    }

    let needle = app.brand_filter.trim().to_lowercase();
    let mut clicked: Option<String> = None;

    egui::ScrollArea::vertical()
        .id_salt("brands_panel_scroll")
        .show(ui, |ui| {
            let w = ui.available_width();
            ui.set_min_width(w);

            for name in app.brands.iter() {
                if !needle.is_empty() && !name.to_lowercase().contains(&needle) { continue; }
                let is_selected = app.state.gui.selection.contains(name);
                if ui.selectable_label(is_selected, name.as_str()).clicked() {
                    clicked = Some(name.clone());
                }
            }
        });

    if let Some(name) = clicked {
        if app.state.gui.selection.toggle(&name) {
            apply_selection_change(app);
        } else {
            app.set_status(format!("At most {MAX_SELECTED_BRANDS} brands can be selected"));
            logd!("UI: Refused {} (selection full)", name);
        }
    }
}
