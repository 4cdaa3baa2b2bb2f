// src/gui/actions.rs
//
// Button "executive" actions for the export bar.
// Both work on the current page's display tables, exactly as shown.

use eframe::egui;

use crate::file;
use crate::gui::app::App;

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let page = app.current_page();
    let tables = page.export_tables(app);

    if tables.iter().all(|(_, t)| t.is_empty()) {
        app.set_status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    let txt = file::to_export_string_many(&app.state.options.export, &tables);
    logf!("Copy: page={:?}, tables={}", page.kind(), tables.len());
    ui_ctx.copy_text(txt);
    app.set_status("Copied to clipboard");
}

pub fn export(app: &mut App) {
    let page = app.current_page();
    let tables = page.export_tables(app);

    if tables.iter().all(|(_, t)| t.is_empty()) {
        app.set_status("Nothing to export");
        logd!("Export: Clicked, but there's nothing to export");
        return;
    }

    app.state.options.export.set_dir(&app.out_dir_text);
    let export = app.state.options.export.clone();

    let mut written = 0usize;
    for (title, table) in &tables {
        match file::write_export(&export, title, table) {
            Ok(_) => written += 1,
            Err(e) => {
                loge!("Export: {} failed: {}", title, e);
                app.set_status(format!("Export failed: {e}"));
                return;
            }
        }
    }

    let msg = format!("Exported {} file(s) to {}", written, export.dir().display());
    app.set_status(msg);
}
