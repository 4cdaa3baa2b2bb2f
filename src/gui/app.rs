// src/gui/app.rs
use std::{error::Error, sync::Arc};

use eframe::egui;

use crate::{
    catalogue::Catalogues,
    config::{
        options::{PageKind, SourceOptions},
        state::AppState,
    },
    views::{Comparator, Detail, Overview, TopRankings, ViewResult},
};
use crate::config::consts::TOP_N;

use super::{
    pages::Page,
    router,
};

pub fn run(options: eframe::NativeOptions, sources: SourceOptions) -> Result<(), Box<dyn Error>> {
    let mut state = AppState::default();
    state.options.sources = sources;
    eframe::run_native(
        "Watch Reference Analysis Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(state)))),
    )?;
    Ok(())
}

/// Derived views for the CURRENT selection. Replaced wholesale on every
/// selection change; never reused for another selection.
#[derive(Default)]
pub struct Views {
    pub overview: Option<Overview>,
    pub chrono24_detail: Option<ViewResult<Detail>>,
    pub common_detail: Option<ViewResult<Detail>>,
    pub luxtech_detail: Option<ViewResult<Detail>>,
    pub top: Option<TopRankings>,
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // immutable raw data; None when loading failed
    pub comparator: Option<Comparator>,
    pub load_error: Option<String>,

    // brand panel
    pub brands: Vec<String>,
    pub brand_filter: String,

    // export dir text field (mapped into ExportOptions on export)
    pub out_dir_text: String,

    pub status: String,
    pub views: Views,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let out_dir_text = state.options.export.dir().to_string_lossy().into_owned();
        let mut app = Self {
            state,
            comparator: None,
            load_error: None,
            brands: Vec::new(),
            brand_filter: s!(),
            out_dir_text,
            status: s!("Idle"),
            views: Views::default(),
        };
        app.load();
        app
    }

    /// (Re)load both sources. Failure leaves the app in the error screen.
    pub fn load(&mut self) {
        match Catalogues::load(&self.state.options.sources) {
            Ok(cats) => {
                let cmp = Comparator::new(Arc::new(cats));
                self.brands = cmp.brands();
                self.state.gui.selection = cmp.default_selection();
                self.comparator = Some(cmp);
                self.load_error = None;
                logf!(
                    "Init: brands={}, default selection={:?}",
                    self.brands.len(),
                    self.state.gui.selection.as_slice()
                );
                self.rebuild_view();
            }
            Err(e) => {
                loge!("Init: {}", e);
                self.comparator = None;
                self.brands.clear();
                self.views = Views::default();
                self.load_error = Some(e.to_string());
                self.status = s!("Data unavailable");
            }
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) { self.state.gui.current_page_index = idx; }

    #[inline]
    pub fn current_page_kind(&self) -> PageKind { self.current_page().kind() }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page {
        let pages = router::all_pages();
        pages[self.current_index().min(pages.len() - 1)]
    }

    #[inline]
    pub fn set_status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    pub fn set_selection_message(&mut self) {
        let n = self.state.gui.selection.len();
        self.set_status(format!("Selection: {} brand(s)", n));
    }

    /// Recompute every view for the current selection.
    pub fn rebuild_view(&mut self) {
        let Some(cmp) = self.comparator.as_ref() else { return };
        let gui = &self.state.gui;
        let sel = &gui.selection;
        let policy = self.state.options.match_policy;

        self.views = Views {
            overview: Some(cmp.overview(sel, policy)),
            chrono24_detail: gui.show_chrono24_details.then(|| cmp.chrono24_detail(sel)),
            common_detail: gui.show_common_details.then(|| cmp.common_detail(sel, policy)),
            luxtech_detail: gui.show_luxtech_details.then(|| cmp.luxtech_detail(sel)),
            top: Some(cmp.top_rankings(sel, TOP_N)),
        };
    }

    fn draw_load_error(&mut self, ctx: &egui::Context) {
        let msg = self.load_error.clone().unwrap_or_default();
        eframe::egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Watch Reference Analysis Dashboard");
            ui.separator();
            ui.colored_label(
                egui::Color32::from_rgb(0xDC, 0x61, 0x49),
                "One or both of the data files could not be found. Please check the file paths.",
            );
            ui.monospace(msg);
            ui.add_space(8.0);
            let sources = &self.state.options.sources;
            ui.label(format!("Chrono24: {}", sources.chrono24.display()));
            ui.label(format!("Luxtech:  {}", sources.luxtech.display()));
            if ui.button("Retry").clicked() {
                self.load();
            }
        });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.load_error.is_some() {
            self.draw_load_error(ctx);
            return;
        }

        eframe::egui::SidePanel::left("brands")
            .resizable(false)
            .show(ctx, |ui| {
                crate::gui::components::brand_panel::draw(ui, self);
            });

        eframe::egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(self.status.as_str());
        });

        eframe::egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Watch Reference Analysis Dashboard");

            crate::gui::components::tabs::draw(ui, self);

            ui.separator();

            crate::gui::components::export_bar::draw(ui, self);

            ui.separator();

            egui::ScrollArea::vertical()
                .id_salt("page_scroll")
                .show(ui, |ui| {
                    let page = self.current_page();
                    page.draw(ui, self);
                });
        });
    }
}
