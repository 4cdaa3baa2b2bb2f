// src/config/state.rs
use super::options::AppOptions;
use super::consts::{WINDOW_H, WINDOW_W};
use crate::selection::BrandSelection;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Brands picked in the left panel (max 3)
    pub selection: BrandSelection,

    pub window_w: u32,
    pub window_h: u32,

    /// Active tab index into router::PAGES
    pub current_page_index: usize,

    /// Overview page -> detail toggles
    pub show_chrono24_details: bool,
    pub show_common_details: bool,
    pub show_luxtech_details: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            selection: BrandSelection::default(),
            window_w: WINDOW_W,
            window_h: WINDOW_H,
            current_page_index: 0,
            show_chrono24_details: false,
            show_common_details: false,
            show_luxtech_details: false,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
