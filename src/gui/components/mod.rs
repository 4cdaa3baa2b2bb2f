// src/gui/components/mod.rs
pub mod bar_chart;
pub mod brand_panel;
pub mod data_table;
pub mod export_bar;
pub mod tabs;
