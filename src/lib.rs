// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod error;

pub mod csv;
pub mod store;
pub mod catalogue;
pub mod selection;
pub mod aggregate;
pub mod charts;
pub mod views;

pub mod file;
pub mod gui;

#[cfg(feature = "cli")]
pub mod cli;
