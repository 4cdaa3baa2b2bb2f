// src/config/consts.rs

// Data sources
pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_CHRONO24_FILE: &str = "chrono24.csv";
pub const DEFAULT_LUXTECH_FILE: &str = "luxtech.csv";
pub const ENV_CHRONO24: &str = "WATCHREF_CHRONO24";
pub const ENV_LUXTECH: &str = "WATCHREF_LUXTECH";

// Columns
pub const COL_BRAND: &str = "brand";
pub const COL_REFERENCE: &str = "reference";
pub const COL_YEAR_OF_PRODUCTION: &str = "yearOfProduction";
pub const COL_MODEL_NUMBER: &str = "modelNumber";

// Selection
pub const MAX_SELECTED_BRANDS: usize = 3;
pub const DEFAULT_BRANDS: [&str; 3] = ["Audemars Piguet", "Breitling", "Bulgari"];

// Rankings
pub const TOP_N: usize = 200;

// Display markers
pub const LUXTECH_ABSENT_TEXT: &str = "Not in the catalogue for the moment.";
pub const NO_SHARED_TEXT: &str = "No reference shared for the moment.";
pub const ABSENT_TEXT: &str = "-";

// Local store
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const DEFAULT_LOG_FILTER: &str = "watchref=info";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";

// Window
pub const WINDOW_W: u32 = 1200;
pub const WINDOW_H: u32 = 800;
