// src/config/mod.rs
pub mod consts;
pub mod options;
pub mod prefs;
pub mod state;

pub use options::{AppOptions, BatchOptions, ExportFormat, ExportOptions, ExtractOptions};
pub use state::{AppState, Session, Theme};
