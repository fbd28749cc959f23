// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;

pub mod extract;
pub mod metric;

pub mod analytics;
pub mod csv;
pub mod file;
pub mod progress;
pub mod table;

#[cfg(feature = "cli")]
pub mod cli;
pub mod gui;

pub use error::{Error, Result};
pub use extract::{extract_usernames, Extraction, Extractor};
pub use metric::{parse_metric, try_parse_metric, MetricInput};
