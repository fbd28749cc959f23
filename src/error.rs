// src/error.rs
use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors from the fallible edges of the crate (files, tables, front-ends).
/// Extraction and metric parsing never produce these.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("path exists but is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("no input text")]
    EmptyInput,

    #[error("unknown column: {0}")]
    UnknownColumn(String),

    #[error("not a YYYY-MM month: {0}")]
    InvalidMonth(String),

    #[error("rows per batch must be at least 1")]
    InvalidBatchSize,
}

pub type Result<T> = std::result::Result<T, Error>;
