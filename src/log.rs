// src/log.rs
//
// Thin macro layer over `tracing`. Nothing is written anywhere until a
// front-end calls `init`; library callers that never do pay only for the
// disabled event checks.
use std::path::Path;

use once_cell::sync::OnceCell;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::error::Result;
use crate::file::ensure_directory;

#[doc(hidden)]
pub use tracing as __tracing;

static GUARD: OnceCell<WorkerGuard> = OnceCell::new();

fn directive(level: &str) -> &'static str {
    match level.to_ascii_uppercase().as_str() {
        "TRACE" => "trace",
        "DEBUG" => "debug",
        "WARN" => "warn",
        "ERROR" => "error",
        _ => "info",
    }
}

/// Install the file logger. `RUST_LOG` wins over `level` when set.
/// Calling this more than once keeps the first subscriber.
pub fn init(log_path: &Path, level: &str) -> Result<()> {
    if GUARD.get().is_some() {
        return Ok(());
    }

    let dir = log_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    ensure_directory(dir)?;

    let file_name = log_path
        .file_name()
        .and_then(|s| s.to_str())
        .filter(|s| !s.trim().is_empty())
        .unwrap_or("debug.log");

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directive(level)));

    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_target(false)
        .with_timer(fmt::time::uptime())
        .with_writer(writer);

    // Someone else may already own the global subscriber (tests, embedding apps).
    if tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .is_ok()
    {
        let _ = GUARD.set(guard);
        tracing::info!("Log: writing to {}", log_path.display());
    }
    Ok(())
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::__tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::__tracing::debug!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::__tracing::error!($($arg)*)
    };
}

#[cfg(test)]
mod tests {
    use super::directive;

    #[test]
    fn level_names_map_to_directives() {
        assert_eq!(directive("debug"), "debug");
        assert_eq!(directive("WARN"), "warn");
        assert_eq!(directive("nonsense"), "info");
    }
}
