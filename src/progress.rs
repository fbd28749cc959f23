// src/progress.rs
use std::path::Path;

/// Progress reporting for multi-file writes (batch export).
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of items.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one file has been written.
    fn item_done(&mut self, _number: usize, _path: &Path) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}
