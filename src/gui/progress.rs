// src/gui/progress.rs
use std::path::Path;

use crate::progress::Progress;

/// Mirrors batch progress into the status line.
pub struct GuiProgress<'a> {
    status: &'a mut String,
    done: usize,
    total: usize,
}

impl<'a> GuiProgress<'a> {
    pub fn new(status: &'a mut String) -> Self {
        Self { status, done: 0, total: 0 }
    }
    fn set_status(&mut self, msg: impl Into<String>) {
        *self.status = msg.into();
    }
}

impl Progress for GuiProgress<'_> {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn item_done(&mut self, number: usize, path: &Path) {
        self.done += 1;
        let msg = format!("Wrote part {} → {} ({}/{})", number, path.display(), self.done, self.total);
        self.set_status(msg);
    }
    fn finish(&mut self) {
        if self.total == 0 {
            self.set_status(s!("Split complete")); // no counts if we never began
        } else {
            let msg = format!("Split complete ({}/{})", self.done, self.total);
            self.set_status(msg);
        }
    }
}
