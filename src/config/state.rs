// src/config/state.rs
use super::options::AppOptions;
use crate::extract::Extraction;
use crate::table::Table;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn name(&self) -> &'static str {
        match self { Theme::Dark => "dark", Theme::Light => "light" }
    }
    pub fn from_name(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("light") { Theme::Light } else { Theme::Dark }
    }
}

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,
    pub theme: Theme,

    /// Debug trace panel expanded
    pub show_trace: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 1100,
            window_h: 700,
            theme: Theme::Dark,
            show_trace: false,
        }
    }
}

/// What the user is currently working on.
#[derive(Clone, Debug, Default)]
pub struct Session {
    /// Pasted source text
    pub input: String,
    /// Outcome of the last Extract click
    pub last: Option<Extraction>,
    /// Table handed to export/copy
    pub table: Option<Table>,
}

impl Session {
    /// Replace the working table with the usernames of `ex`.
    pub fn load_extraction(&mut self, ex: Extraction) {
        self.table = if ex.usernames.is_empty() {
            None
        } else {
            Some(Table::from_usernames(&ex.usernames))
        };
        self.last = Some(ex);
    }

    pub fn row_count(&self) -> usize {
        self.table.as_ref().map(|t| t.row_count()).unwrap_or(0)
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
    pub session: Session,
}
