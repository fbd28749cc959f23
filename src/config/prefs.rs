// src/config/prefs.rs
//
// GUI preferences as a flat `key=value` file. Unknown keys are ignored;
// a missing or unreadable file means defaults.
use std::{fs, path::Path};

use super::options::ExportFormat;
use super::state::{AppState, Theme};
use crate::error::Result;
use crate::file::ensure_directory;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Prefs {
    pub theme: Theme,
    pub format: ExportFormat,
    pub include_headers: bool,
    pub out_path: String,
    pub rows_per_batch: usize,
    pub show_trace: bool,
    pub trace_rejections: bool,
    pub extra_denylist: Vec<String>,
}

impl Default for Prefs {
    fn default() -> Self {
        Prefs::from_state(&AppState::default())
    }
}

impl Prefs {
    pub fn from_state(state: &AppState) -> Self {
        let o = &state.options;
        Self {
            theme: state.gui.theme,
            format: o.export.format,
            include_headers: o.export.include_headers,
            out_path: o.export.out_path().to_string_lossy().into_owned(),
            rows_per_batch: o.batch.rows_per_batch,
            show_trace: state.gui.show_trace,
            trace_rejections: o.extract.trace_rejections,
            extra_denylist: o.extract.extra_denylist.clone(),
        }
    }

    pub fn apply(&self, state: &mut AppState) {
        let o = &mut state.options;
        state.gui.theme = self.theme;
        state.gui.show_trace = self.show_trace;
        o.export.format = self.format;
        o.export.include_headers = self.include_headers;
        o.export.set_path(&self.out_path);
        o.batch.rows_per_batch = self.rows_per_batch.max(1);
        o.extract.trace_rejections = self.trace_rejections;
        o.extract.extra_denylist = self.extra_denylist.clone();
    }
}

fn flag(val: &str) -> bool {
    val == "1" || val.eq_ignore_ascii_case("true")
}

pub fn parse(text: &str) -> Prefs {
    let mut cfg = Prefs::default();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') { continue; }
        let Some((key, val)) = line.split_once('=') else { continue };
        let val = val.trim();
        match key.trim() {
            "theme" => cfg.theme = Theme::from_name(val),
            "format" => if let Some(f) = ExportFormat::parse(val) { cfg.format = f },
            "include_headers" => cfg.include_headers = flag(val),
            "out_path" => if !val.is_empty() { cfg.out_path = val.to_string() },
            "rows_per_batch" => {
                if let Ok(n) = val.parse::<usize>() { if n > 0 { cfg.rows_per_batch = n; } }
            }
            "show_trace" => cfg.show_trace = flag(val),
            "trace_rejections" => cfg.trace_rejections = flag(val),
            "deny" => {
                cfg.extra_denylist = val.split(',')
                    .map(str::trim)
                    .filter(|w| !w.is_empty())
                    .map(str::to_string)
                    .collect();
            }
            other => logd!("Prefs: ignoring unknown key '{}'", other),
        }
    }
    cfg
}

pub fn render(cfg: &Prefs) -> String {
    let mut s = String::new();
    s.push_str(&format!("theme={}\n", cfg.theme.name()));
    s.push_str(&format!("format={}\n", cfg.format.ext()));
    s.push_str(&format!("include_headers={}\n", if cfg.include_headers {1}else{0}));
    s.push_str(&format!("out_path={}\n", cfg.out_path));
    s.push_str(&format!("rows_per_batch={}\n", cfg.rows_per_batch));
    s.push_str(&format!("show_trace={}\n", if cfg.show_trace {1}else{0}));
    s.push_str(&format!("trace_rejections={}\n", if cfg.trace_rejections {1}else{0}));
    if !cfg.extra_denylist.is_empty() {
        s.push_str(&format!("deny={}\n", cfg.extra_denylist.join(",")));
    }
    s
}

pub fn load(path: &Path) -> Prefs {
    match fs::read_to_string(path) {
        Ok(text) => parse(&text),
        Err(e) => {
            logd!("Prefs: {} not loaded ({}), using defaults", path.display(), e);
            Prefs::default()
        }
    }
}

pub fn save(path: &Path, cfg: &Prefs) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, render(cfg))?;
    Ok(())
}
