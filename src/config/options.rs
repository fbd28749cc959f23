// src/config/options.rs
use std::ffi::OsString;
use std::path::{ Path, PathBuf };
use super::consts::*;
use crate::core::sanitize::sanitize_filename;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub extract: ExtractOptions,
    pub export: ExportOptions,
    pub batch: BatchOptions,
}

/* ---------------- Extraction ---------------- */

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Added on top of the built-in denylist; matched case-insensitively.
    pub extra_denylist: Vec<String>,
    /// Trace every token the fallback strategy drops, with the filter that dropped it.
    pub trace_rejections: bool,
}

impl ExtractOptions {
    pub fn with_denied<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_denylist.extend(words.into_iter().map(Into::into));
        self
    }

    pub fn with_rejection_trace(mut self, on: bool) -> Self {
        self.trace_rejections = on;
        self
    }
}

/* ---------------- Export ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Some(ExportFormat::Csv),
            "tsv" => Some(ExportFormat::Tsv),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    out_path: OutputPath,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_path: OutputPath::default(),
            include_headers: true,
        }
    }
}

impl ExportOptions {
    pub fn out_path(&self) -> PathBuf {
        let ext = match &self.out_path.ext {
            Some(user_ext) => user_ext.to_string_lossy().into_owned(),
            None => s!(self.format.ext()),
        };
        let stem = self.out_path.file_stem.to_string_lossy();
        self.out_path.dir.join(format!("{stem}.{ext}"))
    }

    /// Parse GUI/CLI text into dir + stem. An extension typed by the user
    /// sticks; otherwise the format decides it.
    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());
        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            let clean = sanitize_filename(&stem.to_string_lossy(), DEFAULT_FILE);
            self.out_path.file_stem = OsString::from(clean);
        }
        self.out_path.ext = p
            .extension()
            .filter(|e| !e.eq_ignore_ascii_case(ExportFormat::Csv.ext())
                && !e.eq_ignore_ascii_case(ExportFormat::Tsv.ext()))
            .map(|e| e.to_os_string());
    }

    pub fn delimiter(&self) -> char {
        self.format.delim()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
    ext: Option<OsString>, // only when the user typed a non-format extension
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
            ext: None,
        }
    }
}

/* ---------------- Batch splitting ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchOptions {
    pub rows_per_batch: usize,
    pub out_dir: PathBuf,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            rows_per_batch: DEFAULT_BATCH_SIZE,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR).join("batches"),
        }
    }
}

impl BatchOptions {
    /// Number of files a table of `rows` rows splits into.
    pub fn file_count(&self, rows: usize) -> usize {
        if self.rows_per_batch == 0 { return 0; }
        rows.div_ceil(self.rows_per_batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_decides_extension_unless_user_typed_one() {
        let mut e = ExportOptions::default();
        assert_eq!(e.out_path(), PathBuf::from("out/extracted_usernames.csv"));

        e.format = ExportFormat::Tsv;
        assert_eq!(e.out_path(), PathBuf::from("out/extracted_usernames.tsv"));

        e.set_path("exports/may list.txt");
        assert_eq!(e.out_path(), PathBuf::from("exports/may_list.txt"));

        e.set_path("exports/june.csv");
        assert_eq!(e.out_path(), PathBuf::from("exports/june.tsv"));
    }

    #[test]
    fn batch_file_count_rounds_up() {
        let b = BatchOptions { rows_per_batch: 100, ..BatchOptions::default() };
        assert_eq!(b.file_count(0), 0);
        assert_eq!(b.file_count(100), 1);
        assert_eq!(b.file_count(101), 2);
        assert_eq!(BatchOptions { rows_per_batch: 0, ..b }.file_count(5), 0);
    }
}
