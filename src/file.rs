// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::csv::{parse_table, to_delimited};
use crate::error::{Error, Result};
use crate::progress::Progress;
use crate::table::{Batch, Table};

/// Write `table` to the path `export` resolves to, creating parent dirs.
/// Returns the final path written to.
pub fn write_export(export: &ExportOptions, table: &Table) -> Result<PathBuf> {
    let path = export.out_path();
    write_table(&path, table, export.include_headers, export.delimiter())?;
    Ok(path)
}

pub fn write_table(path: &Path, table: &Table, include_headers: bool, sep: char) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, to_delimited(table, include_headers, sep))?;
    logd!("File: wrote {} row(s) → {}", table.row_count(), path.display());
    Ok(())
}

/// Write every batch into `dir` under its own file name (headers included).
/// The delimiter follows each file name's extension.
pub fn write_batches(
    dir: &Path,
    batches: &[Batch],
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<PathBuf>> {
    ensure_directory(dir)?;
    if let Some(p) = progress.as_deref_mut() {
        p.begin(batches.len());
    }

    let mut written = Vec::with_capacity(batches.len());
    for batch in batches {
        let path = dir.join(&batch.file_name);
        if let Err(e) = write_table(&path, &batch.table, true, delimiter_for(&path)) {
            loge!("File: batch {} failed: {}", batch.number, e);
            if let Some(p) = progress.as_deref_mut() {
                p.log(&format!("Batch {} failed: {e}", batch.number));
                p.finish();
            }
            return Err(e);
        }
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(batch.number, &path);
        }
        written.push(path);
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    logf!("File: {} batch file(s) in {}", written.len(), dir.display());
    Ok(written)
}

/// Read a CSV/TSV file; the first row is the header row.
pub fn read_table(path: &Path, sep: char) -> Result<Table> {
    let text = fs::read_to_string(path)?;
    Ok(parse_table(&text, sep))
}

/// Guess the delimiter from the extension: `.tsv`/`.tab` → tab, else comma.
pub fn delimiter_for(path: &Path) -> char {
    match path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase).as_deref() {
        Some("tsv") | Some("tab") => '\t',
        _ => ',',
    }
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delimiter_follows_extension() {
        assert_eq!(delimiter_for(Path::new("a/b.TSV")), '\t');
        assert_eq!(delimiter_for(Path::new("a/b.csv")), ',');
        assert_eq!(delimiter_for(Path::new("noext")), ',');
    }
}
