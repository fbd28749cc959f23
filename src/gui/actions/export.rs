// src/gui/actions/export.rs
use crate::{file, gui::app::App};

pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    app.apply_out_path();

    let status_msg = match app.state.session.table.as_ref() {
        None => {
            logd!("Export: Clicked, but there's nothing to export");
            s!("Nothing to export")
        }
        Some(table) => {
            let export = &app.state.options.export;
            logf!("Export: Begin rows={}, format={:?}", table.row_count(), export.format);

            match file::write_export(export, table) {
                Ok(path) => {
                    logf!("Export: OK → {}", path.display());
                    format!("Exported {} row(s) to {}", table.row_count(), path.display())
                }
                Err(e) => {
                    loge!("Export: Error: {}", e);
                    format!("Export error: {e}")
                }
            }
        }
    };

    // mutate app only after the table borrow is gone
    app.status(status_msg);
}
