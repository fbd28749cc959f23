// src/gui/actions/copy.rs
use eframe::egui;
use crate::{csv, gui::app::App};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let Some(table) = app.state.session.table.as_ref() else {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    };

    let export = &app.state.options.export;
    let txt = csv::to_delimited(table, export.include_headers, export.delimiter());
    logf!("Copy: rows={}, format={:?}", table.row_count(), export.format);

    ui_ctx.copy_text(txt);
    app.status("Copied to clipboard");
}
