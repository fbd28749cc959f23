// src/gui/components/export_bar.rs

use eframe::egui;
use crate::{
    config::options::ExportFormat,
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    {
        let export = &mut app.state.options.export;

        // --- Format + Include headers ---
        let prev_fmt = export.format;
        let mut fmt = prev_fmt;

        ui.horizontal(|ui| {
            ui.label("Format:");
            ui.selectable_value(&mut fmt, ExportFormat::Csv, "CSV");
            ui.selectable_value(&mut fmt, ExportFormat::Tsv, "TSV");
        });

        if fmt != prev_fmt {
            export.format = fmt;
            logf!("UI: Export format → {:?}", export.format);
            if !app.out_path_dirty {
                app.out_path_text = export.out_path().to_string_lossy().into_owned();
            }
        }

        let before_headers = export.include_headers;
        ui.checkbox(&mut export.include_headers, "Include headers");
        if export.include_headers != before_headers {
            logf!("UI: Include_headers → {}", export.include_headers);
        }
    }

    // --- Output field ---
    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text)
                .font(egui::TextStyle::Monospace))
            .changed()
        {
            app.out_path_dirty = true;
            logd!("UI: out_path_text changed (dirty=true) → {}", app.out_path_text);
        }
    });

    // --- Actions (Copy / Export) ---
    ui.horizontal(|ui| {
        if ui.button("Copy").clicked() {
            actions::copy(app, ui.ctx());
        }
        if ui.button("📥 Export").clicked() {
            actions::export(app);
        }
    });

    // --- Batch split ---
    ui.horizontal(|ui| {
        ui.label("Rows per file:");
        let before = app.state.options.batch.rows_per_batch;
        ui.add(egui::DragValue::new(&mut app.state.options.batch.rows_per_batch).range(1..=100_000));
        if app.state.options.batch.rows_per_batch != before {
            logd!("UI: rows_per_batch → {}", app.state.options.batch.rows_per_batch);
        }

        let files = app.state.options.batch.file_count(app.state.session.row_count());
        let label = format!("Split into {files} file(s)");
        if ui.add_enabled(files > 0, egui::Button::new(label)).clicked() {
            actions::split(app);
        }
    });
}
