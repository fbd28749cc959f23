// src/gui/components/results_table.rs
//
// Read-only view of the working table (usernames after an extraction).

use eframe::egui;
use egui_extras::{Column, TableBuilder};
use crate::gui::app::App;

const ROW_H: f32 = 20.0;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(table) = app.state.session.table.as_ref() else {
        match &app.state.session.last {
            Some(_) => ui.label("No valid usernames found."),
            None => ui.weak("Results appear here."),
        };
        return;
    };

    ui.label(format!("Found {} unique usernames!", table.row_count()));

    let cols = table.column_count().max(1);
    let headers = table.headers.clone().unwrap_or_default();

    let mut builder = TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0)
        .column(Column::exact(48.0));
    for _ in 0..cols {
        builder = builder.column(Column::remainder().at_least(80.0).clip(true));
    }

    builder
        .header(ROW_H + 4.0, |mut header| {
            header.col(|ui| { ui.strong("#"); });
            for ci in 0..cols {
                let title = headers.get(ci).map(String::as_str).unwrap_or("");
                header.col(|ui| { ui.strong(title); });
            }
        })
        .body(|body| {
            body.rows(ROW_H, table.row_count(), |mut row| {
                let ri = row.index();
                row.col(|ui| { ui.weak((ri + 1).to_string()); });
                for ci in 0..cols {
                    let cell = table.cell(ri, ci).unwrap_or("");
                    row.col(|ui| { ui.label(cell); });
                }
            });
        });
}
