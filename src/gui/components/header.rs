// src/gui/components/header.rs
use eframe::egui;

use crate::{config::state::Theme, gui::app::{apply_theme, App}};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.heading("🔍 Username Extractor");

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let mut dark = app.state.gui.theme == Theme::Dark;
            if ui.toggle_value(&mut dark, "🌙 Dark").changed() {
                app.state.gui.theme = if dark { Theme::Dark } else { Theme::Light };
                apply_theme(ui.ctx(), app.state.gui.theme);
                logf!("UI: Theme → {:?}", app.state.gui.theme);
            }
        });
    });
}
