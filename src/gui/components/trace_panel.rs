// src/gui/components/trace_panel.rs
use eframe::egui;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.toggle_value(
        &mut app.state.gui.show_trace,
        "🛠️ Debug Logs (check this if results are wrong)",
    );
    if !app.state.gui.show_trace { return; }

    let Some(ex) = app.state.session.last.as_ref() else {
        ui.weak("Nothing extracted yet.");
        return;
    };

    egui::ScrollArea::vertical()
        .id_salt("trace_scroll")
        .max_height(180.0)
        .show(ui, |ui| {
            for line in &ex.debug_trace {
                ui.monospace(line);
            }
        });
}
