// src/gui/components/input_panel.rs
//
// Paste area + extraction options. Clicking Extract hands off to actions::extract.

use eframe::egui;
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.strong("Paste text here");

    ui.horizontal(|ui| {
        if ui.button("✨ Extract Usernames").clicked() {
            actions::extract(app);
        }
        if ui.button("Clear").clicked() {
            app.state.session.input.clear();
            logd!("UI: Input cleared");
        }
    });

    ui.horizontal(|ui| {
        ui.label("Also ignore:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.deny_text).hint_text("word, word"))
            .changed()
        {
            app.apply_deny_text();
            logd!("UI: Extra deny words → {:?}", app.state.options.extract.extra_denylist);
        }
    });

    let before = app.state.options.extract.trace_rejections;
    ui.checkbox(&mut app.state.options.extract.trace_rejections, "Trace rejected tokens");
    if app.state.options.extract.trace_rejections != before {
        logf!("UI: trace_rejections → {}", app.state.options.extract.trace_rejections);
    }

    ui.separator();

    egui::ScrollArea::vertical()
        .id_salt("input_scroll")
        .show(ui, |ui| {
            ui.add(
                egui::TextEdit::multiline(&mut app.state.session.input)
                    .hint_text("@user1 some text @user2 ...")
                    .font(egui::TextStyle::Monospace)
                    .desired_width(f32::INFINITY)
                    .desired_rows(30),
            );
        });
}
