// src/gui/app.rs
use std::{error::Error, path::PathBuf};

use eframe::egui;

use crate::config::{
    consts::{LOG_FILE, PREFS_FILE},
    prefs::{self, Prefs},
    state::{AppState, Theme},
};

use super::components;

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    if let Err(e) = crate::log::init(&PathBuf::from(LOG_FILE), "debug") {
        eprintln!("Logging disabled: {e}");
    }

    let prefs_path = PathBuf::from(PREFS_FILE);
    let mut state = AppState::default();
    prefs::load(&prefs_path).apply(&mut state);

    eframe::run_native(
        "Creator Scrape",
        options,
        Box::new(move |cc| {
            apply_theme(&cc.egui_ctx, state.gui.theme);
            Ok(Box::new(App::new(state, prefs_path)))
        }),
    )?;
    Ok(())
}

pub fn apply_theme(ctx: &egui::Context, theme: Theme) {
    ctx.set_visuals(match theme {
        Theme::Dark => egui::Visuals::dark(),
        Theme::Light => egui::Visuals::light(),
    });
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // comma-separated extra deny words, as typed
    pub deny_text: String,

    pub status: String,

    prefs_path: PathBuf,
    saved_prefs: Prefs,
}

impl App {
    pub fn new(state: AppState, prefs_path: PathBuf) -> Self {
        let out_path_text = state.options.export.out_path().to_string_lossy().into_owned();
        let deny_text = state.options.extract.extra_denylist.join(", ");
        let saved_prefs = Prefs::from_state(&state);

        logf!("Init: theme={:?}, out={}", state.gui.theme, out_path_text);

        Self {
            state,
            out_path_text,
            out_path_dirty: false,
            deny_text,
            status: s!("Idle"),
            prefs_path,
            saved_prefs,
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    /// Push a typed output path into ExportOptions.
    pub fn apply_out_path(&mut self) {
        if self.out_path_dirty {
            self.state.options.export.set_path(&self.out_path_text);
            logf!("UI: Out path set → {}", self.state.options.export.out_path().display());
            self.out_path_dirty = false;
        }
    }

    /// Mirror the deny-words field into ExtractOptions.
    pub fn apply_deny_text(&mut self) {
        self.state.options.extract.extra_denylist = self.deny_text
            .split(',')
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect();
    }

    /// Write preferences when anything persisted has changed.
    fn persist_prefs(&mut self) {
        let now = Prefs::from_state(&self.state);
        if now == self.saved_prefs { return; }
        match prefs::save(&self.prefs_path, &now) {
            Ok(()) => logd!("Prefs: saved → {}", self.prefs_path.display()),
            Err(e) => loge!("Prefs: save failed: {}", e),
        }
        self.saved_prefs = now;
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            components::header::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(&self.status);
        });

        egui::SidePanel::left("input")
            .resizable(true)
            .default_width(420.0)
            .show(ctx, |ui| {
                components::input_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::export_bar::draw(ui, self);

            ui.separator();

            components::trace_panel::draw(ui, self);

            ui.separator();

            components::results_table::draw(ui, self);
        });

        self.persist_prefs();
    }
}
