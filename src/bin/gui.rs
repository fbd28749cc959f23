// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use creator_scrape::{config::state::GuiState, gui};
use eframe::egui::{ IconData, ViewportBuilder };
use image::{Rgba, RgbaImage};

const ICON_SIZE: u32 = 64;

/// Round badge with an "@"-ish ring, drawn in memory so no asset ships.
fn app_icon() -> IconData {
    let c = (ICON_SIZE as f32 - 1.0) / 2.0;
    let rgba = RgbaImage::from_fn(ICON_SIZE, ICON_SIZE, |x, y| {
        let d = ((x as f32 - c).powi(2) + (y as f32 - c).powi(2)).sqrt();
        match d {
            d if d <= 10.0 => Rgba([254, 44, 85, 255]),
            d if d > 17.0 && d <= 23.0 => Rgba([254, 44, 85, 255]),
            d if d <= 31.0 => Rgba([37, 244, 238, 255]),
            _ => Rgba([0, 0, 0, 0]),
        }
    });
    let (w, h) = rgba.dimensions();
    IconData { rgba: rgba.into_raw(), width: w, height: h }
}

fn main() {
    let size = GuiState::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([size.window_w as f32, size.window_h as f32])
            .with_icon(app_icon()),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
