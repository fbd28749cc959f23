// src/gui/mod.rs

pub mod app;
mod actions;
mod components;
mod progress;

pub use app::run;
