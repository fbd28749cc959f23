// src/gui/components/mod.rs

pub mod export_bar;
pub mod header;
pub mod input_panel;
pub mod results_table;
pub mod trace_panel;
