// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{extract,copy,export,split}.

mod copy;    // src/gui/actions/copy.rs
mod export;  // src/gui/actions/export.rs
mod extract; // src/gui/actions/extract.rs
mod split;   // src/gui/actions/split.rs

pub use copy::copy;
pub use export::export;
pub use extract::extract;
pub use split::split;
