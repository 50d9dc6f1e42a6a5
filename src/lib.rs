//! Terminal host for `tiles_core`.
//!
//! Supplies everything the engine treats as an outside collaborator: a
//! generated layout, palettes, a synthetic spectrum, a fixed tempo and a
//! sink that draws frames in the terminal.

pub mod cli;
pub mod layout_gen;
pub mod palette;
pub mod sink;
pub mod spectrum;
pub mod tempo;

pub use tiles_core;
