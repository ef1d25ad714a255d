//! Terminal and NDJSON output for the emicalc binary

pub mod context;
pub mod format;
pub mod json;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;
