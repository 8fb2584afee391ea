//! Presentation layer: terminal rendering, the interactive console and the
//! CSV batch interface.

pub mod chart;
pub mod console;
pub mod csv;
pub mod currency;
pub mod render;
