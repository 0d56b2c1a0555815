//! Terminal rendering module.
//!
//! Turns a finished canvas into text a terminal can show, and writes it out.
//! Nothing here mutates a canvas.
//!
//! - [`gray`]: one pixel per cell, four gray levels via SGR escapes
//! - [`braille`]: eight pixels per cell via Unicode braille dots
//! - [`renderer`]: buffered writer that flushes art plus attribution

pub mod braille;
pub mod gray;
pub mod renderer;

pub use lolwut_core as core;
pub use lolwut_types as types;

pub use braille::{braille_char, render_braille};
pub use gray::{gray_escape, render_gray};
pub use renderer::{encode_art_into, TerminalRenderer};
