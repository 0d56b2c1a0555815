//! Core drawing module - pure, deterministic, and testable
//!
//! This crate contains the canvas, the rasterizer and the two generators.
//! It has **no dependencies** on terminals or process I/O, making it:
//!
//! - **Deterministic**: the same seed produces the same image
//! - **Testable**: every primitive works on an in-memory canvas
//! - **Total**: drawing never fails, out of range pixels are clipped
//!
//! # Module Structure
//!
//! - [`canvas`]: grid of palette indices with clipping reads and writes
//! - [`raster`]: Bresenham lines and rotated squares
//! - [`rng`]: C `rand()` compatible random sources
//! - [`skyline`]: three pass parallax city skyline
//! - [`schotter`]: Georg Nees' square grid
//!
//! # Example
//!
//! ```
//! use lolwut_core::{generate_skyline, Canvas, SimpleRng, Surface};
//! use lolwut_types::WHITE;
//!
//! let mut canvas = Canvas::new(80, 20, WHITE).unwrap();
//! generate_skyline(&mut canvas, &mut SimpleRng::new(12345));
//!
//! // Foreground buildings always reach the bottom row somewhere.
//! assert!((0..80).any(|x| canvas.get_pixel(x, 19) != WHITE));
//! ```

pub mod canvas;
pub mod raster;
pub mod rng;
pub mod schotter;
pub mod skyline;

pub use lolwut_types as types;

// Re-export commonly used types for convenience
pub use canvas::{Canvas, CanvasError, Surface};
pub use raster::{draw_line, draw_square, square_vertices};
pub use rng::{RandSource, SequenceRand, SimpleRng, RAND_MAX};
pub use schotter::{draw_schotter, SchotterLayout};
pub use skyline::{draw_skyscraper, generate_skyline, Skyscraper};
