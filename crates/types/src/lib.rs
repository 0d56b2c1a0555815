//! Shared types module - palette indices and command limits
//!
//! This module defines the fundamental values used throughout the workspace.
//! Everything here is plain data with no external dependencies, so it can be
//! used by the generators, the terminal layer and the command line alike.
//!
//! # Palette
//!
//! Canvas pixels are small integer color indices. The skyline renderer maps
//! them onto the four gray levels every color terminal has:
//!
//! | Index | Constant     | Terminal color |
//! |-------|--------------|----------------|
//! | 0     | `BLACK`      | black          |
//! | 1     | `DARK_GRAY`  | bright black   |
//! | 2     | `LIGHT_GRAY` | white          |
//! | 3     | `WHITE`      | bright white   |
//!
//! Values outside the palette are tolerated by the canvas and rendered as
//! black.
//!
//! # Limits
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_COLUMNS` | 80 | Skyline width in terminal columns |
//! | `DEFAULT_ROWS` | 20 | Skyline height in terminal rows |
//! | `MAX_COLUMNS` | 1000 | Upper clamp for columns (both renderers) |
//! | `MAX_ROWS` | 1000 | Upper clamp for skyline rows |
//! | `SCHOTTER_DEFAULT_COLUMNS` | 66 | Schotter width in terminal columns |
//! | `SCHOTTER_DEFAULT_SQUARES_PER_ROW` | 8 | Squares per row |
//! | `SCHOTTER_DEFAULT_SQUARES_PER_COL` | 12 | Squares per column |
//! | `SCHOTTER_MAX_SQUARES` | 200 | Upper clamp for both square counts |
//!
//! # Examples
//!
//! ```
//! use lolwut_types::{clamp_dimension, Version, MAX_COLUMNS};
//!
//! assert_eq!(clamp_dimension(0, MAX_COLUMNS), 1);
//! assert_eq!(clamp_dimension(5000, MAX_COLUMNS), 1000);
//!
//! assert_eq!(Version::from_str("5"), Some(Version::Schotter));
//! assert_eq!(Version::default(), Version::Skyline);
//! ```

/// Pixel color index stored in a canvas.
pub type ColorIndex = u8;

/// Darkest palette entry; also the value read back from outside a canvas.
pub const BLACK: ColorIndex = 0;
pub const DARK_GRAY: ColorIndex = 1;
pub const LIGHT_GRAY: ColorIndex = 2;
pub const WHITE: ColorIndex = 3;

/// Number of entries in the gray palette.
pub const PALETTE_SIZE: usize = 4;

/// Gray levels a lit window may take.
pub const WINDOW_GRAYS: [ColorIndex; 2] = [DARK_GRAY, LIGHT_GRAY];

/// Skyline width in terminal columns.
pub const DEFAULT_COLUMNS: i64 = 80;
/// Skyline height in terminal rows.
pub const DEFAULT_ROWS: i64 = 20;
/// Upper bound for the column argument of every renderer.
pub const MAX_COLUMNS: i64 = 1000;
/// Upper bound for the skyline row argument.
pub const MAX_ROWS: i64 = 1000;

pub const SCHOTTER_DEFAULT_COLUMNS: i64 = 66;
pub const SCHOTTER_DEFAULT_SQUARES_PER_ROW: i64 = 8;
pub const SCHOTTER_DEFAULT_SQUARES_PER_COL: i64 = 12;
/// Upper bound for both schotter square counts.
pub const SCHOTTER_MAX_SQUARES: i64 = 200;

/// Trailer printed under the skyline.
pub const SKYLINE_ATTRIBUTION: &str = "Dedicated to the 8 bit game developers of past and present.\n\
Original 8 bit image from Plaguemon by hikikomori. Redis ver. 6.0.0";

/// Trailer printed under the schotter plot.
pub const SCHOTTER_ATTRIBUTION: &str =
    "Georg Nees - schotter, plotter on paper, 1968. Redis ver. 5.0.0";

/// Clamp a requested dimension into `[1, max]`.
///
/// Out of range requests are never rejected, only pulled back into range.
pub fn clamp_dimension(value: i64, max: i64) -> usize {
    value.clamp(1, max.max(1)) as usize
}

/// Which art renderer to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Version {
    /// Georg Nees' "Schotter" plot, rendered with braille characters.
    Schotter,
    /// 8 bit style city skyline, rendered with gray terminal cells.
    #[default]
    Skyline,
}

impl Version {
    /// Parse a version selector ("5" or "6").
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim() {
            "5" => Some(Version::Schotter),
            "6" => Some(Version::Skyline),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Version::Schotter => "5",
            Version::Skyline => "6",
        }
    }
}
