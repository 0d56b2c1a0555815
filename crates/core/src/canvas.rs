//! Canvas module - fixed-size grid of palette color indices
//!
//! The canvas is the only mutable state of a render. Drawing code writes
//! through [`Surface`] and is allowed to address pixels outside the grid:
//! such writes are dropped and such reads return [`BLACK`].

use thiserror::Error;

use crate::types::{ColorIndex, BLACK};

/// Errors raised when allocating a canvas.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasError {
    #[error("canvas dimensions must be positive, got {width}x{height}")]
    ZeroDimension { width: usize, height: usize },

    #[error("canvas dimensions {width}x{height} exceed the addressable range")]
    TooLarge { width: usize, height: usize },
}

/// Pixel interface the rasterizer draws through.
pub trait Surface {
    /// Write a pixel. Out of range coordinates are a silent no-op.
    fn set_pixel(&mut self, x: i32, y: i32, color: ColorIndex);

    /// Read a pixel. Out of range coordinates read as [`BLACK`].
    fn get_pixel(&self, x: i32, y: i32) -> ColorIndex;
}

/// Row-major 2D grid of color indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<ColorIndex>,
}

impl Canvas {
    /// Allocate a `width` x `height` canvas filled with `background`.
    ///
    /// Callers clamp user input first; a zero dimension is a bug and is
    /// rejected instead of producing an empty buffer.
    pub fn new(width: usize, height: usize, background: ColorIndex) -> Result<Self, CanvasError> {
        if width == 0 || height == 0 {
            return Err(CanvasError::ZeroDimension { width, height });
        }
        let too_large = i32::try_from(width).is_err()
            || i32::try_from(height).is_err()
            || width.checked_mul(height).is_none();
        if too_large {
            return Err(CanvasError::TooLarge { width, height });
        }

        Ok(Self {
            width,
            height,
            pixels: vec![background; width * height],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[ColorIndex] {
        &self.pixels
    }

    /// Release the pixel storage.
    ///
    /// Dropping the canvas does the same; this names the single point where a
    /// render gives its buffer back.
    pub fn destroy(self) {
        drop(self.pixels);
    }

    #[inline(always)]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(x + y * self.width)
    }
}

impl Surface for Canvas {
    #[inline]
    fn set_pixel(&mut self, x: i32, y: i32, color: ColorIndex) {
        if let Some(i) = self.idx(x, y) {
            self.pixels[i] = color;
        }
    }

    #[inline]
    fn get_pixel(&self, x: i32, y: i32) -> ColorIndex {
        self.idx(x, y).map_or(BLACK, |i| self.pixels[i])
    }
}
