//! Schotter generator - a grid of squares that loses its order row by row
//!
//! After Georg Nees' 1968 plotter drawing. The first two rows are perfectly
//! aligned; from the third row on every square is rotated and displaced by a
//! random amount that grows with the row index.

use tracing::debug;

use crate::canvas::{Canvas, CanvasError};
use crate::raster::draw_square;
use crate::rng::RandSource;
use crate::types::{BLACK, DARK_GRAY};

/// Canvas geometry derived from the console width and grid shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SchotterLayout {
    pub canvas_width: usize,
    pub canvas_height: usize,
    pub padding: usize,
    pub square_side: f64,
}

impl SchotterLayout {
    /// Each console column holds two pixels (one braille cell is 2x4).
    pub fn new(console_cols: usize, squares_per_row: usize, squares_per_col: usize) -> Self {
        let canvas_width = console_cols.max(1) * 2;
        let padding = if canvas_width > 4 { 2 } else { 0 };
        let square_side = (canvas_width - padding * 2) as f64 / squares_per_row.max(1) as f64;
        let canvas_height =
            ((square_side * squares_per_col.max(1) as f64) as usize + padding * 2).max(1);
        Self {
            canvas_width,
            canvas_height,
            padding,
            square_side,
        }
    }
}

/// Draw the schotter grid on a fresh canvas.
pub fn draw_schotter(
    console_cols: usize,
    squares_per_row: usize,
    squares_per_col: usize,
    rng: &mut impl RandSource,
) -> Result<Canvas, CanvasError> {
    let layout = SchotterLayout::new(console_cols, squares_per_row, squares_per_col);
    let mut canvas = Canvas::new(layout.canvas_width, layout.canvas_height, BLACK)?;

    let side = layout.square_side;
    let padding = layout.padding as f64;
    let rows = squares_per_col.max(1) as f64;

    for y in 0..squares_per_col {
        for x in 0..squares_per_row {
            let mut sx = (x as f64 * side + side / 2.0 + padding) as i32;
            let mut sy = (y as f64 * side + side / 2.0 + padding) as i32;
            let mut angle = 0.0;
            if y > 1 {
                let spread = y as f64 / rows;
                let mut r1 = rng.unit() * spread;
                let mut r2 = rng.unit() * spread;
                let mut r3 = rng.unit() * spread;
                if rng.rand() % 2 == 1 {
                    r1 = -r1;
                }
                if rng.rand() % 2 == 1 {
                    r2 = -r2;
                }
                if rng.rand() % 2 == 1 {
                    r3 = -r3;
                }
                angle = r1;
                sx = (f64::from(sx) + r2 * side / 3.0) as i32;
                sy = (f64::from(sy) + r3 * side / 3.0) as i32;
            }
            draw_square(&mut canvas, sx, sy, side, angle, DARK_GRAY);
        }
    }

    debug!(
        width = layout.canvas_width,
        height = layout.canvas_height,
        squares = squares_per_row * squares_per_col,
        "schotter drawn"
    );
    Ok(canvas)
}
