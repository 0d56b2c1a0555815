//! Rasterizer - integer line drawing and rotated squares
//!
//! Both primitives are stateless and write through [`Surface`], relying on
//! the surface to clip: no coordinate checks happen here.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use crate::canvas::Surface;
use crate::types::ColorIndex;

/// Draw a line from `(x1, y1)` to `(x2, y2)` inclusive (Bresenham).
pub fn draw_line<S: Surface + ?Sized>(
    surface: &mut S,
    mut x1: i32,
    mut y1: i32,
    x2: i32,
    y2: i32,
    color: ColorIndex,
) {
    let dx = (x2 - x1).abs();
    let dy = (y2 - y1).abs();
    let sx = if x1 < x2 { 1 } else { -1 };
    let sy = if y1 < y2 { 1 } else { -1 };
    let mut err = dx - dy;

    loop {
        surface.set_pixel(x1, y1, color);
        if x1 == x2 && y1 == y2 {
            break;
        }
        let e2 = err * 2;
        if e2 > -dy {
            err -= dy;
            x1 += sx;
        }
        if e2 < dx {
            err += dx;
            y1 += sy;
        }
    }
}

/// Corners of a square of side `size` centred on `(cx, cy)`, rotated by
/// `angle` radians, in drawing order.
///
/// The corners sit on a circle at `PI/4 + angle` plus quarter turns. A
/// square inscribed in a unit circle has side `sqrt(2)`, so the radius is
/// `size / sqrt(2)`.
pub fn square_vertices(cx: i32, cy: i32, size: f64, angle: f64) -> [(i32, i32); 4] {
    let radius = round_half_up(size / std::f64::consts::SQRT_2);
    let mut k = FRAC_PI_4 + angle;
    let mut points = [(0, 0); 4];
    for point in &mut points {
        *point = (
            round_half_up(k.sin() * radius + f64::from(cx)) as i32,
            round_half_up(k.cos() * radius + f64::from(cy)) as i32,
        );
        k += FRAC_PI_2;
    }
    points
}

/// Draw the outline of a rotated square. See [`square_vertices`].
pub fn draw_square<S: Surface + ?Sized>(
    surface: &mut S,
    cx: i32,
    cy: i32,
    size: f64,
    angle: f64,
    color: ColorIndex,
) {
    let points = square_vertices(cx, cy, size, angle);
    for j in 0..points.len() {
        let (x1, y1) = points[j];
        let (x2, y2) = points[(j + 1) % points.len()];
        draw_line(surface, x1, y1, x2, y2, color);
    }
}

// Halves round towards +inf, so -2.5 becomes -2.
fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}
