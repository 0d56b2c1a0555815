//! Rasterizer tests - Bresenham lines and rotated squares

use std::collections::BTreeSet;

use lolwut::core::{draw_line, draw_square, square_vertices, Canvas, Surface};
use lolwut::types::{BLACK, DARK_GRAY, WHITE};

/// Surface that records every write, including off-canvas ones.
#[derive(Default)]
struct Recorder {
    writes: BTreeSet<(i32, i32)>,
}

impl Surface for Recorder {
    fn set_pixel(&mut self, x: i32, y: i32, _color: u8) {
        self.writes.insert((x, y));
    }

    fn get_pixel(&self, _x: i32, _y: i32) -> u8 {
        BLACK
    }
}

fn line_set(x1: i32, y1: i32, x2: i32, y2: i32) -> BTreeSet<(i32, i32)> {
    let mut rec = Recorder::default();
    draw_line(&mut rec, x1, y1, x2, y2, DARK_GRAY);
    rec.writes
}

#[test]
fn test_single_point_line() {
    let mut canvas = Canvas::new(5, 5, WHITE).unwrap();
    draw_line(&mut canvas, 2, 3, 2, 3, DARK_GRAY);
    let lit: Vec<usize> = canvas
        .pixels()
        .iter()
        .enumerate()
        .filter(|(_, p)| **p != WHITE)
        .map(|(i, _)| i)
        .collect();
    assert_eq!(lit, vec![2 + 3 * 5]);
    assert_eq!(canvas.get_pixel(2, 3), DARK_GRAY);
}

#[test]
fn test_line_pixel_count_is_dominant_axis_plus_one() {
    for x in -9i32..=9 {
        for y in -9i32..=9 {
            let expected = x.abs().max(y.abs()) as usize + 1;
            assert_eq!(line_set(0, 0, x, y).len(), expected, "to ({x}, {y})");
            assert_eq!(line_set(x, y, 0, 0).len(), expected, "from ({x}, {y})");
        }
    }
}

#[test]
fn test_reversed_line_shares_endpoints() {
    for (x1, y1, x2, y2) in [(0, 0, 6, 3), (-4, 7, 3, -2), (1, 1, 1, 9)] {
        let forward = line_set(x1, y1, x2, y2);
        let backward = line_set(x2, y2, x1, y1);
        for p in [(x1, y1), (x2, y2)] {
            assert!(forward.contains(&p));
            assert!(backward.contains(&p));
        }
    }
}

#[test]
fn test_line_symmetric_without_error_ties() {
    let cases = [
        (0, 0, 9, 0),
        (3, -4, 3, 6),
        (0, 0, 7, 7),
        (5, 0, 0, 5),
        (0, 0, 5, 2),
        (2, 1, -3, 8),
        (1, 2, 4, 9),
    ];
    for (x1, y1, x2, y2) in cases {
        assert_eq!(
            line_set(x1, y1, x2, y2),
            line_set(x2, y2, x1, y1),
            "({x1}, {y1}) - ({x2}, {y2})"
        );
    }
}

#[test]
fn test_classic_tie_breaking_is_kept() {
    // Ties step x first, so the two directions differ on this slope.
    let forward: Vec<_> = line_set(0, 0, 6, 3).into_iter().collect();
    assert_eq!(
        forward,
        vec![(0, 0), (1, 0), (2, 1), (3, 1), (4, 2), (5, 2), (6, 3)]
    );
    let backward: Vec<_> = line_set(6, 3, 0, 0).into_iter().collect();
    assert_eq!(
        backward,
        vec![(0, 0), (1, 1), (2, 1), (3, 2), (4, 2), (5, 3), (6, 3)]
    );
}

fn dist(a: (i32, i32), b: (i32, i32)) -> f64 {
    (f64::from(a.0 - b.0)).hypot(f64::from(a.1 - b.1))
}

#[test]
fn test_unrotated_square_geometry() {
    for size in [4.0, 10.0, 16.0, 31.0] {
        let (cx, cy) = (50, 40);
        let p = square_vertices(cx, cy, size, 0.0);

        // Sides come out at `size`, within rounding.
        for j in 0..4 {
            let side = dist(p[j], p[(j + 1) % 4]);
            assert!((side - size).abs() <= 2.0, "size {size}: side {side}");
        }
        // Diagonals are equal and cross at the centre.
        let d1 = dist(p[0], p[2]);
        let d2 = dist(p[1], p[3]);
        assert!((d1 - d2).abs() < 1e-9);
        assert_eq!(p[0].0 + p[2].0, 2 * cx);
        assert_eq!(p[0].1 + p[2].1, 2 * cy);
        assert_eq!(p[1].0 + p[3].0, 2 * cx);
        assert_eq!(p[1].1 + p[3].1, 2 * cy);
    }
}

#[test]
fn test_rotated_square_keeps_its_corners_on_a_circle() {
    let p = square_vertices(0, 0, 20.0, 0.3);
    // radius round(20 / sqrt 2) = 14
    for v in p {
        assert!((dist(v, (0, 0)) - 14.0).abs() <= 1.0, "{v:?}");
    }
}

#[test]
fn test_square_clips_at_canvas_edge() {
    let mut canvas = Canvas::new(10, 10, WHITE).unwrap();
    draw_square(&mut canvas, 0, 0, 10.0, 0.0, BLACK);
    // Corner (5, 5) is on canvas, the others are clipped away.
    assert_eq!(canvas.get_pixel(5, 5), BLACK);
    assert_eq!(canvas.get_pixel(5, 0), BLACK);
    assert_eq!(canvas.get_pixel(0, 5), BLACK);
    assert_eq!(canvas.get_pixel(6, 6), WHITE);
}
