//! Braille encoding: each character packs a 2x4 block of pixels.

use lolwut_core::{Canvas, Surface};

/// First code point of the Unicode braille block (no dots raised).
const BRAILLE_BASE: u32 = 0x2800;

/// Dot bit for each `(dx, dy)` inside a 2x4 block, in Unicode dot order.
const DOTS: [(i32, i32, u8); 8] = [
    (0, 0, 0),
    (0, 1, 1),
    (0, 2, 2),
    (1, 0, 3),
    (1, 1, 4),
    (1, 2, 5),
    (0, 3, 6),
    (1, 3, 7),
];

/// Braille character with the given dot bits raised.
pub fn braille_char(bits: u8) -> char {
    // 0x2800..=0x28FF is fully assigned.
    char::from_u32(BRAILLE_BASE + u32::from(bits)).unwrap_or(' ')
}

/// Dot bits for the 2x4 block whose top left pixel is `(x, y)`.
pub fn block_bits(canvas: &Canvas, x: i32, y: i32) -> u8 {
    DOTS.iter()
        .filter(|(dx, dy, _)| canvas.get_pixel(x + dx, y + dy) != 0)
        .fold(0u8, |acc, &(_, _, bit)| acc | (1u8 << bit))
}

/// Serialize the canvas as braille text, any non-zero pixel is a raised dot.
pub fn render_braille(canvas: &Canvas) -> String {
    let width = canvas.width() as i32;
    let height = canvas.height() as i32;
    let mut lines = Vec::with_capacity(canvas.height().div_ceil(4));
    for y in (0..height).step_by(4) {
        let line: String = (0..width)
            .step_by(2)
            .map(|x| braille_char(block_bits(canvas, x, y)))
            .collect();
        lines.push(line);
    }
    lines.join("\n")
}
