//! Gray cell encoding: one canvas pixel per terminal cell.
//!
//! Both foreground and background are set for every cell, which gives more
//! consistent results across terminal implementations.

use lolwut_core::{Canvas, Surface};

use crate::types::{ColorIndex, BLACK, DARK_GRAY, LIGHT_GRAY, WHITE};

/// SGR parameters (without the leading `ESC [`) for a palette index.
///
/// Anything outside the palette renders as black.
pub fn gray_escape(color: ColorIndex) -> &'static str {
    match color {
        BLACK => "0;30;40m",
        DARK_GRAY => "0;90;100m",
        LIGHT_GRAY => "0;37;47m",
        WHITE => "0;97;107m",
        _ => "0;30;40m",
    }
}

/// Serialize the canvas as rows of colored spaces.
///
/// Rows are separated by `\n`; there is no trailing newline.
pub fn render_gray(canvas: &Canvas) -> String {
    // Longest escape pair is 17 bytes plus the space.
    let mut text = String::with_capacity(canvas.width() * canvas.height() * 18);
    let height = canvas.height() as i32;
    for y in 0..height {
        for x in 0..canvas.width() as i32 {
            text.push_str("\x1b[");
            text.push_str(gray_escape(canvas.get_pixel(x, y)));
            text.push_str(" \x1b[0m");
        }
        if y != height - 1 {
            text.push('\n');
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_colors_fall_back_to_black() {
        assert_eq!(gray_escape(4), gray_escape(BLACK));
        assert_eq!(gray_escape(u8::MAX), gray_escape(BLACK));
    }

    #[test]
    fn single_pixel_is_one_escaped_space() {
        let canvas = Canvas::new(1, 1, WHITE).unwrap();
        assert_eq!(render_gray(&canvas), "\x1b[0;97;107m \x1b[0m");
    }

    #[test]
    fn rows_are_joined_without_trailing_newline() {
        let mut canvas = Canvas::new(2, 2, WHITE).unwrap();
        canvas.set_pixel(1, 1, DARK_GRAY);
        let text = render_gray(&canvas);
        let lines: Vec<&str> = text.split('\n').collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "\x1b[0;97;107m \x1b[0m\x1b[0;97;107m \x1b[0m");
        assert_eq!(lines[1], "\x1b[0;97;107m \x1b[0m\x1b[0;90;100m \x1b[0m");
    }
}
