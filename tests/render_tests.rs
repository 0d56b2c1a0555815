//! Render tests - shape of the serialized output

use lolwut::core::{draw_schotter, generate_skyline, Canvas, SimpleRng};
use lolwut::term::{render_braille, render_gray};
use lolwut::types::WHITE;

const CELL_END: &str = " \x1b[0m";

fn skyline_text(columns: usize, rows: usize) -> String {
    let mut canvas = Canvas::new(columns, rows, WHITE).unwrap();
    generate_skyline(&mut canvas, &mut SimpleRng::new(99));
    render_gray(&canvas)
}

#[test]
fn test_gray_output_has_rows_lines_of_columns_cells() {
    for (columns, rows) in [(1, 1), (80, 20), (13, 7), (200, 3)] {
        let text = skyline_text(columns, rows);
        assert!(!text.ends_with('\n'));
        let lines: Vec<&str> = text.split('\n').collect();
        assert_eq!(lines.len(), rows);
        for line in lines {
            assert_eq!(line.matches(CELL_END).count(), columns);
            assert!(line.starts_with("\x1b[0;"));
        }
    }
}

#[test]
fn test_gray_output_only_uses_palette_escapes() {
    let text = skyline_text(80, 20);
    let allowed = ["0;30;40m", "0;90;100m", "0;37;47m", "0;97;107m"];
    for cell in text.split(CELL_END).filter(|c| !c.is_empty()) {
        let sgr = cell.trim_start_matches('\n').trim_start_matches("\x1b[");
        assert!(allowed.contains(&sgr), "unexpected cell {cell:?}");
    }
}

#[test]
fn test_braille_output_dimensions() {
    let canvas = draw_schotter(66, 8, 12, &mut SimpleRng::new(4)).unwrap();
    let text = render_braille(&canvas);
    let lines: Vec<&str> = text.split('\n').collect();
    assert_eq!(lines.len(), canvas.height().div_ceil(4));
    for line in lines {
        assert_eq!(line.chars().count(), 66);
        assert!(line.chars().all(|c| ('\u{2800}'..='\u{28FF}').contains(&c)));
    }
}
