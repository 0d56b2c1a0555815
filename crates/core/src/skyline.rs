//! Skyline generator - layered 8 bit style city skyline
//!
//! The scene is built in three passes drawn back to front, so draw order
//! alone gives the parallax layering:
//!
//! 1. far buildings in light gray, densely overlapping
//! 2. near buildings in dark gray, spaced out
//! 3. black foreground buildings with lit windows
//!
//! Window cells are two pixels wide and one tall, since terminal cells are
//! roughly twice as tall as they are wide.

use arrayvec::ArrayVec;
use tracing::debug;

use crate::canvas::{Canvas, Surface};
use crate::rng::RandSource;
use crate::types::{ColorIndex, BLACK, DARK_GRAY, LIGHT_GRAY, WINDOW_GRAYS};

/// Horizontal offset every pass starts from, left of the canvas.
const START_OFFSET: i32 = -10;

/// Parameters of one building.
///
/// `xoff` may be negative or past the right edge; the canvas clips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skyscraper {
    pub xoff: i32,
    pub width: i32,
    pub height: i32,
    pub windows: bool,
    pub color: ColorIndex,
}

impl Skyscraper {
    pub fn new(xoff: i32, width: i32, height: i32, color: ColorIndex) -> Self {
        Self {
            xoff,
            width,
            height,
            windows: false,
            color,
        }
    }

    pub fn with_windows(self, windows: bool) -> Self {
        Self { windows, ..self }
    }
}

/// Pick a window color that differs from the building color.
///
/// The choice is made among the eligible grays directly, so it always
/// terminates. For a black building both grays are eligible and this draws
/// exactly like `1 + rand() % 2`.
fn window_color(building: ColorIndex, rng: &mut impl RandSource) -> ColorIndex {
    let eligible: ArrayVec<ColorIndex, 2> = WINDOW_GRAYS
        .iter()
        .copied()
        .filter(|&c| c != building)
        .collect();
    // WINDOW_GRAYS holds two distinct grays, so at least one survives.
    debug_assert!(!eligible.is_empty());
    eligible[rng.rand() as usize % eligible.len()]
}

/// Draw one building standing on the bottom row of the canvas.
pub fn draw_skyscraper(canvas: &mut Canvas, sky: &Skyscraper, rng: &mut impl RandSource) {
    let starty = canvas.height() as i32 - 1;
    let endy = starty - sky.height + 1;
    let left = sky.xoff;
    let right = sky.xoff + sky.width;

    for y in (endy..=starty).rev() {
        for x in left..right {
            // The roof is four pixels narrower than the body.
            if y == endy && (x <= left + 1 || x >= right - 2) {
                continue;
            }

            let mut color = sky.color;
            let inner = x > left + 1 && x < right - 2 && y > endy + 1 && y < starty - 1;
            if sky.windows && inner {
                let relx = x - (left + 1);
                let rely = y - (endy + 1);
                if (relx / 2) % 2 == 1 && rely % 2 == 1 {
                    color = window_color(sky.color, rng);
                    // Right half of a window cell copies the left half.
                    if relx % 2 == 1 {
                        color = canvas.get_pixel(x - 1, y);
                    }
                }
            }
            canvas.set_pixel(x, y, color);
        }
    }
}

/// Draw a full skyline over whatever the canvas holds.
pub fn generate_skyline(canvas: &mut Canvas, rng: &mut impl RandSource) {
    let width = canvas.width() as i32;
    let height = canvas.height() as i32;
    let h = height as u32;

    // Background passes: lighter first so darker buildings end up in front.
    for color in [LIGHT_GRAY, DARK_GRAY] {
        let mut count = 0usize;
        let mut offset = START_OFFSET;
        while offset < width {
            offset += (rng.rand() % 8) as i32;
            let bwidth = 10 + (rng.rand() % 9) as i32;
            let bheight = if color == LIGHT_GRAY {
                height / 2 + (rng.rand() % h / 2) as i32
            } else {
                height / 2 + (rng.rand() % h / 3) as i32
            };
            draw_skyscraper(canvas, &Skyscraper::new(offset, bwidth, bheight, color), rng);
            count += 1;

            offset += if color == LIGHT_GRAY {
                bwidth / 2
            } else {
                bwidth + 1
            };
        }
        debug!(color, buildings = count, "skyline background pass done");
    }

    let mut count = 0usize;
    let mut offset = START_OFFSET;
    while offset < width {
        offset += (rng.rand() % 8) as i32;
        let mut bwidth = 5 + (rng.rand() % 14) as i32;
        if bwidth % 4 != 0 {
            bwidth += bwidth % 3;
        }
        let bheight = height / 3 + (rng.rand() % h / 2) as i32;
        let sky = Skyscraper::new(offset, bwidth, bheight, BLACK).with_windows(true);
        draw_skyscraper(canvas, &sky, rng);
        count += 1;
        offset += bwidth + 5;
    }
    debug!(buildings = count, "skyline foreground pass done");
}
