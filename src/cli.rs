//! Command line surface: `lolwut [version <N>] [args...]`.
//!
//! Positional arguments are read leniently. A value with no leading digits
//! counts as missing and falls back to the renderer default; numbers out of
//! range are clamped, never rejected.

use anyhow::Result;
use clap::{ArgAction, Parser};
use tracing::{info, warn};

use lolwut_core::{draw_schotter, generate_skyline, Canvas, RandSource};
use lolwut_term::{render_braille, render_gray};
use lolwut_types::{
    clamp_dimension, Version, DEFAULT_COLUMNS, DEFAULT_ROWS, MAX_COLUMNS, MAX_ROWS,
    SCHOTTER_ATTRIBUTION, SCHOTTER_DEFAULT_COLUMNS, SCHOTTER_DEFAULT_SQUARES_PER_COL,
    SCHOTTER_DEFAULT_SQUARES_PER_ROW, SCHOTTER_MAX_SQUARES, SKYLINE_ATTRIBUTION, WHITE,
};

#[derive(Parser, Debug)]
#[command(name = "lolwut")]
#[command(version)]
#[command(about = "Computer art for the terminal", long_about = None)]
#[command(after_help = "\
Renderers:
  version 6 [columns] [rows]
      City skyline in four grays. Defaults: 80 columns, 20 rows (max 1000 each).
  version 5 [columns] [squares-per-row] [squares-per-col]
      Georg Nees' schotter in braille. Defaults: 66 columns, 8 and 12 squares.

Without `version`, renderer 6 is used.")]
pub struct Args {
    /// Optional `version <N>` selector followed by the renderer's numbers
    #[arg(allow_negative_numbers = true, value_name = "ARGS")]
    pub args: Vec<String>,

    /// Seed for the random source; random when omitted
    #[arg(long, env = "LOLWUT_SEED")]
    pub seed: Option<u32>,

    /// More logging on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// A fully resolved request: renderer plus clamped dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Skyline {
        columns: usize,
        rows: usize,
    },
    Schotter {
        columns: usize,
        squares_per_row: usize,
        squares_per_col: usize,
    },
    /// A version selector no renderer answers to.
    Unknown(String),
}

/// Rendered art and the line printed under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Art {
    pub text: String,
    pub attribution: &'static str,
}

/// Parse the leading integer of `s`, like C `atol` but without a zero default.
///
/// Leading whitespace and one sign are accepted, trailing garbage is ignored.
/// Values beyond `i64` saturate so the caller's clamp still applies.
/// Returns `None` when there are no digits.
pub fn parse_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let value = rest.bytes().take(digits).fold(0i64, |acc, b| {
        let d = i64::from(b - b'0');
        if negative {
            acc.saturating_mul(10).saturating_sub(d)
        } else {
            acc.saturating_mul(10).saturating_add(d)
        }
    });
    Some(value)
}

fn arg_or(args: &[String], index: usize, default: i64) -> i64 {
    args.get(index).and_then(|a| parse_int(a)).unwrap_or(default)
}

impl Invocation {
    /// Resolve positional arguments into an invocation.
    pub fn from_args(args: &[String]) -> Self {
        let (version, rest) = match args.first() {
            Some(first) if first.eq_ignore_ascii_case("version") => match args.get(1) {
                Some(v) => (Version::from_str(v).ok_or_else(|| v.clone()), &args[2..]),
                None => (Err(String::new()), &args[1..]),
            },
            _ => (Ok(Version::default()), args),
        };

        match version {
            Ok(Version::Skyline) => Invocation::Skyline {
                columns: clamp_dimension(arg_or(rest, 0, DEFAULT_COLUMNS), MAX_COLUMNS),
                rows: clamp_dimension(arg_or(rest, 1, DEFAULT_ROWS), MAX_ROWS),
            },
            Ok(Version::Schotter) => Invocation::Schotter {
                columns: clamp_dimension(arg_or(rest, 0, SCHOTTER_DEFAULT_COLUMNS), MAX_COLUMNS),
                squares_per_row: clamp_dimension(
                    arg_or(rest, 1, SCHOTTER_DEFAULT_SQUARES_PER_ROW),
                    SCHOTTER_MAX_SQUARES,
                ),
                squares_per_col: clamp_dimension(
                    arg_or(rest, 2, SCHOTTER_DEFAULT_SQUARES_PER_COL),
                    SCHOTTER_MAX_SQUARES,
                ),
            },
            Err(v) => Invocation::Unknown(v),
        }
    }

    /// Draw and serialize the requested art. `None` for unknown versions.
    pub fn render(&self, rng: &mut impl RandSource) -> Result<Option<Art>> {
        let art = match *self {
            Invocation::Skyline { columns, rows } => {
                info!(columns, rows, "rendering skyline");
                let mut canvas = Canvas::new(columns, rows, WHITE)?;
                generate_skyline(&mut canvas, rng);
                let text = render_gray(&canvas);
                canvas.destroy();
                Art {
                    text,
                    attribution: SKYLINE_ATTRIBUTION,
                }
            }
            Invocation::Schotter {
                columns,
                squares_per_row,
                squares_per_col,
            } => {
                info!(columns, squares_per_row, squares_per_col, "rendering schotter");
                let canvas = draw_schotter(columns, squares_per_row, squares_per_col, rng)?;
                let text = render_braille(&canvas);
                canvas.destroy();
                Art {
                    text,
                    attribution: SCHOTTER_ATTRIBUTION,
                }
            }
            Invocation::Unknown(ref v) => {
                warn!(version = %v, "no renderer for this version");
                return Ok(None);
            }
        };
        Ok(Some(art))
    }
}
