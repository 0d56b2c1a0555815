//! TerminalRenderer: writes finished art to a terminal in one flush.
//!
//! The art is already fully escaped text, so this stays a thin buffered
//! writer. Output is built as a sequence of crossterm commands in memory
//! and handed to the underlying writer at once.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{style::Print, QueueableCommand};
use tracing::debug;

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    buf: Vec<u8>,
}

impl TerminalRenderer<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalRenderer<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    /// Write the art followed by its attribution, each on its own line.
    pub fn draw(&mut self, art: &str, attribution: &str) -> Result<()> {
        self.buf.clear();
        encode_art_into(art, attribution, &mut self.buf)?;
        self.flush_buf()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        debug!(bytes = self.buf.len(), "art flushed");
        Ok(())
    }
}

/// Encode art plus attribution into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_art_into(art: &str, attribution: &str, out: &mut Vec<u8>) -> Result<()> {
    out.queue(Print(art))?;
    out.queue(Print('\n'))?;
    out.queue(Print(attribution))?;
    out.queue(Print('\n'))?;
    Ok(())
}
