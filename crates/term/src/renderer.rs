//! TerminalSink: immediate-mode drawing on a real terminal.
//!
//! Each sink call encodes its crossterm commands into a scratch buffer and
//! flushes it right away, so the screen always matches the last call.

use std::io::{self, Write};

use anyhow::{bail, Result};

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::sink::DisplaySink;
use crate::types::{CellStyle, Rgb};

pub struct TerminalSink {
    stdout: io::Stdout,
    buf: Vec<u8>,
    width: u16,
    height: u16,
}

impl TerminalSink {
    pub fn new() -> Result<Self> {
        let (width, height) = terminal::size()?;
        Ok(Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(4 * 1024),
            width,
            height,
        })
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl DisplaySink for TerminalSink {
    fn put_str(&mut self, x: u16, y: u16, text: &str, style: CellStyle) -> Result<()> {
        let len = text.chars().count();
        if y >= self.height || x as usize + len > self.width as usize {
            bail!(
                "terminal is {}x{}, cannot draw {len} cells at ({x}, {y})",
                self.width,
                self.height
            );
        }
        self.buf.clear();
        encode_put_into(&mut self.buf, x, y, text, style)?;
        self.flush_buf()
    }

    fn set_cursor_visible(&mut self, visible: bool) -> Result<()> {
        self.buf.clear();
        if visible {
            self.buf.queue(cursor::Show)?;
        } else {
            self.buf.queue(cursor::Hide)?;
        }
        self.flush_buf()
    }

    fn set_title(&mut self, title: &str) -> Result<()> {
        self.buf.clear();
        self.buf.queue(terminal::SetTitle(title))?;
        self.flush_buf()
    }
}

/// Encode one positioned, styled write into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_put_into(
    out: &mut Vec<u8>,
    x: u16,
    y: u16,
    text: &str,
    style: CellStyle,
) -> Result<()> {
    out.queue(cursor::MoveTo(x, y))?;
    apply_style_into(out, style)?;
    out.queue(Print(text))?;
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    out.queue(SetAttribute(Attribute::Reset))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::palette;

    #[test]
    fn rgb_maps_to_truecolor() {
        assert_eq!(
            rgb_to_color(Rgb::new(1, 2, 3)),
            Color::Rgb { r: 1, g: 2, b: 3 }
        );
    }

    #[test]
    fn encoded_write_moves_cursor_then_prints() {
        let mut out = Vec::new();
        encode_put_into(&mut out, 27, 1, "HI-SCORE", palette::TEXT).unwrap();
        let s = String::from_utf8(out).unwrap();

        // crossterm MoveTo is 0-based, ANSI CUP is 1-based row;col.
        let move_to = s.find("\x1b[2;28H").unwrap();
        let text = s.find("HI-SCORE").unwrap();
        assert!(move_to < text);
        assert!(s.ends_with("\x1b[0m"));
    }

    #[test]
    fn bold_styles_emit_bold_attribute() {
        let mut out = Vec::new();
        encode_put_into(&mut out, 0, 0, "PAUSE", palette::PAUSE).unwrap();
        let s = String::from_utf8(out).unwrap();
        assert!(s.contains("\x1b[1m"));
    }
}
