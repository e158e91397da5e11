//! The display capability the surface draws through.

use anyhow::Result;

use crate::types::CellStyle;

/// Immediate-mode, fixed-position character output.
///
/// Every call lands on screen (or in the recording buffer) straight away; there
/// is no frame to present. Writes outside the visible area are errors.
pub trait DisplaySink {
    fn put_str(&mut self, x: u16, y: u16, text: &str, style: CellStyle) -> Result<()>;

    fn set_cursor_visible(&mut self, visible: bool) -> Result<()>;

    fn set_title(&mut self, title: &str) -> Result<()>;

    fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) -> Result<()> {
        let mut buf = [0u8; 4];
        self.put_str(x, y, ch.encode_utf8(&mut buf), style)
    }

    /// Blank `width` columns starting at `(x, y)`.
    fn clear_field(&mut self, x: u16, y: u16, width: u16, style: CellStyle) -> Result<()> {
        self.put_str(x, y, &" ".repeat(width as usize), style)
    }
}

impl<D: DisplaySink + ?Sized> DisplaySink for &mut D {
    fn put_str(&mut self, x: u16, y: u16, text: &str, style: CellStyle) -> Result<()> {
        (**self).put_str(x, y, text, style)
    }

    fn set_cursor_visible(&mut self, visible: bool) -> Result<()> {
        (**self).set_cursor_visible(visible)
    }

    fn set_title(&mut self, title: &str) -> Result<()> {
        (**self).set_title(title)
    }

    fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) -> Result<()> {
        (**self).put_char(x, y, ch, style)
    }

    fn clear_field(&mut self, x: u16, y: u16, width: u16, style: CellStyle) -> Result<()> {
        (**self).clear_field(x, y, width, style)
    }
}
