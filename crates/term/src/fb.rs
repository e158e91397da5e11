//! Framebuffer of styled cells and the recording sink built on it.

use anyhow::{bail, Result};

use crate::sink::DisplaySink;
use crate::types::CellStyle;

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// 2D framebuffer of styled character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            self.set(cx, y, Cell { ch, style });
            cx += 1;
        }
    }

    /// Characters of row `y`, trailing blanks included.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .map(|x| self.get(x, y).map(|c| c.ch).unwrap_or(' '))
            .collect()
    }

    /// Text of `width` cells starting at `(x, y)`.
    pub fn text_at(&self, x: u16, y: u16, width: u16) -> String {
        (x..x.saturating_add(width))
            .map(|cx| self.get(cx, y).map(|c| c.ch).unwrap_or(' '))
            .collect()
    }

    pub fn text(&self) -> String {
        let mut all = String::with_capacity((self.width as usize + 1) * self.height as usize);
        for y in 0..self.height {
            all.push_str(&self.row_text(y));
            all.push('\n');
        }
        all
    }
}

/// In-memory [`DisplaySink`] that records what a terminal would show.
#[derive(Debug, Clone)]
pub struct MemorySink {
    fb: FrameBuffer,
    title: Option<String>,
    cursor_visible: bool,
    writes: usize,
}

impl MemorySink {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            fb: FrameBuffer::new(width, height),
            title: None,
            cursor_visible: true,
            writes: 0,
        }
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.fb
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    /// Number of `put_str` calls that reached the buffer.
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn reset_writes(&mut self) {
        self.writes = 0;
    }
}

impl DisplaySink for MemorySink {
    fn put_str(&mut self, x: u16, y: u16, text: &str, style: CellStyle) -> Result<()> {
        let len = text.chars().count();
        if y >= self.fb.height() || x as usize + len > self.fb.width() as usize {
            bail!(
                "write of {len} cells at ({x}, {y}) outside {}x{} screen",
                self.fb.width(),
                self.fb.height()
            );
        }
        self.fb.put_str(x, y, text, style);
        self.writes += 1;
        Ok(())
    }

    fn set_cursor_visible(&mut self, visible: bool) -> Result<()> {
        self.cursor_visible = visible;
        Ok(())
    }

    fn set_title(&mut self, title: &str) -> Result<()> {
        self.title = Some(title.to_string());
        Ok(())
    }
}
