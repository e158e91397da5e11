//! Screen geometry of one surface: border box, field cells and status panel.
//!
//! All coordinates are absolute terminal cells derived from the anchor passed
//! to [`Layout::new`].

use anyhow::{bail, Result};

use crate::types::{
    palette, CellStyle, BORDER_COLUMNS, BORDER_ROWS, CELL_COLUMNS, FIELD_HEIGHT, FIELD_WIDTH,
    PANEL_OFFSET_X, STATUS_FIELD_WIDTH,
};

pub const HIGH_SCORE_ROW: u16 = 2;
pub const SCORE_ROW: u16 = 5;
pub const LEVEL_ROW: u16 = 8;
pub const SPEED_ROW: u16 = 11;
pub const PAUSE_ROW: u16 = 13;

pub const PAUSE_TEXT: &str = "PAUSE";

/// Static panel labels: `(row, text, style)`.
pub const LABELS: [(u16, &str, CellStyle); 9] = [
    (1, "HI-SCORE", palette::TEXT),
    (4, "SCORE", palette::TEXT),
    (7, "LEVEL", palette::TEXT),
    (10, "SPEED", palette::TEXT),
    (15, "<--CONTROLS-->", palette::LEGEND_TITLE),
    (16, "P - Pause/Start", palette::LEGEND),
    (17, "Pg Up - Next Game", palette::LEGEND),
    (18, "Pg Dn - Previous Game", palette::LEGEND),
    (19, "R - Reset", palette::LEGEND),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderGlyph {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Vertical,
    Horizontal,
}

impl BorderGlyph {
    pub fn ch(self) -> char {
        match self {
            BorderGlyph::TopLeft => '╔',
            BorderGlyph::TopRight => '╗',
            BorderGlyph::BottomLeft => '╚',
            BorderGlyph::BottomRight => '╝',
            BorderGlyph::Vertical => '║',
            BorderGlyph::Horizontal => '═',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    x: u16,
    y: u16,
}

impl Layout {
    /// Anchor a layout at `(x, y)`.
    ///
    /// Fails when the box or the status panel would extend past the last
    /// addressable terminal coordinate.
    pub fn new(x: u16, y: u16) -> Result<Self> {
        let panel_width = LABELS
            .iter()
            .map(|(_, text, _)| text.chars().count() as u16)
            .fold(STATUS_FIELD_WIDTH, u16::max);
        let right = x
            .checked_add(PANEL_OFFSET_X)
            .and_then(|px| px.checked_add(panel_width));
        let bottom = y.checked_add(BORDER_ROWS);
        if right.is_none() || bottom.is_none() {
            bail!("surface anchored at ({x}, {y}) does not fit the terminal coordinate range");
        }
        Ok(Self { x, y })
    }

    pub fn position(&self) -> (u16, u16) {
        (self.x, self.y)
    }

    fn left(&self) -> u16 {
        self.x + 1
    }

    fn right(&self) -> u16 {
        self.x + FIELD_WIDTH * CELL_COLUMNS + 2
    }

    fn top(&self) -> u16 {
        self.y
    }

    fn bottom(&self) -> u16 {
        self.y + FIELD_HEIGHT + 1
    }

    /// Glyph for screen cell `(i, j)`, if it lies on the border.
    ///
    /// The box is drawn one column in from the anchor: verticals sit on
    /// `x + 1` and `x + FIELD_WIDTH * 2 + 2`, and the outermost column on
    /// each side stays blank.
    pub fn classify(&self, i: u16, j: u16) -> Option<BorderGlyph> {
        let (left, right) = (self.left(), self.right());
        let (top, bottom) = (self.top(), self.bottom());
        if i < self.x || i >= self.x + BORDER_COLUMNS || j < top || j > bottom {
            return None;
        }
        if i == left && j == top {
            Some(BorderGlyph::TopLeft)
        } else if (i == left || i == right) && j != bottom && j != top {
            Some(BorderGlyph::Vertical)
        } else if i == left && j == bottom {
            Some(BorderGlyph::BottomLeft)
        } else if i == right && j == top {
            Some(BorderGlyph::TopRight)
        } else if i == right && j == bottom {
            Some(BorderGlyph::BottomRight)
        } else if i != self.x
            && i != left
            && i != right
            && i != right + 1
            && (j == top || j == bottom)
        {
            Some(BorderGlyph::Horizontal)
        } else {
            None
        }
    }

    /// Every border cell, scanning columns then rows.
    pub fn border_cells(&self) -> impl Iterator<Item = (u16, u16, BorderGlyph)> + '_ {
        let columns = self.x..self.x + BORDER_COLUMNS;
        columns.flat_map(move |i| {
            (self.y..self.y + BORDER_ROWS)
                .filter_map(move |j| self.classify(i, j).map(|g| (i, j, g)))
        })
    }

    /// Top-left screen cell of field cell `(column, row)`.
    pub fn cell_origin(&self, column: u16, row: u16) -> (u16, u16) {
        (self.x + 2 + column * CELL_COLUMNS, self.y + row + 1)
    }

    pub fn panel_x(&self) -> u16 {
        self.x + PANEL_OFFSET_X
    }

    pub fn panel_row(&self, row: u16) -> u16 {
        self.y + row
    }
}
