//! Shared constants and colour types for the brick game surface.
//!
//! Everything here is plain data with no dependencies, so it can be used by the
//! core state machines, the terminal layer and the demo host alike.
//!
//! # Field Dimensions
//!
//! The brick game LCD is a fixed 10x20 grid. Each cell is drawn two terminal
//! columns wide to compensate for the usual glyph aspect ratio:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//!
//! # Status Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GAME_SCORE` | 0 | Score at the start of a session |
//! | `GAME_HIGHSCORE` | 0 | High score before a session is initialised |
//! | `GAME_LEVEL` | 1 | Initial level |
//! | `GAME_SPEED` | 1 | Initial speed |
//!
//! # Examples
//!
//! ```
//! use brick_surface_types::{FIELD_HEIGHT, FIELD_WIDTH, BORDER_COLUMNS, BORDER_ROWS};
//!
//! assert_eq!(FIELD_WIDTH, 10);
//! assert_eq!(FIELD_HEIGHT, 20);
//! assert_eq!(BORDER_COLUMNS, 24);
//! assert_eq!(BORDER_ROWS, 22);
//! ```

/// Field width in cells (10 columns)
pub const FIELD_WIDTH: u16 = 10;

/// Field height in cells (20 rows)
pub const FIELD_HEIGHT: u16 = 20;

/// Terminal columns used by one field cell.
pub const CELL_COLUMNS: u16 = 2;

/// Width of the bordered box in terminal columns (`FIELD_WIDTH * 2 + 4`).
pub const BORDER_COLUMNS: u16 = FIELD_WIDTH * CELL_COLUMNS + 4;

/// Height of the bordered box in terminal rows (`FIELD_HEIGHT + 2`).
pub const BORDER_ROWS: u16 = FIELD_HEIGHT + 2;

/// Column offset of the status panel from the surface anchor (27 at x = 0).
pub const PANEL_OFFSET_X: u16 = BORDER_COLUMNS + 3;

/// Width of a status value slot; cleared before every write.
pub const STATUS_FIELD_WIDTH: u16 = 12;

/// Score at the start of a session.
pub const GAME_SCORE: u32 = 0;

/// High score before any session has been initialised.
pub const GAME_HIGHSCORE: u32 = 0;

/// Level shown until the host changes it.
pub const GAME_LEVEL: u32 = 1;

/// Speed shown until the host changes it.
pub const GAME_SPEED: u32 = 1;

/// Per-frame splash delay when none is given.
pub const DEFAULT_SPLASH_TIMEOUT_MS: u64 = 20;

/// Host loop tick interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u64 = 16;

/// Window title set once when the surface is built.
pub const WINDOW_TITLE: &str = "BrickGame";

/// Glyph for an occupied field cell (followed by a space).
pub const FILLED_CELL: &str = "▣ ";

/// Glyph pair for an empty field cell.
pub const EMPTY_CELL: &str = "  ";

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
}

impl CellStyle {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        palette::TEXT
    }
}

/// Fixed colours of the emulated console.
pub mod palette {
    use super::{CellStyle, Rgb};

    /// Unlit LCD segment.
    pub const LCD_LIGHT: Rgb = Rgb::new(158, 173, 134);
    /// Lit LCD segment.
    pub const LCD_DARK: Rgb = Rgb::new(28, 32, 24);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(230, 230, 230);
    pub const RED: Rgb = Rgb::new(220, 80, 80);
    pub const GREEN: Rgb = Rgb::new(100, 220, 120);
    pub const YELLOW: Rgb = Rgb::new(240, 220, 80);

    /// Empty field cell: blanks on the light background.
    pub const EMPTY: CellStyle = CellStyle::new(LCD_DARK, LCD_LIGHT);
    /// Occupied field cell: block glyph on the dark background.
    pub const FILLED: CellStyle = CellStyle::new(LCD_LIGHT, LCD_DARK);
    pub const BORDER: CellStyle = CellStyle::new(WHITE, BLACK);
    pub const TEXT: CellStyle = CellStyle::new(WHITE, BLACK);
    pub const LEGEND_TITLE: CellStyle = CellStyle::new(RED, BLACK).bold();
    pub const LEGEND: CellStyle = CellStyle::new(GREEN, BLACK);
    pub const PAUSE: CellStyle = CellStyle::new(YELLOW, BLACK).bold();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_constants_match_console_geometry() {
        assert_eq!(BORDER_COLUMNS, FIELD_WIDTH * 2 + 4);
        assert_eq!(BORDER_ROWS, FIELD_HEIGHT + 2);
        assert_eq!(PANEL_OFFSET_X, 27);
        assert_eq!(STATUS_FIELD_WIDTH, 12);
        assert_eq!(DEFAULT_SPLASH_TIMEOUT_MS, 20);
    }

    #[test]
    fn field_styles_have_opposite_backgrounds() {
        assert_eq!(palette::EMPTY.bg, palette::LCD_LIGHT);
        assert_eq!(palette::FILLED.bg, palette::LCD_DARK);
        assert_eq!(EMPTY_CELL.chars().count(), 2);
        assert_eq!(FILLED_CELL.chars().count(), 2);
    }
}
