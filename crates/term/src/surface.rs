//! RenderSurface: the brick game screen.
//!
//! The surface draws its border and labels once when built. After that the
//! host calls [`RenderSurface::render`] once per tick, either with the live
//! field or with `None` to run the attract splash. Only the cells and labels a
//! call touches are rewritten.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::core::{
    FieldSnapshot, Pacer, ScoreStore, Splash, SplashSource, StatusPanel, TextSplashSource,
    ThreadPacer,
};
use crate::layout::{
    Layout, HIGH_SCORE_ROW, LABELS, LEVEL_ROW, PAUSE_ROW, PAUSE_TEXT, SCORE_ROW, SPEED_ROW,
};
use crate::sink::DisplaySink;
use crate::sound::{SilentSoundPlayer, SoundPlayer};
use crate::types::{
    palette, CellStyle, DEFAULT_SPLASH_TIMEOUT_MS, EMPTY_CELL, FIELD_HEIGHT, FIELD_WIDTH,
    FILLED_CELL, STATUS_FIELD_WIDTH, WINDOW_TITLE,
};

pub const DEFAULT_SPLASH_DIR: &str = "splash";

pub struct RenderSurface<D: DisplaySink, S: ScoreStore> {
    sink: D,
    store: S,
    layout: Layout,
    status: StatusPanel,
    splash: Splash,
    splash_source: Box<dyn SplashSource>,
    pacer: Box<dyn Pacer>,
    sound: Box<dyn SoundPlayer>,
}

impl<D: DisplaySink, S: ScoreStore> RenderSurface<D, S> {
    /// Build a surface anchored at `(x, y)` and draw its static frame.
    ///
    /// Hides the cursor, sets the window title, draws the border and labels,
    /// then shows the initial status values.
    pub fn new(x: u16, y: u16, sink: D, store: S) -> Result<Self> {
        let mut surface = Self {
            sink,
            store,
            layout: Layout::new(x, y)?,
            status: StatusPanel::default(),
            splash: Splash::new(),
            splash_source: Box::new(TextSplashSource::new(DEFAULT_SPLASH_DIR)),
            pacer: Box::new(ThreadPacer),
            sound: Box::new(SilentSoundPlayer::new()),
        };

        surface.sink.set_cursor_visible(false)?;
        surface.sink.set_title(WINDOW_TITLE)?;
        surface.draw_border()?;
        surface.draw_labels()?;
        surface.refresh_status_panel()?;
        Ok(surface)
    }

    pub fn with_pacer(mut self, pacer: impl Pacer + 'static) -> Self {
        self.pacer = Box::new(pacer);
        self
    }

    pub fn with_splash_source(mut self, source: impl SplashSource + 'static) -> Self {
        self.splash_source = Box::new(source);
        self
    }

    pub fn with_sound(mut self, sound: impl SoundPlayer + 'static) -> Self {
        self.sound = Box::new(sound);
        self
    }

    /// Start a session for `game`: load its high score and zero the score.
    ///
    /// Nothing is redrawn; the next `render` shows the new values.
    pub fn init_game(&mut self, game: &str) {
        self.status.begin_session(game, &self.store);
    }

    /// Draw one tick.
    ///
    /// While the splash plays, or when `field` is `None`, this advances the
    /// splash by one step (possibly blocking for the frame delay) and leaves
    /// the status panel alone. Otherwise it draws `field` and refreshes the
    /// status panel.
    pub fn render(&mut self, field: Option<&FieldSnapshot>) -> Result<()> {
        match field {
            Some(field) if !self.splash.is_playing() => {
                draw_field(&mut self.sink, &self.layout, field)?;
                self.refresh_status_panel()
            }
            _ => self.show_splash(),
        }
    }

    /// Redraw high score, score, level and speed, persisting a beaten high score.
    pub fn refresh_status_panel(&mut self) -> Result<()> {
        self.status.sync_high_score(&mut self.store)?;

        let values = [
            (HIGH_SCORE_ROW, self.status.high_score()),
            (SCORE_ROW, self.status.score),
            (LEVEL_ROW, self.status.level),
            (SPEED_ROW, self.status.speed),
        ];
        for (row, value) in values {
            self.print_message(row, &value.to_string(), palette::TEXT)?;
        }
        Ok(())
    }

    /// Load frames for `name` and start playing them with `timeout_ms` between frames.
    ///
    /// A resource that cannot be read leaves the current splash untouched.
    pub fn set_splash(&mut self, name: &str, timeout_ms: u64) -> Result<()> {
        let frames = self
            .splash_source
            .read(name)
            .with_context(|| format!("failed to load splash '{name}'"))?;
        self.splash.load(frames, Duration::from_millis(timeout_ms));
        Ok(())
    }

    pub fn set_splash_default(&mut self, name: &str) -> Result<()> {
        self.set_splash(name, DEFAULT_SPLASH_TIMEOUT_MS)
    }

    pub fn start_splash(&mut self) {
        self.splash.start();
    }

    pub fn stop_splash(&mut self) {
        self.splash.stop();
    }

    pub fn set_pause(&mut self, paused: bool) -> Result<()> {
        let text = if paused { PAUSE_TEXT } else { "     " };
        self.print_message(PAUSE_ROW, text, palette::PAUSE)
    }

    pub fn play_sound(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.sound.play(path.as_ref())
    }

    /// Stop the active sound; `Ok(false)` when none was playing.
    pub fn stop_sound(&mut self) -> Result<bool> {
        let stopped = self.sound.stop()?;
        if !stopped {
            log::debug!("stop_sound with no active sound");
        }
        Ok(stopped)
    }

    /// Draw the box around the field. Redrawing yields the same glyphs.
    pub fn draw_border(&mut self) -> Result<()> {
        for (i, j, glyph) in self.layout.border_cells() {
            self.sink.put_char(i, j, glyph.ch(), palette::BORDER)?;
        }
        Ok(())
    }

    fn draw_labels(&mut self) -> Result<()> {
        for (row, text, style) in LABELS {
            self.print_message(row, text, style)?;
        }
        Ok(())
    }

    fn show_splash(&mut self) -> Result<()> {
        let Some(frame) = self.splash.due_frame().copied() else {
            return Ok(());
        };
        draw_field(&mut self.sink, &self.layout, &frame)?;
        self.pacer.pause(self.splash.frame_delay());
        self.splash.advance();
        Ok(())
    }

    /// Blank the status slot at panel `row`, then write `text` into it.
    fn print_message(&mut self, row: u16, text: &str, style: CellStyle) -> Result<()> {
        let x = self.layout.panel_x();
        let y = self.layout.panel_row(row);
        self.sink.clear_field(x, y, STATUS_FIELD_WIDTH, style)?;
        self.sink.put_str(x, y, text, style)
    }

    pub fn position(&self) -> (u16, u16) {
        self.layout.position()
    }

    pub fn game_name(&self) -> &str {
        self.status.game_name()
    }

    pub fn score(&self) -> u32 {
        self.status.score
    }

    pub fn set_score(&mut self, score: u32) {
        self.status.score = score;
    }

    pub fn high_score(&self) -> u32 {
        self.status.high_score()
    }

    pub fn level(&self) -> u32 {
        self.status.level
    }

    pub fn set_level(&mut self, level: u32) {
        self.status.level = level;
    }

    pub fn speed(&self) -> u32 {
        self.status.speed
    }

    pub fn set_speed(&mut self, speed: u32) {
        self.status.speed = speed;
    }

    pub fn is_splash_playing(&self) -> bool {
        self.splash.is_playing()
    }

    pub fn splash(&self) -> &Splash {
        &self.splash
    }

    pub fn sink(&self) -> &D {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut D {
        &mut self.sink
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Draw every cell of `field` into the bordered area.
pub fn draw_field(
    sink: &mut impl DisplaySink,
    layout: &Layout,
    field: &FieldSnapshot,
) -> Result<()> {
    for column in 0..FIELD_WIDTH {
        for row in 0..FIELD_HEIGHT {
            let (x, y) = layout.cell_origin(column, row);
            if field.is_filled(column, row) {
                sink.put_str(x, y, FILLED_CELL, palette::FILLED)?;
            } else {
                sink.put_str(x, y, EMPTY_CELL, palette::EMPTY)?;
            }
        }
    }
    Ok(())
}
