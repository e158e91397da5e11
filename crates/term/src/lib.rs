//! Terminal surface of the brick game console.
//!
//! Drawing goes through the [`DisplaySink`] capability: [`TerminalSink`]
//! writes to a real terminal with crossterm, [`MemorySink`] records into a
//! [`FrameBuffer`] for tests and benchmarks.
//!
//! - [`layout`]: border classification and panel coordinates
//! - [`surface`]: [`RenderSurface`], field drawing, status panel and splash playback
//!
//! # Example
//!
//! ```
//! use brick_surface_core::{FieldSnapshot, MemoryScoreStore, RecordingPacer};
//! use brick_surface_term::{MemorySink, RenderSurface};
//!
//! let sink = MemorySink::new(60, 24);
//! let mut surface = RenderSurface::new(0, 0, sink, MemoryScoreStore::new())?
//!     .with_pacer(RecordingPacer::new());
//! surface.init_game("Tetris");
//! surface.set_score(50);
//! surface.render(Some(&FieldSnapshot::empty()))?;
//! assert_eq!(surface.high_score(), 50);
//! # anyhow::Ok(())
//! ```

pub mod fb;
pub mod layout;
pub mod renderer;
pub mod sink;
pub mod surface;

pub use brick_surface_core as core;
pub use brick_surface_sound as sound;
pub use brick_surface_types as types;

pub use fb::{Cell, FrameBuffer, MemorySink};
pub use layout::{BorderGlyph, Layout};
pub use renderer::{encode_put_into, TerminalSink};
pub use sink::DisplaySink;
pub use surface::{draw_field, RenderSurface};
