//! Core surface logic - pure, deterministic, and testable
//!
//! This crate holds the state behind the brick game display without touching
//! the terminal:
//!
//! - [`field`]: the 10x20 [`FieldSnapshot`] drawn for both gameplay and splash frames
//! - [`splash`]: the splash playback state machine
//! - [`status`]: score, high score, level and speed, with high-score persistence
//! - [`ports`]: collaborator traits ([`ScoreStore`], [`SplashSource`], [`Pacer`])
//!   plus in-memory and real-time implementations
//! - [`splash_reader`]: the text `.splash` resource format
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use brick_surface_core::{FieldSnapshot, Splash};
//!
//! let mut splash = Splash::new();
//! splash.load(vec![FieldSnapshot::empty(); 2], Duration::from_millis(5));
//!
//! let mut drawn = 0;
//! while splash.due_frame().is_some() {
//!     drawn += 1;
//!     splash.advance();
//! }
//! assert_eq!(drawn, 2);
//! assert!(!splash.is_playing());
//! ```

pub mod field;
pub mod ports;
pub mod splash;
pub mod splash_reader;
pub mod status;

pub use brick_surface_types as types;

pub use field::FieldSnapshot;
pub use ports::{MemoryScoreStore, Pacer, RecordingPacer, ScoreStore, SplashSource, ThreadPacer};
pub use splash::{Splash, SplashState};
pub use splash_reader::{parse_frames, TextSplashSource};
pub use status::StatusPanel;
