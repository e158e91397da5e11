//! Brick game surface (workspace facade crate).
//!
//! Re-exports the member crates as `brick_surface::{types, core, term, input, store, sound}`
//! and adds the host configuration used by the demo binary.

pub mod config;

pub use brick_surface_core as core;
pub use brick_surface_input as input;
pub use brick_surface_sound as sound;
pub use brick_surface_store as store;
pub use brick_surface_term as term;
pub use brick_surface_types as types;

pub use config::AppConfig;
