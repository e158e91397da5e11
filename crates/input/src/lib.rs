//! Terminal input for the demo host.
//!
//! Maps `crossterm` key events onto the console's front-panel buttons. The
//! surface itself never reads input; hosts translate keys into calls on it.

pub mod map;

pub use map::{handle_key_event, should_quit, HostAction};
