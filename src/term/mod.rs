//! Terminal presentation layer
//!
//! Split into a pure view ([`view`]) that maps a [`crate::core::GameSnapshot`]
//! into a character frame, and a thin I/O shell ([`screen`]) that owns raw
//! mode and flushes frames with crossterm. Only the shell touches stdout,
//! so the view is unit-testable.

pub mod screen;
pub mod view;

pub use screen::Screen;
pub use view::{Frame, GameView, Glyph, Rgb};
