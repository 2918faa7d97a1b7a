//! Core game logic module - pure, deterministic, and testable
//!
//! Everything needed to simulate a full game lives here, with zero
//! dependencies on UI, timers, or I/O:
//!
//! - **Deterministic**: same seed produces an identical game
//! - **Portable**: runs in any host (terminal, headless, tests)
//!
//! # Module Structure
//!
//! - [`grid`]: 20x24 shared playfield of locked tetromino cells
//! - [`pieces`]: tetromino shape tables and rotation states
//! - [`rng`]: seedable linear congruential generator
//! - [`snake`]: snake movement, growth, and collectible spawning
//! - [`tetris`]: piece transforms, validity, locking, line clears
//! - [`game`]: the simulation clock coordinating both rule sets
//! - [`snapshot`]: immutable state copies for renderers
//!
//! # Example
//!
//! ```
//! use snaketris::core::Game;
//! use snaketris::types::{Command, Direction};
//!
//! let mut game = Game::new(12345, 0);
//! game.apply(Command::Steer(Direction::Up), 0);
//! game.update(200);
//! let snapshot = game.snapshot();
//! assert!(!snapshot.game_over);
//! ```

pub mod game;
pub mod grid;
pub mod pieces;
pub mod rng;
pub mod snake;
pub mod snapshot;
pub mod tetris;

// Re-export commonly used types
pub use game::Game;
pub use grid::Grid;
pub use rng::SimpleRng;
pub use snake::{Apple, Segment, SnakeRules, Star};
pub use snapshot::GameSnapshot;
pub use tetris::{Piece, TetrisRules};
