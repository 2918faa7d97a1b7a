//! Snaketris - snake and tetris sharing one 20x24 playfield
//!
//! Two classic rule sets run concurrently on the same grid: a snake that
//! hunts apples and a tetromino that falls under gravity. Locked blocks
//! are walls for the snake; the snake's body is an obstacle for falling
//! pieces. A star pickup briefly lets the snake eat through locked
//! blocks instead of dying to them.
//!
//! The crate splits into a pure simulation ([`core`]) driven by
//! wall-clock milliseconds, and thin terminal layers ([`input`],
//! [`term`]) plus persistent [`highscores`] around it.

pub mod core;
pub mod highscores;
pub mod input;
pub mod term;
pub mod types;
