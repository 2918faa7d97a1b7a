//! Key mapping from terminal events to simulation commands
//!
//! Arrow keys steer the snake; letter keys drive the falling piece. The
//! two control schemes never overlap, so one hand plays each sub-game.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::{Command, Direction, PieceAction};

/// Map keyboard input to a simulation command.
pub fn handle_key_event(key: KeyEvent) -> Option<Command> {
    match key.code {
        // Snake steering
        KeyCode::Up => Some(Command::Steer(Direction::Up)),
        KeyCode::Down => Some(Command::Steer(Direction::Down)),
        KeyCode::Left => Some(Command::Steer(Direction::Left)),
        KeyCode::Right => Some(Command::Steer(Direction::Right)),

        // Falling piece
        KeyCode::Char('a') | KeyCode::Char('A') => Some(Command::Piece(PieceAction::MoveLeft)),
        KeyCode::Char('d') | KeyCode::Char('D') => Some(Command::Piece(PieceAction::MoveRight)),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(Command::Piece(PieceAction::SoftDrop)),
        KeyCode::Char('h') | KeyCode::Char('H') => Some(Command::Piece(PieceAction::RotateCw)),
        KeyCode::Char('g') | KeyCode::Char('G') => Some(Command::Piece(PieceAction::RotateCcw)),

        // Session control
        KeyCode::Char(' ') => Some(Command::TogglePause),
        KeyCode::Enter => Some(Command::Reset),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
