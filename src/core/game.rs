//! Game module - the simulation clock that arbitrates both rule sets
//!
//! Owns the shared grid, the snake, the collectibles, and both pieces.
//! `update` is meant to be called at display refresh rate with the
//! current wall-clock time in milliseconds; the stored per-subgame
//! timestamps, not the call rate, govern gameplay speed. Inputs arrive
//! as commands and are serialized with ticks by the single owner.
//!
//! States: Running, Paused, GameOver. Pause toggles freely; GameOver is
//! terminal until an explicit reset. No tick processing or gameplay
//! input applies outside Running.

use crate::core::snake::{
    apple_at, calculate_score, hits_self, hits_wall, is_valid_turn, star_at, Apple, Segment,
    SnakeRules, Star,
};
use crate::core::tetris::{
    clear_lines, is_game_over, is_valid_position, place, rotated, shifted, Piece, TetrisRules,
};
use crate::core::{Grid, GameSnapshot};
use crate::types::{
    Command, Direction, GameEvent, PieceAction, APPLE_POINTS, DESTROY_POINTS, INITIAL_SNAKE_LEN,
    LINE_POINTS, SNAKE_MOVE_MS, STAR_POINTS, STAR_POWER_MS, TETRIS_DROP_MS,
};

/// Complete simulation state behind one owner
#[derive(Debug, Clone)]
pub struct Game {
    snake_rules: SnakeRules,
    tetris_rules: TetrisRules,

    grid: Grid,
    snake: Vec<Segment>,
    direction: Direction,
    apples: Vec<Apple>,
    stars: Vec<Star>,
    current_piece: Piece,
    next_piece: Piece,

    score: u32,
    lines_cleared: u32,
    /// Difficulty stub; never advanced
    level: u32,
    pieces_destroyed: u32,

    game_over: bool,
    paused: bool,
    star_power_active: bool,
    star_power_end_ms: u64,
    last_snake_move_ms: u64,
    last_tetris_drop_ms: u64,

    /// Pending notifications, drained by the host
    events: Vec<GameEvent>,
}

impl Game {
    /// Fresh simulation in the Running state
    pub fn new(seed: u32, now_ms: u64) -> Self {
        let mut snake_rules = SnakeRules::new(seed);
        let mut tetris_rules = TetrisRules::new(seed.wrapping_mul(2654435761).max(1));

        let grid = Grid::new();
        let snake = snake_rules.initialize();
        let current_piece = tetris_rules.create_random_piece();
        let next_piece = tetris_rules.create_random_piece();
        let apples = snake_rules
            .spawn_apple(&snake, &grid, &[])
            .into_iter()
            .collect();

        Self {
            snake_rules,
            tetris_rules,
            grid,
            snake,
            direction: Direction::Right,
            apples,
            stars: Vec::new(),
            current_piece,
            next_piece,
            score: 0,
            lines_cleared: 0,
            level: 1,
            pieces_destroyed: 0,
            game_over: false,
            paused: false,
            star_power_active: false,
            star_power_end_ms: 0,
            last_snake_move_ms: now_ms,
            last_tetris_drop_ms: now_ms,
            events: Vec::new(),
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn apples_eaten(&self) -> u32 {
        (self.snake.len() - INITIAL_SNAKE_LEN) as u32
    }

    pub fn pieces_destroyed(&self) -> u32 {
        self.pieces_destroyed
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn star_power_active(&self) -> bool {
        self.star_power_active
    }

    /// Apply an input command. Commands are processed in arrival order;
    /// invalid ones are silently rejected with no state change.
    pub fn apply(&mut self, command: Command, now_ms: u64) {
        match command {
            Command::Steer(direction) => self.steer(direction),
            Command::Piece(action) => self.piece_input(action, now_ms),
            Command::TogglePause => self.toggle_pause(),
            Command::Reset => self.reset(now_ms),
        }
    }

    /// Direction change; only the exact 180-degree reversal is rejected.
    /// The latest accepted input before the next snake tick wins.
    pub fn steer(&mut self, direction: Direction) {
        if self.game_over || self.paused {
            return;
        }
        if is_valid_turn(self.direction, direction) {
            self.direction = direction;
        }
    }

    /// Manual tetromino move, applied immediately (not gated by the drop
    /// timer) and validated against grid and snake. A soft drop resets
    /// the drop timer so the next automatic drop is a full interval away.
    pub fn piece_input(&mut self, action: PieceAction, now_ms: u64) {
        if self.game_over || self.paused {
            return;
        }

        let candidate = match action {
            PieceAction::MoveLeft => shifted(&self.current_piece, -1, 0),
            PieceAction::MoveRight => shifted(&self.current_piece, 1, 0),
            PieceAction::SoftDrop => shifted(&self.current_piece, 0, 1),
            PieceAction::RotateCw => rotated(&self.current_piece, true),
            PieceAction::RotateCcw => rotated(&self.current_piece, false),
        };

        if is_valid_position(&candidate, &self.grid, &self.snake, true) {
            self.current_piece = candidate;
            if action == PieceAction::SoftDrop {
                self.last_tetris_drop_ms = now_ms;
            }
        }
    }

    /// Pause toggle; meaningless in GameOver but harmless
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Back to a freshly initialized Running state. Id counters and the
    /// RNG stream continue; they are not part of game state.
    pub fn reset(&mut self, now_ms: u64) {
        self.grid = Grid::new();
        self.snake = self.snake_rules.initialize();
        self.direction = Direction::Right;
        self.apples = self
            .snake_rules
            .spawn_apple(&self.snake, &self.grid, &[])
            .into_iter()
            .collect();
        self.stars.clear();
        self.current_piece = self.tetris_rules.create_random_piece();
        self.next_piece = self.tetris_rules.create_random_piece();
        self.score = 0;
        self.lines_cleared = 0;
        self.pieces_destroyed = 0;
        self.game_over = false;
        self.paused = false;
        self.star_power_active = false;
        self.star_power_end_ms = 0;
        self.last_snake_move_ms = now_ms;
        self.last_tetris_drop_ms = now_ms;
        self.events.clear();
    }

    /// One scheduler invocation. At most one snake step and one gravity
    /// step happen per call, regardless of how much time elapsed.
    pub fn update(&mut self, now_ms: u64) {
        if self.game_over || self.paused {
            return;
        }

        if self.star_power_active && now_ms >= self.star_power_end_ms {
            self.star_power_active = false;
        }

        if now_ms.saturating_sub(self.last_snake_move_ms) >= SNAKE_MOVE_MS {
            self.advance_snake(now_ms);
            self.last_snake_move_ms = now_ms;
        }

        if self.game_over {
            return;
        }

        if now_ms.saturating_sub(self.last_tetris_drop_ms) >= TETRIS_DROP_MS {
            self.advance_tetris();
            self.last_tetris_drop_ms = now_ms;
        }
    }

    /// Snake tick: move, then resolve collisions in order
    /// wall/self -> locked block -> apple -> star.
    fn advance_snake(&mut self, now_ms: u64) {
        let moved = self.snake_rules.advance(&self.snake, self.direction);
        let head = moved[0];

        if hits_wall(&head) || hits_self(&moved) {
            self.finish_game();
            return;
        }

        if self.star_power_active {
            self.destroy_block_at(head.x, head.y);
        } else if self.grid.is_occupied(head.x, head.y) {
            self.finish_game();
            return;
        }

        if let Some(idx) = apple_at(&self.apples, head.x, head.y) {
            self.snake = self.snake_rules.grow(&moved);
            self.apples.swap_remove(idx);
            self.score += APPLE_POINTS;

            if let Some(apple) = self
                .snake_rules
                .spawn_apple(&self.snake, &self.grid, &self.apples)
            {
                self.apples.push(apple);
            }
            if let Some(star) = self.snake_rules.spawn_star(
                &self.snake,
                &self.grid,
                &self.apples,
                &self.stars,
                now_ms,
                false,
            ) {
                self.stars.push(star);
            }

            self.events.push(GameEvent::AppleEaten);
        } else {
            self.snake = moved;
        }

        if let Some(idx) = star_at(&self.stars, head.x, head.y) {
            self.stars.swap_remove(idx);
            self.star_power_active = true;
            self.star_power_end_ms = now_ms + STAR_POWER_MS;
            self.score += STAR_POINTS;
            self.events.push(GameEvent::StarCollected);
        }
    }

    /// Gravity tick: drop one row, or lock + clear + promote the preview
    fn advance_tetris(&mut self) {
        let dropped = shifted(&self.current_piece, 0, 1);

        if is_valid_position(&dropped, &self.grid, &self.snake, true) {
            self.current_piece = dropped;
            return;
        }

        self.grid = place(&self.current_piece, &self.grid);
        self.events.push(GameEvent::PiecePlaced);

        let (compacted, cleared) = clear_lines(&self.grid);
        self.grid = compacted;
        if cleared > 0 {
            self.lines_cleared += cleared;
            self.score += cleared * LINE_POINTS;
            self.events.push(GameEvent::LinesCleared(cleared));
        }

        if is_game_over(&self.grid) {
            self.finish_game();
            return;
        }

        self.current_piece = self.next_piece;
        self.next_piece = self.tetris_rules.create_random_piece();
    }

    /// Star-power destruction: the occupied cell under the head is
    /// cleared from the grid and awards points.
    fn destroy_block_at(&mut self, x: i8, y: i8) {
        if self.grid.is_occupied(x, y) {
            self.grid.set(x, y, None);
            self.score += DESTROY_POINTS;
            self.pieces_destroyed += 1;
            self.events.push(GameEvent::PieceDestroyed);
        }
    }

    /// Terminal transition. The final score is recomputed from
    /// authoritative counts (snake length and accumulated lines); the
    /// destroyed-block tally is deliberately excluded from the
    /// recomputation.
    fn finish_game(&mut self) {
        self.game_over = true;
        let final_score = calculate_score(self.apples_eaten(), self.lines_cleared, 0);
        self.score = final_score;
        self.events.push(GameEvent::GameOver { final_score });
    }

    /// Drain pending notifications, in emission order
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Fresh deep-enough copy of the externally visible state
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            grid: self.grid,
            snake: self.snake.clone(),
            direction: self.direction,
            apples: self.apples.clone(),
            stars: self.stars.clone(),
            current_piece: self.current_piece,
            next_piece: self.next_piece,
            score: self.score,
            lines_cleared: self.lines_cleared,
            level: self.level,
            pieces_destroyed: self.pieces_destroyed,
            game_over: self.game_over,
            paused: self.paused,
            star_power_active: self.star_power_active,
            star_power_end_ms: self.star_power_end_ms,
            last_snake_move_ms: self.last_snake_move_ms,
            last_tetris_drop_ms: self.last_tetris_drop_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PieceKind, GRID_HEIGHT, GRID_WIDTH};

    fn head(game: &Game) -> Segment {
        game.snake[0]
    }

    /// Place an apple directly in the snake's path (one cell right of the
    /// head), clearing any randomly spawned ones.
    fn inject_apple_ahead(game: &mut Game) {
        let h = head(game);
        game.apples = vec![Apple {
            x: h.x + 1,
            y: h.y,
            id: 9999,
        }];
    }

    #[test]
    fn test_new_game_initial_state() {
        let game = Game::new(12345, 0);
        assert!(!game.game_over);
        assert!(!game.paused);
        assert!(!game.star_power_active);
        assert_eq!(game.score, 0);
        assert_eq!(game.lines_cleared, 0);
        assert_eq!(game.level, 1);
        assert_eq!(game.snake.len(), 3);
        assert_eq!(game.apples.len(), 1);
        assert!(game.stars.is_empty());
        assert_eq!(game.grid.occupied_count(), 0);
        assert_eq!(game.direction, Direction::Right);
        assert_ne!(game.current_piece.id, game.next_piece.id);
    }

    #[test]
    fn test_same_seed_same_run() {
        let mut a = Game::new(777, 0);
        let mut b = Game::new(777, 0);
        for step in 1..=20u64 {
            let now = step * 100;
            a.apply(Command::Piece(PieceAction::MoveLeft), now);
            b.apply(Command::Piece(PieceAction::MoveLeft), now);
            a.update(now);
            b.update(now);
        }
        let (sa, sb) = (a.snapshot(), b.snapshot());
        assert_eq!(sa.snake, sb.snake);
        assert_eq!(sa.grid, sb.grid);
        assert_eq!(sa.score, sb.score);
        assert_eq!(sa.current_piece, sb.current_piece);
    }

    #[test]
    fn test_update_before_interval_moves_nothing() {
        let mut game = Game::new(1, 0);
        let before = head(&game);
        game.update(SNAKE_MOVE_MS - 1);
        assert_eq!(head(&game), before);
    }

    #[test]
    fn test_update_moves_snake_after_interval() {
        let mut game = Game::new(1, 0);
        game.apples.clear();
        let before = head(&game);
        game.update(SNAKE_MOVE_MS);
        let after = head(&game);
        assert_eq!((after.x, after.y), (before.x + 1, before.y));
        assert_eq!(game.snake.len(), 3);
    }

    #[test]
    fn test_one_step_per_update_even_after_long_gap() {
        let mut game = Game::new(1, 0);
        game.apples.clear();
        let before = head(&game);
        game.update(10 * SNAKE_MOVE_MS);
        assert_eq!(head(&game).x, before.x + 1);
    }

    #[test]
    fn test_apple_eaten_scores_and_respawns() {
        let mut game = Game::new(42, 0);
        inject_apple_ahead(&mut game);

        game.update(SNAKE_MOVE_MS);

        assert_eq!(game.score, APPLE_POINTS);
        assert_eq!(game.snake.len(), 4);
        assert_eq!(game.apples.len(), 1, "replacement apple must exist");
        assert!(game.take_events().contains(&GameEvent::AppleEaten));
    }

    #[test]
    fn test_hundred_apples_score_exactly() {
        for i in 0..100u32 {
            let mut game = Game::new(i + 1, 0);
            inject_apple_ahead(&mut game);
            game.update(SNAKE_MOVE_MS);
            assert_eq!(game.score, APPLE_POINTS, "seed {}", i + 1);
            assert!(!game.apples.is_empty(), "seed {}", i + 1);
        }
    }

    #[test]
    fn test_hundred_apples_in_sequence() {
        let mut game = Game::new(8, 0);
        for i in 1..=100u64 {
            // Teleport a fresh short snake so the path stays clear of
            // walls and its own body.
            game.snake = game.snake_rules.initialize();
            game.stars.clear();
            inject_apple_ahead(&mut game);

            game.update(i * SNAKE_MOVE_MS);

            assert_eq!(game.score, i as u32 * APPLE_POINTS, "apple {}", i);
            assert_eq!(game.apples.len(), 1, "apple {}", i);
            assert!(!game.game_over, "apple {}", i);
        }
    }

    #[test]
    fn test_wall_collision_ends_game() {
        let mut game = Game::new(1, 0);
        game.apples.clear();
        // Head starts at x=10; 10 more right-steps reach the wall.
        for step in 1..=20u64 {
            game.update(step * SNAKE_MOVE_MS);
            if game.game_over {
                break;
            }
        }
        assert!(game.game_over);
        let events = game.take_events();
        assert!(events
            .iter()
            .any(|e| matches!(e, GameEvent::GameOver { .. })));
    }

    #[test]
    fn test_block_collision_ends_game_without_star_power() {
        let mut game = Game::new(1, 0);
        game.apples.clear();
        let h = head(&game);
        game.grid.set(h.x + 1, h.y, Some(PieceKind::I));

        game.update(SNAKE_MOVE_MS);
        assert!(game.game_over);
        // Block stays on the grid.
        assert!(game.grid.is_occupied(h.x + 1, h.y));
    }

    #[test]
    fn test_star_power_destroys_block_for_points() {
        let mut game = Game::new(1, 0);
        game.apples.clear();
        game.star_power_active = true;
        game.star_power_end_ms = 1_000_000;
        let h = head(&game);
        game.grid.set(h.x + 1, h.y, Some(PieceKind::I));

        game.update(SNAKE_MOVE_MS);

        assert!(!game.game_over);
        assert!(!game.grid.is_occupied(h.x + 1, h.y));
        assert_eq!(game.score, DESTROY_POINTS);
        assert_eq!(game.pieces_destroyed, 1);
        assert!(game.take_events().contains(&GameEvent::PieceDestroyed));
    }

    #[test]
    fn test_star_collected_activates_power() {
        let mut game = Game::new(1, 0);
        game.apples.clear();
        let h = head(&game);
        game.stars = vec![Star {
            x: h.x + 1,
            y: h.y,
            id: 0,
            spawned_at_ms: 0,
        }];

        game.update(SNAKE_MOVE_MS);

        assert!(game.star_power_active);
        assert_eq!(game.star_power_end_ms, SNAKE_MOVE_MS + STAR_POWER_MS);
        assert_eq!(game.score, STAR_POINTS);
        assert!(game.stars.is_empty());
        assert!(game.take_events().contains(&GameEvent::StarCollected));
    }

    #[test]
    fn test_star_power_expires_one_ms_late() {
        let mut game = Game::new(1, 0);
        game.apples.clear();
        game.star_power_active = true;
        game.star_power_end_ms = 8000;

        game.update(7_999);
        assert!(game.star_power_active);
        game.update(8_001);
        assert!(!game.star_power_active);
    }

    #[test]
    fn test_gravity_drops_current_piece() {
        let mut game = Game::new(1, 0);
        game.apples.clear();
        let y0 = game.current_piece.y;
        game.update(TETRIS_DROP_MS);
        assert_eq!(game.current_piece.y, y0 + 1);
    }

    #[test]
    fn test_lock_promotes_preview_piece() {
        let mut game = Game::new(1, 0);
        game.apples.clear();
        // Park the current piece on the floor so the next gravity tick locks it.
        game.current_piece.y = GRID_HEIGHT as i8 - 4;
        while is_valid_position(
            &shifted(&game.current_piece, 0, 1),
            &game.grid,
            &game.snake,
            true,
        ) {
            game.current_piece = shifted(&game.current_piece, 0, 1);
        }
        let preview = game.next_piece;

        game.update(TETRIS_DROP_MS);

        assert_eq!(game.current_piece, preview);
        assert!(game.grid.occupied_count() >= 4);
        assert!(game.take_events().contains(&GameEvent::PiecePlaced));
    }

    #[test]
    fn test_lock_clears_full_rows_and_scores() {
        let mut game = Game::new(1, 0);
        game.apples.clear();
        // Bottom row is complete except where the O piece will land.
        let bottom = GRID_HEIGHT as i8 - 1;
        for x in 0..GRID_WIDTH as i8 {
            if x != 0 && x != 1 {
                game.grid.set(x, bottom, Some(PieceKind::I));
            }
        }
        game.current_piece = Piece {
            id: 900,
            kind: PieceKind::O,
            rotation: 0,
            x: 0,
            y: bottom - 1,
        };

        game.update(TETRIS_DROP_MS);

        assert_eq!(game.lines_cleared, 1);
        assert_eq!(game.score, LINE_POINTS);
        // The O piece's top half survives the clear, shifted to the bottom.
        assert_eq!(game.grid.get(0, bottom), Some(Some(PieceKind::O)));
        assert!(game.take_events().contains(&GameEvent::LinesCleared(1)));
    }

    #[test]
    fn test_top_row_lock_ends_game() {
        let mut game = Game::new(1, 0);
        game.apples.clear();
        // Blocks directly under the spawn cells force a lock in row 0.
        game.current_piece = Piece {
            id: 902,
            kind: PieceKind::O,
            rotation: 0,
            x: 9,
            y: 0,
        };
        for (x, y) in game.current_piece.cells() {
            game.grid.set(x, y + 1, Some(PieceKind::J));
        }

        game.update(TETRIS_DROP_MS);
        assert!(game.game_over);
    }

    #[test]
    fn test_manual_moves_validated() {
        let mut game = Game::new(1, 0);
        let x0 = game.current_piece.x;

        game.apply(Command::Piece(PieceAction::MoveLeft), 0);
        assert_eq!(game.current_piece.x, x0 - 1);
        game.apply(Command::Piece(PieceAction::MoveRight), 0);
        assert_eq!(game.current_piece.x, x0);

        // Walk into the wall; position clamps at the edge.
        for _ in 0..GRID_WIDTH {
            game.apply(Command::Piece(PieceAction::MoveLeft), 0);
        }
        let min_x = game.current_piece.x;
        game.apply(Command::Piece(PieceAction::MoveLeft), 0);
        assert_eq!(game.current_piece.x, min_x);
    }

    #[test]
    fn test_soft_drop_resets_gravity_timer() {
        let mut game = Game::new(1, 0);
        game.apples.clear();
        let y0 = game.current_piece.y;

        game.apply(Command::Piece(PieceAction::SoftDrop), 700);
        assert_eq!(game.current_piece.y, y0 + 1);

        // 800ms after start but only 100ms after the soft drop: no gravity.
        game.update(TETRIS_DROP_MS);
        assert_eq!(game.current_piece.y, y0 + 1);

        // A full interval after the soft drop: gravity fires.
        game.update(700 + TETRIS_DROP_MS);
        assert_eq!(game.current_piece.y, y0 + 2);
    }

    #[test]
    fn test_rotation_rejected_when_blocked() {
        let mut game = Game::new(1, 0);
        game.current_piece = Piece {
            id: 901,
            kind: PieceKind::I,
            rotation: 0,
            x: 5,
            y: 5,
        };
        // Occupy the cell the vertical bar would need.
        game.grid.set(7, 8, Some(PieceKind::Z));

        game.apply(Command::Piece(PieceAction::RotateCw), 0);
        assert_eq!(game.current_piece.rotation, 0);

        game.grid.set(7, 8, None);
        game.apply(Command::Piece(PieceAction::RotateCw), 0);
        assert_eq!(game.current_piece.rotation, 1);
    }

    #[test]
    fn test_steer_rejects_reversal_only() {
        let mut game = Game::new(1, 0);
        game.apply(Command::Steer(Direction::Left), 0);
        assert_eq!(game.direction, Direction::Right);
        game.apply(Command::Steer(Direction::Up), 0);
        assert_eq!(game.direction, Direction::Up);
        game.apply(Command::Steer(Direction::Down), 0);
        assert_eq!(game.direction, Direction::Up);
        // Latest accepted input wins.
        game.apply(Command::Steer(Direction::Left), 0);
        game.apply(Command::Steer(Direction::Right), 0);
        assert_eq!(game.direction, Direction::Right);
    }

    #[test]
    fn test_pause_freezes_everything() {
        let mut game = Game::new(1, 0);
        game.apples.clear();
        let h = head(&game);
        let py = game.current_piece.y;

        game.apply(Command::TogglePause, 0);
        assert!(game.paused);
        game.update(10_000);
        game.apply(Command::Steer(Direction::Up), 10_000);
        game.apply(Command::Piece(PieceAction::MoveLeft), 10_000);

        assert_eq!(head(&game), h);
        assert_eq!(game.current_piece.y, py);
        assert_eq!(game.direction, Direction::Right);

        game.apply(Command::TogglePause, 10_000);
        assert!(!game.paused);
    }

    #[test]
    fn test_game_over_recomputes_score_from_counts() {
        let mut game = Game::new(5, 0);
        game.apples.clear();
        // Simulate a run: two apples eaten, one line cleared, one block
        // destroyed with incremental scoring along the way.
        game.snake = {
            let grown = game.snake_rules.grow(&game.snake.clone());
            game.snake_rules.grow(&grown)
        };
        game.lines_cleared = 1;
        game.pieces_destroyed = 1;
        game.score = 2 * APPLE_POINTS + LINE_POINTS + DESTROY_POINTS + STAR_POINTS;

        game.finish_game();

        // Recomputation ignores destroyed pieces and star pickups.
        assert_eq!(game.score, 2 * APPLE_POINTS + LINE_POINTS);
        let events = game.take_events();
        assert!(events.contains(&GameEvent::GameOver {
            final_score: 2 * APPLE_POINTS + LINE_POINTS
        }));
    }

    #[test]
    fn test_terminal_until_reset() {
        let mut game = Game::new(1, 0);
        game.game_over = true;

        game.update(100_000);
        game.apply(Command::Steer(Direction::Up), 100_000);
        game.apply(Command::Piece(PieceAction::MoveLeft), 100_000);
        assert_eq!(game.direction, Direction::Right);

        game.apply(Command::Reset, 100_000);
        assert!(!game.game_over);
        assert_eq!(game.snake.len(), 3);
        assert_eq!(game.grid.occupied_count(), 0);
        assert_eq!(game.score, 0);
        assert_eq!(game.last_snake_move_ms, 100_000);
    }

    #[test]
    fn test_snapshot_is_detached_copy() {
        let mut game = Game::new(1, 0);
        let snap = game.snapshot();
        game.apples.clear();
        game.grid.set(0, 0, Some(PieceKind::T));
        game.update(SNAKE_MOVE_MS);

        assert_eq!(snap.snake.len(), 3);
        assert_eq!(snap.grid.occupied_count(), 0);
        assert_eq!(snap.apples.len(), 1);
    }

    #[test]
    fn test_apple_and_star_both_resolve_same_tick() {
        let mut game = Game::new(1, 0);
        let h = head(&game);
        game.apples = vec![Apple {
            x: h.x + 1,
            y: h.y,
            id: 50,
        }];
        game.stars = vec![Star {
            x: h.x + 1,
            y: h.y,
            id: 51,
            spawned_at_ms: 0,
        }];

        game.update(SNAKE_MOVE_MS);

        assert!(game.star_power_active);
        assert_eq!(game.score, APPLE_POINTS + STAR_POINTS);
        let events = game.take_events();
        assert!(events.contains(&GameEvent::AppleEaten));
        assert!(events.contains(&GameEvent::StarCollected));
    }
}
