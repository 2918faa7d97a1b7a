//! Snake module - movement, growth, collisions, and collectible spawning
//!
//! The snake is an ordered list of segments, head first. Moves replace
//! the whole list (new head appended, tail dropped) rather than mutating
//! in place, so snapshots are always consistent. Segment and collectible
//! ids are monotonic and exist only to give renderers stable keys.

use crate::core::rng::SimpleRng;
use crate::core::Grid;
use crate::types::{
    Direction, APPLE_POINTS, DESTROY_POINTS, GRID_HEIGHT, GRID_WIDTH, LINE_POINTS,
    STAR_SPAWN_CHANCE,
};

/// One cell of the snake body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub x: i8,
    pub y: i8,
    pub id: u64,
}

/// A collectible that grows the snake
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Apple {
    pub x: i8,
    pub y: i8,
    pub id: u64,
}

/// A collectible that grants timed block-destroying power
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Star {
    pub x: i8,
    pub y: i8,
    pub id: u64,
    /// Informational only; stars do not expire on their own
    pub spawned_at_ms: u64,
}

/// Snake rule engine: pure transforms plus id counters and an injected RNG
#[derive(Debug, Clone)]
pub struct SnakeRules {
    next_segment_id: u64,
    next_apple_id: u64,
    next_star_id: u64,
    rng: SimpleRng,
}

impl SnakeRules {
    pub fn new(seed: u32) -> Self {
        Self {
            next_segment_id: 0,
            next_apple_id: 0,
            next_star_id: 0,
            rng: SimpleRng::new(seed),
        }
    }

    fn segment(&mut self, x: i8, y: i8) -> Segment {
        let id = self.next_segment_id;
        self.next_segment_id += 1;
        Segment { x, y, id }
    }

    /// A 3-segment snake centered on the grid, laid out head-to-tail
    /// leftward, facing an implicit initial direction of Right.
    pub fn initialize(&mut self) -> Vec<Segment> {
        let cx = (GRID_WIDTH / 2) as i8;
        let cy = (GRID_HEIGHT / 2) as i8;
        vec![
            self.segment(cx, cy),
            self.segment(cx - 1, cy),
            self.segment(cx - 2, cy),
        ]
    }

    /// Constant-length translation: new head in `direction`, tail dropped.
    /// The input snake is not mutated.
    pub fn advance(&mut self, snake: &[Segment], direction: Direction) -> Vec<Segment> {
        let head = snake[0];
        let (dx, dy) = direction.offset();
        let new_head = self.segment(head.x + dx, head.y + dy);

        let mut moved = Vec::with_capacity(snake.len());
        moved.push(new_head);
        moved.extend_from_slice(&snake[..snake.len() - 1]);
        moved
    }

    /// Duplicate the tail with a fresh id. Net effect over the next
    /// `advance` is length + 1, since that tick's tail drop is absorbed.
    pub fn grow(&mut self, snake: &[Segment]) -> Vec<Segment> {
        let tail = snake[snake.len() - 1];
        let new_tail = self.segment(tail.x, tail.y);
        let mut grown = snake.to_vec();
        grown.push(new_tail);
        grown
    }

    /// Spawn an apple on a uniformly random unoccupied cell
    ///
    /// Returns None if the grid is fully saturated.
    pub fn spawn_apple(
        &mut self,
        snake: &[Segment],
        grid: &Grid,
        apples: &[Apple],
    ) -> Option<Apple> {
        let free = free_cells(snake, grid, apples, &[]);
        let (x, y) = free[self.rng.pick(free.len())?];
        let id = self.next_apple_id;
        self.next_apple_id += 1;
        Some(Apple { x, y, id })
    }

    /// Maybe spawn a star: gated on a fixed probability per apple-consumption
    /// event unless `force` is set, then placed like an apple.
    pub fn spawn_star(
        &mut self,
        snake: &[Segment],
        grid: &Grid,
        apples: &[Apple],
        stars: &[Star],
        now_ms: u64,
        force: bool,
    ) -> Option<Star> {
        if !force && !self.rng.chance(STAR_SPAWN_CHANCE) {
            return None;
        }

        let free = free_cells(snake, grid, apples, stars);
        let (x, y) = free[self.rng.pick(free.len())?];
        let id = self.next_star_id;
        self.next_star_id += 1;
        Some(Star {
            x,
            y,
            id,
            spawned_at_ms: now_ms,
        })
    }
}

/// Every in-bounds cell not covered by the snake, a locked block, an
/// apple, or a star. Column-major scan to keep placement deterministic
/// under a fixed RNG seed.
fn free_cells(snake: &[Segment], grid: &Grid, apples: &[Apple], stars: &[Star]) -> Vec<(i8, i8)> {
    let mut free = Vec::new();
    for x in 0..GRID_WIDTH as i8 {
        for y in 0..GRID_HEIGHT as i8 {
            let taken = grid.is_occupied(x, y)
                || snake.iter().any(|s| s.x == x && s.y == y)
                || apples.iter().any(|a| a.x == x && a.y == y)
                || stars.iter().any(|s| s.x == x && s.y == y);
            if !taken {
                free.push((x, y));
            }
        }
    }
    free
}

/// True iff the head lies outside the grid
pub fn hits_wall(head: &Segment) -> bool {
    head.x < 0 || head.x >= GRID_WIDTH as i8 || head.y < 0 || head.y >= GRID_HEIGHT as i8
}

/// True iff the head overlaps any non-head segment
pub fn hits_self(snake: &[Segment]) -> bool {
    let head = snake[0];
    snake[1..].iter().any(|s| s.x == head.x && s.y == head.y)
}

/// Index of the apple at the head position, if any (first match wins)
pub fn apple_at(apples: &[Apple], x: i8, y: i8) -> Option<usize> {
    apples.iter().position(|a| a.x == x && a.y == y)
}

/// Index of the star at the head position, if any (first match wins)
pub fn star_at(stars: &[Star], x: i8, y: i8) -> Option<usize> {
    stars.iter().position(|s| s.x == x && s.y == y)
}

/// A direction change is rejected only if it is the exact 180-degree
/// reversal of the current heading.
pub fn is_valid_turn(current: Direction, next: Direction) -> bool {
    next != current.opposite()
}

/// Canonical scoring formula, also used to recompute the final score at
/// game over from authoritative counts.
pub fn calculate_score(apples_eaten: u32, lines_cleared: u32, pieces_destroyed: u32) -> u32 {
    apples_eaten * APPLE_POINTS + lines_cleared * LINE_POINTS + pieces_destroyed * DESTROY_POINTS
}
