//! RNG module - deterministic random source for spawn decisions
//!
//! All randomness in the simulation (collectible placement, star chance,
//! piece selection) flows through an explicitly seeded LCG so gameplay
//! is reproducible in tests.

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Roll against a probability in [0, 1]
    pub fn chance(&mut self, probability: f32) -> bool {
        let roll = self.next_u32() as f64 / u32::MAX as f64;
        roll < probability as f64
    }

    /// Pick an index into a collection of the given length
    ///
    /// Returns None for an empty collection.
    pub fn pick(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.next_range(len as u32) as usize)
    }

    /// Current internal state (for reseeding a restarted game)
    pub fn state(&self) -> u32 {
        self.state
    }
}
