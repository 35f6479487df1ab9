//! RNG module - uniform random piece selection
//!
//! Every spawn is an independent uniform draw over the seven kinds. There is
//! no bag, so droughts and repeats of a kind are possible; that is the
//! intended randomizer, not a fairness bug.
//!
//! The generator is a simple LCG so piece sequences stay fully deterministic
//! per seed.

use gridfall_types::PieceKind;

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
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Current generator state, usable as a seed that continues the sequence
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Uniform random piece source
#[derive(Debug, Clone)]
pub struct PieceDealer {
    rng: SimpleRng,
}

impl PieceDealer {
    /// Create a new dealer with the given seed
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw the next piece kind, independently of all previous draws
    pub fn deal(&mut self) -> PieceKind {
        let index = self.rng.next_range(PieceKind::ALL.len() as u32);
        PieceKind::ALL[index as usize]
    }

    /// Get the current RNG state (for restarting a game with a fresh sequence)
    pub fn state(&self) -> u32 {
        self.rng.state()
    }
}

impl Default for PieceDealer {
    fn default() -> Self {
        Self::new(1)
    }
}
