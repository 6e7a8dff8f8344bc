//! RNG module - uniform next-piece generation
//!
//! Every shape is an independent uniform draw over the seven shapes; there is no
//! bag, so repeats and droughts are possible. The generator always holds the next
//! shape one step ahead for the preview panel.

use crate::types::Shape;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone, PartialEq, Eq)]
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
    ///
    /// Uses the high half of the state; the low bits of a power-of-two LCG cycle
    /// with short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        (self.next_u32() >> 16) % max
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Uniform shape generator with a one-shape preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeGenerator {
    rng: SimpleRng,
    seed: u32,
    next: Shape,
}

impl ShapeGenerator {
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let next = Self::draw(&mut rng);
        Self { rng, seed, next }
    }

    fn draw(rng: &mut SimpleRng) -> Shape {
        Shape::ALL[rng.next_range(Shape::ALL.len() as u32) as usize]
    }

    /// Shape the next spawn will use
    pub fn peek(&self) -> Shape {
        self.next
    }

    /// Hand out the previewed shape and draw a new preview.
    pub fn advance(&mut self) -> Shape {
        let shape = self.next;
        self.next = Self::draw(&mut self.rng);
        shape
    }

    /// Replace the preview with a fresh draw (new game).
    pub fn regenerate(&mut self) {
        self.next = Self::draw(&mut self.rng);
    }

    /// Seed this generator was created with
    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl Default for ShapeGenerator {
    fn default() -> Self {
        Self::new(1)
    }
}
