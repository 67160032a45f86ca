//! RNG module - injectable random source for tile spawning
//!
//! The spawner accepts any [`rand::RngCore`]. Draws are mapped to choices with
//! [`pick_below`] and [`roll_percent`], which only use `next_u32`, so a seeded
//! source reproduces the same boards on every platform and `rand` version.
//!
//! Also provides a simple LCG for deterministic testing.

use rand::RngCore;

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

    /// Fold a 64-bit seed (e.g. from the command line) into a generator.
    pub fn from_u64(seed: u64) -> Self {
        Self::new((seed ^ (seed >> 32)) as u32)
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Current internal state (for restarting with the same sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl RngCore for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        SimpleRng::next_u32(self)
    }

    fn next_u64(&mut self) -> u64 {
        let hi = SimpleRng::next_u32(self) as u64;
        let lo = SimpleRng::next_u32(self) as u64;
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = SimpleRng::next_u32(self).to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// Uniform index in `0..bound`, taken from the high bits of one 32-bit draw.
///
/// The low bits of an LCG are weak, so the draw is scaled rather than reduced
/// modulo `bound`. Returns 0 when `bound` is 0 without drawing.
pub fn pick_below<R: RngCore + ?Sized>(rng: &mut R, bound: usize) -> usize {
    if bound == 0 {
        return 0;
    }
    ((rng.next_u32() as u64 * bound as u64) >> 32) as usize
}

/// `true` with probability `percent / 100`, using one draw.
pub fn roll_percent<R: RngCore + ?Sized>(rng: &mut R, percent: u32) -> bool {
    pick_below(rng, 100) < percent as usize
}
