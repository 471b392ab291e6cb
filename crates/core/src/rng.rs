//! RNG module - seedable randomness for spawning.
//!
//! A small LCG keeps the games fully deterministic under test: the same seed
//! reproduces the same apple placements and zombie spawns. Range reduction
//! uses the multiply-shift method so results come from the well-mixed high
//! bits rather than the LCG's weak low bits.

/// Simple LCG (Linear Congruential Generator) RNG.
///
/// Uses constants from Numerical Recipes.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed.
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would start the sequence degenerately.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate the next random u32.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate a random value in `[0, max)`. `max` must be nonzero.
    pub fn next_range(&mut self, max: u32) -> u32 {
        (((self.next_u32() as u64) * (max as u64)) >> 32) as u32
    }

    /// One trial with `percent` in 100 chance of success.
    pub fn chance(&mut self, percent: u32) -> bool {
        self.next_range(100) < percent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SimpleRng::new(12345);
        let mut b = SimpleRng::new(12345);
        for _ in 0..100 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = SimpleRng::new(12345);
        let mut b = SimpleRng::new(54321);
        assert_ne!(a.next_u32(), b.next_u32());
    }

    #[test]
    fn next_range_stays_in_range() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(30) < 30);
            assert!(rng.next_range(20) < 20);
        }
    }

    #[test]
    fn next_range_reaches_all_cells_of_a_small_grid() {
        // Rejection sampling on the snake frame must be able to land anywhere.
        let mut rng = SimpleRng::new(1);
        let mut seen = [[false; 30]; 20];
        for _ in 0..200_000 {
            let r = rng.next_range(20) as usize;
            let c = rng.next_range(30) as usize;
            seen[r][c] = true;
        }
        assert!(seen.iter().all(|row| row.iter().all(|&hit| hit)));
    }

    #[test]
    fn chance_zero_never_fires() {
        let mut rng = SimpleRng::new(99);
        for _ in 0..1000 {
            assert!(!rng.chance(0));
        }
    }

    #[test]
    fn chance_hundred_always_fires() {
        let mut rng = SimpleRng::new(99);
        for _ in 0..1000 {
            assert!(rng.chance(100));
        }
    }
}
