//! Seeded linear-congruential generator.
//!
//! Feeds attack-selection rolls only. Implements `RngCore` so the engine can
//! use the `rand::Rng` helpers while keeping a tiny, fully reproducible
//! state.

use rand::{Error, RngCore, SeedableRng};

const MULTIPLIER: u32 = 1_664_525;
const INCREMENT: u32 = 1_013_904_223;

/// 32-bit LCG (Numerical Recipes constants).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombatRng {
    state: u32,
}

impl CombatRng {
    pub fn new(seed: u64) -> Self {
        Self {
            state: (seed as u32) ^ ((seed >> 32) as u32),
        }
    }

    fn step(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT);
        self.state
    }
}

impl RngCore for CombatRng {
    fn next_u32(&mut self) -> u32 {
        self.step()
    }

    fn next_u64(&mut self) -> u64 {
        let hi = self.step() as u64;
        let lo = self.step() as u64;
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.step().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for CombatRng {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u64::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::new(state)
    }
}
