//! A simple pseudorandom number generator.
//!
//! Specifically, a translation of the minimal C PCG32 implementation from <https://www.pcg-random.org/>, implementing [RngCore] so that the methods of [rand::Rng] are available.
//!
//! PCG(32) was chosen as the source of (pseudo)random numbers as it is simple, fast, and reproducible from a seed.
//! A context is parameterised to any source of rng, though [Context](crate::context::Context) fixes the source to [MinimalPCG32].
//!
//! Seeding follows `pcg32_srandom_r`, with the stream fixed to 54.
//! So, a seed of 42 gives the sequence from the demonstration program of the C implementation.

use rand::SeedableRng;
use rand_core::{impls, Error, RngCore};

/// State and increment
pub struct MinimalPCG32 {
    state: u64,
    inc: u64,
}

impl MinimalPCG32 {
    const MULTIPLIER: u64 = 6364136223846793005;

    /// The stream of the generator.
    const STREAM: u64 = 54;

    fn step(&mut self) {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(self.inc);
    }
}

impl RngCore for MinimalPCG32 {
    fn next_u32(&mut self) -> u32 {
        let old_state = self.state;
        self.step();

        let xorshifted = (((old_state >> 18) ^ old_state) >> 27) as u32;
        let rot = (old_state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for MinimalPCG32 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        let mut rng = MinimalPCG32 {
            state: 0,
            inc: (Self::STREAM << 1) | 1,
        };
        rng.step();
        rng.state = rng.state.wrapping_add(u64::from_le_bytes(seed));
        rng.step();
        rng
    }
}

impl Default for MinimalPCG32 {
    fn default() -> Self {
        Self::from_seed(0_u64.to_le_bytes())
    }
}

#[cfg(test)]
mod pcg_tests {
    use super::*;

    #[test]
    fn reference_sequence() {
        let mut rng = MinimalPCG32::from_seed(42_u64.to_le_bytes());
        assert_eq!(rng.next_u32(), 0xa15c02b7);
        assert_eq!(rng.next_u32(), 0x7b47f409);
        assert_eq!(rng.next_u32(), 0xba1d3330);
    }

    #[test]
    fn reproducible() {
        let mut a = MinimalPCG32::from_seed(73_u64.to_le_bytes());
        let mut b = MinimalPCG32::from_seed(73_u64.to_le_bytes());
        let mut c = MinimalPCG32::from_seed(2_u64.to_le_bytes());

        let from_a = (0..16).map(|_| a.next_u32()).collect::<Vec<_>>();
        let from_b = (0..16).map(|_| b.next_u32()).collect::<Vec<_>>();
        let from_c = (0..16).map(|_| c.next_u32()).collect::<Vec<_>>();

        assert_eq!(from_a, from_b);
        assert_ne!(from_a, from_c);
    }
}
