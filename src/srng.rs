use wrapping_arithmetic::wrappit;
#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};
use super::combine::combined_bytes;
use super::lcg::{halfword_steps, seed_step};
use super::tables::halfword_escape;
use super::*;

// Srng features
// -64-bit state, 16-bit output, every state is a valid seed including zero
// -bytes come from xorshift32 combined with a cycle-corrected multiply-with-carry generator
// -halfwords are stirred with a 16-bit LCG, a rotation and an odd multiplier
// -reseeding folds two 64-bit LCG outputs to start a new stream
// -ranged output is unbiased via rejection sampling
//
// Srng is not cryptographically secure.

/// Srng non-cryptographic RNG. 16-bit output, 64-bit state.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Default, Eq, PartialEq)]
pub struct Srng {
    /// Packed generator state, see StateFields.
    state: u64,
}

// As recommended, this Debug implementation does not expose internal state.
impl core::fmt::Debug for Srng {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "Srng {{}}")
    }
}

impl Srng {

    /// Creates a new Srng RNG with state 0.
    pub fn new() -> Self {
        Srng { state: 0 }
    }

    /// Creates a new Srng RNG from a raw state. All states are valid.
    pub fn from_state(state: u64) -> Self {
        Srng { state }
    }

    /// Creates a new Srng RNG on stream `index` derived from `seed`.
    /// Stream 0 is the seed itself; stream n is the seed reseeded n times.
    pub fn stream(seed: u64, index: u32) -> Self {
        let mut srng = Srng::from_state(seed);
        for _ in 0 .. index { srng.reseed(); }
        srng
    }

    /// Returns the raw state. The field layout is portable but otherwise opaque.
    #[inline]
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Sets the raw state.
    #[inline]
    pub fn set_state(&mut self, state: u64) {
        self.state = state;
    }

    /// Generates the next combined byte.
    #[inline]
    pub fn next_byte(&mut self) -> u8 {
        combined_bytes(&mut self.state, 1) as u8
    }

    /// Generates the next 16-bit random number.
    pub fn next_halfword(&mut self) -> u16 {
        // Three bytes per halfword would otherwise cut the period to a third.
        // The triggers sit on different alignments of that cycle, so jumping
        // between them rotates the alignment.
        if let Some(state) = halfword_escape(self.state) {
            tracing::trace!("srng: halfword trigger {:#018x} -> {:#018x}", self.state, state);
            self.state = state;
        }
        let buffer = combined_bytes(&mut self.state, 2) as u16;
        let control = self.next_byte();
        stir(buffer, control)
    }

    /// Derives a new state from the current one and returns it.
    /// Much slower than generating a number: 8 bytes and 4 halfwords are consumed.
    pub fn reseed(&mut self) -> u64 {
        let first = seed_step(combined_bytes(&mut self.state, 8), SEED_LCG_FIRST_ADDEND);
        let mut second = 0u64;
        for _ in 0 .. 4 {
            second = (second << 16) | self.next_halfword() as u64;
        }
        let second = seed_step(second, SEED_LCG_SECOND_ADDEND);
        self.state = first ^ second;
        self.state
    }

    /// Generates a number in 0 .. limit.
    /// A limit of 0 returns a full 16-bit value.
    /// A limit of 1 returns 0 without consuming randomness.
    #[wrappit]
    pub fn range(&mut self, limit: u16) -> u16 {
        if limit == 1 { return 0; }
        let x = self.next_halfword();
        let mask = limit - 1;
        if limit & mask == 0 { return x & mask; }
        if x >= limit { return x % limit; }
        let resampling_limit = (0x10000u32 % limit as u32) as u16;
        let mut x = x;
        while x < resampling_limit {
            x = self.next_halfword();
        }
        x % limit
    }

    /// Reseeds `reseed` times and then generates a number in 0 .. range (see range).
    pub fn sample(&mut self, range: u16, reseed: u32) -> u16 {
        for _ in 0 .. reseed { self.reseed(); }
        self.range(range)
    }
}

/// Stirs a 16-bit buffer under control of a byte:
/// high nibble = rotation, bits 2-3 = odd multiplier 3, 5, 7 or 9, bits 0-1 = 2 to 5 LCG rounds.
#[wrappit] #[inline]
fn stir(buffer: u16, control: u8) -> u16 {
    let rotation = (control >> 4) as u32;
    let multiplier = (((control & 12) >> 1) + 3) as u16;
    let rounds = ((control & 3) + 2) as u32;
    let buffer = halfword_steps(buffer, rounds).rotate_left(rotation);
    buffer * multiplier
}

impl From<u64> for Srng {
    fn from(state: u64) -> Self {
        Srng::from_state(state)
    }
}

use super::{RngCore, Error, SeedableRng};

impl RngCore for Srng {
    fn next_u32(&mut self) -> u32 {
        let x = self.next_halfword() as u32;
        (x << 16) | self.next_halfword() as u32
    }

    fn next_u64(&mut self) -> u64 {
        let x = self.next_u32() as u64;
        (x << 32) | self.next_u32() as u64
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let bytes = dest.len();
        let mut i = 0;
        while i < bytes {
            let x = self.next_halfword();
            let j = bytes.min(i + 2);
            // Always use Little-Endian.
            dest[i .. j].copy_from_slice(&x.to_le_bytes()[0 .. (j - i)]);
            i = j;
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Srng {
    type Seed = [u8; 8];

    /// Creates a new Srng RNG from a seed.
    /// All seeds work, including zero.
    fn from_seed(seed: Self::Seed) -> Self {
        // Always use Little-Endian.
        Srng::from_state(u64::from_le_bytes(seed))
    }
}
