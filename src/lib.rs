#![no_std]

pub mod combine;
pub mod lcg;
pub mod srng;
pub mod state;
pub mod tables;

pub use srng::*;
pub use state::StateFields;
pub use rand_core::*;

// Constants of the three linear congruential steps.

// 8-bit step on the `linear` field. Full period 256.
pub const LINEAR_MULTIPLIER: u8 = 73;
pub const LINEAR_ADDEND: u8 = 29;

// 16-bit step used to stir halfwords.
pub const HALFWORD_LCG_MULTIPLIER: u16 = 0x6329;
pub const HALFWORD_LCG_ADDEND: u16 = 0x4321;

// 64-bit step used by the seed expander.
// The multiplier is the one used by PCG and Knuth's MMIX.
pub const SEED_LCG_MULTIPLIER: u64 = 0x5851f42d4c957f2d;
pub const SEED_LCG_FIRST_ADDEND: u64 = 0x0123456789abcdef;
pub const SEED_LCG_SECOND_ADDEND: u64 = 0x0fedcba987654321;

/// Generates a number in `0 .. range` from the state, reseeding it `reseed` times first.
/// A range of 0 returns a full 16-bit value.
/// A range of 1 returns 0 without consuming randomness, which is useful for reseeding only.
/// A missing state returns 0 and does nothing.
pub fn random(state: Option<&mut u64>, range: u16, reseed: u32) -> u16 {
    match state {
        Some(state) => {
            let mut rng = Srng::from_state(*state);
            let x = rng.sample(range, reseed);
            *state = rng.state();
            x
        }
        None => 0,
    }
}
