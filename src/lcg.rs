use wrapping_arithmetic::wrappit;
use super::*;

// This module contains the linear congruential steps
// that feed and stir the combined generator.

/// One step of the 8-bit LCG. Full period 256.
/// It is not an output source: it supplies fresh bytes
/// whenever another sub-generator has to be refilled.
#[wrappit] #[inline]
pub fn linear_step(x: u8) -> u8 {
    x * LINEAR_MULTIPLIER + LINEAR_ADDEND
}

/// One step of the 16-bit LCG used to stir halfwords.
#[wrappit] #[inline]
pub fn halfword_step(x: u16) -> u16 {
    x * HALFWORD_LCG_MULTIPLIER + HALFWORD_LCG_ADDEND
}

/// Applies the 16-bit LCG n times.
#[inline]
pub fn halfword_steps(x: u16, n: u32) -> u16 {
    (0 .. n).fold(x, |x, _| halfword_step(x))
}

/// One step of the 64-bit LCG used by the seed expander.
#[wrappit] #[inline]
pub fn seed_step(x: u64, addend: u64) -> u64 {
    x * SEED_LCG_MULTIPLIER + addend
}

#[cfg(test)] mod tests {
    use super::*;

    #[test] pub fn linear_period() {
        // Full period: all 256 values are visited before the first repeats.
        let mut seen = [false; 256];
        let mut x = 0u8;
        for _ in 0 .. 256 {
            x = linear_step(x);
            assert!(!seen[x as usize]);
            seen[x as usize] = true;
        }
        assert_eq!(0, x);
        assert_eq!(29, linear_step(0));
        assert_eq!(98, linear_step(29));
    }

    #[test] pub fn halfword_period() {
        // The 16-bit LCG satisfies Hull-Dobell and has full period 65536.
        let mut x = 0u16;
        let mut n = 0u32;
        loop {
            x = halfword_step(x);
            n += 1;
            if x == 0 { break; }
        }
        assert_eq!(0x10000, n);
        assert_eq!(halfword_step(halfword_step(halfword_step(7))), halfword_steps(7, 3));
        assert_eq!(7, halfword_steps(7, 0));
    }

    #[test] pub fn seed_step_values() {
        assert_eq!(SEED_LCG_FIRST_ADDEND, seed_step(0, SEED_LCG_FIRST_ADDEND));
        assert_eq!(SEED_LCG_MULTIPLIER.wrapping_add(SEED_LCG_SECOND_ADDEND), seed_step(1, SEED_LCG_SECOND_ADDEND));
    }
}
