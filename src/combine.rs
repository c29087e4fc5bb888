use wrapping_arithmetic::wrappit;
use super::lcg::linear_step;
use super::state::StateFields;
use super::tables::escape;

// The byte combiner merges two weak generators into one byte stream.
//
// -xorshift32 (shifts 8, 9, 23) supplies bit mixing with period 2**32 - 1.
// -a lag-1 multiply-with-carry generator with multiplier 210 supplies
//  a guaranteed long period once its short cycles are spliced out (see tables.rs).
// -the linear byte counter picks how the two are combined for each byte.

/// Multiplier of the multiply-with-carry step. Carries at or above it are reduced before stepping.
pub const MWC_MULTIPLIER: u32 = 210;

/// Sums of (carry + prev + current) at the two fixed points.
const DEGENERATE_LOW: u32 = 0;
const DEGENERATE_HIGH: u32 = 719;

/// One multiply-with-carry step on a (prev, current, carry) triple.
#[inline]
pub fn mwc_step((prev, current, carry): (u8, u8, u8)) -> (u8, u8, u8) {
    let p = MWC_MULTIPLIER * prev as u32 + carry as u32;
    (current, p as u8, (p >> 8) as u8)
}

#[inline]
fn xorshift32(x: u32) -> u32 {
    let x = x ^ (x >> 8);
    let x = x ^ (x << 9);
    x ^ (x >> 23)
}

impl StateFields {

    /// Advances the linear counter and returns it.
    #[inline]
    pub fn next_linear(&mut self) -> u8 {
        self.linear = linear_step(self.linear);
        self.linear
    }

    /// Refills the xorshift register from the linear counter if it is zero.
    #[inline]
    fn fill_shift(&mut self) {
        if self.shift == 0 {
            for _ in 0 .. 4 {
                self.shift = (self.shift << 8) | self.next_linear() as u32;
            }
        }
    }

    /// Steps the multiply-with-carry generator, repairing degenerate states
    /// and escaping short cycles first.
    fn step_mwc(&mut self) {
        if self.carry as u32 >= MWC_MULTIPLIER {
            self.carry -= MWC_MULTIPLIER as u8;
        }
        let sum = self.carry as u32 + self.prev as u32 + self.current as u32;
        if sum == DEGENERATE_LOW || sum == DEGENERATE_HIGH {
            tracing::trace!("srng: refreshing degenerate multiply-with-carry state");
            self.prev = self.next_linear();
            self.carry = self.next_linear();
            self.current = self.next_linear();
        }
        if let Some((prev, current, carry)) = escape(self.prev, self.current, self.carry) {
            tracing::trace!("srng: cycle escape ({}, {}, {}) -> ({}, {}, {})", self.prev, self.current, self.carry, prev, current, carry);
            self.prev = prev;
            self.current = current;
            self.carry = carry;
        }
        let (prev, current, carry) = mwc_step((self.prev, self.current, self.carry));
        self.prev = prev;
        self.current = current;
        self.carry = carry;
    }

    /// Generates the next combined byte.
    #[wrappit]
    pub fn next_combined(&mut self) -> u8 {
        self.fill_shift();
        self.shift = xorshift32(self.shift);
        self.step_mwc();
        self.next_linear();
        // Bits 3 and 4 of the counter select the shift, bits 4 and 5 the operator.
        let p = self.shift >> ((self.linear >> 3) & 24);
        let current = self.current as u32;
        let x = match (self.linear >> 4) & 3 {
            0 => p + current,
            1 => p ^ current,
            2 => p - current,
            _ => current - p,
        };
        x as u8
    }
}

/// Assembles up to 8 combined bytes big-endian, advancing the packed state.
/// Widths above 8 return the all-ones sentinel and leave the state alone.
pub fn combined_bytes(state: &mut u64, width: u32) -> u64 {
    if width > 8 { return u64::MAX; }
    let mut fields = StateFields::from_bits(*state);
    let mut x = 0u64;
    for _ in 0 .. width {
        x = (x << 8) | fields.next_combined() as u64;
    }
    *state = fields.to_bits();
    x
}
