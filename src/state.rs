#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};

// The 64-bit state is packed with explicit shifts so that it means the same
// on every platform regardless of byte order.
//
// bits  0 .. 32  shift
// bits 32 .. 40  carry
// bits 40 .. 48  current
// bits 48 .. 56  prev
// bits 56 .. 64  linear

/// The five sub-generator fields packed into an Srng state.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct StateFields {
    /// Xorshift register. Filled lazily when zero.
    pub shift: u32,
    /// Multiply-with-carry overflow.
    pub carry: u8,
    /// Multiply-with-carry output.
    pub current: u8,
    /// Multiply-with-carry lag-1 output.
    pub prev: u8,
    /// Linear byte counter.
    pub linear: u8,
}

impl StateFields {
    /// Unpacks fields from a 64-bit state.
    #[inline]
    pub fn from_bits(bits: u64) -> Self {
        StateFields {
            shift: bits as u32,
            carry: (bits >> 32) as u8,
            current: (bits >> 40) as u8,
            prev: (bits >> 48) as u8,
            linear: (bits >> 56) as u8,
        }
    }

    /// Packs fields into a 64-bit state.
    #[inline]
    pub fn to_bits(&self) -> u64 {
        (self.shift as u64)
            | ((self.carry as u64) << 32)
            | ((self.current as u64) << 40)
            | ((self.prev as u64) << 48)
            | ((self.linear as u64) << 56)
    }
}

impl From<u64> for StateFields {
    fn from(bits: u64) -> Self {
        StateFields::from_bits(bits)
    }
}

impl From<StateFields> for u64 {
    fn from(fields: StateFields) -> Self {
        fields.to_bits()
    }
}
