// Cycle-escape tables.
//
// The multiply-with-carry step (prev, current, carry) -> (current, (210 * prev + carry) mod 256, (210 * prev + carry) / 256)
// permutes the 256 * 256 * 210 states with carry < 210. The permutation has
// two fixed points (all zeros and (255, 255, 209)), four cycles of length 7,
// two of length 237285 and eight of length 1660995.
//
// Each non-degenerate cycle is represented below by one of its points.
// The representatives form a ring: short cycles first, then start points.
// Replacing a representative with its successor before stepping splices
// all 14 cycles into one of length 13762558.

/// Carries c such that (0, 0, c) starts one of the long cycles.
pub const CYCLE_STARTS: [u8; 10] = [1, 2, 4, 8, 13, 17, 23, 26, 29, 58];

/// One (prev, current, carry) point from each 7-cycle.
pub const SHORT_CYCLES: [(u8, u8, u8); 4] = [(8, 203, 173), (17, 150, 137), (35, 44, 65), (70, 88, 130)];

/// Halfword trigger states: the first 64 fractional bits of pi, e, ln 2 and log2 e.
pub const HALFWORD_TRIGGERS: [u64; 4] = [0x243f6a8885a308d3, 0xb7e151628aed2a6a, 0xb17217f7d1cf79ab, 0x71547652b82fe177];

/// Returns the ring successor of a multiply-with-carry triple,
/// or None if the triple is not a cycle representative.
pub fn escape(prev: u8, current: u8, carry: u8) -> Option<(u8, u8, u8)> {
    if prev == 0 && current == 0 {
        let i = CYCLE_STARTS.iter().position(|&c| c == carry)?;
        Some(match CYCLE_STARTS.get(i + 1) {
            Some(&c) => (0, 0, c),
            None => SHORT_CYCLES[0],
        })
    } else {
        let i = SHORT_CYCLES.iter().position(|&t| t == (prev, current, carry))?;
        Some(match SHORT_CYCLES.get(i + 1) {
            Some(&t) => t,
            None => (0, 0, CYCLE_STARTS[0]),
        })
    }
}

/// Returns the trigger that follows the given state, or None if the state is not a trigger.
pub fn halfword_escape(state: u64) -> Option<u64> {
    let i = HALFWORD_TRIGGERS.iter().position(|&x| x == state)?;
    Some(HALFWORD_TRIGGERS[(i + 1) % HALFWORD_TRIGGERS.len()])
}

#[cfg(test)] mod tests {
    use super::*;
    use crate::combine::mwc_step;

    fn cycle_length(start: (u8, u8, u8)) -> u32 {
        let mut x = start;
        let mut n = 0;
        loop {
            x = mwc_step(x);
            n += 1;
            if x == start { return n; }
        }
    }

    #[test] pub fn short_cycles() {
        for &t in SHORT_CYCLES.iter() {
            assert_eq!(7, cycle_length(t));
        }
        assert_eq!(1, cycle_length((0, 0, 0)));
        assert_eq!(1, cycle_length((255, 255, 209)));
    }

    #[test] pub fn ring() {
        // Walking the ring visits all 14 representatives once.
        let mut x = SHORT_CYCLES[0];
        for i in 1 .. 14 {
            x = escape(x.0, x.1, x.2).unwrap();
            if i < 4 {
                assert_eq!(SHORT_CYCLES[i], x);
            } else {
                assert_eq!((0, 0, CYCLE_STARTS[i - 4]), x);
            }
        }
        assert_eq!(Some(SHORT_CYCLES[0]), escape(x.0, x.1, x.2));

        assert_eq!(None, escape(0, 0, 0));
        assert_eq!(None, escape(0, 0, 3));
        assert_eq!(None, escape(8, 203, 172));
        assert_eq!(None, escape(1, 2, 3));
    }

    #[test] pub fn spliced_period() {
        // With escapes applied, every non-degenerate state lies on one cycle.
        let start = (0, 0, CYCLE_STARTS[0]);
        let mut x = start;
        let mut n = 0u32;
        loop {
            if let Some(y) = escape(x.0, x.1, x.2) { x = y; }
            x = mwc_step(x);
            n += 1;
            if x == start { break; }
        }
        assert_eq!(256 * 256 * 210 - 2, n);
    }

    #[test] pub fn halfword_triggers() {
        for i in 0 .. 4 {
            assert_eq!(Some(HALFWORD_TRIGGERS[(i + 1) % 4]), halfword_escape(HALFWORD_TRIGGERS[i]));
        }
        assert_eq!(None, halfword_escape(0));
        assert_eq!(None, halfword_escape(0x243f6a8885a308d2));
    }
}
