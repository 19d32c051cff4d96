use std::ops::RangeInclusive;

/// Helper methods to pick apart an instruction word.
///
/// Bit indices go from lsb to msb (right to left), matching the way the
/// ARM reference manual numbers encoding fields.
pub trait Bits: Copy {
    /// True when the bit at `bit_idx` is set.
    fn get_bit(self, bit_idx: u8) -> bool;

    /// Extracts an inclusive bit range, shifted down to position 0.
    ///
    /// `0xABCD_1234.get_bits(8..=15)` yields `0x12`.
    fn get_bits(self, bits_range: RangeInclusive<u8>) -> Self;
}

impl Bits for u32 {
    fn get_bit(self, bit_idx: u8) -> bool {
        debug_assert!(bit_idx < 32);
        (self >> bit_idx) & 1 != 0
    }

    fn get_bits(self, bits_range: RangeInclusive<u8>) -> Self {
        let start = *bits_range.start();
        let end = *bits_range.end();
        debug_assert!(start <= end && end < 32);

        let mask = if end - start == 31 {
            u32::MAX
        } else {
            (1 << (end - start + 1)) - 1
        };

        (self >> start) & mask
    }
}

/// Rotates an 8-bit immediate right by `rotate` bits, the addressing-mode-1
/// immediate rule (the encoded 4-bit rotate field is doubled by the caller).
pub const fn rotate_right(value: u32, rotate: u32) -> u32 {
    value.rotate_right(rotate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::Rng;

    #[test]
    fn get_bit() {
        let b = 0b1_1001_1101_u32;
        assert!(b.get_bit(0));
        assert!(!b.get_bit(1));
        assert!(b.get_bit(2));
        assert!(b.get_bit(8));
        assert!(!b.get_bit(31));
    }

    #[test]
    fn get_bits() {
        let b = 0xE59F_1234_u32;
        assert_eq!(b.get_bits(28..=31), 0xE);
        assert_eq!(b.get_bits(0..=11), 0x234);
        assert_eq!(b.get_bits(16..=19), 0xF);
        assert_eq!(b.get_bits(0..=31), b);
    }

    #[test]
    fn get_bits_is_slice_of_word() {
        let word: u32 = rand::thread_rng().r#gen();
        for start in 0..32_u8 {
            assert_eq!(word.get_bits(start..=31), word >> start);
        }
    }

    #[test]
    fn rotate_immediate() {
        // MOV r0, #0x80000000 encodes immediate 2 with rotate field 1 (so 2 bits).
        assert_eq!(rotate_right(2, 2), 0x8000_0000);
        assert_eq!(rotate_right(0xFF, 0), 0xFF);
    }
}
