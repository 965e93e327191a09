//! Leading-zero count by binary search.

/// Count the leading zero bits of `x`.
///
/// Bisects the word in five steps (top 16, 8, 4, 2, then 1 bits of the remaining
/// window), shifting the candidate up each time the window is empty.
///
/// Returns a value in `0..=32`:
/// - `clz32(0) = 32`
/// - `clz32(1) = 31`
/// - `clz32(0x8000_0000) = 0`
#[inline(always)]
pub const fn clz32(x: u32) -> u32 {
    if x == 0 {
        return 32;
    }

    let mut x = x;
    let mut n = 0;
    if x & 0xFFFF_0000 == 0 {
        n += 16;
        x <<= 16;
    }
    if x & 0xFF00_0000 == 0 {
        n += 8;
        x <<= 8;
    }
    if x & 0xF000_0000 == 0 {
        n += 4;
        x <<= 4;
    }
    if x & 0xC000_0000 == 0 {
        n += 2;
        x <<= 2;
    }
    if x & 0x8000_0000 == 0 {
        n += 1;
    }
    n
}

/// Bit index of the most significant set bit, or `None` for zero.
#[inline(always)]
pub const fn msb_index(x: u32) -> Option<u32> {
    if x == 0 { None } else { Some(31 - clz32(x)) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clz_boundaries() {
        assert_eq!(clz32(0), 32);
        assert_eq!(clz32(1), 31);
        assert_eq!(clz32(0x8000_0000), 0);
        assert_eq!(clz32(0xFFFF_FFFF), 0);
        assert_eq!(clz32(0x0000_1234), 19);
    }

    #[test]
    fn test_clz_every_single_bit() {
        for bit in 0..32 {
            assert_eq!(clz32(1 << bit), 31 - bit, "clz32(1 << {bit})");
            // Filling the bits below the MSB must not change the count
            let filled = (1u32 << bit) | ((1u32 << bit) - 1);
            assert_eq!(clz32(filled), 31 - bit, "clz32({filled:#x})");
        }
    }

    #[test]
    fn test_msb_index() {
        assert_eq!(msb_index(0), None);
        assert_eq!(msb_index(1), Some(0));
        assert_eq!(msb_index(100), Some(6));
        assert_eq!(msb_index(u32::MAX), Some(31));
    }
}
