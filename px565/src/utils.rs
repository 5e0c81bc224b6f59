/// Splits an RGB565 pixel into its 5/6/5-bit components.
#[inline]
pub const fn unpack_565(pixel: u16) -> [u8; 3] {
    let r = (pixel & 0b1111_1000_0000_0000) >> 11;
    let g = (pixel & 0b0000_0111_1110_0000) >> 5;
    let b = pixel & 0b0000_0000_0001_1111;

    [r as u8, g as u8, b as u8]
}

/// Composes 5-bit R, 6-bit G and 5-bit B values into an RGB565 u16 pixel.
/// Does not mask off higher bits if they are set.
#[inline]
pub const fn pack_565_unchecked([r, g, b]: [u8; 3]) -> u16 {
    ((r as u16) << 11) | ((g as u16) << 5) | (b as u16)
}

/// Converts an RGB888 pixel into an RGB565 pixel by truncating the low-order
/// bits of each channel. Truncation, not rounding: the output words must
/// match the firmware asset pipeline byte for byte.
#[inline]
pub const fn rgb888_to_rgb565([r, g, b]: [u8; 3]) -> u16 {
    (((r & 0xf8) as u16) << 8) | (((g & 0xfc) as u16) << 3) | (((b & 0xf8) as u16) >> 3)
}

/// Converts an RGB565 pixel into an RGB888 pixel, expanding each channel
/// with `value * 255 / max` (floor division). Not the inverse of
/// [`rgb888_to_rgb565`]: the low bits dropped there stay lost.
#[inline]
pub const fn rgb565_to_rgb888(pixel: u16) -> [u8; 3] {
    let [r, g, b] = unpack_565(pixel);

    let r = r as u32 * 255 / 31;
    let g = g as u32 * 255 / 63;
    let b = b as u32 * 255 / 31;

    [r as u8, g as u8, b as u8]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_instead_of_rounding() {
        // 0b0000_0111 is all-truncated bits in every channel
        assert_eq!(rgb888_to_rgb565([7, 3, 7]), 0);
        assert_eq!(rgb888_to_rgb565([8, 4, 8]), pack_565_unchecked([1, 1, 1]));
    }

    #[test]
    fn full_scale_is_preserved() {
        assert_eq!(rgb888_to_rgb565([255, 255, 255]), 0xffff);
        assert_eq!(rgb565_to_rgb888(0xffff), [255, 255, 255]);
        assert_eq!(rgb888_to_rgb565([0, 0, 0]), 0x0000);
        assert_eq!(rgb565_to_rgb888(0x0000), [0, 0, 0]);
    }

    #[test]
    fn expansion_uses_floor_division() {
        // R5 = 1 expands to 1 * 255 / 31 = 8 (8.22… floored)
        assert_eq!(rgb565_to_rgb888(pack_565_unchecked([1, 0, 0]))[0], 8);
        // G6 = 31 expands to 31 * 255 / 63 = 125 (125.47… floored)
        assert_eq!(rgb565_to_rgb888(pack_565_unchecked([0, 31, 0]))[1], 125);
    }
}
