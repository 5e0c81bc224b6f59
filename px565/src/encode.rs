use crate::RasterImage;
use alloc::vec::Vec;

#[cfg(feature = "std")]
mod std_api;
#[cfg(feature = "std")]
pub use std_api::*;

/// Serializes a `.px` container into `w`.
///
/// Returns `false` without writing anything if the dimensions don't match
/// the number of pixels.
pub fn encode_to_vec(width: u16, height: u16, pixels: &[u16], w: &mut Vec<u8>) -> bool {
    if usize::from(width) * usize::from(height) != pixels.len() {
        return false;
    }

    w.reserve(4 + pixels.len() * 2);
    w.extend_from_slice(&width.to_le_bytes());
    w.extend_from_slice(&height.to_le_bytes());
    for &pixel in pixels {
        w.extend_from_slice(&pixel.to_le_bytes());
    }

    true
}

/// Serializes a [`RasterImage`] into a freshly allocated `.px` container.
pub fn encode(image: &RasterImage) -> Vec<u8> {
    let mut w = Vec::new();
    // cannot fail, the RasterImage invariant matches dimensions and length
    let ok = encode_to_vec(image.width(), image.height(), image.pixels(), &mut w);
    debug_assert!(ok);
    w
}
