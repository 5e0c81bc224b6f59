//! Codec for the `.px` raw RGB565 pixel container.
//!
//! `.px` is the minimal trusted-pipeline format used to ship icon bitmaps to
//! RGB565 displays: no magic, no version tag, no checksum.
//!
//! # Layout
//!
//! ```plain
//! .- header ------------------.- payload ----------------------.
//! | u16le width | u16le height | width * height u16le pixels   |
//! `---------------------------`--------------------------------`
//! ```
//!
//! Pixels are stored row-major, top row first, left to right within a row.
//! Each pixel is an RGB565 word (5-bit red in the high bits, 6-bit green,
//! 5-bit blue).
//!
//! # Color conversion
//!
//! Down-conversion from RGB888 truncates the low-order channel bits; it never
//! rounds. Up-conversion expands each channel with `value * 255 / max`
//! (integer division). Both directions are pure per-pixel functions, see
//! [utils].
#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "alloc")]
pub mod encode;

pub mod decode;
pub mod utils;

/// Container header: dimensions only, nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub width: u16,
    pub height: u16,
}

impl Header {
    /// Number of pixels the payload must carry. Saturates on targets whose
    /// `usize` cannot hold the product.
    pub const fn pixel_count(&self) -> usize {
        (self.width as usize).saturating_mul(self.height as usize)
    }
}

/// An in-memory raster in RGB565 form, row-major, origin top-left.
///
/// Invariant: `pixels.len() == width * height`. Constructors uphold it;
/// the fields stay private so it cannot be broken afterwards.
#[cfg(feature = "alloc")]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    width: u16,
    height: u16,
    pixels: alloc::vec::Vec<u16>,
}

#[cfg(feature = "alloc")]
impl RasterImage {
    /// Wraps an RGB565 pixel buffer. Returns `None` if the buffer length
    /// does not match the dimensions.
    pub fn from_rgb565(width: u16, height: u16, pixels: alloc::vec::Vec<u16>) -> Option<Self> {
        (pixels.len() == usize::from(width) * usize::from(height)).then_some(Self {
            width,
            height,
            pixels,
        })
    }

    /// Down-converts a packed RGB888 buffer (3 bytes per pixel, row-major)
    /// by channel truncation. Returns `None` on a length mismatch.
    pub fn from_rgb888(width: u16, height: u16, rgb: &[u8]) -> Option<Self> {
        let expected = usize::from(width)
            .checked_mul(usize::from(height))
            .and_then(|n| n.checked_mul(3));
        if expected != Some(rgb.len()) {
            return None;
        }

        let pixels = rgb
            .chunks_exact(3)
            .map(|p| utils::rgb888_to_rgb565([p[0], p[1], p[2]]))
            .collect();

        Some(Self {
            width,
            height,
            pixels,
        })
    }

    /// Expands to a packed RGB888 buffer (3 bytes per pixel, row-major).
    pub fn to_rgb888(&self) -> alloc::vec::Vec<u8> {
        let mut rgb = alloc::vec::Vec::with_capacity(self.pixels.len() * 3);
        for &pixel in &self.pixels {
            rgb.extend_from_slice(&utils::rgb565_to_rgb888(pixel));
        }
        rgb
    }

    pub fn header(&self) -> Header {
        Header {
            width: self.width,
            height: self.height,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn pixels(&self) -> &[u16] {
        &self.pixels
    }
}
