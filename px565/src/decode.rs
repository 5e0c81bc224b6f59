use crate::Header;
use byteorder::{ByteOrder, LittleEndian};
use snafu::{ensure, Snafu};

#[cfg(feature = "alloc")]
mod alloc_api;
#[cfg(feature = "alloc")]
pub use alloc_api::*;

/// Bytes of header before the pixel payload: u16le width, u16le height.
pub const HEADER_LEN: usize = 4;

#[derive(Debug, Snafu)]
#[snafu(module)]
pub enum DecodeError {
    /// The container declares more pixels than there are bytes.
    #[snafu(display("container needs {expected} bytes but only {available} are available"))]
    TruncatedInput { expected: usize, available: usize },
    OutputTooSmall,
}

/// Bytes a container with this header must span. Saturates at `usize::MAX`
/// so a declaration too large for the target's address space reads as
/// truncated instead of wrapping the length check around.
pub(crate) fn required_len(header: &Header) -> usize {
    header
        .pixel_count()
        .saturating_mul(2)
        .saturating_add(HEADER_LEN)
}

/// Reads the dimensions off the front of a `.px` container.
pub fn decode_header(data: &[u8]) -> Result<Header, DecodeError> {
    ensure!(
        data.len() >= HEADER_LEN,
        decode_error::TruncatedInputSnafu {
            expected: HEADER_LEN,
            available: data.len(),
        }
    );

    Ok(Header {
        width: LittleEndian::read_u16(&data[0..2]),
        height: LittleEndian::read_u16(&data[2..4]),
    })
}

/// Decodes a `.px` container into a caller-provided pixel buffer.
///
/// The first `width * height` elements of `output` receive the RGB565 words
/// in row-major order; the rest is left untouched. Trailing bytes after the
/// declared payload are ignored, the format carries no length of its own.
pub fn decode_to_slice(data: &[u8], output: &mut [u16]) -> Result<Header, DecodeError> {
    let header = decode_header(data)?;
    let pixel_count = header.pixel_count();
    let expected = required_len(&header);

    ensure!(
        data.len() >= expected,
        decode_error::TruncatedInputSnafu {
            expected,
            available: data.len(),
        }
    );
    ensure!(
        output.len() >= pixel_count,
        decode_error::OutputTooSmallSnafu
    );

    LittleEndian::read_u16_into(&data[HEADER_LEN..expected], &mut output[..pixel_count]);

    Ok(header)
}
