use crate::{
    decode::{decode_header, required_len, DecodeError, HEADER_LEN},
    Header, RasterImage,
};
use alloc::vec::Vec;
use snafu::ensure;

/// Decodes a `.px` container, appending the RGB565 words to `w`.
pub fn decode_to_vec(data: &[u8], w: &mut Vec<u16>) -> Result<Header, DecodeError> {
    let header = decode_header(data)?;
    let pixel_count = header.pixel_count();
    let expected = required_len(&header);

    ensure!(
        data.len() >= expected,
        super::decode_error::TruncatedInputSnafu {
            expected,
            available: data.len(),
        }
    );

    w.reserve(pixel_count);
    w.extend(
        data[HEADER_LEN..expected]
            .chunks_exact(2)
            .map(|b| u16::from_le_bytes([b[0], b[1]])),
    );

    Ok(header)
}

/// Decodes a `.px` container into a freshly allocated [`RasterImage`].
pub fn decode(data: &[u8]) -> Result<RasterImage, DecodeError> {
    let mut pixels = Vec::new();
    let header = decode_to_vec(data, &mut pixels)?;

    Ok(RasterImage {
        width: header.width,
        height: header.height,
        pixels,
    })
}
