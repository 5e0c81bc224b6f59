use snafu::{ensure, ResultExt, Snafu};
use std::io::Write;

#[derive(Debug, Snafu)]
pub enum EncodeError {
    #[snafu(display(
        "Specified image dimensions don't match the number of pixels: {width} * {height} == {} pixels, but {pixel_count} pixels were given",
        width * height
    ))]
    InvalidDimensions {
        width: usize,
        height: usize,
        pixel_count: usize,
    },
    WriteIo {
        source: std::io::Error,
    },
}

/// Writes the 4-byte `.px` header.
pub fn write_header<W: Write>(width: u16, height: u16, mut w: W) -> Result<(), EncodeError> {
    let [w1, w2] = width.to_le_bytes();
    let [h1, h2] = height.to_le_bytes();
    w.write_all(&[w1, w2, h1, h2]).context(WriteIoSnafu)
}

/// Serializes a `.px` container into any [`Write`] sink.
pub fn write_container<W: Write>(
    width: u16,
    height: u16,
    pixels: &[u16],
    mut w: W,
) -> Result<(), EncodeError> {
    ensure!(
        usize::from(width) * usize::from(height) == pixels.len(),
        InvalidDimensionsSnafu {
            width: usize::from(width),
            height: usize::from(height),
            pixel_count: pixels.len()
        }
    );

    write_header(width, height, &mut w)?;
    for &pixel in pixels {
        w.write_all(&pixel.to_le_bytes()).context(WriteIoSnafu)?;
    }

    Ok(())
}
