//! Plain (ASCII) PBM encoding.
//!
//! The output layout is fixed:
//!
//! ```text
//! P1
//! # comment lines, verbatim
//! <width> <height>
//! <height rows of width pixels separated by single spaces>
//! ```
//!
//! Every line ends with `\n`, including the last pixel row. There is no
//! trailing space on any row and no blank line anywhere.

use std::io::Write;

use thiserror::Error;

use crate::decode::{Bitmap, PBM_MAGIC};

/// Errors that can occur during PBM encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// Width * height does not fit in memory
    #[error("Invalid dimensions: {width}x{height} is too large")]
    DimensionsTooLarge { width: u32, height: u32 },

    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} pixels (width * height), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// A comment that would not survive a round trip
    #[error("Invalid comment line: {0:?}")]
    InvalidComment(String),

    /// Writing to the output failed
    #[error("Failed to write output")]
    Io(#[from] std::io::Error),
}

/// Write a bitmap as plain PBM to `writer`.
///
/// The bitmap is validated before the first byte is written, so an invalid
/// bitmap never produces partial output.
///
/// # Errors
///
/// Returns an error if:
/// - Width or height is zero
/// - Width * height overflows `usize`
/// - The pixel data length doesn't match width * height
/// - A comment does not start with `#` or contains a line feed
/// - The writer fails
pub fn write_pbm<W: Write>(mut writer: W, bitmap: &Bitmap) -> Result<(), EncodeError> {
    validate(bitmap)?;

    writer.write_all(PBM_MAGIC)?;
    writer.write_all(b"\n")?;
    for comment in &bitmap.comments {
        writer.write_all(comment)?;
        writer.write_all(b"\n")?;
    }
    writeln!(writer, "{} {}", bitmap.width, bitmap.height)?;

    let mut line = Vec::with_capacity(bitmap.width as usize * 2);
    for row in bitmap.rows() {
        line.clear();
        for (i, &pixel) in row.iter().enumerate() {
            if i > 0 {
                line.push(b' ');
            }
            line.push(if pixel { b'1' } else { b'0' });
        }
        line.push(b'\n');
        writer.write_all(&line)?;
    }

    writer.flush()?;
    Ok(())
}

/// Encode a bitmap to plain PBM bytes.
pub fn encode_pbm(bitmap: &Bitmap) -> Result<Vec<u8>, EncodeError> {
    // "P1\n" + header + two bytes per pixel
    let mut buffer = Vec::with_capacity(bitmap.pixels.len() * 2 + 16);
    write_pbm(&mut buffer, bitmap)?;
    Ok(buffer)
}

fn validate(bitmap: &Bitmap) -> Result<(), EncodeError> {
    if bitmap.width == 0 || bitmap.height == 0 {
        return Err(EncodeError::InvalidDimensions {
            width: bitmap.width,
            height: bitmap.height,
        });
    }

    let expected = bitmap
        .pixel_count()
        .ok_or(EncodeError::DimensionsTooLarge {
            width: bitmap.width,
            height: bitmap.height,
        })?;
    if bitmap.pixels.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: bitmap.pixels.len(),
        });
    }

    if let Some(bad) = bitmap
        .comments
        .iter()
        .find(|c| !c.starts_with(b"#") || c.contains(&b'\n'))
    {
        return Err(EncodeError::InvalidComment(
            String::from_utf8_lossy(bad).into_owned(),
        ));
    }

    Ok(())
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::decode::decode_pbm;
    use proptest::prelude::*;

    fn bitmap_strategy() -> impl Strategy<Value = Bitmap> {
        (1u32..=16, 1u32..=16).prop_flat_map(|(w, h)| {
            (
                prop::collection::vec(any::<bool>(), (w * h) as usize),
                prop::collection::vec("# [a-z ]{0,12}", 0..3),
            )
                .prop_map(move |(pixels, comments)| {
                    let comments = comments.into_iter().map(String::into_bytes).collect();
                    Bitmap::new(w, h, pixels).with_comments(comments)
                })
        })
    }

    proptest! {
        /// Property: encoded output decodes back to the same bitmap.
        #[test]
        fn prop_decode_inverts_encode(bmp in bitmap_strategy()) {
            let bytes = encode_pbm(&bmp).unwrap();
            let decoded = decode_pbm(&bytes).unwrap();

            prop_assert_eq!(decoded.dimensions(), bmp.dimensions());
            prop_assert_eq!(decoded.pixels, bmp.pixels);
        }

        /// Property: output has one line per pixel row plus the header lines.
        #[test]
        fn prop_line_count(bmp in bitmap_strategy()) {
            let text = String::from_utf8(encode_pbm(&bmp).unwrap()).unwrap();
            let expected = 2 + bmp.comments.len() + bmp.height as usize;
            prop_assert_eq!(text.lines().count(), expected);
            prop_assert!(text.ends_with('\n'));
        }
    }
}
