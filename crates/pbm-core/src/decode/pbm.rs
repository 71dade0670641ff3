//! Plain (ASCII) PBM decoding.
//!
//! The decoder is tolerant about layout and strict about content:
//! - blank lines and `#` comment lines may precede the `<width> <height>` header
//! - pixels may be separated by any mix of space, tab, CR and LF, or packed
//! - every other byte in the pixel stream must be `0` or `1`
//! - exactly `width * height` pixels must be present

use std::io::Read;

use super::types::{Bitmap, DecodeError};

/// Magic number of the plain PBM format.
pub const PBM_MAGIC: &[u8; 2] = b"P1";

/// Decode a plain PBM image from bytes.
///
/// Comment lines found before the header are kept in [`Bitmap::comments`]
/// byte for byte, minus surrounding ASCII whitespace. A comment line may hold
/// any byte except `\n`.
///
/// # Errors
///
/// Returns an error if:
/// - The data does not start with `P1`
/// - There is no header line, or it does not hold two positive integers
/// - The pixel stream contains anything but `0`, `1` and whitespace
/// - The number of pixels differs from `width * height`
pub fn decode_pbm(bytes: &[u8]) -> Result<Bitmap, DecodeError> {
    let magic = bytes.get(..PBM_MAGIC.len()).unwrap_or(bytes);
    if magic != PBM_MAGIC {
        return Err(DecodeError::InvalidMagicNumber {
            found: String::from_utf8_lossy(magic).into_owned(),
        });
    }

    let mut offset = PBM_MAGIC.len();
    let mut comments = Vec::new();
    let mut lines = bytes[offset..].split_inclusive(|&b| b == b'\n');

    let header = loop {
        let line = lines.next().ok_or(DecodeError::MissingHeader)?;
        offset += line.len();

        let line = line.trim_ascii();
        if line.is_empty() {
            continue;
        }
        if line.starts_with(b"#") {
            comments.push(line.to_vec());
            continue;
        }
        break String::from_utf8_lossy(line).into_owned();
    };

    let (width, height) = parse_header(&header)?;
    let pixels = parse_pixels(&bytes[offset..], offset, width, height)?;

    log::trace!(
        "decoded {}x{} PBM with {} comment line(s)",
        width,
        height,
        comments.len()
    );

    Ok(Bitmap::new(width, height, pixels).with_comments(comments))
}

/// Read a whole plain PBM stream and decode it.
///
/// The reader is drained to the end before decoding starts.
pub fn read_pbm<R: Read>(mut reader: R) -> Result<Bitmap, DecodeError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    decode_pbm(&bytes)
}

fn parse_header(line: &str) -> Result<(u32, u32), DecodeError> {
    let mut fields = line.split_whitespace();
    let (Some(width), Some(height)) = (fields.next(), fields.next()) else {
        return Err(DecodeError::InvalidHeader(line.to_string()));
    };

    Ok((
        parse_dimension("width", width)?,
        parse_dimension("height", height)?,
    ))
}

fn parse_dimension(axis: &'static str, value: &str) -> Result<u32, DecodeError> {
    value
        .parse::<u32>()
        .ok()
        .filter(|&n| n > 0)
        .ok_or_else(|| DecodeError::InvalidDimension {
            axis,
            value: value.to_string(),
        })
}

/// Collect exactly `width * height` pixels from `data`.
///
/// `base` is the offset of `data` within the whole stream, for error reporting.
fn parse_pixels(
    data: &[u8],
    base: usize,
    width: u32,
    height: u32,
) -> Result<Vec<bool>, DecodeError> {
    let expected = (width as usize)
        .checked_mul(height as usize)
        .ok_or(DecodeError::DimensionsTooLarge { width, height })?;

    // Every pixel takes at least one byte
    let mut pixels = Vec::with_capacity(expected.min(data.len()));

    for (i, &byte) in data.iter().enumerate() {
        let pixel = match byte {
            b' ' | b'\t' | b'\r' | b'\n' => continue,
            b'0' => false,
            b'1' => true,
            other => {
                return Err(DecodeError::InvalidPixel {
                    found: char::from(other),
                    offset: base + i,
                })
            }
        };

        if pixels.len() == expected {
            return Err(DecodeError::ExcessPixelData { expected });
        }
        pixels.push(pixel);
    }

    if pixels.len() != expected {
        return Err(DecodeError::PixelCountMismatch {
            expected,
            actual: pixels.len(),
        });
    }

    Ok(pixels)
}

#[cfg(test)]
mod tests {
    use super::*;

    const J_GLYPH: &str = "P1
6 10
0 0 0 0 1 0
0 0 0 0 1 0
0 0 0 0 1 0
0 0 0 0 1 0
0 0 0 0 1 0
0 0 0 0 1 0
1 0 0 0 1 0
0 1 1 1 0 0
0 0 0 0 0 0
0 0 0 0 0 0
";

    #[test]
    fn test_decode_basic() {
        let bmp = decode_pbm(J_GLYPH.as_bytes()).unwrap();

        assert_eq!(bmp.dimensions(), (6, 10));
        assert_eq!(bmp.pixels.len(), 60);
        assert!(bmp.comments.is_empty());
        assert!(bmp.get(4, 0));
        assert!(bmp.get(0, 6));
        assert!(!bmp.get(5, 9));
    }

    #[test]
    fn test_decode_comments_kept_in_order() {
        let input = "P1\n# Some\n\n   # comments  \n2 1\n1 0\n";
        let bmp = decode_pbm(input.as_bytes()).unwrap();

        assert_eq!(bmp.comments, vec![b"# Some".to_vec(), b"# comments".to_vec()]);
        assert_eq!(bmp.pixels, vec![true, false]);
    }

    #[test]
    fn test_decode_comments_keep_raw_bytes() {
        let bmp = decode_pbm(b"P1\n# caf\xe9\n# a\rb\r\n1 1\n1\n").unwrap();
        assert_eq!(bmp.comments, vec![b"# caf\xe9".to_vec(), b"# a\rb".to_vec()]);
    }

    #[test]
    fn test_decode_packed_pixels() {
        let input = "P1\n6 10\n000010000010000010000010000010000010100010011100000000000000\n";
        let packed = decode_pbm(input.as_bytes()).unwrap();
        let spaced = decode_pbm(J_GLYPH.as_bytes()).unwrap();

        assert_eq!(packed, spaced);
    }

    #[test]
    fn test_decode_mixed_whitespace() {
        let input = "P1\r\n3 2\r\n1\t0 1\r\n\n  010";
        let bmp = decode_pbm(input.as_bytes()).unwrap();
        assert_eq!(bmp.pixels, vec![true, false, true, false, true, false]);
    }

    #[test]
    fn test_decode_header_on_magic_line() {
        let bmp = decode_pbm(b"P1 2 2\n1 1 0 0\n").unwrap();
        assert_eq!(bmp.dimensions(), (2, 2));
    }

    #[test]
    fn test_decode_extra_header_fields_ignored() {
        let bmp = decode_pbm(b"P1\n2 1 junk\n10\n").unwrap();
        assert_eq!(bmp.dimensions(), (2, 1));
    }

    #[test]
    fn test_decode_wrong_magic() {
        for input in ["P4\n1 1\n1\n", "P2\n1 1\n1\n", "p1\n1 1\n1\n"] {
            let result = decode_pbm(input.as_bytes());
            assert!(
                matches!(result, Err(DecodeError::InvalidMagicNumber { .. })),
                "input {input:?} gave {result:?}"
            );
        }
    }

    #[test]
    fn test_decode_short_magic() {
        assert!(matches!(
            decode_pbm(b""),
            Err(DecodeError::InvalidMagicNumber { .. })
        ));
        assert!(matches!(
            decode_pbm(b"P"),
            Err(DecodeError::InvalidMagicNumber { .. })
        ));
    }

    #[test]
    fn test_decode_missing_header() {
        assert!(matches!(
            decode_pbm(b"P1\n# only a comment\n\n"),
            Err(DecodeError::MissingHeader)
        ));
        assert!(matches!(decode_pbm(b"P1"), Err(DecodeError::MissingHeader)));
    }

    #[test]
    fn test_decode_single_field_header() {
        assert!(matches!(
            decode_pbm(b"P1\n6\n000000\n"),
            Err(DecodeError::InvalidHeader(_))
        ));
    }

    #[test]
    fn test_decode_negative_height() {
        let input = "P1\n50 -1\n000010000010000010000010000010000010100010011100000000000000\n";
        match decode_pbm(input.as_bytes()) {
            Err(DecodeError::InvalidDimension { axis, value }) => {
                assert_eq!(axis, "height");
                assert_eq!(value, "-1");
            }
            other => panic!("expected invalid height, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_zero_and_garbage_dimensions() {
        assert!(matches!(
            decode_pbm(b"P1\n0 3\n"),
            Err(DecodeError::InvalidDimension { axis: "width", .. })
        ));
        assert!(matches!(
            decode_pbm(b"P1\nsix 10\n"),
            Err(DecodeError::InvalidDimension { axis: "width", .. })
        ));
        assert!(matches!(
            decode_pbm(b"P1\n6 4294967296\n"),
            Err(DecodeError::InvalidDimension { axis: "height", .. })
        ));
    }

    #[test]
    fn test_decode_invalid_pixel() {
        match decode_pbm(b"P1\n2 2\n1 0\n2 1\n") {
            Err(DecodeError::InvalidPixel { found, offset }) => {
                assert_eq!(found, '2');
                assert_eq!(offset, 11);
            }
            other => panic!("expected invalid pixel, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_comment_after_header_is_invalid() {
        assert!(matches!(
            decode_pbm(b"P1\n1 1\n# late\n1\n"),
            Err(DecodeError::InvalidPixel { found: '#', .. })
        ));
    }

    #[test]
    fn test_decode_too_few_pixels() {
        assert!(matches!(
            decode_pbm(b"P1\n2 2\n1 0 1\n"),
            Err(DecodeError::PixelCountMismatch {
                expected: 4,
                actual: 3
            })
        ));
    }

    #[test]
    fn test_decode_too_many_pixels() {
        assert!(matches!(
            decode_pbm(b"P1\n2 2\n1 0 1 0 1\n"),
            Err(DecodeError::ExcessPixelData { expected: 4 })
        ));
    }

    #[test]
    fn test_decode_huge_header_does_not_allocate() {
        let result = decode_pbm(b"P1\n4000000000 4000000000\n1\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_read_pbm_from_reader() {
        let bmp = read_pbm(J_GLYPH.as_bytes()).unwrap();
        assert_eq!(bmp.dimensions(), (6, 10));
    }

    #[test]
    fn test_read_pbm_io_error() {
        struct FailingReader;

        impl Read for FailingReader {
            fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("disk on fire"))
            }
        }

        assert!(matches!(read_pbm(FailingReader), Err(DecodeError::Io(_))));
    }
}
