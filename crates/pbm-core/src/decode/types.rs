//! Core types for bitmap decoding.

use image::{GrayImage, Luma};
use thiserror::Error;

/// Error types for PBM decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The stream does not start with the `P1` magic number.
    #[error("magic number does not correspond to an ASCII PBM file: {found:?}")]
    InvalidMagicNumber { found: String },

    /// The stream ended before a dimension header was found.
    #[error("missing dimension header")]
    MissingHeader,

    /// The header line does not hold both a width and a height.
    #[error("invalid size string: {0:?}")]
    InvalidHeader(String),

    /// A dimension is not a positive base-10 integer.
    #[error("invalid {axis}: {value:?}")]
    InvalidDimension { axis: &'static str, value: String },

    /// The declared dimensions cannot be addressed in memory.
    #[error("image dimensions {width}x{height} are too large")]
    DimensionsTooLarge { width: u32, height: u32 },

    /// A byte in the pixel stream is neither whitespace nor `0`/`1`.
    #[error("invalid pixel {found:?} at byte offset {offset}")]
    InvalidPixel { found: char, offset: usize },

    /// The pixel stream ended before `width * height` pixels were read.
    #[error("expected {expected} pixels, found {actual}")]
    PixelCountMismatch { expected: usize, actual: usize },

    /// The pixel stream holds more than `width * height` pixels.
    #[error("pixel data exceeds the expected {expected} pixels")]
    ExcessPixelData { expected: usize },

    /// I/O error while reading the input.
    #[error("could not read image")]
    Io(#[from] std::io::Error),
}

/// A monochrome bitmap held fully in memory.
///
/// Pixels are stored row-major: the pixel at column `x`, row `y` lives at
/// `pixels[y * width + x]`. `true` is a set (`1`, black) pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Comment lines found before the header, including their `#` prefix.
    ///
    /// Kept as raw bytes since PBM does not fix a text encoding.
    pub comments: Vec<Vec<u8>>,
    /// Pixel data in row-major order. Length should be width * height.
    pub pixels: Vec<bool>,
}

impl Bitmap {
    /// Create a new Bitmap with the given dimensions and pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<bool>) -> Self {
        let bitmap = Self {
            width,
            height,
            comments: Vec::new(),
            pixels,
        };
        debug_assert_eq!(
            bitmap.pixel_count(),
            Some(bitmap.pixels.len()),
            "Pixel buffer size mismatch"
        );
        bitmap
    }

    /// Attach leading comment lines.
    pub fn with_comments(mut self, comments: Vec<Vec<u8>>) -> Self {
        self.comments = comments;
        self
    }

    /// Get the pixel at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> bool {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    /// Width and height as a tuple.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get the total number of pixels, or `None` if it does not fit in `usize`.
    pub fn pixel_count(&self) -> Option<usize> {
        (self.width as usize).checked_mul(self.height as usize)
    }

    /// Check if this is an empty/invalid bitmap.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }

    /// Iterate over the rows of the bitmap, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        // chunks() panics on a zero size
        self.pixels.chunks(self.width.max(1) as usize)
    }

    /// Convert to an 8-bit grayscale image. Set pixels become black.
    pub fn to_luma_image(&self) -> GrayImage {
        GrayImage::from_fn(self.width, self.height, |x, y| {
            if self.get(x, y) {
                Luma([0])
            } else {
                Luma([255])
            }
        })
    }

    /// Create a Bitmap from a grayscale image.
    ///
    /// Pixels darker than `threshold` become set pixels.
    pub fn from_luma_image(img: &GrayImage, threshold: u8) -> Self {
        let (width, height) = img.dimensions();
        let pixels = img.pixels().map(|p| p.0[0] < threshold).collect();
        Self::new(width, height, pixels)
    }
}
