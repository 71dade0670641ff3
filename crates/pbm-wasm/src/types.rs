//! WASM-compatible wrapper types for bitmap data.
//!
//! This module provides JavaScript-friendly types that wrap the core PBM types,
//! handling the conversion between Rust and JavaScript data representations.

use std::error::Error;

use pbm_core::Bitmap;
use wasm_bindgen::prelude::*;

/// A decoded bitmap wrapper for JavaScript.
///
/// Pixels are exposed as one byte per pixel, `1` for set (black) and `0`
/// for clear, in row-major order.
#[wasm_bindgen]
pub struct JsBitmap {
    width: u32,
    height: u32,
    comments: Vec<Vec<u8>>,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsBitmap {
    /// Create a new JsBitmap from dimensions and pixel data.
    ///
    /// # Arguments
    /// * `width` - Bitmap width in pixels
    /// * `height` - Bitmap height in pixels
    /// * `pixels` - One byte per pixel, non-zero means set
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsBitmap {
        JsBitmap {
            width,
            height,
            comments: Vec::new(),
            pixels,
        }
    }

    /// Get the bitmap width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the bitmap height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Comment lines that preceded the header, including the `#`
    ///
    /// Bytes that are not valid UTF-8 show up as U+FFFD here; encoding or
    /// rotating the bitmap still writes the original bytes.
    #[wasm_bindgen(getter)]
    pub fn comments(&self) -> Vec<String> {
        self.comments
            .iter()
            .map(|c| String::from_utf8_lossy(c).into_owned())
            .collect()
    }

    #[wasm_bindgen(setter)]
    pub fn set_comments(&mut self, comments: Vec<String>) {
        self.comments = comments.into_iter().map(String::into_bytes).collect();
    }

    /// Returns pixel data as Uint8Array (a copy).
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }
}

impl JsBitmap {
    /// Create a JsBitmap from a core Bitmap.
    pub(crate) fn from_bitmap(bitmap: Bitmap) -> Self {
        Self {
            width: bitmap.width,
            height: bitmap.height,
            comments: bitmap.comments,
            pixels: bitmap.pixels.into_iter().map(u8::from).collect(),
        }
    }

    /// Convert back to a core Bitmap.
    pub(crate) fn to_bitmap(&self) -> Bitmap {
        Bitmap {
            width: self.width,
            height: self.height,
            comments: self.comments.clone(),
            pixels: self.pixels.iter().map(|&p| p != 0).collect(),
        }
    }
}

/// Flatten an error and its sources into one message for JavaScript.
pub(crate) fn error_message(err: &dyn Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

pub(crate) fn to_js_error(err: impl Error) -> JsValue {
    JsValue::from_str(&error_message(&err))
}
