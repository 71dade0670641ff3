//! Bitmap decoding WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! import { decode_pbm } from '@pbm/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const bitmap = decode_pbm(bytes);
//! console.log(`Decoded ${bitmap.width}x${bitmap.height} bitmap`);
//! ```

use crate::types::{to_js_error, JsBitmap};
use pbm_core::decode;
use wasm_bindgen::prelude::*;

/// Decode a plain (`P1`) PBM image from bytes.
///
/// # Errors
///
/// Returns an error if the bytes are not a well-formed plain PBM image.
#[wasm_bindgen]
pub fn decode_pbm(bytes: &[u8]) -> Result<JsBitmap, JsValue> {
    decode::decode_pbm(bytes)
        .map(JsBitmap::from_bitmap)
        .map_err(to_js_error)
}
