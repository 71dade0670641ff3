//! Bitmap encoding WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! import { JsBitmap, encode_pbm } from '@pbm/wasm';
//!
//! const bitmap = new JsBitmap(2, 1, new Uint8Array([1, 0]));
//! const text = new TextDecoder().decode(encode_pbm(bitmap)); // "P1\n2 1\n1 0\n"
//! ```

use crate::types::{to_js_error, JsBitmap};
use pbm_core::encode;
use wasm_bindgen::prelude::*;

/// Encode a JsBitmap as plain (`P1`) PBM bytes.
///
/// # Errors
///
/// Returns an error if:
/// - Width or height is zero
/// - The pixel data length doesn't match width * height
/// - A comment does not start with `#` or spans several lines
#[wasm_bindgen]
pub fn encode_pbm(bitmap: &JsBitmap) -> Result<Vec<u8>, JsValue> {
    encode::encode_pbm(&bitmap.to_bitmap()).map_err(to_js_error)
}

/// Tests for encode bindings.
///
/// Error paths construct a `JsValue`, which only works on wasm32 targets;
/// see `wasm_tests` below and the tests in `pbm_core::encode`.
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_pbm() {
        let mut bitmap = JsBitmap::new(3, 1, vec![1, 0, 1]);
        bitmap.set_comments(vec!["# made in js".to_string()]);

        let bytes = encode_pbm(&bitmap).unwrap();
        assert_eq!(bytes, b"P1\n# made in js\n3 1\n1 0 1\n");
    }
}
