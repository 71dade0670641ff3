//! WASM bindings for bitmap rotation.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! // Rotate a whole file 90 degrees counter-clockwise
//! const rotated = rotate_pbm(bytes, 90, true);
//!
//! // Same, with a request object
//! const same = rotate_pbm_with_request(bytes, { degrees: 90, counterClockwise: true });
//!
//! // Rotate an already decoded bitmap
//! const turned = rotate_bitmap(decode_pbm(bytes), 180, false);
//! ```

use crate::types::{to_js_error, JsBitmap};
use pbm_core::rotate_bytes;
use pbm_core::transform::{self, RotationRequest};
use wasm_bindgen::prelude::*;

/// Rotate a plain PBM image given as bytes.
///
/// # Arguments
///
/// * `bytes` - The plain PBM file bytes
/// * `degrees` - A multiple of 90, may be negative
/// * `counter_clockwise` - Negate `degrees` before rotating
///
/// # Errors
///
/// Returns an error if `degrees` is not a multiple of 90 or the bytes are not
/// a well-formed plain PBM image.
#[wasm_bindgen]
pub fn rotate_pbm(
    bytes: &[u8],
    degrees: i32,
    counter_clockwise: bool,
) -> Result<Vec<u8>, JsValue> {
    let request = RotationRequest::new(degrees.into(), counter_clockwise);
    rotate_bytes(bytes, request).map_err(to_js_error)
}

/// Rotate a plain PBM image using a `{ degrees, counterClockwise }` object.
///
/// `counterClockwise` is optional and defaults to `false`.
#[wasm_bindgen]
pub fn rotate_pbm_with_request(bytes: &[u8], request: JsValue) -> Result<Vec<u8>, JsValue> {
    let request: RotationRequest =
        serde_wasm_bindgen::from_value(request).map_err(|e| JsValue::from_str(&e.to_string()))?;
    rotate_bytes(bytes, request).map_err(to_js_error)
}

/// Rotate a decoded bitmap, returning a new one.
///
/// Width and height are swapped for 90 and 270 degree rotations. Comments are
/// kept.
#[wasm_bindgen]
pub fn rotate_bitmap(
    bitmap: &JsBitmap,
    degrees: i32,
    counter_clockwise: bool,
) -> Result<JsBitmap, JsValue> {
    let turn = RotationRequest::new(degrees.into(), counter_clockwise)
        .quarter_turn()
        .map_err(to_js_error)?;

    let source = bitmap.to_bitmap();
    if source.pixel_count() != Some(source.pixels.len()) {
        return Err(JsValue::from_str(&format!(
            "expected {}x{} pixels, got {}",
            source.width,
            source.height,
            source.pixels.len()
        )));
    }

    let result = transform::rotate_bitmap(&source, turn);
    Ok(JsBitmap::from_bitmap(result))
}


/// WASM-specific tests that require JsValue.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_rotate_pbm_not_quarter_turn() {
        assert!(rotate_pbm(b"P1\n1 1\n1\n", 123, false).is_err());
    }

    #[wasm_bindgen_test]
    fn test_rotate_pbm_with_request() {
        let request = serde_wasm_bindgen::to_value(&RotationRequest::new(270, true)).unwrap();
        let out = rotate_pbm_with_request(b"P1\n2 1\n1 0\n", request).unwrap();
        assert_eq!(out, b"P1\n1 2\n1\n0\n");
    }

    #[wasm_bindgen_test]
    fn test_rotate_bitmap_pixel_mismatch() {
        let img = JsBitmap::new(2, 2, vec![1]);
        assert!(rotate_bitmap(&img, 90, false).is_err());
    }

    #[wasm_bindgen_test]
    fn test_rotate_bitmap_oversized_dimensions() {
        let img = JsBitmap::new(65536, 65536, vec![]);
        assert!(rotate_bitmap(&img, 90, false).is_err());
    }

    #[wasm_bindgen_test]
    fn test_rotate_bitmap_not_quarter_turn() {
        let img = JsBitmap::new(1, 1, vec![1]);
        assert!(rotate_bitmap(&img, 45, false).is_err());
    }
}
