//! PBM WASM - WebAssembly bindings for PBM rotation
//!
//! This crate provides WASM bindings to expose the pbm-core functionality
//! to JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types for bitmap data
//! - `decode` - Plain PBM decoding bindings
//! - `encode` - Plain PBM encoding bindings
//! - `transform` - Quarter-turn rotation bindings
//!
//! # Usage
//!
//! ```typescript
//! import init, { rotate_pbm } from '@pbm/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const rotated = rotate_pbm(bytes, 90, false);
//! ```

use wasm_bindgen::prelude::*;

mod decode;
mod encode;
mod transform;
mod types;

// Re-export public types
pub use decode::decode_pbm;
pub use encode::encode_pbm;
pub use transform::{rotate_bitmap, rotate_pbm, rotate_pbm_with_request};
pub use types::JsBitmap;

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
