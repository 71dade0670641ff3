//! Plain PBM encoding.
//!
//! This module provides functionality for:
//! - Serializing a [`Bitmap`](crate::decode::Bitmap) as plain (`P1`) PBM text
//!
//! # Examples
//!
//! ```ignore
//! use pbm_core::decode::Bitmap;
//! use pbm_core::encode::encode_pbm;
//!
//! let bitmap = Bitmap::new(2, 1, vec![true, false]);
//! let bytes = encode_pbm(&bitmap).unwrap();
//! assert_eq!(bytes, b"P1\n2 1\n1 0\n");
//! ```

mod pbm;

pub use pbm::{encode_pbm, write_pbm, EncodeError};
