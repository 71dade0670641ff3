//! Plain PBM decoding.
//!
//! This module provides functionality for:
//! - Parsing the `P1` magic number, leading comments and the dimension header
//! - Reading the whitespace-insensitive pixel stream into a [`Bitmap`]
//!
//! The whole input is buffered before parsing; rotation needs random access
//! to every source pixel anyway.
//!
//! # Examples
//!
//! ```ignore
//! use pbm_core::decode::decode_pbm;
//!
//! let bitmap = decode_pbm(b"P1\n2 1\n1 0\n").unwrap();
//! println!("Decoded {}x{} bitmap", bitmap.width, bitmap.height);
//! ```

mod pbm;
mod types;

pub use pbm::{decode_pbm, read_pbm, PBM_MAGIC};
pub use types::{Bitmap, DecodeError};
