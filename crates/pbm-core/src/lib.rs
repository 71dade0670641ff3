//! PBM Core - plain bitmap rotation library
//!
//! This crate reads plain (ASCII, `P1`) PBM images, rotates them by whole
//! quarter turns and writes them back in the same format.
//!
//! # Module Structure
//!
//! - `decode` - Parse a `P1` stream into a [`Bitmap`]
//! - `transform` - Normalize rotation requests and rotate bitmaps
//! - `encode` - Serialize a [`Bitmap`] as `P1` text
//! - `rotate` - Decode, rotate and encode in one call
//!
//! The library performs no I/O besides the reader and writer it is given.

pub mod decode;
pub mod encode;
pub mod rotate;
pub mod transform;

pub use decode::{decode_pbm, read_pbm, Bitmap, DecodeError};
pub use encode::{encode_pbm, write_pbm, EncodeError};
pub use rotate::{rotate, rotate_bytes, rotate_with_request, ErrorKind, RotateError};
pub use transform::{rotate_bitmap, QuarterTurn, RotationError, RotationRequest};
