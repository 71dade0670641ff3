//! Bitmap transformation operations.
//!
//! # Coordinate System
//!
//! - Rotation angles are in degrees, positive = clockwise
//! - A counter-clockwise request negates the angle before it is normalized
//! - Origin is top-left corner

mod rotation;

pub use rotation::{rotate_bitmap, QuarterTurn, RotationError, RotationRequest};
