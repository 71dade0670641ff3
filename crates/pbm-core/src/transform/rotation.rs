//! Lossless quarter-turn rotation of bitmaps.
//!
//! Only multiples of 90° are supported, so every output pixel maps to exactly
//! one source pixel and no interpolation is needed.
//!
//! # Algorithm
//!
//! The rotation uses inverse mapping: for each pixel `(dx, dy)` in the output
//! bitmap we compute the source pixel it comes from. For a `w x h` source:
//!
//! ```text
//! None   dst w x h   src = (dx,         dy)
//! Cw90   dst h x w   src = (dy,         h - 1 - dx)
//! Half   dst w x h   src = (w - 1 - dx, h - 1 - dy)
//! Cw270  dst h x w   src = (w - 1 - dy, dx)
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::decode::Bitmap;

/// Errors for invalid rotation requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RotationError {
    /// The angle is not a multiple of 90 degrees.
    #[error("number of degrees ({0}) is not a multiple of a quarter turn")]
    NotQuarterTurn(i64),
}

/// A clockwise rotation by a whole number of quarter turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum QuarterTurn {
    /// No rotation.
    #[default]
    None,
    /// Rotate 90 degrees clockwise.
    Cw90,
    /// Rotate 180 degrees.
    Half,
    /// Rotate 270 degrees clockwise (90 CCW).
    Cw270,
}

impl QuarterTurn {
    /// Build from a signed number of clockwise quarter turns.
    ///
    /// Any integer is accepted; only its value modulo 4 matters.
    pub fn from_steps(steps: i64) -> Self {
        match steps.rem_euclid(4) {
            0 => QuarterTurn::None,
            1 => QuarterTurn::Cw90,
            2 => QuarterTurn::Half,
            _ => QuarterTurn::Cw270,
        }
    }

    /// Number of clockwise quarter turns (0-3).
    pub fn steps(self) -> u8 {
        match self {
            QuarterTurn::None => 0,
            QuarterTurn::Cw90 => 1,
            QuarterTurn::Half => 2,
            QuarterTurn::Cw270 => 3,
        }
    }

    /// Clockwise angle in degrees (0, 90, 180 or 270).
    pub fn degrees(self) -> u16 {
        u16::from(self.steps()) * 90
    }

    /// Returns true if this rotation swaps width and height.
    #[inline]
    pub fn swaps_dimensions(self) -> bool {
        matches!(self, QuarterTurn::Cw90 | QuarterTurn::Cw270)
    }

    /// The rotation that undoes this one.
    pub fn inverse(self) -> Self {
        Self::from_steps(-i64::from(self.steps()))
    }

    /// This rotation followed by `next`.
    pub fn then(self, next: QuarterTurn) -> Self {
        Self::from_steps(i64::from(self.steps()) + i64::from(next.steps()))
    }
}

/// A requested rotation as given by a caller.
///
/// `degrees` may be any multiple of 90, negative or beyond a full turn.
/// When `counter_clockwise` is set the angle is negated before folding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RotationRequest {
    pub degrees: i64,
    #[serde(default)]
    pub counter_clockwise: bool,
}

impl Default for RotationRequest {
    fn default() -> Self {
        Self {
            degrees: 90,
            counter_clockwise: false,
        }
    }
}

impl RotationRequest {
    pub fn new(degrees: i64, counter_clockwise: bool) -> Self {
        Self {
            degrees,
            counter_clockwise,
        }
    }

    /// Normalize the request to a clockwise quarter turn.
    ///
    /// # Errors
    ///
    /// Returns [`RotationError::NotQuarterTurn`] if `degrees` is not a
    /// multiple of 90.
    pub fn quarter_turn(&self) -> Result<QuarterTurn, RotationError> {
        if self.degrees % 90 != 0 {
            return Err(RotationError::NotQuarterTurn(self.degrees));
        }

        let steps = self.degrees / 90;
        Ok(QuarterTurn::from_steps(if self.counter_clockwise {
            -steps
        } else {
            steps
        }))
    }
}

/// Rotate a bitmap clockwise by the given quarter turn.
///
/// Always produces a new bitmap; for [`QuarterTurn::Cw90`] and
/// [`QuarterTurn::Cw270`] its width and height are swapped. Comments are
/// carried over unchanged.
pub fn rotate_bitmap(bitmap: &Bitmap, turn: QuarterTurn) -> Bitmap {
    let (src_w, src_h) = (bitmap.width, bitmap.height);
    let (dst_w, dst_h) = if turn.swaps_dimensions() {
        (src_h, src_w)
    } else {
        (src_w, src_h)
    };

    let mut pixels = Vec::with_capacity(bitmap.pixels.len());

    for dy in 0..dst_h {
        for dx in 0..dst_w {
            let (sx, sy) = match turn {
                QuarterTurn::None => (dx, dy),
                QuarterTurn::Cw90 => (dy, src_h - 1 - dx),
                QuarterTurn::Half => (src_w - 1 - dx, src_h - 1 - dy),
                QuarterTurn::Cw270 => (src_w - 1 - dy, dx),
            };
            pixels.push(bitmap.get(sx, sy));
        }
    }

    Bitmap::new(dst_w, dst_h, pixels).with_comments(bitmap.comments.clone())
}
