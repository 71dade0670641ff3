//! End-to-end rotation of plain PBM streams.
//!
//! Control flow is linear: validate the request, decode the whole input,
//! rotate, encode. Nothing is written before decoding has fully succeeded.
//! A request that folds to no rotation copies the input through unchanged.

use std::io::{self, Read, Write};

use thiserror::Error;

use crate::decode::{read_pbm, DecodeError};
use crate::encode::{write_pbm, EncodeError};
use crate::transform::{rotate_bitmap, QuarterTurn, RotationError, RotationRequest};

/// Coarse classification of a [`RotateError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The rotation request itself is invalid.
    InvalidArgument,
    /// The input is not a well-formed plain PBM image.
    Format,
    /// Reading the input or writing the output failed.
    Io,
}

/// Errors from [`rotate`], tagged with the stage that failed.
#[derive(Debug, Error)]
pub enum RotateError {
    #[error("invalid rotation")]
    InvalidArgument(#[from] RotationError),

    #[error("could not decode image")]
    Decode(#[from] DecodeError),

    #[error("could not encode image")]
    Encode(#[from] EncodeError),

    #[error("could not copy image")]
    Io(#[from] io::Error),
}

impl RotateError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RotateError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            RotateError::Decode(DecodeError::Io(_))
            | RotateError::Encode(EncodeError::Io(_))
            | RotateError::Io(_) => ErrorKind::Io,
            RotateError::Decode(_) | RotateError::Encode(_) => ErrorKind::Format,
        }
    }
}

/// Rotate the plain PBM image read from `input` and write it to `output`.
///
/// `degrees` must be a multiple of 90; it is negated first when
/// `counter_clockwise` is set.
///
/// # Errors
///
/// See [`ErrorKind`] for the classes of failure. On an invalid request or a
/// decode failure nothing is written to `output`.
pub fn rotate<W: Write, R: Read>(
    output: W,
    input: R,
    degrees: i64,
    counter_clockwise: bool,
) -> Result<(), RotateError> {
    rotate_with_request(output, input, RotationRequest::new(degrees, counter_clockwise))
}

/// Same as [`rotate`], taking a [`RotationRequest`].
pub fn rotate_with_request<W: Write, R: Read>(
    mut output: W,
    mut input: R,
    request: RotationRequest,
) -> Result<(), RotateError> {
    let turn = request.quarter_turn()?;

    if turn == QuarterTurn::None {
        log::debug!("{} degrees folds to no rotation, copying input", request.degrees);
        io::copy(&mut input, &mut output)?;
        output.flush()?;
        return Ok(());
    }

    let bitmap = read_pbm(input)?;
    log::debug!(
        "rotating {}x{} bitmap {} degrees clockwise",
        bitmap.width,
        bitmap.height,
        turn.degrees()
    );

    let rotated = rotate_bitmap(&bitmap, turn);
    write_pbm(output, &rotated)?;
    Ok(())
}

/// Rotate an in-memory plain PBM image.
pub fn rotate_bytes(input: &[u8], request: RotationRequest) -> Result<Vec<u8>, RotateError> {
    let mut output = Vec::with_capacity(input.len());
    rotate_with_request(&mut output, input, request)?;
    Ok(output)
}
