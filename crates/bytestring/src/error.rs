// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for bytestring.

use thiserror::Error;

/// Errors that can occur when operating on byte sequences.
///
/// Every variant is a contract violation surfaced synchronously at the
/// offending call. Nothing is retried or recovered internally; callers
/// validate preconditions up front or handle the error.
///
/// Out-of-range *reads* are not errors: indexing and slicing signal absence
/// through `Option::None` instead.
#[derive(Debug, Error)]
pub enum ByteStringError {
    /// `ordinal()` was called on a sequence whose length is not exactly 1.
    #[error("sequence holds {len} bytes, expected exactly 1")]
    NotSingleByte {
        /// Actual length of the sequence.
        len: usize,
    },

    /// A bitwise operation was attempted between sequences of unequal length.
    #[error("sequence lengths differ: {left} vs {right}")]
    LengthMismatch {
        /// Length of the left operand.
        left: usize,
        /// Length of the right operand.
        right: usize,
    },

    /// An indexed write landed beyond the current bounds.
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// Length of the sequence at the time of the write.
        len: usize,
    },

    /// Malformed hex input: odd length or a non-hex character.
    #[error("invalid hex input: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// Destructive in-place slicing is not part of the contract.
    #[error("in-place destructive slicing is not supported")]
    SliceInPlaceUnsupported,

    /// A reader failed while a stream-consuming constructor drained it.
    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),
}
