// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Length-aware byte sequences with a shared read contract and secure erase.
//!
//! This crate provides two owned byte-sequence value types that share one
//! behavioral contract, [`ByteOps`]: indexed access, sub-range slicing,
//! bitwise combination, hexadecimal encoding/decoding, iteration, and
//! equality. All input is treated as raw bytes; no charset transcoding
//! happens anywhere.
//!
//! # Sequence Types
//!
//! ## ByteString
//!
//! Growable, in-place-writable byte sequence:
//! - Constructed from bytes, strings, other sequences, hex text, or a reader
//! - Mutated through [`set_byte_at`](ByteString::set_byte_at),
//!   [`push`](ByteString::push), and [`append`](ByteString::append)
//! - Plain value semantics, no special teardown
//!
//! ## ImmutableByteString
//!
//! Fixed-length sequence for sensitive data:
//! - Constructed only by draining a finite [`std::io::Read`] source
//! - Exposes no mutation entry point except [`erase`](ImmutableByteString::erase),
//!   which overwrites the storage with zeroes in place
//! - Storage is zeroized again when the value is dropped
//!
//! # Example: ByteString
//!
//! ```rust
//! use bytestring::{ByteOps, ByteString};
//!
//! let pad = ByteString::from_hex("c0ffee")?;
//! let msg = ByteString::from("abc");
//!
//! let masked = msg.xor(&pad)?;
//! assert_eq!(masked.xor(&pad)?, msg);
//! # Ok::<(), bytestring::ByteStringError>(())
//! ```
//!
//! # Example: ImmutableByteString
//!
//! ```rust
//! use std::io::Cursor;
//!
//! use bytestring::{ByteOps, ImmutableByteString};
//!
//! let mut secret = ImmutableByteString::from_reader(Cursor::new(b"letest"))?;
//! assert_eq!(secret.to_hex(), "6c6574657374");
//!
//! secret.erase();
//! assert_eq!(secret.len(), 6);
//! assert!(secret.is_erased());
//! # Ok::<(), bytestring::ByteStringError>(())
//! ```

#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod byte_string;
mod error;
mod immutable;
mod traits;

pub use byte_string::ByteString;
pub use error::ByteStringError;
pub use immutable::ImmutableByteString;
pub use traits::{ByteOps, Bytes};
