// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! ImmutableByteString - fixed-length sequence with in-place secure erase.

use core::fmt;
use std::io::Read;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::byte_string::ByteString;
use crate::error::ByteStringError;
use crate::traits::{ByteOps, Bytes};

/// Fixed-length byte sequence for sensitive data.
///
/// Constructed only by draining a finite reader; no constructor accepts a
/// pre-built sequence or text value, and no mutation entry point exists
/// except [`erase`](ImmutableByteString::erase). The type deliberately
/// implements neither `Clone` nor `Display`, and its `Debug` output is
/// redacted to the length: the one sanctioned way to duplicate the contents
/// is [`to_byte_string`](ByteOps::to_byte_string), which yields a detached
/// mutable copy.
///
/// The storage is zeroized on drop. Erasure is best-effort logical only:
/// the bytes held by this value are overwritten with non-elidable writes,
/// but copies the caller made elsewhere are out of reach.
///
/// # Example
///
/// ```rust
/// use std::io::Cursor;
///
/// use bytestring::{ByteOps, ImmutableByteString};
///
/// let mut key = ImmutableByteString::from_reader(Cursor::new([0xc0, 0xff, 0xee]))?;
/// assert_eq!(key.byte_at(0), Some(0xc0));
///
/// key.erase();
/// assert_eq!(key.as_bytes(), [0, 0, 0]);
/// # Ok::<(), bytestring::ByteStringError>(())
/// ```
#[derive(ZeroizeOnDrop)]
pub struct ImmutableByteString {
    inner: Vec<u8>,
}

impl ImmutableByteString {
    /// Reads `reader` to exhaustion and stores every byte verbatim.
    ///
    /// This is the sole constructor. Blocks until the source reaches
    /// end-of-data; the reader is not retained afterwards.
    ///
    /// # Errors
    ///
    /// [`ByteStringError::Io`] when the underlying read fails.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, ByteStringError> {
        let mut inner = Vec::new();
        reader.read_to_end(&mut inner)?;

        Ok(Self { inner })
    }

    /// Overwrites every byte with 0, in place, preserving length.
    ///
    /// Idempotent and irreversible. All subsequent reads reflect an all-zero
    /// sequence of the original length.
    pub fn erase(&mut self) {
        // Zeroize the slice, not the Vec: the Vec impl resets the length.
        self.inner.as_mut_slice().zeroize();
    }

    /// Returns true when every byte is currently zero.
    pub fn is_erased(&self) -> bool {
        self.inner.iter().all(|byte| *byte == 0)
    }
}

impl ByteOps for ImmutableByteString {
    fn as_bytes(&self) -> &[u8] {
        &self.inner
    }
}

impl<'a> IntoIterator for &'a ImmutableByteString {
    type Item = u8;
    type IntoIter = Bytes<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.bytes()
    }
}

impl PartialEq for ImmutableByteString {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for ImmutableByteString {}

impl PartialEq<ByteString> for ImmutableByteString {
    fn eq(&self, other: &ByteString) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<[u8]> for ImmutableByteString {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl fmt::Debug for ImmutableByteString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImmutableByteString")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}
