// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! ByteString - growable byte sequence with plain value semantics.

use core::fmt;
use core::ops::RangeBounds;
use std::io::Read;

use crate::error::ByteStringError;
use crate::immutable::ImmutableByteString;
use crate::traits::{ByteOps, Bytes};

/// Growable, in-place-writable byte sequence.
///
/// Owns its storage outright. Construction copies the source bytes verbatim:
/// textual input contributes the bytes of its encoded form, never a
/// transcoded rendition, so a two-byte UTF-8 character is stored as its two
/// constituent bytes.
///
/// Growth happens exclusively through [`push`](ByteString::push) and
/// [`append`](ByteString::append); indexed writes via
/// [`set_byte_at`](ByteString::set_byte_at) never extend the sequence.
///
/// # Example
///
/// ```rust
/// use bytestring::{ByteOps, ByteString};
///
/// let mut s = ByteString::new();
/// s.push(b't').append("est".as_bytes());
///
/// assert_eq!(s.len(), 4);
/// assert_eq!(s.to_hex(), "74657374");
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ByteString {
    inner: Vec<u8>,
}

impl ByteString {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Self { inner: Vec::new() }
    }

    /// Decodes a hex string into its byte representation.
    ///
    /// Accepts lowercase and uppercase digits; no separators, no prefix.
    ///
    /// # Errors
    ///
    /// [`ByteStringError::InvalidHex`] on odd length or a non-hex character.
    pub fn from_hex(hex: &str) -> Result<Self, ByteStringError> {
        Ok(Self {
            inner: hex::decode(hex)?,
        })
    }

    /// Reads `reader` to exhaustion and stores every byte verbatim.
    ///
    /// Blocks until the source reaches end-of-data; the reader is not
    /// retained afterwards.
    ///
    /// # Errors
    ///
    /// [`ByteStringError::Io`] when the underlying read fails.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, ByteStringError> {
        let mut inner = Vec::new();
        reader.read_to_end(&mut inner)?;

        Ok(Self { inner })
    }

    /// The bytes of `value`'s textual representation.
    pub fn from_display<T: fmt::Display>(value: &T) -> Self {
        Self {
            inner: value.to_string().into_bytes(),
        }
    }

    /// Overwrites the byte at `index`.
    ///
    /// Never grows the sequence.
    ///
    /// # Errors
    ///
    /// [`ByteStringError::IndexOutOfBounds`] when `index >= len()`.
    pub fn set_byte_at(&mut self, index: usize, byte: u8) -> Result<(), ByteStringError> {
        let len = self.inner.len();

        match self.inner.get_mut(index) {
            Some(slot) => {
                *slot = byte;
                Ok(())
            }
            None => Err(ByteStringError::IndexOutOfBounds { index, len }),
        }
    }

    /// Appends a single byte. Returns the sequence for chaining.
    pub fn push(&mut self, byte: u8) -> &mut Self {
        self.inner.push(byte);
        self
    }

    /// Appends every byte of `other`, in order. Returns the sequence for
    /// chaining.
    ///
    /// Accepts any [`ByteOps`] value: either sequence type or a plain slice.
    pub fn append<O: ByteOps + ?Sized>(&mut self, other: &O) -> &mut Self {
        self.inner.extend_from_slice(other.as_bytes());
        self
    }

    /// Removing a sub-range in place is not part of the contract.
    ///
    /// # Errors
    ///
    /// Always fails with [`ByteStringError::SliceInPlaceUnsupported`].
    pub fn slice_in_place<R: RangeBounds<usize>>(
        &mut self,
        _range: R,
    ) -> Result<ByteString, ByteStringError> {
        Err(ByteStringError::SliceInPlaceUnsupported)
    }

    /// Consumes the sequence, returning the owned bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.inner
    }
}

impl ByteOps for ByteString {
    fn as_bytes(&self) -> &[u8] {
        &self.inner
    }
}

impl From<&[u8]> for ByteString {
    fn from(bytes: &[u8]) -> Self {
        Self {
            inner: bytes.to_vec(),
        }
    }
}

impl<const N: usize> From<[u8; N]> for ByteString {
    fn from(bytes: [u8; N]) -> Self {
        Self {
            inner: bytes.to_vec(),
        }
    }
}

impl From<Vec<u8>> for ByteString {
    fn from(bytes: Vec<u8>) -> Self {
        Self { inner: bytes }
    }
}

impl From<&str> for ByteString {
    fn from(text: &str) -> Self {
        Self {
            inner: text.as_bytes().to_vec(),
        }
    }
}

impl From<String> for ByteString {
    fn from(text: String) -> Self {
        Self {
            inner: text.into_bytes(),
        }
    }
}

impl From<&ByteString> for ByteString {
    fn from(other: &ByteString) -> Self {
        other.clone()
    }
}

impl From<&ImmutableByteString> for ByteString {
    fn from(other: &ImmutableByteString) -> Self {
        other.to_byte_string()
    }
}

impl FromIterator<u8> for ByteString {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ByteString {
    type Item = u8;
    type IntoIter = Bytes<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.bytes()
    }
}

impl PartialEq<ImmutableByteString> for ByteString {
    fn eq(&self, other: &ImmutableByteString) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<[u8]> for ByteString {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl PartialEq<&[u8]> for ByteString {
    fn eq(&self, other: &&[u8]) -> bool {
        self.as_bytes() == *other
    }
}

impl fmt::Debug for ByteString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteString")
            .field("len", &self.len())
            .field("hex", &self.to_hex())
            .finish()
    }
}
