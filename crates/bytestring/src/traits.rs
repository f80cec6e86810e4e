// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! The read contract shared by both sequence types.

use core::ops::{Bound, RangeBounds};

use crate::byte_string::ByteString;
use crate::error::ByteStringError;

/// Restartable byte iterator returned by [`ByteOps::bytes`].
pub type Bytes<'a> = core::iter::Copied<core::slice::Iter<'a, u8>>;

/// Pairwise byte combination. Both operands must have the same length.
fn combine<L, R>(left: &L, right: &R, op: fn(u8, u8) -> u8) -> Result<ByteString, ByteStringError>
where
    L: ByteOps + ?Sized,
    R: ByteOps + ?Sized,
{
    let (a, b) = (left.as_bytes(), right.as_bytes());

    if a.len() != b.len() {
        return Err(ByteStringError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    Ok(a.iter().zip(b).map(|(x, y)| op(*x, *y)).collect())
}

/// Read-only and algebraic operations over a byte sequence.
///
/// Everything is implemented on top of [`as_bytes`](ByteOps::as_bytes), so
/// the slicing, equality, and bitwise logic exists in exactly one place and
/// behaves identically regardless of mutability. No method mutates `self` or
/// its operand; every derived sequence is a new owned [`ByteString`].
///
/// The contract is also implemented for `[u8]`, so plain slices participate
/// in bitwise ops, comparison, and append.
pub trait ByteOps {
    /// The raw bytes, in order. This is the sanctioned read path.
    fn as_bytes(&self) -> &[u8];

    /// Number of bytes.
    fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// Returns true if the sequence has zero length.
    fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }

    /// The byte at `index`, or `None` when `index` is out of bounds.
    fn byte_at(&self, index: usize) -> Option<u8> {
        self.as_bytes().get(index).copied()
    }

    /// The single byte of a one-byte sequence.
    ///
    /// # Errors
    ///
    /// [`ByteStringError::NotSingleByte`] when the length is not exactly 1.
    fn ordinal(&self) -> Result<u8, ByteStringError> {
        match self.as_bytes() {
            [byte] => Ok(*byte),
            bytes => Err(ByteStringError::NotSingleByte { len: bytes.len() }),
        }
    }

    /// A new owned sequence covering the intersection of `range` with the
    /// sequence bounds.
    ///
    /// A range that is only partially in bounds is clipped to the maximal
    /// available overlap; a range starting exactly at the end yields an
    /// empty sequence. Only a range starting past the end yields `None`.
    fn slice<R: RangeBounds<usize>>(&self, range: R) -> Option<ByteString> {
        let bytes = self.as_bytes();

        let start = match range.start_bound() {
            Bound::Included(&start) => start,
            Bound::Excluded(&start) => start.saturating_add(1),
            Bound::Unbounded => 0,
        };
        if start > bytes.len() {
            return None;
        }

        let end = match range.end_bound() {
            Bound::Included(&end) => end.saturating_add(1),
            Bound::Excluded(&end) => end,
            Bound::Unbounded => bytes.len(),
        };
        let end = end.clamp(start, bytes.len());

        Some(ByteString::from(&bytes[start..end]))
    }

    /// Up to `count` bytes starting at `start`, clipped to the available
    /// bytes. `None` when `start` is past the end of the sequence.
    fn slice_at(&self, start: usize, count: usize) -> Option<ByteString> {
        self.slice(start..start.saturating_add(count))
    }

    /// A new sequence where every byte `b` becomes `255 - b`. Same length.
    fn complement(&self) -> ByteString {
        self.as_bytes().iter().map(|byte| 255 - byte).collect()
    }

    /// Pairwise XOR with `other`.
    ///
    /// # Errors
    ///
    /// [`ByteStringError::LengthMismatch`] when the lengths differ.
    fn xor<O: ByteOps + ?Sized>(&self, other: &O) -> Result<ByteString, ByteStringError> {
        combine(self, other, |a, b| a ^ b)
    }

    /// Pairwise AND with `other`.
    ///
    /// # Errors
    ///
    /// [`ByteStringError::LengthMismatch`] when the lengths differ.
    fn and<O: ByteOps + ?Sized>(&self, other: &O) -> Result<ByteString, ByteStringError> {
        combine(self, other, |a, b| a & b)
    }

    /// Pairwise OR with `other`.
    ///
    /// # Errors
    ///
    /// [`ByteStringError::LengthMismatch`] when the lengths differ.
    fn or<O: ByteOps + ?Sized>(&self, other: &O) -> Result<ByteString, ByteStringError> {
        combine(self, other, |a, b| a | b)
    }

    /// A fresh iterator over the bytes, left to right.
    ///
    /// Every call restarts from the beginning.
    fn bytes(&self) -> Bytes<'_> {
        self.as_bytes().iter().copied()
    }

    /// Eagerly visits every byte, left to right.
    fn for_each_byte<F: FnMut(u8)>(&self, mut visit: F) {
        for byte in self.bytes() {
            visit(byte);
        }
    }

    /// Lowercase hex rendition, two digits per byte, no separators.
    fn to_hex(&self) -> String {
        hex::encode(self.as_bytes())
    }

    /// Value equality: equal length and pairwise-equal bytes.
    ///
    /// Checks length first and short-circuits at the first mismatching byte.
    /// Sequences of different length are never equal, regardless of content.
    fn eq_bytes<O: ByteOps + ?Sized>(&self, other: &O) -> bool {
        self.as_bytes() == other.as_bytes()
    }

    /// An independent owned mutable copy, sharing no storage with `self`.
    ///
    /// Copying always yields a [`ByteString`], even from an immutable source.
    fn to_byte_string(&self) -> ByteString {
        ByteString::from(self.as_bytes())
    }
}

impl ByteOps for [u8] {
    fn as_bytes(&self) -> &[u8] {
        self
    }
}
