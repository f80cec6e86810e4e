// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Property tests for the algebraic laws of the shared contract.

use std::io::Cursor;

use proptest::collection::vec;
use proptest::prelude::*;

use crate::byte_string::ByteString;
use crate::error::ByteStringError;
use crate::immutable::ImmutableByteString;
use crate::traits::ByteOps;

fn byte_vec() -> impl Strategy<Value = Vec<u8>> {
    vec(any::<u8>(), 0..64)
}

fn equal_length_pair() -> impl Strategy<Value = (Vec<u8>, Vec<u8>)> {
    (0usize..64).prop_flat_map(|len| (vec(any::<u8>(), len), vec(any::<u8>(), len)))
}

proptest! {
    #[test]
    fn xor_is_self_inverse((a, b) in equal_length_pair()) {
        let a = ByteString::from(a);
        let b = ByteString::from(b);

        let round_trip = a
            .xor(&b)
            .expect("Failed to xor()")
            .xor(&b)
            .expect("Failed to xor()");

        prop_assert_eq!(round_trip, a);
    }

    #[test]
    fn xor_is_commutative((a, b) in equal_length_pair()) {
        let a = ByteString::from(a);
        let b = ByteString::from(b);

        prop_assert_eq!(
            a.xor(&b).expect("Failed to xor()"),
            b.xor(&a).expect("Failed to xor()")
        );
    }

    #[test]
    fn complement_is_an_involution(bytes in byte_vec()) {
        let s = ByteString::from(bytes);

        prop_assert_eq!(s.complement().complement(), s);
    }

    #[test]
    fn complement_preserves_length(bytes in byte_vec()) {
        let s = ByteString::from(bytes);

        prop_assert_eq!(s.complement().len(), s.len());
    }

    #[test]
    fn bitwise_ops_reject_unequal_lengths(a in byte_vec(), b in byte_vec()) {
        prop_assume!(a.len() != b.len());

        let a = ByteString::from(a);
        let b = ByteString::from(b);

        prop_assert!(matches!(a.xor(&b), Err(ByteStringError::LengthMismatch { .. })), "xor should reject unequal lengths");
        prop_assert!(matches!(a.and(&b), Err(ByteStringError::LengthMismatch { .. })), "and should reject unequal lengths");
        prop_assert!(matches!(a.or(&b), Err(ByteStringError::LengthMismatch { .. })), "or should reject unequal lengths");
    }

    #[test]
    fn equality_is_reflexive_and_symmetric((a, b) in equal_length_pair()) {
        let a = ByteString::from(a);
        let b = ByteString::from(b);

        prop_assert!(a.eq_bytes(&a));
        prop_assert_eq!(a.eq_bytes(&b), b.eq_bytes(&a));
    }

    #[test]
    fn unequal_lengths_are_never_equal(bytes in byte_vec(), extra in any::<u8>()) {
        let short = ByteString::from(bytes);
        let mut long = short.clone();
        long.push(extra);

        prop_assert!(!short.eq_bytes(&long));
        prop_assert_ne!(short, long);
    }

    #[test]
    fn slice_at_returns_maximal_overlap(
        bytes in byte_vec(),
        start in 0..80usize,
        count in 0..80usize
    ) {
        let s = ByteString::from(bytes.clone());

        match s.slice_at(start, count) {
            Some(slice) => {
                prop_assert!(start <= bytes.len());
                prop_assert_eq!(slice.len(), count.min(bytes.len() - start));
                prop_assert_eq!(slice.as_bytes(), &bytes[start..start + slice.len()]);
            }
            None => prop_assert!(start > bytes.len()),
        }
    }

    #[test]
    fn hex_round_trip(bytes in byte_vec()) {
        let s = ByteString::from(bytes);
        let decoded = ByteString::from_hex(&s.to_hex()).expect("Failed to from_hex()");

        prop_assert_eq!(decoded, s);
    }

    #[test]
    fn mutating_a_copy_never_affects_the_source(bytes in byte_vec(), byte in any::<u8>()) {
        let source = ByteString::from(bytes.clone());
        let mut copy = source.to_byte_string();

        copy.push(byte);
        copy.set_byte_at(0, byte).expect("Failed to set_byte_at()");

        prop_assert_eq!(source.as_bytes(), bytes.as_slice());
    }

    #[test]
    fn erase_zeroes_every_byte_preserving_length(bytes in byte_vec()) {
        let mut s = ImmutableByteString::from_reader(Cursor::new(bytes.clone()))
            .expect("Failed to from_reader()");

        s.erase();

        prop_assert_eq!(s.len(), bytes.len());
        prop_assert!(s.is_erased());
    }

    #[test]
    fn ordinal_succeeds_exactly_on_single_byte_sequences(bytes in byte_vec()) {
        let s = ByteString::from(bytes.clone());

        match s.ordinal() {
            Ok(byte) => {
                prop_assert_eq!(bytes.len(), 1);
                prop_assert_eq!(byte, bytes[0]);
            }
            Err(ByteStringError::NotSingleByte { len }) => {
                prop_assert_eq!(len, bytes.len());
                prop_assert_ne!(bytes.len(), 1);
            }
            Err(other) => prop_assert!(false, "unexpected error: {other}"),
        }
    }

    #[test]
    fn iteration_reconstructs_the_sequence(bytes in byte_vec()) {
        let s = ByteString::from(bytes.clone());
        let rebuilt: ByteString = s.bytes().collect();

        prop_assert_eq!(bytes, s.bytes().collect::<Vec<u8>>());
        prop_assert_eq!(rebuilt, s);
    }
}
