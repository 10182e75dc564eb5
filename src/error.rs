// -*- mode: rust; -*-
//
// This file is part of sidh-core.
// Copyright (c) 2017 Isis Lovecruft
// See LICENSE for licensing information.

//! The one error surface this crate has: fixed-width byte decoding at the
//! public API boundary. Everything past that boundary (the isogeny walk
//! itself) never fails — a malformed-but-correctly-sized peer public key
//! silently produces a shared secret neither side will agree on, by design.

use core::fmt;

/// Failure decoding a fixed-width byte slice into a [`crate::sidh::PublicKey`],
/// [`crate::sidh::SharedSecret`], or secret key.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DecodeError {
    /// The slice length didn't match the per-prime encoded width.
    InvalidLength {
        /// The width this type encodes to for the given prime.
        expected: usize,
        /// The length of the slice that was actually passed in.
        found: usize,
    },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::InvalidLength { expected, found } => {
                write!(f, "expected a {}-byte slice, found {}", expected, found)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DecodeError {}
