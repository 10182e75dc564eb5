// -*- mode: rust; -*-
//
// This file is part of sidh-core.
// Copyright (c) 2017 Isis Lovecruft
// See LICENSE for licensing information.
//
// Authors:
// - Isis Agora Lovecruft <isis@patternsinthevoid.net>

//! Supersingular isogeny Diffie-Hellman (SIDH) key exchange
//!
//! A pure-Rust implementation of the SIDH isogeny walk: Montgomery-curve
//! arithmetic, 2/3/4-isogeny computation, an optimal-strategy tree walker,
//! and the ephemeral key generation / secret agreement operations both
//! parties run, generic over four NIST/SIKE-submission primes of shape
//! `p = 2^eA * 3^eB - 1` (434, 503, 610 and 751 bits).
//!
//! # Examples
//!
//! Unlike X25519, SIDH is asymmetric in its two roles — by long-standing
//! convention, "Alice" walks 2-isogenies and "Bob" walks 3-isogenies — so
//! there are distinct key types and distinct keygen/agreement functions per
//! role rather than one shared routine:
//!
//! ```
//! use sidh_core::params::P434;
//! use sidh_core::sidh::{
//!     AliceSecretKey, BobSecretKey,
//!     ephemeral_key_generation_alice, ephemeral_key_generation_bob,
//!     ephemeral_secret_agreement_alice, ephemeral_secret_agreement_bob,
//! };
//! use rand_core::OsRng;
//!
//! let alice_secret = AliceSecretKey::<P434>::generate(&mut OsRng);
//! let alice_public = ephemeral_key_generation_alice(&alice_secret);
//!
//! let bob_secret = BobSecretKey::<P434>::generate(&mut OsRng);
//! let bob_public = ephemeral_key_generation_bob(&bob_secret);
//!
//! let alice_shared = ephemeral_secret_agreement_alice(&alice_secret, &bob_public);
//! let bob_shared = ephemeral_secret_agreement_bob(&bob_secret, &alice_public);
//!
//! let mut alice_bytes = [0u8; 2 * (434 / 8 + 1)];
//! let mut bob_bytes = [0u8; 2 * (434 / 8 + 1)];
//! alice_shared.to_bytes(&mut alice_bytes);
//! bob_shared.to_bytes(&mut bob_bytes);
//! assert_eq!(&alice_bytes[..], &bob_bytes[..]);
//! ```
//!
//! A malformed-but-correctly-sized peer public key is never rejected by this
//! crate: the isogeny walk has no failure mode of its own, so it silently
//! produces a shared secret the two parties simply won't agree on. Policing
//! the authenticity of a peer's public key (the SIDH-to-SIKE FO transform, a
//! KEM wrapper, a signature) is explicitly out of scope — see `DESIGN.md`.

#![no_std]
#![deny(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

extern crate rand_core;
extern crate subtle;
extern crate zeroize;

#[cfg(feature = "serde")]
extern crate our_serde;

#[cfg(test)]
extern crate bincode;

pub mod error;
pub mod fp;
pub mod fp2;
pub mod curve;
pub mod isogeny;
pub mod ladder;
pub mod params;
pub mod strategy;
pub mod sidh;

pub use crate::error::DecodeError;
pub use crate::sidh::{
    ephemeral_key_generation_alice, ephemeral_key_generation_bob, ephemeral_secret_agreement_alice,
    ephemeral_secret_agreement_bob, AliceSecretKey, BobSecretKey, PublicKey, SharedSecret,
};
