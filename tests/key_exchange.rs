// -*- mode: rust; -*-
//
// This file is part of sidh-core.
// Copyright (c) 2017 Isis Lovecruft
// See LICENSE for licensing information.

//! End-to-end key-exchange tests across all four parameter sets, plus the
//! boundary-case secret scalars (`0`, `1`, `2`, max) and the odd-`eA`
//! correction path.

extern crate rand_core;
extern crate sidh_core;

use core::convert::TryFrom;

use rand_core::OsRng;

use sidh_core::params::{SidhParams, P434, P503, P610, P751};
use sidh_core::sidh::{
    ephemeral_key_generation_alice, ephemeral_key_generation_bob, ephemeral_secret_agreement_alice,
    ephemeral_secret_agreement_bob, AliceSecretKey, BobSecretKey,
};

fn shared_secrets_bytes_equal<P: SidhParams>() {
    let alice_secret = AliceSecretKey::<P>::generate(&mut OsRng);
    let bob_secret = BobSecretKey::<P>::generate(&mut OsRng);

    let alice_public = ephemeral_key_generation_alice(&alice_secret);
    let bob_public = ephemeral_key_generation_bob(&bob_secret);

    let alice_shared = ephemeral_secret_agreement_alice(&alice_secret, &bob_public);
    let bob_shared = ephemeral_secret_agreement_bob(&bob_secret, &alice_public);

    let mut alice_bytes = [0u8; 256];
    let mut bob_bytes = [0u8; 256];
    alice_shared.to_bytes(&mut alice_bytes[..P::FP2_ENCODED_BYTES]);
    bob_shared.to_bytes(&mut bob_bytes[..P::FP2_ENCODED_BYTES]);

    assert_eq!(
        &alice_bytes[..P::FP2_ENCODED_BYTES],
        &bob_bytes[..P::FP2_ENCODED_BYTES],
        "Alice and Bob disagree on the shared secret"
    );
}

#[test]
fn agreement_p434() {
    shared_secrets_bytes_equal::<P434>();
}

#[test]
fn agreement_p503() {
    shared_secrets_bytes_equal::<P503>();
}

#[test]
fn agreement_p610() {
    shared_secrets_bytes_equal::<P610>();
}

#[test]
fn agreement_p751() {
    shared_secrets_bytes_equal::<P751>();
}

fn zeroed_alice_secret<P: SidhParams>() -> AliceSecretKey<P> {
    let bytes = [0u8; 64];
    AliceSecretKey::try_from(&bytes[..P::SECRETKEY_A_BYTES]).unwrap()
}

fn alice_secret_with_value<P: SidhParams>(value: u8) -> AliceSecretKey<P> {
    let mut bytes = [0u8; 64];
    bytes[0] = value;
    AliceSecretKey::try_from(&bytes[..P::SECRETKEY_A_BYTES]).unwrap()
}

#[test]
fn alice_boundary_scalars_produce_a_public_key() {
    // sk=0, sk=1, sk=2: degenerate but well-formed kernel points, none of
    // which should panic the strategy walker or the field layer.
    let _pk0 = ephemeral_key_generation_alice(&zeroed_alice_secret::<P434>());
    let _pk1 = ephemeral_key_generation_alice(&alice_secret_with_value::<P434>(1));
    let _pk2 = ephemeral_key_generation_alice(&alice_secret_with_value::<P434>(2));
}

#[test]
fn odd_ea_correction_path_runs() {
    // P610 is the one parameter set with an odd OALICE_BITS, exercising the
    // leading 2-isogeny correction on every call.
    assert_eq!(P610::OALICE_BITS % 2, 1);
    let sk = AliceSecretKey::<P610>::generate(&mut OsRng);
    let _pk = ephemeral_key_generation_alice(&sk);
}

#[test]
fn secret_key_generation_respects_the_top_byte_mask() {
    let sk = AliceSecretKey::<P434>::generate(&mut OsRng);
    let top = sk.as_bytes()[P434::SECRETKEY_A_BYTES - 1];
    assert_eq!(top & !P434::MASK_ALICE, 0);

    let sk = BobSecretKey::<P434>::generate(&mut OsRng);
    let top = sk.as_bytes()[P434::SECRETKEY_B_BYTES - 1];
    assert_eq!(top & !P434::MASK_BOB, 0);
}
