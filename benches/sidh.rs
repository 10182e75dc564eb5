// -*- mode: rust; -*-
//
// This file is part of sidh-core.
// Copyright (c) 2017 Isis Lovecruft
// See LICENSE for licensing information.
//
// Authors:
// - Isis Agora Lovecruft <isis@patternsinthevoid.net>

//! Benchmark ephemeral key generation and secret agreement for both roles,
//! at the 434-bit parameter set.

#[macro_use]
extern crate criterion;
extern crate rand_core;
extern crate sidh_core;

use criterion::Criterion;

use rand_core::OsRng;

use sidh_core::params::P434;
use sidh_core::sidh::{
    ephemeral_key_generation_alice, ephemeral_key_generation_bob, ephemeral_secret_agreement_alice,
    ephemeral_secret_agreement_bob, AliceSecretKey, BobSecretKey,
};

fn bench_alice_keygen(c: &mut Criterion) {
    c.bench_function("alice_keygen_p434", |b| {
        b.iter(|| {
            let sk = AliceSecretKey::<P434>::generate(&mut OsRng);
            ephemeral_key_generation_alice(&sk)
        })
    });
}

fn bench_bob_keygen(c: &mut Criterion) {
    c.bench_function("bob_keygen_p434", |b| {
        b.iter(|| {
            let sk = BobSecretKey::<P434>::generate(&mut OsRng);
            ephemeral_key_generation_bob(&sk)
        })
    });
}

fn bench_secret_agreement(c: &mut Criterion) {
    let alice_secret = AliceSecretKey::<P434>::generate(&mut OsRng);
    let bob_secret = BobSecretKey::<P434>::generate(&mut OsRng);
    let alice_public = ephemeral_key_generation_alice(&alice_secret);
    let bob_public = ephemeral_key_generation_bob(&bob_secret);

    c.bench_function("alice_secret_agreement_p434", move |b| {
        b.iter(|| ephemeral_secret_agreement_alice(&alice_secret, &bob_public))
    });
}

fn bench_secret_agreement_bob(c: &mut Criterion) {
    let alice_secret = AliceSecretKey::<P434>::generate(&mut OsRng);
    let bob_secret = BobSecretKey::<P434>::generate(&mut OsRng);
    let alice_public = ephemeral_key_generation_alice(&alice_secret);
    let bob_public = ephemeral_key_generation_bob(&bob_secret);

    c.bench_function("bob_secret_agreement_p434", move |b| {
        b.iter(|| ephemeral_secret_agreement_bob(&bob_secret, &alice_public))
    });
}

criterion_group!{
    name = sidh_benches;
    config = Criterion::default();
    targets =
        bench_alice_keygen,
        bench_bob_keygen,
        bench_secret_agreement,
        bench_secret_agreement_bob,
}
criterion_main!{
    sidh_benches,
}
