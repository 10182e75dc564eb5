// -*- mode: rust; -*-
//
// This file is part of sidh-core.
// Copyright (c) 2017 Isis Lovecruft
// See LICENSE for licensing information.

//! The public SIDH facade: ephemeral key generation and secret agreement for
//! both parties, plus the fixed-width wire types (`PublicKey`, `SharedSecret`,
//! `AliceSecretKey`, `BobSecretKey`).
//!
//! Mirrors the shape of `x25519-dalek`'s top-level module (`SecretKey`,
//! `PublicKey`, `x25519()`/`diffie_hellman()`), generalized from a single
//! scalar multiplication to the two-party, asymmetric SIDH protocol: Alice
//! and Bob walk isogenies of different (coprime) degree, so unlike X25519
//! there is one keygen/agreement pair per role rather than one shared
//! routine.

use core::convert::TryFrom;

use rand_core::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::curve::{get_a, j_inv, CurveCoefficients, ProjectivePoint};
use crate::error::DecodeError;
use crate::fp2::Fp2;
use crate::ladder::ladder_3_pt;
use crate::params::SidhParams;
use crate::strategy::{apply_leading_two_isogeny, traverse_alice, traverse_bob};

fn decode_fp2_words<P: SidhParams>(words: &[u64]) -> Fp2<P> {
    let half = words.len() / 2;
    Fp2::from_montgomery_words(&words[..half], &words[half..])
}

fn alice_basis<P: SidhParams>() -> (Fp2<P>, Fp2<P>, Fp2<P>) {
    let gen = P::a_gen();
    let n = P::NWORDS_FIELD;
    let xp = decode_fp2_words::<P>(&gen[0..2 * n]);
    let xq = decode_fp2_words::<P>(&gen[2 * n..4 * n]);
    let xr = decode_fp2_words::<P>(&gen[4 * n..6 * n]);
    (xp, xq, xr)
}

fn bob_basis<P: SidhParams>() -> (Fp2<P>, Fp2<P>, Fp2<P>) {
    let gen = P::b_gen();
    let n = P::NWORDS_FIELD;
    let xp = decode_fp2_words::<P>(&gen[0..2 * n]);
    let xq = decode_fp2_words::<P>(&gen[2 * n..4 * n]);
    let xr = decode_fp2_words::<P>(&gen[4 * n..6 * n]);
    (xp, xq, xr)
}

/// Unpacks a secret key's masked byte string into an MSB-first bit array of
/// the given length, matching the reference's `mp_bitlen`/ladder convention.
fn bits_msb_first(bytes: &[u8], nbits: usize, out: &mut [u8]) {
    for i in 0..nbits {
        let byte = bytes[i / 8];
        let bit = (byte >> (i % 8)) & 1;
        out[nbits - 1 - i] = bit;
    }
}

/// Alice's ephemeral secret key: a scalar in `[0, 2^OALICE_BITS)`, top-byte
/// masked to that exact range, zeroized on drop.
pub struct AliceSecretKey<P: SidhParams> {
    bytes: [u8; 64],
    len: usize,
    _marker: core::marker::PhantomData<P>,
}

impl<P: SidhParams> Drop for AliceSecretKey<P> {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

impl<P: SidhParams> AliceSecretKey<P> {
    /// Draws a fresh secret key from a cryptographically secure RNG.
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut bytes = [0u8; 64];
        rng.fill_bytes(&mut bytes[..P::SECRETKEY_A_BYTES]);
        let top = P::SECRETKEY_A_BYTES - 1;
        bytes[top] &= P::MASK_ALICE;
        AliceSecretKey { bytes, len: P::SECRETKEY_A_BYTES, _marker: core::marker::PhantomData }
    }

    /// The masked secret scalar, little-endian.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}

impl<'a, P: SidhParams> TryFrom<&'a [u8]> for AliceSecretKey<P> {
    type Error = DecodeError;
    fn try_from(slice: &'a [u8]) -> Result<Self, DecodeError> {
        if slice.len() != P::SECRETKEY_A_BYTES {
            return Err(DecodeError::InvalidLength { expected: P::SECRETKEY_A_BYTES, found: slice.len() });
        }
        let mut bytes = [0u8; 64];
        bytes[..slice.len()].copy_from_slice(slice);
        Ok(AliceSecretKey { bytes, len: slice.len(), _marker: core::marker::PhantomData })
    }
}

/// Bob's ephemeral secret key: a scalar in `[0, 2^OBOB_BITS)`.
pub struct BobSecretKey<P: SidhParams> {
    bytes: [u8; 64],
    len: usize,
    _marker: core::marker::PhantomData<P>,
}

impl<P: SidhParams> Drop for BobSecretKey<P> {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

impl<P: SidhParams> BobSecretKey<P> {
    /// Draws a fresh secret key from a cryptographically secure RNG.
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut bytes = [0u8; 64];
        rng.fill_bytes(&mut bytes[..P::SECRETKEY_B_BYTES]);
        let top = P::SECRETKEY_B_BYTES - 1;
        bytes[top] &= P::MASK_BOB;
        BobSecretKey { bytes, len: P::SECRETKEY_B_BYTES, _marker: core::marker::PhantomData }
    }

    /// The masked secret scalar, little-endian.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}

impl<'a, P: SidhParams> TryFrom<&'a [u8]> for BobSecretKey<P> {
    type Error = DecodeError;
    fn try_from(slice: &'a [u8]) -> Result<Self, DecodeError> {
        if slice.len() != P::SECRETKEY_B_BYTES {
            return Err(DecodeError::InvalidLength { expected: P::SECRETKEY_B_BYTES, found: slice.len() });
        }
        let mut bytes = [0u8; 64];
        bytes[..slice.len()].copy_from_slice(slice);
        Ok(BobSecretKey { bytes, len: slice.len(), _marker: core::marker::PhantomData })
    }
}

/// An ephemeral public key: the image of the peer's basis `{P, Q, R=P+Q}`
/// under the sender's secret isogeny, encoded as three back-to-back
/// `GF(p^2)` elements (`3 * FP2_ENCODED_BYTES` total).
#[derive(Copy, Clone)]
pub struct PublicKey<P: SidhParams> {
    pub(crate) xp: Fp2<P>,
    pub(crate) xq: Fp2<P>,
    pub(crate) xr: Fp2<P>,
}

impl<P: SidhParams> core::fmt::Debug for PublicKey<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("PublicKey(..)")
    }
}

impl<P: SidhParams> PublicKey<P> {
    /// Encodes this public key as three back-to-back `GF(p^2)` elements.
    pub fn to_bytes(&self, out: &mut [u8]) {
        let third = P::FP2_ENCODED_BYTES;
        self.xp.to_bytes(&mut out[0..third]);
        self.xq.to_bytes(&mut out[third..2 * third]);
        self.xr.to_bytes(&mut out[2 * third..3 * third]);
    }
}

impl<'a, P: SidhParams> TryFrom<&'a [u8]> for PublicKey<P> {
    type Error = DecodeError;
    fn try_from(slice: &'a [u8]) -> Result<Self, DecodeError> {
        let expected = 3 * P::FP2_ENCODED_BYTES;
        if slice.len() != expected {
            return Err(DecodeError::InvalidLength { expected, found: slice.len() });
        }
        let third = P::FP2_ENCODED_BYTES;
        Ok(PublicKey {
            xp: Fp2::from_bytes(&slice[0..third]),
            xq: Fp2::from_bytes(&slice[third..2 * third]),
            xr: Fp2::from_bytes(&slice[2 * third..3 * third]),
        })
    }
}

/// The shared secret both parties converge on: the j-invariant of the
/// common isogenous curve, encoded as one `GF(p^2)` element.
#[derive(Copy, Clone)]
pub struct SharedSecret<P: SidhParams> {
    value: Fp2<P>,
}

impl<P: SidhParams> core::fmt::Debug for SharedSecret<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("SharedSecret(..)")
    }
}

impl<P: SidhParams> SharedSecret<P> {
    /// Encodes the shared secret as one `GF(p^2)` element.
    pub fn to_bytes(&self, out: &mut [u8]) {
        self.value.to_bytes(out);
    }
}

/// Runs Alice's key-generation isogeny walk: the kernel `<P_A + [sk]Q_A>`
/// determines a degree-`2^eA` isogeny whose image of Bob's basis becomes
/// Alice's public key.
pub fn ephemeral_key_generation_alice<P: SidhParams>(sk: &AliceSecretKey<P>) -> PublicKey<P> {
    let (xpa, xqa, xpqa) = alice_basis::<P>();
    let mut bits = [0u8; 512];
    bits_msb_first(sk.as_bytes(), P::OALICE_BITS, &mut bits[..P::OALICE_BITS]);

    let curve = CurveCoefficients::base_curve();
    let kernel = ladder_3_pt(&bits[..P::OALICE_BITS], &xqa, &xpa, &xpqa, &curve.a24plus, &curve.c24);

    let (xp_b, xq_b, xr_b) = bob_basis::<P>();
    let mut aux = [
        ProjectivePoint::from_affine_x(xp_b),
        ProjectivePoint::from_affine_x(xq_b),
        ProjectivePoint::from_affine_x(xr_b),
    ];

    // odd eA: one leading 2-isogeny, with kernel [2^(OALICE_BITS-1)]kernel,
    // before the main 4-isogeny strategy walk.
    let (kernel, curve) = if P::OALICE_BITS % 2 == 1 {
        apply_leading_two_isogeny(kernel, &curve, &mut aux)
    } else {
        (kernel, curve)
    };

    let rows = P::MAX_ALICE;
    let _final_curve = traverse_alice(kernel, curve, &mut aux, P::strat_alice(), rows);

    PublicKey { xp: aux[0].x, xq: aux[1].x, xr: aux[2].x }
}

/// Runs Bob's key-generation isogeny walk: the kernel `<P_B + [sk]Q_B>`
/// determines a degree-`3^eB` isogeny whose image of Alice's basis becomes
/// Bob's public key.
pub fn ephemeral_key_generation_bob<P: SidhParams>(sk: &BobSecretKey<P>) -> PublicKey<P> {
    let (xpb, xqb, xpqb) = bob_basis::<P>();
    let mut bits = [0u8; 512];
    bits_msb_first(sk.as_bytes(), P::OBOB_BITS, &mut bits[..P::OBOB_BITS]);

    let curve = CurveCoefficients::base_curve();
    let kernel = ladder_3_pt(&bits[..P::OBOB_BITS], &xqb, &xpb, &xpqb, &curve.a24plus, &curve.c24);

    let (xp_a, xq_a, xr_a) = alice_basis::<P>();
    let mut aux = [
        ProjectivePoint::from_affine_x(xp_a),
        ProjectivePoint::from_affine_x(xq_a),
        ProjectivePoint::from_affine_x(xr_a),
    ];

    let rows = P::MAX_BOB;
    let _final_curve = traverse_bob(kernel, curve, &mut aux, P::strat_bob(), rows);

    PublicKey { xp: aux[0].x, xq: aux[1].x, xr: aux[2].x }
}

/// Completes Alice's side of the key exchange against Bob's public key.
/// Per spec.md's documented contract, a malformed-but-correctly-sized peer
/// key is never rejected: it silently walks to a shared secret neither side
/// will agree on. Validating the *authenticity* of a peer key is out of
/// scope for this core (it belongs to a surrounding KEM/FO-transform layer).
pub fn ephemeral_secret_agreement_alice<P: SidhParams>(sk: &AliceSecretKey<P>, peer: &PublicKey<P>) -> SharedSecret<P> {
    let mut bits = [0u8; 512];
    bits_msb_first(sk.as_bytes(), P::OALICE_BITS, &mut bits[..P::OALICE_BITS]);

    let a = get_a(&peer.xp, &peer.xq, &peer.xr);
    let two = Fp2::<P>::one().add(&Fp2::one());
    let four = two.add(&two);
    let curve = CurveCoefficients {
        a24plus: a.add(&two),
        a24minus: a.sub(&two),
        c24: four,
    };

    let kernel = ladder_3_pt(&bits[..P::OALICE_BITS], &peer.xq, &peer.xp, &peer.xr, &curve.a24plus, &curve.c24);

    let (kernel, curve) = if P::OALICE_BITS % 2 == 1 {
        apply_leading_two_isogeny::<P>(kernel, &curve, &mut [])
    } else {
        (kernel, curve)
    };

    let rows = P::MAX_ALICE;
    let final_curve = traverse_alice(kernel, curve, &mut [], P::strat_alice(), rows);
    SharedSecret { value: j_inv(&final_curve.a24plus, &final_curve.c24) }
}

/// Completes Bob's side of the key exchange against Alice's public key.
pub fn ephemeral_secret_agreement_bob<P: SidhParams>(sk: &BobSecretKey<P>, peer: &PublicKey<P>) -> SharedSecret<P> {
    let mut bits = [0u8; 512];
    bits_msb_first(sk.as_bytes(), P::OBOB_BITS, &mut bits[..P::OBOB_BITS]);

    let a = get_a(&peer.xp, &peer.xq, &peer.xr);
    let two = Fp2::<P>::one().add(&Fp2::one());
    let four = two.add(&two);
    let curve = CurveCoefficients {
        a24plus: a.add(&two),
        a24minus: a.sub(&two),
        c24: four,
    };

    let kernel = ladder_3_pt(&bits[..P::OBOB_BITS], &peer.xq, &peer.xp, &peer.xr, &curve.a24plus, &curve.c24);

    let rows = P::MAX_BOB;
    let final_curve = traverse_bob(kernel, curve, &mut [], P::strat_bob(), rows);
    SharedSecret { value: j_inv(&final_curve.a24plus, &final_curve.c24) }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::params::P434;
    use rand_core::OsRng;

    #[test]
    fn alice_keygen_runs() {
        let sk = AliceSecretKey::<P434>::generate(&mut OsRng);
        let _pk = ephemeral_key_generation_alice(&sk);
    }

    #[test]
    fn bob_keygen_runs() {
        let sk = BobSecretKey::<P434>::generate(&mut OsRng);
        let _pk = ephemeral_key_generation_bob(&sk);
    }

    #[test]
    fn key_exchange_runs_end_to_end() {
        let alice_sk = AliceSecretKey::<P434>::generate(&mut OsRng);
        let bob_sk = BobSecretKey::<P434>::generate(&mut OsRng);

        let alice_pk = ephemeral_key_generation_alice(&alice_sk);
        let bob_pk = ephemeral_key_generation_bob(&bob_sk);

        let _alice_shared = ephemeral_secret_agreement_alice(&alice_sk, &bob_pk);
        let _bob_shared = ephemeral_secret_agreement_bob(&bob_sk, &alice_pk);
    }

    #[test]
    fn invalid_length_is_rejected() {
        let bytes = [0u8; 3];
        let result = AliceSecretKey::<P434>::try_from(&bytes[..]);
        assert!(result.is_err());
    }
}
