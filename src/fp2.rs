// -*- mode: rust; -*-
//
// This file is part of sidh-core.
// Copyright (c) 2017 Isis Lovecruft
// See LICENSE for licensing information.

//! Quadratic extension field `GF(p^2) = GF(p)[i] / (i^2 + 1)` arithmetic.

use core::fmt;

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroize;

use crate::fp::Fp;
use crate::params::SidhParams;

/// An element `a + b*i` of `GF(p^2)`.
#[derive(Copy, Clone)]
pub struct Fp2<P: SidhParams> {
    /// The real part.
    pub a: Fp<P>,
    /// The `i`-coefficient.
    pub b: Fp<P>,
}

impl<P: SidhParams> fmt::Debug for Fp2<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Fp2(..)")
    }
}

impl<P: SidhParams> Zeroize for Fp2<P> {
    fn zeroize(&mut self) {
        self.a.zeroize();
        self.b.zeroize();
    }
}

impl<P: SidhParams> ConstantTimeEq for Fp2<P> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.a.ct_eq(&other.a) & self.b.ct_eq(&other.b)
    }
}

impl<P: SidhParams> ConditionallySelectable for Fp2<P> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Fp2 {
            a: Fp::conditional_select(&a.a, &b.a, choice),
            b: Fp::conditional_select(&a.b, &b.b, choice),
        }
    }
}

impl<P: SidhParams> PartialEq for Fp2<P> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}
impl<P: SidhParams> Eq for Fp2<P> {}

impl<P: SidhParams> Fp2<P> {
    /// The additive identity, `0`.
    pub fn zero() -> Self {
        Fp2 { a: Fp::zero(), b: Fp::zero() }
    }

    /// The multiplicative identity, `1`.
    pub fn one() -> Self {
        Fp2 { a: Fp::one(), b: Fp::zero() }
    }

    /// `(a0+b0 i) + (a1+b1 i)`.
    pub fn add(&self, other: &Self) -> Self {
        Fp2 { a: self.a.add(&other.a), b: self.b.add(&other.b) }
    }

    /// `(a0+b0 i) - (a1+b1 i)`.
    pub fn sub(&self, other: &Self) -> Self {
        Fp2 { a: self.a.sub(&other.a), b: self.b.sub(&other.b) }
    }

    /// `-(a+bi)`.
    pub fn negate(&self) -> Self {
        Fp2 { a: self.a.negate(), b: self.b.negate() }
    }

    /// `(a0+b0 i)(a1+b1 i) = (a0 a1 - b0 b1) + (a0 b1 + a1 b0) i`, computed with
    /// the classic three-multiplication (Karatsuba) trick used by the reference
    /// `fp2mul_mont`: `t0 = a0 a1`, `t1 = b0 b1`, `t2 = (a0+b0)(a1+b1)`, giving
    /// the cross term as `t2 - t0 - t1` for one fewer `Fp` multiplication.
    pub fn mul(&self, other: &Self) -> Self {
        let t0 = self.a.mul(&other.a);
        let t1 = self.b.mul(&other.b);
        let t2 = self.a.add(&self.b).mul(&other.a.add(&other.b));
        let real = t0.sub(&t1);
        let imag = t2.sub(&t0).sub(&t1);
        Fp2 { a: real, b: imag }
    }

    /// `(a+bi)^2`.
    pub fn square(&self) -> Self {
        self.mul(self)
    }

    /// Multiplies by the non-residue `i`: `(a+bi)*i = -b + a*i`.
    pub fn mul_by_i(&self) -> Self {
        Fp2 { a: self.b.negate(), b: self.a }
    }

    /// `(a+bi)^{-1} = (a-bi) / (a^2+b^2)`.
    pub fn inverse(&self) -> Self {
        let norm = self.a.square().add(&self.b.square());
        let norm_inv = norm.inverse();
        Fp2 { a: self.a.mul(&norm_inv), b: self.b.negate().mul(&norm_inv) }
    }

    /// Little-endian byte encoding `{a, b}` with `a` least-significant, per the
    /// wire format shared by all four primes (`FP2_ENCODED_BYTES` total).
    pub fn to_bytes(&self, out: &mut [u8]) {
        let half = out.len() / 2;
        self.a.to_canonical_bytes(&mut out[..half]);
        self.b.to_canonical_bytes(&mut out[half..]);
    }

    /// Decodes the little-endian `{a, b}` wire encoding produced by [`Fp2::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let half = bytes.len() / 2;
        Fp2 { a: Fp::from_canonical_bytes(&bytes[..half]), b: Fp::from_canonical_bytes(&bytes[half..]) }
    }

    /// Builds an element directly from two already-Montgomery-form limb
    /// slices, as carried in [`crate::params`]'s per-prime constant tables.
    pub(crate) fn from_montgomery_words(a: &[u64], b: &[u64]) -> Self {
        Fp2 { a: Fp::from_limbs(a), b: Fp::from_limbs(b) }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::params::P434;

    #[test]
    fn one_times_one() {
        let one = Fp2::<P434>::one();
        assert_eq!(one.mul(&one), one);
    }

    #[test]
    fn inverse_roundtrip() {
        let one = Fp2::<P434>::one();
        let two = one.add(&one);
        let inv = two.inverse();
        assert_eq!(two.mul(&inv), one);
    }

    #[test]
    fn mul_by_i_matches_explicit_i() {
        let one = Fp2::<P434>::one();
        let i = Fp2 { a: Fp::zero(), b: Fp::one() };
        assert_eq!(one.mul_by_i(), i);
    }
}
