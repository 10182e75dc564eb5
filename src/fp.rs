// -*- mode: rust; -*-
//
// This file is part of sidh-core.
// Copyright (c) 2017 Isis Lovecruft
// See LICENSE for licensing information.

//! Prime-field arithmetic in Montgomery form, generic over the active prime.
//!
//! Every [`Fp`] is a fixed-width `[u64; MAX_NWORDS_FIELD]` limb array holding a
//! value in `[0, p)` in Montgomery representation (`x * R mod p`, `R = 2^(64*NWORDS_FIELD)`).
//! Limbs past `P::NWORDS_FIELD` are always zero; arithmetic never reads or writes them,
//! so the same code runs unchanged for all four primes.

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroize;

use crate::params::SidhParams;

/// Upper bound on 64-bit limbs needed by any supported prime (sized for p751).
pub const MAX_NWORDS_FIELD: usize = 12;

/// A field element of `GF(p)`, in Montgomery form, for the prime fixed by `P`.
#[derive(Copy, Clone)]
pub struct Fp<P: SidhParams> {
    pub(crate) words: [u64; MAX_NWORDS_FIELD],
    _marker: core::marker::PhantomData<P>,
}

impl<P: SidhParams> fmt::Debug for Fp<P> {
    /// Never prints the underlying limbs: field elements sit on the path of a
    /// secret-dependent computation and have no business in a log or panic message.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Fp(..)")
    }
}

impl<P: SidhParams> Zeroize for Fp<P> {
    fn zeroize(&mut self) {
        self.words.zeroize();
    }
}

impl<P: SidhParams> ConstantTimeEq for Fp<P> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.words.ct_eq(&other.words)
    }
}

impl<P: SidhParams> ConditionallySelectable for Fp<P> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut words = [0u64; MAX_NWORDS_FIELD];
        for i in 0..MAX_NWORDS_FIELD {
            words[i] = u64::conditional_select(&a.words[i], &b.words[i], choice);
        }
        Fp { words, _marker: core::marker::PhantomData }
    }
}

impl<P: SidhParams> PartialEq for Fp<P> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}
impl<P: SidhParams> Eq for Fp<P> {}

impl<P: SidhParams> Fp<P> {
    /// The additive identity, `0`.
    pub fn zero() -> Self {
        Fp { words: [0u64; MAX_NWORDS_FIELD], _marker: core::marker::PhantomData }
    }

    /// The multiplicative identity, `1`, already in Montgomery form.
    pub fn one() -> Self {
        Self::from_raw_words(P::montgomery_one())
    }

    fn from_raw_words(src: [u64; MAX_NWORDS_FIELD]) -> Self {
        Fp { words: src, _marker: core::marker::PhantomData }
    }

    /// Builds a field element from a little-endian limb slice already in
    /// Montgomery form, zero-padding up to `MAX_NWORDS_FIELD`.
    pub(crate) fn from_limbs(limbs: &[u64]) -> Self {
        let mut words = [0u64; MAX_NWORDS_FIELD];
        words[..limbs.len()].copy_from_slice(limbs);
        Fp { words, _marker: core::marker::PhantomData }
    }

    /// Converts an ordinary (non-Montgomery) little-endian byte value into
    /// Montgomery form by multiplying with `R^2` and reducing.
    pub fn from_canonical_bytes(bytes: &[u8]) -> Self {
        let mut words = [0u64; MAX_NWORDS_FIELD];
        for (i, chunk) in bytes.chunks(8).enumerate() {
            let mut buf = [0u8; 8];
            buf[..chunk.len()].copy_from_slice(chunk);
            words[i] = u64::from_le_bytes(buf);
        }
        let plain = Fp::from_raw_words(words);
        let r2 = Fp::from_raw_words(P::montgomery_r2());
        plain.mul(&r2)
    }

    /// Converts out of Montgomery form and serializes little-endian into `out`,
    /// which must be at least `FP2_ENCODED_BYTES / 2` bytes long (see [`SidhParams::FP2_ENCODED_BYTES`]).
    pub fn to_canonical_bytes(&self, out: &mut [u8]) {
        // MontMul(x*R, 1) = x*R*1*R^{-1} = x: the standard way out of Montgomery form.
        let plain_one = Fp::<P>::from_limbs(&[1]);
        let canonical = self.mul(&plain_one);
        for (i, word) in canonical.words[..P::NWORDS_FIELD].iter().enumerate() {
            let bytes = word.to_le_bytes();
            let start = i * 8;
            if start >= out.len() {
                break;
            }
            let end = core::cmp::min(start + 8, out.len());
            out[start..end].copy_from_slice(&bytes[..end - start]);
        }
    }

    fn prime() -> [u64; MAX_NWORDS_FIELD] {
        let mut out = [0u64; MAX_NWORDS_FIELD];
        let p = P::prime();
        out[..p.len()].copy_from_slice(&p);
        out
    }

    /// `-p^{-1} mod 2^64`, the standard CIOS Montgomery constant. Computed via
    /// the usual Newton-iteration trick for inverting an odd word mod 2^64.
    fn inv_word() -> u64 {
        let p0 = Self::prime()[0];
        let mut x = p0; // x == p0^{-1} mod 2^4 already, Newton doubles precision each step
        for _ in 0..5 {
            x = x.wrapping_mul(2u64.wrapping_sub(p0.wrapping_mul(x)));
        }
        x.wrapping_neg()
    }

    /// Schoolbook CIOS Montgomery multiplication, constant-time in the number
    /// of active limbs (`P::NWORDS_FIELD`, a compile-time-fixed public constant).
    pub fn mul(&self, other: &Self) -> Self {
        let n = P::NWORDS_FIELD;
        let p = Self::prime();
        let np0 = Self::inv_word();
        let mut t = [0u64; MAX_NWORDS_FIELD + 2];

        for i in 0..n {
            let mut carry: u128 = 0;
            for j in 0..n {
                let prod = (self.words[i] as u128) * (other.words[j] as u128)
                    + (t[j] as u128)
                    + carry;
                t[j] = prod as u64;
                carry = prod >> 64;
            }
            let sum = (t[n] as u128) + carry;
            t[n] = sum as u64;
            t[n + 1] = (sum >> 64) as u64;

            let m = t[0].wrapping_mul(np0);
            let mut carry: u128 = ((m as u128) * (p[0] as u128) + (t[0] as u128)) >> 64;
            for j in 1..n {
                let sum = (m as u128) * (p[j] as u128) + (t[j] as u128) + carry;
                t[j - 1] = sum as u64;
                carry = sum >> 64;
            }
            let sum = (t[n] as u128) + carry;
            t[n - 1] = sum as u64;
            t[n] = t[n + 1].wrapping_add((sum >> 64) as u64);
        }

        let mut out = [0u64; MAX_NWORDS_FIELD];
        out[..n].copy_from_slice(&t[..n]);
        let mut result = Fp::from_raw_words(out);
        result.final_subtraction();
        result
    }

    /// Squares `self`. Grounded on the same CIOS step; kept as plain `mul(self, self)`
    /// since the field layer here favours clarity over the dedicated squaring speedup
    /// the reference assembly uses.
    pub fn square(&self) -> Self {
        self.mul(self)
    }

    /// Conditional, constant-time final subtraction of `p` (at most one is ever needed
    /// after a CIOS product of two reduced operands).
    fn final_subtraction(&mut self) {
        let n = P::NWORDS_FIELD;
        let p = Self::prime();
        let mut borrow: i128 = 0;
        let mut reduced = [0u64; MAX_NWORDS_FIELD];
        for i in 0..n {
            let diff = (self.words[i] as i128) - (p[i] as i128) - borrow;
            reduced[i] = diff as u64;
            borrow = if diff < 0 { 1 } else { 0 };
        }
        let take = Choice::from(1u8 - borrow as u8);
        for i in 0..n {
            self.words[i] = u64::conditional_select(&self.words[i], &reduced[i], take);
        }
    }

    /// Adds two field elements, reducing modulo `p`.
    pub fn add(&self, other: &Self) -> Self {
        let n = P::NWORDS_FIELD;
        let mut sum = [0u64; MAX_NWORDS_FIELD];
        let mut carry: u128 = 0;
        for i in 0..n {
            let s = (self.words[i] as u128) + (other.words[i] as u128) + carry;
            sum[i] = s as u64;
            carry = s >> 64;
        }
        let mut result = Fp::from_raw_words(sum);
        result.final_subtraction();
        result
    }

    /// Subtracts two field elements, reducing modulo `p`.
    pub fn sub(&self, other: &Self) -> Self {
        let n = P::NWORDS_FIELD;
        let p = Self::prime();
        let mut diff = [0u64; MAX_NWORDS_FIELD];
        let mut borrow: i128 = 0;
        for i in 0..n {
            let d = (self.words[i] as i128) - (other.words[i] as i128) - borrow;
            diff[i] = d as u64;
            borrow = if d < 0 { 1 } else { 0 };
        }
        let need_add = Choice::from(borrow as u8);
        let mut carry: u128 = 0;
        let mut corrected = [0u64; MAX_NWORDS_FIELD];
        for i in 0..n {
            let s = (diff[i] as u128) + (p[i] as u128) + carry;
            corrected[i] = s as u64;
            carry = s >> 64;
        }
        for i in 0..n {
            diff[i] = u64::conditional_select(&diff[i], &corrected[i], need_add);
        }
        Fp::from_raw_words(diff)
    }

    /// `-self mod p`.
    pub fn negate(&self) -> Self {
        Self::zero().sub(self)
    }

    /// Constant-time inverse via Fermat's little theorem: `self^(p-2) mod p`.
    /// No secret-dependent branch: the square-and-multiply walk reads only the
    /// (public) bits of `p - 2`.
    pub fn inverse(&self) -> Self {
        let p = Self::prime();
        let n = P::NWORDS_FIELD;
        // p - 2, little-endian words
        let mut exp = p;
        let mut borrow: i128 = 2;
        for i in 0..n {
            let d = (exp[i] as i128) - borrow;
            if d < 0 {
                exp[i] = (d + (1i128 << 64)) as u64;
                borrow = 1;
            } else {
                exp[i] = d as u64;
                borrow = 0;
            }
        }

        let mut result = Self::one();
        for i in (0..n).rev() {
            let word = exp[i];
            for b in (0..64).rev() {
                result = result.square();
                if (word >> b) & 1 == 1 {
                    result = result.mul(self);
                }
            }
        }
        result
    }
}

impl<P: SidhParams> Add for &Fp<P> {
    type Output = Fp<P>;
    fn add(self, other: &Fp<P>) -> Fp<P> {
        Fp::add(self, other)
    }
}
impl<P: SidhParams> Sub for &Fp<P> {
    type Output = Fp<P>;
    fn sub(self, other: &Fp<P>) -> Fp<P> {
        Fp::sub(self, other)
    }
}
impl<P: SidhParams> Mul for &Fp<P> {
    type Output = Fp<P>;
    fn mul(self, other: &Fp<P>) -> Fp<P> {
        Fp::mul(self, other)
    }
}
impl<P: SidhParams> Neg for &Fp<P> {
    type Output = Fp<P>;
    fn neg(self) -> Fp<P> {
        Fp::negate(self)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::params::P434;

    #[test]
    fn one_times_one_is_one() {
        let one = Fp::<P434>::one();
        assert_eq!(one.mul(&one), one);
    }

    #[test]
    fn add_sub_roundtrip() {
        let one = Fp::<P434>::one();
        let two = one.add(&one);
        assert_eq!(two.sub(&one), one);
    }

    #[test]
    fn inverse_of_one_is_one() {
        let one = Fp::<P434>::one();
        assert_eq!(one.inverse(), one);
    }

    #[test]
    fn self_inverse_roundtrip() {
        let one = Fp::<P434>::one();
        let two = one.add(&one);
        let inv = two.inverse();
        assert_eq!(two.mul(&inv), one);
    }
}
