// -*- mode: rust; -*-
//
// This file is part of sidh-core.
// Copyright (c) 2017 Isis Lovecruft
// See LICENSE for licensing information.

//! Degree-2, degree-3 and degree-4 isogeny computation and point evaluation
//! (Costello-Longa-Naehrig formulas), the leaves of the optimal-strategy
//! isogeny walk in [`crate::strategy`].

use crate::curve::ProjectivePoint;
use crate::fp2::Fp2;
use crate::params::SidhParams;

/// Coefficients of a degree-2 isogeny, computed from its kernel point.
pub struct TwoIsogeny<P: SidhParams> {
    x2: Fp2<P>,
    z2: Fp2<P>,
}

impl<P: SidhParams> TwoIsogeny<P> {
    /// `get_2_isog`: builds the degree-2 isogeny with kernel `<k>`, `k` of
    /// order exactly 2, and the codomain curve coefficients `(A24plus:C24)`
    /// of the image curve.
    pub fn compute(k: &ProjectivePoint<P>) -> (Self, Fp2<P>, Fp2<P>) {
        let a24plus = k.x.square();
        let c24 = k.z.square();
        let a24plus = c24.sub(&a24plus);
        (TwoIsogeny { x2: k.x, z2: k.z }, a24plus, c24)
    }

    /// `eval_2_isog`: pushes a point `Q` through this isogeny.
    pub fn eval(&self, q: &ProjectivePoint<P>) -> ProjectivePoint<P> {
        let t0 = self.x2.add(&self.z2);
        let t1 = self.x2.sub(&self.z2);
        let t2 = q.x.add(&q.z);
        let t3 = q.x.sub(&q.z);
        let t0 = t0.mul(&t3);
        let t1 = t1.mul(&t2);
        let t2 = t0.add(&t1);
        let t3 = t0.sub(&t1);
        let x = q.x.mul(&t2);
        let z = q.z.mul(&t3);
        ProjectivePoint { x, z }
    }
}

/// Coefficients of a degree-3 isogeny.
pub struct ThreeIsogeny<P: SidhParams> {
    k1: Fp2<P>,
    k2: Fp2<P>,
}

impl<P: SidhParams> ThreeIsogeny<P> {
    /// `get_3_isog`: builds the degree-3 isogeny with kernel `<k>`, `k` of
    /// order exactly 3, and the codomain coefficients `(A24minus:A24plus)`.
    pub fn compute(k: &ProjectivePoint<P>) -> (Self, Fp2<P>, Fp2<P>) {
        let k1 = k.x.sub(&k.z);
        let t0 = k1.square();
        let k2 = k.x.add(&k.z);
        let t1 = k2.square();
        let t2 = t0.add(&t1);
        let t3 = k1.add(&k2);
        let t3 = t3.square();
        let t3 = t3.sub(&t2);
        let t2 = t1.add(&t3);
        let t3 = t3.add(&t0);
        let t4 = t3.add(&t0);
        let t4 = t4.add(&t4);
        let t4 = t1.add(&t4);
        let a24minus = t2.mul(&t4);
        let t4 = t1.add(&t2);
        let t4 = t4.add(&t4);
        let t4 = t0.add(&t4);
        let a24plus = t3.mul(&t4);

        (ThreeIsogeny { k1, k2 }, a24minus, a24plus)
    }

    /// `eval_3_isog`: pushes a point `Q` through this isogeny.
    pub fn eval(&self, q: &ProjectivePoint<P>) -> ProjectivePoint<P> {
        let t0 = q.x.add(&q.z);
        let t1 = q.x.sub(&q.z);
        let t2 = t0.mul(&self.k1);
        let t3 = t1.mul(&self.k2);
        let t4 = t3.add(&t2);
        let t0 = t3.sub(&t2);
        let t4 = t4.square();
        let t0 = t0.square();
        let x = q.x.mul(&t4);
        let z = q.z.mul(&t0);
        ProjectivePoint { x, z }
    }
}

/// Coefficients of a degree-4 isogeny.
pub struct FourIsogeny<P: SidhParams> {
    k1: Fp2<P>,
    k2: Fp2<P>,
    k3: Fp2<P>,
}

impl<P: SidhParams> FourIsogeny<P> {
    /// `get_4_isog`: builds the degree-4 isogeny with kernel `<k>`, `k` of
    /// order exactly 4, and the codomain coefficients `(A24plus:C24)`.
    pub fn compute(k: &ProjectivePoint<P>) -> (Self, Fp2<P>, Fp2<P>) {
        let k2 = k.x.sub(&k.z);
        let k3 = k.x.add(&k.z);
        let k1 = k.z.square();
        let k1 = k1.add(&k1);
        let c24 = k1.square();
        let k1 = k1.add(&k1);
        let a24plus = k.x.square();
        let a24plus = a24plus.add(&a24plus);
        let a24plus = a24plus.square();

        (FourIsogeny { k1, k2, k3 }, a24plus, c24)
    }

    /// `eval_4_isog`: pushes a point `Q` through this isogeny.
    pub fn eval(&self, q: &ProjectivePoint<P>) -> ProjectivePoint<P> {
        let t0 = q.x.add(&q.z);
        let t1 = q.x.sub(&q.z);
        let x = t0.mul(&self.k2);
        let z = t1.mul(&self.k3);
        let t2 = t0.mul(&t1);
        let t2 = t2.mul(&self.k1);
        let t3 = x.add(&z);
        let z = x.sub(&z);
        let t3 = t3.square();
        let z = z.square();
        let x = t3.add(&t2);
        let t2 = z.sub(&t2);
        let x = x.mul(&z);
        let z = t3.mul(&t2);
        ProjectivePoint { x, z }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::params::P434;

    #[test]
    fn two_isogeny_preserves_identity_like_shape() {
        let k = ProjectivePoint::<P434>::from_affine_x(Fp2::one());
        let (isog, _a24plus, _c24) = TwoIsogeny::compute(&k);
        let q = ProjectivePoint { x: Fp2::one().add(&Fp2::one()), z: Fp2::one() };
        let _image = isog.eval(&q);
    }

    #[test]
    fn three_isogeny_runs() {
        let k = ProjectivePoint::<P434> {
            x: Fp2::one().add(&Fp2::one()),
            z: Fp2::one(),
        };
        let (isog, _a24minus, _a24plus) = ThreeIsogeny::compute(&k);
        let q = ProjectivePoint { x: Fp2::one(), z: Fp2::one() };
        let _image = isog.eval(&q);
    }

    #[test]
    fn four_isogeny_runs() {
        let k = ProjectivePoint::<P434> {
            x: Fp2::one().add(&Fp2::one()),
            z: Fp2::one(),
        };
        let (isog, _a24plus, _c24) = FourIsogeny::compute(&k);
        let q = ProjectivePoint { x: Fp2::one(), z: Fp2::one() };
        let _image = isog.eval(&q);
    }
}
