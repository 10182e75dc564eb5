// -*- mode: rust; -*-
//
// This file is part of sidh-core.
// Copyright (c) 2017 Isis Lovecruft
// See LICENSE for licensing information.

//! The optimal-strategy isogeny-tree walker: given a kernel point of smooth
//! order `l^e`, computes the full isogeny of degree `l^e` one `l`-isogeny
//! step at a time, while pushing a caller-supplied set of auxiliary points
//! (the peer's basis images) through every step along the way.
//!
//! The strategy array encodes, for each node of the binary addition-chain
//! tree, how many doublings/triplings to perform before branching versus how
//! many to defer — the same tree shape as the reference `strat_Alice` /
//! `strat_Bob` tables now carried in [`crate::params`]. A node is visited by
//! pushing the current point onto a small deferred stack and continuing to
//! descend; once a leaf degree-`l` kernel is reached, the corresponding
//! isogeny is computed and every point still on the stack (plus the caller's
//! auxiliary points) is evaluated through it.

use crate::curve::{x_dble, x_tple, CurveCoefficients, ProjectivePoint};
use crate::fp2::Fp2;
use crate::isogeny::{FourIsogeny, ThreeIsogeny, TwoIsogeny};
use crate::params::SidhParams;

/// Upper bound on the deferred-point stack depth. Every published prime's
/// `MAX_INT_POINTS_ALICE`/`MAX_INT_POINTS_BOB` is `<= 10` (see
/// `crate::params`); 16 leaves headroom without tying this module to a
/// const-generic array size.
const MAX_STACK: usize = 16;

struct PointStack<P: SidhParams> {
    points: [ProjectivePoint<P>; MAX_STACK],
    indices: [usize; MAX_STACK],
    len: usize,
}

impl<P: SidhParams> PointStack<P> {
    fn new() -> Self {
        let filler = ProjectivePoint { x: Fp2::zero(), z: Fp2::zero() };
        PointStack { points: [filler; MAX_STACK], indices: [0; MAX_STACK], len: 0 }
    }

    fn push(&mut self, point: ProjectivePoint<P>, index: usize) {
        debug_assert!(self.len < MAX_STACK, "strategy walker exceeded its deferred-point stack capacity");
        self.points[self.len] = point;
        self.indices[self.len] = index;
        self.len += 1;
    }

    fn pop(&mut self) -> (ProjectivePoint<P>, usize) {
        debug_assert!(self.len > 0, "strategy walker popped an empty deferred-point stack");
        self.len -= 1;
        (self.points[self.len], self.indices[self.len])
    }
}

impl<P: SidhParams> Clone for ProjectivePoint<P> {
    fn clone(&self) -> Self {
        *self
    }
}

/// Walks Alice's side (degree `2^eA`), evaluating `aux` (the peer's basis
/// images, typically `[phiP, phiQ, phiP-Q]` or `[psiP, psiQ, psiP-Q]`) at
/// every step. `kernel` must have order exactly `2^eA`; `strategy` is
/// `P::strat_alice()`; `eA` is `P::OALICE_BITS` rounded down to the nearest
/// even value the strategy table assumes (the odd-`eA` correction, when the
/// exponent is odd, is applied by the caller via one extra leading 2-isogeny
/// before this walk begins — see `crate::sidh`).
pub fn traverse_alice<P: SidhParams>(
    kernel: ProjectivePoint<P>,
    curve: CurveCoefficients<P>,
    aux: &mut [ProjectivePoint<P>],
    strategy: &[u32],
    rows: usize,
) -> CurveCoefficients<P> {
    let mut stack: PointStack<P> = PointStack::new();
    let mut curve = curve;
    let mut current = kernel;
    let mut index = 0usize;
    let mut ii = 0usize;

    for row in 1..rows {
        while index < rows - row {
            stack.push(current, index);
            let m = strategy[ii] as usize;
            ii += 1;
            current = x_dble(&current, &curve.a24plus, &curve.c24, 2 * m);
            index += m;
        }

        let (isogeny, a24plus, c24) = FourIsogeny::compute(&current);
        curve = CurveCoefficients { a24plus, a24minus: curve.a24minus, c24 };
        for point in aux.iter_mut() {
            *point = isogeny.eval(point);
        }
        for slot in 0..stack.len {
            stack.points[slot] = isogeny.eval(&stack.points[slot]);
        }

        let (point, idx) = stack.pop();
        current = point;
        index = idx;
    }

    let (isogeny, a24plus, c24) = FourIsogeny::compute(&current);
    curve = CurveCoefficients { a24plus, a24minus: curve.a24minus, c24 };
    for point in aux.iter_mut() {
        *point = isogeny.eval(point);
    }
    curve
}

/// Walks Bob's side (degree `3^eB`) using repeated triplings and 3-isogeny
/// leaves, mirroring [`traverse_alice`] with `l = 3`.
pub fn traverse_bob<P: SidhParams>(
    kernel: ProjectivePoint<P>,
    curve: CurveCoefficients<P>,
    aux: &mut [ProjectivePoint<P>],
    strategy: &[u32],
    rows: usize,
) -> CurveCoefficients<P> {
    let mut stack: PointStack<P> = PointStack::new();
    let mut curve = curve;
    let mut current = kernel;
    let mut index = 0usize;
    let mut ii = 0usize;

    for row in 1..rows {
        while index < rows - row {
            stack.push(current, index);
            let m = strategy[ii] as usize;
            ii += 1;
            current = x_tple(&current, &curve.a24minus, &curve.a24plus, m);
            index += m;
        }

        let (isogeny, a24minus, a24plus) = ThreeIsogeny::compute(&current);
        curve = CurveCoefficients { a24plus, a24minus, c24: curve.c24 };
        for point in aux.iter_mut() {
            *point = isogeny.eval(point);
        }
        for slot in 0..stack.len {
            stack.points[slot] = isogeny.eval(&stack.points[slot]);
        }

        let (point, idx) = stack.pop();
        current = point;
        index = idx;
    }

    let (isogeny, a24minus, a24plus) = ThreeIsogeny::compute(&current);
    curve = CurveCoefficients { a24plus, a24minus, c24: curve.c24 };
    for point in aux.iter_mut() {
        *point = isogeny.eval(point);
    }
    curve
}

/// Applies the leading, odd-`OALICE_BITS`-only 2-isogeny correction that
/// precedes the main 4-isogeny strategy walk: the reference's
/// `xDBLe(R, S, A24plus, C24, OALICE_BITS-1)` followed by `get_2_isog`/
/// `eval_2_isog`. `kernel` is Alice's full-order secret kernel point on the
/// current curve; `S = [2^(OALICE_BITS-1)]kernel` has order exactly 2 and is
/// the actual kernel of this 2-isogeny (not a fixed closed-form map).
pub fn apply_leading_two_isogeny<P: SidhParams>(
    kernel: ProjectivePoint<P>,
    curve: &CurveCoefficients<P>,
    aux: &mut [ProjectivePoint<P>],
) -> (ProjectivePoint<P>, CurveCoefficients<P>) {
    let order_two_point = x_dble(&kernel, &curve.a24plus, &curve.c24, P::OALICE_BITS - 1);
    let (isogeny, a24plus, c24) = TwoIsogeny::compute(&order_two_point);
    for point in aux.iter_mut() {
        *point = isogeny.eval(point);
    }
    let image_kernel = isogeny.eval(&kernel);
    let a24minus = a24plus.sub(&c24);
    (image_kernel, CurveCoefficients { a24plus, a24minus, c24 })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::params::P434;

    #[test]
    fn bob_strategy_is_well_formed() {
        let strat = P434::strat_bob();
        let sum: u32 = strat.iter().sum();
        assert_eq!(sum as usize, P434::MAX_BOB - 1);
    }

    #[test]
    fn alice_strategy_is_well_formed() {
        let strat = P434::strat_alice();
        let sum: u32 = strat.iter().sum();
        assert_eq!(sum as usize, P434::MAX_ALICE - 1);
    }

    #[test]
    fn leading_two_isogeny_runs_for_the_odd_oalice_bits_case() {
        use crate::ladder::ladder_3_pt;
        use crate::params::P610;

        // P610 is the one parameter set with an odd OALICE_BITS, so this is
        // the only one of the four that exercises this correction.
        let curve = CurveCoefficients::<P610>::base_curve();
        let x_p = Fp2::<P610>::one().add(&Fp2::one());
        let x_q = Fp2::<P610>::one();
        let x_pq = x_p.add(&x_q);
        let mut bits = [1u8; P610::OALICE_BITS];
        bits[0] = 0;
        let kernel = ladder_3_pt(&bits, &x_p, &x_q, &x_pq, &curve.a24plus, &curve.c24);

        let mut aux = [ProjectivePoint::from_affine_x(x_p)];
        let (_image_kernel, _new_curve) = apply_leading_two_isogeny(kernel, &curve, &mut aux);
    }
}
