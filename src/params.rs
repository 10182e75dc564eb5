// -*- mode: rust; -*-
//
// This file is part of sidh-core.
// Copyright (c) 2017 Isis Lovecruft
// See LICENSE for licensing information.

//! Per-prime parameter tables for the four supported SIDH instantiations.
//!
//! Each of [`P434`], [`P503`], [`P610`], [`P751`] is a zero-sized marker type
//! implementing [`SidhParams`]; generic code throughout the crate is written
//! once against `P: SidhParams` and monomorphised per prime at compile time,
//! the same specialisation strategy the reference C sources get via
//! textual macro substitution (`#define fpmul_mont fpmul751_mont`, etc.) in
//! `P751.c`/`P610.c`/`P503.c`/`P434.c`.
//!
//! All constants below (prime, subgroup orders, basis points, `DBL_QA`,
//! `YPA`, `PplusQA`, `P3`, Montgomery constants, optimal-strategy tables) are
//! transcribed from the reference SIDH/SIKE parameter files. `OALICE_BITS`,
//! `OBOB_BITS`, `SECRETKEY_A_BYTES`, `SECRETKEY_B_BYTES`, `MASK_ALICE` and
//! `MASK_BOB` are *derived* from those tables (the subgroup orders directly
//! give the bit lengths) rather than copied from a NIST header, since no
//! `*_internal.h` file accompanied the reference sources this crate draws
//! on; see DESIGN.md.

/// Compile-time parameter set for one of the four SIDH primes.
///
/// An associated-const contract standing in for the reference
/// implementation's per-prime header (`P434_internal.h` and friends):
/// field/order widths, secret-key framing, and the public point/constant
/// tables needed to run the ladders, the isogeny walker, and the facade.
pub trait SidhParams: Copy + Clone + Eq + core::fmt::Debug {
    /// Number of 64-bit limbs in a field element, `Ceil(log2(p)/64)`.
    const NWORDS_FIELD: usize;
    /// Number of 64-bit limbs in a subgroup-order-sized scalar.
    const NWORDS_ORDER: usize;
    /// `eA`, the exponent such that Alice's subgroup has order `2^eA`.
    const OALICE_BITS: usize;
    /// `Floor(Log2(oB))`, the exponent bounding Bob's secret-key range.
    const OBOB_BITS: usize;
    /// Number of rows in Alice's strategy (== `eA/2 + 1`, counting the odd-`eA` row).
    const MAX_ALICE: usize;
    /// Number of rows in Bob's strategy (== `eB + 1`).
    const MAX_BOB: usize;
    /// Upper bound on simultaneously deferred points during Alice's tree walk.
    const MAX_INT_POINTS_ALICE: usize;
    /// Upper bound on simultaneously deferred points during Bob's tree walk.
    const MAX_INT_POINTS_BOB: usize;
    /// Length in bytes of an encoded Alice secret key.
    const SECRETKEY_A_BYTES: usize;
    /// Length in bytes of an encoded Bob secret key.
    const SECRETKEY_B_BYTES: usize;
    /// Length in bytes of one encoded `GF(p^2)` element (public keys are 3 of these).
    const FP2_ENCODED_BYTES: usize;
    /// Top-byte mask applied to a freshly generated Alice secret key.
    const MASK_ALICE: u8;
    /// Top-byte mask applied to a freshly generated Bob secret key.
    const MASK_BOB: u8;

    /// The prime `p`, little-endian 64-bit limbs.
    fn prime() -> [u64; Self::NWORDS_FIELD];
    /// `R^2 mod p` where `R = 2^(64*NWORDS_FIELD)`, used to enter Montgomery form.
    fn montgomery_r2() -> [u64; Self::NWORDS_FIELD];
    /// The value `1` already in Montgomery form, zero-padded to `MAX_NWORDS_FIELD`.
    fn montgomery_one() -> [u64; crate::fp::MAX_NWORDS_FIELD];
    /// Order of Alice's torsion subgroup (`2^eA`), little-endian limbs.
    fn alice_order() -> &'static [u64];
    /// Order of Bob's torsion subgroup (`3^eB`), little-endian limbs.
    fn bob_order() -> &'static [u64];
    /// Optimal strategy for Alice's 4-isogeny tree walk.
    fn strat_alice() -> &'static [u32];
    /// Optimal strategy for Bob's 3-isogeny tree walk.
    fn strat_bob() -> &'static [u32];
    /// `{XPA, XQA, XRA}` basis points for Alice, in Montgomery `GF(p^2)` form.
    fn a_gen() -> [u64; 6 * Self::NWORDS_FIELD];
    /// `{XPB, XQB, XRB}` basis points for Bob, in Montgomery `GF(p^2)` form.
    fn b_gen() -> [u64; 6 * Self::NWORDS_FIELD];
    /// `x([2]Q_A)`, precomputed to speed Alice's keygen ladder.
    fn dbl_qa() -> [u64; 2 * Self::NWORDS_FIELD];
    /// `y(P_A)`, needed for Y-coordinate recovery in Alice's keygen.
    fn ypa() -> [u64; 2 * Self::NWORDS_FIELD];
    /// `P_A + Q_A` in affine form, needed for Y-coordinate recovery.
    fn pplus_qa() -> [u64; 4 * Self::NWORDS_FIELD];
    /// Bob's base curve point used to build the distortion-map basis.
    fn p3() -> [u64; 2 * Self::NWORDS_FIELD];
}


/// Parameters for the 434-bit prime `p = 2^216*3^?-1` (SIKE/SIDH "P434").
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct P434;

impl SidhParams for P434 {
    const NWORDS_FIELD: usize = 7;
    const NWORDS_ORDER: usize = 4;
    const OALICE_BITS: usize = 216;
    const OBOB_BITS: usize = 217;
    const MAX_ALICE: usize = 108;
    const MAX_BOB: usize = 137;
    const MAX_INT_POINTS_ALICE: usize = 9;
    const MAX_INT_POINTS_BOB: usize = 10;
    const SECRETKEY_A_BYTES: usize = 27;
    const SECRETKEY_B_BYTES: usize = 28;
    const FP2_ENCODED_BYTES: usize = 110;
    const MASK_ALICE: u8 = 0xff;
    const MASK_BOB: u8 = 0x1;

    fn prime() -> [u64; Self::NWORDS_FIELD] {
        [
        0xFFFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFFFF, 0xFDC1767AE2FFFFFF, 0x7BC65C783158AEA3, 0x6CFC5FD681C52056,
        0x0002341F27177344,
    ]
    }

    fn montgomery_r2() -> [u64; Self::NWORDS_FIELD] {
        [
        0x28E55B65DCD69B30, 0xACEC7367768798C2, 0xAB27973F8311688D, 0x175CC6AF8D6C7C0B, 0xABCD92BF2DDE347E, 0x69E16A61C7686D9A,
        0x000025A89BCDD12A,
    ]
    }

    fn montgomery_one() -> [u64; crate::fp::MAX_NWORDS_FIELD] {
        let mut out = [0u64; crate::fp::MAX_NWORDS_FIELD];
        let words: [u64; Self::NWORDS_FIELD] = [
        0x000000000000742C, 0x0000000000000000, 0x0000000000000000, 0xB90FF404FC000000, 0xD801A4FB559FACD4, 0xE93254545F77410C,
        0x0000ECEEA7BD2EDA,
    ];
        out[..Self::NWORDS_FIELD].copy_from_slice(&words);
        out
    }

    fn alice_order() -> &'static [u64] {
        static ALICE_ORDER: [u64; 4] = [
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000001000000,
    ];
        &ALICE_ORDER
    }

    fn bob_order() -> &'static [u64] {
        static BOB_ORDER: [u64; 4] = [
        0x58AEA3FDC1767AE3, 0xC520567BC65C7831, 0x1773446CFC5FD681, 0x0000000002341F27,
    ];
        &BOB_ORDER
    }

    fn strat_alice() -> &'static [u32] {
        static STRAT_ALICE: [u32; 107] = [
        48, 28, 16, 8, 4, 2, 1, 1, 2, 1, 1, 4, 2, 1, 1, 2,
        1, 1, 8, 4, 2, 1, 1, 2, 1, 1, 4, 2, 1, 1, 2, 1,
        1, 13, 7, 4, 2, 1, 1, 2, 1, 1, 3, 2, 1, 1, 1, 1,
        5, 4, 2, 1, 1, 2, 1, 1, 2, 1, 1, 1, 21, 12, 7, 4,
        2, 1, 1, 2, 1, 1, 3, 2, 1, 1, 1, 1, 5, 3, 2, 1,
        1, 1, 1, 2, 1, 1, 1, 9, 5, 3, 2, 1, 1, 1, 1, 2,
        1, 1, 1, 4, 2, 1, 1, 1, 2, 1, 1,
    ];
        &STRAT_ALICE
    }

    fn strat_bob() -> &'static [u32] {
        static STRAT_BOB: [u32; 136] = [
        66, 33, 17, 9, 5, 3, 2, 1, 1, 1, 1, 2, 1, 1, 1, 4,
        2, 1, 1, 1, 2, 1, 1, 8, 4, 2, 1, 1, 1, 2, 1, 1,
        4, 2, 1, 1, 2, 1, 1, 16, 8, 4, 2, 1, 1, 1, 2, 1,
        1, 4, 2, 1, 1, 2, 1, 1, 8, 4, 2, 1, 1, 2, 1, 1,
        4, 2, 1, 1, 2, 1, 1, 32, 16, 8, 4, 3, 1, 1, 1, 1,
        2, 1, 1, 4, 2, 1, 1, 2, 1, 1, 8, 4, 2, 1, 1, 2,
        1, 1, 4, 2, 1, 1, 2, 1, 1, 16, 8, 4, 2, 1, 1, 2,
        1, 1, 4, 2, 1, 1, 2, 1, 1, 8, 4, 2, 1, 1, 2, 1,
        1, 4, 2, 1, 1, 2, 1, 1,
    ];
        &STRAT_BOB
    }

    fn a_gen() -> [u64; 6 * Self::NWORDS_FIELD] {
        [
        0x6E18D3A63313A738, 0x1DCC496DD6DDE298, 0xA35F3F7DAFBE2B43, 0xC6B9A5CC670071EB, 0x2EA3DB085283675A, 0xFDFE173A0297F36,
        0x0002200804EB824D, 0xB999E9E259F7BFA8, 0x2584D67D0C2EEAA9, 0x80AB07D4E9625724, 0x781DA616A7A76E54, 0x9BE449736374F491,
        0x8C6F86E8B0C4D74A, 0x0001C1D4812CBD98, 0x257DBD53095FD263, 0xBBB3C7A7B4EDB1D4, 0xA817B7FDDD5BB8DA, 0xF5DE963B242B7AB3,
        0x7F51B5362FC94CB6, 0xE7D2496B526DFF16, 0x0001E962CF69118C, 0xED9DC89467FB039D, 0x17C71E114B5803D0, 0x816C3379BE9647BF,
        0xB07F441A15434B64, 0xCC65C1804AF4CBD1, 0xF06BF5F074032C77, 0x0001A251F94CF02C, 0xA26194AB4BD1A16F, 0xCFCD9F7F04D5AB10,
        0x1BB4A7C04C37482C, 0x71DEE733632DA36D, 0x7335784B5ECF957F, 0x66AE2381533A7F09, 0x000232BFFE6FA42F, 0x60ACBE5D899CFA6A,
        0x82AC55A556E5A22F, 0x437D8C2AC83FDC6B, 0x620A8DA602543EDE, 0xD19ABA8092A1E8C2, 0xAFF1AA61981C95D3, 0x0001A7232B0C035E,
    ]
    }

    fn b_gen() -> [u64; 6 * Self::NWORDS_FIELD] {
        [
        0xE172658571249BA8, 0x9D8F52CB15829DA0, 0xE3A7C7F9F0E3F832, 0x8B825DD0B9410D30, 0xF42F815734752EDA, 0xCB35DD9160997586,
        0x00018B3AAAAD0F79, 0xCF0B435C40C1375D, 0x58AC8A63992B36EF, 0x416D0B3DFB0C1DF5, 0xB257E9CFE8985F15, 0xA493D98A7A1D6DF2,
        0x6D6781A5B3FDE61F, 0x000179AC0D886A3F, 0xE172658571249BA8, 0x9D8F52CB15829DA0, 0xE3A7C7F9F0E3F832, 0x8B825DD0B9410D30,
        0xF42F815734752EDA, 0xCB35DD9160997586, 0x00018B3AAAAD0F79, 0x30F4BCA3BF3EC8A2, 0xA753759C66D4C910, 0xBE92F4C204F3E20A,
        0x4B698CAAFA67A0EA, 0xD73282EDB73B40B1, 0xFF94DE30CDC73A36, 0x0000BA73198F0904, 0x9F7367022EFDF650, 0xA8C21C687A91D6BC,
        0xDDB909C497C4BFED, 0x66FD362A30232EBF, 0x84AC5026408590E1, 0x5378004CB74DA4ED, 0x00008AA46B9E55B2, 0x0,
        0x0, 0x0, 0x0, 0x0, 0x0, 0x0,
    ]
    }

    fn dbl_qa() -> [u64; 2 * Self::NWORDS_FIELD] {
        [
        0x6448cb5bd976250e, 0x3092cf8c8803d8b4, 0x2542331c81c2c2f8, 0xc086e30db24aa32, 0xd1b7f3e5532ee315, 0x226067da42cd56db,
        0x1dea86eb48d8a, 0x414795f6a70d543e, 0xdc7d2e0b9229a814, 0x679cd711c5b2ac8e, 0xcc92a943030f0d18, 0xc2bb3cda074e0076,
        0x19332e71dc423ba4, 0x1c95a2fc045dd,
    ]
    }

    fn ypa() -> [u64; 2 * Self::NWORDS_FIELD] {
        [
        0x9b989be60cff0d15, 0x8b80a32171813f53, 0xf4f067606a56228e, 0x48f8237e159577b0, 0x42529574b9e74156, 0xd8d26313f4aa9f9c,
        0x1279ac6bc876c, 0x9597544cbe9d88df, 0x13801f440df32748, 0xe4ecaff9c15d0ceb, 0x7867d92eb045a646, 0x2399062ba8c64ef,
        0xe9258c0bdf8bbff7, 0x1ce4bbf872205,
    ]
    }

    fn pplus_qa() -> [u64; 4 * Self::NWORDS_FIELD] {
        [
        0xa26194ab4bd1a16f, 0xcfcd9f7f04d5ab10, 0x1bb4a7c04c37482c, 0x71dee733632da36d, 0x7335784b5ecf957f, 0x66ae2381533a7f09,
        0x232bffe6fa42f, 0x9f5341a276630595, 0x7d53aa5aa91a5dd0, 0xbc8273d537c02394, 0x9bb6e8d4e0abc121, 0xaa2ba1f79eb6c5e1,
        0xbd0ab574e9a88a82, 0x8cfbfc0b6fe5, 0xda1e960ae3e5c4e8, 0x6effc0350686260f, 0xbd6eaccf62467b5, 0x65939cfb1161e478,
        0x5d0ed5901e82ddcb, 0xda8be7ee6d455d94, 0x19017b8ce77b2, 0xd30ece1ea3e19f40, 0x3abb724e9467b8fd, 0xc34cec4a1f9f85d4,
        0xe0b40f984e683dc0, 0x684c9b19b4180b6e, 0x7314c90c41f2842e, 0xe0745aab36b4,
    ]
    }

    fn p3() -> [u64; 2 * Self::NWORDS_FIELD] {
        [
        0x214C34BB192F67A0, 0xDD49D3D02115D30, 0x700652C1A7B66ED, 0x1F856B48F4FF0024, 0xFBDE6F4E6A705221, 0xB951A3D6C93D87B8,
        0xAE8ADB818ED6, 0x51D889FE197209C1, 0x191BCD9DBE4FE0EF, 0x447818CF5E54DD8A, 0x3F42710E8562A583, 0x647BDBB01C66DCB5,
        0xF402D36C15EA12E1, 0xA1E1D287C14C,
    ]
    }
}


/// Parameters for the 503-bit prime `p = 2^250*3^?-1` (SIKE/SIDH "P503").
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct P503;

impl SidhParams for P503 {
    const NWORDS_FIELD: usize = 8;
    const NWORDS_ORDER: usize = 4;
    const OALICE_BITS: usize = 250;
    const OBOB_BITS: usize = 252;
    const MAX_ALICE: usize = 125;
    const MAX_BOB: usize = 159;
    const MAX_INT_POINTS_ALICE: usize = 9;
    const MAX_INT_POINTS_BOB: usize = 10;
    const SECRETKEY_A_BYTES: usize = 32;
    const SECRETKEY_B_BYTES: usize = 32;
    const FP2_ENCODED_BYTES: usize = 126;
    const MASK_ALICE: u8 = 0x3;
    const MASK_BOB: u8 = 0xf;

    fn prime() -> [u64; Self::NWORDS_FIELD] {
        [
        0xFFFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFFFF, 0xABFFFFFFFFFFFFFF, 0x13085BDA2211E7A0, 0x1B9BF6C87B7E7DAF,
        0x6045C6BDDA77A4D0, 0x004066F541811E1E,
    ]
    }

    fn montgomery_r2() -> [u64; Self::NWORDS_FIELD] {
        [
        0x5289A0CF641D011F, 0x9B88257189FED2B9, 0xA3B365D58DC8F17A, 0x5BC57AB6EFF168EC, 0x9E51998BD84D4423, 0xBF8999CBAC3B5695,
        0x46E9127BCE14CDB6, 0x003F6CFCE8B81771,
    ]
    }

    fn montgomery_one() -> [u64; crate::fp::MAX_NWORDS_FIELD] {
        let mut out = [0u64; crate::fp::MAX_NWORDS_FIELD];
        let words: [u64; Self::NWORDS_FIELD] = [
        0x00000000000003F9, 0x0000000000000000, 0x0000000000000000, 0xB400000000000000, 0x63CB1A6EA6DED2B4, 0x51689D8D667EB37D,
        0x8ACD77C71AB24142, 0x0026FBAEC60F5953,
    ];
        out[..Self::NWORDS_FIELD].copy_from_slice(&words);
        out
    }

    fn alice_order() -> &'static [u64] {
        static ALICE_ORDER: [u64; 4] = [
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0400000000000000,
    ];
        &ALICE_ORDER
    }

    fn bob_order() -> &'static [u64] {
        static BOB_ORDER: [u64; 4] = [
        0xC216F6888479E82B, 0xE6FDB21EDF9F6BC4, 0x1171AF769DE93406, 0x1019BD5060478798,
    ];
        &BOB_ORDER
    }

    fn strat_alice() -> &'static [u32] {
        static STRAT_ALICE: [u32; 124] = [
        61, 32, 16, 8, 4, 2, 1, 1, 2, 1, 1, 4, 2, 1, 1, 2,
        1, 1, 8, 4, 2, 1, 1, 2, 1, 1, 4, 2, 1, 1, 2, 1,
        1, 16, 8, 4, 2, 1, 1, 2, 1, 1, 4, 2, 1, 1, 2, 1,
        1, 8, 4, 2, 1, 1, 2, 1, 1, 4, 2, 1, 1, 2, 1, 1,
        29, 16, 8, 4, 2, 1, 1, 2, 1, 1, 4, 2, 1, 1, 2, 1,
        1, 8, 4, 2, 1, 1, 2, 1, 1, 4, 2, 1, 1, 2, 1, 1,
        13, 8, 4, 2, 1, 1, 2, 1, 1, 4, 2, 1, 1, 2, 1, 1,
        5, 4, 2, 1, 1, 2, 1, 1, 2, 1, 1, 1,
    ];
        &STRAT_ALICE
    }

    fn strat_bob() -> &'static [u32] {
        static STRAT_BOB: [u32; 158] = [
        71, 38, 21, 13, 8, 4, 2, 1, 1, 2, 1, 1, 4, 2, 1, 1,
        2, 1, 1, 5, 4, 2, 1, 1, 2, 1, 1, 2, 1, 1, 1, 9,
        5, 3, 2, 1, 1, 1, 1, 2, 1, 1, 1, 4, 2, 1, 1, 1,
        2, 1, 1, 17, 9, 5, 3, 2, 1, 1, 1, 1, 2, 1, 1, 1,
        4, 2, 1, 1, 1, 2, 1, 1, 8, 4, 2, 1, 1, 1, 2, 1,
        1, 4, 2, 1, 1, 2, 1, 1, 33, 17, 9, 5, 3, 2, 1, 1,
        1, 1, 2, 1, 1, 1, 4, 2, 1, 1, 1, 2, 1, 1, 8, 4,
        2, 1, 1, 1, 2, 1, 1, 4, 2, 1, 1, 2, 1, 1, 16, 8,
        4, 2, 1, 1, 1, 2, 1, 1, 4, 2, 1, 1, 2, 1, 1, 8,
        4, 2, 1, 1, 2, 1, 1, 4, 2, 1, 1, 2, 1, 1,
    ];
        &STRAT_BOB
    }

    fn a_gen() -> [u64; 6 * Self::NWORDS_FIELD] {
        [
        0x3353B596D45A95A6, 0xDF7E0A94A39B96C0, 0x715DC90A72A3223F, 0xCB73F56E5AD9430F, 0xE4B5DA591AEE475D, 0x322F1CE730413BD7,
        0x4EEA4028D168DAD2, 0xB254087875FFA, 0xAC3985C5BB18D89D, 0x45F2445C680A1E40, 0xF59454B450FBAB11, 0x95DC27D8152A0DAE,
        0x42A4FD439715E500, 0xB958FBA1CD4CC505, 0xC4E5AB2ABB732FC5, 0x268ED322F62ACA, 0xDD27E5ADF7F57AB4, 0x7C1379D2B09F0434,
        0x6E267408F1C8C89F, 0xC3BB383C07B60035, 0x9268C9183A95ECD5, 0x9327EC043E0F021F, 0xE63D2D907A9DE5A5, 0x3110B6B4E0CD93,
        0x40B6BC5F5C2675E6, 0x62AD4B61EEDC2C5C, 0xA1CCA6B5091EF540, 0xC6273D4E1D8FC7FE, 0x266D8B99EE63A78F, 0x39604E6927906566,
        0xAB8BA8F2C6A977F8, 0xCD759EE7AB739, 0x1482EA2C7A8F5FA0, 0xB42C8B9C007E5FE5, 0xCFCFF2625C69E7FD, 0x8334C3F384C268F5,
        0xD71E78E25FA4DB2F, 0x64BECFBE41708879, 0x103FF021EF7BF9, 0x2695BB8221E83B, 0xA08787E922A1030, 0x8D34581F64BCE547,
        0x2FA5BED41306271A, 0xEC24812ABD206DCF, 0x978FA888C3CC6366, 0x2BFF991CDB7CE058, 0xA0BCCC1A447CF056, 0x2425429A072D82,
    ]
    }

    fn b_gen() -> [u64; 6 * Self::NWORDS_FIELD] {
        [
        0xB810321963CF561F, 0xACA612873FBC647F, 0xE5C29CB78215B634, 0xB277ACABE764F907, 0x76DBA8FCCDFF4721, 0x1B4E6541441EB543,
        0xDAAB92E8B2DD0517, 0x1ECAA65407E4C9, 0xF7EEE8D8D30365E6, 0x48F0AF97691E0303, 0xA8AC75108BFDA627, 0x7C0F65DCF8450F1,
        0xCD74E9CA0E92BECA, 0x342E232149CA1DFA, 0x8E841EC6D7725DE3, 0x2429A4E9A12CB0, 0xB810321963CF561F, 0xACA612873FBC647F,
        0xE5C29CB78215B634, 0xB277ACABE764F907, 0x76DBA8FCCDFF4721, 0x1B4E6541441EB543, 0xDAAB92E8B2DD0517, 0x1ECAA65407E4C9,
        0x81117272CFC9A19, 0xB70F506896E1FCFC, 0x57538AEF740259D8, 0xA43F09A2307BAF0E, 0x45937210137F28D6, 0xE76DD3A731B45FB4,
        0xD1C1A7F7030546EC, 0x1C3D5057DFF16D, 0x6E3DEF7C8A5A47D2, 0x12D9AF90F92FC868, 0xCE33D50FC931894B, 0x2927354E05ED037C,
        0x4864AD1D8B6E4E56, 0x2C6BB7E4CD4284DD, 0x50A30A93843DDC28, 0x38195667C39958, 0x0, 0x0,
        0x0, 0x0, 0x0, 0x0, 0x0, 0x0,
    ]
    }

    fn dbl_qa() -> [u64; 2 * Self::NWORDS_FIELD] {
        [
        0x273f6c464cb9ab1a, 0x83722dbae9836b36, 0x7236dd158d1a1bbf, 0xbe84ed2fd6fc9b11, 0xf4fac85bba91e9b4, 0x783d71c36f23ae76,
        0x6fc94cf24bda330a, 0x3929a6320c9596, 0x3e3209393cb32a2, 0x689964ccab348a84, 0x74471effced8819b, 0x661d7240b28e2790,
        0x71aae7baae2179ca, 0x5da64f579d150d5b, 0x17919259b69ea954, 0x77328aa89bbc7,
    ]
    }

    fn ypa() -> [u64; 2 * Self::NWORDS_FIELD] {
        [
        0xbc88bb85404378e5, 0x61071195bc44bf8f, 0xc92d13994ce9b8b3, 0x9ed615392dcf6ca2, 0xc4a95165fb25bfda, 0xeeea8545ebeaec62,
        0xac09c1c3e91b41fd, 0xb43ac79a90a0c, 0xe8b38a79e90eaadb, 0x840b284661ccfc39, 0x6d5091432c311ad, 0xdafbd9cd646033b,
        0x3faf77bc98339af0, 0x75f0c7a7aa5d03a3, 0xd188da98de124c6a, 0x2780b2b7b1c9cc,
    ]
    }

    fn pplus_qa() -> [u64; 4 * Self::NWORDS_FIELD] {
        [
        0x1482ea2c7a8f5fa0, 0xb42c8b9c007e5fe5, 0xcfcff2625c69e7fd, 0x8334c3f384c268f5, 0xd71e78e25fa4db2f, 0x64becfbe41708879,
        0x0103ff021ef7bf9, 0x2695bb8221e83b, 0xf5f787816dd5efcf, 0x72cba7e09b431ab8, 0xd05a412becf9d8e5, 0xbfdb7ed542df9230,
        0x7b78b3515e458439, 0xef9c5daba0019d56, 0xbf88faa395fab479, 0x1c41b2a779f09b, 0x4f151d6b2697df41, 0xf2286438aadddb71,
        0x62378cc5be23004f, 0x822807933e84ad42, 0x36db6c363e3d2500, 0x95941f4db77237b2, 0xfd917b6f231a9e7c, 0x1e1e9b5aa4f411,
        0xb3d457620c43d607, 0x96c95df412038dbe, 0xf4e14d69d3ef397c, 0x3ff63724a560957, 0xbde046fe40105145, 0x5762a00b1b2c71f,
        0x97e2dfed61620d74, 0x1c4742befd3c,
    ]
    }

    fn p3() -> [u64; 2 * Self::NWORDS_FIELD] {
        [
        0x4256C520FB388820, 0x744FD7C3BAAF0A13, 0x4B6A2DDDB12CBCB8, 0xE46826E27F427DF8, 0xFE4A663CD505A61B, 0xD6B3A1BAF025C695,
        0x7C3BB62B8FCC00BD, 0x3AFDDE4A35746C, 0x440192590061240E, 0x60C942451EC3E20D, 0x2195638E3B7632CA, 0xBA84AC322AA59D16,
        0x3751CBF97048E02D, 0x6A583E4C816EAC44, 0x7A984D4F477762C1, 0x27B5AB2E503D63,
    ]
    }
}


/// Parameters for the 610-bit prime `p = 2^305*3^?-1` (SIKE/SIDH "P610").
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct P610;

impl SidhParams for P610 {
    const NWORDS_FIELD: usize = 10;
    const NWORDS_ORDER: usize = 5;
    const OALICE_BITS: usize = 305;
    const OBOB_BITS: usize = 304;
    const MAX_ALICE: usize = 152;
    const MAX_BOB: usize = 192;
    const MAX_INT_POINTS_ALICE: usize = 10;
    const MAX_INT_POINTS_BOB: usize = 10;
    const SECRETKEY_A_BYTES: usize = 39;
    const SECRETKEY_B_BYTES: usize = 38;
    const FP2_ENCODED_BYTES: usize = 154;
    const MASK_ALICE: u8 = 0x1;
    const MASK_BOB: u8 = 0xff;

    fn prime() -> [u64; Self::NWORDS_FIELD] {
        [
        0xFFFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFFFF, 0x6E01FFFFFFFFFFFF, 0xB1784DE8AA5AB02E,
        0x9AE7BF45048FF9AB, 0xB255B2FA10C4252A, 0x819010C251E7D88C, 0x000000027BF6A768,
    ]
    }

    fn montgomery_r2() -> [u64; Self::NWORDS_FIELD] {
        [
        0xE75F5D201A197727, 0xE0B85963B627392E, 0x6BC1707818DE493D, 0xDC7F419940D1A0C5, 0x7358030979EDE54A, 0x84F4BEBDEED75A5C,
        0x7ECCA66E13427B47, 0xC5BB4E65280080B3, 0x7019950F516DA19A, 0x000000008E290FF3,
    ]
    }

    fn montgomery_one() -> [u64; crate::fp::MAX_NWORDS_FIELD] {
        let mut out = [0u64; crate::fp::MAX_NWORDS_FIELD];
        let words: [u64; Self::NWORDS_FIELD] = [
        0x00000000670CC8E6, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x9A34000000000000, 0x4D99C2BD28717A3F,
        0x0A4A1839A323D41C, 0xD2B62215D06AD1E2, 0x1369026E862CAF3D, 0x000000010894E964,
    ];
        out[..Self::NWORDS_FIELD].copy_from_slice(&words);
        out
    }

    fn alice_order() -> &'static [u64] {
        static ALICE_ORDER: [u64; 5] = [
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0002000000000000,
    ];
        &ALICE_ORDER
    }

    fn bob_order() -> &'static [u64] {
        static BOB_ORDER: [u64; 5] = [
        0x26F4552D58173701, 0xDFA28247FCD5D8BC, 0xD97D086212954D73, 0x086128F3EC46592A, 0x00013DFB53B440C8,
    ];
        &BOB_ORDER
    }

    fn strat_alice() -> &'static [u32] {
        static STRAT_ALICE: [u32; 151] = [
        67, 37, 21, 12, 7, 4, 2, 1, 1, 2, 1, 1, 3, 2, 1, 1,
        1, 1, 5, 3, 2, 1, 1, 1, 1, 2, 1, 1, 1, 9, 5, 3,
        2, 1, 1, 1, 1, 2, 1, 1, 1, 4, 2, 1, 1, 1, 2, 1,
        1, 16, 9, 5, 3, 2, 1, 1, 1, 1, 2, 1, 1, 1, 4, 2,
        1, 1, 1, 2, 1, 1, 8, 4, 2, 1, 1, 2, 1, 1, 4, 2,
        1, 1, 2, 1, 1, 33, 16, 8, 5, 2, 1, 1, 1, 2, 1, 1,
        1, 4, 2, 1, 1, 2, 1, 1, 8, 4, 2, 1, 1, 2, 1, 1,
        4, 2, 1, 1, 2, 1, 1, 16, 8, 4, 2, 1, 1, 1, 2, 1,
        1, 4, 2, 1, 1, 2, 1, 1, 8, 4, 2, 1, 1, 2, 1, 1,
        4, 2, 1, 1, 2, 1, 1,
    ];
        &STRAT_ALICE
    }

    fn strat_bob() -> &'static [u32] {
        static STRAT_BOB: [u32; 191] = [
        86, 48, 27, 15, 8, 4, 2, 1, 1, 2, 1, 1, 4, 2, 1, 1,
        2, 1, 1, 7, 4, 2, 1, 1, 2, 1, 1, 3, 2, 1, 1, 1,
        1, 12, 7, 4, 2, 1, 1, 2, 1, 1, 3, 2, 1, 1, 1, 1,
        5, 3, 2, 1, 1, 1, 1, 2, 1, 1, 1, 21, 12, 7, 4, 2,
        1, 1, 2, 1, 1, 3, 2, 1, 1, 1, 1, 5, 3, 2, 1, 1,
        1, 1, 2, 1, 1, 1, 9, 5, 3, 2, 1, 1, 1, 1, 2, 1,
        1, 1, 4, 2, 1, 1, 1, 2, 1, 1, 38, 21, 12, 7, 4, 2,
        1, 1, 2, 1, 1, 3, 2, 1, 1, 1, 1, 5, 3, 2, 1, 1,
        1, 1, 2, 1, 1, 1, 9, 5, 3, 2, 1, 1, 1, 1, 2, 1,
        1, 1, 4, 2, 1, 1, 1, 2, 1, 1, 17, 9, 5, 3, 2, 1,
        1, 1, 1, 2, 1, 1, 1, 4, 2, 1, 1, 1, 2, 1, 1, 8,
        4, 2, 1, 1, 1, 2, 1, 1, 4, 2, 1, 1, 2, 1, 1,
    ];
        &STRAT_BOB
    }

    fn a_gen() -> [u64; 6 * Self::NWORDS_FIELD] {
        [
        0x31C8AF7FFC0DE9FA, 0x8A8AD55D2AC8A709, 0x95A4DC49B64E5B2C, 0xF08C77AAE90ABE83, 0x675E4FF97C95845D, 0xF8A22591248401F0,
        0x73F573A4FF34A84A, 0x37D18A6C3D989158, 0xEE73973862A3E95, 0x24084FCCB, 0x4B8C9CED6DEF0B8B, 0x652C800D926AB992,
        0x3DFA6D6B8FD37D80, 0xA30C578CD98EFD79, 0x9FC067E58CCBD32E, 0x2B0599AEAF150FDB, 0xBA321B31886F3292, 0xE0011F56247547A1,
        0x28CA0747910BFAE2, 0xFC020A14, 0x2728178178DEAFBD, 0xD377C4656DBC71F0, 0x968642007B807932, 0xB8B04B1039062A21,
        0xF824771B468A977C, 0x260F1C50354F46AB, 0x78A3D37CDBBD4DC5, 0x1FB1BAC6851BA175, 0xA73444F1CAC4A10, 0xF3A5C2BB,
        0x4F828B752E825BB4, 0x82CEA210AC766C69, 0x8B1BBC87DAD8BEDD, 0x9BFC5B9CE215B423, 0xF7E1BCC0C541177C, 0x7727E3A0F1A1AF24,
        0xFBCFE4177D2B0221, 0xBB15BDCC160D902A, 0x3FE1467B4A911446, 0x1A495CB35, 0x38687702D78D1A93, 0x58C09FD23B1E1B56,
        0xC54917327D5C0FAB, 0xB6D55B7BE801A3C, 0xEB3AE21C8B93E9E9, 0xECB45AD6D24FF76A, 0x850645B4F39EC5F2, 0xE6F78202586C9B3A,
        0x2923209A250F7F66, 0x26FB150F, 0x5AC7B27F9096F718, 0x487DDD2820132C83, 0x6B21AC48569E12D8, 0x57B54E5A827D1CD9,
        0xDB7C4BEB143E4130, 0xB6781CA1DA245EAD, 0xCC09878A2A6D7C45, 0x980726C5232C75E5, 0x50D3A7350792C35F, 0x172B595DB,
    ]
    }

    fn b_gen() -> [u64; 6 * Self::NWORDS_FIELD] {
        [
        0xD4A2CF040BC56F2C, 0x58F1D1D2B190EDE7, 0x2229F10D3BC7BA47, 0x769AB0F0EDD86AA4, 0x97F1214B80D8463, 0x9B23774D13ED3EEE,
        0x9A182E846DAA95C6, 0x343741369B273442, 0x61FB37462569D4BB, 0x1815EF8B9, 0xF380CA27C26BF32E, 0xD594C3EA0698D298,
        0x21D388E632D1CA2E, 0xDD1E0B34330E0AB0, 0xEA7B89CAD59CA8C2, 0x28C129BFC584BEC1, 0x48D1E802FC7418CF, 0x11F3A548C5DFFDF7,
        0xDB0E9AF98D314F67, 0x219918D2B, 0xD4A2CF040BC56F2C, 0x58F1D1D2B190EDE7, 0x2229F10D3BC7BA47, 0x769AB0F0EDD86AA4,
        0x97F1214B80D8463, 0x9B23774D13ED3EEE, 0x9A182E846DAA95C6, 0x343741369B273442, 0x61FB37462569D4BB, 0x1815EF8B9,
        0xC7F35D83D940CD1, 0x2A6B3C15F9672D67, 0xDE2C7719CD2E35D1, 0x22E1F4CBCCF1F54F, 0x838676352A63573D, 0x88B72428E4D5F16C,
        0x5215D742081BE0DC, 0xA0620DB14AE42733, 0xA68175C8C4B68925, 0x62651A3C, 0x4F62205A5DAFB369, 0xA2B75D5BC06C691F,
        0x6B82C9B893D51C38, 0x2C2467D7AB7DAA2C, 0x8A8D5AC13C2C5ADD, 0xBC3AEC544F8953F5, 0xBC43C1BE1B1DC069, 0xB8CDA0908AEBCD84,
        0xA213356DB0FBFCFF, 0x15F063030, 0x0, 0x0, 0x0, 0x0,
        0x0, 0x0, 0x0, 0x0, 0x0, 0x0,
    ]
    }

    fn dbl_qa() -> [u64; 2 * Self::NWORDS_FIELD] {
        [
        0x2c9e52fa31b9b76, 0xef4088ad3e54c6dd, 0xc18e7055d2cff348, 0x24b3268c87d5f690, 0xdd80d94ade7b0a93, 0x5ee075b1e9a6c6bd,
        0x27f68f76241404bd, 0x2b267148416a9627, 0x27270dafd0dd30ff, 0xd8b7e841, 0xb84b1e242a63879e, 0xd3a74c3d2770fa06,
        0x49df32c277de73a3, 0xca452cb04eba1741, 0xe36ec74b21763cf, 0xee808c414124f7b3, 0xcdbc7c4c7fa2f565, 0x6ec6a04436a3b6dd,
        0x655153fcac56e490, 0x1c8ae36cc,
    ]
    }

    fn ypa() -> [u64; 2 * Self::NWORDS_FIELD] {
        [
        0x3ca84837d69d8728, 0xb2bdfe3304cb7401, 0x8c840937950ad3e9, 0xce8094a539aa6c49, 0xf0802aae490f29a0, 0x5458a8e61bb9d01f,
        0x3592a73de4758511, 0x7dea75b85a60f316, 0xf835eeac9b12cc1d, 0x11c4e0162, 0x87a90900552b058, 0xf34899fe9411dc6a,
        0x3807cf5b95b0168, 0xc986baf1e3ffded4, 0x1d10eac33aa0781a, 0xd9569230f9a2d512, 0xf8295f6189dbaaf3, 0x26b44d4cecb1a5e8,
        0x9ca4ce754143daa4, 0xaf517dfc,
    ]
    }

    fn pplus_qa() -> [u64; 4 * Self::NWORDS_FIELD] {
        [
        0x3ae8bb4f4de5e21a, 0x3c646dfde429c031, 0x9dc5916c37a21fc4, 0x1754faf5d9dc1ba3, 0x53f7022de9e07850, 0x97ac6836c73d072e,
        0x26e37b2502a716d7, 0x3e643c9018eca8e5, 0xc796641a6ee9017f, 0x12e6a48ec, 0x6bff31eccb1e2092, 0xd916e73e07769500,
        0xedf799cc675ee22b, 0xb3c36ed05b36434, 0x629758b74e92643e, 0x3e35456235455243, 0x87624a13997758c7, 0xfde1837097e7d59b,
        0x6eeffed35309078b, 0xb12d2a52, 0xeabb251c79a581c9, 0x1ddadde7d0c4adbf, 0x3979ea0e826c6034, 0xefeb3adf3ea1a68c,
        0x174c6cd565164f3, 0x971a26fbfb9544bc, 0x83ce13424dc2d699, 0xaeb453e747a11622, 0x23dcc826e38ff746, 0xd2346570,
        0x2ec71192464d8b22, 0x3fd75abed41d8c72, 0x2e206d4f17f372db, 0xd91f67a83c6616ec, 0x268b00035db0c31, 0xccb96bd0238db8cf,
        0x71cc72e3696eb8e7, 0x83599d21e5430d78, 0x55416a92cdf519d0, 0x1c23f7a19,
    ]
    }

    fn p3() -> [u64; 2 * Self::NWORDS_FIELD] {
        [
        0x203596CF0245B227, 0xFE7D4CB978F11517, 0xEC79574E9D7DD13A, 0xD24627B69D4DFF63, 0x85B4D3B2B5426BBF, 0xFF0237C357683FCA,
        0x2C3E0FE7792534B1, 0x8B68DB1AFC3F9CDE, 0x5AFD2B5021786921, 0x16CFF1918, 0xDFE1CAFF47350FFB, 0x7F6641B5806DBD07,
        0xD558CE2B43292C47, 0x28EB4A4147C77BD6, 0x143218EB29F5FB6C, 0x5F457BD167A2260F, 0x26D9639E9DD4A15D, 0xEC9DFA3764433777,
        0x9D8C59E2D257CACF, 0x1D2D65779,
    ]
    }
}


/// Parameters for the 751-bit prime `p = 2^372*3^?-1` (SIKE/SIDH "P751").
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct P751;

impl SidhParams for P751 {
    const NWORDS_FIELD: usize = 12;
    const NWORDS_ORDER: usize = 6;
    const OALICE_BITS: usize = 372;
    const OBOB_BITS: usize = 378;
    const MAX_ALICE: usize = 186;
    const MAX_BOB: usize = 239;
    const MAX_INT_POINTS_ALICE: usize = 10;
    const MAX_INT_POINTS_BOB: usize = 10;
    const SECRETKEY_A_BYTES: usize = 47;
    const SECRETKEY_B_BYTES: usize = 48;
    const FP2_ENCODED_BYTES: usize = 188;
    const MASK_ALICE: u8 = 0xf;
    const MASK_BOB: u8 = 0x3;

    fn prime() -> [u64; Self::NWORDS_FIELD] {
        [
        0xFFFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFFFF, 0xEEAFFFFFFFFFFFFF,
        0xE3EC968549F878A8, 0xDA959B1A13F7CC76, 0x084E9867D6EBE876, 0x8562B5045CB25748, 0x0E12909F97BADC66, 0x00006FE5D541F71C,
    ]
    }

    fn montgomery_r2() -> [u64; Self::NWORDS_FIELD] {
        [
        0x233046449DAD4058, 0xDB010161A696452A, 0x5E36941472E3FD8E, 0xF40BFE2082A2E706, 0x4932CCA8904F8751, 0x1F735F1F1EE7FC81,
        0xA24F4D80C1048E18, 0xB56C383CCDB607C5, 0x441DD47B735F9C90, 0x5673ED2C6A6AC82A, 0x06C905261132294B, 0x000041AD830F1F35,
    ]
    }

    fn montgomery_one() -> [u64; crate::fp::MAX_NWORDS_FIELD] {
        let mut out = [0u64; crate::fp::MAX_NWORDS_FIELD];
        let words: [u64; Self::NWORDS_FIELD] = [
        0x00000000000249ad, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x8310000000000000,
        0x5527b1e4375c6c66, 0x697797bf3f4f24d0, 0xc89db7b2ac5c4e2e, 0x4ca4b439d2076956, 0x10f7926c7512c7e9, 0x00002d5b24bce5e2,
    ];
        out[..Self::NWORDS_FIELD].copy_from_slice(&words);
        out
    }

    fn alice_order() -> &'static [u64] {
        static ALICE_ORDER: [u64; 6] = [
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0010000000000000,
    ];
        &ALICE_ORDER
    }

    fn bob_order() -> &'static [u64] {
        static BOB_ORDER: [u64; 6] = [
        0xC968549F878A8EEB, 0x59B1A13F7CC76E3E, 0xE9867D6EBE876DA9, 0x2B5045CB25748084, 0x2909F97BADC66856, 0x06FE5D541F71C0E1,
    ];
        &BOB_ORDER
    }

    fn strat_alice() -> &'static [u32] {
        static STRAT_ALICE: [u32; 185] = [
        80, 48, 27, 15, 8, 4, 2, 1, 1, 2, 1, 1, 4, 2, 1, 1,
        2, 1, 1, 7, 4, 2, 1, 1, 2, 1, 1, 3, 2, 1, 1, 1,
        1, 12, 7, 4, 2, 1, 1, 2, 1, 1, 3, 2, 1, 1, 1, 1,
        5, 3, 2, 1, 1, 1, 1, 2, 1, 1, 1, 21, 12, 7, 4, 2,
        1, 1, 2, 1, 1, 3, 2, 1, 1, 1, 1, 5, 3, 2, 1, 1,
        1, 1, 2, 1, 1, 1, 9, 5, 3, 2, 1, 1, 1, 1, 2, 1,
        1, 1, 4, 2, 1, 1, 1, 2, 1, 1, 33, 20, 12, 7, 4, 2,
        1, 1, 2, 1, 1, 3, 2, 1, 1, 1, 1, 5, 3, 2, 1, 1,
        1, 1, 2, 1, 1, 1, 8, 5, 3, 2, 1, 1, 1, 1, 2, 1,
        1, 1, 4, 2, 1, 1, 2, 1, 1, 16, 8, 4, 2, 1, 1, 1,
        2, 1, 1, 4, 2, 1, 1, 2, 1, 1, 8, 4, 2, 1, 1, 2,
        1, 1, 4, 2, 1, 1, 2, 1, 1,
    ];
        &STRAT_ALICE
    }

    fn strat_bob() -> &'static [u32] {
        static STRAT_BOB: [u32; 238] = [
        112, 63, 32, 16, 8, 4, 2, 1, 1, 2, 1, 1, 4, 2, 1, 1,
        2, 1, 1, 8, 4, 2, 1, 1, 2, 1, 1, 4, 2, 1, 1, 2,
        1, 1, 16, 8, 4, 2, 1, 1, 2, 1, 1, 4, 2, 1, 1, 2,
        1, 1, 8, 4, 2, 1, 1, 2, 1, 1, 4, 2, 1, 1, 2, 1,
        1, 31, 16, 8, 4, 2, 1, 1, 2, 1, 1, 4, 2, 1, 1, 2,
        1, 1, 8, 4, 2, 1, 1, 2, 1, 1, 4, 2, 1, 1, 2, 1,
        1, 15, 8, 4, 2, 1, 1, 2, 1, 1, 4, 2, 1, 1, 2, 1,
        1, 7, 4, 2, 1, 1, 2, 1, 1, 3, 2, 1, 1, 1, 1, 49,
        31, 16, 8, 4, 2, 1, 1, 2, 1, 1, 4, 2, 1, 1, 2, 1,
        1, 8, 4, 2, 1, 1, 2, 1, 1, 4, 2, 1, 1, 2, 1, 1,
        15, 8, 4, 2, 1, 1, 2, 1, 1, 4, 2, 1, 1, 2, 1, 1,
        7, 4, 2, 1, 1, 2, 1, 1, 3, 2, 1, 1, 1, 1, 21, 12,
        8, 4, 2, 1, 1, 2, 1, 1, 4, 2, 1, 1, 2, 1, 1, 5,
        3, 2, 1, 1, 1, 1, 2, 1, 1, 1, 9, 5, 3, 2, 1, 1,
        1, 1, 2, 1, 1, 1, 4, 2, 1, 1, 1, 2, 1, 1,
    ];
        &STRAT_BOB
    }

    fn a_gen() -> [u64; 6 * Self::NWORDS_FIELD] {
        [
        0x2584350E0C33C304, 0x51E9C29E234DC61E, 0xC6E65A7BF90ACC05, 0xB1333E2E19B3A930, 0xA4F7CA2F7F66909F, 0xE01E9E6F6704BF9E,
        0xE2345D48C0219D6D, 0x70F37AD9933FC182, 0x7B9D4D5870CFACA3, 0x3B8DAF20190D460D, 0xB02D6FF9AAFA0C7, 0x15A435D19526,
        0xE85E3F2B4EDDAF22, 0x4824EDCA0A253CB2, 0x65C70852876C50A0, 0x917389F0D88B919, 0x93FBE011EFA068E5, 0x72703759A4651388,
        0xA266A6AEE1213EE0, 0xC496ABC50E388B6E, 0x564CB9FE0EBD72B5, 0x88B483157D3BADC8, 0x326D337A76B5317, 0x440F6F4F2D5A,
        0xCDD55D2646A1DE32, 0xAA056CDD8B80E53E, 0xAA87189B3A885C53, 0x9F6D9809057564A1, 0xC59794A13E1D38B8, 0x97F8ED39F3FA7DE5,
        0xFC0CAF68C8B95129, 0x393F28B240A42FFE, 0xCD99B2F9792DEF96, 0xF1036825CBF416B9, 0x877B835F0533F2AE, 0xCDFFE238E18,
        0xAC4EF1B17010B136, 0xEC411E1B5AD8A667, 0x7737372EDB66A1AF, 0x43593ECED672CF87, 0x1E418547C7B8A975, 0x8CC78DCB18BD469A,
        0x6C9FB93FD2EF8496, 0x8A4AC42666AB8545, 0x8A973B8387C15F1D, 0xC1657503D4BB4ADA, 0x22F49E4311D7BBF0, 0x1299B8FDA94C,
        0xC04B8957D3A4748F, 0xF3FB80F19063629F, 0x595434555D4EBE94, 0x8E1FEF11BFD1E0DA, 0xE31E3377248C0BB4, 0x9A05DEFF75EA51BA,
        0x398686FBB343398A, 0x20331307B470DA54, 0x964FA62AD10005C5, 0x9EA5CC4D64E5D9EE, 0xC84675CF9B96060F, 0x1DECCB78CFAC,
        0x6B20FF684759DDC2, 0xD50EB91730DEAFBF, 0xAA5CA048E2DAF488, 0xE29708E28654FC18, 0x542928AD1F445359, 0xA311B83D79E73FF6,
        0x850B7F5926826B22, 0x2D46731863BDB99D, 0x467A80CD8320B69D, 0xC046B12F05BFD513, 0x35D9B2FF794BDB40, 0x633276495B85,
    ]
    }

    fn b_gen() -> [u64; 6 * Self::NWORDS_FIELD] {
        [
        0x110F4508C6634CCB, 0x31910BC05E296F4C, 0xED17AB0D6C029EA6, 0x9C863AB6172B9974, 0x5C15236CDB216F99, 0xDC025064818EC7D7,
        0xC2180F387487EBF0, 0x946B1D0F025CBC3B, 0x5AE34395A520CB46, 0xB52034F98A879F2C, 0x3D2FAE10A22AB7C7, 0x174CD090DA3D,
        0xC3C6A839776171F2, 0x5883AFB529C8E50A, 0xDE1622BBD192925, 0x64CCE86B1826A21, 0x441AF1ABE9F6568E, 0x3F29EEC0BC6F962D,
        0xA7845A0127159975, 0x109DCD6D92B0C3F2, 0x462438CD0100EE2E, 0xFB7869F2B1DF80EB, 0x563B0C55F0EEDC53, 0x1958C37D4721,
        0x110F4508C6634CCB, 0x31910BC05E296F4C, 0xED17AB0D6C029EA6, 0x9C863AB6172B9974, 0x5C15236CDB216F99, 0xDC025064818EC7D7,
        0xC2180F387487EBF0, 0x946B1D0F025CBC3B, 0x5AE34395A520CB46, 0xB52034F98A879F2C, 0x3D2FAE10A22AB7C7, 0x174CD090DA3D,
        0x3C3957C6889E8E0D, 0xA77C504AD6371AF5, 0xF21E9DD442E6D6DA, 0xF9B331794E7D95DE, 0xBBE50E541609A971, 0xAF86113F439069D2,
        0x3C683C8422E2DF33, 0xC9F7CDAC81470884, 0xC22A5F9AD5EAFA48, 0x89EA4B11AAD2D65C, 0xB7D78449A6CC0012, 0x568D11C4AFFA,
        0x31BB0964DFBDC34F, 0xFDC65CF4959AB106, 0xA3071E4B8B04D8FF, 0x9B68CFCE270DE486, 0x2339E590896E0095, 0xFC753508AD83E33E,
        0x73A274E4A6908387, 0x88D1B207BBE8E2DC, 0xA6D0583233DC71F, 0xCF7F2ECC609DE5BE, 0xB8AF0669FBD1CF01, 0x1F3EF25DD512,
        0x0, 0x0, 0x0, 0x0, 0x0, 0x0,
        0x0, 0x0, 0x0, 0x0, 0x0, 0x0,
    ]
    }

    fn dbl_qa() -> [u64; 2 * Self::NWORDS_FIELD] {
        [
        0xac2b2d74f883dfe4, 0xda9b5d82caa27d78, 0xf8656ebc40d57f4c, 0x5e1cd5bdbf041897, 0x1a30c6a718d110c8, 0x3c8def0dc70d6806,
        0x91ab2c2c9282d88c, 0x8b6aedd25d129720, 0xaa92dd198282d20d, 0x976b9255cb297eb, 0xf6d8ab5c106ebe7a, 0xc5fb17b0515,
        0xd5592babbcc2584e, 0xe0547c84cd5e0c1, 0xfbe528cb2d17b51b, 0x2168cc83a03036bc, 0x46149ea13591e9e3, 0xff230f71abe6a6e0,
        0xd4a9a33beebb78fa, 0x63627d7cdda2d559, 0x601fcfc408949785, 0xcde4532f5618bcf6, 0xbc83162a741e1d9b, 0x6f443172fd95,
    ]
    }

    fn ypa() -> [u64; 2 * Self::NWORDS_FIELD] {
        [
        0xcf298a24ab4eecc8, 0x426be362d17b58e1, 0xdec9e4ab0c0813e4, 0xbb213d92b1a23dec, 0x73f9337ebf1afb1e, 0x22a428421e3f369d,
        0x4c504fba8d4c1f41, 0x97c03c026b64e556, 0x94524150e5242247, 0x8f397d005b7d0f3, 0x2eeefb40c2d1d40f, 0x49ffa7880cc0,
        0xc735ae6a6d9ab879, 0x4431fcf02097bf97, 0xcd6c8982e0b17062, 0xd38791b330dbf671, 0xbbe57bf59a8d9150, 0x58f968f33f45a7d8,
        0x903068b77ec83b26, 0x7dadadd772211f21, 0x2a8dea498d8a12bb, 0xae73b6ae3e7657f, 0x11695a4a18565fcd, 0x303fe0d52cdb,
    ]
    }

    fn pplus_qa() -> [u64; 4 * Self::NWORDS_FIELD] {
        [
        0xa7e27390cd89ed0, 0xf359eb3682d601b3, 0x7d893292e008d357, 0xca8297ede777799d, 0xaf494679324a5427, 0xc30a8772971b92b1,
        0x291a6a8f56c222be, 0xd0d7f09ad8d323fa, 0xfa385cdcf0d0c4d5, 0x22c76490c77b6efb, 0x2466ad8bf91afd5d, 0x43e734531e6,
        0xd733e958cb9c582b, 0x19b03b0647850342, 0x31be64c55b229ccd, 0xe25b77d735d49cce, 0x6555570cab893df8, 0xa452b814fe47d118,
        0x8791843a4b61b101, 0xe761b1d5e99f89fe, 0x2b227b1d56a0931d, 0x6a279550bc1a989b, 0xdd9f4643c9ddd6df, 0x436657c7481e,
        0x18718a5b58de448d, 0x44678e528b714548, 0x3bac89684e17847f, 0xd03d5e8a7a093d5a, 0xcf07e039c76e6f3e, 0x5ae4a7f32526fa36,
        0x24d18348e9a45d10, 0x45d3164a37a0d0e6, 0xf221a442947e4bd7, 0x6bfbf5ae6db2c791, 0x1abb91ec57aeaac6, 0x5432433db9ad,
        0x33293f2db350111f, 0xcedff7e53611ec93, 0x2d739b88b42a7c75, 0x4edb6b4121ae0dd0, 0x6b32ae397dd99f95, 0xd0ac8b36d0e24c89,
        0x23d6ae11a2b1c61a, 0x8a05380734cd9e89, 0xdcb14cd3c9f292f1, 0x3e24282abab56ebd, 0x69cc3fa3be707915, 0x5dafe89bb9f2,
    ]
    }

    fn p3() -> [u64; 2 * Self::NWORDS_FIELD] {
        [
        0xF1A8C9ED7B96C4AB, 0x299429DA5178486E, 0xEF4926F20CD5C2F4, 0x683B2E2858B4716A, 0xDDA2FBCC3CAC3EEB, 0xEC055F9F3A600460,
        0xD5A5A17A58C3848B, 0x4652D836F42EAED5, 0x2F2E71ED78B3A3B3, 0xA771C057180ADD1D, 0xC780A5D2D835F512, 0x114EA3B55AC1,
        0x2E1EB8ED8C1C8C94, 0x6CFE456B25DBE01, 0x1EB54C3E8010F57A, 0x4B222D95FC81619D, 0xF99EBD204D501496, 0xC18348F9B629361,
        0xC29E9A16BEDE6F96, 0x3B39F30163DAD41D, 0x807D3D1ECF2AC04E, 0xE088443F222A4988, 0x61B49A7524F1EA12, 0x41BF31133104,
    ]
    }
}
