//! Word-level division helpers: precomputed reciprocals turning wide-by-narrow
//! divisions into a handful of multiplications.
//!
//! THE BIBLE: Möller & Granlund, "Improved division by invariant integers",
//! <https://gmplib.org/~tege/division-paper.pdf> (Algorithms 2, 4 and 5).
//!
//! All divisors here are *normalized*: the top bit of the top word is set.
//! The quotient/remainder routines wrap internally exactly where the paper's
//! unsigned arithmetic does.

#[inline]
fn mul_hi(x: u64, y: u64) -> u64 {
    ((x as u128 * y as u128) >> 64) as u64
}

// v0 seed for the Newton iterations: floor(0x7fd00 / d9) for the 9 top
// divisor bits d9 in [256, 512).
const RECIPROCAL_TABLE: [u16; 256] = {
    let mut table = [0u16; 256];
    let mut i = 0usize;
    while i < 256 {
        table[i] = (0x7fd00 / (0x100 + i as u32)) as u16;
        i += 1;
    }
    table
};

/// The reciprocal `floor((2^128 - 1) / d) - 2^64` of a normalized divisor.
pub(super) fn reciprocal_2by1(d: u64) -> u64 {
    debug_assert!(d & (1 << 63) != 0, "divisor must be normalized");

    let d9 = d >> 55;
    let v0 = RECIPROCAL_TABLE[(d9 - 256) as usize] as u64;

    let d40 = (d >> 24) + 1;
    let v1 = (v0 << 11) - ((v0 * v0 * d40) >> 40) - 1;
    let v2 = (v1 << 13) + ((v1 * ((1u64 << 60) - v1 * d40)) >> 47);

    let d0 = d & 1;
    let d63 = (d >> 1) + d0; // ceil(d / 2)
    let e = ((v2 >> 1) & d0.wrapping_neg()).wrapping_sub(v2.wrapping_mul(d63));
    let v3 = (mul_hi(v2, e) >> 1).wrapping_add(v2 << 31);

    v3.wrapping_sub((((v3 as u128) * (d as u128) + d as u128) >> 64) as u64)
        .wrapping_sub(d)
}

/// The 3-by-2 reciprocal of a normalized 128-bit divisor.
pub(super) fn reciprocal_3by2(d: u128) -> u64 {
    let d1 = (d >> 64) as u64;
    let d0 = d as u64;

    let mut v = reciprocal_2by1(d1);
    let mut p = d1.wrapping_mul(v).wrapping_add(d0);
    if p < d0 {
        v = v.wrapping_sub(1);
        if p >= d1 {
            v = v.wrapping_sub(1);
            p = p.wrapping_sub(d1);
        }
        p = p.wrapping_sub(d1);
    }

    let t = (v as u128) * (d0 as u128);
    let t1 = (t >> 64) as u64;
    let t0 = t as u64;

    p = p.wrapping_add(t1);
    if p < t1 {
        v = v.wrapping_sub(1);
        if (((p as u128) << 64) | t0 as u128) >= d {
            v = v.wrapping_sub(1);
        }
    }
    v
}

/// 128-by-64 division with a precomputed reciprocal.
///
/// Requires `d` normalized, `v = reciprocal_2by1(d)` and `u < d * 2^64`
/// (so the quotient fits one word). Returns `(quotient, remainder)`.
pub(super) fn udivrem_2by1(u: u128, d: u64, v: u64) -> (u64, u64) {
    let q = ((v as u128) * ((u >> 64) as u64 as u128)).wrapping_add(u);
    let q0 = q as u64;
    let mut q1 = ((q >> 64) as u64).wrapping_add(1);

    let mut r = (u as u64).wrapping_sub(q1.wrapping_mul(d));

    if r > q0 {
        q1 = q1.wrapping_sub(1);
        r = r.wrapping_add(d);
    }

    if r >= d {
        q1 += 1;
        r -= d;
    }

    (q1, r)
}

/// 192-by-128 division with a precomputed reciprocal.
///
/// Requires `d` normalized, `v = reciprocal_3by2(d)` and `(u2, u1) < d`.
/// Returns the one-word quotient and the 128-bit remainder.
pub(super) fn udivrem_3by2(u2: u64, u1: u64, u0: u64, d: u128, v: u64) -> (u64, u128) {
    let q = ((v as u128) * (u2 as u128)).wrapping_add(((u2 as u128) << 64) | u1 as u128);
    let q0 = q as u64;
    let mut q1 = (q >> 64) as u64;

    let r1 = u1.wrapping_sub(q1.wrapping_mul((d >> 64) as u64));

    let t = (d as u64 as u128) * (q1 as u128);

    let mut r = (((r1 as u128) << 64) | u0 as u128)
        .wrapping_sub(t)
        .wrapping_sub(d);

    q1 = q1.wrapping_add(1);

    if (r >> 64) as u64 >= q0 {
        q1 = q1.wrapping_sub(1);
        r = r.wrapping_add(d);
    }

    if r >= d {
        q1 = q1.wrapping_add(1);
        r = r.wrapping_sub(d);
    }

    (q1, r)
}
