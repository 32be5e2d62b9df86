//! Long division: Knuth's Algorithm D, with the trial quotient digits
//! computed from 3-by-2 reciprocals instead of plain 2-by-1 division
//! (see `reciprocal.rs`).
//!
//! The word-slice core is shared between [`Uint`] division and the
//! double-width reduction used by the modular layer: normalize so the top
//! divisor bit is set, pick the 1-word / 2-word fast path or run the Knuth
//! loop, then shift the remainder back down.

use super::arith::{borrowing_sub, carrying_add};
use super::reciprocal::{reciprocal_2by1, reciprocal_3by2, udivrem_2by1, udivrem_3by2};
use super::{Uint, WideUint};

/// The index of the highest non-zero word, plus one.
fn significant_words(words: &[u64]) -> usize {
    words.iter().rposition(|w| *w != 0).map_or(0, |i| i + 1)
}

/// `x -= multiplier * y` over equal-length slices, returning the borrow out
/// of the top word.
fn submul(x: &mut [u64], y: &[u64], multiplier: u64) -> u64 {
    debug_assert_eq!(x.len(), y.len());

    let mut borrow = 0u64;
    for (xi, yi) in x.iter_mut().zip(y.iter()) {
        let (s, s_borrow) = xi.overflowing_sub(borrow);
        let p = (*yi as u128) * (multiplier as u128);
        let (t, t_borrow) = s.overflowing_sub(p as u64);
        *xi = t;
        borrow = ((p >> 64) as u64) + s_borrow as u64 + t_borrow as u64;
    }
    borrow
}

/// `x += y` over equal-length slices, returning the carry out of the top word.
fn add(x: &mut [u64], y: &[u64]) -> bool {
    debug_assert_eq!(x.len(), y.len());

    let mut carry = false;
    for (xi, yi) in x.iter_mut().zip(y.iter()) {
        let (s, c) = carrying_add(*xi, *yi, carry);
        *xi = s;
        carry = c;
    }
    carry
}

/// Divide a normalized numerator by a 1-word normalized divisor. The quotient
/// replaces the numerator words; the remainder is returned (still shifted).
fn udivrem_by1(u: &mut [u64], d: u64) -> u64 {
    debug_assert!(u.len() >= 2);

    let reciprocal = reciprocal_2by1(d);

    let mut rem = u[u.len() - 1]; // the top word starts as the remainder
    u[u.len() - 1] = 0; // and becomes the (zero) top quotient word

    for i in (0..u.len() - 1).rev() {
        let (q, r) = udivrem_2by1(((rem as u128) << 64) | u[i] as u128, d, reciprocal);
        u[i] = q;
        rem = r;
    }
    rem
}

/// Divide a normalized numerator by a 2-word normalized divisor. The quotient
/// replaces the numerator words; the remainder is returned (still shifted).
fn udivrem_by2(u: &mut [u64], d: u128) -> u128 {
    debug_assert!(u.len() >= 3);

    let reciprocal = reciprocal_3by2(d);

    let len = u.len();
    let mut rem = ((u[len - 1] as u128) << 64) | u[len - 2] as u128;
    u[len - 1] = 0;
    u[len - 2] = 0;

    for i in (0..len - 2).rev() {
        let (q, r) = udivrem_3by2((rem >> 64) as u64, rem as u64, u[i], d, reciprocal);
        u[i] = q;
        rem = r;
    }
    rem
}

/// Algorithm D proper, for divisors of 3+ words. `u` is the normalized
/// numerator including its extra top word; on return its low `d.len()` words
/// hold the (still shifted) remainder. Quotient digits land in `q`.
fn udivrem_knuth(q: &mut [u64], u: &mut [u64], d: &[u64]) {
    debug_assert!(d.len() >= 3);
    debug_assert!(u.len() > d.len());
    debug_assert_eq!(q.len(), u.len() - d.len());

    let dlen = d.len();
    let divisor = ((d[dlen - 1] as u128) << 64) | d[dlen - 2] as u128;
    let reciprocal = reciprocal_3by2(divisor);

    for j in (0..u.len() - dlen).rev() {
        let u2 = u[j + dlen];
        let u1 = u[j + dlen - 1];
        let u0 = u[j + dlen - 2];

        let qhat;
        if (((u2 as u128) << 64) | u1 as u128) == divisor {
            // The 3-by-2 division would overflow its quotient word: the true
            // digit is at least 2^64 - 1, and using exactly 2^64 - 1 leaves a
            // partial remainder the remaining iterations can absorb.
            qhat = u64::MAX;
            let borrow = submul(&mut u[j..j + dlen], d, qhat);
            u[j + dlen] = u2.wrapping_sub(borrow);
        } else {
            let (digit, rhat) = udivrem_3by2(u2, u1, u0, divisor, reciprocal);

            let overflow = submul(&mut u[j..j + dlen - 2], &d[..dlen - 2], digit);
            let (s, borrow) = borrowing_sub(rhat as u64, overflow, false);
            u[j + dlen - 2] = s;
            let (s, borrow) = borrowing_sub((rhat >> 64) as u64, 0, borrow);
            u[j + dlen - 1] = s;

            if borrow {
                // the trial digit was one too big (probability ~ 2^-64):
                // add the divisor back
                qhat = digit.wrapping_sub(1);
                let carry = add(&mut u[j..j + dlen - 1], &d[..dlen - 1]);
                u[j + dlen - 1] = u[j + dlen - 1]
                    .wrapping_add(d[dlen - 1])
                    .wrapping_add(carry as u64);
            } else {
                qhat = digit;
            }
        }

        q[j] = qhat;
    }
}

/// A numerator extended by one extra high word, kept contiguous so
/// normalization has somewhere to shift the top bits.
#[repr(C)]
pub(super) struct ExtendedNumerator<T> {
    // both fields are only ever touched through the word view
    #[allow(dead_code)]
    value: T,
    #[allow(dead_code)]
    ex: u64,
}

impl<T> ExtendedNumerator<T> {
    pub(super) fn new(value: T) -> Self {
        Self { value, ex: 0 }
    }

    pub(super) fn words_mut(&mut self) -> &mut [u64] {
        let len = std::mem::size_of::<Self>() / 8;
        // SAFETY: only instantiated with Uint/WideUint, which are plain
        // arrays of u64 words; with repr(C) the `ex` word follows them
        // immediately, so Self is `len` contiguous u64 words
        unsafe { std::slice::from_raw_parts_mut((self as *mut Self).cast::<u64>(), len) }
    }
}

/// The slice-level driver: `u / v` with the quotient written to `q` and the
/// remainder to `r`.
///
/// `un` and `vn` are scratch for the normalized numerator and divisor, with
/// `un.len() == u.len() + 1` and `vn.len() == v.len()`. `v` must be non-zero;
/// a zero divisor panics on the divisor word lookup.
pub(super) fn udivrem_words(
    u: &[u64],
    v: &[u64],
    q: &mut [u64],
    r: &mut [u64],
    un: &mut [u64],
    vn: &mut [u64],
) {
    debug_assert_eq!(un.len(), u.len() + 1);
    debug_assert_eq!(vn.len(), v.len());
    debug_assert_eq!(q.len(), u.len());
    debug_assert_eq!(r.len(), v.len());

    q.fill(0);
    r.fill(0);

    let sig_u = significant_words(u);
    let n = significant_words(v);

    if sig_u == 0 {
        return; // 0 / v == (0, 0)
    }

    // Shift left so the divisor's top bit is set; the bits shifted out of the
    // numerator land in its extra word.
    let shift = v[n - 1].leading_zeros();
    if shift != 0 {
        for i in (1..v.len()).rev() {
            vn[i] = (v[i] << shift) | (v[i - 1] >> (64 - shift));
        }
        vn[0] = v[0] << shift;

        un[u.len()] = u[u.len() - 1] >> (64 - shift);
        for i in (1..u.len()).rev() {
            un[i] = (u[i] << shift) | (u[i - 1] >> (64 - shift));
        }
        un[0] = u[0] << shift;
    } else {
        un[u.len()] = 0;
        un[..u.len()].copy_from_slice(u);
        vn.copy_from_slice(v);
    }

    // Take one extra numerator word whenever the top word would not fit under
    // the top divisor word; this keeps every quotient digit inside one word.
    let mut m = sig_u;
    if un[m] != 0 || un[m - 1] >= vn[n - 1] {
        m += 1;
    }

    if m <= n {
        // quotient is zero and the (original) numerator is the remainder
        r[..sig_u].copy_from_slice(&u[..sig_u]);
        return;
    }

    if n == 1 {
        let rem = udivrem_by1(&mut un[..m], vn[0]);
        let qn = m.min(q.len());
        q[..qn].copy_from_slice(&un[..qn]);
        r[0] = rem >> shift;
        return;
    }

    if n == 2 {
        let d = ((vn[1] as u128) << 64) | vn[0] as u128;
        let rem = udivrem_by2(&mut un[..m], d) >> shift;
        let qn = m.min(q.len());
        q[..qn].copy_from_slice(&un[..qn]);
        r[0] = rem as u64;
        r[1] = (rem >> 64) as u64;
        return;
    }

    udivrem_knuth(&mut q[..m - n], &mut un[..m], &vn[..n]);

    // the remainder sits in the low n numerator words, still shifted
    for i in 0..n - 1 {
        r[i] = if shift != 0 {
            (un[i] >> shift) | (un[i + 1] << (64 - shift))
        } else {
            un[i]
        };
    }
    r[n - 1] = un[n - 1] >> shift;
}

impl<const LIMBS: usize> Uint<LIMBS> {
    /// Division with remainder: `(self / rhs, self % rhs)`.
    ///
    /// # Panics
    ///
    /// Panics when `rhs` is zero.
    pub fn divrem(&self, rhs: &Self) -> (Self, Self) {
        debug_assert!(!rhs.is_zero(), "attempt to divide by zero");

        let mut q = Self::ZERO;
        let mut r = Self::ZERO;
        let mut un = ExtendedNumerator::new(Self::ZERO);
        let mut vn = [0u64; LIMBS];
        udivrem_words(
            &self.limbs,
            &rhs.limbs,
            &mut q.limbs,
            &mut r.limbs,
            un.words_mut(),
            &mut vn,
        );
        (q, r)
    }

    /// Signed division with remainder, interpreting both operands as two's
    /// complement. The quotient is negative when the operand signs differ;
    /// the remainder takes the sign of the dividend.
    pub fn sdivrem(&self, rhs: &Self) -> (Self, Self) {
        let u_is_neg = self.is_negative();
        let v_is_neg = rhs.is_negative();

        let u_abs = if u_is_neg { -*self } else { *self };
        let v_abs = if v_is_neg { -*rhs } else { *rhs };

        let (q, r) = u_abs.divrem(&v_abs);

        (
            if u_is_neg != v_is_neg { -q } else { q },
            if u_is_neg { -r } else { r },
        )
    }

    /// The div part of divrem
    pub fn quotient(&self, rhs: &Self) -> Self {
        self.divrem(rhs).0
    }

    /// The mod part of divrem
    pub fn remainder(&self, rhs: &Self) -> Self {
        self.divrem(rhs).1
    }
}

impl<const LIMBS: usize> WideUint<LIMBS> {
    /// Double-width division with remainder: `(self / rhs, self % rhs)`.
    ///
    /// # Panics
    ///
    /// Panics when `rhs` is zero.
    pub fn divrem(&self, rhs: &Uint<LIMBS>) -> (Self, Uint<LIMBS>) {
        debug_assert!(!rhs.is_zero(), "attempt to divide by zero");

        let mut q = Self::ZERO;
        let mut r = Uint::ZERO;
        let mut un = ExtendedNumerator::new(Self::ZERO);
        let mut vn = [0u64; LIMBS];
        udivrem_words(
            self.as_words(),
            &rhs.limbs,
            q.as_words_mut(),
            &mut r.limbs,
            un.words_mut(),
            &mut vn,
        );
        (q, r)
    }

    /// Reduce the double-width value modulo `modulus`.
    pub fn remainder(&self, modulus: &Uint<LIMBS>) -> Uint<LIMBS> {
        self.divrem(modulus).1
    }
}
