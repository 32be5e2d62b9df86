//! Schoolbook multiplication: the truncated single-width product, the full
//! double-width product in both its loop and half-decomposition forms,
//! truncated squaring, and exponentiation.

use super::{Uint, WideUint};

impl<const LIMBS: usize> Uint<LIMBS> {
    /// `self * rhs` modulo `2^BITS`.
    ///
    /// The inner loop stops one short of the top column; everything that
    /// would land at or above the top word is folded into one wrapping
    /// multiply-add on the last limb.
    pub fn wrapping_mul(&self, rhs: &Self) -> Self {
        let mut p = Self::ZERO;
        for j in 0..LIMBS {
            let mut k = 0u64;
            for i in 0..LIMBS - j - 1 {
                let t =
                    (self.limbs[i] as u128) * (rhs.limbs[j] as u128) + p.limbs[i + j] as u128 + k as u128;
                p.limbs[i + j] = t as u64;
                k = (t >> 64) as u64;
            }
            p.limbs[LIMBS - 1] = p.limbs[LIMBS - 1]
                .wrapping_add(self.limbs[LIMBS - j - 1].wrapping_mul(rhs.limbs[j]))
                .wrapping_add(k);
        }
        p
    }

    /// The full double-width product.
    pub fn mul_wide(&self, rhs: &Self) -> WideUint<LIMBS> {
        let mut p = WideUint::ZERO;
        let pw = p.as_words_mut();
        for j in 0..LIMBS {
            let mut k = 0u64;
            for i in 0..LIMBS {
                let t =
                    (self.limbs[i] as u128) * (rhs.limbs[j] as u128) + pw[i + j] as u128 + k as u128;
                pw[i + j] = t as u64;
                k = (t >> 64) as u64;
            }
            pw[j + LIMBS] = k;
        }
        p
    }

    /// The full double-width product, computed by splitting both operands
    /// into halves and recombining the four half-products.
    ///
    /// Bit-identical to [`mul_wide`](Self::mul_wide); the half products are
    /// exact, so only the recombination additions can carry.
    pub fn mul_wide_halves(&self, rhs: &Self) -> WideUint<LIMBS> {
        let half_bits = Self::BITS / 2;

        let (xl, xh) = (self.low_half(), self.high_half());
        let (yl, yh) = (rhs.low_half(), rhs.high_half());

        let t0 = xl * yl;
        let t1 = xh * yl;
        let t2 = xl * yh;
        let t3 = xh * yh;

        let u1 = t1 + (t0 >> half_bits);
        let u2 = t2 + u1.low_half();

        let lo = (u2 << half_bits) | t0.low_half();
        let hi = t3 + (u2 >> half_bits) + (u1 >> half_bits);

        WideUint::new(hi, lo)
    }

    /// `self * self` modulo `2^BITS`.
    ///
    /// Uses the half identity: only the low square contributes beyond its own
    /// half, so one full half-square and one truncated cross product suffice.
    pub fn sqr(&self) -> Self {
        let half_bits = Self::BITS / 2;

        let lo = self.low_half();
        let hi = self.high_half();

        let t = lo * lo;
        let h = ((lo * hi) << 1u32) + (t >> half_bits);

        (h << half_bits) | t.low_half()
    }

    /// `self ^ exponent` modulo `2^BITS` by binary square-and-multiply.
    ///
    /// An exponent of zero gives one. A base of two is a plain shift.
    pub fn pow(&self, exponent: &Self) -> Self {
        let result = Self::ONE;
        if *self == Self::from(2u8) {
            return result << exponent;
        }

        let mut result = result;
        let mut base = *self;
        let mut exponent = *exponent;
        while !exponent.is_zero() {
            if exponent.is_odd() {
                result *= base;
            }
            base = base.sqr();
            exponent >>= 1u32;
        }
        result
    }

    /// `self * limb`, returning the truncated product and the carry word.
    pub(super) fn mul_with_limb(&self, limb: u64) -> (Self, u64) {
        let mut out = Self::ZERO;
        let mut carry = 0u64;
        for (o, l) in out.limbs.iter_mut().zip(self.limbs.iter()) {
            let t = (*l as u128) * (limb as u128) + carry as u128;
            *o = t as u64;
            carry = (t >> 64) as u64;
        }
        (out, carry)
    }

    /// The low half of the value, zero-extended to full width.
    fn low_half(&self) -> Self {
        debug_assert_eq!(LIMBS % 2, 0);
        let mut out = Self::ZERO;
        out.limbs[..LIMBS / 2].copy_from_slice(&self.limbs[..LIMBS / 2]);
        out
    }

    /// The high half of the value, shifted down to the low words.
    fn high_half(&self) -> Self {
        debug_assert_eq!(LIMBS % 2, 0);
        let mut out = Self::ZERO;
        out.limbs[..LIMBS / 2].copy_from_slice(&self.limbs[LIMBS / 2..]);
        out
    }
}
