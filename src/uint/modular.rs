//! Modular addition and multiplication over an arbitrary (non-zero) modulus.

use super::{Uint, WideUint};

impl<const LIMBS: usize> Uint<LIMBS> {
    /// `(self + rhs) mod modulus`, correct even when the sum wraps.
    ///
    /// # Panics
    ///
    /// Panics when `modulus` is zero.
    pub fn add_mod(&self, rhs: &Self, modulus: &Self) -> Self {
        debug_assert!(!modulus.is_zero(), "attempt to divide by zero");

        // Fast path for a modulus occupying its top word, with operands at
        // most slightly bigger than it. This always holds for operands
        // already reduced modulo m.
        // Based on https://github.com/holiman/uint256/pull/86.
        let top = LIMBS - 1;
        if modulus.limbs[top] != 0
            && self.limbs[top] <= modulus.limbs[top]
            && rhs.limbs[top] <= modulus.limbs[top]
        {
            let (x, borrow) = self.borrowing_sub(modulus, false);
            let x = if borrow { *self } else { x };

            let (y, borrow) = rhs.borrowing_sub(modulus, false);
            let y = if borrow { *rhs } else { y };

            let (sum, carry) = x.carrying_add(&y, false);
            let (reduced, borrow) = sum.borrowing_sub(modulus, false);
            return if carry || !borrow { reduced } else { sum };
        }

        // one extra word catches the carry, then reduce the widened sum
        let (sum, carry) = self.carrying_add(rhs, false);
        WideUint::new(Self::from(carry as u64), sum).remainder(modulus)
    }

    /// `(self * rhs) mod modulus`, via the full double-width product.
    ///
    /// # Panics
    ///
    /// Panics when `modulus` is zero.
    pub fn mul_mod(&self, rhs: &Self, modulus: &Self) -> Self {
        self.mul_wide(rhs).remainder(modulus)
    }
}
