use std::cmp::Ordering;

use super::Uint;

/// A double-width unsigned integer: the result type of full multiplication
/// and the numerator type of the 2N-by-N modular reduction.
///
/// The low half is declared first so that, with `repr(C)`, the struct is one
/// contiguous little-endian array of `2 * LIMBS` words.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[repr(C)]
pub struct WideUint<const LIMBS: usize> {
    /// The least significant half of the number
    lo: Uint<LIMBS>,
    /// The most significant half of the number
    hi: Uint<LIMBS>,
}

impl<const LIMBS: usize> WideUint<LIMBS> {
    pub const ZERO: Self = Self {
        lo: Uint::ZERO,
        hi: Uint::ZERO,
    };

    pub const MAX: Self = Self {
        lo: Uint::MAX,
        hi: Uint::MAX,
    };

    pub const MIN: Self = Self::ZERO;

    pub const fn new(high: Uint<LIMBS>, low: Uint<LIMBS>) -> Self {
        Self { lo: low, hi: high }
    }

    pub fn split(self) -> (Uint<LIMBS>, Uint<LIMBS>) {
        (self.hi, self.lo)
    }

    /// The most significant half.
    pub const fn high(&self) -> &Uint<LIMBS> {
        &self.hi
    }

    /// The least significant half.
    pub const fn low(&self) -> &Uint<LIMBS> {
        &self.lo
    }

    pub fn is_zero(&self) -> bool {
        self.lo.is_zero() && self.hi.is_zero()
    }

    /// The value as one little-endian slice of `2 * LIMBS` words.
    pub fn as_words(&self) -> &[u64] {
        // SAFETY: repr(C) with both fields repr(transparent) over [u64; LIMBS]
        // makes Self exactly 2 * LIMBS contiguous u64 words
        unsafe { std::slice::from_raw_parts((self as *const Self).cast::<u64>(), 2 * LIMBS) }
    }

    pub fn as_words_mut(&mut self) -> &mut [u64] {
        // SAFETY: as in as_words
        unsafe { std::slice::from_raw_parts_mut((self as *mut Self).cast::<u64>(), 2 * LIMBS) }
    }
}

impl<const LIMBS: usize> From<Uint<LIMBS>> for WideUint<LIMBS> {
    /// Zero-extend a single-width value.
    fn from(value: Uint<LIMBS>) -> Self {
        Self {
            lo: value,
            hi: Uint::ZERO,
        }
    }
}

impl<const LIMBS: usize> Default for WideUint<LIMBS> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const LIMBS: usize> PartialOrd for WideUint<LIMBS> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const LIMBS: usize> Ord for WideUint<LIMBS> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.hi.cmp(&other.hi).then_with(|| self.lo.cmp(&other.lo))
    }
}

impl<const LIMBS: usize> PartialEq<Uint<LIMBS>> for WideUint<LIMBS> {
    fn eq(&self, other: &Uint<LIMBS>) -> bool {
        self.hi.is_zero() && &self.lo == other
    }
}

impl<const LIMBS: usize> PartialOrd<Uint<LIMBS>> for WideUint<LIMBS> {
    fn partial_cmp(&self, other: &Uint<LIMBS>) -> Option<Ordering> {
        // a single-width value can never reach the high half
        if self.hi.is_zero() {
            self.lo.partial_cmp(other)
        } else {
            Some(Ordering::Greater)
        }
    }
}
