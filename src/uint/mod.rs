//! Fixed-width unsigned integers as little-endian arrays of 64-bit limbs.
//!
//! THE BIBLE: Knuth, TAOCP vol. 2, §4.3.1.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

mod arith;
mod bytes;
mod div;
mod modular;
mod mul;
mod reciprocal;

mod wide;
pub use wide::WideUint;

/// An unsigned integer of `64 * LIMBS` bits.
///
/// Limb 0 is the least significant word. All arithmetic wraps modulo
/// `2^(64 * LIMBS)`, matching the behavior of the built-in unsigned types.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct Uint<const LIMBS: usize> {
    limbs: [u64; LIMBS],
}

impl<const LIMBS: usize> Uint<LIMBS> {
    /// Width of the integer in bits.
    pub const BITS: u32 = 64 * LIMBS as u32;

    /// Width of the integer in bytes.
    pub const BYTES: usize = 8 * LIMBS;

    pub const MAX: Self = Self {
        limbs: [u64::MAX; LIMBS],
    };

    pub const MIN: Self = Self {
        limbs: [u64::MIN; LIMBS],
    };

    pub const ZERO: Self = Self::MIN;

    pub const ONE: Self = {
        let mut limbs = [0u64; LIMBS];
        limbs[0] = 1;
        Uint { limbs }
    };

    /// Build a value directly from its little-endian limbs.
    pub const fn from_words(limbs: [u64; LIMBS]) -> Self {
        Self { limbs }
    }

    /// The little-endian limbs of the value.
    pub const fn as_words(&self) -> &[u64; LIMBS] {
        &self.limbs
    }

    pub fn as_words_mut(&mut self) -> &mut [u64; LIMBS] {
        &mut self.limbs
    }

    /// Assemble a value from its high and low halves.
    ///
    /// `HALF` must be exactly `LIMBS / 2`.
    pub fn from_halves<const HALF: usize>(high: Uint<HALF>, low: Uint<HALF>) -> Self {
        assert_eq!(2 * HALF, LIMBS, "halves must be half the width");
        let mut limbs = [0u64; LIMBS];
        limbs[..HALF].copy_from_slice(&low.limbs);
        limbs[HALF..].copy_from_slice(&high.limbs);
        Self { limbs }
    }

    /// Split a value into its `(high, low)` halves.
    pub fn into_halves<const HALF: usize>(self) -> (Uint<HALF>, Uint<HALF>) {
        assert_eq!(2 * HALF, LIMBS, "halves must be half the width");
        let mut high = Uint::ZERO;
        let mut low = Uint::ZERO;
        low.limbs.copy_from_slice(&self.limbs[..HALF]);
        high.limbs.copy_from_slice(&self.limbs[HALF..]);
        (high, low)
    }

    pub fn is_zero(&self) -> bool {
        self.limbs.iter().all(|x| *x == 0)
    }

    pub fn is_one(&self) -> bool {
        self.limbs[0] == 1 && self.limbs[1..].iter().all(|x| *x == 0)
    }

    /// Whether the value has a zero lowest bit.
    pub fn is_even(&self) -> bool {
        !self.is_odd()
    }

    /// Whether the value has a set lowest bit.
    pub fn is_odd(&self) -> bool {
        self.limbs[0] & 1 == 1
    }

    pub fn count_ones(&self) -> u32 {
        self.limbs.iter().fold(0, |acc, limb| acc + limb.count_ones())
    }

    pub fn count_zeros(&self) -> u32 {
        Self::BITS - self.count_ones()
    }

    pub fn leading_zeros(&self) -> u32 {
        let mut count = 0;
        for limb in self.limbs.iter().rev() {
            if *limb == 0 {
                count += 64;
            } else {
                return count + limb.leading_zeros();
            }
        }
        count
    }

    pub fn trailing_zeros(&self) -> u32 {
        let mut count = 0;
        for limb in self.limbs.iter() {
            if *limb == 0 {
                count += 64;
            } else {
                return count + limb.trailing_zeros();
            }
        }
        count
    }

    /// The position of the highest set bit, plus one. Zero for zero.
    pub fn bit_length(&self) -> u32 {
        Self::BITS - self.leading_zeros()
    }

    /// Whether the bit at `bit` (counted up from the least significant end)
    /// is set.
    pub fn test_bit(&self, bit: usize) -> bool {
        debug_assert!(bit < Self::BITS as usize, "bit index {bit} out of range");

        self.limbs[bit / 64] & (1u64 << (bit % 64)) != 0
    }

    /// Zero-extend into a wider type (`OUT_LIMBS >= LIMBS`).
    pub fn widen<const OUT_LIMBS: usize>(&self) -> Uint<OUT_LIMBS> {
        let mut limbs = [0u64; OUT_LIMBS];
        limbs[..LIMBS].copy_from_slice(&self.limbs);
        Uint { limbs }
    }

    /// Truncate into a narrower type (`OUT_LIMBS <= LIMBS`), dropping the
    /// high limbs.
    pub fn narrow<const OUT_LIMBS: usize>(&self) -> Uint<OUT_LIMBS> {
        let mut limbs = [0u64; OUT_LIMBS];
        limbs.copy_from_slice(&self.limbs[..OUT_LIMBS]);
        Uint { limbs }
    }

    /// The low 64 bits of the value.
    pub fn as_u64(&self) -> u64 {
        self.limbs[0]
    }

    /// The low 128 bits of the value.
    pub fn as_u128(&self) -> u128 {
        let hi = if LIMBS > 1 { self.limbs[1] } else { 0 };
        ((hi as u128) << 64) | self.limbs[0] as u128
    }
}

macro_rules! impl_from_for_uint {
    ($uX:ty) => {
        impl<const LIMBS: usize> From<$uX> for Uint<LIMBS> {
            fn from(value: $uX) -> Self {
                let mut limbs = [0; LIMBS];
                limbs[0] = value.into();
                Self { limbs }
            }
        }
    };
}

impl_from_for_uint!(u64);
impl_from_for_uint!(u32);
impl_from_for_uint!(u16);
impl_from_for_uint!(u8);

impl<const LIMBS: usize> From<usize> for Uint<LIMBS> {
    fn from(value: usize) -> Self {
        Self::from(value as u64)
    }
}

impl<const LIMBS: usize> From<u128> for Uint<LIMBS> {
    fn from(value: u128) -> Self {
        assert!(LIMBS >= 2, "value does not fit in a single limb");
        let mut limbs = [0; LIMBS];
        limbs[0] = value as u64;
        limbs[1] = (value >> 64) as u64;
        Self { limbs }
    }
}

impl<const LIMBS: usize> Default for Uint<LIMBS> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const LIMBS: usize> fmt::Display for Uint<LIMBS> {
    /// `0x`-prefixed hexadecimal, with no leading zeros.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let top = match self.limbs.iter().rposition(|limb| *limb != 0) {
            Some(i) => i,
            None => return f.write_str("0x0"),
        };

        // the top limb unpadded, every limb below it zero-padded
        write!(f, "0x{:x}", self.limbs[top])?;
        for limb in self.limbs[..top].iter().rev() {
            write!(f, "{limb:016x}")?;
        }
        Ok(())
    }
}

/// The ways a string can fail to be a number.
#[derive(Error, Debug, Copy, Clone, Eq, PartialEq)]
pub enum ParseUintError {
    #[error("cannot parse an integer from an empty string")]
    Empty,
    #[error("invalid digit found in string")]
    InvalidDigit,
    #[error("number too large to fit in the target width")]
    Overflow,
}

impl<const LIMBS: usize> FromStr for Uint<LIMBS> {
    type Err = ParseUintError;

    /// Parses a decimal number, or a hexadecimal one with a `0x` prefix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseUintError::Empty);
        }

        match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            Some(hex) => Self::from_hex_digits(hex),
            None => Self::from_dec_digits(s),
        }
    }
}

impl<const LIMBS: usize> Uint<LIMBS> {
    fn from_hex_digits(s: &str) -> Result<Self, ParseUintError> {
        if s.is_empty() {
            return Err(ParseUintError::Empty);
        }
        if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseUintError::InvalidDigit);
        }

        let digits = s.trim_start_matches('0').as_bytes();
        if digits.len() > LIMBS * 16 {
            return Err(ParseUintError::Overflow);
        }

        let mut out = Self::ZERO;
        for (limb, chunk) in out.limbs.iter_mut().zip(digits.rchunks(16)) {
            let chunk = std::str::from_utf8(chunk).expect("hex digits are ascii");
            *limb = u64::from_str_radix(chunk, 16).map_err(|_| ParseUintError::InvalidDigit)?;
        }

        Ok(out)
    }

    fn from_dec_digits(s: &str) -> Result<Self, ParseUintError> {
        let mut out = Self::ZERO;
        for b in s.bytes() {
            if !b.is_ascii_digit() {
                return Err(ParseUintError::InvalidDigit);
            }

            let (shifted, carry) = out.mul_with_limb(10);
            if carry != 0 {
                return Err(ParseUintError::Overflow);
            }
            let (sum, overflow) = shifted.carrying_add(&Self::from(b - b'0'), false);
            if overflow {
                return Err(ParseUintError::Overflow);
            }
            out = sum;
        }
        Ok(out)
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    use super::Uint;

    impl<const LIMBS: usize> Serialize for Uint<LIMBS> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    impl<'de, const LIMBS: usize> Deserialize<'de> for Uint<LIMBS> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let s = String::deserialize(deserializer)?;
            s.parse().map_err(de::Error::custom)
        }
    }
}
