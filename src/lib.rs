//! Fixed-width unsigned integers built from 64-bit words.
//!
//! The star of the show is [`Uint`], a little-endian array of `u64` limbs
//! behaving like a hardware integer of `64 * LIMBS` bits: wrapping `+ - *`,
//! full bitwise and shift surface, Knuth long division with reciprocal-based
//! trial digits, modular add/mul, and deterministic LE/BE serialization.
//! [`WideUint`] is the double-width companion produced by full multiplication
//! and consumed by the modular reduction.
//!
//! ```
//! use wideint::U256;
//!
//! let a: U256 = "0xffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
//!     .parse()
//!     .unwrap();
//! let b: U256 = "0x100000000000000000000000000000000".parse().unwrap();
//! let (q, r) = a.divrem(&b);
//! assert_eq!(q * b + r, a);
//! ```

pub mod uint;

pub use uint::{ParseUintError, Uint, WideUint};

/// 256-bit unsigned integer.
pub type U256 = Uint<4>;
/// 512-bit unsigned integer.
pub type U512 = Uint<8>;
/// 1024-bit unsigned integer.
pub type U1024 = Uint<16>;
