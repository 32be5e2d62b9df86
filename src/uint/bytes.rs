//! Byte-level conversions. Little-endian is the storage order, so the LE
//! forms are straight copies; the big-endian forms reverse the whole value.
//!
//! The byte-count parameters are const generics checked against the width,
//! so a mismatched buffer fails loudly at the call site.

use super::Uint;

impl<const LIMBS: usize> Uint<LIMBS> {
    /// Load a value from its little-endian byte image.
    pub fn from_le_bytes<const BYTES: usize>(bytes: [u8; BYTES]) -> Self {
        assert_eq!(BYTES, Self::BYTES, "byte count must match the integer width");

        let mut out = Self::ZERO;
        for (limb, chunk) in out.limbs.iter_mut().zip(bytes.chunks_exact(8)) {
            *limb = u64::from_le_bytes(chunk.try_into().expect("chunks are 8 bytes"));
        }
        out
    }

    /// Store the value as its little-endian byte image.
    pub fn to_le_bytes<const BYTES: usize>(&self) -> [u8; BYTES] {
        assert_eq!(BYTES, Self::BYTES, "byte count must match the integer width");

        let mut out = [0u8; BYTES];
        for (chunk, limb) in out.chunks_exact_mut(8).zip(self.limbs.iter()) {
            chunk.copy_from_slice(&limb.to_le_bytes());
        }
        out
    }

    /// Load a value from big-endian bytes. A source shorter than the integer
    /// is zero-extended at the most significant end.
    pub fn from_be_bytes<const BYTES: usize>(bytes: [u8; BYTES]) -> Self {
        assert!(
            BYTES <= Self::BYTES,
            "source bytes must not exceed the integer width"
        );

        let mut out = Self::ZERO;
        for (i, byte) in bytes.iter().rev().enumerate() {
            out.limbs[i / 8] |= (*byte as u64) << (8 * (i % 8));
        }
        out
    }

    /// Store the value as its big-endian byte image.
    pub fn to_be_bytes<const BYTES: usize>(&self) -> [u8; BYTES] {
        assert_eq!(BYTES, Self::BYTES, "byte count must match the integer width");

        let mut out = [0u8; BYTES];
        for (chunk, limb) in out.rchunks_exact_mut(8).zip(self.limbs.iter()) {
            chunk.copy_from_slice(&limb.to_be_bytes());
        }
        out
    }

    /// Store only the least significant `BYTES` bytes of the value, in
    /// big-endian order.
    pub fn to_be_bytes_trunc<const BYTES: usize>(&self) -> [u8; BYTES] {
        assert!(
            BYTES < Self::BYTES,
            "truncated destination must be smaller than the value"
        );

        let mut out = [0u8; BYTES];
        for i in 0..BYTES {
            out[BYTES - 1 - i] = (self.limbs[i / 8] >> (8 * (i % 8))) as u8;
        }
        out
    }

    /// Reverse the bytes of the whole value: reverse the word order and swap
    /// the bytes within each word.
    pub fn swap_bytes(self) -> Self {
        let mut out = Self::ZERO;
        for (o, limb) in out.limbs.iter_mut().rev().zip(self.limbs.iter()) {
            *o = limb.swap_bytes();
        }
        out
    }

    /// Load a value from `Self::BYTES` big-endian bytes at `src`.
    ///
    /// # Safety
    ///
    /// `src` must be valid for reads of `Self::BYTES` bytes.
    pub unsafe fn from_be_ptr(src: *const u8) -> Self {
        let mut out = Self::ZERO;
        for i in 0..Self::BYTES {
            let byte = src.add(Self::BYTES - 1 - i).read();
            out.limbs[i / 8] |= (byte as u64) << (8 * (i % 8));
        }
        out
    }

    /// Store the value as `Self::BYTES` big-endian bytes at `dst`.
    ///
    /// # Safety
    ///
    /// `dst` must be valid for writes of `Self::BYTES` bytes.
    pub unsafe fn write_be_ptr(&self, dst: *mut u8) {
        for i in 0..Self::BYTES {
            dst.add(Self::BYTES - 1 - i)
                .write((self.limbs[i / 8] >> (8 * (i % 8))) as u8);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_le_round_trip() {
        let a = Uint::<4>::from_words([
            0x0706050403020100,
            0x0f0e0d0c0b0a0908,
            0x1716151413121110,
            0x1f1e1d1c1b1a1918,
        ]);
        let bytes: [u8; 32] = a.to_le_bytes();
        let expected: Vec<u8> = (0u8..32).collect();
        assert_eq!(&bytes[..], &expected[..]);
        assert_eq!(Uint::from_le_bytes(bytes), a);
    }

    #[test]
    fn test_be_store_small_value() {
        // 1234 is 0x04d2: all zero bytes except the last two
        let a = Uint::<4>::from(1234u32);
        let bytes: [u8; 32] = a.to_be_bytes();
        assert_eq!(&bytes[..30], &[0u8; 30]);
        assert_eq!(bytes[30], 0x04);
        assert_eq!(bytes[31], 0xd2);
        assert_eq!(Uint::<4>::from_be_bytes(bytes), a);
    }

    #[test]
    fn test_be_round_trip() {
        let a = Uint::<4>::from_words([1, 2, 3, 0x8000000000000004]);
        let bytes: [u8; 32] = a.to_be_bytes();
        assert_eq!(Uint::<4>::from_be_bytes(bytes), a);
        assert_eq!(bytes[0], 0x80);

        let b: Uint<8> = "0xdeadbeefcafebabe0123456789abcdef".parse().unwrap();
        assert_eq!(Uint::<8>::from_be_bytes(b.to_be_bytes::<64>()), b);
    }

    #[test]
    fn test_be_load_short_input_zero_extends() {
        let a = Uint::<4>::from_be_bytes([0x04, 0xd2]);
        assert_eq!(a, 1234u16.into());

        let a = Uint::<4>::from_be_bytes([0x01; 20]);
        let mut expected = Uint::ZERO;
        for i in 0..20 {
            expected |= Uint::ONE << (8 * i) as u32;
        }
        assert_eq!(a, expected);

        assert_eq!(Uint::<4>::from_be_bytes([]), Uint::ZERO);
    }

    #[test]
    fn test_be_trunc() {
        let a = Uint::<4>::from(0x0123456789abcdefu64);
        let bytes: [u8; 4] = a.to_be_bytes_trunc();
        assert_eq!(bytes, [0x89, 0xab, 0xcd, 0xef]);

        // truncation keeps the least significant end
        let full: [u8; 32] = a.to_be_bytes();
        let trunc: [u8; 20] = a.to_be_bytes_trunc();
        assert_eq!(&full[12..], &trunc[..]);
    }

    #[test]
    fn test_swap_bytes() {
        let a = Uint::<4>::from(1u8);
        let swapped = a.swap_bytes();
        assert_eq!(swapped, Uint::from_words([0, 0, 0, 1 << 56]));
        assert_eq!(swapped.swap_bytes(), a);

        // swapping is the bridge between the LE and BE images
        let x = Uint::<4>::from_words([
            0xdeadbeefcafebabe,
            0x0123456789abcdef,
            0xfedcba9876543210,
            0x0f1e2d3c4b5a6978,
        ]);
        assert_eq!(x.swap_bytes().to_le_bytes::<32>(), x.to_be_bytes::<32>());
        assert_eq!(x.swap_bytes().swap_bytes(), x);
    }

    #[test]
    fn test_raw_pointer_io() {
        let a = Uint::<4>::from_words([5, 6, 7, 8]);
        let mut buf = [0u8; 32];
        // SAFETY: buf is exactly Self::BYTES bytes
        unsafe { a.write_be_ptr(buf.as_mut_ptr()) };
        assert_eq!(buf, a.to_be_bytes::<32>());

        // SAFETY: as above
        let b = unsafe { Uint::<4>::from_be_ptr(buf.as_ptr()) };
        assert_eq!(b, a);
    }
}
