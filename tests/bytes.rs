use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use wideint::{Uint, U256, U512};

fn rand_uint<const LIMBS: usize>(rng: &mut StdRng) -> Uint<LIMBS> {
    let mut limbs = [0u64; LIMBS];
    for l in limbs.iter_mut() {
        *l = rng.gen();
    }
    Uint::from_words(limbs)
}

#[test]
fn le_round_trip() {
    let mut rng = StdRng::seed_from_u64(30);
    for _ in 0..1_000 {
        let x: U256 = rand_uint(&mut rng);
        assert_eq!(U256::from_le_bytes(x.to_le_bytes::<32>()), x);

        let x: U512 = rand_uint(&mut rng);
        assert_eq!(U512::from_le_bytes(x.to_le_bytes::<64>()), x);
    }
}

#[test]
fn be_round_trip() {
    let mut rng = StdRng::seed_from_u64(31);
    for _ in 0..1_000 {
        let x: U256 = rand_uint(&mut rng);
        assert_eq!(U256::from_be_bytes(x.to_be_bytes::<32>()), x);
        assert_eq!(x.swap_bytes().swap_bytes(), x);
    }
}

#[test]
fn be_store_of_1234() {
    let bytes: [u8; 32] = U256::from(1234u32).to_be_bytes();
    let mut expected = [0u8; 32];
    expected[30] = 0x04;
    expected[31] = 0xd2;
    assert_eq!(bytes, expected);
    assert_eq!(U256::from_be_bytes(bytes), U256::from(1234u32));
}

#[test]
fn be_and_le_images_are_reverses() {
    let mut rng = StdRng::seed_from_u64(32);
    for _ in 0..500 {
        let x: U256 = rand_uint(&mut rng);
        let mut le = x.to_le_bytes::<32>();
        le.reverse();
        assert_eq!(le, x.to_be_bytes::<32>());
        assert_eq!(x.swap_bytes().to_le_bytes::<32>(), x.to_be_bytes::<32>());
    }
}

#[test]
fn short_be_load_zero_extends() {
    let x = U256::from_be_bytes([0xde, 0xad, 0xbe, 0xef]);
    assert_eq!(x, U256::from(0xdeadbeefu32));

    // a 31-byte load leaves the top byte clear
    let x = U256::from_be_bytes([0xff; 31]);
    assert_eq!(x, U256::MAX >> 8u32);
}

#[test]
fn truncated_be_store_keeps_low_bytes() {
    let mut rng = StdRng::seed_from_u64(33);
    for _ in 0..500 {
        let x: U256 = rand_uint(&mut rng);
        let full: [u8; 32] = x.to_be_bytes();

        let t8: [u8; 8] = x.to_be_bytes_trunc();
        assert_eq!(&full[24..], &t8[..]);
        assert_eq!(u64::from_be_bytes(t8), x.as_u64());

        let t20: [u8; 20] = x.to_be_bytes_trunc();
        assert_eq!(&full[12..], &t20[..]);
    }
}

#[test]
fn raw_pointer_io_round_trip() {
    let mut rng = StdRng::seed_from_u64(34);
    for _ in 0..200 {
        let x: U256 = rand_uint(&mut rng);
        let mut buf = [0u8; 32];
        // SAFETY: buf is exactly 32 bytes
        unsafe { x.write_be_ptr(buf.as_mut_ptr()) };
        assert_eq!(buf, x.to_be_bytes::<32>());
        // SAFETY: as above
        assert_eq!(unsafe { U256::from_be_ptr(buf.as_ptr()) }, x);
    }
}

#[test]
fn parse_display_round_trip() {
    let mut rng = StdRng::seed_from_u64(35);
    for _ in 0..500 {
        let x: U256 = rand_uint(&mut rng);
        let shown = format!("{x}");
        assert_eq!(shown.parse::<U256>().unwrap(), x);
    }
}
