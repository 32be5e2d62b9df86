use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use wideint::{Uint, WideUint, U256};

fn rand_uint<const LIMBS: usize>(rng: &mut StdRng) -> Uint<LIMBS> {
    let mut limbs = [0u64; LIMBS];
    for l in limbs.iter_mut() {
        *l = rng.gen();
    }
    Uint::from_words(limbs)
}

/// `(x + y) mod m` computed through the widened sum, independent of any
/// fast path inside `add_mod`.
fn add_mod_reference(x: &U256, y: &U256, m: &U256) -> U256 {
    let (sum, carry) = x.carrying_add(y, false);
    WideUint::new(U256::from(carry as u64), sum).remainder(m)
}

/// `(x * y) mod m` through the double-width product.
fn mul_mod_reference(x: &U256, y: &U256, m: &U256) -> U256 {
    x.mul_wide(y).remainder(m)
}

#[test]
fn add_mod_with_wrapping_sum() {
    // (2^256 - 1) + (2^256 - 1) mod 2^255 == 2^255 - 2
    let x = U256::MAX;
    let m = U256::ONE << 255u32;
    let expected = m - U256::from(2u8);
    assert_eq!(x.add_mod(&x, &m), expected);
    assert_eq!(add_mod_reference(&x, &x, &m), expected);
}

#[test]
fn add_mod_matches_reference() {
    let mut rng = StdRng::seed_from_u64(20);
    for _ in 0..3_000 {
        let x: U256 = rand_uint(&mut rng);
        let y: U256 = rand_uint(&mut rng);
        let m = rand_uint::<4>(&mut rng) >> rng.gen_range(0..256u32);
        if m.is_zero() {
            continue;
        }
        let got = x.add_mod(&y, &m);
        assert!(got < m);
        assert_eq!(got, add_mod_reference(&x, &y, &m));
    }
}

#[test]
fn add_mod_reduced_operands_hit_the_fast_path() {
    // a top-heavy modulus and reduced operands satisfy the fast-path guard;
    // the result must be identical to the generic reduction
    let mut rng = StdRng::seed_from_u64(21);
    for _ in 0..2_000 {
        let m = rand_uint::<4>(&mut rng) | (U256::ONE << 200u32);
        let x = rand_uint::<4>(&mut rng).remainder(&m);
        let y = rand_uint::<4>(&mut rng).remainder(&m);
        assert_eq!(x.add_mod(&y, &m), add_mod_reference(&x, &y, &m));
    }
}

#[test]
fn add_mod_guard_boundary() {
    // the fast-path guard compares top words only, so it admits operands a
    // little bigger than the modulus; sweep the boundary
    let m = U256::from_words([17, 0, 0, 1 << 63]);
    for dx in 0..32u64 {
        for dy in 0..32u64 {
            let x = m + U256::from(dx);
            let y = m + U256::from(dy);
            let expected = U256::from(dx + dy).remainder(&m);
            assert_eq!(x.add_mod(&y, &m), expected);
            assert_eq!(add_mod_reference(&x, &y, &m), expected);
        }
    }
}

#[test]
fn add_mod_is_commutative_and_associative() {
    let mut rng = StdRng::seed_from_u64(22);
    for _ in 0..1_000 {
        let m = rand_uint::<4>(&mut rng);
        if m.is_zero() {
            continue;
        }
        let x = rand_uint::<4>(&mut rng).remainder(&m);
        let y = rand_uint::<4>(&mut rng).remainder(&m);
        let z = rand_uint::<4>(&mut rng).remainder(&m);

        assert_eq!(x.add_mod(&y, &m), y.add_mod(&x, &m));
        assert_eq!(
            x.add_mod(&y, &m).add_mod(&z, &m),
            x.add_mod(&y.add_mod(&z, &m), &m)
        );
    }
}

#[test]
fn mul_mod_matches_reference() {
    let mut rng = StdRng::seed_from_u64(23);
    for _ in 0..2_000 {
        let x: U256 = rand_uint(&mut rng);
        let y: U256 = rand_uint(&mut rng);
        let m = rand_uint::<4>(&mut rng) >> rng.gen_range(0..256u32);
        if m.is_zero() {
            continue;
        }
        let got = x.mul_mod(&y, &m);
        assert!(got < m);
        assert_eq!(got, mul_mod_reference(&x, &y, &m));
    }
}

#[test]
fn mul_mod_distributes_over_add_mod() {
    let mut rng = StdRng::seed_from_u64(24);
    for _ in 0..1_000 {
        let m = rand_uint::<4>(&mut rng);
        if m.is_zero() {
            continue;
        }
        let x = rand_uint::<4>(&mut rng);
        let y = rand_uint::<4>(&mut rng);
        let z = rand_uint::<4>(&mut rng);

        // x * (y + z) == x*y + x*z, all mod m
        let lhs = x.mul_mod(&y.add_mod(&z, &m), &m);
        let rhs = x.mul_mod(&y, &m).add_mod(&x.mul_mod(&z, &m), &m);
        assert_eq!(lhs, rhs);
    }
}

#[test]
fn small_values_sanity() {
    let m = U256::from(97u8);
    assert_eq!(U256::from(50u8).add_mod(&U256::from(60u8), &m), U256::from(13u8));
    assert_eq!(U256::from(96u8).add_mod(&U256::ONE, &m), U256::ZERO);
    assert_eq!(U256::from(10u8).mul_mod(&U256::from(10u8), &m), U256::from(3u8));
    assert_eq!(U256::from(96u8).mul_mod(&U256::from(96u8), &m), U256::ONE);
}
