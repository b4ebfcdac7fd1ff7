use num_bigint::BigUint;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use toy_rsa::{
    are_coprime, make_key_pair, make_key_pair_with_rng, primes_in_range, KeyGenError, PrivateKey,
    PublicKey,
};

#[test]
fn test_fixed_key_vectors() {
    let public = PublicKey::new(2534665157u64, 7u64);
    let private = PrivateKey::new(2534665157u64, 1810402843u64);

    assert_eq!(public.encrypt_u64(123), BigUint::from(2463995467u64));
    assert_eq!(public.encrypt_u64(456), BigUint::from(2022084991u64));
    assert_eq!(public.encrypt_u64(123456), BigUint::from(1299565302u64));

    assert_eq!(private.decrypt_u64(2463995467), BigUint::from(123u64));
    assert_eq!(private.decrypt_u64(2022084991), BigUint::from(456u64));
    assert_eq!(private.decrypt_u64(1299565302), BigUint::from(123456u64));
}

#[test]
fn test_generated_pairs() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);

    for length in 4..=16u32 {
        let (public, private) = make_key_pair_with_rng(length, &mut rng).unwrap();
        assert_eq!(public.n(), private.n());
        assert_eq!(public.n().bits(), u64::from(length));

        let n = public.n();
        let n_minus_one = n - 1u8;
        assert_eq!(public.encrypt(&n_minus_one), n_minus_one);
        assert_eq!(public.encrypt(n), BigUint::from(0u8));
        assert_eq!(private.decrypt(&n_minus_one), n_minus_one);
        assert_eq!(private.decrypt(n), BigUint::from(0u8));

        for x in [0u64, 1, 2, 5] {
            let x = BigUint::from(x);
            assert_eq!(private.decrypt(&public.encrypt(&x)), x);
        }
    }
}

#[test]
fn test_invalid_length() {
    assert!(matches!(
        make_key_pair(3),
        Err(KeyGenError::InvalidParameter { length: 3, .. })
    ));
}

#[test]
fn test_helpers() {
    assert!(primes_in_range(10, 5).is_empty());
    assert_eq!(primes_in_range(10, 20), vec![11, 13, 17, 19]);
    assert!(are_coprime(8, 15));
    assert!(!are_coprime(8, 14));
}
