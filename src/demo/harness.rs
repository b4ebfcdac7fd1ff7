// Demo Harness
// Runs the fixed test vectors and a random round trip for each configured key length

use std::io::Write;

use anyhow::{ensure, Context, Result};
use log::info;
use num_bigint::RandBigInt;
use num_traits::Zero;
use rand::Rng;

use super::config::DemoConfig;
use crate::rsa::bigint::from_u64;
use crate::rsa::{make_key_pair_with_rng, PrivateKey, PublicKey, RsaBigInt};

/// Modulus and exponents of the fixed test key
pub const KNOWN_N: u64 = 2534665157;
pub const KNOWN_E: u64 = 7;
pub const KNOWN_D: u64 = 1810402843;

/// (plaintext, ciphertext) pairs under the fixed test key
pub const KNOWN_VECTORS: [(u64, u64); 3] = [
    (123, 2463995467),
    (456, 2022084991),
    (123456, 1299565302),
];

/// Check encryption and decryption against the fixed test vectors
pub fn check_known_vectors() -> Result<()> {
    let public = PublicKey::new(KNOWN_N, KNOWN_E);
    let private = PrivateKey::new(KNOWN_N, KNOWN_D);

    for (plain, cipher) in KNOWN_VECTORS {
        let y = public.encrypt_u64(plain);
        ensure!(
            y == from_u64(cipher),
            "encrypt({}) gave {}, expected {}",
            plain,
            y,
            cipher
        );

        let x = private.decrypt_u64(cipher);
        ensure!(
            x == from_u64(plain),
            "decrypt({}) gave {}, expected {}",
            cipher,
            x,
            plain
        );
    }

    Ok(())
}

/// Check the structural properties of a freshly generated pair and
/// round-trip the message `x`. Returns the ciphertext of `x`.
pub fn check_key_pair(
    public: &PublicKey,
    private: &PrivateKey,
    length: u32,
    x: &RsaBigInt,
) -> Result<RsaBigInt> {
    ensure!(public.n() == private.n(), "public and private moduli differ");
    ensure!(
        public.bit_length() == u64::from(length),
        "modulus {} has {} bits, expected {}",
        public.n(),
        public.bit_length(),
        length
    );

    let y = public.encrypt(x);
    ensure!(&private.decrypt(&y) == x, "round trip failed for x={}", x);

    let n = public.n();
    let n_minus_one = n - 1u8;
    ensure!(public.encrypt(&n_minus_one) == n_minus_one, "encrypt(n-1) != n-1");
    ensure!(public.encrypt(n).is_zero(), "encrypt(n) != 0");
    ensure!(private.decrypt(&n_minus_one) == n_minus_one, "decrypt(n-1) != n-1");
    ensure!(private.decrypt(n).is_zero(), "decrypt(n) != 0");

    Ok(y)
}

/// Run the whole demo, printing an `x<TAB>y` line per key length to `out`
pub fn run_demo<W, R>(config: &DemoConfig, out: &mut W, rng: &mut R) -> Result<()>
where
    W: Write,
    R: Rng + ?Sized,
{
    config.validate()?;

    if config.check_known_vectors {
        check_known_vectors().context("known vector check failed")?;
        info!("known vectors OK");
    }

    writeln!(out, "x\ty")?;
    for length in config.min_length..=config.max_length {
        let (public, private) = make_key_pair_with_rng(length, rng)
            .with_context(|| format!("key generation failed for length={}", length))?;
        info!("length={}: {}", length, public);

        let bound = public.n() - 2u8;
        let x = rng.gen_biguint_below(&bound);
        let y = check_key_pair(&public, &private, length, &x)
            .with_context(|| format!("check failed for length={}", length))?;

        writeln!(out, "{}\t{}", x, y)?;
    }

    Ok(())
}
