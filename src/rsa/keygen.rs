// RSA Key Generation
// Builds a key pair from two random primes and the smallest matching exponents

use log::{debug, warn};
use rand::seq::SliceRandom;
use rand::Rng;

use super::bigint::RsaBigInt;
use super::coprime::are_coprime;
use super::error::{KeyGenError, KeyGenResult, Search};
use super::keys::{PrivateKey, PublicKey};
use super::primes::primes_in_range;

/// Smallest modulus length that admits two distinct primes
pub const MIN_KEY_LENGTH: u32 = 4;

/// Largest modulus length the u64 search arithmetic can represent.
/// This bounds what fits in the arithmetic, not what finishes in practice:
/// trial division up to 2^(length/2 + 1) is only quick for lengths in the low thirties.
pub const MAX_KEY_LENGTH: u32 = 64;

/// Generate a key pair whose modulus has exactly `length` bits,
/// using the thread-local random number generator.
pub fn make_key_pair(length: u32) -> KeyGenResult<(PublicKey, PrivateKey)> {
    make_key_pair_with_rng(length, &mut rand::thread_rng())
}

/// Generate a key pair whose modulus has exactly `length` bits.
///
/// `rng` only drives the choice of `p` and `q`; the exponent searches are
/// deterministic once the primes are fixed, so a seeded `rng` reproduces the
/// same pair.
pub fn make_key_pair_with_rng<R: Rng + ?Sized>(
    length: u32,
    rng: &mut R,
) -> KeyGenResult<(PublicKey, PrivateKey)> {
    if length < MIN_KEY_LENGTH {
        return Err(KeyGenError::InvalidParameter {
            length,
            reason: "cannot generate a key of length less than 4",
        });
    }
    if length > MAX_KEY_LENGTH {
        return Err(KeyGenError::InvalidParameter {
            length,
            reason: "cannot generate a key of length greater than 64",
        });
    }

    // Step 1: n must have exactly `length` bits
    let n_min = 1u128 << (length - 1);
    let n_max = (1u128 << length) - 1;

    // Step 2: draw p and q from [2^(length/2 - 1), 2^(length/2 + 1)] so their
    // bit lengths differ by at most 2
    let start = 1u64 << (length / 2 - 1);
    let stop = 1u64 << (length / 2 + 1);
    let primes = primes_in_range(start, stop);
    debug!(
        "length={}: {} candidate primes in [{}, {}]",
        length,
        primes.len(),
        start,
        stop
    );

    // Step 3: pick p and q with n_min <= p * q <= n_max
    let (p, q) = choose_prime_pair(primes, n_min, n_max, rng)
        .ok_or_else(|| exhausted(Search::PrimePair { length }))?;

    // Step 4: smallest odd e coprime with phi
    let phi = (p - 1) * (q - 1);
    let e = find_public_exponent(phi).ok_or_else(|| exhausted(Search::PublicExponent { p, q }))?;

    // Step 5: smallest odd d with d * e ≡ 1 (mod phi)
    let d = find_private_exponent(e, phi)
        .ok_or_else(|| exhausted(Search::PrivateExponent { p, q, e }))?;

    debug!("length={}: p={} q={} phi={} e={} d={}", length, p, q, phi, e, d);

    // Step 6: both keys share n = p * q
    let n = RsaBigInt::from(p as u128 * q as u128);

    Ok((PublicKey::new(n.clone(), e), PrivateKey::new(n, d)))
}

/// Remove random primes from the pool until one has a partner that puts the
/// product in [n_min, n_max]. Returns None once the pool is empty.
fn choose_prime_pair<R: Rng + ?Sized>(
    mut primes: Vec<u64>,
    n_min: u128,
    n_max: u128,
    rng: &mut R,
) -> Option<(u64, u64)> {
    while !primes.is_empty() {
        let p = primes.remove(rng.gen_range(0..primes.len()));

        let q_candidates: Vec<u64> = primes
            .iter()
            .copied()
            .filter(|&q| {
                let n = p as u128 * q as u128;
                n_min <= n && n <= n_max
            })
            .collect();

        if let Some(&q) = q_candidates.choose(rng) {
            return Some((p, q));
        }
    }

    None
}

/// First odd e in [3, phi) that shares no factor with phi
fn find_public_exponent(phi: u64) -> Option<u64> {
    (3..phi).step_by(2).find(|&e| are_coprime(e, phi))
}

/// First odd d in [3, phi) with d * e mod phi == 1
fn find_private_exponent(e: u64, phi: u64) -> Option<u64> {
    (3..phi)
        .step_by(2)
        .find(|&d| (d as u128 * e as u128) % phi as u128 == 1)
}

fn exhausted(search: Search) -> KeyGenError {
    warn!("{}", search);
    KeyGenError::GenerationExhausted(search)
}
