//! Textbook RSA over tiny key lengths.
//!
//! Key pairs are built from two primes found by trial division, a public
//! exponent found by a brute-force coprimality scan and a private exponent
//! found by direct search. Encryption and decryption are plain modular
//! exponentiation of integers, with no padding.

pub mod demo;
pub mod rsa;

pub use rsa::{
    are_coprime, make_key_pair, make_key_pair_with_rng, primes_in_range, KeyGenError,
    KeyGenResult, PrivateKey, PublicKey, RsaBigInt,
};
