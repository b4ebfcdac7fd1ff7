// RSA Module - Main module file
// Exports key generation, the key types and the number theory helpers behind them

pub mod bigint;
pub mod coprime;
pub mod error;
pub mod keygen;
pub mod keys;
pub mod primes;

pub use bigint::RsaBigInt;
pub use coprime::are_coprime;
pub use error::{KeyGenError, KeyGenResult, Search};
pub use keygen::{make_key_pair, make_key_pair_with_rng, MAX_KEY_LENGTH, MIN_KEY_LENGTH};
pub use keys::{PrivateKey, PublicKey};
pub use primes::primes_in_range;
