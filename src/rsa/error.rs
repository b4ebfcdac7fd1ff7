// Key Generation Errors

use std::fmt;

use thiserror::Error;

/// Which bounded search ran out of candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Search {
    /// No pair of primes in the pool lands in the modulus range
    PrimePair { length: u32 },
    /// No odd e in [3, phi) is coprime with phi
    PublicExponent { p: u64, q: u64 },
    /// No odd d in [3, phi) satisfies d * e ≡ 1 (mod phi)
    PrivateExponent { p: u64, q: u64, e: u64 },
}

impl fmt::Display for Search {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Search::PrimePair { length } => {
                write!(f, "cannot find 'p' and 'q' for a key of length={}", length)
            }
            Search::PublicExponent { p, q } => {
                write!(f, "cannot find 'e' with p={} and q={}", p, q)
            }
            Search::PrivateExponent { p, q, e } => {
                write!(f, "cannot find 'd' with p={}, q={} and e={}", p, q, e)
            }
        }
    }
}

/// Errors returned by key pair generation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyGenError {
    #[error("invalid key length {length}: {reason}")]
    InvalidParameter { length: u32, reason: &'static str },

    #[error("key generation exhausted: {0}")]
    GenerationExhausted(Search),
}

/// Result type for key generation
pub type KeyGenResult<T> = Result<T, KeyGenError>;
