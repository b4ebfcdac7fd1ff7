// RSA Public and Private Keys
// Immutable (modulus, exponent) pairs; encryption and decryption are x^k mod n

use std::fmt;

use num_bigint::BigInt;

use super::bigint::{from_u64, mod_pow, normalize_signed, RsaBigInt};

/// RSA Public Key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PublicKey {
    n: RsaBigInt, // Modulus
    e: RsaBigInt, // Public exponent
}

/// RSA Private Key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrivateKey {
    n: RsaBigInt, // Modulus (same as public)
    d: RsaBigInt, // Private exponent
}

impl PublicKey {
    pub fn new(n: impl Into<RsaBigInt>, e: impl Into<RsaBigInt>) -> Self {
        Self {
            n: n.into(),
            e: e.into(),
        }
    }

    pub fn n(&self) -> &RsaBigInt {
        &self.n
    }

    pub fn e(&self) -> &RsaBigInt {
        &self.e
    }

    /// Number of significant bits in the modulus
    pub fn bit_length(&self) -> u64 {
        self.n.bits()
    }

    /// Encrypt the number `x`.
    ///
    /// The result can only be turned back into `x mod n` with the matching
    /// private key. Always lies in [0, n).
    pub fn encrypt(&self, x: &RsaBigInt) -> RsaBigInt {
        mod_pow(x, &self.e, &self.n)
    }

    pub fn encrypt_u64(&self, x: u64) -> RsaBigInt {
        self.encrypt(&from_u64(x))
    }

    /// Encrypt a signed integer, reducing it into [0, n) first
    pub fn encrypt_signed(&self, x: &BigInt) -> RsaBigInt {
        self.encrypt(&normalize_signed(x, &self.n))
    }
}

impl PrivateKey {
    pub fn new(n: impl Into<RsaBigInt>, d: impl Into<RsaBigInt>) -> Self {
        Self {
            n: n.into(),
            d: d.into(),
        }
    }

    pub fn n(&self) -> &RsaBigInt {
        &self.n
    }

    pub fn d(&self) -> &RsaBigInt {
        &self.d
    }

    /// Number of significant bits in the modulus
    pub fn bit_length(&self) -> u64 {
        self.n.bits()
    }

    /// Decrypt the number `x`, which should come from [`PublicKey::encrypt`].
    pub fn decrypt(&self, x: &RsaBigInt) -> RsaBigInt {
        mod_pow(x, &self.d, &self.n)
    }

    pub fn decrypt_u64(&self, x: u64) -> RsaBigInt {
        self.decrypt(&from_u64(x))
    }

    /// Decrypt a signed integer, reducing it into [0, n) first
    pub fn decrypt_signed(&self, x: &BigInt) -> RsaBigInt {
        self.decrypt(&normalize_signed(x, &self.n))
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey(n={}, e={})", self.n, self.e)
    }
}

impl fmt::Display for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PrivateKey(n={}, d={})", self.n, self.d)
    }
}
