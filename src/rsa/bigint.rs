// RSA Big Integer Operations
// Wrapper around num-bigint for the key types and modular exponentiation

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::Zero;

/// RSA Big Integer type alias
pub type RsaBigInt = BigUint;

/// Create a big integer from u64
pub fn from_u64(n: u64) -> RsaBigInt {
    RsaBigInt::from(n)
}

/// Convert a big integer back to u64, if it fits
pub fn to_u64(n: &RsaBigInt) -> Option<u64> {
    u64::try_from(n).ok()
}

/// Modular exponentiation: base^exp mod modulus.
/// The base is reduced mod modulus first, so inputs >= modulus are accepted.
/// A modulus of 0 or 1 yields 0.
pub fn mod_pow(base: &RsaBigInt, exp: &RsaBigInt, modulus: &RsaBigInt) -> RsaBigInt {
    if modulus.is_zero() {
        return RsaBigInt::zero();
    }

    (base % modulus).modpow(exp, modulus)
}

/// Reduce a signed integer into [0, modulus) using floor modulo.
/// -1 maps to modulus - 1, modulus maps to 0.
pub fn normalize_signed(x: &BigInt, modulus: &RsaBigInt) -> RsaBigInt {
    if modulus.is_zero() {
        return RsaBigInt::zero();
    }

    let m = BigInt::from(modulus.clone());
    x.mod_floor(&m).magnitude().clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mod_pow_small_values() {
        assert_eq!(mod_pow(&from_u64(3), &from_u64(5), &from_u64(7)), from_u64(5));
        assert_eq!(mod_pow(&from_u64(2), &from_u64(10), &from_u64(1000)), from_u64(24));
        // even modulus
        assert_eq!(mod_pow(&from_u64(7), &from_u64(3), &from_u64(10)), from_u64(3));
    }

    #[test]
    fn test_mod_pow_reduces_base() {
        // 10 ≡ 3 (mod 7)
        let result = mod_pow(&from_u64(10), &from_u64(5), &from_u64(7));
        assert_eq!(result, from_u64(5));
    }

    #[test]
    fn test_mod_pow_degenerate_modulus() {
        assert_eq!(mod_pow(&from_u64(5), &from_u64(3), &from_u64(1)), from_u64(0));
        assert_eq!(mod_pow(&from_u64(5), &from_u64(3), &from_u64(0)), from_u64(0));
    }

    #[test]
    fn test_mod_pow_zero_exponent() {
        assert_eq!(mod_pow(&from_u64(9), &from_u64(0), &from_u64(7)), from_u64(1));
    }

    #[test]
    fn test_normalize_signed() {
        let n = from_u64(15);
        assert_eq!(normalize_signed(&BigInt::from(-1), &n), from_u64(14));
        assert_eq!(normalize_signed(&BigInt::from(-16), &n), from_u64(14));
        assert_eq!(normalize_signed(&BigInt::from(15), &n), from_u64(0));
        assert_eq!(normalize_signed(&BigInt::from(7), &n), from_u64(7));
    }

    #[test]
    fn test_to_u64() {
        assert_eq!(to_u64(&from_u64(42)), Some(42));
        let big = from_u64(u64::MAX) + 1u8;
        assert_eq!(to_u64(&big), None);
    }
}
