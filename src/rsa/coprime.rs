// Coprimality Checker
// Brute-force common divisor scan, linear in the smaller operand

/// Returns true if no n in 2..=min(a, b) divides both `a` and `b`.
/// Values <= 1 are trivially coprime because the scan is empty.
pub fn are_coprime(a: u64, b: u64) -> bool {
    let limit = a.min(b);
    !(2..=limit).any(|n| a % n == 0 && b % n == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coprime_pairs() {
        assert!(are_coprime(3, 4));
        assert!(are_coprime(7, 60));
        assert!(are_coprime(35, 64));
        assert!(are_coprime(17, 17 * 2 + 1));
    }

    #[test]
    fn test_shared_factor() {
        assert!(!are_coprime(3, 6));
        assert!(!are_coprime(12, 18));
        assert!(!are_coprime(9, 9));
    }

    #[test]
    fn test_small_values() {
        assert!(are_coprime(1, 1));
        assert!(are_coprime(1, 10));
        assert!(are_coprime(0, 10));
        assert!(are_coprime(0, 0));
    }

    #[test]
    fn test_argument_order() {
        assert_eq!(are_coprime(15, 28), are_coprime(28, 15));
        assert_eq!(are_coprime(15, 25), are_coprime(25, 15));
    }
}
