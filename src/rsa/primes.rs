// Prime Finder
// Enumerates primes in a range by trial division against the primes found so far

/// Return every prime `p` with `start <= p <= stop`, in ascending order.
///
/// Odd candidates from 3 up to `stop` are divided only by the primes already
/// collected (2 is seeded), stopping at the first divisor. Primes below `start`
/// are trimmed off the front afterwards. Returns an empty vector when
/// `start >= stop`.
pub fn primes_in_range(start: u64, stop: u64) -> Vec<u64> {
    if start >= stop {
        return Vec::new();
    }

    let mut primes = vec![2u64];

    let mut n = 3u64;
    while n <= stop {
        if !primes.iter().any(|&p| n % p == 0) {
            primes.push(n);
        }

        n = match n.checked_add(2) {
            Some(next) => next,
            None => break,
        };
    }

    // Ascending, so everything below `start` is a prefix
    let first_kept = primes.partition_point(|&p| p < start);
    primes.drain(..first_kept);

    primes
}
