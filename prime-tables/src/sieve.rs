//! Trial-division sieve backing the baked tables.
//!
//! These are the reference implementations the `build.rs` generator is
//! cross-checked against, not a general-purpose primality library.

/// Checks whether `x` is prime.
///
/// Trial division by odd candidates only, stopping once the candidate's
/// square exceeds `x`. The square is taken in `u64`, so the test is total
/// over every `u32`.
///
/// # Example
///
/// ```
/// use prime_tables::is_prime;
///
/// assert!(is_prime(2));
/// assert!(is_prime(7919));
/// assert!(!is_prime(0));
/// assert!(!is_prime(1));
/// assert!(!is_prime(7920));
/// ```
pub const fn is_prime(x: u32) -> bool {
    if x == 0 || x == 1 {
        return false;
    }
    if x == 2 {
        return true;
    }
    if x % 2 == 0 {
        return false;
    }
    let x = x as u64;
    let mut i = 3u64;
    while i * i <= x {
        if x % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

/// Collects every prime strictly below `limit`, in ascending order.
///
/// Seeds the result with the lone even prime and walks odd candidates
/// upward, so the output is sorted and duplicate-free by construction.
/// Limits below 3 produce an empty vector.
///
/// # Example
///
/// ```
/// use prime_tables::primes_below;
///
/// assert_eq!(primes_below(10), vec![2, 3, 5, 7]);
/// assert!(primes_below(2).is_empty());
/// ```
pub fn primes_below(limit: u32) -> Vec<u32> {
    if limit < 3 {
        return Vec::new();
    }
    let mut primes = vec![2];
    let mut candidate = 3;
    while candidate < limit {
        if is_prime(candidate) {
            primes.push(candidate);
        }
        candidate += 2;
    }
    primes
}

/// Running totals of `values`, inclusive of each element.
///
/// The output has the same length as the input; totals are widened to
/// `u64` so they stay exact far beyond the default table limit.
///
/// # Example
///
/// ```
/// use prime_tables::prefix_sums;
///
/// assert_eq!(prefix_sums(&[2, 3, 5, 7]), vec![2, 5, 10, 17]);
/// assert!(prefix_sums(&[]).is_empty());
/// ```
pub fn prefix_sums(values: &[u32]) -> Vec<u64> {
    let mut sums = Vec::with_capacity(values.len());
    let mut total = 0u64;
    for &value in values {
        total += value as u64;
        sums.push(total);
    }
    sums
}
