//! Number-theoretic helpers built on the persistent sequences.
//!
//! Every helper rejects arguments outside its domain with an
//! [`AdtError`] instead of panicking.
//!
//! # Examples
//!
//! ```rust
//! use monadkit::numeric::{factors, gcd, primes};
//!
//! assert_eq!(gcd(36, 12), Ok(12));
//! assert_eq!(factors(84).unwrap().to_vec(), vec![2, 2, 3, 7]);
//! assert_eq!(primes().take(5).to_vec(), vec![2, 3, 5, 7, 11]);
//! ```

use crate::error::{AdtError, Result};
use crate::persistent::{List, Stream};

const fn ensure_positive(n: i64) -> Result<i64> {
    if n < 1 {
        Err(AdtError::NotPositive { argument: n })
    } else {
        Ok(n)
    }
}

/// Greatest common divisor by Euclid's algorithm. The result is never negative.
///
/// The remainders are taken on magnitudes, so `i64::MIN` is a valid argument.
///
/// # Errors
///
/// Returns [`AdtError::UndefinedGcd`] when both arguments are zero, and
/// [`AdtError::Overflow`] when the divisor is `2^63`, which happens only for
/// `gcd(i64::MIN, 0)`, `gcd(0, i64::MIN)` and `gcd(i64::MIN, i64::MIN)`.
pub fn gcd(x: i64, y: i64) -> Result<i64> {
    if x == 0 && y == 0 {
        return Err(AdtError::UndefinedGcd);
    }
    let (mut x, mut y) = (x.unsigned_abs(), y.unsigned_abs());
    while y != 0 {
        let remainder = x % y;
        x = y;
        y = remainder;
    }
    i64::try_from(x).map_err(|_| AdtError::Overflow { operation: "gcd" })
}

/// The smallest divisor of `n` greater than one, or `n` itself when `n` is
/// prime. `least_divisor(1)` is `1`.
///
/// # Errors
///
/// Returns [`AdtError::NotPositive`] when `n < 1`.
pub const fn least_divisor(n: i64) -> Result<i64> {
    let n = match ensure_positive(n) {
        Ok(n) => n,
        Err(error) => return Err(error),
    };
    let mut k = 2;
    while k <= n / k {
        if n % k == 0 {
            return Ok(k);
        }
        k += 1;
    }
    Ok(n)
}

/// Returns `true` if `n` is prime. One is not prime.
///
/// # Errors
///
/// Returns [`AdtError::NotPositive`] when `n < 1`.
pub const fn is_prime(n: i64) -> Result<bool> {
    match least_divisor(n) {
        Ok(divisor) => Ok(n > 1 && divisor == n),
        Err(error) => Err(error),
    }
}

/// The prime factors of `n` in ascending order, with multiplicity.
/// `factors(1)` is empty.
///
/// # Errors
///
/// Returns [`AdtError::NotPositive`] when `n < 1`.
pub fn factors(n: i64) -> Result<List<i64>> {
    let mut remaining = ensure_positive(n)?;
    let mut found = Vec::new();
    while remaining > 1 {
        let divisor = least_divisor(remaining)?;
        found.push(divisor);
        remaining /= divisor;
    }
    Ok(found.into_iter().collect())
}

/// Every divisor of `n` in ascending order, computed with the list monad.
///
/// # Errors
///
/// Returns [`AdtError::NotPositive`] when `n < 1`.
pub fn divisors(n: i64) -> Result<List<i64>> {
    let n = ensure_positive(n)?;
    Ok(List::enum_from_to(1, n).flat_map(|candidate| {
        if n % candidate == 0 {
            List::unit(candidate)
        } else {
            List::new()
        }
    }))
}

/// The infinite stream of primes, found by filtering the positive integers.
#[must_use]
pub fn primes() -> Stream<i64> {
    Stream::integers_from(1).filter(|n| matches!(is_prime(*n), Ok(true)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(36, 12, 12)]
    #[case(12, 36, 12)]
    #[case(0, 5, 5)]
    #[case(7, 0, 7)]
    #[case(-4, 6, 2)]
    fn gcd_of_pairs(#[case] x: i64, #[case] y: i64, #[case] expected: i64) {
        assert_eq!(gcd(x, y), Ok(expected));
    }

    #[rstest]
    fn gcd_of_zeros_is_undefined() {
        assert_eq!(gcd(0, 0), Err(AdtError::UndefinedGcd));
    }

    #[rstest]
    #[case(i64::MIN, -1, 1)]
    #[case(-1, i64::MIN, 1)]
    #[case(i64::MIN, 6, 2)]
    #[case(i64::MIN, i64::MAX, 1)]
    #[case(i64::MAX, 0, i64::MAX)]
    fn gcd_at_the_edges_of_i64(#[case] x: i64, #[case] y: i64, #[case] expected: i64) {
        assert_eq!(gcd(x, y), Ok(expected));
    }

    #[rstest]
    #[case(i64::MIN, 0)]
    #[case(0, i64::MIN)]
    #[case(i64::MIN, i64::MIN)]
    fn gcd_of_two_to_the_sixty_three_overflows(#[case] x: i64, #[case] y: i64) {
        assert_eq!(gcd(x, y), Err(AdtError::Overflow { operation: "gcd" }));
    }

    #[rstest]
    #[case(1, 1)]
    #[case(15, 3)]
    #[case(49, 7)]
    #[case(97, 97)]
    fn least_divisor_of(#[case] n: i64, #[case] expected: i64) {
        assert_eq!(least_divisor(n), Ok(expected));
    }

    #[rstest]
    #[case(0)]
    #[case(-3)]
    fn non_positive_arguments_are_rejected(#[case] n: i64) {
        let error = AdtError::NotPositive { argument: n };
        assert_eq!(least_divisor(n), Err(error.clone()));
        assert_eq!(is_prime(n), Err(error.clone()));
        assert_eq!(factors(n), Err(error.clone()));
        assert_eq!(divisors(n), Err(error));
    }

    #[rstest]
    #[case(1, false)]
    #[case(2, true)]
    #[case(13, true)]
    #[case(15, false)]
    fn primality(#[case] n: i64, #[case] expected: bool) {
        assert_eq!(is_prime(n), Ok(expected));
    }

    #[rstest]
    fn prime_factorisation() {
        assert_eq!(factors(84).map(|list| list.to_vec()), Ok(vec![2, 2, 3, 7]));
        assert_eq!(factors(1).map(|list| list.is_empty()), Ok(true));
    }

    #[rstest]
    fn divisors_via_list_monad() {
        assert_eq!(divisors(15).map(|list| list.to_vec()), Ok(vec![1, 3, 5, 15]));
        assert_eq!(divisors(7).map(|list| list.to_vec()), Ok(vec![1, 7]));
    }

    #[rstest]
    fn first_ten_primes() {
        assert_eq!(
            primes().take(10).to_vec(),
            vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]
        );
    }
}
