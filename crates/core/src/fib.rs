use num_bigint::BigUint;
use num_traits::One;
use tracing::debug;

use crate::hex::to_hex;

/// Compute the n-th term of the sequence seeded with `F(0) = F(1) = 1`.
///
/// Runs the recurrence `n - 1` times over two accumulators, so both `n = 0`
/// and `n = 1` return the seed without looping.
pub fn fibonacci(n: u64) -> BigUint {
    let mut a = BigUint::one();
    let mut b = BigUint::one();
    for _ in 1..n {
        let next = &a + &b;
        a = std::mem::replace(&mut b, next);
    }

    debug!(n, bits = b.bits(), "computed fibonacci term");
    b
}

/// [`fibonacci`] rendered as lowercase hex without a prefix.
pub fn fibonacci_hex(n: u64) -> String {
    to_hex(&fibonacci(n))
}

/// Unbounded iterator over the same sequence, starting at `F(0)`.
#[derive(Clone, Debug)]
pub struct Fibonacci {
    curr: BigUint,
    next: BigUint,
}

impl Fibonacci {
    pub fn new() -> Self {
        Self {
            curr: BigUint::one(),
            next: BigUint::one(),
        }
    }
}

impl Default for Fibonacci {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Fibonacci {
    type Item = BigUint;

    fn next(&mut self) -> Option<BigUint> {
        let after = &self.curr + &self.next;
        let next = std::mem::replace(&mut self.next, after);
        Some(std::mem::replace(&mut self.curr, next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_are_returned_without_looping() {
        assert_eq!(fibonacci(0), BigUint::one());
        assert_eq!(fibonacci(1), BigUint::one());
        assert_eq!(fibonacci_hex(0), "1");
        assert_eq!(fibonacci_hex(1), "1");
    }

    #[test]
    fn small_terms_follow_the_recurrence() {
        let expected: [u64; 11] = [1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89];
        for (n, want) in expected.iter().enumerate() {
            assert_eq!(fibonacci(n as u64), BigUint::from(*want), "term {}", n);
        }
        assert_eq!(fibonacci_hex(10), "59");
    }

    #[test]
    fn last_term_that_fits_in_u64() {
        let v = fibonacci(92);
        assert_eq!(v, BigUint::from(0xa94f_ad42_221f_2702_u64));
        assert_eq!(u64::try_from(&v).ok(), Some(12_200_160_415_121_876_738));
        assert_eq!(fibonacci_hex(92), "a94fad42221f2702");
    }

    #[test]
    fn values_past_u64_do_not_overflow() {
        let v = fibonacci(93);
        assert!(v > BigUint::from(u64::MAX));
        assert!(u64::try_from(&v).is_err());
        assert_eq!(fibonacci_hex(93), "111f38ad0840bf6bf");
    }

    #[test]
    fn term_100_matches_decimal_reference() {
        // independently computed; equals the 101st term of the 0, 1, 1, ... convention
        let reference: BigUint = "573147844013817084101".parse().unwrap();
        assert_eq!(fibonacci(100), reference);
        assert_eq!(fibonacci_hex(100), reference.to_str_radix(16));
        assert_eq!(fibonacci_hex(100), "1f12062f76909038c5");
    }

    #[test]
    fn term_1000_hex() {
        let hex = fibonacci_hex(1000);
        assert!(hex.starts_with("36c3ee02148d5511"));
        assert!(hex.ends_with("9560ed"));
        assert_eq!(hex.len(), 174);
    }

    #[test]
    fn repeated_calls_agree() {
        for n in [0, 5, 64, 500] {
            assert_eq!(fibonacci_hex(n), fibonacci_hex(n));
        }
    }

    #[test]
    fn iterator_matches_direct_computation() {
        for (n, term) in Fibonacci::new().take(200).enumerate() {
            assert_eq!(term, fibonacci(n as u64), "term {}", n);
        }
    }

    #[test]
    fn sequence_is_monotonic_from_one() {
        let terms: Vec<BigUint> = Fibonacci::new().skip(1).take(300).collect();
        for pair in terms.windows(2) {
            assert!(pair[1] >= pair[0]);
        }
    }
}
