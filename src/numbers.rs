//! Exact and log-space combinatorial coefficients
use num::BigUint;
use num::One;

/// Factorial, n!
pub fn factorial(n: u64) -> BigUint {
    if n < 2 {
        BigUint::one()
    } else {
        (2..=n).map(BigUint::from).product()
    }
}

/// Binomial coefficient, n choose k
///
/// # Panics
///
/// Panics if k > n.
pub fn binom(n: u64, k: u64) -> BigUint {
    assert!(k <= n, "k must not exceed n");
    // C(n, k) == C(n, n - k); take the shorter product
    let k = k.min(n - k);
    if k == 0 {
        BigUint::one()
    } else {
        let numer: BigUint = (n - k + 1..=n).map(BigUint::from).product();
        numer / factorial(k)
    }
}

/// Log binomial coefficient, ln C(n, k)
///
/// For n large enough that the exact coefficient no longer fits in an
/// `f64`, work continues in log space via `ln_gamma`.
///
/// # Panics
///
/// Panics if k > n.
pub fn ln_binom(n: u64, k: u64) -> f64 {
    assert!(k <= n, "k must not exceed n");
    let (nf, kf) = (n as f64, k as f64);
    ::special::Gamma::ln_gamma(nf + 1.0).0
        - ::special::Gamma::ln_gamma(kf + 1.0).0
        - ::special::Gamma::ln_gamma(nf - kf + 1.0).0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use num::ToPrimitive;

    #[test]
    fn factorial_0_should_be_1() {
        assert_eq!(factorial(0), BigUint::one());
    }

    #[test]
    fn factorial_1_should_be_1() {
        assert_eq!(factorial(1), BigUint::one());
    }

    #[test]
    fn factorial_11() {
        assert_eq!(factorial(11), BigUint::from(39_916_800_u64));
    }

    #[test]
    fn factorial_30_exceeds_u64() {
        let fact = factorial(30);
        assert!(fact > BigUint::from(u64::MAX));
    }

    #[test]
    fn binom_nk() {
        assert_eq!(binom(5, 0), BigUint::one());
        assert_eq!(binom(5, 5), BigUint::one());
        assert_eq!(binom(5, 1), BigUint::from(5_u64));
        assert_eq!(binom(5, 2), BigUint::from(10_u64));
        assert_eq!(binom(30, 15), BigUint::from(155_117_520_u64));
    }

    #[test]
    fn binom_symmetry() {
        assert_eq!(binom(30, 11), binom(30, 19));
        assert_eq!(binom(171, 3), binom(171, 168));
    }

    #[test]
    #[should_panic]
    fn binom_k_greater_than_n_panics() {
        let _c = binom(3, 4);
    }

    #[test]
    fn ln_binom_agrees_with_exact() {
        for (n, k) in [(5, 2), (30, 15), (100, 3), (300, 150)] {
            let exact = binom(n, k).to_f64().unwrap().ln();
            assert_relative_eq!(ln_binom(n, k), exact, epsilon = 1e-10);
        }
    }

    #[test]
    fn ln_binom_of_edge_cases_is_zero() {
        assert_relative_eq!(ln_binom(10, 0), 0.0, epsilon = 1e-12);
        assert_relative_eq!(ln_binom(10, 10), 0.0, epsilon = 1e-12);
        assert_relative_eq!(ln_binom(0, 0), 0.0, epsilon = 1e-12);
    }
}
