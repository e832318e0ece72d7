//! A binomial observation and its likelihood as a function of the success
//! probability
use num::ToPrimitive;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::numbers::{binom, ln_binom};

// ln C(n, k) above this would overflow an f64; go straight to log space
const LN_F64_MAX: f64 = 709.782_712_893_384;

/// An observation of `k` successes in `n` trials
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Copy)]
pub struct Observation {
    n: u64,
    k: u64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ObservationError {
    /// The success count exceeds the trial count
    #[error("cannot observe {k} successes in {n} trials")]
    TooManySuccesses { n: u64, k: u64 },
}

impl Observation {
    /// An observation of `k` successes in `n` trials. Errors if `k > n`.
    pub fn new(n: u64, k: u64) -> Result<Self, ObservationError> {
        if k > n {
            Err(ObservationError::TooManySuccesses { n, k })
        } else {
            Ok(Observation { n, k })
        }
    }

    /// The number of trials
    pub fn n(&self) -> u64 {
        self.n
    }

    /// The number of successes
    pub fn k(&self) -> u64 {
        self.k
    }

    /// The binomial PMF, `C(n, k) pᵏ (1-p)ⁿ⁻ᵏ`, at success probability `p`
    ///
    /// The coefficient is exact until it no longer fits in an `f64` (around
    /// n = 1030 at k = n/2), after which the whole term is computed in log
    /// space so large n neither overflows nor drops the coefficient's
    /// precision.
    ///
    /// Zero outside [0, 1]. The endpoints take their limit values, so
    /// `pmf(0.0)` and `pmf(1.0)` are exactly zero whenever `0 < k < n`.
    pub fn pmf(&self, p: f64) -> f64 {
        if !(0.0..=1.0).contains(&p) {
            return 0.0;
        }
        if p == 0.0 {
            return if self.k == 0 { 1.0 } else { 0.0 };
        }
        if p == 1.0 {
            return if self.k == self.n { 1.0 } else { 0.0 };
        }
        if ln_binom(self.n, self.k) >= LN_F64_MAX {
            return self.ln_pmf(p).exp();
        }
        match binom(self.n, self.k).to_f64() {
            Some(coef) if coef.is_finite() => {
                // p < 1 and 1 - p < 1, so each multiplication below only
                // shrinks the product; no overflow past this point
                coef * p.powf(self.k as f64)
                    * (1.0 - p).powf((self.n - self.k) as f64)
            }
            _ => self.ln_pmf(p).exp(),
        }
    }

    /// Natural log of [`Self::pmf`]; `-inf` wherever the mass is zero
    pub fn ln_pmf(&self, p: f64) -> f64 {
        if !(0.0..=1.0).contains(&p) {
            return f64::NEG_INFINITY;
        }
        if p == 0.0 {
            return if self.k == 0 { 0.0 } else { f64::NEG_INFINITY };
        }
        if p == 1.0 {
            return if self.k == self.n { 0.0 } else { f64::NEG_INFINITY };
        }
        (self.k as f64).mul_add(
            p.ln(),
            ((self.n - self.k) as f64)
                .mul_add((1.0 - p).ln(), ln_binom(self.n, self.k)),
        )
    }
}
