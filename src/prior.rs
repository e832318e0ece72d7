//! Prior densities over the binomial success probability
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A prior density over a success probability in [0, 1]
///
/// Implementations must return a finite, non-negative density for every
/// `p` in [0, 1]. The contract is not checked; a prior that violates it
/// gives an undefined Bayes factor, not an error.
pub trait Prior {
    /// The density at `p`
    fn f(&self, p: f64) -> f64;

    /// Points in (0, 1) where the density is not smooth
    ///
    /// The quadrature splits its panels here, so steps and kinks do not
    /// have to be found by subdivision alone.
    fn knots(&self) -> Vec<f64> {
        Vec::new()
    }
}

// Priors stay ordinary callables: any closure on p works, with no knot
// hints.
impl<F: Fn(f64) -> f64> Prior for F {
    fn f(&self, p: f64) -> f64 {
        self(p)
    }
}

/// The flat prior: density 1 on [0, 1], zero elsewhere
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone, Copy, Default)]
pub struct Uniform;

impl Prior for Uniform {
    fn f(&self, p: f64) -> f64 {
        if (0.0..=1.0).contains(&p) {
            1.0
        } else {
            0.0
        }
    }
}

/// A step prior: constant `height` on [lo, hi], zero elsewhere
///
/// `Interval::new(0.45, 0.55, 10.0)` is the spike prior of a coin believed
/// to be very nearly fair.
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone, Copy)]
pub struct Interval {
    lo: f64,
    hi: f64,
    height: f64,
}

#[derive(Debug, Error, PartialEq)]
pub enum PriorError {
    /// A bound or the height is NaN or infinite
    #[error("interval bounds and height must be finite")]
    NonFiniteParameter,
    /// The lower bound exceeds the upper bound
    #[error("lower bound {lo} is greater than upper bound {hi}")]
    InvertedInterval { lo: f64, hi: f64 },
    /// The density would be negative
    #[error("density height {height} is negative")]
    NegativeHeight { height: f64 },
}

impl Interval {
    /// A constant density of `height` on `[lo, hi]`
    ///
    /// `lo == hi` is allowed; the prior then carries no mass.
    pub fn new(lo: f64, hi: f64, height: f64) -> Result<Self, PriorError> {
        if !lo.is_finite() || !hi.is_finite() || !height.is_finite() {
            Err(PriorError::NonFiniteParameter)
        } else if lo > hi {
            Err(PriorError::InvertedInterval { lo, hi })
        } else if height < 0.0 {
            Err(PriorError::NegativeHeight { height })
        } else {
            Ok(Interval { lo, hi, height })
        }
    }

    pub fn lo(&self) -> f64 {
        self.lo
    }

    pub fn hi(&self) -> f64 {
        self.hi
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Total prior mass, `height * (hi - lo)`
    pub fn mass(&self) -> f64 {
        self.height * (self.hi - self.lo)
    }
}

impl Prior for Interval {
    fn f(&self, p: f64) -> f64 {
        if (self.lo..=self.hi).contains(&p) {
            self.height
        } else {
            0.0
        }
    }

    fn knots(&self) -> Vec<f64> {
        vec![self.lo, self.hi]
    }
}
