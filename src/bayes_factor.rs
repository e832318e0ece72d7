//! The Bayes factor of a binomial observation under two competing priors
use thiserror::Error;

use crate::binomial::Observation;
use crate::prior::Prior;
use crate::quad::{quad, QuadConfig, Quadrature};

/// Weighs the evidence for `prior2` against `prior1` given one binomial
/// observation
///
/// The Bayes factor is the ratio of marginal likelihoods,
/// `∫ pmf(p) π₂(p) dp / ∫ pmf(p) π₁(p) dp`, with both integrals taken over
/// [0, 1] by adaptive quadrature. Values above 1 favor `prior2`.
///
/// Construction is the whole lifecycle: an evaluator holds its observation
/// and priors, never mutates them, and does nothing but [`compute`].
///
/// [`compute`]: Self::compute
#[derive(Debug, Clone)]
pub struct BayesFactor<P1, P2>
where
    P1: Prior,
    P2: Prior,
{
    obs: Observation,
    prior1: P1,
    prior2: P2,
}

#[derive(Debug, Error, PartialEq)]
pub enum BayesFactorError {
    /// The marginal likelihood under the first prior is zero, so the ratio
    /// is undefined
    #[error("the marginal likelihood under the first prior is zero")]
    Undefined,
    /// A quadrature hit `max_depth` with its error still above tolerance
    #[error("quadrature did not converge; estimated absolute error {abs_err}")]
    Integration { abs_err: f64 },
}

impl<P1, P2> BayesFactor<P1, P2>
where
    P1: Prior,
    P2: Prior,
{
    pub fn new(obs: Observation, prior1: P1, prior2: P2) -> Self {
        BayesFactor {
            obs,
            prior1,
            prior2,
        }
    }

    pub fn obs(&self) -> Observation {
        self.obs
    }

    pub fn prior1(&self) -> &P1 {
        &self.prior1
    }

    pub fn prior2(&self) -> &P2 {
        &self.prior2
    }

    /// The two marginal likelihood quadratures, `prior1` first
    pub fn marginals(
        &self,
        config: &QuadConfig,
    ) -> (Quadrature, Quadrature) {
        (
            marginal(self.obs, &self.prior1, config),
            marginal(self.obs, &self.prior2, config),
        )
    }

    /// The Bayes factor, `integral(prior2) / integral(prior1)`
    ///
    /// # Errors
    ///
    /// - `Undefined` if the marginal likelihood under `prior1` is zero.
    /// - `Integration` if either quadrature fails to converge; carries the
    ///   accumulated absolute-error estimate.
    pub fn compute(&self) -> Result<f64, BayesFactorError> {
        self.compute_with(&QuadConfig::default())
    }

    /// [`compute`](Self::compute) under a caller-supplied quadrature
    /// configuration
    pub fn compute_with(
        &self,
        config: &QuadConfig,
    ) -> Result<f64, BayesFactorError> {
        let (q1, q2) = self.marginals(config);
        if !q1.converged {
            return Err(BayesFactorError::Integration {
                abs_err: q1.abs_err,
            });
        }
        if !q2.converged {
            return Err(BayesFactorError::Integration {
                abs_err: q2.abs_err,
            });
        }
        if q1.value == 0.0 {
            Err(BayesFactorError::Undefined)
        } else {
            Ok(q2.value / q1.value)
        }
    }
}

// Marginal likelihood of the observation under one prior. The prior's
// knots are folded into the quadrature config so step priors are
// integrated on their smooth pieces.
fn marginal<P: Prior>(
    obs: Observation,
    prior: &P,
    config: &QuadConfig,
) -> Quadrature {
    let mut knots = prior.knots();
    if let Some(more) = config.knots {
        knots.extend_from_slice(more);
    }
    let config = QuadConfig {
        max_depth: config.max_depth,
        err_tol: config.err_tol,
        knots: Some(&knots),
    };
    quad(&|p| obs.pmf(p) * prior.f(p), 0.0, 1.0, &config)
}
