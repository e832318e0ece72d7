#![warn(unused_extern_crates)]
#![warn(
    clippy::all,
    clippy::imprecise_flops,
    clippy::suboptimal_flops,
    clippy::unseparated_literal_suffix,
    clippy::unreadable_literal,
    clippy::option_option,
    clippy::implicit_clone
)]
//! Bayes factors for binomial observations
//!
//! Given `k` successes in `n` trials and two candidate priors over the
//! success probability, the Bayes factor is the ratio of the marginal
//! likelihoods of the data under each prior,
//!
//! ```text
//!      ∫ Binom(k; n, p) π₂(p) dp
//! K = ───────────────────────────
//!      ∫ Binom(k; n, p) π₁(p) dp
//! ```
//!
//! Both integrals are evaluated with adaptive Simpson quadrature over
//! [0, 1]. Priors may be the stock [`Uniform`] and [`Interval`] densities
//! or any closure `Fn(f64) -> f64`.
//!
//! ```rust
//! use bayes_factor::{BayesFactor, Interval, Observation, Uniform};
//!
//! let obs = Observation::new(30, 15).unwrap();
//! let spike = Interval::new(0.45, 0.55, 10.0).unwrap();
//!
//! let bf = BayesFactor::new(obs, Uniform, spike);
//! // the spike prior concentrates mass where the data put it
//! assert!(bf.compute().unwrap() > 1.0);
//! ```
pub mod bayes_factor;
pub mod binomial;
pub mod mc;
mod misc;
pub mod numbers;
pub mod prior;
pub mod quad;

pub use bayes_factor::{BayesFactor, BayesFactorError};
pub use binomial::{Observation, ObservationError};
pub use misc::logsumexp;
pub use prior::{Interval, Prior, PriorError, Uniform};
pub use quad::{quad, QuadConfig, Quadrature};
