//! Monte Carlo estimation of marginal likelihoods
//!
//! An independent, sampling-based route to the integrals the quadrature
//! computes. Useful for priors one can draw from but not integrate, and as
//! a cross-check on the quadrature marginals.
use rand::Rng;

use crate::binomial::Observation;
use crate::misc::logsumexp;

/// Monte Carlo integration in log space
///
/// # Arguments
///
/// - ln_f: the log of the function to integrate with the draw term
///   adjusted for. For example, to estimate a marginal likelihood, `ln_f`
///   is the log likelihood and `draw` draws from the prior.
/// - draw: a function that draws samples to evaluate in `ln_f`
/// - n_iters: the number of samples to use for estimation
/// - rng: a random number generator
pub fn mc_integral<X, Fx, D, R>(
    ln_f: Fx,
    draw: D,
    n_iters: usize,
    rng: &mut R,
) -> f64
where
    Fx: Fn(&X) -> f64,
    D: Fn(&mut R) -> X,
    R: Rng,
{
    let ln_fs: Vec<f64> = (0..n_iters).map(|_| ln_f(&draw(rng))).collect();
    logsumexp(&ln_fs) - (n_iters as f64).ln()
}

/// Monte Carlo estimate of the log marginal likelihood of `obs`
///
/// `prior_draw` must sample success probabilities from the prior as a
/// normalized density; for an unnormalized prior, add the log of its total
/// mass to the result.
pub fn ln_marginal_mc<D, R>(
    obs: Observation,
    prior_draw: D,
    n_iters: usize,
    rng: &mut R,
) -> f64
where
    D: Fn(&mut R) -> f64,
    R: Rng,
{
    mc_integral(|p: &f64| obs.ln_pmf(*p), prior_draw, n_iters, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256Plus;

    fn relerr(x: f64, x_est: f64) -> f64 {
        (x_est / x - 1.0).abs()
    }

    #[test]
    fn mc_integral_of_flat_function_is_its_value() {
        let mut rng = Xoshiro256Plus::seed_from_u64(0x0bae);
        let est = mc_integral(
            |_x: &f64| 0.5_f64.ln(),
            |r: &mut Xoshiro256Plus| r.gen_range(0.0..1.0),
            1000,
            &mut rng,
        );
        assert!(relerr(0.5_f64.ln(), est) < 1e-12);
    }

    #[test]
    fn ln_marginal_mc_matches_beta_normalization() {
        // flat prior marginal is 1 / (n + 1)
        let mut rng = Xoshiro256Plus::seed_from_u64(0x0bae);
        let obs = Observation::new(5, 2).unwrap();
        let est = ln_marginal_mc(
            obs,
            |r: &mut Xoshiro256Plus| r.gen_range(0.0..1.0),
            100_000,
            &mut rng,
        );
        let truth = (1.0 / 6.0_f64).ln();
        assert!(relerr(truth, est) < 0.05);
    }

    #[test]
    fn ln_marginal_mc_handles_zero_mass_draws() {
        // all draws land where the pmf is zero
        let mut rng = Xoshiro256Plus::seed_from_u64(0x0bae);
        let obs = Observation::new(5, 5).unwrap();
        let est = ln_marginal_mc(obs, |_r| 0.0, 100, &mut rng);
        assert_eq!(est, f64::NEG_INFINITY);
    }
}
