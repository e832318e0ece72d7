//! Small numeric helpers
/// The log of the sum of the exponentiated values in `xs`
///
/// Shifted by the max value so intermediate exponentials cannot overflow.
/// Returns `-inf` when every element is `-inf` (a sum of zero masses).
///
/// # Panics
///
/// Panics if `xs` is empty.
pub fn logsumexp(xs: &[f64]) -> f64 {
    match xs {
        [] => panic!("Empty container"),
        [x] => *x,
        _ => {
            let maxval =
                xs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            if maxval == f64::NEG_INFINITY {
                return f64::NEG_INFINITY;
            }
            xs.iter().fold(0.0_f64, |acc, x| acc + (x - maxval).exp()).ln()
                + maxval
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TOL: f64 = 1e-12;

    #[test]
    fn logsumexp_on_vector_of_zeros() {
        let xs: Vec<f64> = vec![0.0; 5];
        // should be about log(5)
        assert_relative_eq!(logsumexp(&xs), 1.6094379124341003, epsilon = TOL);
    }

    #[test]
    fn logsumexp_on_random_values() {
        let xs: Vec<f64> = vec![
            0.30415386,
            -0.07072296,
            -1.04287019,
            0.27855407,
            -0.81896765,
        ];
        assert_relative_eq!(logsumexp(&xs), 1.4820007894263059, epsilon = TOL);
    }

    #[test]
    fn logsumexp_returns_only_value_on_one_element_container() {
        let xs: Vec<f64> = vec![0.30415386];
        assert_relative_eq!(logsumexp(&xs), 0.30415386, epsilon = TOL);
    }

    #[test]
    fn logsumexp_on_all_zero_masses_is_neg_infinity() {
        let xs: Vec<f64> = vec![f64::NEG_INFINITY; 3];
        assert_eq!(logsumexp(&xs), f64::NEG_INFINITY);
    }

    #[test]
    #[should_panic]
    fn logsumexp_should_panic_on_empty() {
        let xs: Vec<f64> = Vec::new();
        logsumexp(&xs);
    }
}
