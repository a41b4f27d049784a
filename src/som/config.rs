//! Training configuration.

use serde::{Deserialize, Serialize};

use crate::error::SomTspError;
use crate::neighborhood::NeighborhoodFunction;

/// Hyperparameters for one SOM training run.
///
/// The defaults are a reasonable starting point for small instances; the
/// surrounding experiment driver is expected to sweep them.
///
/// # Examples
///
/// ```
/// use som_tsp::neighborhood::NeighborhoodFunction;
/// use som_tsp::som::SomConfig;
///
/// let config = SomConfig::new(8)
///     .with_iterations(200)
///     .with_sigma0(5.0)
///     .with_neighborhood(NeighborhoodFunction::Gaussian);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SomConfig {
    neuron_count: usize,
    iterations: usize,
    alpha0: f64,
    eta: f64,
    sigma0: f64,
    beta: f64,
    neighborhood: NeighborhoodFunction,
}

impl SomConfig {
    /// Creates a configuration for a ring of `neuron_count` neurons with
    /// default annealing parameters.
    pub fn new(neuron_count: usize) -> Self {
        Self {
            neuron_count,
            iterations: 100,
            alpha0: 0.9,
            eta: 0.99,
            sigma0: 10.0,
            beta: 0.95,
            neighborhood: NeighborhoodFunction::ElasticBand,
        }
    }

    /// Sets the number of full passes over the city set.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Sets the initial learning rate, in `(0, 1]`.
    pub fn with_alpha0(mut self, alpha0: f64) -> Self {
        self.alpha0 = alpha0;
        self
    }

    /// Sets the learning-rate decay factor, in `(0, 1]`.
    pub fn with_eta(mut self, eta: f64) -> Self {
        self.eta = eta;
        self
    }

    /// Sets the initial neighborhood radius, `> 0`.
    pub fn with_sigma0(mut self, sigma0: f64) -> Self {
        self.sigma0 = sigma0;
        self
    }

    /// Sets the radius decay factor, in `(0, 1]`.
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    /// Sets the neighborhood function.
    pub fn with_neighborhood(mut self, neighborhood: NeighborhoodFunction) -> Self {
        self.neighborhood = neighborhood;
        self
    }

    /// Number of neurons on the ring.
    pub fn neuron_count(&self) -> usize {
        self.neuron_count
    }

    /// Number of full passes over the city set.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Initial learning rate.
    pub fn alpha0(&self) -> f64 {
        self.alpha0
    }

    /// Learning-rate decay factor applied after each pass.
    pub fn eta(&self) -> f64 {
        self.eta
    }

    /// Initial neighborhood radius.
    pub fn sigma0(&self) -> f64 {
        self.sigma0
    }

    /// Radius decay factor applied after each pass.
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Chosen neighborhood function.
    pub fn neighborhood(&self) -> NeighborhoodFunction {
        self.neighborhood
    }

    /// Checks every hyperparameter against its documented range.
    ///
    /// Called by [`train`](crate::som::train) before any mutation. A ring of
    /// one neuron is accepted; it trains but yields a meaningless tour.
    pub fn validate(&self) -> Result<(), SomTspError> {
        if self.neuron_count < 1 {
            return Err(SomTspError::InvalidParameter {
                name: "neuron_count",
                value: self.neuron_count as f64,
            });
        }
        if !(self.alpha0 > 0.0 && self.alpha0 <= 1.0) {
            return Err(SomTspError::InvalidParameter {
                name: "alpha0",
                value: self.alpha0,
            });
        }
        if !(self.eta > 0.0 && self.eta <= 1.0) {
            return Err(SomTspError::InvalidParameter {
                name: "eta",
                value: self.eta,
            });
        }
        if !(self.sigma0 > 0.0) {
            return Err(SomTspError::InvalidParameter {
                name: "sigma0",
                value: self.sigma0,
            });
        }
        if !(self.beta > 0.0 && self.beta <= 1.0) {
            return Err(SomTspError::InvalidParameter {
                name: "beta",
                value: self.beta,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(SomConfig::new(8).validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let config = SomConfig::new(12)
            .with_iterations(300)
            .with_alpha0(0.8)
            .with_eta(0.995)
            .with_sigma0(4.0)
            .with_beta(0.97)
            .with_neighborhood(NeighborhoodFunction::Gaussian);
        assert_eq!(config.neuron_count(), 12);
        assert_eq!(config.iterations(), 300);
        assert_eq!(config.alpha0(), 0.8);
        assert_eq!(config.eta(), 0.995);
        assert_eq!(config.sigma0(), 4.0);
        assert_eq!(config.beta(), 0.97);
        assert_eq!(config.neighborhood(), NeighborhoodFunction::Gaussian);
    }

    #[test]
    fn test_zero_neurons_rejected() {
        let err = SomConfig::new(0).validate().expect_err("invalid");
        assert!(matches!(
            err,
            SomTspError::InvalidParameter {
                name: "neuron_count",
                ..
            }
        ));
    }

    #[test]
    fn test_alpha0_out_of_range_rejected() {
        for bad in [0.0, -0.1, 1.5, f64::NAN] {
            let err = SomConfig::new(4)
                .with_alpha0(bad)
                .validate()
                .expect_err("invalid");
            assert!(matches!(
                err,
                SomTspError::InvalidParameter { name: "alpha0", .. }
            ));
        }
    }

    #[test]
    fn test_eta_out_of_range_rejected() {
        let err = SomConfig::new(4)
            .with_eta(0.0)
            .validate()
            .expect_err("invalid");
        assert!(matches!(
            err,
            SomTspError::InvalidParameter { name: "eta", .. }
        ));
    }

    #[test]
    fn test_sigma0_out_of_range_rejected() {
        for bad in [0.0, -3.0, f64::NAN] {
            let err = SomConfig::new(4)
                .with_sigma0(bad)
                .validate()
                .expect_err("invalid");
            assert!(matches!(
                err,
                SomTspError::InvalidParameter { name: "sigma0", .. }
            ));
        }
    }

    #[test]
    fn test_beta_out_of_range_rejected() {
        let err = SomConfig::new(4)
            .with_beta(1.1)
            .validate()
            .expect_err("invalid");
        assert!(matches!(
            err,
            SomTspError::InvalidParameter { name: "beta", .. }
        ));
    }

    #[test]
    fn test_decay_of_exactly_one_accepted() {
        // No annealing at all is valid, just slow to converge
        let config = SomConfig::new(4).with_eta(1.0).with_beta(1.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_single_neuron_accepted() {
        assert!(SomConfig::new(1).validate().is_ok());
    }
}
