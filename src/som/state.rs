//! Annealing state.

/// The mutable annealing state of one training run.
///
/// Owned exclusively by the trainer and discarded when training ends; the
/// historical implementation kept these as ambient loop variables.
///
/// Both parameters only ever shrink. Once `sigma` underflows toward zero the
/// neighborhood weights vanish (or go NaN for spatially coincident inputs)
/// and updates effectively stop; that freeze is documented behavior, not an
/// error — the hyperparameter sweep is how callers stay out of that regime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingState {
    alpha: f64,
    sigma: f64,
    iteration: usize,
}

impl TrainingState {
    /// Creates the state for a fresh run.
    pub fn new(alpha0: f64, sigma0: f64) -> Self {
        Self {
            alpha: alpha0,
            sigma: sigma0,
            iteration: 0,
        }
    }

    /// Current learning rate.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Current neighborhood radius.
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Number of completed passes over the city set.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// Applies one annealing step after a full pass:
    /// `alpha *= eta`, `sigma *= beta`.
    pub fn decay(&mut self, eta: f64, beta: f64) {
        self.alpha *= eta;
        self.sigma *= beta;
        self.iteration += 1;
    }
}
