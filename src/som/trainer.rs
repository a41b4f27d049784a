//! The SOM training loop.
//!
//! # Algorithm
//!
//! Neurons start uniformly at random inside the cities' bounding box. Each
//! of the configured iterations is one full pass over the cities in a fresh
//! shuffled order. Presenting a city runs two steps:
//!
//! 1. **Competition** — the neuron nearest the city wins (lowest index on
//!    ties, the same rule tour extraction uses).
//! 2. **Cooperation** — every neuron `i`, winner included, moves by
//!    `alpha * h * (city - neuron[i])` where `h` is the neighborhood weight
//!    of `i` relative to the winner. Updates apply to the live array
//!    immediately, so each neuron's weight and displacement are computed
//!    from the state as it stands right before that neuron's own update.
//!
//! After each pass the state anneals: `alpha *= eta`, `sigma *= beta`. The
//! loop runs for exactly the configured iteration count; there is no
//! convergence-based stopping rule.
//!
//! # Complexity
//!
//! O(iterations × cities × neurons).
//!
//! # Reference
//!
//! Kohonen, T. (1982). "Self-organized formation of topologically correct
//! feature maps", *Biological Cybernetics* 43, 59-69.

use log::debug;
use rand::Rng;

use crate::error::SomTspError;
use crate::models::{City, NeuronSet};
use crate::som::{SomConfig, TrainingState};

/// Trains a ring of neurons over the given cities and returns the final map.
///
/// Validates the configuration and rejects an empty city set before any
/// mutation. The returned [`NeuronSet`] carries no quality guarantee; tour
/// quality depends entirely on the hyperparameters, which the surrounding
/// experiment driver is expected to sweep. Runs with the same cities,
/// configuration, and RNG seed produce bit-identical results.
///
/// # Errors
///
/// [`SomTspError::InvalidParameter`] if any hyperparameter is out of range,
/// [`SomTspError::EmptyCities`] if `cities` is empty.
///
/// # Examples
///
/// ```
/// use som_tsp::models::City;
/// use som_tsp::random::create_rng;
/// use som_tsp::som::{train, SomConfig};
///
/// let cities = vec![
///     City::new("A", 0.0, 0.0),
///     City::new("B", 0.0, 10.0),
///     City::new("C", 10.0, 10.0),
/// ];
/// let config = SomConfig::new(6).with_iterations(50).with_sigma0(3.0);
/// let mut rng = create_rng(42);
/// let neurons = train(&cities, &config, &mut rng).expect("valid inputs");
/// assert_eq!(neurons.len(), 6);
/// ```
pub fn train<R: Rng>(
    cities: &[City],
    config: &SomConfig,
    rng: &mut R,
) -> Result<NeuronSet, SomTspError> {
    config.validate()?;
    if cities.is_empty() {
        return Err(SomTspError::EmptyCities);
    }

    debug!(
        "training {} neurons over {} cities, {} iterations, {:?}",
        config.neuron_count(),
        cities.len(),
        config.iterations(),
        config.neighborhood()
    );

    let mut neurons = NeuronSet::random_in_bounds(config.neuron_count(), cities, rng);
    let mut state = TrainingState::new(config.alpha0(), config.sigma0());
    let mut order: Vec<usize> = (0..cities.len()).collect();

    for _ in 0..config.iterations() {
        shuffle(&mut order, rng);

        for &city_idx in &order {
            let point = cities[city_idx].position();
            let winner = neurons
                .nearest_index(point)
                .expect("ring validated non-empty");

            for i in 0..neurons.len() {
                let h = config
                    .neighborhood()
                    .weight(&neurons, state.sigma(), winner, i);
                neurons.pull_toward(i, point, state.alpha() * h);
            }
        }

        state.decay(config.eta(), config.beta());
    }

    debug!(
        "training done after {} passes, alpha={:.6}, sigma={:.6}",
        state.iteration(),
        state.alpha(),
        state.sigma()
    );

    Ok(neurons)
}

/// Uniform in-place Fisher-Yates shuffle.
fn shuffle<R: Rng>(order: &mut [usize], rng: &mut R) {
    for i in (1..order.len()).rev() {
        let j = rng.random_range(0..=i as u64) as usize;
        order.swap(i, j);
    }
}
