//! Gaussian and elastic-band neighborhood variants.

use serde::{Deserialize, Serialize};

use crate::geometry;
use crate::models::NeuronSet;

/// Strategy for weighting how strongly non-winning neurons follow the
/// current input.
///
/// A closed set of two variants; there is no user-extensible hook.
///
/// # Examples
///
/// ```
/// use som_tsp::models::{Neuron, NeuronSet};
/// use som_tsp::neighborhood::NeighborhoodFunction;
///
/// let ring = NeuronSet::from_neurons(vec![
///     Neuron::new(0.0, 0.0),
///     Neuron::new(1.0, 0.0),
///     Neuron::new(2.0, 0.0),
/// ]);
/// let nf = NeighborhoodFunction::ElasticBand;
/// assert_eq!(nf.weight(&ring, 1.0, 1, 1), 1.0);
/// assert!(nf.weight(&ring, 1.0, 1, 0) < 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NeighborhoodFunction {
    /// `exp(-d² / sigma²)` over the Euclidean distance between the target
    /// and winner neurons' current positions.
    Gaussian,
    /// `exp(-d² / sigma²)` over the circular index distance between target
    /// and winner on the ring.
    ElasticBand,
}

impl NeighborhoodFunction {
    /// Influence weight of the input on neuron `target` given winner
    /// `winner`, in `(0, 1]`.
    ///
    /// Exactly `1.0` when `target == winner`, for any valid `sigma > 0`.
    /// Positions are read live from `neurons`, so a winner that has already
    /// moved earlier in the same update pass is seen at its current
    /// coordinates.
    pub fn weight(
        &self,
        neurons: &NeuronSet,
        sigma: f64,
        winner: usize,
        target: usize,
    ) -> f64 {
        if target == winner {
            return 1.0;
        }
        let d = match self {
            Self::Gaussian => {
                geometry::distance(neurons.position(target), neurons.position(winner))
            }
            Self::ElasticBand => ring_distance(winner, target, neurons.len()) as f64,
        };
        (-(d * d) / (sigma * sigma)).exp()
    }
}

/// Circular index distance between two ring positions:
/// `min(|a - b|, len - |a - b|)`.
fn ring_distance(a: usize, b: usize, len: usize) -> usize {
    let d = a.abs_diff(b);
    d.min(len - d)
}
