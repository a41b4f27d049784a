//! Neuron and neuron ring types.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::geometry;
use crate::models::City;

/// A trainable 2-D reference point in the self-organizing map.
///
/// A neuron's position on the closed ring is its index in the owning
/// [`NeuronSet`]; the struct itself carries only coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Neuron {
    /// X-coordinate.
    pub x: f64,
    /// Y-coordinate.
    pub y: f64,
}

impl Neuron {
    /// Creates a neuron at the given coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Coordinates as a point.
    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

/// An ordered ring of neurons.
///
/// Index order carries the ring topology: neuron `len - 1` is adjacent to
/// neuron `0`. The set is mutated in place during training and frozen once
/// training ends.
///
/// # Examples
///
/// ```
/// use som_tsp::models::{City, NeuronSet};
/// use som_tsp::random::create_rng;
///
/// let cities = vec![City::new("A", 0.0, 0.0), City::new("B", 10.0, 10.0)];
/// let mut rng = create_rng(42);
/// let ring = NeuronSet::random_in_bounds(8, &cities, &mut rng);
/// assert_eq!(ring.len(), 8);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeuronSet {
    neurons: Vec<Neuron>,
}

impl NeuronSet {
    /// Creates a ring from explicit neuron positions.
    pub fn from_neurons(neurons: Vec<Neuron>) -> Self {
        Self { neurons }
    }

    /// Creates a ring of `count` neurons placed uniformly at random inside
    /// the bounding box of the given cities.
    ///
    /// Each coordinate is drawn independently per neuron: x from
    /// `[min_x, max_x]`, y from `[min_y, max_y]`. A degenerate box (all
    /// cities sharing a coordinate) collapses that axis to the shared value.
    pub fn random_in_bounds<R: Rng>(count: usize, cities: &[City], rng: &mut R) -> Self {
        let (min_x, max_x, min_y, max_y) = bounding_box(cities);
        let neurons = (0..count)
            .map(|_| {
                let x = min_x + (max_x - min_x) * rng.random::<f64>();
                let y = min_y + (max_y - min_y) * rng.random::<f64>();
                Neuron::new(x, y)
            })
            .collect();
        Self { neurons }
    }

    /// Number of neurons on the ring.
    pub fn len(&self) -> usize {
        self.neurons.len()
    }

    /// Returns `true` if the ring has no neurons.
    pub fn is_empty(&self) -> bool {
        self.neurons.is_empty()
    }

    /// Returns the neurons in ring order.
    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    /// Current coordinates of the neuron at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn position(&self, index: usize) -> (f64, f64) {
        self.neurons[index].position()
    }

    /// Index of the neuron nearest to the given point.
    ///
    /// Ties resolve to the lowest index: the scan keeps the first minimum it
    /// encounters. This rule is shared by the training competition step and
    /// tour extraction and must stay identical in both.
    ///
    /// Returns `None` if the ring is empty.
    pub fn nearest_index(&self, point: (f64, f64)) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (i, neuron) in self.neurons.iter().enumerate() {
            let d = geometry::distance(point, neuron.position());
            match best {
                Some((_, best_d)) if d >= best_d => {}
                _ => best = Some((i, d)),
            }
        }
        best.map(|(i, _)| i)
    }

    /// Moves the neuron at `index` a fraction `step` of the way toward
    /// `target`: `n += step * (target - n)`.
    ///
    /// Reads the neuron's live coordinates immediately before writing, so a
    /// sequence of pulls within one pass always acts on current state.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn pull_toward(&mut self, index: usize, target: (f64, f64), step: f64) {
        let n = &mut self.neurons[index];
        n.x += step * (target.0 - n.x);
        n.y += step * (target.1 - n.y);
    }
}

/// Bounding box of the city coordinates as `(min_x, max_x, min_y, max_y)`.
///
/// An empty city set gives a zero box at the origin.
fn bounding_box(cities: &[City]) -> (f64, f64, f64, f64) {
    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for city in cities {
        min_x = min_x.min(city.x());
        max_x = max_x.max(city.x());
        min_y = min_y.min(city.y());
        max_y = max_y.max(city.y());
    }
    if cities.is_empty() {
        (0.0, 0.0, 0.0, 0.0)
    } else {
        (min_x, max_x, min_y, max_y)
    }
}
