//! Nearest-neuron assignment and ordering.

use crate::models::{City, NeuronSet, Tour};

/// Reads a visiting order off a trained ring.
///
/// Each city is assigned to its nearest neuron using the same rule as the
/// training competition step (lowest index among distance ties), then the
/// cities are stably sorted by ascending assigned index. Cities sharing a
/// neuron therefore keep their input order. The result is always a
/// permutation of the input city set.
///
/// Pure function of its inputs; an empty ring leaves cities in input order
/// and an empty city set gives an empty tour.
///
/// # Examples
///
/// ```
/// use som_tsp::extraction::extract_tour;
/// use som_tsp::models::{City, Neuron, NeuronSet};
///
/// let cities = vec![City::new("far", 9.0, 0.0), City::new("near", 1.0, 0.0)];
/// let ring = NeuronSet::from_neurons(vec![Neuron::new(0.0, 0.0), Neuron::new(10.0, 0.0)]);
/// let tour = extract_tour(&cities, &ring);
/// assert_eq!(tour.cities()[0].name(), "near");
/// assert_eq!(tour.cities()[1].name(), "far");
/// ```
pub fn extract_tour(cities: &[City], neurons: &NeuronSet) -> Tour {
    let mut assigned: Vec<(usize, &City)> = cities
        .iter()
        .map(|city| {
            let idx = neurons.nearest_index(city.position()).unwrap_or(0);
            (idx, city)
        })
        .collect();
    assigned.sort_by_key(|&(idx, _)| idx);
    Tour::new(assigned.into_iter().map(|(_, city)| city.clone()).collect())
}
