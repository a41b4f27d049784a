//! Tour type and length metric.

use serde::{Deserialize, Serialize};

use crate::models::City;

/// An ordered sequence of cities produced by tour extraction.
///
/// The tour is scored as an open path: [`length`](Tour::length) sums the
/// edges between consecutive cities and does **not** add a closing edge from
/// the last city back to the first. Reported lengths therefore stay
/// comparable with the historical behavior of this solver; closing the loop
/// would change every figure.
///
/// # Examples
///
/// ```
/// use som_tsp::models::{City, Tour};
///
/// let tour = Tour::new(vec![
///     City::new("A", 0.0, 0.0),
///     City::new("B", 3.0, 4.0),
///     City::new("C", 3.0, 8.0),
/// ]);
/// assert_eq!(tour.len(), 3);
/// assert!((tour.length() - 9.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    cities: Vec<City>,
}

impl Tour {
    /// Creates a tour from an ordered city sequence.
    pub fn new(cities: Vec<City>) -> Self {
        Self { cities }
    }

    /// Cities in visiting order.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// Number of cities in the tour.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Returns `true` if the tour contains no cities.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Total Euclidean length of the open path through the tour.
    ///
    /// Exactly `0.0` for tours of zero or one city.
    pub fn length(&self) -> f64 {
        self.cities
            .windows(2)
            .map(|pair| pair[0].distance_to(&pair[1]))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_tour() -> Tour {
        Tour::new(vec![
            City::new("A", 0.0, 0.0),
            City::new("B", 1.0, 0.0),
            City::new("C", 3.0, 0.0),
            City::new("D", 6.0, 0.0),
        ])
    }

    #[test]
    fn test_length_empty_is_zero() {
        assert_eq!(Tour::new(vec![]).length(), 0.0);
    }

    #[test]
    fn test_length_single_is_zero() {
        let tour = Tour::new(vec![City::new("A", 42.0, -7.0)]);
        assert_eq!(tour.length(), 0.0);
    }

    #[test]
    fn test_length_open_path() {
        // 1 + 2 + 3, no closing edge D -> A
        assert!((line_tour().length() - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_length_reversal_invariant() {
        let tour = line_tour();
        let mut reversed = tour.cities().to_vec();
        reversed.reverse();
        let reversed = Tour::new(reversed);
        assert!((tour.length() - reversed.length()).abs() < 1e-10);
    }

    #[test]
    fn test_length_not_rotation_invariant() {
        let tour = line_tour();
        let mut rotated = tour.cities().to_vec();
        rotated.rotate_left(1);
        let rotated = Tour::new(rotated);
        // Rotating the open path drops the 1-unit edge and adds the 6-unit
        // wrap edge, so the lengths must differ.
        assert!((tour.length() - rotated.length()).abs() > 1e-10);
    }

    #[test]
    fn test_two_city_tour() {
        let tour = Tour::new(vec![City::new("A", 0.0, 0.0), City::new("B", 0.0, 5.0)]);
        assert!((tour.length() - 5.0).abs() < 1e-10);
    }
}
