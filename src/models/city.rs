//! City type.

use serde::{Deserialize, Serialize};

use crate::geometry;

/// A labeled 2-D point to be visited by the tour.
///
/// Identity is the name (a display label; uniqueness is not enforced).
/// The city set is fixed for a run and never mutated.
///
/// # Examples
///
/// ```
/// use som_tsp::models::City;
///
/// let a = City::new("A", 0.0, 0.0);
/// let b = City::new("B", 3.0, 4.0);
/// assert_eq!(a.name(), "A");
/// assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    name: String,
    x: f64,
    y: f64,
}

impl City {
    /// Creates a new city.
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            name: name.into(),
            x,
            y,
        }
    }

    /// Display label for this city.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Coordinates as a point.
    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Euclidean distance to another city.
    pub fn distance_to(&self, other: &City) -> f64 {
        geometry::distance(self.position(), other.position())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_new() {
        let c = City::new("Lyon", 4.8, 45.7);
        assert_eq!(c.name(), "Lyon");
        assert_eq!(c.x(), 4.8);
        assert_eq!(c.y(), 45.7);
        assert_eq!(c.position(), (4.8, 45.7));
    }

    #[test]
    fn test_city_distance() {
        let a = City::new("A", 0.0, 0.0);
        let b = City::new("B", 3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
        assert!((b.distance_to(&a) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_city_distance_to_self() {
        let a = City::new("A", 2.0, -1.0);
        assert_eq!(a.distance_to(&a), 0.0);
    }

    #[test]
    fn test_duplicate_names_allowed() {
        let a = City::new("X", 0.0, 0.0);
        let b = City::new("X", 1.0, 1.0);
        assert_eq!(a.name(), b.name());
        assert_ne!(a, b);
    }
}
