//! Euclidean norm and point distance.

/// Euclidean norm of a 2-D displacement.
///
/// # Examples
///
/// ```
/// use som_tsp::geometry::norm;
///
/// assert!((norm(3.0, 4.0) - 5.0).abs() < 1e-10);
/// assert_eq!(norm(0.0, 0.0), 0.0);
/// ```
pub fn norm(dx: f64, dy: f64) -> f64 {
    (dx * dx + dy * dy).sqrt()
}

/// Euclidean distance between two 2-D points.
///
/// # Examples
///
/// ```
/// use som_tsp::geometry::distance;
///
/// assert!((distance((0.0, 0.0), (3.0, 4.0)) - 5.0).abs() < 1e-10);
/// assert_eq!(distance((2.0, 7.0), (2.0, 7.0)), 0.0);
/// ```
pub fn distance(p: (f64, f64), q: (f64, f64)) -> f64 {
    norm(p.0 - q.0, p.1 - q.1)
}
