//! Euclidean distance primitives.
//!
//! Total functions over all finite inputs; coincident points give exactly
//! `0.0` with no special-casing.

mod euclidean;

pub use euclidean::{distance, norm};
