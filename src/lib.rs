//! # som-tsp
//!
//! Approximate Traveling Salesman tours via a self-organizing map (SOM)
//! trained on a closed ring of neurons. The ring adapts to the city layout
//! through competitive learning; its index order is then read off as the
//! visiting order.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (City, Neuron, NeuronSet, Tour)
//! - [`geometry`] — Euclidean distance primitives
//! - [`neighborhood`] — Neighborhood weight functions (Gaussian, elastic band)
//! - [`som`] — Training configuration and the SOM training loop
//! - [`extraction`] — Tour extraction from a trained neuron ring
//! - [`random`] — Seeded RNG construction for reproducible runs
//! - [`error`] — Error types

pub mod error;
pub mod extraction;
pub mod geometry;
pub mod models;
pub mod neighborhood;
pub mod random;
pub mod som;

pub use error::SomTspError;
pub use extraction::extract_tour;
pub use models::{City, Neuron, NeuronSet, Tour};
pub use neighborhood::NeighborhoodFunction;
pub use random::create_rng;
pub use som::{train, SomConfig, TrainingState};
