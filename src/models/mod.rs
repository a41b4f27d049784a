//! Domain model types for SOM-based tour construction.
//!
//! Provides the core abstractions: labeled 2-D cities, trainable neurons
//! arranged on a closed ring, the neuron set mutated during training, and
//! the extracted tour with its length metric.

mod city;
mod neuron;
mod tour;

pub use city::City;
pub use neuron::{Neuron, NeuronSet};
pub use tour::Tour;
