//! Tour extraction from a trained neuron ring.

mod extractor;

pub use extractor::extract_tour;
