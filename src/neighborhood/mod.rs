//! Neighborhood weight functions.
//!
//! A neighborhood function gives the influence weight in `(0, 1]` that a
//! training input exerts on a neuron, based on the neuron's proximity to the
//! winning neuron. Both variants are strictly decreasing in their distance
//! measure and sharpen toward zero as `sigma` anneals, which is what freezes
//! the ring late in training.
//!
//! - [`NeighborhoodFunction::Gaussian`] — spatial proximity in the
//!   embedding plane drives influence.
//! - [`NeighborhoodFunction::ElasticBand`] — circular index distance along
//!   the ring drives influence, independent of current positions. This is
//!   what keeps the ring connected instead of collapsing into disjoint
//!   spatial clusters.
//!
//! # Reference
//!
//! Angéniol, B., Vaubois, G., Le Texier, J.-Y. (1988). "Self-organizing
//! feature maps and the travelling salesman problem", *Neural Networks*
//! 1(4), 289-293.

mod function;

pub use function::NeighborhoodFunction;
