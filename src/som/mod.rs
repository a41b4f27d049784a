//! SOM training: configuration, annealing state, and the training loop.
//!
//! - [`SomConfig`] — hyperparameters with builder-style setters
//! - [`TrainingState`] — learning rate and radius with scheduled decay
//! - [`train`] — the competitive-learning loop over a ring of neurons

mod config;
mod state;
mod trainer;

pub use config::SomConfig;
pub use state::TrainingState;
pub use trainer::train;
