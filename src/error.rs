//! Error types.

use thiserror::Error;

/// Errors reported by the SOM trainer.
///
/// The error surface is deliberately narrow: geometry and tour metrics are
/// total functions and never fail, so only input validation at the `train`
/// boundary can produce an error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SomTspError {
    /// A hyperparameter is outside its documented range.
    ///
    /// Reported before any mutation takes place; the call has no effect.
    #[error("invalid parameter `{name}`: {value}")]
    InvalidParameter {
        /// Name of the offending configuration field.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The city set is empty; no map can be trained and no tour produced.
    #[error("city set is empty")]
    EmptyCities,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_parameter() {
        let err = SomTspError::InvalidParameter {
            name: "alpha0",
            value: 1.5,
        };
        assert_eq!(err.to_string(), "invalid parameter `alpha0`: 1.5");
    }

    #[test]
    fn test_display_empty_cities() {
        assert_eq!(SomTspError::EmptyCities.to_string(), "city set is empty");
    }
}
