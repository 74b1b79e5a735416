//! Error types for the `elle-models` crate.
//!
//! All `FromStr` implementations in this crate return variants of
//! [`ModelError`].

/// Errors produced when parsing or validating model types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// A compass point was not one of the eight supported directions.
    #[error("invalid compass point \"{value}\": expected one of N, NE, E, SE, S, SW, W, NW")]
    InvalidCompassPoint {
        /// The value that failed validation.
        value: String,
    },

    /// A turbine status string was not recognised.
    #[error("invalid turbine status \"{value}\"")]
    InvalidStatus {
        /// The value that failed validation.
        value: String,
    },

    /// A chat role string was not recognised.
    #[error("invalid chat role \"{value}\": expected \"user\" or \"bot\"")]
    InvalidRole {
        /// The value that failed validation.
        value: String,
    },
}
