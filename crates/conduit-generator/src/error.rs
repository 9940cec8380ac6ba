use conduit_core::GridError;

/// Errors that prevent a playable grid from being generated.
#[derive(
    Debug, Clone, Copy, PartialEq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum GenerateError {
    /// The requested grid shape is invalid.
    #[display("invalid grid: {_0}")]
    InvalidGrid(#[from] GridError),
    /// The blocking probability is not within `0.0..=1.0`.
    #[display("block probability {probability} is not within 0..=1")]
    InvalidBlockProbability {
        /// The rejected probability.
        probability: f64,
    },
    /// No cell and direction satisfy the starting-point rules.
    #[display("no legal starting point after {attempts} attempts")]
    UnsatisfiableStartingPoint {
        /// Random draws made before the exhaustive search.
        attempts: usize,
    },
}
