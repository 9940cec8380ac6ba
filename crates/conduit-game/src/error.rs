use conduit_generator::GenerateError;

/// Errors that prevent a game session from being built.
#[derive(
    Debug, Clone, Copy, PartialEq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum GameError {
    /// Grid generation failed.
    #[display("{_0}")]
    Generate(#[from] GenerateError),
    /// The conveyor must hold at least one tile.
    #[display("conveyor length must be at least 1")]
    InvalidConveyorLength,
}
