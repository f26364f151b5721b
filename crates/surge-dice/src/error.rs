//! Error types for dice parsing and rolling.

/// Errors that can occur when building dice expressions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiceError {
    /// The notation could not be parsed as `NdS`.
    #[error("invalid dice notation: {0}")]
    InvalidNotation(String),

    /// A roll must use at least one die.
    #[error("dice count must be at least 1")]
    ZeroCount,

    /// A die must have at least one side.
    #[error("dice sides must be at least 1")]
    ZeroSides,

    /// More dice than a single roll may use.
    #[error("cannot roll {0} dice at once (max {max})", max = crate::dice::MAX_DICE)]
    TooManyDice(u32),

    /// The largest possible total does not fit in a `u32`.
    #[error("{count}d{sides} can exceed the largest representable total")]
    TotalOverflow {
        /// Number of dice.
        count: u32,
        /// Sides per die.
        sides: u32,
    },
}

/// Convenience result type for dice operations.
pub type DiceResult<T> = Result<T, DiceError>;
