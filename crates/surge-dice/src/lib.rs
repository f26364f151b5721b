//! Randomness and dice for the wild-magic surge roller.
//!
//! Provides the [`RandomSource`] capability (seeded and fixed-sequence
//! implementations), polyhedral dice, dice notation such as `2к10`, and
//! pool rolling.

pub mod dice;
pub mod error;
pub mod source;

pub use dice::{DiceExpr, DicePool, Die, DieResult, RollResult, roll_dice};
pub use error::{DiceError, DiceResult};
pub use source::{FixedSource, RandomSource, SeededSource};
