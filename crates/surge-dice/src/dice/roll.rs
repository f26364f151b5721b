//! Dice roll results and the summing roller.

use serde::{Deserialize, Serialize};

use crate::source::RandomSource;

use super::Die;

/// The result of rolling a single die.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DieResult {
    /// The type of die that was rolled.
    pub die: Die,
    /// The value rolled (1 to die.sides()).
    pub value: u32,
}

/// The result of rolling an entire dice pool.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RollResult {
    /// Individual die results.
    pub dice: Vec<DieResult>,
}

impl RollResult {
    /// Sum of all die values.
    pub fn total(&self) -> u32 {
        self.dice
            .iter()
            .fold(0u32, |acc, d| acc.saturating_add(d.value))
    }

    /// The highest single die value, or 0 if empty.
    pub fn highest(&self) -> u32 {
        self.dice.iter().map(|d| d.value).max().unwrap_or(0)
    }

    /// The lowest single die value, or 0 if empty.
    pub fn lowest(&self) -> u32 {
        self.dice.iter().map(|d| d.value).min().unwrap_or(0)
    }

}

impl std::fmt::Display for RollResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self.dice.iter().map(|d| d.value.to_string()).collect();
        write!(f, "[{}] = {}", values.join(", "), self.total())
    }
}

/// Sum `count` independent draws in `[1, sides]`.
///
/// The result lies in `[count, count * sides]`, saturating at `u32::MAX`
/// when that bound does not fit.
pub fn roll_dice(source: &dyn RandomSource, count: u32, sides: u32) -> u32 {
    let total = (0..count).fold(0u32, |acc, _| acc.saturating_add(source.roll(sides)));
    tracing::trace!(count, sides, total, "rolled dice");
    total
}
