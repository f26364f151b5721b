//! Dice types, notation, pools, and rolling.
//!
//! Supports standard polyhedral dice (d4 through d100) and custom dice.
//! Notation accepts both the Latin `d` and the Cyrillic `к` separator,
//! so `2d10` and `2к10` describe the same roll.

pub mod pool;
pub mod roll;

pub use pool::DicePool;
pub use roll::{DieResult, RollResult, roll_dice};

use serde::{Deserialize, Serialize};

use crate::error::{DiceError, DiceResult};
use crate::source::RandomSource;

/// Separators accepted between the count and the number of sides.
const SEPARATORS: [char; 4] = ['d', 'D', 'к', 'К'];

/// Most dice a single expression may roll.
pub const MAX_DICE: u32 = 1000;

/// A polyhedral die type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Die {
    /// Four-sided die.
    D4,
    /// Six-sided die.
    D6,
    /// Eight-sided die.
    D8,
    /// Ten-sided die.
    D10,
    /// Twelve-sided die.
    D12,
    /// Twenty-sided die.
    D20,
    /// Percentile die (1-100).
    D100,
    /// A die with a custom number of sides.
    Custom(u32),
}

impl Die {
    /// Returns the number of sides on this die.
    pub fn sides(self) -> u32 {
        match self {
            Self::D4 => 4,
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D20 => 20,
            Self::D100 => 100,
            Self::Custom(n) => n,
        }
    }

    /// The die with the given number of sides, using a named variant when one exists.
    pub fn with_sides(sides: u32) -> Self {
        match sides {
            4 => Self::D4,
            6 => Self::D6,
            8 => Self::D8,
            10 => Self::D10,
            12 => Self::D12,
            20 => Self::D20,
            100 => Self::D100,
            n => Self::Custom(n),
        }
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.sides())
    }
}

/// A homogeneous roll such as `2к10`: `count` dice with `sides` sides each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiceExpr {
    /// Number of dice rolled (at least 1).
    pub count: u32,
    /// Sides per die (at least 1).
    pub sides: u32,
}

impl DiceExpr {
    /// Create a dice expression, rejecting zero counts and sides.
    pub fn new(count: u32, sides: u32) -> DiceResult<Self> {
        let expr = Self { count, sides };
        expr.validate()?;
        Ok(expr)
    }

    /// Check that count and sides are both at least 1, the count is at
    /// most [`MAX_DICE`], and the largest total fits in a `u32`.
    ///
    /// Expressions built from struct literals or deserialized from
    /// table files bypass [`DiceExpr::new`], so tables re-check them.
    pub fn validate(&self) -> DiceResult<()> {
        if self.count == 0 {
            return Err(DiceError::ZeroCount);
        }
        if self.sides == 0 {
            return Err(DiceError::ZeroSides);
        }
        if self.count > MAX_DICE {
            return Err(DiceError::TooManyDice(self.count));
        }
        if self.count.checked_mul(self.sides).is_none() {
            return Err(DiceError::TotalOverflow {
                count: self.count,
                sides: self.sides,
            });
        }
        Ok(())
    }

    /// Parse notation like `2d10`, `d20`, or `1к4`.
    pub fn parse(notation: &str) -> DiceResult<Self> {
        let s = notation.trim();
        let invalid = || DiceError::InvalidNotation(notation.to_string());

        let (pos, sep) = s
            .char_indices()
            .find(|(_, c)| SEPARATORS.contains(c))
            .ok_or_else(invalid)?;
        let count_str = &s[..pos];
        let sides_str = &s[pos + sep.len_utf8()..];

        let count = if count_str.is_empty() {
            1
        } else {
            count_str.parse::<u32>().map_err(|_| invalid())?
        };
        let sides = sides_str.parse::<u32>().map_err(|_| invalid())?;

        Self::new(count, sides)
    }

    /// Smallest possible total.
    pub fn min_total(&self) -> u32 {
        self.count
    }

    /// Largest possible total.
    pub fn max_total(&self) -> u32 {
        self.count.saturating_mul(self.sides)
    }

    /// The pool of dice this expression describes.
    pub fn pool(&self) -> DicePool {
        DicePool::new().add(Die::with_sides(self.sides), self.count)
    }

    /// Roll and sum the dice.
    pub fn roll(&self, source: &dyn RandomSource) -> u32 {
        roll_dice(source, self.count, self.sides)
    }

    /// Roll and render as `NкS(total)`, the form used in effect text.
    pub fn interpolate(&self, source: &dyn RandomSource) -> String {
        format!("{self}({})", self.roll(source))
    }
}

impl std::fmt::Display for DiceExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}к{}", self.count, self.sides)
    }
}

impl std::str::FromStr for DiceExpr {
    type Err = DiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
