//! Resolvers: how a table entry turns into text.
//!
//! A resolver is evaluated lazily, only when its entry is selected. Each
//! evaluation is independent and may consume randomness.

use serde::{Deserialize, Serialize};

use surge_dice::{DiceExpr, RandomSource};

use crate::pool::EffectPool;

/// Marker in a template replaced by the drawn or rolled value.
pub const PLACEHOLDER: &str = "{}";

/// The kinds of dynamic content an entry can produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Resolver {
    /// Constant text.
    Text {
        /// The text returned verbatim.
        text: String,
    },
    /// One uniform draw from a pool, placed into a template.
    Pick {
        /// Template with a single placeholder.
        template: String,
        /// Pool to draw from.
        pool: EffectPool,
    },
    /// A dice roll rendered as `NкS(total)`, placed into a template.
    Dice {
        /// Template with a single placeholder.
        template: String,
        /// The dice to roll.
        dice: DiceExpr,
    },
    /// A uniform choice among nested resolvers; only the chosen one runs.
    OneOf {
        /// The alternatives.
        options: Vec<Resolver>,
    },
    /// An entire pool joined into a single string.
    Joined {
        /// Pool whose items are joined.
        pool: EffectPool,
        /// Separator between items.
        separator: String,
    },
}

impl Resolver {
    /// Constant text.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Draw from `pool` into `template`.
    pub fn pick(template: impl Into<String>, pool: EffectPool) -> Self {
        Self::Pick {
            template: template.into(),
            pool,
        }
    }

    /// Roll `dice` into `template`.
    pub fn dice(template: impl Into<String>, dice: DiceExpr) -> Self {
        Self::Dice {
            template: template.into(),
            dice,
        }
    }

    /// Choose one of `options`.
    pub fn one_of(options: Vec<Resolver>) -> Self {
        Self::OneOf { options }
    }

    /// Join all of `pool` with `separator`.
    pub fn joined(pool: EffectPool, separator: impl Into<String>) -> Self {
        Self::Joined {
            pool,
            separator: separator.into(),
        }
    }

    /// Short name of the resolver kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text { .. } => "text",
            Self::Pick { .. } => "pick",
            Self::Dice { .. } => "dice",
            Self::OneOf { .. } => "one_of",
            Self::Joined { .. } => "joined",
        }
    }

    /// Produce the text for this resolver.
    pub fn resolve(&self, source: &dyn RandomSource) -> String {
        match self {
            Self::Text { text } => text.clone(),
            Self::Pick { template, pool } => fill(template, pool.draw(source)),
            Self::Dice { template, dice } => fill(template, &dice.interpolate(source)),
            Self::OneOf { options } => options
                .get(source.pick(options.len()))
                .map(|option| option.resolve(source))
                .unwrap_or_default(),
            Self::Joined { pool, separator } => pool.joined(separator),
        }
    }

    /// Check that the resolver always produces non-empty text.
    ///
    /// Returns a description of the first problem found.
    pub fn validate(&self) -> Result<(), String> {
        match self {
            Self::Text { text } => {
                if text.is_empty() {
                    return Err("text is empty".to_string());
                }
            }
            Self::Pick { template, pool } => {
                check_template(template)?;
                check_pool(pool)?;
            }
            Self::Dice { template, dice } => {
                check_template(template)?;
                dice.validate().map_err(|e| e.to_string())?;
            }
            Self::OneOf { options } => {
                if options.is_empty() {
                    return Err("one_of has no options".to_string());
                }
                for option in options {
                    option.validate()?;
                }
            }
            Self::Joined { pool, .. } => check_pool(pool)?,
        }
        Ok(())
    }
}

fn fill(template: &str, value: &str) -> String {
    template.replacen(PLACEHOLDER, value, 1)
}

fn check_template(template: &str) -> Result<(), String> {
    match template.matches(PLACEHOLDER).count() {
        1 => Ok(()),
        0 => Err(format!("template has no {PLACEHOLDER} placeholder: {template:?}")),
        n => Err(format!("template has {n} placeholders, expected one: {template:?}")),
    }
}

fn check_pool(pool: &EffectPool) -> Result<(), String> {
    if pool.is_empty() {
        return Err(format!("pool '{}' is empty", pool.name));
    }
    if pool.items.iter().any(String::is_empty) {
        return Err(format!("pool '{}' contains an empty item", pool.name));
    }
    Ok(())
}
