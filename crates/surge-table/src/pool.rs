//! Effect pools: fixed lists of alternatives drawn uniformly.

use serde::{Deserialize, Serialize};

use surge_dice::RandomSource;

/// A named, immutable list of alternative effect texts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectPool {
    /// Name used in diagnostics.
    pub name: String,
    /// The alternatives. Tables reject empty pools.
    pub items: Vec<String>,
}

impl EffectPool {
    /// Create a pool from owned items.
    pub fn new(name: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            name: name.into(),
            items,
        }
    }

    /// Create a pool from static string data.
    pub fn from_static(name: &str, items: &[&str]) -> Self {
        Self::new(name, items.iter().map(|s| (*s).to_string()).collect())
    }

    /// Number of alternatives.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if the pool has no alternatives.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Draw one alternative uniformly at random.
    ///
    /// An empty pool yields an empty string.
    pub fn draw(&self, source: &dyn RandomSource) -> &str {
        let idx = source.pick(self.items.len());
        tracing::debug!(pool = %self.name, idx, "drew from pool");
        self.items.get(idx).map(String::as_str).unwrap_or_default()
    }

    /// Every alternative joined with `separator`.
    pub fn joined(&self, separator: &str) -> String {
        self.items.join(separator)
    }
}
