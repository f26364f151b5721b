//! Configuration for the dispatch shell.

use surge_dice::DiceExpr;

/// Command that receives the canned reply instead of a roll.
pub const DEFAULT_START_COMMAND: &str = "/start";

/// Canned reply to the start command.
pub const DEFAULT_START_REPLY: &str = "Икбол будет забанен)))";

/// Configuration for a dispatcher.
#[derive(Debug, Clone)]
pub struct DispatchConfig {
    /// RNG seed for reproducible rolls; entropy when absent.
    pub seed: Option<u64>,
    /// Message text answered with `start_reply`.
    pub start_command: String,
    /// Reply to `start_command`.
    pub start_reply: String,
    /// Dice rolled to pick a table entry.
    pub dice: DiceExpr,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            seed: None,
            start_command: DEFAULT_START_COMMAND.to_string(),
            start_reply: DEFAULT_START_REPLY.to_string(),
            dice: DiceExpr {
                count: 1,
                sides: 100,
            },
        }
    }
}

impl DispatchConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the command answered with the canned reply.
    pub fn with_start_command(mut self, command: impl Into<String>) -> Self {
        self.start_command = command.into();
        self
    }

    /// Set the canned reply.
    pub fn with_start_reply(mut self, reply: impl Into<String>) -> Self {
        self.start_reply = reply.into();
        self
    }

    /// Set the dice rolled against the table.
    pub fn with_dice(mut self, dice: DiceExpr) -> Self {
        self.dice = dice;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = DispatchConfig::default();
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.start_command, "/start");
        assert_eq!(cfg.start_reply, DEFAULT_START_REPLY);
        assert_eq!(cfg.dice.to_string(), "1к100");
    }

    #[test]
    fn builder_methods() {
        let cfg = DispatchConfig::default()
            .with_seed(123)
            .with_start_command("/hello")
            .with_start_reply("hi")
            .with_dice(DiceExpr { count: 2, sides: 6 });
        assert_eq!(cfg.seed, Some(123));
        assert_eq!(cfg.start_command, "/hello");
        assert_eq!(cfg.start_reply, "hi");
        assert_eq!(cfg.dice.max_total(), 12);
    }
}
