//! Message dispatch.
//!
//! `Dispatcher` owns the surge table and the randomness source and maps each
//! inbound message to exactly one reply. It holds no per-conversation state,
//! so concurrent dispatches only share the source.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use surge_dice::{RandomSource, SeededSource};
use surge_table::{RangeTable, TableResult, wild_magic_table};

use crate::config::DispatchConfig;

/// An inbound text message from a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundMessage {
    /// Conversation the message came from.
    pub chat_id: i64,
    /// Message text.
    pub text: String,
}

impl InboundMessage {
    /// Create a message.
    pub fn new(chat_id: i64, text: impl Into<String>) -> Self {
        Self {
            chat_id,
            text: text.into(),
        }
    }
}

/// How the transport should render a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseMode {
    /// Send as-is.
    Plain,
    /// Render `[label](url)` links as hyperlinks.
    Markdown,
}

/// A reply addressed to a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    /// Conversation to deliver to.
    pub chat_id: i64,
    /// Reply text.
    pub text: String,
    /// Rendering mode.
    pub parse_mode: ParseMode,
    /// The table roll, absent for command replies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roll: Option<u32>,
}

/// Maps inbound messages to replies.
pub struct Dispatcher {
    table: RangeTable,
    source: Arc<dyn RandomSource>,
    config: DispatchConfig,
}

impl Dispatcher {
    /// Create a dispatcher over an already validated table.
    pub fn new(table: RangeTable, source: Arc<dyn RandomSource>, config: DispatchConfig) -> Self {
        let domain = table.domain();
        let (low, high) = (config.dice.min_total(), config.dice.max_total());
        if !domain.contains(i64::from(low)) || !domain.contains(i64::from(high)) {
            tracing::warn!(
                table = table.name(),
                %domain,
                dice = %config.dice,
                "dice can roll outside the table domain"
            );
        }
        Self {
            table,
            source,
            config,
        }
    }

    /// Dispatcher over the built-in surge table, seeded from the config.
    pub fn wild_magic(config: DispatchConfig) -> TableResult<Self> {
        let table = wild_magic_table()?;
        let source = Arc::new(SeededSource::new(config.seed));
        Ok(Self::new(table, source, config))
    }

    /// The table rolled against.
    pub fn table(&self) -> &RangeTable {
        &self.table
    }

    /// The active configuration.
    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// Produce the reply for one message.
    pub fn handle(&self, message: &InboundMessage) -> Reply {
        if message.text == self.config.start_command {
            tracing::info!(chat_id = message.chat_id, "start command");
            return Reply {
                chat_id: message.chat_id,
                text: self.config.start_reply.clone(),
                parse_mode: ParseMode::Plain,
                roll: None,
            };
        }

        let roll = self.config.dice.roll(self.source.as_ref());
        let result = self.table.lookup(i64::from(roll), self.source.as_ref());
        tracing::info!(chat_id = message.chat_id, roll, "rolled on table");

        Reply {
            chat_id: message.chat_id,
            text: format!("Бросок {}: {roll}\n{result}", self.roll_label()),
            parse_mode: ParseMode::Markdown,
            roll: Some(roll),
        }
    }

    /// `к100` for a single die, full notation otherwise.
    fn roll_label(&self) -> String {
        let dice = self.config.dice;
        if dice.count == 1 {
            format!("к{}", dice.sides)
        } else {
            dice.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use surge_dice::{DiceExpr, FixedSource};
    use surge_table::{NOT_FOUND, Range, Resolver, TableEntry};

    fn fixed(values: Vec<u32>) -> Dispatcher {
        Dispatcher::new(
            wild_magic_table().unwrap(),
            Arc::new(FixedSource::new(values)),
            DispatchConfig::default(),
        )
    }

    #[test]
    fn start_command_gets_canned_reply() {
        let dispatcher = fixed(vec![50]);
        let reply = dispatcher.handle(&InboundMessage::new(7, "/start"));
        assert_eq!(reply.chat_id, 7);
        assert_eq!(reply.text, "Икбол будет забанен)))");
        assert_eq!(reply.parse_mode, ParseMode::Plain);
        assert_eq!(reply.roll, None);
    }

    #[test]
    fn other_text_rolls_on_table() {
        let dispatcher = fixed(vec![1]);
        let reply = dispatcher.handle(&InboundMessage::new(9, "surge!"));
        assert_eq!(reply.chat_id, 9);
        assert_eq!(reply.parse_mode, ParseMode::Markdown);
        assert_eq!(reply.roll, Some(1));
        assert!(reply.text.starts_with("Бросок к100: 1\nСовершайте бросок"));
    }

    #[test]
    fn command_match_is_exact() {
        let dispatcher = fixed(vec![10]);
        let reply = dispatcher.handle(&InboundMessage::new(1, "/start now"));
        assert_eq!(reply.roll, Some(10));
    }

    #[test]
    fn empty_text_still_rolls() {
        let dispatcher = fixed(vec![35]);
        let reply = dispatcher.handle(&InboundMessage::new(1, ""));
        assert_eq!(
            reply.text,
            "Бросок к100: 35\nВ течение следующей минуты у вас есть Сопротивление всему урону."
        );
    }

    #[test]
    fn custom_dice_label() {
        let table = RangeTable::new(
            "pair",
            Range::new(2, 12),
            vec![TableEntry::new(2, 12, Resolver::text("any"))],
        )
        .unwrap();
        let config = DispatchConfig::default().with_dice(DiceExpr { count: 2, sides: 6 });
        let dispatcher = Dispatcher::new(table, Arc::new(FixedSource::new(vec![3, 4])), config);
        let reply = dispatcher.handle(&InboundMessage::new(1, "go"));
        assert_eq!(reply.text, "Бросок 2к6: 7\nany");
    }

    #[test]
    fn roll_outside_table_yields_sentinel() {
        let table = RangeTable::new(
            "coin",
            Range::new(1, 2),
            vec![
                TableEntry::new(1, 1, Resolver::text("heads")),
                TableEntry::new(2, 2, Resolver::text("tails")),
            ],
        )
        .unwrap();
        let dispatcher = Dispatcher::new(
            table,
            Arc::new(FixedSource::constant(50)),
            DispatchConfig::default(),
        );
        let reply = dispatcher.handle(&InboundMessage::new(1, "flip"));
        assert_eq!(reply.text, format!("Бросок к100: 50\n{NOT_FOUND}"));
    }

    #[test]
    fn seeded_dispatch_is_reproducible() {
        let config = DispatchConfig::default().with_seed(77);
        let a = Dispatcher::wild_magic(config.clone()).unwrap();
        let b = Dispatcher::wild_magic(config).unwrap();
        for i in 0..20 {
            let msg = InboundMessage::new(i, "roll");
            assert_eq!(a.handle(&msg), b.handle(&msg));
        }
    }

    #[test]
    fn shared_across_threads() {
        let dispatcher = Arc::new(Dispatcher::wild_magic(DispatchConfig::default()).unwrap());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let dispatcher = Arc::clone(&dispatcher);
                std::thread::spawn(move || {
                    let reply = dispatcher.handle(&InboundMessage::new(i, "roll"));
                    reply.roll.is_some_and(|r| (1..=100).contains(&r))
                })
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }

    #[test]
    fn reply_serializes_for_cli_output() {
        let dispatcher = fixed(vec![50]);
        let reply = dispatcher.handle(&InboundMessage::new(3, "/start"));
        let json = serde_json::to_value(&reply).unwrap();
        assert_eq!(json["parse_mode"], "plain");
        assert!(json.get("roll").is_none());
    }
}
