use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::Arc;

use colored::Colorize;

use surge_cli::{DispatchConfig, Dispatcher, InboundMessage};
use surge_dice::{DiceExpr, SeededSource};

pub fn run(
    seed: Option<u64>,
    chat_id: i64,
    dice: &str,
    table: Option<&Path>,
    json: bool,
) -> Result<(), String> {
    let dice = DiceExpr::parse(dice).map_err(|e| e.to_string())?;
    let table = super::load(table)?;

    let mut config = DispatchConfig::default().with_dice(dice);
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    let source = Arc::new(SeededSource::new(config.seed));
    let dispatcher = Dispatcher::new(table, source, config);

    if !json {
        println!(
            "  {} {} with {} ({} entries)",
            "Rolling on".bold(),
            dispatcher.table().name(),
            dispatcher.config().dice,
            dispatcher.table().len()
        );
        println!("  Each line is one message. Ctrl-D to exit.\n");
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = line.map_err(|e| e.to_string())?;
        let message = InboundMessage::new(chat_id, line.trim());
        let reply = dispatcher.handle(&message);

        if json {
            let encoded = serde_json::to_string(&reply).map_err(|e| e.to_string())?;
            writeln!(stdout, "{encoded}").map_err(|e| e.to_string())?;
        } else {
            writeln!(stdout, "{}\n", reply.text).map_err(|e| e.to_string())?;
        }
        stdout.flush().map_err(|e| e.to_string())?;
    }

    Ok(())
}
