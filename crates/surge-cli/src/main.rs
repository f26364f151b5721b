//! CLI frontend for the wild-magic surge roller.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "surge",
    about = "Surge — roll on a wild-magic surge table",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer one message per stdin line, like a chat bot would
    Run {
        /// RNG seed for reproducible rolls
        #[arg(short, long)]
        seed: Option<u64>,

        /// Conversation id attached to every message
        #[arg(long, default_value = "0")]
        chat_id: i64,

        /// Dice rolled against the table
        #[arg(long, default_value = "1d100")]
        dice: String,

        /// JSON table file to use instead of the built-in table
        #[arg(short, long)]
        table: Option<PathBuf>,

        /// Print each reply as a JSON line
        #[arg(long)]
        json: bool,
    },

    /// Roll dice notation such as 2d10 or 4к10
    Roll {
        /// Dice to roll
        #[arg(default_value = "1d100")]
        notation: String,

        /// RNG seed for reproducible rolls
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Resolve a single roll against the table
    Lookup {
        /// The roll to resolve
        #[arg(allow_negative_numbers = true)]
        roll: i64,

        /// RNG seed for the entry's own randomness
        #[arg(short, long)]
        seed: Option<u64>,

        /// JSON table file to use instead of the built-in table
        #[arg(short, long)]
        table: Option<PathBuf>,
    },

    /// List the table's ranges
    Table {
        /// JSON table file to use instead of the built-in table
        #[arg(short, long)]
        table: Option<PathBuf>,
    },

    /// Validate a JSON table file
    Check {
        /// Table file to validate
        #[arg(short, long)]
        table: PathBuf,
    },

    /// Write the built-in table as JSON
    Export {
        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            seed,
            chat_id,
            dice,
            table,
            json,
        } => commands::run::run(seed, chat_id, &dice, table.as_deref(), json),
        Commands::Roll { notation, seed } => commands::roll::run(&notation, seed),
        Commands::Lookup { roll, seed, table } => {
            commands::lookup::run(roll, seed, table.as_deref())
        }
        Commands::Table { table } => commands::table::run(table.as_deref()),
        Commands::Check { table } => commands::check::run(&table),
        Commands::Export { output } => commands::export::run(output.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
