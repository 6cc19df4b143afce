//! CLI frontend for the Palaver dialog engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "pal",
    about = "Palaver — a dialog-tree conversation engine",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a dialog library file
    Check {
        /// Path to the library JSON file
        file: PathBuf,
    },

    /// List collections and their root dialogs
    List {
        /// Path to the library JSON file
        file: PathBuf,
    },

    /// Show used dialog ids and the next free id
    Ids {
        /// Path to the library JSON file
        file: PathBuf,
    },

    /// Play a conversation interactively
    Play {
        /// Path to the library JSON file
        file: PathBuf,

        /// Collection to play (default: the first in the library)
        #[arg(short, long)]
        collection: Option<String>,

        /// Language to resolve text in (e.g. en, de)
        #[arg(short, long, default_value = "en")]
        language: String,

        /// RNG seed for text-variant selection
        #[arg(short, long, default_value_t = 42)]
        seed: u64,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check { file } => commands::check::run(&file),
        Commands::List { file } => commands::list::run(&file),
        Commands::Ids { file } => commands::ids::run(&file),
        Commands::Play {
            file,
            collection,
            language,
            seed,
        } => commands::play::run(&file, collection.as_deref(), &language, seed),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
