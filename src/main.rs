mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "agendaplan")]
#[command(about = "Generate and preview AgendaPlan calendar feeds")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a calendar feed from a JSON event list
    Feed {
        /// Path to the JSON event list
        input: PathBuf,

        /// Write the feed to this file instead of stdout
        /// ("auto" derives a dated filename)
        #[arg(short, long)]
        output: Option<String>,

        /// Calendar display name shown by subscribing clients
        #[arg(long)]
        name: Option<String>,

        /// Calendar description shown by subscribing clients
        #[arg(long)]
        description: Option<String>,

        /// Fixed generated-at instant (RFC 3339), for reproducible output
        #[arg(long)]
        timestamp: Option<String>,
    },
    /// List the events in a feed file
    Events {
        /// Path to the .ics file
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Feed {
            input,
            output,
            name,
            description,
            timestamp,
        } => commands::feed::run(
            &input,
            output.as_deref(),
            name,
            description,
            timestamp.as_deref(),
        ),
        Commands::Events { file } => commands::events::run(&file),
    }
}
