//! CLI frontend for the Animal World factory simulation.

mod commands;

use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "aw",
    about = "Animal World: continents breed matched herbivores and predators",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log simulation steps to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Feed and hunt on each continent (the default)
    Run {
        /// Only simulate this continent (africa, north-america, eurasia)
        #[arg(short, long)]
        continent: Option<String>,

        /// Print reports as JSON instead of the transcript
        #[arg(long)]
        json: bool,
    },

    /// Show which animals each continent produces
    Continents,
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        None => commands::run::run(None, false),
        Some(Commands::Run { continent, json }) => commands::run::run(continent.as_deref(), json),
        Some(Commands::Continents) => commands::continents::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
