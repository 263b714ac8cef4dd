mod cmd;
mod output;

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use postgen_core::config::Config;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "postgen",
    about = "Generate Postman collection fixtures: rotation-based reservation suites",
    version,
    propagate_version = true
)]
struct Cli {
    /// Config file overriding the built-in rotations (YAML)
    #[arg(long, global = true, env = "POSTGEN_CONFIG")]
    config: Option<PathBuf>,

    /// Anchor date, YYYY-MM-DD (default: today)
    #[arg(long, global = true)]
    today: Option<NaiveDate>,

    /// Output the run summary as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill the Monday-reservation placeholder of an existing collection
    Weekly {
        /// Collection file to update
        #[arg(long)]
        collection: PathBuf,

        /// Write the result here instead of updating in place
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Build the daily bulk-reservation collection from scratch
    Daily {
        /// Output collection file
        #[arg(long)]
        out: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    let result = run(cli);

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load(path)
            .map_err(|e| anyhow::anyhow!("failed to load config {}: {e}", path.display()))?,
        None => Config::default(),
    };
    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());

    match cli.command {
        Commands::Weekly { collection, out } => cmd::weekly::run(
            &collection,
            out.as_deref(),
            &config.weekly,
            today,
            cli.json,
        ),
        Commands::Daily { out } => cmd::daily::run(&out, &config.daily, today, cli.json),
    }
}
