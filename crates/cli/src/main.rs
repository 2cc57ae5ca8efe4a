//! `sales-pipeline` command line.
//!
//! Inspects, scaffolds and checks the configuration of a sales reporting
//! project rooted at `--root`.

mod commands;

use clap::Parser;
use clap::Subcommand;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "sales-pipeline", version, about = "Sales Reporting Data Pipeline")]
struct Cli {
    /// Project root containing the `config/` directory.
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show project metadata and file defaults.
    Info,

    /// List configuration file locations and whether they exist.
    Paths,

    /// Write default configuration files.
    Init {
        /// Overwrite an existing config directory.
        #[arg(long)]
        force: bool,

        /// Only write connections, retailers and the ingestion list.
        #[arg(long)]
        minimal: bool,
    },

    /// Load and validate the configuration.
    Check,

    /// List the files each enabled ingestion source would pick up.
    Discover {
        /// Print as JSON.
        #[arg(long)]
        json: bool,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // RUST_LOG wins over -v
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Info => commands::show_info(),
        Command::Paths => commands::paths(&cli.root),
        Command::Init { force, minimal } => commands::init(&cli.root, force, minimal).await,
        Command::Check => commands::check(&cli.root).await,
        Command::Discover { json } => commands::discover(&cli.root, json).await,
    }
}
