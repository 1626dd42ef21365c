#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

mod command;

use addrscan_config::Config;
use clap::{Parser, Subcommand};
use command::{
    ApplyInput, ApplyStrategy, CommandStrategy, ExtractInput, ExtractStrategy, InfoInput,
    InfoStrategy, InitInput, InitStrategy, StatesStrategy, VersionStrategy,
};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "addrscan")]
#[command(about = "Extract US postal addresses from free-text notes", long_about = None)]
struct Cli {
    /// Config file (defaults to ~/addrscan/config.json when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract every address from a block of text
    Extract {
        /// Text to scan
        #[arg(short, long, conflicts_with = "file")]
        text: Option<String>,

        /// File to scan (stdin when neither --text nor --file is given)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Only report the first address, as a fixed set of nullable fields
        #[arg(long)]
        first: bool,
    },
    /// Add address columns to a JSON / JSON Lines table
    Apply {
        /// Input table
        #[arg(short, long)]
        input: PathBuf,

        /// Column holding the free text
        #[arg(short, long)]
        column: Option<String>,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Prefix for the added column names
        #[arg(long)]
        prefix: Option<String>,
    },
    /// List the accepted states
    States,
    /// Initialize configuration
    Init,
    /// Show the effective configuration
    Info,
    /// Show version
    Version,
}

fn init_tracing(level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?;
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // init must work before any config file exists
    let config = if matches!(cli.command, Commands::Init) {
        Config::default()
    } else {
        Config::load_or_default(cli.config.as_deref())?
    };
    init_tracing(&config.logging.level)?;

    let source = cli.config.clone().or_else(|| {
        Config::default_path()
            .ok()
            .filter(|path| path.exists())
    });
    debug!(?source, "Configuration resolved");

    match cli.command {
        Commands::Extract { text, file, first } => {
            ExtractStrategy
                .execute(ExtractInput {
                    grammar: config.matcher,
                    text,
                    file,
                    first,
                })
                .await?;
        }
        Commands::Apply {
            input,
            column,
            output,
            prefix,
        } => {
            ApplyStrategy
                .execute(ApplyInput {
                    grammar: config.matcher,
                    input,
                    output,
                    column: column.unwrap_or(config.column.default_column),
                    prefix: prefix.unwrap_or(config.column.prefix),
                })
                .await?;
        }
        Commands::States => StatesStrategy.execute(()).await?,
        Commands::Init => InitStrategy.execute(InitInput { path: cli.config }).await?,
        Commands::Info => InfoStrategy.execute(InfoInput { config, source }).await?,
        Commands::Version => VersionStrategy.execute(()).await?,
    }

    Ok(())
}
