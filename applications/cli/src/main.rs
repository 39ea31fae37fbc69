//! Roster - fetch the user directory and render it as a list
use anyhow::Context;
use clap::{Parser, Subcommand};
use roster_cli::{commands, OutputFormat, RosterConfig};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "roster")]
#[command(version, about = "Fetch the user directory and render it as a list", long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./roster.toml if present)
    #[arg(short, long, global = true, env = "ROSTER_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch all users and render their names
    Users {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::List)]
        format: OutputFormat,
    },
    /// Fetch a single todo and print it as JSON
    Todo {
        /// Todo id
        #[arg(default_value_t = 1)]
        id: u64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries the rendered output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roster=info,roster_cli=info,roster_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = RosterConfig::load(cli.config.as_deref())?;
    config.validate()?;

    let mut stdout = std::io::stdout();

    match cli.command {
        Commands::Users { format } => {
            let count = commands::users(&config, format, &mut stdout)
                .await
                .context("failed to load users")?;
            tracing::debug!(count, "Done");
        }
        Commands::Todo { id } => {
            commands::todo(&config, id, &mut stdout)
                .await
                .with_context(|| format!("failed to load todo {}", id))?;
        }
    }

    Ok(())
}
