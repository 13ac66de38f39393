use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "carenav")]
#[command(about = "carenav CLI - child-center recommendations and district reports", long_about = None)]
struct Cli {
    /// Config file to use instead of ~/.config/carenav/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send one chat message and print the reply
    Chat {
        /// The message, e.g. "제일 가까운 곳 추천해줘"
        message: String,
    },
    /// Generate a district report draft
    Report {
        /// District name, e.g. 강북구
        district: String,
        #[arg(long)]
        from: i32,
        #[arg(long)]
        to: i32,
        /// Refine the generated draft with this instruction
        #[arg(long)]
        refine: Option<String>,
    },
    /// Show which signals a message triggers
    Signals {
        message: String,
    },
    /// Inspect the client configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the config file path
    Path,
    /// Print the effective configuration as TOML
    Show,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = commands::config::service(cli.config)?;

    match cli.command {
        Commands::Chat { message } => commands::chat::run(&config, &message).await?,
        Commands::Report {
            district,
            from,
            to,
            refine,
        } => commands::report::run(&config, &district, from, to, refine.as_deref()).await?,
        Commands::Signals { message } => commands::signals::run(&config, &message)?,
        Commands::Config { action } => match action {
            ConfigAction::Path => commands::config::path(&config),
            ConfigAction::Show => commands::config::show(&config)?,
        },
    }

    Ok(())
}
