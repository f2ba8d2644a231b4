use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod bootstrap;
mod commands;

#[derive(Parser)]
#[command(name = "fridgechef")]
#[command(about = "Fridgechef - recipe recommendations from your fridge and a voice cooking guide", long_about = None)]
struct Cli {
    /// Config file (defaults to $FRIDGECHEF_CONFIG or ~/.config/fridgechef/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive cooking session: type what you would say to the assistant
    Repl {
        #[arg(long)]
        user: String,
    },
    /// Recommend recipes for a free-text request
    Recommend {
        #[arg(long)]
        user: String,
        /// e.g. "우유가 없는데 유통기한 임박한 걸로 뭐 해먹지?"
        text: String,
    },
    /// List ingredients that expire soon
    Expiring {
        #[arg(long)]
        user: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    bootstrap::init_logging(cli.verbose);

    let runtime = bootstrap::Runtime::load(cli.config.as_deref()).await?;

    match cli.command {
        Commands::Repl { user } => commands::repl::run(&runtime, &user).await?,
        Commands::Recommend { user, text } => {
            commands::recommend::run(&runtime, &user, &text).await?
        }
        Commands::Expiring { user } => commands::expiring::run(&runtime, &user).await?,
    }

    Ok(())
}
