//! `linkstash` CLI - save, inspect, and classify shared links

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use linkstash::Config;

mod cmd {
    pub mod classify;
    pub mod detect;
    pub mod extract;
    pub mod message;
    pub mod output;
    pub mod save;
}

use cmd::classify::{cmd_classify, ClassifyArgs};
use cmd::detect::cmd_detect;
use cmd::extract::cmd_extract;
use cmd::message::cmd_message;
use cmd::save::cmd_save;

#[derive(Parser)]
#[command(name = "linkstash")]
#[command(about = "Turn shared links into categorised, tagged bookmarks")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (default: ~/.config/linkstash/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Skip AI providers and classify with keywords only
    #[arg(long, global = true)]
    offline: bool,

    /// Skip direct video URL lookup
    #[arg(long, global = true)]
    no_media: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "json")]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// Human-readable lines
    Text,
}

#[derive(Subcommand)]
enum Commands {
    /// Show which platform a URL belongs to
    Detect {
        /// URL to inspect
        url: String,
    },

    /// Extract title, caption, thumbnail, and media URLs from a link
    Extract {
        /// URL to extract
        url: String,
    },

    /// Classify text into a category with tags and a summary
    Classify(ClassifyArgs),

    /// Run the full pipeline and print the resulting bookmarks
    Save {
        /// One or more URLs to save
        #[arg(required = true)]
        urls: Vec<String>,
    },

    /// Print the chat reply for an incoming message
    Message {
        /// Message text as received
        text: String,
    },
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            let mut config = Config::from_file(path)?;
            config.apply_env(|key| std::env::var(key).ok());
            config
        }
        None => Config::load()?,
    };

    if cli.no_media {
        config.media.enabled = false;
    }
    if cli.offline {
        config = config.without_ai();
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("linkstash=info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Detect { url } => {
            cmd_detect(url, cli.format)?;
        }
        Commands::Extract { url } => {
            let config = load_config(&cli)?;
            cmd_extract(url, &config, cli.format).await?;
        }
        Commands::Classify(args) => {
            let config = load_config(&cli)?;
            cmd_classify(args, &config, cli.format).await?;
        }
        Commands::Save { urls } => {
            let config = load_config(&cli)?;
            cmd_save(urls, &config, cli.format).await?;
        }
        Commands::Message { text } => {
            let config = load_config(&cli)?;
            cmd_message(text, &config).await?;
        }
    }

    Ok(())
}
