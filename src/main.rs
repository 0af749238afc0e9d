use std::path::PathBuf;

use axum::extract::FromRef;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod controllers;
mod error;
mod paste_id;
mod types;
mod upstream;

#[cfg(test)]
mod test_util;

pub(crate) use error::ApiResult;

use config::Config;
use upstream::Upstream;

/// Relay for reading pastes from pastefy.app.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Path to the config file.
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the relay over HTTP.
    Serve,
    /// Fetch a single paste and print it.
    Fetch {
        /// Paste URL or bare paste ID.
        target: String,
    },
}

#[derive(Clone, FromRef)]
pub struct App {
    pub config: Config,
    pub upstream: Upstream,
}

impl App {
    pub fn new(config: Config) -> Self {
        let upstream = Upstream::new(&config.upstream.base_url);
        App { config, upstream }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let app = App::new(Config::load(&cli.config).await?);

    match cli.command {
        Command::Serve => commands::serve::run(app).await,
        Command::Fetch { target } => commands::fetch::run(app, &target).await,
    }
}
