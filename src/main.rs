//! # itemstore CLI
//!
//! Starts the item catalogue web server.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;

use itemstore::{logging, Config, ItemStore, Server};

#[derive(Parser)]
#[command(name = "itemstore")]
#[command(version)]
#[command(about = "Minimal item catalogue over HTML forms", long_about = None)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// SQLite database file
    #[arg(short, long)]
    database: Option<PathBuf>,

    /// Host to bind to
    #[arg(short = 'H', long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    log_level: Option<String>,

    /// Enable JSON logging
    #[arg(long)]
    json_logs: bool,
}

impl Cli {
    /// Applies command-line overrides on top of the loaded configuration.
    fn apply(self, mut config: Config) -> Config {
        if let Some(database) = self.database {
            config.database_path = database;
        }
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(level) = self.log_level {
            config.log_level = level;
        }
        if self.json_logs {
            config.json_logs = true;
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    let config = cli.apply(config);

    logging::init_logging(&config);

    let addr = config.listen_addr()?;
    let store = ItemStore::open(&config.database_path)?;

    Server::new(addr, store).run().await?;
    Ok(())
}
