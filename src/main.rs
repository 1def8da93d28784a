use anyhow::Result;
use clap::{Parser, Subcommand};

/// portfolio - personal site and contact form
#[derive(Parser)]
#[command(name = "portfolio")]
#[command(about = "Portfolio website with a contact form", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = portfolio::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    portfolio::observability::init_observability(
        "portfolio",
        env!("CARGO_PKG_VERSION"),
        &config.logging,
    )?;

    match cli.command {
        Commands::Serve { host, port } => portfolio::cli::server::serve(config, host, port).await,
    }
}
