//! Gavel server entry point
//!
//! Authorization and session management core for an online-judge
//! platform: role hierarchies, JWT sessions with refresh rotation, and
//! transport-uniform authorization guards.

use clap::Parser;
use gavel_server::init::run;

/// Command line interface for the Gavel auth server
#[derive(Parser, Debug)]
#[command(name = "gavel")]
#[command(about = "Gavel - authorization and session management server")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Validate configuration and exit
    #[arg(long)]
    pub check_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run(cli.config.as_deref(), cli.check_config).await
}
