//! Command-line interface.

mod render;
mod serve;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use folio::config::load_settings;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Single-page portfolio site server")]
#[command(version)]
pub struct Cli {
    /// Config file path (auto-discovered when omitted)
    #[arg(short, long, global = true, env = "FOLIO_CONFIG")]
    config: Option<PathBuf>,

    /// Content directory (overrides the config file)
    #[arg(long, global = true)]
    content_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server (default)
    Serve {
        /// Bind address: PORT, HOST, or HOST:PORT
        #[arg(short, long)]
        bind: Option<String>,
    },

    /// Render the page once and write the HTML
    Render {
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Parse arguments and run the selected command.
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = load_settings(cli.config.as_deref(), cli.content_dir.as_deref()).await?;

    match cli.command.unwrap_or(Commands::Serve { bind: None }) {
        Commands::Serve { bind } => {
            let bind = bind.unwrap_or_else(|| settings.bind.clone());
            serve::cmd_serve(settings, &bind).await
        }
        Commands::Render { output } => render::cmd_render(&settings, output.as_deref()).await,
    }
}
