use anyhow::Result;
use clap::{Parser, Subcommand};
use ostdl_core::config;
use std::path::PathBuf;

mod commands;

/// Top-level CLI for the OSTDL soundtrack album downloader.
#[derive(Debug, Parser)]
#[command(name = "ostdl")]
#[command(about = "OSTDL: sequential soundtrack album downloader", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download every track of an album.
    Fetch {
        /// Album listing page URL.
        url: String,

        /// Comma-separated accepted extensions (e.g. "mp3" or "mp3,ogg"),
        /// overriding the configured policy. Without it, and with no
        /// configured extensions, the flac > mp3 > ogg cascade applies.
        #[arg(long, value_delimiter = ',')]
        format: Option<Vec<String>>,

        /// Base download directory, overriding the configured one.
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Resolve download links without retrieving them.
    Resolve {
        /// Album listing page URL.
        url: String,

        /// Comma-separated accepted extensions, as for `fetch`.
        #[arg(long, value_delimiter = ',')]
        format: Option<Vec<String>>,
    },

    /// List the album's track pages.
    Tracks {
        /// Album listing page URL.
        url: String,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Fetch {
                url,
                format,
                output,
            } => commands::run_fetch(&cfg, &url, format, output),
            CliCommand::Resolve { url, format } => commands::run_resolve(&cfg, &url, format),
            CliCommand::Tracks { url } => commands::run_tracks(&cfg, &url),
        }
    }
}
