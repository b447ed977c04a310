//! CLI command handlers. Each command is in its own file for clarity.

mod fetch;
mod resolve;
mod tracks;

pub use fetch::run_fetch;
pub use resolve::run_resolve;
pub use tracks::run_tracks;

use anyhow::Result;
use ostdl_core::config::{self, OstdlConfig};
use ostdl_core::resolve::FormatPolicy;
use ostdl_core::snapshot::SnapshotWriter;

/// CLI `--format` wins over the configured extension list.
fn policy_from(cfg: &OstdlConfig, cli_format: Option<Vec<String>>) -> FormatPolicy {
    let extensions = cli_format.unwrap_or_else(|| cfg.extensions.clone());
    FormatPolicy::from_extensions(extensions)
}

fn snapshot_writer(cfg: &OstdlConfig) -> Result<SnapshotWriter> {
    let dir = match &cfg.state_dir {
        Some(dir) => dir.clone(),
        None => config::default_state_dir()?,
    };
    SnapshotWriter::create(dir)
}
