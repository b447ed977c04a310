//! `ostdl fetch` – run the full extract/resolve/retrieve pipeline.

use anyhow::Result;
use std::path::PathBuf;

use ostdl_core::album::Album;
use ostdl_core::config::OstdlConfig;
use ostdl_core::pipeline;
use ostdl_core::session::HttpSession;

use super::{policy_from, snapshot_writer};

pub fn run_fetch(
    cfg: &OstdlConfig,
    url: &str,
    format: Option<Vec<String>>,
    output: Option<PathBuf>,
) -> Result<()> {
    let album = Album::from_root_url(url)?;
    let policy = policy_from(cfg, format);
    let download_dir = output.unwrap_or_else(|| cfg.download_dir.clone());
    let snapshots = snapshot_writer(cfg)?;

    let mut session = HttpSession::new()?;
    let report = pipeline::run_album(&mut session, &album, &policy, &download_dir, &snapshots)?;

    println!(
        "Done: {} file(s) in {}",
        report.files_written,
        album.dest_dir(&download_dir).display()
    );
    Ok(())
}
