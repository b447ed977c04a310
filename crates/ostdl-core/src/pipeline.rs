//! Run orchestration: the three stages in strict sequence.
//!
//! One session handle serves the whole run. Each stage's output is
//! snapshotted before the next stage starts, so a crash after stage N leaves
//! stage N's complete output on disk.

use anyhow::Result;
use std::path::Path;

use crate::album::Album;
use crate::catalog;
use crate::resolve::{self, FormatPolicy};
use crate::retrieve;
use crate::session::{Fetcher, Session};
use crate::snapshot::SnapshotWriter;

/// Counts reported after a completed run.
#[derive(Debug, Clone, Copy)]
pub struct RunReport {
    pub track_pages: usize,
    pub selected_links: usize,
    pub files_written: usize,
}

/// Runs extract → resolve → retrieve for one album.
///
/// Files land in `<download_dir>/<slug>`. Fail-fast: the first error in any
/// stage aborts the run, leaving the last written snapshot behind.
pub fn run_album<S>(
    session: &mut S,
    album: &Album,
    policy: &FormatPolicy,
    download_dir: &Path,
    snapshots: &SnapshotWriter,
) -> Result<RunReport>
where
    S: Session + Fetcher,
{
    println!("Album: {}", album.slug);

    let track_pages = catalog::extract_track_pages(session, album)?;
    snapshots.write_track_pages(&track_pages)?;
    println!("Track pages: {}", track_pages.len());

    let selected = resolve::resolve_links(session, &track_pages, policy, |links| {
        snapshots.write_download_links(links)
    })?;
    snapshots.write_download_links(&selected)?;
    println!("Download links: {}", selected.len());

    let dest = album.dest_dir(download_dir);
    let files_written = retrieve::retrieve(session, &selected, &dest)?;

    Ok(RunReport {
        track_pages: track_pages.len(),
        selected_links: selected.len(),
        files_written,
    })
}
