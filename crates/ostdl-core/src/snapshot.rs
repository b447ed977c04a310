//! Incremental JSON snapshots of pipeline progress.
//!
//! Each snapshot is a full rewrite of a pretty-printed JSON array of URL
//! strings. Diagnostic/resumability artifacts only, never authoritative
//! pipeline state.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::album::{SelectedLink, TrackPage};

/// Discovered track page URLs, written after catalog extraction.
pub const TRACK_PAGES_FILE: &str = "track_pages.json";
/// Accumulating selected links, rewritten after every resolved track.
pub const DOWNLOAD_LINKS_FILE: &str = "download_links.json";

pub struct SnapshotWriter {
    dir: PathBuf,
}

impl SnapshotWriter {
    /// Creates the snapshot directory if needed.
    pub fn create(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("create snapshot dir: {}", dir.display()))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn write_track_pages(&self, pages: &[TrackPage]) -> Result<()> {
        self.rewrite(TRACK_PAGES_FILE, pages.iter().map(|p| p.url.as_str()))
    }

    pub fn write_download_links(&self, links: &[SelectedLink]) -> Result<()> {
        self.rewrite(DOWNLOAD_LINKS_FILE, links.iter().map(|l| l.url.as_str()))
    }

    fn rewrite<'a>(&self, file: &str, urls: impl Iterator<Item = &'a str>) -> Result<()> {
        let urls: Vec<&str> = urls.collect();
        let json = serde_json::to_vec_pretty(&urls).context("serialize snapshot")?;
        let path = self.dir.join(file);
        fs::write(&path, json).with_context(|| format!("write snapshot: {}", path.display()))?;
        Ok(())
    }
}
