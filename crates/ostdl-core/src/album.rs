//! Album data model.
//!
//! An album is identified by its listing page URL; the last path segment is
//! the slug used to name the destination directory. Track and link sequences
//! keep the listing's document order end to end.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use url::Url;

/// One soundtrack album, created once per run from the root location.
#[derive(Debug, Clone)]
pub struct Album {
    /// Album listing page; also the base for resolving relative track links.
    pub root_url: Url,
    /// Last path segment of the root URL.
    pub slug: String,
}

impl Album {
    pub fn from_root_url(raw: &str) -> Result<Self> {
        let root_url =
            Url::parse(raw).with_context(|| format!("invalid album URL: {}", raw))?;
        let slug = root_url
            .path()
            .split('/')
            .filter(|s| !s.is_empty())
            .last()
            .map(str::to_string)
            .with_context(|| format!("album URL has no path segment: {}", raw))?;
        Ok(Self { root_url, slug })
    }

    /// Destination directory for this album's files: `base/slug`.
    pub fn dest_dir(&self, base: &Path) -> PathBuf {
        base.join(&self.slug)
    }
}

/// One row of the album's track listing, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackPage {
    pub url: String,
}

/// A download link chosen for a track. The ordered sequence of selections is
/// the resolver's output and the retrieval executor's input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedLink {
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn slug_is_last_path_segment() {
        let album = Album::from_root_url(
            "https://downloads.khinsider.com/game-soundtracks/album/some-ost-1998",
        )
        .unwrap();
        assert_eq!(album.slug, "some-ost-1998");
    }

    #[test]
    fn slug_ignores_trailing_slash() {
        let album = Album::from_root_url("https://example.com/album/ocarina/").unwrap();
        assert_eq!(album.slug, "ocarina");
    }

    #[test]
    fn dest_dir_joins_slug() {
        let album = Album::from_root_url("https://example.com/album/ocarina").unwrap();
        assert_eq!(
            album.dest_dir(Path::new("downloads")),
            Path::new("downloads/ocarina")
        );
    }

    #[test]
    fn rejects_unparseable_url() {
        assert!(Album::from_root_url("not a url").is_err());
    }

    #[test]
    fn rejects_url_without_path() {
        assert!(Album::from_root_url("https://example.com/").is_err());
        assert!(Album::from_root_url("https://example.com").is_err());
    }
}
