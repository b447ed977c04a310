//! Link resolution: track pages to selected download links.
//!
//! Selection itself is a pure function over one track's candidate hrefs; the
//! traversal loads pages through the session and invokes a checkpoint
//! callback after each track so callers can rewrite the links snapshot
//! without the selection logic touching any I/O.

use anyhow::{Context, Result};
use url::Url;

use crate::album::{SelectedLink, TrackPage};
use crate::error::PipelineError;
use crate::session::Session;

/// Content region holding a track's download anchors.
const CONTENT_REGION: &str = "#pageContent";
const CONTENT_LINKS: &str = "#pageContent a";

/// Automatic preference order, best first: lossless, then the fixed lossy
/// order.
const CASCADE: [&str; 3] = ["flac", "mp3", "ogg"];

/// Decides which of a track's candidate links are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatPolicy {
    /// No explicit format requested: apply the cascade, per track.
    Automatic,
    /// Keep every candidate whose raw href ends in one of these suffixes
    /// (case-sensitive). May keep several files for one track.
    Explicit(Vec<String>),
}

impl FormatPolicy {
    /// An empty extension list means automatic.
    pub fn from_extensions(extensions: Vec<String>) -> Self {
        if extensions.is_empty() {
            FormatPolicy::Automatic
        } else {
            FormatPolicy::Explicit(extensions)
        }
    }
}

/// Visits every track page in order and accumulates the selected links.
///
/// `checkpoint` runs after each track with the selection so far. A page that
/// cannot be loaded aborts the whole resolution; there is no per-track skip.
pub fn resolve_links<S, F>(
    session: &mut S,
    track_pages: &[TrackPage],
    policy: &FormatPolicy,
    mut checkpoint: F,
) -> Result<Vec<SelectedLink>>
where
    S: Session,
    F: FnMut(&[SelectedLink]) -> Result<()>,
{
    let mut selected: Vec<SelectedLink> = Vec::new();

    for page in track_pages {
        tracing::info!(url = %page.url, "resolving track page");
        let doc = session.load(&page.url)?;
        if !doc.has(CONTENT_REGION) {
            return Err(PipelineError::Structural {
                url: page.url.clone(),
                selector: CONTENT_REGION,
            }
            .into());
        }

        let hrefs = doc.attr_all(CONTENT_LINKS, "href");
        let kept = select_candidates(&hrefs, policy);

        // Matching happens on the raw href; only the kept links are made
        // absolute (identity for the absolute links the site serves).
        let base = Url::parse(&page.url)
            .with_context(|| format!("invalid track page URL: {}", page.url))?;
        for href in kept {
            let absolute = base
                .join(&href)
                .with_context(|| format!("unresolvable download link {:?} on {}", href, page.url))?;
            selected.push(SelectedLink {
                url: absolute.into(),
            });
        }

        checkpoint(&selected)?;
    }

    tracing::info!(links = selected.len(), "resolved download links");
    Ok(selected)
}

/// Applies the format policy to one track's candidates, preserving document
/// order. Pure; the cascade is evaluated per track, never album-wide.
pub fn select_candidates(hrefs: &[String], policy: &FormatPolicy) -> Vec<String> {
    match policy {
        FormatPolicy::Explicit(extensions) => hrefs
            .iter()
            .filter(|href| extensions.iter().any(|ext| href.ends_with(ext.as_str())))
            .cloned()
            .collect(),
        FormatPolicy::Automatic => {
            let lowered: Vec<String> = hrefs.iter().map(|h| h.to_lowercase()).collect();
            for ext in CASCADE {
                let hits: Vec<String> = hrefs
                    .iter()
                    .zip(&lowered)
                    .filter(|(_, lower)| lower.ends_with(ext))
                    .map(|(href, _)| href.clone())
                    .collect();
                if !hits.is_empty() {
                    return hits;
                }
            }
            Vec::new()
        }
    }
}
