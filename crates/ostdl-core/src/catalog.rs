//! Catalog extraction: album listing page to ordered track page URLs.

use anyhow::{Context, Result};

use crate::album::{Album, TrackPage};
use crate::error::PipelineError;
use crate::session::Session;

/// Track listing container. Its absence is a structural failure, distinct
/// from a present but empty listing.
const TRACK_TABLE: &str = "#songlist";
/// Listing rows, document order.
const TRACK_ROWS: &str = "#songlist tr";
/// First navigational anchor of a row carrying the track marker class.
/// Rows without the marker (header/footer) are skipped.
const ROW_LINK: &str = ".clickable-row a";

/// Extracts the album's track pages in listing order.
///
/// Hrefs are resolved to absolute URLs against the album root URL; for the
/// root-relative links the catalog site serves this is the same as
/// prefixing the site origin. An empty result is valid.
pub fn extract_track_pages<S: Session>(session: &mut S, album: &Album) -> Result<Vec<TrackPage>> {
    let root = album.root_url.as_str();
    let doc = session.load(root)?;
    if !doc.has(TRACK_TABLE) {
        return Err(PipelineError::Structural {
            url: root.to_string(),
            selector: TRACK_TABLE,
        }
        .into());
    }

    let mut pages = Vec::new();
    for href in doc.first_attr_per(TRACK_ROWS, ROW_LINK, "href") {
        let absolute = album
            .root_url
            .join(&href)
            .with_context(|| format!("unresolvable track link {:?} on {}", href, root))?;
        pages.push(TrackPage {
            url: absolute.into(),
        });
    }
    tracing::info!(album = %album.slug, tracks = pages.len(), "extracted track pages");
    Ok(pages)
}
