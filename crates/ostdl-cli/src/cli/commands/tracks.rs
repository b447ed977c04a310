//! `ostdl tracks` – list the album's track pages.

use anyhow::Result;

use ostdl_core::album::Album;
use ostdl_core::catalog;
use ostdl_core::config::OstdlConfig;
use ostdl_core::session::HttpSession;

use super::snapshot_writer;

pub fn run_tracks(cfg: &OstdlConfig, url: &str) -> Result<()> {
    let album = Album::from_root_url(url)?;
    let snapshots = snapshot_writer(cfg)?;

    let mut session = HttpSession::new()?;
    println!("Album: {}", album.slug);

    let track_pages = catalog::extract_track_pages(&mut session, &album)?;
    snapshots.write_track_pages(&track_pages)?;

    println!("Track pages: {}", track_pages.len());
    for page in &track_pages {
        println!("{}", page.url);
    }
    Ok(())
}
