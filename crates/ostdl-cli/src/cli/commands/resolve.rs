//! `ostdl resolve` – resolve download links without retrieving them.

use anyhow::Result;

use ostdl_core::album::Album;
use ostdl_core::config::OstdlConfig;
use ostdl_core::session::HttpSession;
use ostdl_core::{catalog, resolve};

use super::{policy_from, snapshot_writer};

pub fn run_resolve(cfg: &OstdlConfig, url: &str, format: Option<Vec<String>>) -> Result<()> {
    let album = Album::from_root_url(url)?;
    let policy = policy_from(cfg, format);
    let snapshots = snapshot_writer(cfg)?;

    let mut session = HttpSession::new()?;
    println!("Album: {}", album.slug);

    let track_pages = catalog::extract_track_pages(&mut session, &album)?;
    snapshots.write_track_pages(&track_pages)?;
    println!("Track pages: {}", track_pages.len());

    let selected = resolve::resolve_links(&mut session, &track_pages, &policy, |links| {
        snapshots.write_download_links(links)
    })?;
    snapshots.write_download_links(&selected)?;

    println!("Download links: {}", selected.len());
    for link in &selected {
        println!("{}", link.url);
    }
    Ok(())
}
