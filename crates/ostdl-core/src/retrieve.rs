//! Retrieval execution: fetch each selected link and persist it.

use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::album::SelectedLink;
use crate::error::{PipelineError, RetrievalFailure};
use crate::session::Fetcher;
use crate::url_model::filename_for_url;

/// Fetches every selected link in order into `dest_dir`, creating the
/// directory if needed. An existing file of the same name is overwritten
/// without warning; re-running against a non-empty directory yields the same
/// final file set. Returns the number of files written.
pub fn retrieve<F: Fetcher>(
    fetcher: &mut F,
    links: &[SelectedLink],
    dest_dir: &Path,
) -> Result<usize> {
    fs::create_dir_all(dest_dir)
        .with_context(|| format!("create destination dir: {}", dest_dir.display()))?;

    let mut written = 0usize;
    for link in links {
        let filename = filename_for_url(&link.url);
        println!("Downloading: {}", filename);
        tracing::info!(url = %link.url, file = %filename, "retrieving");

        let body = fetcher.fetch(&link.url)?;
        write_file(&dest_dir.join(&filename), &body).map_err(|e| {
            PipelineError::Retrieval {
                url: link.url.clone(),
                kind: RetrievalFailure::Write(e),
            }
        })?;
        written += 1;
    }
    Ok(written)
}

/// Write the body to a `.part` temp file, then rename over the final name.
/// An interrupted run never leaves a truncated file under the final name.
fn write_file(final_path: &Path, body: &[u8]) -> io::Result<()> {
    let tmp = temp_path(final_path);
    fs::write(&tmp, body)?;
    fs::rename(&tmp, final_path)
}

/// `file.flac` → `file.flac.part`.
fn temp_path(final_path: &Path) -> PathBuf {
    let mut os = final_path.as_os_str().to_owned();
    os.push(".part");
    PathBuf::from(os)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchFailure;
    use std::collections::HashMap;

    struct FakeFetcher {
        bodies: HashMap<String, Vec<u8>>,
    }

    impl Fetcher for FakeFetcher {
        fn fetch(&mut self, url: &str) -> Result<Vec<u8>, PipelineError> {
            match self.bodies.get(url) {
                Some(body) => Ok(body.clone()),
                None => Err(PipelineError::Retrieval {
                    url: url.to_string(),
                    kind: RetrievalFailure::Fetch(FetchFailure::Http(404)),
                }),
            }
        }
    }

    fn fetcher(entries: &[(&str, &[u8])]) -> FakeFetcher {
        FakeFetcher {
            bodies: entries
                .iter()
                .map(|(u, b)| (u.to_string(), b.to_vec()))
                .collect(),
        }
    }

    fn links(urls: &[&str]) -> Vec<SelectedLink> {
        urls.iter()
            .map(|u| SelectedLink {
                url: u.to_string(),
            })
            .collect()
    }

    #[test]
    fn writes_one_file_per_link_with_decoded_names() {
        let dir = tempfile::tempdir().unwrap();
        let mut f = fetcher(&[
            ("https://cdn.example/ost/a.flac", b"flac-bytes"),
            ("https://cdn.example/ost/Song%20Title.mp3", b"mp3-bytes"),
        ]);
        let n = retrieve(
            &mut f,
            &links(&[
                "https://cdn.example/ost/a.flac",
                "https://cdn.example/ost/Song%20Title.mp3",
            ]),
            dir.path(),
        )
        .unwrap();
        assert_eq!(n, 2);
        assert_eq!(
            fs::read(dir.path().join("a.flac")).unwrap(),
            b"flac-bytes"
        );
        assert_eq!(
            fs::read(dir.path().join("Song Title.mp3")).unwrap(),
            b"mp3-bytes"
        );
        assert!(!dir.path().join("a.flac.part").exists());
    }

    #[test]
    fn creates_missing_destination_dir() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("albums").join("test-ost");
        let mut f = fetcher(&[("https://cdn.example/a.mp3", b"x")]);
        retrieve(&mut f, &links(&["https://cdn.example/a.mp3"]), &dest).unwrap();
        assert!(dest.join("a.mp3").exists());
    }

    #[test]
    fn rerun_overwrites_and_yields_the_same_file_set() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.mp3"), b"stale").unwrap();
        let mut f = fetcher(&[("https://cdn.example/a.mp3", b"fresh")]);
        let sel = links(&["https://cdn.example/a.mp3"]);
        retrieve(&mut f, &sel, dir.path()).unwrap();
        retrieve(&mut f, &sel, dir.path()).unwrap();
        assert_eq!(fs::read(dir.path().join("a.mp3")).unwrap(), b"fresh");
        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn fetch_failure_aborts_with_retrieval_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut f = fetcher(&[("https://cdn.example/a.mp3", b"x")]);
        let err = retrieve(
            &mut f,
            &links(&["https://cdn.example/missing.mp3", "https://cdn.example/a.mp3"]),
            dir.path(),
        )
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PipelineError>(),
            Some(PipelineError::Retrieval { .. })
        ));
        // Fail-fast: the later link was never fetched.
        assert!(!dir.path().join("a.mp3").exists());
    }
}
