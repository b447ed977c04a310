//! Production session over libcurl.
//!
//! One `Easy` handle is reused for every request in the run, so keep-alive
//! connections persist across page loads and audio fetches.

use anyhow::Result;
use std::time::Duration;

use crate::error::{FetchFailure, PipelineError, RetrievalFailure};

use super::{Fetcher, HtmlDocument, Session};

pub struct HttpSession {
    easy: curl::easy::Easy,
}

impl HttpSession {
    pub fn new() -> Result<Self> {
        let mut easy = curl::easy::Easy::new();
        // Handle-level options persist across transfers.
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        easy.connect_timeout(Duration::from_secs(30))?;
        easy.timeout(Duration::from_secs(3600))?;
        Ok(Self { easy })
    }

    fn get(&mut self, url: &str) -> Result<Vec<u8>, FetchFailure> {
        self.easy.url(url).map_err(FetchFailure::Transport)?;

        let mut body = Vec::new();
        {
            let mut transfer = self.easy.transfer();
            transfer
                .write_function(|data| {
                    body.extend_from_slice(data);
                    Ok(data.len())
                })
                .map_err(FetchFailure::Transport)?;
            transfer.perform().map_err(FetchFailure::Transport)?;
        }

        let code = self
            .easy
            .response_code()
            .map_err(FetchFailure::Transport)?;
        if !(200..300).contains(&code) {
            return Err(FetchFailure::Http(code));
        }
        Ok(body)
    }
}

impl Session for HttpSession {
    fn load(&mut self, url: &str) -> Result<HtmlDocument, PipelineError> {
        let body = self.get(url).map_err(|kind| PipelineError::Navigation {
            url: url.to_string(),
            kind,
        })?;
        Ok(HtmlDocument::parse(&String::from_utf8_lossy(&body)))
    }
}

impl Fetcher for HttpSession {
    fn fetch(&mut self, url: &str) -> Result<Vec<u8>, PipelineError> {
        self.get(url).map_err(|kind| PipelineError::Retrieval {
            url: url.to_string(),
            kind: RetrievalFailure::Fetch(kind),
        })
    }
}
