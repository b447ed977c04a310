//! Pipeline failure classification.
//!
//! Propagation is uniformly fail-fast: the first error in any stage aborts
//! the whole run. Callers convert to anyhow at stage boundaries; the enum
//! exists so tests and the CLI can tell the failure classes apart.

use std::fmt;
use std::io;

/// Why a page or body fetch failed.
#[derive(Debug)]
pub enum FetchFailure {
    /// Transport-level failure (DNS, connect, timeout, TLS).
    Transport(curl::Error),
    /// Server answered with a non-2xx status.
    Http(u32),
}

/// Why retrieval of one selected link failed.
#[derive(Debug)]
pub enum RetrievalFailure {
    /// The audio body could not be fetched.
    Fetch(FetchFailure),
    /// The audio body could not be written to disk.
    Write(io::Error),
}

/// One failure class per pipeline stage concern.
#[derive(Debug)]
pub enum PipelineError {
    /// Page unreachable or not loadable.
    Navigation { url: String, kind: FetchFailure },
    /// An expected DOM container is missing from an otherwise loaded page.
    /// Distinct from zero matching rows inside a present container.
    Structural {
        url: String,
        selector: &'static str,
    },
    /// Content fetch or disk write failed for one selected link.
    Retrieval { url: String, kind: RetrievalFailure },
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchFailure::Transport(e) => write!(f, "{}", e),
            FetchFailure::Http(code) => write!(f, "HTTP {}", code),
        }
    }
}

impl fmt::Display for RetrievalFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RetrievalFailure::Fetch(e) => write!(f, "{}", e),
            RetrievalFailure::Write(e) => write!(f, "write: {}", e),
        }
    }
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Navigation { url, kind } => {
                write!(f, "could not load {}: {}", url, kind)
            }
            PipelineError::Structural { url, selector } => {
                write!(f, "{} has no {} container", url, selector)
            }
            PipelineError::Retrieval { url, kind } => {
                write!(f, "could not retrieve {}: {}", url, kind)
            }
        }
    }
}

impl std::error::Error for FetchFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchFailure::Transport(e) => Some(e),
            FetchFailure::Http(_) => None,
        }
    }
}

impl std::error::Error for RetrievalFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RetrievalFailure::Fetch(e) => Some(e),
            RetrievalFailure::Write(e) => Some(e),
        }
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PipelineError::Navigation { kind, .. } => Some(kind),
            PipelineError::Structural { .. } => None,
            PipelineError::Retrieval { kind, .. } => Some(kind),
        }
    }
}
