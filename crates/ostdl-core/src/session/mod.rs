//! Browsing session and content fetch seams.
//!
//! The pipeline stages only depend on these traits, not on the HTTP or DOM
//! engines behind them, so the extraction/resolution logic is testable
//! against canned documents. One session value is acquired at run start,
//! injected into each stage, and dropped at run end; `&mut self` encodes the
//! one-page-at-a-time resource model.

mod http;

pub use http::HttpSession;

use scraper::{Html, Selector};

use crate::error::PipelineError;

/// Loads a URL and yields its queryable document.
pub trait Session {
    fn load(&mut self, url: &str) -> Result<HtmlDocument, PipelineError>;
}

/// Retrieves a URL's full body as bytes.
pub trait Fetcher {
    fn fetch(&mut self, url: &str) -> Result<Vec<u8>, PipelineError>;
}

/// A parsed page. Query results are in document order.
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    pub fn parse(text: &str) -> Self {
        Self {
            html: Html::parse_document(text),
        }
    }

    /// True if at least one element matches `css`.
    pub fn has(&self, css: &str) -> bool {
        self.html.select(&selector(css)).next().is_some()
    }

    /// `attr` of every element matching `css`; elements without the
    /// attribute contribute nothing.
    pub fn attr_all(&self, css: &str, attr: &str) -> Vec<String> {
        self.html
            .select(&selector(css))
            .filter_map(|el| el.value().attr(attr).map(str::to_string))
            .collect()
    }

    /// For each element matching `outer`, the `attr` of its first descendant
    /// matching `inner`. Outer elements with no such descendant are skipped.
    pub fn first_attr_per(&self, outer: &str, inner: &str, attr: &str) -> Vec<String> {
        let inner_sel = selector(inner);
        self.html
            .select(&selector(outer))
            .filter_map(|el| el.select(&inner_sel).next())
            .filter_map(|el| el.value().attr(attr).map(str::to_string))
            .collect()
    }
}

/// All selectors in this crate are compile-time constants; a parse failure
/// is a programming error.
fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("invalid CSS selector")
}
