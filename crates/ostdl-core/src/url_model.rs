//! Filename derivation from a download link.
//!
//! The filename is the last non-empty path segment of the URL, percent-decoded.
//! Decoding is the only renaming performed; files are never deduplicated, so a
//! collision on disk silently overwrites.

use std::borrow::Cow;

/// Fallback when the URL yields no usable segment.
const DEFAULT_FILENAME: &str = "download.bin";

/// Derives the local filename for a download URL.
///
/// - `https://host/ost/Song%20Title.flac` → `Song Title.flac`
/// - query and fragment are not part of the name
///
/// Characters that cannot appear in a Linux filename (`/`, NUL, control
/// chars) are replaced with `_` after decoding so a decoded segment cannot
/// escape the destination directory.
pub fn filename_for_url(url: &str) -> String {
    let Some(segment) = last_path_segment(url) else {
        return DEFAULT_FILENAME.to_string();
    };
    let decoded: Cow<'_, str> = match urlencoding::decode(&segment) {
        Ok(d) => d,
        // Percent sequences that are not valid UTF-8: keep the raw segment.
        Err(_) => Cow::Borrowed(segment.as_str()),
    };
    let safe: String = decoded
        .chars()
        .map(|c| {
            if c == '/' || c == '\0' || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect();
    if safe.is_empty() || safe == "." || safe == ".." {
        DEFAULT_FILENAME.to_string()
    } else {
        safe
    }
}

fn last_path_segment(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let segment = parsed.path().split('/').filter(|s| !s.is_empty()).last()?;
    if segment == "." || segment == ".." {
        return None;
    }
    Some(segment.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_percent_encoding() {
        assert_eq!(
            filename_for_url("https://cdn.example.com/ost/Song%20Title.flac"),
            "Song Title.flac"
        );
        assert_eq!(
            filename_for_url("https://cdn.example.com/a/01%20-%20Intro.mp3"),
            "01 - Intro.mp3"
        );
    }

    #[test]
    fn plain_segment_passes_through() {
        assert_eq!(
            filename_for_url("https://cdn.example.com/a/b/track.ogg"),
            "track.ogg"
        );
    }

    #[test]
    fn query_is_not_part_of_the_name() {
        assert_eq!(
            filename_for_url("https://cdn.example.com/track.mp3?token=abc"),
            "track.mp3"
        );
    }

    #[test]
    fn decoded_slash_cannot_escape_dest_dir() {
        assert_eq!(
            filename_for_url("https://cdn.example.com/a%2F..%2Fb.mp3"),
            "a_.._b.mp3"
        );
    }

    #[test]
    fn root_or_empty_path_falls_back() {
        assert_eq!(filename_for_url("https://example.com/"), "download.bin");
        assert_eq!(filename_for_url("https://example.com"), "download.bin");
        assert_eq!(filename_for_url("https://example.com/.."), "download.bin");
    }
}
