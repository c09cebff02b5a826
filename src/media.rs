//! # Media Links
//!
//! Decides whether a link can be handed to a video player or should open in a
//! browser. Pure string classification, no I/O.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref PLAYABLE_SCHEME_RE: Regex =
        Regex::new(r"(?i)^(https?://|file:///|content://)").expect("playable scheme regex");
    static ref WINDOWS_PATH_RE: Regex =
        Regex::new(r"^[A-Za-z]:\\").expect("windows drive path regex");
    static ref VIDEO_EXTENSION_RE: Regex =
        Regex::new(r"(?i)\.(mp4|m4v|mov|webm|mkv|m3u8|mpd)(\?.*)?$").expect("video extension regex");
    static ref HTTP_RE: Regex = Regex::new(r"(?i)^https?://").expect("http scheme regex");
}

/// A URI a video player can open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoSource {
    pub uri: String,
}

/// What to do with a link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// Direct media file; `streaming` is true when it comes over HTTP(S).
    Playable { source: VideoSource, streaming: bool },
    /// Web page or hosted watch page; open in a browser.
    External(String),
    Empty,
}

/// Normalizes a link or path into a player URI.
pub fn resolve_video_source(url: &str) -> Option<VideoSource> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return None;
    }

    let uri = if PLAYABLE_SCHEME_RE.is_match(trimmed) {
        trimmed.to_string()
    } else if WINDOWS_PATH_RE.is_match(trimmed) {
        format!("file:///{}", trimmed.replace('\\', "/"))
    } else if trimmed.starts_with('/') {
        format!("file://{trimmed}")
    } else {
        trimmed.to_string()
    };

    Some(VideoSource { uri })
}

pub fn is_streaming_url(url: &str) -> bool {
    HTTP_RE.is_match(url.trim())
}

/// True only for links that end in a known video container or manifest.
///
/// Hosted watch pages (YouTube and friends) have no media extension, so they
/// are never treated as playable.
pub fn is_likely_video_url(url: &str) -> bool {
    let trimmed = url.trim();
    !trimmed.is_empty() && VIDEO_EXTENSION_RE.is_match(trimmed)
}

pub fn classify_link(url: &str) -> LinkTarget {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return LinkTarget::Empty;
    }
    match resolve_video_source(trimmed) {
        Some(source) if is_likely_video_url(trimmed) => LinkTarget::Playable {
            source,
            streaming: is_streaming_url(trimmed),
        },
        _ => LinkTarget::External(trimmed.to_string()),
    }
}
