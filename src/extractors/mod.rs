use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

use crate::{TranscriptError, TranscriptResult};

/// Recognised YouTube URL shapes, in priority order.
///
/// The capture runs up to the next `&` or newline and is used verbatim.
static VIDEO_ID_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    [
        ("watch", r"(?:youtube\.com/watch\?v=)([^&\n]+)"),
        ("short link", r"(?:youtu\.be/)([^&\n]+)"),
        ("embed", r"(?:youtube\.com/embed/)([^&\n]+)"),
        ("legacy", r"(?:youtube\.com/v/)([^&\n]+)"),
    ]
    .into_iter()
    .map(|(shape, pattern)| (shape, Regex::new(pattern).unwrap()))
    .collect()
});

/// Identifier of a single video on YouTube
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VideoId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Extract the video ID from a YouTube URL
pub fn extract_video_id(url: &str) -> TranscriptResult<VideoId> {
    for (shape, pattern) in VIDEO_ID_PATTERNS.iter() {
        if let Some(id) = pattern.captures(url).and_then(|caps| caps.get(1)) {
            tracing::debug!("Extracted video ID {} from {} URL", id.as_str(), shape);
            return Ok(VideoId(id.as_str().to_string()));
        }
    }

    tracing::debug!("No known URL shape matched: {}", url);
    Err(TranscriptError::InvalidUrl(url.to_string()))
}
