//! YouTube Transcript Tool - download, list and translate YouTube transcripts
//!
//! This library extracts the video ID from a YouTube URL, retrieves the
//! transcript tracks attached to the video and renders them as plain text,
//! JSON, SRT or WebVTT.

pub mod cli;
pub mod extractors;
pub mod output;
pub mod transcribe;
pub mod utils;

pub use cli::{Cli, Commands};
pub use extractors::{extract_video_id, VideoId};
pub use output::{format_transcript, OutputFormat};
pub use transcribe::{
    FetchedTranscript, TranscriptSegment, TranscriptService, TranscriptSource,
    TranscriptVariantInfo,
};

/// Result type returned by the transcript pipeline
pub type TranscriptResult<T> = std::result::Result<T, TranscriptError>;

/// Error types specific to the transcript pipeline
#[derive(thiserror::Error, Debug)]
pub enum TranscriptError {
    #[error("Could not extract video ID from URL: {0}")]
    InvalidUrl(String),

    #[error("Could not {operation}")]
    RetrievalFailed {
        operation: &'static str,
        #[source]
        source: anyhow::Error,
    },

    #[error("No translatable transcript found for this video")]
    NoTranslatableVariant,

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to encode transcript: {0}")]
    Encoding(#[from] serde_json::Error),
}

impl TranscriptError {
    pub(crate) fn retrieval(operation: &'static str, source: anyhow::Error) -> Self {
        TranscriptError::RetrievalFailed { operation, source }
    }
}
