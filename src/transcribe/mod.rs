use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::extractors::{self, VideoId};
use crate::output::{self, OutputFormat};
use crate::{TranscriptError, TranscriptResult};

pub mod processor;
pub mod youtube;

pub use youtube::YoutubeClient;

/// Language used when the caller has no preference
const DEFAULT_LANGUAGE: &str = "en";

/// Individual transcript segment with timing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    /// Segment text
    pub text: String,

    /// Start offset in seconds
    pub start: f64,

    /// Duration in seconds
    pub duration: f64,
}

/// Transcript content returned by a single retrieval call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FetchedTranscript {
    pub video_id: VideoId,

    /// Human readable language name, e.g. "English (auto-generated)"
    pub language: String,

    pub language_code: String,

    /// Whether the track was generated by speech recognition
    pub is_generated: bool,

    pub segments: Vec<TranscriptSegment>,
}

/// Metadata describing one available transcript track
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranscriptVariantInfo {
    pub language: String,
    pub language_code: String,
    pub is_generated: bool,
    pub is_translatable: bool,
}

/// A transcript track of a specific video
///
/// Language code and generation method identify the track within the
/// service's listing.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptTrack {
    pub video_id: VideoId,
    pub info: TranscriptVariantInfo,
}

/// Service that knows which transcript tracks a video has and how to fetch them
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TranscriptSource: Send + Sync {
    /// List every transcript track attached to a video, in service order
    async fn list_tracks(&self, video_id: &VideoId) -> anyhow::Result<Vec<TranscriptTrack>>;

    /// Fetch the content of a track
    async fn fetch_track(&self, track: &TranscriptTrack) -> anyhow::Result<FetchedTranscript>;

    /// Fetch a track machine translated into `target_language`
    async fn fetch_translated(
        &self,
        track: &TranscriptTrack,
        target_language: &str,
    ) -> anyhow::Result<FetchedTranscript>;
}

/// Main transcript pipeline
pub struct TranscriptService<S> {
    source: S,
}

impl<S: TranscriptSource> TranscriptService<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// List metadata of all transcript tracks for a video
    pub async fn list_variants(
        &self,
        video_id: &VideoId,
    ) -> TranscriptResult<Vec<TranscriptVariantInfo>> {
        let tracks = self
            .source
            .list_tracks(video_id)
            .await
            .map_err(|e| TranscriptError::retrieval("list transcripts", e))?;

        tracing::info!("Found {} transcripts", tracks.len());
        Ok(tracks.into_iter().map(|track| track.info).collect())
    }

    /// Fetch a transcript, preferring the given language when set
    pub async fn fetch(
        &self,
        video_id: &VideoId,
        preferred_language: Option<&str>,
    ) -> TranscriptResult<FetchedTranscript> {
        const OPERATION: &str = "retrieve transcript";

        let tracks = self
            .source
            .list_tracks(video_id)
            .await
            .map_err(|e| TranscriptError::retrieval(OPERATION, e))?;

        let track = match preferred_language {
            Some(language) => {
                tracing::debug!("Requesting transcript in language: {}", language);
                find_track(&tracks, language).ok_or_else(|| {
                    TranscriptError::retrieval(
                        OPERATION,
                        anyhow::anyhow!(
                            "No transcript found for language code {} (available: {})",
                            language,
                            available_codes(&tracks)
                        ),
                    )
                })?
            }
            None => default_track(&tracks).ok_or_else(|| {
                TranscriptError::retrieval(
                    OPERATION,
                    anyhow::anyhow!("No transcripts are available for video {}", video_id),
                )
            })?,
        };

        let transcript = self
            .source
            .fetch_track(track)
            .await
            .map_err(|e| TranscriptError::retrieval(OPERATION, e))?;

        tracing::info!("Retrieved {} transcript entries", transcript.segments.len());
        Ok(transcript)
    }

    /// Translate the first translatable track into `target_language`
    pub async fn translate(
        &self,
        video_id: &VideoId,
        target_language: &str,
    ) -> TranscriptResult<FetchedTranscript> {
        const OPERATION: &str = "translate transcript";

        let tracks = self
            .source
            .list_tracks(video_id)
            .await
            .map_err(|e| TranscriptError::retrieval(OPERATION, e))?;

        // First translatable track in service order wins
        let track = tracks
            .iter()
            .find(|track| track.info.is_translatable)
            .ok_or(TranscriptError::NoTranslatableVariant)?;

        tracing::debug!(
            "Found translatable transcript in {}, translating to {}",
            track.info.language_code,
            target_language
        );

        let transcript = self
            .source
            .fetch_translated(track, target_language)
            .await
            .map_err(|e| TranscriptError::retrieval(OPERATION, e))?;

        tracing::info!("Retrieved {} translated entries", transcript.segments.len());
        Ok(transcript)
    }

    /// Download a transcript from a URL and render it in the named format
    pub async fn download_from_url(
        &self,
        url: &str,
        language: Option<&str>,
        format: &str,
    ) -> TranscriptResult<String> {
        let format: OutputFormat = format.parse()?;
        tracing::info!("Downloading transcript from: {}", url);

        let video_id = extractors::extract_video_id(url)?;
        let transcript = self.fetch(&video_id, language).await?;
        output::format_transcript(&transcript, format)
    }

    /// List transcript tracks available for the video behind a URL
    pub async fn list_from_url(&self, url: &str) -> TranscriptResult<Vec<TranscriptVariantInfo>> {
        tracing::info!("Listing transcripts for: {}", url);

        let video_id = extractors::extract_video_id(url)?;
        self.list_variants(&video_id).await
    }

    /// Translate the transcript of the video behind a URL and render it
    pub async fn translate_from_url(
        &self,
        url: &str,
        target_language: &str,
        format: &str,
    ) -> TranscriptResult<String> {
        let format: OutputFormat = format.parse()?;
        tracing::info!("Translating transcript from {} to: {}", url, target_language);

        let video_id = extractors::extract_video_id(url)?;
        let transcript = self.translate(&video_id, target_language).await?;
        output::format_transcript(&transcript, format)
    }
}

/// Find the track for a language code, manually created tracks first
fn find_track<'a>(tracks: &'a [TranscriptTrack], language: &str) -> Option<&'a TranscriptTrack> {
    let mut matching = tracks
        .iter()
        .filter(|track| track.info.language_code == language);

    let first = matching.next()?;
    if !first.info.is_generated {
        return Some(first);
    }
    matching.find(|track| !track.info.is_generated).or(Some(first))
}

/// Track used when the caller did not ask for a language
fn default_track(tracks: &[TranscriptTrack]) -> Option<&TranscriptTrack> {
    find_track(tracks, DEFAULT_LANGUAGE).or_else(|| tracks.first())
}

fn available_codes(tracks: &[TranscriptTrack]) -> String {
    if tracks.is_empty() {
        return "none".to_string();
    }
    tracks
        .iter()
        .map(|track| track.info.language_code.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
