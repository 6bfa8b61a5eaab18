use anyhow::{anyhow, bail, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use yt_transcript_rs::api::YouTubeTranscriptApi;
use yt_transcript_rs::innertube_client::InnerTubeClient;
use yt_transcript_rs::transcript_parser::TranscriptParser;
use yt_transcript_rs::Transcript;

use super::processor;
use super::{FetchedTranscript, TranscriptSource, TranscriptTrack};
use crate::extractors::VideoId;

/// Transcript source backed by YouTube's caption service
#[derive(Clone)]
pub struct YoutubeClient {
    api: YouTubeTranscriptApi,
    client: Client,
}

impl YoutubeClient {
    pub fn new() -> Result<Self> {
        let api = YouTubeTranscriptApi::new(None, None, None)
            .map_err(|e| anyhow!("Failed to initialize YouTube client: {e}"))?;

        Ok(Self {
            api,
            client: Client::new(),
        })
    }

    /// Look up the service-side handle of a track from a fresh listing
    async fn find_transcript(&self, track: &TranscriptTrack) -> Result<Transcript> {
        let list = self
            .api
            .list_transcripts(track.video_id.as_str())
            .await
            .map_err(|e| anyhow!("{e}"))?;

        let found = list
            .transcripts()
            .find(|t| {
                t.language_code == track.info.language_code
                    && t.is_generated() == track.info.is_generated
            })
            .cloned()
            .ok_or_else(|| {
                anyhow!(
                    "Transcript {} is no longer listed for video {}",
                    track.info.language_code,
                    track.video_id
                )
            });
        found
    }
}

#[async_trait]
impl TranscriptSource for YoutubeClient {
    async fn list_tracks(&self, video_id: &VideoId) -> Result<Vec<TranscriptTrack>> {
        tracing::debug!("Listing transcripts for video {}", video_id);

        let list = self
            .api
            .list_transcripts(video_id.as_str())
            .await
            .map_err(|e| anyhow!("{e}"))?;

        let tracks: Vec<TranscriptTrack> = list
            .transcripts()
            .map(|transcript| processor::track_from_transcript(video_id, transcript))
            .collect();

        tracing::debug!("Service listed {} tracks", tracks.len());
        Ok(tracks)
    }

    async fn fetch_track(&self, track: &TranscriptTrack) -> Result<FetchedTranscript> {
        let transcript = self.find_transcript(track).await?;
        tracing::debug!("Fetching {} transcript", transcript.language_code);

        let fetched = transcript
            .fetch(&self.client, false)
            .await
            .map_err(|e| anyhow!("{e}"))?;

        Ok(processor::convert_transcript(&track.video_id, fetched))
    }

    async fn fetch_translated(
        &self,
        track: &TranscriptTrack,
        target_language: &str,
    ) -> Result<FetchedTranscript> {
        let transcript = self.find_transcript(track).await?;
        let translated = transcript
            .translate(target_language)
            .map_err(|e| anyhow!("{e}"))?;

        // Translations are served from the source track's endpoint
        let player = InnerTubeClient::new(self.client.clone())
            .get_transcript_list(track.video_id.as_str())
            .await
            .map_err(|e| anyhow!("{e}"))?;
        let base_url = processor::caption_base_url(
            player,
            &track.info.language_code,
            track.info.is_generated,
        )?;
        let url = processor::translated_caption_url(&base_url, &translated.language_code);
        tracing::debug!(
            "Fetching {} transcript translated to {}",
            track.info.language_code,
            translated.language_code
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to request translated transcript")?;
        if !response.status().is_success() {
            bail!("YouTube returned status code {}", response.status());
        }
        let body = response
            .text()
            .await
            .context("Failed to read translated transcript")?;

        let snippets = TranscriptParser::new(false)
            .parse(&body)
            .context("Failed to parse translated transcript")?;
        let fetched = processor::translated_transcript(&translated, snippets);

        Ok(processor::convert_transcript(&track.video_id, fetched))
    }
}
