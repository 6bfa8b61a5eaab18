use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;
use yt_transcript_rs::{FetchedTranscriptSnippet, Transcript};

use super::{FetchedTranscript, TranscriptSegment, TranscriptTrack, TranscriptVariantInfo};
use crate::extractors::VideoId;

/// Player response, reduced to the caption tracklist
#[derive(Debug, Deserialize)]
struct PlayerResponse {
    captions: Option<Captions>,
}

#[derive(Debug, Deserialize)]
struct Captions {
    #[serde(rename = "playerCaptionsTracklistRenderer")]
    tracklist: Option<CaptionTracklist>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CaptionTracklist {
    #[serde(default)]
    caption_tracks: Vec<CaptionTrack>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CaptionTrack {
    base_url: String,
    language_code: String,
    kind: Option<String>,
}

impl CaptionTrack {
    fn is_generated(&self) -> bool {
        self.kind.as_deref() == Some("asr")
    }
}

/// Describe a listed transcript as a track of `video_id`
pub fn track_from_transcript(video_id: &VideoId, transcript: &Transcript) -> TranscriptTrack {
    TranscriptTrack {
        video_id: video_id.clone(),
        info: TranscriptVariantInfo {
            language: transcript.language().to_string(),
            language_code: transcript.language_code.clone(),
            is_generated: transcript.is_generated(),
            is_translatable: transcript.is_translatable(),
        },
    }
}

/// Convert a fetched transcript into the tool's own representation
pub fn convert_transcript(
    video_id: &VideoId,
    fetched: yt_transcript_rs::FetchedTranscript,
) -> FetchedTranscript {
    FetchedTranscript {
        video_id: video_id.clone(),
        language: fetched.language,
        language_code: fetched.language_code,
        is_generated: fetched.is_generated,
        segments: fetched
            .snippets
            .into_iter()
            .map(|snippet| TranscriptSegment {
                text: snippet.text,
                start: snippet.start,
                duration: snippet.duration,
            })
            .collect(),
    }
}

/// Find the caption endpoint of a source track in a player response
pub fn caption_base_url(player: Value, language_code: &str, is_generated: bool) -> Result<String> {
    let player: PlayerResponse =
        serde_json::from_value(player).context("Failed to parse player response")?;

    let tracks = player
        .captions
        .and_then(|captions| captions.tracklist)
        .map(|tracklist| tracklist.caption_tracks)
        .unwrap_or_default();

    tracks
        .into_iter()
        .find(|track| track.language_code == language_code && track.is_generated() == is_generated)
        .map(|track| track.base_url)
        .with_context(|| format!("No caption track found for language code {language_code}"))
}

/// Caption endpoint that serves `base_url` machine translated into `target_language`
pub fn translated_caption_url(base_url: &str, target_language: &str) -> String {
    format!("{base_url}&tlang={target_language}")
}

/// Label translated snippets with the language of the translated track
pub fn translated_transcript(
    translated: &Transcript,
    snippets: Vec<FetchedTranscriptSnippet>,
) -> yt_transcript_rs::FetchedTranscript {
    yt_transcript_rs::FetchedTranscript {
        snippets,
        video_id: translated.video_id.clone(),
        language: translated.language().to_string(),
        language_code: translated.language_code.clone(),
        is_generated: translated.is_generated(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use yt_transcript_rs::models::TranslationLanguage;

    fn video() -> VideoId {
        crate::extractors::extract_video_id("https://youtu.be/abc123").unwrap()
    }

    fn english(is_generated: bool, translatable: bool) -> Transcript {
        let translation_languages = if translatable {
            vec![
                TranslationLanguage {
                    language: "Spanish".to_string(),
                    language_code: "es".to_string(),
                },
                TranslationLanguage {
                    language: "German".to_string(),
                    language_code: "de".to_string(),
                },
            ]
        } else {
            Vec::new()
        };

        Transcript::new(
            "abc123".to_string(),
            "https://www.youtube.com/api/timedtext?v=abc123&lang=en".to_string(),
            "English (auto-generated)".to_string(),
            "en".to_string(),
            is_generated,
            translation_languages,
        )
    }

    fn snippet(text: &str, start: f64, duration: f64) -> FetchedTranscriptSnippet {
        FetchedTranscriptSnippet {
            text: text.to_string(),
            start,
            duration,
        }
    }

    #[test]
    fn test_track_from_transcript() {
        let track = track_from_transcript(&video(), &english(true, true));
        assert_eq!(track.video_id, video());
        assert_eq!(
            track.info,
            TranscriptVariantInfo {
                language: "English (auto-generated)".to_string(),
                language_code: "en".to_string(),
                is_generated: true,
                is_translatable: true,
            }
        );

        let track = track_from_transcript(&video(), &english(false, false));
        assert!(!track.info.is_generated);
        assert!(!track.info.is_translatable);
    }

    #[test]
    fn test_convert_transcript_keeps_segments_in_order() {
        let fetched = yt_transcript_rs::FetchedTranscript {
            snippets: vec![snippet("Hello", 0.0, 1.5), snippet("world", 1.5, 2.25)],
            video_id: "abc123".to_string(),
            language: "English".to_string(),
            language_code: "en".to_string(),
            is_generated: false,
        };

        let transcript = convert_transcript(&video(), fetched);
        assert_eq!(transcript.video_id, video());
        assert_eq!(transcript.language, "English");
        assert_eq!(transcript.language_code, "en");
        assert!(!transcript.is_generated);
        assert_eq!(
            transcript.segments,
            vec![
                TranscriptSegment {
                    text: "Hello".to_string(),
                    start: 0.0,
                    duration: 1.5,
                },
                TranscriptSegment {
                    text: "world".to_string(),
                    start: 1.5,
                    duration: 2.25,
                },
            ]
        );
    }

    #[test]
    fn test_caption_base_url_matches_language_and_kind() {
        let player = json!({
            "captions": {
                "playerCaptionsTracklistRenderer": {
                    "captionTracks": [
                        {"baseUrl": "https://example.com/en-asr", "languageCode": "en", "kind": "asr"},
                        {"baseUrl": "https://example.com/en", "languageCode": "en"},
                        {"baseUrl": "https://example.com/de", "languageCode": "de"}
                    ]
                }
            }
        });

        assert_eq!(
            caption_base_url(player.clone(), "en", false).unwrap(),
            "https://example.com/en"
        );
        assert_eq!(
            caption_base_url(player.clone(), "en", true).unwrap(),
            "https://example.com/en-asr"
        );

        let err = caption_base_url(player, "ja", false).unwrap_err();
        assert!(err.to_string().contains("ja"), "{err}");
    }

    #[test]
    fn test_caption_base_url_without_captions() {
        assert!(caption_base_url(json!({"playabilityStatus": {"status": "OK"}}), "en", false).is_err());
    }

    #[test]
    fn test_translated_caption_url_adds_target_language() {
        assert_eq!(
            translated_caption_url("https://www.youtube.com/api/timedtext?v=abc123&lang=en", "es"),
            "https://www.youtube.com/api/timedtext?v=abc123&lang=en&tlang=es"
        );
    }

    #[test]
    fn test_translated_transcript_carries_target_labels() {
        let translated = english(true, true).translate("es").unwrap();
        let fetched = translated_transcript(&translated, vec![snippet("Hola", 0.5, 1.0)]);

        let transcript = convert_transcript(&video(), fetched);
        assert_eq!(transcript.language, "Spanish");
        assert_eq!(transcript.language_code, "es");
        assert!(transcript.is_generated);
        assert_eq!(transcript.segments.len(), 1);
        assert_eq!(transcript.segments[0].text, "Hola");
        assert_eq!(transcript.segments[0].start, 0.5);
    }

    #[test]
    fn test_translation_to_unoffered_language_is_rejected() {
        assert!(english(false, true).translate("ko").is_err());
        assert!(english(false, false).translate("es").is_err());
    }
}
