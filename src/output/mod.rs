use std::fmt;
use std::str::FromStr;

use crate::transcribe::FetchedTranscript;
use crate::{TranscriptError, TranscriptResult};

pub mod formatters;

pub use formatters::*;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain text
    Text,
    /// JSON with timestamps
    Json,
    /// SRT subtitle format
    Srt,
    /// WebVTT format
    WebVtt,
}

impl OutputFormat {
    /// Every format, in the order they are presented to users
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Text,
        OutputFormat::Json,
        OutputFormat::Srt,
        OutputFormat::WebVtt,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Srt => "srt",
            OutputFormat::WebVtt => "webvtt",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "Plain text (default, markdown-style)",
            OutputFormat::Json => "JSON format with timestamps",
            OutputFormat::Srt => "SubRip subtitle format (.srt)",
            OutputFormat::WebVtt => "WebVTT subtitle format (.vtt)",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = TranscriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputFormat::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| TranscriptError::UnsupportedFormat(s.to_string()))
    }
}

/// Render a transcript in the requested format
pub fn format_transcript(
    transcript: &FetchedTranscript,
    format: OutputFormat,
) -> TranscriptResult<String> {
    tracing::debug!("Formatting transcript as {}", format);

    let content = match format {
        OutputFormat::Text => format_as_text(transcript),
        OutputFormat::Json => format_as_json(transcript)?,
        OutputFormat::Srt => format_as_srt(transcript),
        OutputFormat::WebVtt => format_as_vtt(transcript),
    };

    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format_names() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("Srt".parse::<OutputFormat>().unwrap(), OutputFormat::Srt);
        assert_eq!("webvtt".parse::<OutputFormat>().unwrap(), OutputFormat::WebVtt);
    }

    #[test]
    fn test_unknown_format_is_unsupported() {
        for name in ["xml", "vtt", "", "text "] {
            match name.parse::<OutputFormat>() {
                Err(TranscriptError::UnsupportedFormat(reported)) => assert_eq!(reported, name),
                other => panic!("expected UnsupportedFormat for {name:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_display_round_trips_names() {
        for format in OutputFormat::ALL {
            assert_eq!(format.to_string().parse::<OutputFormat>().unwrap(), format);
        }
    }
}
