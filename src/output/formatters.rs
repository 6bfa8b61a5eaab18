use std::fmt::Write;

use crate::transcribe::{FetchedTranscript, TranscriptSegment};
use crate::TranscriptResult;

/// Join segment text into a single line of prose
pub fn format_as_text(transcript: &FetchedTranscript) -> String {
    tracing::debug!(
        "Formatting {} transcript entries to text",
        transcript.segments.len()
    );

    let joined = transcript
        .segments
        .iter()
        .map(|segment| segment.text.trim())
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    // Collapse manual line breaks and repeated spaces
    let text = joined.split_whitespace().collect::<Vec<_>>().join(" ");

    tracing::info!("Formatted transcript: {} characters", text.chars().count());
    text
}

/// Serialize the transcript with its metadata as pretty-printed JSON
pub fn format_as_json(transcript: &FetchedTranscript) -> TranscriptResult<String> {
    Ok(serde_json::to_string_pretty(transcript)?)
}

/// Format as SubRip subtitles
pub fn format_as_srt(transcript: &FetchedTranscript) -> String {
    let mut srt = String::new();

    for (index, segment) in transcript.segments.iter().enumerate() {
        let (start, end) = cue_times(segment, ',');
        let _ = write!(srt, "{}\n{} --> {}\n{}\n\n", index + 1, start, end, cue_text(&segment.text));
    }

    srt
}

/// Format as WebVTT subtitles
pub fn format_as_vtt(transcript: &FetchedTranscript) -> String {
    let mut vtt = String::from("WEBVTT\n\n");

    for segment in &transcript.segments {
        let (start, end) = cue_times(segment, '.');
        let _ = write!(vtt, "{} --> {}\n{}\n\n", start, end, cue_text(&segment.text));
    }

    vtt
}

fn cue_times(segment: &TranscriptSegment, millis_separator: char) -> (String, String) {
    (
        format_timestamp(segment.start, millis_separator),
        format_timestamp(segment.start + segment.duration, millis_separator),
    )
}

/// Cue payload with blank lines removed, since a blank line ends a cue
fn cue_text(text: &str) -> String {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format seconds as `HH:MM:SS<sep>mmm`
fn format_timestamp(seconds: f64, millis_separator: char) -> String {
    let total_millis = (seconds.max(0.0) * 1000.0).round() as u64;
    let hours = total_millis / 3_600_000;
    let minutes = (total_millis % 3_600_000) / 60_000;
    let secs = (total_millis % 60_000) / 1_000;
    let millis = total_millis % 1_000;

    format!("{hours:02}:{minutes:02}:{secs:02}{millis_separator}{millis:03}")
}
