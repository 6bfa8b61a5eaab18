use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "youtube-transcript-tool",
    about = "YouTube transcript downloader with multiple output formats",
    version,
    long_about = "Download, list, and translate YouTube video transcripts in various formats including plain text, JSON, SRT, and WebVTT."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Download a video transcript with optional format and language
    Download {
        /// YouTube video URL
        #[arg(value_name = "URL")]
        url: String,

        /// Output format: text, json, srt or webvtt
        #[arg(short, long, value_name = "FORMAT", default_value = "text")]
        format: String,

        /// Preferred language code (e.g., en, de, es)
        #[arg(short, long, value_name = "LANG")]
        language: Option<String>,
    },

    /// List all available transcripts (languages and types) for a video
    List {
        /// YouTube video URL
        #[arg(value_name = "URL")]
        url: String,
    },

    /// Translate a video transcript using YouTube's translation
    Translate {
        /// YouTube video URL
        #[arg(value_name = "URL")]
        url: String,

        /// Target language code (e.g., en, de, es)
        #[arg(long = "to", value_name = "LANG")]
        target_language: String,

        /// Output format: text, json, srt or webvtt
        #[arg(short, long, value_name = "FORMAT", default_value = "text")]
        format: String,
    },

    /// List all supported output formats with descriptions
    Formats,
}
