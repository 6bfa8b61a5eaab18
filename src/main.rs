use anyhow::Result;
use clap::Parser;
use console::style;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use youtube_transcript_tool::cli::{Cli, Commands};
use youtube_transcript_tool::output::OutputFormat;
use youtube_transcript_tool::transcribe::{TranscriptService, YoutubeClient};
use youtube_transcript_tool::utils;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::info!("Failed with: {:#}", err);
            eprintln!("{} {}", style("Error:").red().bold().for_stderr(), err);
            ExitCode::FAILURE
        }
    }
}

/// Initialize tracing, `RUST_LOG` takes precedence over `-v`
fn init_tracing(verbose: u8) {
    let directive = match verbose {
        0 => "youtube_transcript_tool=warn",
        1 => "youtube_transcript_tool=info",
        2 => "youtube_transcript_tool=debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| directive.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("Running with verbose level: {}", verbose);
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Download {
            url,
            format,
            language,
        } => {
            let service = TranscriptService::new(YoutubeClient::new()?);

            tracing::info!("youtube-transcript-tool started");
            let progress = utils::spinner("Fetching transcript...", cli.quiet);
            let result = service
                .download_from_url(&url, language.as_deref(), &format)
                .await;
            progress.finish_and_clear();

            println!("{}", result?);
            tracing::info!("youtube-transcript-tool completed");
        }
        Commands::List { url } => {
            let service = TranscriptService::new(YoutubeClient::new()?);

            let progress = utils::spinner("Listing transcripts...", cli.quiet);
            let result = service.list_from_url(&url).await;
            progress.finish_and_clear();
            let variants = result?;

            if variants.is_empty() {
                println!("No transcripts found for this video");
                return Ok(());
            }

            println!("Found {} transcript(s):\n", variants.len());
            for (index, variant) in variants.iter().enumerate() {
                let kind = if variant.is_generated {
                    "Auto-generated"
                } else {
                    "Manual"
                };
                let translatable = if variant.is_translatable { "Yes" } else { "No" };

                println!(
                    "{}. {} ({})",
                    index + 1,
                    variant.language,
                    variant.language_code
                );
                println!("   Type: {}", kind);
                println!("   Translatable: {}", translatable);
                println!();
            }
            tracing::info!("List completed");
        }
        Commands::Translate {
            url,
            target_language,
            format,
        } => {
            let service = TranscriptService::new(YoutubeClient::new()?);

            let progress = utils::spinner("Translating transcript...", cli.quiet);
            let result = service
                .translate_from_url(&url, &target_language, &format)
                .await;
            progress.finish_and_clear();

            println!("{}", result?);
            tracing::info!("Translation completed");
        }
        Commands::Formats => {
            println!("Supported output formats:\n");
            for format in OutputFormat::ALL {
                println!("  {:<10} - {}", format.as_str(), format.description());
            }
            println!("\nUsage: youtube-transcript-tool download <URL> --format <FORMAT>");
        }
    }

    Ok(())
}
