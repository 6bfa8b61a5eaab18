use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

/// Spinner shown on stderr while network calls run
///
/// Hidden when `quiet` is set; indicatif also stays silent when stderr is
/// not a terminal, so piped output is never polluted.
pub fn spinner(message: &str, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }

    let progress = ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr());
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        progress.set_style(style);
    }
    progress.set_message(message.to_string());
    progress.enable_steady_tick(Duration::from_millis(100));
    progress
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_spinner_is_hidden() {
        let progress = spinner("Fetching...", true);
        assert!(progress.is_hidden());
        progress.finish_and_clear();
    }
}
