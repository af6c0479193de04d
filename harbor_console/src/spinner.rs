//! Spinner adapters for operations without a known length

use std::time::Duration;

use indicatif::ProgressStyle;

use harbor_plugin::{OutputSink, Result, Spinner};

const TICK_CHARS: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏";
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Spinner used when no animated output should be printed.
///
/// Writes `{message}: ...working... ` on construction and completes the
/// line with `done` or the fail message when the operation ends.
#[derive(Debug)]
pub struct QuietSpinner {
    sink: OutputSink,
    fail_message: String,
    stopped: bool,
}

impl QuietSpinner {
    pub fn start(message: &str, fail_message: &str, sink: OutputSink) -> Result<Self> {
        sink.write_str(&format!("{message}: ...working... "))?;
        Ok(Self {
            sink,
            fail_message: fail_message.to_string(),
            stopped: false,
        })
    }
}

impl Spinner for QuietSpinner {
    fn finish(&mut self) {
        if !self.stopped {
            let _ = self.sink.line("done");
            self.stopped = true;
        }
    }

    fn fail(&mut self) {
        if !self.stopped {
            let _ = self.sink.line(&self.fail_message);
            self.stopped = true;
        }
    }
}

/// Animated spinner driving an `indicatif` steady tick.
///
/// The animation is cleared when the operation ends and a plain summary
/// line goes to the sink instead, so captured output stays stable.
#[derive(Debug)]
pub struct IndicatifSpinner {
    spinner: indicatif::ProgressBar,
    sink: OutputSink,
    message: String,
    fail_message: String,
    stopped: bool,
}

impl IndicatifSpinner {
    pub fn start(message: &str, fail_message: &str, sink: OutputSink) -> Result<Self> {
        let spinner = indicatif::ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .tick_chars(TICK_CHARS)
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(TICK_INTERVAL);

        Ok(Self {
            spinner,
            sink,
            message: message.to_string(),
            fail_message: fail_message.to_string(),
            stopped: false,
        })
    }

    fn stop(&mut self, line: String) {
        if !self.stopped {
            self.spinner.finish_and_clear();
            let _ = self.sink.line(&line);
            self.stopped = true;
        }
    }
}

impl Spinner for IndicatifSpinner {
    fn finish(&mut self) {
        let line = format!("{} (done)", self.message);
        self.stop(line);
    }

    fn fail(&mut self) {
        let line = self.fail_message.clone();
        self.stop(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_spinner_completes_the_line_once() {
        let sink = OutputSink::memory();
        let mut spinner = QuietSpinner::start("linking", "failed", sink.clone()).unwrap();
        spinner.finish();
        spinner.finish();

        assert_eq!(sink.contents().unwrap(), "linking: ...working... done\n");
    }

    #[test]
    fn quiet_spinner_reports_the_fail_message() {
        let sink = OutputSink::memory();
        let mut spinner =
            QuietSpinner::start("linking", "could not link packages", sink.clone()).unwrap();
        spinner.fail();

        assert_eq!(
            sink.contents().unwrap(),
            "linking: ...working... could not link packages\n"
        );
    }

    #[test]
    fn indicatif_spinner_writes_a_summary_line() {
        let sink = OutputSink::memory();
        let mut spinner = IndicatifSpinner::start("solving", "solve failed", sink.clone()).unwrap();
        spinner.finish();

        assert_eq!(sink.contents().unwrap(), "solving (done)\n");
    }

    #[test]
    fn indicatif_spinner_failure_replaces_the_summary() {
        let sink = OutputSink::memory();
        let mut spinner = IndicatifSpinner::start("solving", "solve failed", sink.clone()).unwrap();
        spinner.fail();
        spinner.finish();

        assert_eq!(sink.contents().unwrap(), "solve failed\n");
    }
}
