//! Terminal detection and capability utilities

use std::env;
use std::io::stderr;

use is_terminal::IsTerminal;

/// Check if stderr is connected to an interactive terminal.
///
/// Progress bars draw on stderr so that formatted output on stdout stays
/// machine-readable.
pub fn is_interactive() -> bool {
    if !stderr().is_terminal() {
        return false;
    }

    // CI environments may have a TTY attached but should never be treated
    // as interactive
    if is_ci_environment() {
        return false;
    }

    true
}

/// Check if the terminal supports ANSI escape codes for colors and bars
pub fn supports_ansi() -> bool {
    if !is_interactive() {
        return false;
    }

    let term = env::var("TERM").unwrap_or_default();
    !(term.is_empty() || term == "dumb")
}

fn is_ci_environment() -> bool {
    const CI_VARS: &[&str] = &["CI", "CONTINUOUS_INTEGRATION", "GITHUB_ACTIONS", "JENKINS_URL"];
    CI_VARS.iter().any(|var| env::var(var).is_ok())
}
