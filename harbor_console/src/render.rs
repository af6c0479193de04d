//! Console renderer implementing the harbor reporter contract
//!
//! Formats three kinds of host-supplied data: key/value detail views,
//! environment listings, and progress-bar requests. The first two return
//! strings synchronously; the third hands back a live progress bar the
//! host drives to completion.

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use colored::Colorize;
use dialoguer::Input;

use harbor_plugin::{
    DetailValue, Error, HostContext, OutputSink, ProgressBar, RenderContext, ReporterRenderer,
    Result, ROOT_ENV_NAME, Spinner, paths_equal,
};

use crate::progress::{IndicatifProgressBar, QuietProgressBar};
use crate::spinner::{IndicatifSpinner, QuietSpinner};
use crate::terminal;

/// Width reserved for environment names in the listing
const ENV_NAME_WIDTH: usize = 20;

/// Renderer for the indicatif reporter backend
#[derive(Debug, Default)]
pub struct ConsoleRenderer;

impl ConsoleRenderer {
    pub fn new() -> Self {
        Self
    }

    fn env_display_name(prefix: &Path, context: &HostContext) -> String {
        if context.is_root(prefix) {
            ROOT_ENV_NAME.to_string()
        } else if context.in_envs_dirs(prefix) {
            prefix
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default()
        } else {
            String::new()
        }
    }
}

impl ReporterRenderer for ConsoleRenderer {
    fn detail_view(&self, data: &[(String, DetailValue)]) -> String {
        let longest_header = data
            .iter()
            .map(|(header, _)| header.chars().count())
            .max()
            .unwrap_or(0);

        let mut table_parts = vec![String::new()];
        for (header, value) in data {
            table_parts.push(format!(" {header:>longest_header$} : {value}"));
        }
        table_parts.push("\n".to_string());

        table_parts.join("\n")
    }

    fn envs_list(&self, prefixes: &[PathBuf], context: &HostContext) -> String {
        let mut output = vec![
            String::new(),
            "# harbor environments:".to_string(),
            "#".to_string(),
        ];

        let width = ENV_NAME_WIDTH;
        for prefix in prefixes {
            let active = if paths_equal(prefix, &context.active_prefix) {
                '*'
            } else {
                ' '
            };
            let name = Self::env_display_name(prefix, context);
            output.push(format!("{name:<width$} {active} {}", prefix.display()));
        }

        output.push("\n".to_string());

        output.join("\n")
    }

    fn progress_bar(
        &self,
        description: &str,
        sink: OutputSink,
        context: &HostContext,
        render_contexts: &[RenderContext],
    ) -> Result<Box<dyn ProgressBar>> {
        if context.quiet {
            log::debug!("quiet mode set, using placeholder progress bar");
            Ok(Box::new(QuietProgressBar::new(description, &sink)?))
        } else {
            Ok(Box::new(IndicatifProgressBar::new(description, render_contexts)?))
        }
    }

    fn spinner(
        &self,
        message: &str,
        fail_message: &str,
        sink: OutputSink,
        context: &HostContext,
    ) -> Result<Box<dyn Spinner>> {
        if context.quiet {
            Ok(Box::new(QuietSpinner::start(message, fail_message, sink)?))
        } else {
            Ok(Box::new(IndicatifSpinner::start(message, fail_message, sink)?))
        }
    }

    fn prompt(&self, message: &str, choices: &[&str], default: &str) -> Result<String> {
        if terminal::is_interactive() {
            Input::<String>::new()
                .with_prompt(format!("{} ({})", message.bold(), choices.join("/")))
                .default(default.to_string())
                .interact_text()
                .map_err(|err| Error::Prompt(err.to_string()))
        } else {
            let mut stdin = io::stdin().lock();
            read_answer(&mut stdin, default)
        }
    }
}

/// Read one answer line, substituting the default for an empty response
fn read_answer<R: BufRead>(reader: &mut R, default: &str) -> Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line)?;

    let answer = line.trim();
    if answer.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(answer.to_string())
    }
}
