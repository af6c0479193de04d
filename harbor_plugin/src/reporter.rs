//! Reporter backend contract
//!
//! These traits decouple the host's command logic from any particular
//! rendering library. A backend registers itself through a
//! [`ReporterBackend`] record; the host then drives the renderer it
//! exposes, either collecting formatted strings or stepping a returned
//! progress bar to completion.

use std::any::Any;
use std::fmt;
use std::path::PathBuf;

use crate::context::HostContext;
use crate::error::Result;
use crate::sink::OutputSink;

/// Opaque rendering context supplied by the host.
///
/// The host builds one context per configured backend and passes the whole
/// set along with every progress-bar request. A backend selects the one
/// matching its own progress type by downcasting each entry in turn.
pub type RenderContext = Box<dyn Any + Send>;

/// Scalar value in a detail view, owned by the host
#[derive(Debug, Clone, PartialEq)]
pub enum DetailValue {
    Text(String),
    Int(i64),
    Flag(bool),
}

impl fmt::Display for DetailValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Int(value) => write!(f, "{value}"),
            Self::Flag(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for DetailValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<i64> for DetailValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<bool> for DetailValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

/// Fractional progress tracking for a long-running host operation.
///
/// The host constructs one bar per operation through
/// [`ReporterRenderer::progress_bar`] and then drives it with fractions in
/// `0.0..=1.0`.
pub trait ProgressBar: Send + fmt::Debug {
    /// Move the bar to `fraction` complete
    fn update_to(&mut self, fraction: f64);

    /// Redraw the bar without changing its position
    fn refresh(&mut self);

    /// Stop tracking the operation
    fn close(&mut self);

    /// Whether the bar still occupies a line of output
    fn is_visible(&self) -> bool;
}

/// Indeterminate activity indicator for operations without a known length
pub trait Spinner: Send {
    /// Mark the operation as completed successfully
    fn finish(&mut self);

    /// Mark the operation as failed
    fn fail(&mut self);
}

/// Console output formatting supplied by a reporter backend
pub trait ReporterRenderer: Send + Sync {
    /// Render a key/value mapping as an aligned detail view
    fn detail_view(&self, data: &[(String, DetailValue)]) -> String;

    /// Render the environment listing, marking the active prefix
    fn envs_list(&self, prefixes: &[PathBuf], context: &HostContext) -> String;

    /// Construct a progress bar for a long-running operation
    fn progress_bar(
        &self,
        description: &str,
        sink: OutputSink,
        context: &HostContext,
        render_contexts: &[RenderContext],
    ) -> Result<Box<dyn ProgressBar>>;

    /// Construct a spinner for an operation without a known length
    fn spinner(
        &self,
        message: &str,
        fail_message: &str,
        sink: OutputSink,
        context: &HostContext,
    ) -> Result<Box<dyn Spinner>>;

    /// Ask the user a question and return their answer
    fn prompt(&self, message: &str, choices: &[&str], default: &str) -> Result<String>;
}

/// Registration record exposing a backend to the host's plugin discovery
pub struct ReporterBackend {
    /// Name the backend is selected by in configuration
    pub name: &'static str,

    /// Human-readable description shown in plugin listings
    pub description: &'static str,

    /// Factory producing the backend's renderer
    pub renderer: fn() -> Box<dyn ReporterRenderer>,
}

impl fmt::Debug for ReporterBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReporterBackend")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}
