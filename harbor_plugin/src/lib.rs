//! Harbor Plugin Contract
//!
//! This crate defines the contract between the harbor package manager and
//! its reporter backends: the registration record a backend exposes, the
//! renderer and progress-bar traits a backend implements, and the host
//! context data those implementations consume.
//!
//! Backends are pure consumers of this crate. The host constructs a
//! [`HostContext`], hands out [`OutputSink`]s and opaque render contexts,
//! and drives whatever [`ProgressBar`] the selected renderer returns.

pub mod context;
pub mod error;
pub mod paths;
pub mod reporter;
pub mod sink;

// Re-export main types
pub use context::{HostContext, ROOT_ENV_NAME};
pub use error::{Error, Result};
pub use paths::paths_equal;
pub use reporter::{
    DetailValue, ProgressBar, RenderContext, ReporterBackend, ReporterRenderer, Spinner,
};
pub use sink::OutputSink;
