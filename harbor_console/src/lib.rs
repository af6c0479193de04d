//! Indicatif reporter backend for harbor
//!
//! This crate implements the [`harbor_plugin`] reporter contract on top of
//! the `indicatif` terminal-rendering crate. All the heavy lifting (bar
//! drawing, redraw throttling, terminal control) happens inside
//! `indicatif`; this crate only adapts the host's data to it.
//!
//! The backend registers itself under the name `"indicatif"` via
//! [`hooks::reporter_backends`].

pub mod hooks;
pub mod progress;
pub mod render;
pub mod spinner;
pub mod terminal;

// Re-export main types
pub use hooks::{BACKEND_NAME, reporter_backends};
pub use progress::{IndicatifProgressBar, ProgressContext, QuietProgressBar, progress_context};
pub use render::ConsoleRenderer;
pub use spinner::{IndicatifSpinner, QuietSpinner};
