//! Progress bar adapters
//!
//! Two interchangeable implementations of the host's progress-bar
//! contract: [`QuietProgressBar`] writes a single placeholder line and
//! otherwise stays silent, while [`IndicatifProgressBar`] drives a task on
//! an `indicatif` multi-bar owned by a [`ProgressContext`].

use indicatif::{MultiProgress, ProgressDrawTarget, ProgressStyle};

use harbor_plugin::{Error, OutputSink, ProgressBar, RenderContext, Result};

use crate::hooks::BACKEND_NAME;
use crate::terminal;

/// Bar positions are tracked in permille so fractional updates keep some
/// resolution on wide terminals.
const TASK_TOTAL: u64 = 1000;

const BAR_TEMPLATE: &str = "{msg:<24} {bar:40.cyan/blue} {percent:>3}% {elapsed}";

/// Rendering context for the indicatif backend.
///
/// The host constructs one of these per progress phase (boxed as an opaque
/// [`RenderContext`]) and hands it to every bar request in that phase, so
/// concurrent downloads share one [`MultiProgress`] and do not fight over
/// the terminal.
pub struct ProgressContext {
    multi: MultiProgress,
    style: ProgressStyle,
}

impl ProgressContext {
    /// Create a context drawing to stderr, or nowhere when stderr is not
    /// an interactive terminal.
    pub fn new() -> Self {
        let draw_target = if terminal::is_interactive() {
            ProgressDrawTarget::stderr()
        } else {
            ProgressDrawTarget::hidden()
        };

        Self::with_draw_target(draw_target)
    }

    /// Create a context with an explicit draw target
    pub fn with_draw_target(draw_target: ProgressDrawTarget) -> Self {
        let style = ProgressStyle::with_template(BAR_TEMPLATE)
            .unwrap()
            .progress_chars("━╸ ");

        Self {
            multi: MultiProgress::with_draw_target(draw_target),
            style,
        }
    }

    fn add_task(&self, description: &str) -> indicatif::ProgressBar {
        let bar = self.multi.add(indicatif::ProgressBar::new(TASK_TOTAL));
        bar.set_style(self.style.clone());
        bar.set_message(description.to_string());
        bar
    }
}

impl Default for ProgressContext {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ProgressContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressContext").finish_non_exhaustive()
    }
}

/// Build the render context the host passes back into
/// [`crate::ConsoleRenderer::progress_bar`] requests.
pub fn progress_context() -> RenderContext {
    Box::new(ProgressContext::new())
}

/// Progress bar used when no output should be printed.
///
/// Emits exactly one placeholder line on construction and ignores every
/// update afterwards.
#[derive(Debug)]
pub struct QuietProgressBar;

impl QuietProgressBar {
    pub fn new(description: &str, sink: &OutputSink) -> Result<Self> {
        sink.line(&format!("...downloading {description}..."))?;
        Ok(Self)
    }
}

impl ProgressBar for QuietProgressBar {
    fn update_to(&mut self, _fraction: f64) {}

    fn refresh(&mut self) {}

    fn close(&mut self) {}

    fn is_visible(&self) -> bool {
        false
    }
}

/// Progress bar driving an `indicatif` task
#[derive(Debug)]
pub struct IndicatifProgressBar {
    bar: indicatif::ProgressBar,
    visible: bool,
}

impl IndicatifProgressBar {
    /// Select the [`ProgressContext`] out of the host-supplied render
    /// contexts and add a task to it. Only one of the supplied contexts
    /// can be ours; the rest belong to other configured backends.
    pub fn new(description: &str, render_contexts: &[RenderContext]) -> Result<Self> {
        let context = render_contexts
            .iter()
            .find_map(|context| context.downcast_ref::<ProgressContext>())
            .ok_or(Error::MissingProgressContext {
                backend: BACKEND_NAME,
            })?;

        Ok(Self {
            bar: context.add_task(description),
            visible: true,
        })
    }
}

impl ProgressBar for IndicatifProgressBar {
    fn update_to(&mut self, fraction: f64) {
        let fraction = fraction.clamp(0.0, 1.0);
        self.bar.set_position((fraction * TASK_TOTAL as f64).round() as u64);

        if fraction >= 1.0 && self.visible {
            self.bar.finish_and_clear();
            self.visible = false;
        }
    }

    fn refresh(&mut self) {
        self.bar.tick();
    }

    fn close(&mut self) {
        if self.visible {
            self.bar.finish_and_clear();
            self.visible = false;
        }
    }

    fn is_visible(&self) -> bool {
        self.visible
    }
}
