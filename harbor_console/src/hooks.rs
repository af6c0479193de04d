//! Backend registration for harbor's plugin discovery

use harbor_plugin::ReporterBackend;

use crate::render::ConsoleRenderer;

/// Name the backend is selected by in host configuration
pub const BACKEND_NAME: &str = "indicatif";

/// Description shown in the host's plugin listing
pub const BACKEND_DESCRIPTION: &str = "Indicatif implementation for console reporting in harbor";

/// Reporter backends provided by this crate.
///
/// The host collects these records from every installed plugin and picks
/// the renderer whose name matches its configuration.
pub fn reporter_backends() -> impl Iterator<Item = ReporterBackend> {
    log::trace!("registering reporter backend {BACKEND_NAME:?}");

    std::iter::once(ReporterBackend {
        name: BACKEND_NAME,
        description: BACKEND_DESCRIPTION,
        renderer: || Box::new(ConsoleRenderer::new()),
    })
}
