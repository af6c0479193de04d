//! Host context shared with reporter backends
//!
//! The host owns all domain data; backends only read it. The context
//! carries the quiet flag that selects between interactive and quiet
//! output plus the prefix information needed to label environment
//! listings.

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::paths::paths_equal;

/// Reserved display name for the root environment prefix
pub const ROOT_ENV_NAME: &str = "base";

/// Snapshot of host state relevant to console reporting
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HostContext {
    /// Suppress interactive output (progress bars, spinners)
    #[serde(default)]
    pub quiet: bool,

    /// Prefix of the currently activated environment
    #[serde(default)]
    pub active_prefix: PathBuf,

    /// Prefix of the root environment
    #[serde(default)]
    pub root_prefix: PathBuf,

    /// Directories that hold named environments
    #[serde(default)]
    pub envs_dirs: Vec<PathBuf>,
}

impl HostContext {
    /// Load the context from the layered configuration sources: defaults,
    /// then the context file, then `HARBOR_`-prefixed environment variables.
    pub fn load() -> Result<Self> {
        let context: Self = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(Self::config_path()))
            .merge(Env::prefixed("HARBOR_"))
            .extract()?;

        log::debug!(
            "loaded host context (quiet={}, {} envs dirs)",
            context.quiet,
            context.envs_dirs.len()
        );

        Ok(context)
    }

    /// Default location of the context file
    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("harbor")
            .join("context.toml")
    }

    /// Check whether `prefix` is the currently activated environment
    pub fn is_active(&self, prefix: &Path) -> bool {
        paths_equal(prefix, &self.active_prefix)
    }

    /// Check whether `prefix` is the root environment
    pub fn is_root(&self, prefix: &Path) -> bool {
        paths_equal(prefix, &self.root_prefix)
    }

    /// Check whether `prefix` lives directly under a configured envs dir
    pub fn in_envs_dirs(&self, prefix: &Path) -> bool {
        prefix
            .parent()
            .is_some_and(|parent| self.envs_dirs.iter().any(|dir| paths_equal(dir, parent)))
    }
}
