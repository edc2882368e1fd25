//! CLI execution context.

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use storefront_sdk::{Storefront, StorefrontConfig};
use tracing::debug;

use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// Effective configuration.
    pub config: StorefrontConfig,
    /// File the configuration came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from the config file and environment.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let explicit = config_path.map(|path| cwd.join(path));
        let (config, config_path) = StorefrontConfig::resolve(explicit.as_deref(), &cwd)
            .context("Failed to load configuration")?;

        match &config_path {
            Some(path) => debug!(path = %path.display(), "loaded config"),
            None => debug!("no config file found, using defaults"),
        }

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Build the API client stack.
    pub fn storefront(&self) -> Result<Storefront> {
        Storefront::new(self.config.clone()).context("Failed to create API client")
    }
}
