//! Shared configuration loader for the nbgist toolchain.
//!
//! `defaults/nbgist.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files
//! on top of those defaults via [`Loader`] before deserializing into
//! [`NbgistConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use nbgist_render::BinderOptions;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/nbgist.default.toml");

/// Top-level configuration consumed by nbgist applications.
#[derive(Debug, Clone, Deserialize)]
pub struct NbgistConfig {
    pub gist: GistConfig,
    pub service: ServiceConfig,
    pub render: RenderConfig,
}

/// Gist source settings.
#[derive(Debug, Clone, Deserialize)]
pub struct GistConfig {
    /// Identifier rendered when no target is supplied.
    pub default_id: String,
}

/// External collaborator endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    pub api_url: String,
    pub execution_url: String,
    pub widget_url: String,
    pub default_kernel: String,
}

impl ServiceConfig {
    /// Binder options for one page render targeting the given kernel.
    pub fn binder_options(&self, kernel_name: String) -> BinderOptions {
        BinderOptions {
            service_url: self.execution_url.clone(),
            widget_url: self.widget_url.clone(),
            kernel_name,
        }
    }
}

/// Page rendering knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub math: bool,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<NbgistConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<NbgistConfig, ConfigError> {
    Loader::new().build()
}
