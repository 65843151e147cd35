//! Configuration loader for the paradox tool.
//!
//! `defaults/paradox.default.toml` is embedded into the binary so that docs and
//! runtime behavior stay in sync. Callers layer user files and single key overrides on top
//! of those defaults via [`Loader`] before deserializing into [`ParadoxConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

use crate::paradox::formats::{FormatOptions, OutputFormat};

const DEFAULT_TOML: &str = include_str!("../../defaults/paradox.default.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct ParadoxConfig {
    pub render: RenderConfig,
    pub inspect: InspectConfig,
    pub timing: TimingConfig,
}

/// Canonical output layout.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub indent: String,
}

/// Defaults of `paradox inspect`.
#[derive(Debug, Clone, Deserialize)]
pub struct InspectConfig {
    pub format: OutputFormat,
    pub label_width: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TimingConfig {
    pub iterations: u32,
}

impl ParadoxConfig {
    /// Formatter settings derived from the `render` and `inspect` groups.
    pub fn format_options(&self) -> FormatOptions {
        FormatOptions {
            indent: self.render.indent.clone(),
            label_width: self.inspect.label_width,
        }
    }
}

/// Builds a [ParadoxConfig] from the embedded defaults plus any number of layers.
///
/// Later layers win: files in the order given, then overrides.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Loader holding only `defaults/paradox.default.toml`.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Adds a TOML file that must exist.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Adds a TOML file that is skipped when absent, e.g. a per-user config.
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Sets one dotted key such as `inspect.format`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<ParadoxConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

pub fn load_defaults() -> Result<ParadoxConfig, ConfigError> {
    Loader::new().build()
}
