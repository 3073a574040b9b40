//! Shared configuration loader for the coursemark toolchain.
//!
//! `defaults/coursemark.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top of those
//! defaults via [`Loader`] before deserializing into [`CoursemarkConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use coursemark::formats::html::{HtmlOptions, HtmlTheme};
use coursemark::TocOptions;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/coursemark.default.toml");

/// Top-level configuration consumed by coursemark applications.
#[derive(Debug, Clone, Deserialize)]
pub struct CoursemarkConfig {
    pub convert: ConvertConfig,
}

/// Format-specific conversion knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub html: HtmlConfig,
    pub toc: TocConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HtmlConfig {
    pub standalone: bool,
    pub toc: bool,
    pub theme: String,
    #[serde(default)]
    pub custom_css: Option<String>,
}

/// Mirrors the knobs exposed by the table of contents renderer.
#[derive(Debug, Clone, Deserialize)]
pub struct TocConfig {
    pub title: String,
    pub indent_px: u32,
}

impl From<&TocConfig> for TocOptions {
    fn from(config: &TocConfig) -> Self {
        TocOptions {
            title: config.title.clone(),
            indent_px: config.indent_px,
        }
    }
}

impl CoursemarkConfig {
    /// HTML options described by this configuration.
    ///
    /// `custom_css` is a path; reading it is left to the caller so that a missing file
    /// surfaces where the path was given.
    pub fn html_options(&self) -> HtmlOptions {
        HtmlOptions {
            standalone: self.convert.html.standalone,
            toc: self.convert.html.toc,
            theme: HtmlTheme::from_name(&self.convert.html.theme),
            custom_css: None,
            toc_options: TocOptions::from(&self.convert.toc),
        }
    }
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
    pub fn build(self) -> Result<CoursemarkConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<CoursemarkConfig, ConfigError> {
    Loader::new().build()
}
