//! Configuration loader for bible-text consumers.
//!
//! `defaults/bible-text.default.toml` is embedded so that documented defaults and runtime
//! behavior stay in sync. Converters layer config files, `BIBLE_TEXT__*` environment
//! variables and explicit overrides on top via [`Loader`], then hand the relevant parts to
//! the core, for example [`BibleTextConfig::normalize_options`].

use bible_text::formatted::NormalizeOptions;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat, Map, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/bible-text.default.toml");

/// Prefix of environment variables read by [`Loader::with_environment`].
pub const ENV_PREFIX: &str = "BIBLE_TEXT";

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BibleTextConfig {
    pub normalization: NormalizationConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NormalizationConfig {
    pub keep_whitespace: bool,
}

impl BibleTextConfig {
    pub fn normalize_options(&self) -> NormalizeOptions {
        NormalizeOptions {
            keep_whitespace: self.normalization.keep_whitespace,
        }
    }
}

/// Stacks configuration sources on top of `bible-text.default.toml`; a key set by a later
/// layer replaces the same key from earlier ones.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        Self {
            builder: Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml)),
        }
    }

    fn layer<S>(self, source: S) -> Self
    where
        S: config::Source + Send + Sync + 'static,
    {
        Self {
            builder: self.builder.add_source(source),
        }
    }

    fn toml_file(self, path: &Path, required: bool) -> Self {
        self.layer(File::from(path).format(FileFormat::Toml).required(required))
    }

    /// TOML settings that must exist; `build` fails when `path` is missing.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.toml_file(path.as_ref(), true)
    }

    /// TOML settings that apply only if `path` exists, e.g. a per-project file.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.toml_file(path.as_ref(), false)
    }

    /// Read `BIBLE_TEXT__SECTION__KEY` variables from the process environment.
    pub fn with_environment(self) -> Self {
        self.with_environment_source(None)
    }

    /// Environment layer over `vars` when given, else over the process environment.
    pub fn with_environment_source(self, vars: Option<Map<String, String>>) -> Self {
        self.layer(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true)
                .source(vars),
        )
    }

    /// Pin one dotted key, e.g. `normalization.keep_whitespace`, above every other layer.
    pub fn set_override<I>(self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        Ok(Self {
            builder: self.builder.set_override(key, value)?,
        })
    }

    /// Read every layer now and deserialize the merged result.
    pub fn build(self) -> Result<BibleTextConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Defaults merged with the process environment.
pub fn load_defaults() -> Result<BibleTextConfig, ConfigError> {
    Loader::new().with_environment().build()
}
