//! Configuration for syntax text objects.
//!
//! A [`Config`] is loaded once at start-up and never mutated afterwards.
//! Configuration files are YAML:
//!
//! ```yaml
//! languages:            # extra editor language id -> grammar
//!   - language_id: rustic
//!     grammar: rust
//! catalog_paths:        # catalog override directories, searched in order
//!   - /home/me/.config/syntobj/queries
//! builtin_catalogs: true
//! log_filter: info
//! log_format: json      # json | compact
//! ```
//!
//! Every field is optional. [`Config::discover`] layers its sources with
//! `ortho_config`: the defaults, then the discovered configuration file
//! (`syntobj/config.yaml` under the platform configuration directory or a
//! `.syntobj.yaml` dotfile), then the file named by [`CONFIG_PATH_ENV`], then
//! an explicit path, and finally per-field `SYNTOBJ_*` environment variables
//! such as `SYNTOBJ_LOG_FILTER`.

mod alias;
mod defaults;
mod logging;

use std::ffi::OsString;
use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};
use ortho_config::{OrthoConfig, OrthoError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use alias::{LanguageAlias, LanguageAliasParseError};
pub use defaults::{
    CONFIG_PATH_ENV, CONFIG_PATH_FLAG, CONFIG_PROGRAM_NAME, DEFAULT_LOG_FILTER, ENV_PREFIX,
    default_builtin_catalogs, default_log_filter, default_log_filter_string, default_log_format,
};
pub use logging::{LogFormat, LogFormatParseError};

const INLINE_ORIGIN: &str = "<inline>";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration {path}: {source}")]
    Read {
        /// The file that failed to load.
        path: Utf8PathBuf,
        /// The underlying I/O failure.
        source: std::io::Error,
    },

    /// The configuration text is not valid YAML for [`Config`].
    #[error("invalid configuration in {origin}: {message}")]
    Parse {
        /// The file path, or `<inline>` for text parsed directly.
        origin: String,
        /// Description of the parse failure.
        message: String,
    },

    /// Layering files and environment variables failed.
    #[error("failed to load configuration: {source}")]
    Load {
        /// Every failure the loader collected.
        #[from]
        source: Arc<OrthoError>,
    },
}

/// Immutable text-object configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "SYNTOBJ",
    discovery(
        app_name = "syntobj",
        config_file_name = "config.yaml",
        dotfile_name = ".syntobj.yaml"
    )
)]
pub struct Config {
    languages: Vec<LanguageAlias>,
    catalog_paths: Vec<Utf8PathBuf>,
    builtin_catalogs: bool,
    log_filter: String,
    log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            languages: Vec::new(),
            catalog_paths: Vec::new(),
            builtin_catalogs: default_builtin_catalogs(),
            log_filter: default_log_filter_string(),
            log_format: default_log_format(),
        }
    }
}

impl Config {
    /// Parses configuration from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the text is malformed.
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        Self::parse(text, INLINE_ORIGIN)
    }

    /// Reads and parses a single configuration file, without consulting the
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be read and
    /// [`ConfigError::Parse`] when its contents are invalid.
    pub fn load_from_path(path: &Utf8Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, path.as_str())
    }

    /// Loads layered configuration, with `explicit` as the highest priority
    /// file.
    ///
    /// Editor hosts own their command line, so the process arguments are
    /// never consulted; only `explicit` is passed on as [`CONFIG_PATH_FLAG`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Load`] carrying every file or environment
    /// failure the loader found.
    pub fn discover(explicit: Option<&Utf8Path>) -> Result<Self, ConfigError> {
        let mut args = vec![OsString::from(CONFIG_PROGRAM_NAME)];
        if let Some(path) = explicit {
            args.push(OsString::from(CONFIG_PATH_FLAG));
            args.push(OsString::from(path.as_str()));
        }
        Self::load_from_iter(args).map_err(ConfigError::from)
    }

    fn parse(text: &str, origin: &str) -> Result<Self, ConfigError> {
        if is_blank_document(text) {
            return Ok(Self::default());
        }
        serde_saphyr::from_str(text).map_err(|error| ConfigError::Parse {
            origin: origin.to_owned(),
            message: error.to_string(),
        })
    }

    /// Returns the extra editor language identifier aliases, in declaration
    /// order.
    #[must_use]
    pub fn languages(&self) -> &[LanguageAlias] {
        &self.languages
    }

    /// Returns the catalog override directories in search order.
    #[must_use]
    pub fn catalog_paths(&self) -> &[Utf8PathBuf] {
        &self.catalog_paths
    }

    /// Returns whether the embedded catalogs back up the override
    /// directories.
    #[must_use]
    pub const fn builtin_catalogs(&self) -> bool {
        self.builtin_catalogs
    }

    /// Returns the `tracing` filter expression.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    /// Returns the log output format.
    #[must_use]
    pub const fn log_format(&self) -> LogFormat {
        self.log_format
    }

    /// Adds an editor language identifier alias.
    #[must_use]
    pub fn with_language(
        mut self,
        language_id: impl Into<String>,
        grammar: impl Into<String>,
    ) -> Self {
        self.languages.push(LanguageAlias::new(language_id, grammar));
        self
    }

    /// Appends a catalog override directory.
    #[must_use]
    pub fn with_catalog_path(mut self, dir: impl Into<Utf8PathBuf>) -> Self {
        self.catalog_paths.push(dir.into());
        self
    }

    /// Enables or disables the embedded catalogs.
    #[must_use]
    pub const fn with_builtin_catalogs(mut self, enabled: bool) -> Self {
        self.builtin_catalogs = enabled;
        self
    }

    /// Replaces the log filter expression.
    #[must_use]
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Replaces the log output format.
    #[must_use]
    pub const fn with_log_format(mut self, format: LogFormat) -> Self {
        self.log_format = format;
        self
    }
}

/// Whether `text` holds no YAML content beyond whitespace and comments.
fn is_blank_document(text: &str) -> bool {
    text.lines()
        .map(str::trim)
        .all(|line| line.is_empty() || line.starts_with('#'))
}
