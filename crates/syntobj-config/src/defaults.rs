use crate::logging::LogFormat;

/// Name passed as the program name when building loader arguments.
pub const CONFIG_PROGRAM_NAME: &str = "syntobj";

/// Command-line flag naming an explicit configuration file.
pub const CONFIG_PATH_FLAG: &str = "--config-path";

/// Environment variable naming an explicit configuration file.
pub const CONFIG_PATH_ENV: &str = "SYNTOBJ_CONFIG_PATH";

/// Prefix of the environment variables overriding individual fields, e.g.
/// `SYNTOBJ_LOG_FILTER`.
pub const ENV_PREFIX: &str = "SYNTOBJ_";

/// Default log filter expression.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Default log filter expression.
#[must_use]
pub const fn default_log_filter() -> &'static str {
    DEFAULT_LOG_FILTER
}

/// Owned log filter value used where allocation is required (e.g. serde).
#[must_use]
pub fn default_log_filter_string() -> String {
    DEFAULT_LOG_FILTER.to_owned()
}

/// Default logging format.
#[must_use]
pub const fn default_log_format() -> LogFormat {
    LogFormat::Json
}

/// Whether the embedded catalogs are consulted by default.
#[must_use]
pub const fn default_builtin_catalogs() -> bool {
    true
}
