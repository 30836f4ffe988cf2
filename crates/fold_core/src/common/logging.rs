//! Stderr logging for the `fold` command.
//!
//! Logging is silent unless `FOLD_LOG` names a filter (e.g. `FOLD_LOG=debug`),
//! because stderr is also where usage text is written. `FOLD_LOG_FORMAT`
//! chooses between `plain` (default), `compact` and `pretty`.

use anyhow::Result;

pub const LOG_ENV: &str = "FOLD_LOG";
pub const LOG_FORMAT_ENV: &str = "FOLD_LOG_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Plain,
    Compact,
    Pretty,
}

impl LogFormat {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "plain" => Some(LogFormat::Plain),
            "compact" => Some(LogFormat::Compact),
            "pretty" => Some(LogFormat::Pretty),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "off".to_string(),
            format: LogFormat::Plain,
        }
    }
}

impl LoggingConfig {
    pub fn from_env() -> Self {
        Self::from_values(
            std::env::var(LOG_ENV).ok().as_deref(),
            std::env::var(LOG_FORMAT_ENV).ok().as_deref(),
        )
    }

    fn from_values(level: Option<&str>, format: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            level: level
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(str::to_string)
                .unwrap_or(defaults.level),
            format: format.and_then(LogFormat::parse).unwrap_or(defaults.format),
        }
    }
}

/// Install the global subscriber from the environment.
pub fn init() -> Result<()> {
    init_with(&LoggingConfig::from_env())
}

#[cfg(feature = "logging")]
pub fn init_with(config: &LoggingConfig) -> Result<()> {
    use anyhow::Context;
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let (filter, rejected) = build_filter(&config.level);

    let registry = tracing_subscriber::registry().with(filter);
    let installed = match config.format {
        LogFormat::Plain => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Compact => registry
            .with(fmt::layer().compact().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Pretty => registry
            .with(fmt::layer().pretty().with_writer(std::io::stderr))
            .try_init(),
    };
    installed.context("Failed to install tracing subscriber")?;

    if let Some(e) = rejected {
        tracing::warn!(
            filter = %config.level,
            error = %e,
            "invalid {} filter, logging at {} instead",
            LOG_ENV,
            FALLBACK_LEVEL
        );
    }
    Ok(())
}

/// Level used when the requested filter does not parse.
#[cfg(feature = "logging")]
const FALLBACK_LEVEL: &str = "warn";

/// Parse `level` as an `EnvFilter`, falling back to [`FALLBACK_LEVEL`] and
/// handing back the parse error so it can be reported.
#[cfg(feature = "logging")]
fn build_filter(
    level: &str,
) -> (
    tracing_subscriber::EnvFilter,
    Option<tracing_subscriber::filter::ParseError>,
) {
    use tracing_subscriber::EnvFilter;

    match EnvFilter::try_new(level) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new(FALLBACK_LEVEL), Some(e)),
    }
}

#[cfg(not(feature = "logging"))]
pub fn init_with(_config: &LoggingConfig) -> Result<()> {
    Ok(())
}
