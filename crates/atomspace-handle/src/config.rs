//! # Configuration
//!
//! TOML configuration for the handle layer, with environment overrides.
//!
//! ```toml
//! ordering = "content"
//! log_format = "json"
//! log_filter = "atomspace_handle=debug"
//! ```
//!
//! Every field is optional. Environment variables win over the file:
//! - `ATOMSPACE_ORDERING`: `address` | `content`
//! - `ATOMSPACE_LOG_FORMAT`: `text` | `json`

use crate::policy::OrderingPolicy;
use crate::types::AtomSpaceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Environment variable overriding [`AtomSpaceConfig::ordering`].
pub const ORDERING_ENV: &str = "ATOMSPACE_ORDERING";

/// Environment variable overriding [`AtomSpaceConfig::log_format`].
pub const LOG_FORMAT_ENV: &str = "ATOMSPACE_LOG_FORMAT";

// =============================================================================
// LOG FORMAT
// =============================================================================

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Text => "text",
            Self::Json => "json",
        })
    }
}

impl FromStr for LogFormat {
    type Err = AtomSpaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(AtomSpaceError::InvalidPolicy(format!(
                "unknown log format `{other}` (expected `text` or `json`)"
            ))),
        }
    }
}

// =============================================================================
// CONFIG
// =============================================================================

/// Settings for the handle layer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AtomSpaceConfig {
    /// Ordering used by policy-driven indices.
    pub ordering: OrderingPolicy,
    /// Log output format.
    pub log_format: LogFormat,
    /// `EnvFilter` directives; falls back to `RUST_LOG`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
}

impl AtomSpaceConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, AtomSpaceError> {
        toml::from_str(text).map_err(|e| AtomSpaceError::Config(e.to_string()))
    }

    /// Read and parse a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, AtomSpaceError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| AtomSpaceError::Io(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    /// Serialize back to TOML.
    pub fn to_toml_string(&self) -> Result<String, AtomSpaceError> {
        toml::to_string(self).map_err(|e| AtomSpaceError::Config(e.to_string()))
    }

    /// Apply overrides from the process environment.
    pub fn apply_env_overrides(&mut self) -> Result<(), AtomSpaceError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), AtomSpaceError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(ordering) = lookup(ORDERING_ENV) {
            self.ordering = ordering.parse()?;
        }
        if let Some(format) = lookup(LOG_FORMAT_ENV) {
            self.log_format = format.parse()?;
        }
        Ok(())
    }

    /// Load from `path` (or defaults when `None`), then apply the environment.
    pub fn load(path: Option<&Path>) -> Result<Self, AtomSpaceError> {
        let mut config = match path {
            Some(path) => Self::from_path(path)?,
            None => Self::default(),
        };
        config.apply_env_overrides()?;
        tracing::info!(
            ordering = %config.ordering,
            log_format = %config.log_format,
            "configuration loaded"
        );
        Ok(config)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::io::Write;

    #[test]
    fn empty_document_uses_defaults() {
        let config = AtomSpaceConfig::from_toml_str("").expect("parse");
        assert_eq!(config, AtomSpaceConfig::default());
        assert_eq!(config.ordering, OrderingPolicy::Address);
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn full_document() {
        let config = AtomSpaceConfig::from_toml_str(
            "ordering = \"content\"\nlog_format = \"json\"\nlog_filter = \"atomspace_handle=debug\"\n",
        )
        .expect("parse");
        assert_eq!(config.ordering, OrderingPolicy::Content);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.log_filter.as_deref(), Some("atomspace_handle=debug"));
    }

    #[test]
    fn unknown_ordering_rejected() {
        let result = AtomSpaceConfig::from_toml_str("ordering = \"random\"");
        assert!(matches!(result, Err(AtomSpaceError::Config(_))));
    }

    #[test]
    fn toml_round_trip() {
        let config = AtomSpaceConfig {
            ordering: OrderingPolicy::Content,
            log_format: LogFormat::Json,
            log_filter: None,
        };
        let text = config.to_toml_string().expect("serialize");
        assert_eq!(AtomSpaceConfig::from_toml_str(&text).expect("parse"), config);
    }

    #[test]
    fn overrides_win_over_file() {
        let vars: BTreeMap<&str, &str> =
            [(ORDERING_ENV, "content"), (LOG_FORMAT_ENV, "JSON")].into_iter().collect();
        let mut config = AtomSpaceConfig::default();
        config
            .apply_overrides(|key| vars.get(key).map(|v| (*v).to_string()))
            .expect("overrides");
        assert_eq!(config.ordering, OrderingPolicy::Content);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn invalid_override_rejected() {
        let mut config = AtomSpaceConfig::default();
        let result = config.apply_overrides(|key| {
            (key == ORDERING_ENV).then(|| "sideways".to_string())
        });
        assert!(matches!(result, Err(AtomSpaceError::InvalidPolicy(_))));
        assert_eq!(config.ordering, OrderingPolicy::Address);
    }

    #[test]
    fn reads_file() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        writeln!(file, "ordering = \"content\"").expect("write");

        let config = AtomSpaceConfig::from_path(file.path()).expect("load");
        assert_eq!(config.ordering, OrderingPolicy::Content);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let result = AtomSpaceConfig::from_path(dir.path().join("absent.toml"));
        assert!(matches!(result, Err(AtomSpaceError::Io(_))));
    }
}
