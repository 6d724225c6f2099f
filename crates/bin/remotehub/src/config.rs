//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `remotehub.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use remotehub_domain::announcement::Language;
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Console output settings.
    pub console: ConsoleConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Console output configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Language announcements are rendered in.
    pub language: Language,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `remotehub.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if an
    /// override holds an unsupported value.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("remotehub.toml")?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.fill_blanks();
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(val) = lookup("REMOTEHUB_LANG") {
            self.console.language = val
                .parse()
                .map_err(|_| ConfigError::Validation(format!("unsupported language {val:?}")))?;
        }
        if let Some(val) = lookup("REMOTEHUB_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("RUST_LOG") {
            self.logging.filter = val;
        }
        Ok(())
    }

    fn fill_blanks(&mut self) {
        if self.logging.filter.trim().is_empty() {
            self.logging.filter = LoggingConfig::default().filter;
        }
    }
}

impl LoggingConfig {
    /// Build the subscriber filter from [`filter`](Self::filter).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Filter`] if any directive fails to parse.
    pub fn env_filter(&self) -> Result<EnvFilter, ConfigError> {
        EnvFilter::try_new(&self.filter).map_err(ConfigError::Filter)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "remotehub=info,remotehub_app=info,remotehub_adapter_virtual=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
    /// Malformed logging filter directive.
    #[error("invalid logging filter")]
    Filter(#[source] tracing_subscriber::filter::ParseError),
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.console.language, Language::En);
        assert!(config.logging.filter.starts_with("remotehub=info"));
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.console.language, Language::En);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [console]
            language = 'es'

            [logging]
            filter = 'debug'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.console.language, Language::Es);
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let toml = "
            [logging]
            filter = 'trace'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.logging.filter, "trace");
        assert_eq!(config.console.language, Language::En);
    }

    #[test]
    fn should_reject_unknown_language_in_toml() {
        let result: Result<Config, _> = toml::from_str("[console]\nlanguage = 'fr'");
        assert!(result.is_err());
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.console.language, Language::En);
    }

    #[test]
    fn should_override_language_from_env() {
        let mut config = Config::default();
        config
            .apply_overrides(env(&[("REMOTEHUB_LANG", "ES")]))
            .unwrap();
        assert_eq!(config.console.language, Language::Es);
    }

    #[test]
    fn should_reject_unknown_language_from_env() {
        let mut config = Config::default();
        let result = config.apply_overrides(env(&[("REMOTEHUB_LANG", "klingon")]));
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn should_prefer_rust_log_over_remotehub_log() {
        let mut config = Config::default();
        config
            .apply_overrides(env(&[("REMOTEHUB_LOG", "warn"), ("RUST_LOG", "debug")]))
            .unwrap();
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn should_keep_file_values_without_overrides() {
        let mut config: Config = toml::from_str("[logging]\nfilter = 'warn'").unwrap();
        config.apply_overrides(env(&[])).unwrap();
        assert_eq!(config.logging.filter, "warn");
    }

    #[test]
    fn should_accept_language_in_any_case_from_toml() {
        let config: Config = toml::from_str("[console]\nlanguage = 'ES'").unwrap();
        assert_eq!(config.console.language, Language::Es);
    }

    #[test]
    fn should_fall_back_to_default_filter_when_rust_log_is_empty() {
        let mut config = Config::default();
        config.apply_overrides(env(&[("RUST_LOG", "")])).unwrap();
        config.fill_blanks();
        assert_eq!(config.logging.filter, LoggingConfig::default().filter);
    }

    #[test]
    fn should_fall_back_to_default_filter_when_file_filter_is_blank() {
        let mut config: Config = toml::from_str("[logging]\nfilter = '  '").unwrap();
        config.fill_blanks();
        assert_eq!(config.logging.filter, LoggingConfig::default().filter);
    }

    #[test]
    fn should_build_env_filter_from_default_directives() {
        assert!(LoggingConfig::default().env_filter().is_ok());
    }

    #[test]
    fn should_reject_malformed_filter_directive() {
        let logging = LoggingConfig {
            filter: "remotehub=loudest".to_string(),
        };
        assert!(matches!(logging.env_filter(), Err(ConfigError::Filter(_))));
    }
}
