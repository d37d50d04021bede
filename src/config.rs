use std::collections::HashMap;
use std::fmt;
use std::fs;

use crate::log::{DEFAULT_NAMESPACE, LogLevel};

/// Section of the config file read by [`LogConfig`].
pub const LOGGING_SECTION: &str = "Logging";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Io { path: String, reason: String },
    InvalidLevel(String),
    InvalidBool { key: String, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ConfigError::*;
        match self {
            Io { path, reason } => write!(f, "error reading file {path}: {reason}"),
            InvalidLevel(v) => write!(f, "invalid min_level: {v}"),
            InvalidBool { key, value } => write!(f, "invalid boolean for {key}: {value}"),
        }
    }
}
impl std::error::Error for ConfigError {}

/// Minimal INI reader: `[Section]` headers, `key = value` pairs, `#` comments.
#[derive(Debug, Default)]
pub struct Config {
    pub globals: HashMap<String, String>,
    pub sections: HashMap<String, HashMap<String, String>>,
}

impl Config {
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self::parse(&content))
    }

    #[must_use]
    pub fn parse(content: &str) -> Self {
        let mut globals = HashMap::new();
        let mut sections: HashMap<String, HashMap<String, String>> = HashMap::new();
        let mut current_section: Option<String> = None;

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if line.starts_with('[') && line.ends_with(']') {
                let name = &line[1..line.len() - 1];
                current_section = Some(name.trim().to_string());
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim().to_string();
                let value = value.trim().trim_matches('"').to_string();

                match &current_section {
                    None => {
                        globals.insert(key, value);
                    }
                    Some(sec) => {
                        sections.entry(sec.clone()).or_default().insert(key, value);
                    }
                }
            }
        }
        Config { globals, sections }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|sec| sec.get(key))
            .map(|s| s.as_str())
    }

    #[must_use]
    pub fn get_non_empty(&self, section: &str, key: &str) -> Option<&str> {
        self.get(section, key).filter(|s| !s.is_empty())
    }

    #[must_use]
    pub fn get_global(&self, key: &str) -> Option<&str> {
        self.globals.get(key).map(|s| s.as_str())
    }

    #[must_use]
    pub fn get_non_empty_or_default<'a>(
        &'a self,
        section: &str,
        key: &str,
        default: &'a str,
    ) -> &'a str {
        self.get_non_empty(section, key)
            .or_else(|| self.get_global(key).filter(|s| !s.is_empty()))
            .unwrap_or(default)
    }
}

/// Typed view of the `[Logging]` section.
#[derive(Debug, Clone, PartialEq)]
pub struct LogConfig {
    /// Prefix written as `[<namespace>]` on every console line.
    pub namespace: String,
    /// Messages below this level are dropped by the console sink.
    pub min_level: LogLevel,
    /// Wrap the console sink in a `ThrottledLogSink`.
    pub enforce_throttle: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            min_level: LogLevel::Debug,
            enforce_throttle: false,
        }
    }
}

impl LogConfig {
    /// Reads the `[Logging]` section, falling back to defaults for missing keys.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidLevel`] or [`ConfigError::InvalidBool`] when a
    /// present value does not parse.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let namespace = config
            .get_non_empty_or_default(LOGGING_SECTION, "namespace", &defaults.namespace)
            .to_string();

        let min_level = match config.get_non_empty(LOGGING_SECTION, "min_level") {
            Some(v) => v
                .parse::<LogLevel>()
                .map_err(|_| ConfigError::InvalidLevel(v.to_string()))?,
            None => defaults.min_level,
        };

        let enforce_throttle = match config.get_non_empty(LOGGING_SECTION, "enforce_throttle") {
            Some(v) => parse_bool(v).ok_or_else(|| ConfigError::InvalidBool {
                key: "enforce_throttle".into(),
                value: v.to_string(),
            })?,
            None => defaults.enforce_throttle,
        };

        Ok(Self {
            namespace,
            min_level,
            enforce_throttle,
        })
    }

    pub fn load(path: &str) -> Result<Self, ConfigError> {
        Self::from_config(&Config::load(path)?)
    }
}

fn parse_bool(v: &str) -> Option<bool> {
    match v.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;

    #[test]
    fn parses_sections_globals_and_comments() {
        let cfg = Config::parse(
            "# top\nnamespace = global_ns\n\n[Logging]\nmin_level = \"warn\"\n# skipped = 1\n",
        );
        assert_eq!(cfg.get_global("namespace"), Some("global_ns"));
        assert_eq!(cfg.get("Logging", "min_level"), Some("warn"));
        assert_eq!(cfg.get("Logging", "skipped"), None);
    }

    #[test]
    fn log_config_defaults_when_section_missing() {
        let lc = LogConfig::from_config(&Config::empty()).unwrap();
        assert_eq!(lc, LogConfig::default());
        assert_eq!(lc.namespace, "mavrosflight");
    }

    #[test]
    fn log_config_reads_all_keys() {
        let cfg = Config::parse(
            "[Logging]\nnamespace = rosflight_io\nmin_level = INFO\nenforce_throttle = yes\n",
        );
        let lc = LogConfig::from_config(&cfg).unwrap();
        assert_eq!(lc.namespace, "rosflight_io");
        assert_eq!(lc.min_level, LogLevel::Info);
        assert!(lc.enforce_throttle);
    }

    #[test]
    fn namespace_falls_back_to_global_key() {
        let cfg = Config::parse("namespace = fcu\n[Logging]\nnamespace =\n");
        assert_eq!(LogConfig::from_config(&cfg).unwrap().namespace, "fcu");
    }

    #[test]
    fn invalid_values_are_reported() {
        let cfg = Config::parse("[Logging]\nmin_level = loud\n");
        assert_eq!(
            LogConfig::from_config(&cfg),
            Err(ConfigError::InvalidLevel("loud".into()))
        );

        let cfg = Config::parse("[Logging]\nenforce_throttle = maybe\n");
        assert_eq!(
            LogConfig::from_config(&cfg),
            Err(ConfigError::InvalidBool {
                key: "enforce_throttle".into(),
                value: "maybe".into()
            })
        );
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Config::load("/nonexistent/mavlog.ini").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/mavlog.ini"));
    }
}
