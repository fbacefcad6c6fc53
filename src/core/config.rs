// src/core/config.rs
use std::env;
use std::path::PathBuf;
use log::LevelFilter;

use crate::generators::password::MAX_GENERATION_ATTEMPTS;
use crate::models::{PolicyMode, SecurityLevel};
use crate::suggestions::advisor::{DEFAULT_OPENAI_MODEL, DEFAULT_OPENAI_URL};
use crate::suggestions::DEFAULT_ALTERNATIVES;

/// Upper bound for MAX_GENERATION_ATTEMPTS
pub const GENERATION_ATTEMPTS_CEILING: usize = 1000;

/// Upper bound for ALTERNATIVE_COUNT
pub const ALTERNATIVE_COUNT_CEILING: usize = 20;

// Configuration for the strength engine and its surfaces
#[derive(Debug, Clone)]
pub struct Config {
    // Analysis defaults
    pub default_security_level: SecurityLevel,
    pub default_mode: PolicyMode,

    // Generation
    pub alternative_count: usize,
    pub max_generation_attempts: usize,

    // Suggestion advisor
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub openai_api_url: String,

    // Web Interface
    pub web_port: u16,
    pub web_address: String,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,

    // Rejected values, held until the logger exists
    pub warnings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_security_level: SecurityLevel::default(),
            default_mode: PolicyMode::Standard,

            alternative_count: DEFAULT_ALTERNATIVES,
            max_generation_attempts: MAX_GENERATION_ATTEMPTS,

            openai_api_key: None,
            openai_model: DEFAULT_OPENAI_MODEL.to_string(),
            openai_api_url: DEFAULT_OPENAI_URL.to_string(),

            web_port: 5000,
            web_address: "127.0.0.1".to_string(),

            log_level: LevelFilter::Info,
            log_file: None,

            warnings: Vec::new(),
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup. Unparsable values keep the default
    /// and leave a message in `warnings`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Analysis defaults
        if let Some(val) = lookup("DEFAULT_SECURITY_LEVEL") {
            match val.parse::<u8>().ok().and_then(|n| SecurityLevel::new(n).ok()) {
                Some(level) => config.default_security_level = level,
                None => {
                    let msg = format!(
                        "Invalid DEFAULT_SECURITY_LEVEL '{}', using {}",
                        val, config.default_security_level
                    );
                    config.warnings.push(msg);
                }
            }
        }

        if let Some(val) = lookup("DEFAULT_MODE") {
            match val.parse::<PolicyMode>() {
                Ok(mode) => config.default_mode = mode,
                Err(_) => {
                    let msg = format!("Unknown DEFAULT_MODE '{}', using {}", val, config.default_mode);
                    config.warnings.push(msg);
                }
            }
        }

        // Generation
        if let Some(val) = lookup("ALTERNATIVE_COUNT") {
            match val.parse::<usize>() {
                Ok(count) => {
                    config.alternative_count = count.clamp(1, ALTERNATIVE_COUNT_CEILING);
                }
                Err(_) => {
                    let msg = format!(
                        "Invalid ALTERNATIVE_COUNT '{}', using {}",
                        val, config.alternative_count
                    );
                    config.warnings.push(msg);
                }
            }
        }

        if let Some(val) = lookup("MAX_GENERATION_ATTEMPTS") {
            match val.parse::<usize>() {
                Ok(attempts) => {
                    config.max_generation_attempts = attempts.clamp(1, GENERATION_ATTEMPTS_CEILING);
                }
                Err(_) => {
                    let msg = format!(
                        "Invalid MAX_GENERATION_ATTEMPTS '{}', using {}",
                        val, config.max_generation_attempts
                    );
                    config.warnings.push(msg);
                }
            }
        }

        // Suggestion advisor
        if let Some(key) = lookup("OPENAI_API_KEY") {
            if !key.trim().is_empty() {
                config.openai_api_key = Some(key);
            }
        }

        if let Some(model) = lookup("OPENAI_MODEL") {
            config.openai_model = model;
        }

        if let Some(url) = lookup("OPENAI_API_URL") {
            config.openai_api_url = url;
        }

        // Web Interface
        if let Some(val) = lookup("WEB_PORT") {
            match val.parse::<u16>() {
                Ok(port) => config.web_port = port,
                Err(_) => {
                    let msg = format!("Invalid WEB_PORT '{}', using {}", val, config.web_port);
                    config.warnings.push(msg);
                }
            }
        }

        if let Some(address) = lookup("WEB_ADDRESS") {
            config.web_address = address;
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => {
                    let msg = format!("Unknown LOG_LEVEL '{}', using {}", level, config.log_level);
                    config.warnings.push(msg);
                }
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            config.log_file = Some(PathBuf::from(file));
        }

        config
    }

    pub fn advisor_enabled(&self) -> bool {
        self.openai_api_key.is_some()
    }

    /// Emit the buffered warnings. Call once logging is initialised.
    pub fn log_warnings(&self) {
        for warning in &self.warnings {
            log::warn!("{}", warning);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.default_security_level.get(), 3);
        assert_eq!(config.default_mode, PolicyMode::Standard);
        assert_eq!(config.max_generation_attempts, MAX_GENERATION_ATTEMPTS);
        assert_eq!(config.web_port, 5000);
        assert!(!config.advisor_enabled());
    }

    #[test]
    fn overrides_from_environment() {
        let config = config_from(&[
            ("DEFAULT_SECURITY_LEVEL", "5"),
            ("DEFAULT_MODE", "enhanced"),
            ("ALTERNATIVE_COUNT", "1"),
            ("OPENAI_API_KEY", "sk-test"),
            ("WEB_PORT", "8088"),
            ("LOG_LEVEL", "DEBUG"),
        ]);
        assert_eq!(config.default_security_level.get(), 5);
        assert_eq!(config.default_mode, PolicyMode::Enhanced);
        assert_eq!(config.alternative_count, 1);
        assert!(config.advisor_enabled());
        assert_eq!(config.web_port, 8088);
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn bad_values_keep_defaults() {
        let config = config_from(&[
            ("DEFAULT_SECURITY_LEVEL", "9"),
            ("DEFAULT_MODE", "paranoid"),
            ("WEB_PORT", "not-a-port"),
            ("OPENAI_API_KEY", "   "),
        ]);
        assert_eq!(config.default_security_level.get(), 3);
        assert_eq!(config.default_mode, PolicyMode::Standard);
        assert_eq!(config.web_port, 5000);
        assert!(!config.advisor_enabled());
    }

    #[test]
    fn every_rejected_value_is_reported() {
        let config = config_from(&[
            ("ALTERNATIVE_COUNT", "lots"),
            ("WEB_PORT", "nope"),
            ("LOG_LEVEL", "loud"),
            ("DEFAULT_MODE", "paranoid"),
        ]);
        assert_eq!(config.warnings.len(), 4, "{:?}", config.warnings);
        for key in ["ALTERNATIVE_COUNT", "WEB_PORT", "LOG_LEVEL", "DEFAULT_MODE"] {
            assert!(config.warnings.iter().any(|w| w.contains(key)), "no warning for {}", key);
        }
        assert_eq!(config.alternative_count, DEFAULT_ALTERNATIVES);
        assert_eq!(config.log_level, LevelFilter::Info);
        assert!(Config::default().warnings.is_empty());
    }

    struct CaptureLogger {
        records: Mutex<Vec<String>>,
    }

    impl log::Log for CaptureLogger {
        fn enabled(&self, metadata: &log::Metadata) -> bool {
            metadata.level() <= log::Level::Warn
        }

        fn log(&self, record: &log::Record) {
            if self.enabled(record.metadata()) {
                if let Ok(mut records) = self.records.lock() {
                    records.push(record.args().to_string());
                }
            }
        }

        fn flush(&self) {}
    }

    static CAPTURE: CaptureLogger = CaptureLogger {
        records: Mutex::new(Vec::new()),
    };

    #[test]
    fn buffered_warnings_reach_the_logger() {
        let _ = log::set_logger(&CAPTURE);
        log::set_max_level(LevelFilter::Warn);

        let config = config_from(&[("WEB_PORT", "70000"), ("LOG_LEVEL", "loud")]);
        config.log_warnings();

        let records = CAPTURE.records.lock().unwrap();
        for warning in &config.warnings {
            assert!(records.contains(warning), "{} was not logged", warning);
        }
        assert_eq!(config.warnings.len(), 2);
    }

    #[test]
    fn alternative_count_is_clamped() {
        assert_eq!(config_from(&[("ALTERNATIVE_COUNT", "0")]).alternative_count, 1);
        assert_eq!(
            config_from(&[("ALTERNATIVE_COUNT", "100000")]).alternative_count,
            ALTERNATIVE_COUNT_CEILING
        );
        assert!(config_from(&[("ALTERNATIVE_COUNT", "100000")]).warnings.is_empty());
    }

    #[test]
    fn generation_attempts_are_clamped() {
        assert_eq!(config_from(&[("MAX_GENERATION_ATTEMPTS", "0")]).max_generation_attempts, 1);
        assert_eq!(
            config_from(&[("MAX_GENERATION_ATTEMPTS", "50000")]).max_generation_attempts,
            GENERATION_ATTEMPTS_CEILING
        );
    }
}
