// src/config/mod.rs
// Runtime configuration. All values come from the environment (optionally via
// a .env file), with typed fallbacks.

use once_cell::sync::Lazy;
use std::str::FromStr;
use tracing::Level;

#[derive(Debug, Clone)]
pub struct CatalogConfig {
    // ── Card Rendering
    pub collapsed_code_lines: usize,
    pub expanded_code_lines: usize,

    // ── Terminal Output
    pub color: bool,

    // ── Logging
    pub log_level: String,
}

fn env_var_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    match std::env::var(key) {
        Ok(val) => {
            let clean_val = val.split('#').next().unwrap_or("").trim();
            match clean_val.parse::<T>() {
                Ok(parsed) => parsed,
                Err(_) => {
                    eprintln!("Config: {} = '{}' (parse failed, using default)", key, val);
                    default
                }
            }
        }
        Err(_) => default,
    }
}

impl CatalogConfig {
    pub fn from_env() -> Self {
        // Missing .env is the normal case for an installed binary.
        let _ = dotenvy::dotenv();

        Self {
            collapsed_code_lines: env_var_or("AGENTSEA_COLLAPSED_CODE_LINES", 6),
            expanded_code_lines: env_var_or("AGENTSEA_EXPANDED_CODE_LINES", 48),
            color: env_var_or("AGENTSEA_COLOR", true),
            log_level: env_var_or("AGENTSEA_LOG_LEVEL", "warn".to_string()),
        }
    }

    /// Rendered line cap for a record's code preview in the given state.
    pub fn code_line_limit(&self, expanded: bool) -> usize {
        if expanded {
            self.expanded_code_lines
        } else {
            self.collapsed_code_lines
        }
    }

    /// Tracing level parsed from `log_level`, falling back to WARN.
    pub fn tracing_level(&self) -> Level {
        self.log_level.parse().unwrap_or(Level::WARN)
    }
}

// Global config instance - loaded once at startup
pub static CONFIG: Lazy<CatalogConfig> = Lazy::new(CatalogConfig::from_env);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = CatalogConfig::from_env();

        assert!(config.collapsed_code_lines < config.expanded_code_lines);
        assert_eq!(config.code_line_limit(false), config.collapsed_code_lines);
        assert_eq!(config.code_line_limit(true), config.expanded_code_lines);
    }

    #[test]
    fn test_env_var_or_parses_and_falls_back() {
        unsafe {
            std::env::set_var("AGENTSEA_TEST_LINES", "12");
        }
        assert_eq!(env_var_or("AGENTSEA_TEST_LINES", 6usize), 12);

        unsafe {
            std::env::set_var("AGENTSEA_TEST_BROKEN", "not-a-number");
        }
        assert_eq!(env_var_or("AGENTSEA_TEST_BROKEN", 6usize), 6);
    }

    #[test]
    fn test_env_var_or_strips_trailing_comments() {
        unsafe {
            std::env::set_var("AGENTSEA_TEST_COMMENTED", "8 # inline note");
        }
        assert_eq!(env_var_or("AGENTSEA_TEST_COMMENTED", 1usize), 8);
    }

    #[test]
    fn test_tracing_level_fallback() {
        let mut config = CatalogConfig::from_env();
        config.log_level = "debug".to_string();
        assert_eq!(config.tracing_level(), Level::DEBUG);
        config.log_level = "nonsense".to_string();
        assert_eq!(config.tracing_level(), Level::WARN);
    }
}
