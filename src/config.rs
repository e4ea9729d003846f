//! Discovery configuration with optional TOML file support
//!
//! Glob patterns decide which files are build roots and which are partial
//! candidates. Defaults match the conventional layout where partials carry
//! a `.partial.html` suffix; a `stitcher.toml` file can override either
//! pattern, and CLI flags override the file.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Default pattern selecting root files in directory mode
pub const DEFAULT_ROOT_GLOB: &str = "**/*[!.partial].html";

/// Default pattern selecting partial candidate files
pub const DEFAULT_PARTIAL_GLOB: &str = "**/*.html";

/// Errors that can occur when loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Glob patterns controlling file discovery
#[derive(Debug, Clone)]
pub struct StitchConfig {
    /// Pattern selecting root files under the input directory
    pub root_glob: String,
    /// Pattern selecting partial candidates under the input directory
    pub partial_glob: String,
}

/// TOML structure for deserializing configuration
#[derive(Deserialize)]
struct TomlConfig {
    patterns: Option<TomlPatterns>,
}

#[derive(Deserialize)]
struct TomlPatterns {
    root: Option<String>,
    partial: Option<String>,
}

impl StitchConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlConfig = toml::from_str(content)?;
        let defaults = Self::default();
        let patterns = parsed.patterns;

        Ok(Self {
            root_glob: patterns
                .as_ref()
                .and_then(|p| p.root.clone())
                .unwrap_or(defaults.root_glob),
            partial_glob: patterns
                .as_ref()
                .and_then(|p| p.partial.clone())
                .unwrap_or(defaults.partial_glob),
        })
    }
}

impl Default for StitchConfig {
    fn default() -> Self {
        Self {
            root_glob: DEFAULT_ROOT_GLOB.to_string(),
            partial_glob: DEFAULT_PARTIAL_GLOB.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_patterns() {
        let config = StitchConfig::default();
        assert_eq!(config.root_glob, DEFAULT_ROOT_GLOB);
        assert_eq!(config.partial_glob, DEFAULT_PARTIAL_GLOB);
    }

    #[test]
    fn test_parse_full_config() {
        let toml_str = r#"
[patterns]
root = "pages/**/*.html"
partial = "partials/**/*.html"
"#;
        let config = StitchConfig::from_str(toml_str).expect("Should parse");
        assert_eq!(config.root_glob, "pages/**/*.html");
        assert_eq!(config.partial_glob, "partials/**/*.html");
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let toml_str = r#"
[patterns]
root = "pages/**/*.html"
"#;
        let config = StitchConfig::from_str(toml_str).expect("Should parse");
        assert_eq!(config.root_glob, "pages/**/*.html");
        assert_eq!(config.partial_glob, DEFAULT_PARTIAL_GLOB);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = StitchConfig::from_str("").expect("Should parse");
        assert_eq!(config.root_glob, DEFAULT_ROOT_GLOB);
    }

    #[test]
    fn test_invalid_toml_error() {
        let invalid = "this is not valid toml {{{{";
        let result = StitchConfig::from_str(invalid);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
