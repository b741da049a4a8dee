//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.public-apis/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::selection::SortMethod;
use crate::directory::types::DEFAULT_BASE_URL;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub directory: DirectoryConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub default_sort: Option<SortMethod>,
    pub log_level: Option<String>,
    pub log_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DirectoryConfig {
    pub base_url: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_FILE: &str = "public-apis.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub sort_method: SortMethod,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
}

/// Values supplied on the command line. `None` means "not given".
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub base_url: Option<String>,
    pub sort_method: Option<SortMethod>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.public-apis/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".public-apis").join("config.toml"))
}

/// Load config from `~/.public-apis/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `AppConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(AppConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(AppConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: AppConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG_TEMPLATE: &str = r#"# public-apis configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_sort = "category-asc"      # "category-asc", "category-desc", "name-asc", "name-desc"
# log_level = "debug"                # "off", "error", "warn", "info", "debug", "trace"
# log_file = "public-apis.log"

# [directory]
# base_url = "https://api.publicapis.org"   # Or set PUBLIC_APIS_BASE_URL
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_TEMPLATE) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &AppConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

fn resolve_with_env(
    config: &AppConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Base URL: CLI → env → config → default
    let base_url = cli
        .base_url
        .clone()
        .or_else(|| env("PUBLIC_APIS_BASE_URL"))
        .or_else(|| config.directory.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    // Sort: CLI → env → config → default
    let sort_method = cli
        .sort_method
        .or_else(|| {
            env("PUBLIC_APIS_SORT").and_then(|s| {
                let parsed = SortMethod::from_config_str(&s);
                if parsed.is_none() {
                    warn!("Ignoring unknown PUBLIC_APIS_SORT value {:?}", s);
                }
                parsed
            })
        })
        .or(config.general.default_sort)
        .unwrap_or_default();

    let log_level = config
        .general
        .log_level
        .as_deref()
        .and_then(|level| level.parse().ok())
        .unwrap_or(DEFAULT_LOG_LEVEL);

    let log_file = config
        .general
        .log_file
        .clone()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    ResolvedConfig {
        base_url,
        sort_method,
        log_level,
        log_file,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_config_parses() {
        let config = AppConfig::default();
        assert!(config.general.default_sort.is_none());
        assert!(config.directory.base_url.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&AppConfig::default(), &CliOverrides::default(), no_env);
        assert_eq!(resolved.base_url, DEFAULT_BASE_URL);
        assert_eq!(resolved.sort_method, SortMethod::CategoryAsc);
        assert_eq!(resolved.log_level, LevelFilter::Debug);
        assert_eq!(resolved.log_file, PathBuf::from(DEFAULT_LOG_FILE));
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = AppConfig {
            general: GeneralConfig {
                default_sort: Some(SortMethod::NameAsc),
                log_level: Some("warn".to_string()),
                log_file: Some("/tmp/apis.log".to_string()),
            },
            directory: DirectoryConfig {
                base_url: Some("http://mirror.local".to_string()),
            },
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.base_url, "http://mirror.local");
        assert_eq!(resolved.sort_method, SortMethod::NameAsc);
        assert_eq!(resolved.log_level, LevelFilter::Warn);
        assert_eq!(resolved.log_file, PathBuf::from("/tmp/apis.log"));
    }

    #[test]
    fn test_env_beats_config() {
        let config = AppConfig {
            directory: DirectoryConfig {
                base_url: Some("http://from-config".to_string()),
            },
            ..Default::default()
        };
        let env = |key: &str| match key {
            "PUBLIC_APIS_BASE_URL" => Some("http://from-env".to_string()),
            "PUBLIC_APIS_SORT" => Some("name-desc".to_string()),
            _ => None,
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), env);
        assert_eq!(resolved.base_url, "http://from-env");
        assert_eq!(resolved.sort_method, SortMethod::NameDesc);
    }

    #[test]
    fn test_cli_wins() {
        let env = |key: &str| match key {
            "PUBLIC_APIS_BASE_URL" => Some("http://from-env".to_string()),
            "PUBLIC_APIS_SORT" => Some("name-desc".to_string()),
            _ => None,
        };
        let cli = CliOverrides {
            base_url: Some("http://from-cli".to_string()),
            sort_method: Some(SortMethod::CategoryDesc),
        };
        let resolved = resolve_with_env(&AppConfig::default(), &cli, env);
        assert_eq!(resolved.base_url, "http://from-cli");
        assert_eq!(resolved.sort_method, SortMethod::CategoryDesc);
    }

    #[test]
    fn test_unknown_env_sort_falls_through() {
        let config = AppConfig {
            general: GeneralConfig {
                default_sort: Some(SortMethod::NameAsc),
                ..Default::default()
            },
            ..Default::default()
        };
        let env = |key: &str| (key == "PUBLIC_APIS_SORT").then(|| "sideways".to_string());
        let resolved = resolve_with_env(&config, &CliOverrides::default(), env);
        assert_eq!(resolved.sort_method, SortMethod::NameAsc);
    }

    #[test]
    fn test_bad_log_level_uses_default() {
        let config = AppConfig {
            general: GeneralConfig {
                log_level: Some("loud".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
default_sort = "name-desc"
log_level = "info"

[directory]
base_url = "http://localhost:8080"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.default_sort, Some(SortMethod::NameDesc));
        assert_eq!(config.general.log_level.as_deref(), Some("info"));
        assert_eq!(
            config.directory.base_url.as_deref(),
            Some("http://localhost:8080")
        );
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[directory]
base_url = "http://localhost:8080"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert!(config.general.default_sort.is_none());
        assert!(config.general.log_file.is_none());
    }

    #[test]
    fn test_template_is_valid_toml() {
        let config: AppConfig = toml::from_str(DEFAULT_CONFIG_TEMPLATE).unwrap();
        assert!(config.directory.base_url.is_none());
    }

    #[test]
    fn test_missing_file_is_generated() {
        let dir = std::env::temp_dir().join(format!("public-apis-config-{}", std::process::id()));
        let path = dir.join("config.toml");
        let _ = fs::remove_dir_all(&dir);

        let config = load_config_from(&path).unwrap();
        assert!(config.general.default_sort.is_none());
        assert!(path.exists());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = std::env::temp_dir().join(format!("public-apis-bad-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, "[general\ndefault_sort = ").unwrap();

        assert!(matches!(load_config_from(&path), Err(ConfigError::Parse(_))));

        let _ = fs::remove_dir_all(&dir);
    }
}
