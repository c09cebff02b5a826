//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.dossier/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//!
//! The built-in content URL comes from `DOSSIER_CONTENT_URL` at build time,
//! when that variable was set for `cargo build`.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use simplelog::LevelFilter;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DossierConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub content: ContentConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_file: Option<String>,
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ContentConfig {
    pub url: Option<String>,
    pub request_timeout_secs: Option<u64>,
}

/// Values taken from the command line. `None` = flag not given.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub url: Option<String>,
    pub offline: bool,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_FILE: &str = "dossier.log";
pub const CONTENT_URL_ENV: &str = "DOSSIER_CONTENT_URL";

/// Content URL baked in at build time, if any.
pub fn build_time_content_url() -> Option<&'static str> {
    option_env!("DOSSIER_CONTENT_URL").filter(|url| !url.trim().is_empty())
}

// ============================================================================
// Resolved Config (concrete values)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// `None` means no remote source: the bundled dossier is used as-is.
    pub content_url: Option<String>,
    /// `None` keeps the HTTP client's own defaults.
    pub request_timeout: Option<Duration>,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
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

/// Returns the path to `~/.dossier/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".dossier").join("config.toml"))
}

/// Load config from `~/.dossier/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `DossierConfig::default()`.
pub fn load_config() -> Result<DossierConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(DossierConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<DossierConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(DossierConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: DossierConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# Dossier Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# log_file = "dossier.log"
# log_level = "debug"                # "error", "warn", "info", "debug", "trace", "off"

# [content]
# url = "https://example.org/expose-content.json"   # Or set DOSSIER_CONTENT_URL
# request_timeout_secs = 15                           # Unset = transport default
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &DossierConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, std::env::var(CONTENT_URL_ENV).ok())
}

/// Same as [`resolve`] with the environment value passed in.
pub fn resolve_with_env(
    config: &DossierConfig,
    cli: &CliOverrides,
    env_url: Option<String>,
) -> ResolvedConfig {
    // Content URL: CLI → env → config → build time. --offline wins over all.
    let content_url = if cli.offline {
        None
    } else {
        cli.url
            .clone()
            .or(env_url)
            .or_else(|| config.content.url.clone())
            .or_else(|| build_time_content_url().map(str::to_string))
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
    };

    let log_level = config
        .general
        .log_level
        .as_deref()
        .and_then(|level| match level.parse::<LevelFilter>() {
            Ok(level) => Some(level),
            Err(_) => {
                warn!("Unknown log level '{}', using debug", level);
                None
            }
        })
        .unwrap_or(LevelFilter::Debug);

    ResolvedConfig {
        content_url,
        request_timeout: config
            .content
            .request_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs),
        log_file: PathBuf::from(
            config
                .general
                .log_file
                .clone()
                .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string()),
        ),
        log_level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_url(url: &str) -> DossierConfig {
        DossierConfig {
            content: ContentConfig {
                url: Some(url.to_string()),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&DossierConfig::default(), &CliOverrides::default(), None);
        assert_eq!(resolved.content_url.as_deref(), build_time_content_url());
        assert_eq!(resolved.request_timeout, None);
        assert_eq!(resolved.log_file, PathBuf::from(DEFAULT_LOG_FILE));
        assert_eq!(resolved.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_env_wins_over_config_file() {
        let resolved = resolve_with_env(
            &config_with_url("https://file.example/d.json"),
            &CliOverrides::default(),
            Some("https://env.example/d.json".to_string()),
        );
        assert_eq!(resolved.content_url.as_deref(), Some("https://env.example/d.json"));
    }

    #[test]
    fn test_cli_url_wins() {
        let cli = CliOverrides {
            url: Some("https://cli.example/d.json".to_string()),
            offline: false,
        };
        let resolved = resolve_with_env(
            &config_with_url("https://file.example/d.json"),
            &cli,
            Some("https://env.example/d.json".to_string()),
        );
        assert_eq!(resolved.content_url.as_deref(), Some("https://cli.example/d.json"));
    }

    #[test]
    fn test_offline_disables_remote_source() {
        let cli = CliOverrides {
            url: Some("https://cli.example/d.json".to_string()),
            offline: true,
        };
        let resolved = resolve_with_env(&config_with_url("https://file.example/d.json"), &cli, None);
        assert_eq!(resolved.content_url, None);
    }

    #[test]
    fn test_blank_url_counts_as_unset() {
        let cli = CliOverrides {
            url: Some("   ".to_string()),
            offline: false,
        };
        let resolved = resolve_with_env(&DossierConfig::default(), &cli, None);
        assert_eq!(resolved.content_url, None);
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[content]
url = "https://example.org/expose-content.json"
request_timeout_secs = 10
"#;
        let config: DossierConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.content.url.as_deref(),
            Some("https://example.org/expose-content.json")
        );
        assert!(config.general.log_file.is_none());

        let resolved = resolve_with_env(&config, &CliOverrides::default(), None);
        assert_eq!(resolved.request_timeout, Some(Duration::from_secs(10)));
    }

    #[test]
    fn test_log_level_parsing() {
        let config = DossierConfig {
            general: GeneralConfig {
                log_level: Some("warn".to_string()),
                log_file: Some("/tmp/d.log".to_string()),
            },
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), None);
        assert_eq!(resolved.log_level, LevelFilter::Warn);
        assert_eq!(resolved.log_file, PathBuf::from("/tmp/d.log"));

        let bad = DossierConfig {
            general: GeneralConfig {
                log_level: Some("loud".to_string()),
                log_file: None,
            },
            ..Default::default()
        };
        let resolved = resolve_with_env(&bad, &CliOverrides::default(), None);
        assert_eq!(resolved.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_missing_file_generates_default() {
        let dir = std::env::temp_dir().join(format!("dossier-config-test-{}", std::process::id()));
        let path = dir.join("config.toml");
        let _ = fs::remove_file(&path);

        let config = load_config_from(&path).unwrap();
        assert!(config.content.url.is_none());
        assert!(path.exists());

        // The generated file is all comments, so it parses back to defaults.
        let reloaded = load_config_from(&path).unwrap();
        assert!(reloaded.content.url.is_none());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = std::env::temp_dir().join(format!("dossier-bad-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, "[content\nurl = ").unwrap();

        assert!(matches!(load_config_from(&path), Err(ConfigError::Parse(_))));
        let _ = fs::remove_dir_all(&dir);
    }
}
