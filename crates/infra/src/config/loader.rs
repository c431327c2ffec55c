//! Configuration loader
//!
//! Loads [`ConnectorConfig`] from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `QBGEO_INSTANCE_URL`: Base URL of the platform REST API (required)
//! - `QBGEO_HOST_NAME`: Realm host name (required)
//! - `QBGEO_TARGET_ORIGIN`: Handshake origin (optional)
//! - `QBGEO_TIMEOUT_SECS`: Per-request timeout in seconds (optional)
//!
//! ## File Locations
//! The loader probes `qbgeo.{json,toml}` then `config.{json,toml}` in the
//! current working directory, then the same names next to the executable.

use std::path::{Path, PathBuf};

use qbgeo_domain::constants::{
    ENV_HOST_NAME, ENV_INSTANCE_URL, ENV_TARGET_ORIGIN, ENV_TIMEOUT_SECS,
};
use qbgeo_domain::{ConnectorConfig, ConnectorError, Result};

use crate::errors::InfraError;

const CONFIG_FILE_NAMES: [&str; 4] = ["qbgeo.json", "qbgeo.toml", "config.json", "config.toml"];

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If any required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `ConnectorError::Configuration` if configuration cannot be
/// loaded from either source or the file is invalid.
pub fn load() -> Result<ConnectorConfig> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `ConnectorError::Configuration` if a required variable is
/// missing or the timeout is not a whole number of seconds.
pub fn load_from_env() -> Result<ConnectorConfig> {
    let instance_url = env_var(ENV_INSTANCE_URL)?;
    let host_name = env_var(ENV_HOST_NAME)?;
    let target_origin = optional_env_var(ENV_TARGET_ORIGIN);
    let timeout_secs = optional_env_var(ENV_TIMEOUT_SECS)
        .map(|s| {
            s.parse::<u64>()
                .map_err(|e| ConnectorError::Configuration(format!("Invalid timeout: {e}")))
        })
        .transpose()?;

    Ok(ConnectorConfig { instance_url, host_name, target_origin, timeout_secs })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations. The format is
/// detected by file extension.
///
/// # Errors
/// Returns `ConnectorError::Configuration` if the file is missing,
/// unreadable, or not valid JSON/TOML for [`ConnectorConfig`].
pub fn load_from_file(path: Option<PathBuf>) -> Result<ConnectorConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(ConnectorError::Configuration(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            ConnectorError::Configuration(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| ConnectorError::Configuration(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

fn parse_config(contents: &str, path: &Path) -> Result<ConnectorConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents).map_err(|e| InfraError::from(e).into()),
        "json" => serde_json::from_str(contents)
            .map_err(|e| ConnectorError::Configuration(format!("Invalid JSON format: {e}"))),
        _ => Err(ConnectorError::Configuration(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe the standard locations for a configuration file
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd);
    }
    if let Some(exe_dir) =
        std::env::current_exe().ok().and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        dirs.push(exe_dir);
    }

    dirs.iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.exists())
}

fn env_var(key: &str) -> Result<String> {
    optional_env_var(key).ok_or_else(|| {
        ConnectorError::Configuration(format!("Missing required environment variable: {key}"))
    })
}

/// Value of `key`, treating an empty variable as unset.
fn optional_env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Mutex;

    use once_cell::sync::Lazy;
    use tempfile::NamedTempFile;

    use super::*;

    static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    fn clear_env() {
        for key in [ENV_INSTANCE_URL, ENV_HOST_NAME, ENV_TARGET_ORIGIN, ENV_TIMEOUT_SECS] {
            std::env::remove_var(key);
        }
    }

    fn temp_config(contents: &str, extension: &str) -> PathBuf {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(contents.as_bytes()).unwrap();
        let path = temp_file.path().with_extension(extension);
        std::fs::copy(temp_file.path(), &path).unwrap();
        path
    }

    #[test]
    fn test_load_from_env_all_vars_set() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var(ENV_INSTANCE_URL, "https://api.quickbase.com/v1");
        std::env::set_var(ENV_HOST_NAME, "demo.quickbase.com");
        std::env::set_var(ENV_TARGET_ORIGIN, "https://apps.example.com");
        std::env::set_var(ENV_TIMEOUT_SECS, "30");

        let config = load_from_env().unwrap();
        assert_eq!(config.instance_url, "https://api.quickbase.com/v1");
        assert_eq!(config.host_name, "demo.quickbase.com");
        assert_eq!(config.target_origin.as_deref(), Some("https://apps.example.com"));
        assert_eq!(config.timeout_secs, Some(30));

        clear_env();
    }

    #[test]
    fn test_load_from_env_optional_vars_absent() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var(ENV_INSTANCE_URL, "https://api.quickbase.com/v1");
        std::env::set_var(ENV_HOST_NAME, "demo.quickbase.com");
        std::env::set_var(ENV_TARGET_ORIGIN, "");

        let config = load_from_env().unwrap();
        assert_eq!(config.target_origin, None);
        assert_eq!(config.timeout_secs, None);

        clear_env();
    }

    #[test]
    fn test_load_from_env_missing_var() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var(ENV_INSTANCE_URL, "https://api.quickbase.com/v1");

        let err = load_from_env().unwrap_err();
        assert!(matches!(err, ConnectorError::Configuration(ref m) if m.contains(ENV_HOST_NAME)));

        clear_env();
    }

    #[test]
    fn test_load_from_env_invalid_timeout() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var(ENV_INSTANCE_URL, "https://api.quickbase.com/v1");
        std::env::set_var(ENV_HOST_NAME, "demo.quickbase.com");
        std::env::set_var(ENV_TIMEOUT_SECS, "soon");

        assert!(matches!(load_from_env(), Err(ConnectorError::Configuration(_))));

        clear_env();
    }

    #[test]
    fn test_load_from_file_json() {
        let path = temp_config(
            r#"{
                "instance_url": "https://api.quickbase.com/v1",
                "host_name": "demo.quickbase.com",
                "timeout_secs": 10
            }"#,
            "json",
        );

        let config = load_from_file(Some(path.clone())).unwrap();
        assert_eq!(config.host_name, "demo.quickbase.com");
        assert_eq!(config.timeout_secs, Some(10));
        assert_eq!(config.handshake_origin(), "https://demo.quickbase.com");

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_from_file_toml() {
        let path = temp_config(
            r#"
instance_url = "https://api.quickbase.com/v1"
host_name = "demo.quickbase.com"
target_origin = "https://apps.example.com"
"#,
            "toml",
        );

        let config = load_from_file(Some(path.clone())).unwrap();
        assert_eq!(config.target_origin.as_deref(), Some("https://apps.example.com"));

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_from_file_not_found() {
        let result = load_from_file(Some(PathBuf::from("/nonexistent/qbgeo.json")));
        assert!(matches!(result, Err(ConnectorError::Configuration(_))));
    }

    #[test]
    fn test_parse_config_invalid_toml() {
        let result = parse_config("host_name = ", Path::new("qbgeo.toml"));
        assert!(matches!(result, Err(ConnectorError::Configuration(ref m)) if m.contains("TOML")));
    }

    #[test]
    fn test_parse_config_missing_field() {
        let result = parse_config(r#"{ "host_name": "demo.quickbase.com" }"#, Path::new("a.json"));
        assert!(matches!(result, Err(ConnectorError::Configuration(_))));
    }

    #[test]
    fn test_parse_config_unsupported_format() {
        let result = parse_config("some content", Path::new("qbgeo.yaml"));
        assert!(result.is_err(), "Should fail with unsupported format");
    }
}
