use anyhow::Result;
use directories::ProjectDirs;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use super::AppConfig;

const APP_NAME: &str = "BonsaiSearch";
const CONFIG_FILE: &str = "config.json";

/// Overrides the platform config directory when set.
pub const CONFIG_DIR_ENV: &str = "BONSAI_SEARCH_CONFIG_DIR";

/// Returns the configuration directory for the application.
///
/// `BONSAI_SEARCH_CONFIG_DIR` takes precedence over the platform default.
pub fn get_config_directory() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "bonsaisearch", APP_NAME)
        .map(|proj_dirs| proj_dirs.config_dir().to_path_buf())
}

/// Returns the full path to the configuration file.
pub fn get_config_file_path() -> Option<PathBuf> {
    get_config_directory().map(|dir| dir.join(CONFIG_FILE))
}

fn resolve_config_path(path: Option<&Path>) -> Result<PathBuf> {
    match path {
        Some(p) => Ok(p.to_path_buf()),
        None => get_config_file_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory")),
    }
}

/// Loads the application configuration from `path`, or from the default
/// location when `path` is `None`.
///
/// A missing file is created with defaults. A file that cannot be parsed
/// is migrated if possible, otherwise the defaults are used.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    let config_path = resolve_config_path(path)?;

    if !config_path.exists() {
        tracing::info!(
            "Config file not found, creating default config at {:?}",
            config_path
        );
        let default_config = AppConfig::default();
        save_config(&default_config, Some(&config_path))?;
        return Ok(default_config);
    }

    let config_content = fs::read_to_string(&config_path)?;

    match serde_json::from_str::<AppConfig>(&config_content) {
        Ok(config) => {
            tracing::info!("Loaded config from {:?}", config_path);
            Ok(config)
        }
        Err(e) => {
            tracing::warn!(
                "Failed to parse config file at {:?}: {}. Attempting migration.",
                config_path,
                e
            );
            migrate_legacy_config(&config_content).or_else(|err| {
                tracing::warn!("Migration failed ({}), falling back to defaults.", err);
                Ok(AppConfig::default())
            })
        }
    }
}

/// Fills in missing or null fields of an older or hand-edited config file.
fn migrate_legacy_config(config_content: &str) -> Result<AppConfig> {
    let mut value: Value = serde_json::from_str(config_content)?;
    let obj = value
        .as_object_mut()
        .ok_or_else(|| anyhow::anyhow!("Config is not a JSON object"))?;

    let defaults = AppConfig::default();

    let ensure_field = |obj: &mut serde_json::Map<String, Value>, key: &str, default_val: Value| {
        if !obj.contains_key(key) || obj.get(key) == Some(&Value::Null) {
            obj.insert(key.to_string(), default_val);
        }
    };

    ensure_field(obj, "categories", serde_json::to_value(&defaults.categories)?);
    ensure_field(
        obj,
        "min_query_length",
        serde_json::to_value(defaults.min_query_length)?,
    );
    ensure_field(obj, "window_size", serde_json::to_value(defaults.window_size)?);
    ensure_field(
        obj,
        "window_position",
        serde_json::to_value(defaults.window_position)?,
    );

    let migrated_config: AppConfig = serde_json::from_value(Value::Object(obj.clone()))?;
    tracing::info!("Successfully migrated legacy config");
    Ok(migrated_config)
}

/// Saves the configuration to `path`, or to the default location when `path` is `None`.
pub fn save_config(config: &AppConfig, path: Option<&Path>) -> Result<()> {
    let config_path = resolve_config_path(path)?;

    if let Some(config_dir) = config_path.parent() {
        if !config_dir.as_os_str().is_empty() && !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
            tracing::info!("Created config directory: {:?}", config_dir);
        }
    }

    let config_json = serde_json::to_string_pretty(config)?;
    fs::write(&config_path, config_json)?;
    tracing::info!("Saved config to {:?}", config_path);

    Ok(())
}

// Platform-specific configuration paths for reference:
// macOS:   ~/Library/Application Support/com.bonsaisearch.BonsaiSearch/
// Linux:   ~/.config/bonsaisearch/
// Windows: %APPDATA%/bonsaisearch/BonsaiSearch/config/

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE);

        let config = AppConfig {
            categories: vec!["Fruit".to_string(), "Vegetables".to_string()],
            min_query_length: 3,
            window_size: (640.0, 480.0),
            window_position: (10.0, 20.0),
        };
        save_config(&config, Some(&path)).unwrap();

        let loaded = load_config(Some(&path)).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_is_created_with_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);

        let loaded = load_config(Some(&path)).unwrap();
        assert_eq!(loaded, AppConfig::default());
        assert!(path.exists());
    }

    #[test]
    fn test_partial_config_is_migrated() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, r#"{ "categories": ["one", "two"], "window_size": null }"#).unwrap();

        let loaded = load_config(Some(&path)).unwrap();
        assert_eq!(loaded.categories, vec!["one".to_string(), "two".to_string()]);
        assert_eq!(loaded.min_query_length, crate::config::DEFAULT_MIN_QUERY_LENGTH);
        assert_eq!(loaded.window_size, AppConfig::default().window_size);
    }

    #[test]
    fn test_corrupt_config_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "this is not json").unwrap();

        let loaded = load_config(Some(&path)).unwrap();
        assert_eq!(loaded, AppConfig::default());
    }

    #[test]
    #[serial]
    fn test_env_var_overrides_config_directory() {
        let dir = tempdir().unwrap();
        std::env::set_var(CONFIG_DIR_ENV, dir.path());

        let resolved = get_config_file_path();
        let loaded = AppConfig::load();

        std::env::remove_var(CONFIG_DIR_ENV);

        assert_eq!(resolved, Some(dir.path().join(CONFIG_FILE)));
        assert_eq!(loaded.unwrap(), AppConfig::default());
        assert!(dir.path().join(CONFIG_FILE).exists());
    }
}
