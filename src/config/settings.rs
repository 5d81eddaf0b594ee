use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use super::{AppConfig, IconEntry};
use crate::core::CoreError;

const APP_NAME: &str = "FileIcons";
const CONFIG_FILE: &str = "config.json";

/// Returns the platform-specific configuration directory for the application.
pub fn get_config_directory() -> Option<PathBuf> {
    ProjectDirs::from("com", "fileicons", APP_NAME)
        .map(|proj_dirs| proj_dirs.config_dir().to_path_buf())
}

/// Returns the full path to the configuration file.
pub fn get_config_file_path() -> Option<PathBuf> {
    get_config_directory().map(|dir| dir.join(CONFIG_FILE))
}

fn resolve_config_path(path: Option<&Path>) -> Result<PathBuf> {
    match path {
        Some(path) => Ok(path.to_path_buf()),
        None => get_config_file_path().context("Could not determine config directory"),
    }
}

/// Loads the configuration from `path`, or from the platform config file.
///
/// A missing file is created with defaults. A file that cannot be parsed is
/// logged and replaced by defaults in memory, so a broken config never stops
/// icon resolution.
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
                "Failed to parse config file at {:?}: {}. Attempting legacy migration.",
                config_path,
                e
            );
            migrate_legacy_config(&config_content).or_else(|migration_error| {
                tracing::warn!(
                    "Legacy migration failed: {}. Falling back to default config.",
                    migration_error
                );
                Ok(AppConfig::default())
            })
        }
    }
}

/// Older configs stored `extra_icons` as a `{ key: locator }` object.
fn migrate_legacy_config(config_content: &str) -> Result<AppConfig> {
    let mut value: Value = serde_json::from_str(config_content)?;
    let obj = value
        .as_object_mut()
        .ok_or_else(|| anyhow::anyhow!("Config is not a JSON object"))?;

    if let Some(Value::Object(legacy_icons)) = obj.get("extra_icons") {
        let icons = icon_entries_from_object(legacy_icons)?;
        obj.insert("extra_icons".to_string(), serde_json::to_value(icons)?);
    }

    let migrated_config: AppConfig = serde_json::from_value(value)?;
    tracing::info!("Successfully migrated legacy config");
    Ok(migrated_config)
}

/// Saves the configuration to `path`, or to the platform config file.
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

/// Reads an ordered icon table from a JSON file.
///
/// Accepts an array of `{"key", "locator"}` objects, or a plain
/// `{ key: locator }` object whose declared order is kept.
pub fn load_icon_table(path: &Path) -> Result<Vec<IconEntry>, CoreError> {
    let content = fs::read_to_string(path).map_err(|e| CoreError::Io(e, path.to_path_buf()))?;
    let table_error = |e: serde_json::Error| CoreError::IconTable(e, path.to_path_buf());

    match serde_json::from_str::<Vec<IconEntry>>(&content) {
        Ok(entries) => Ok(entries),
        Err(array_error) => {
            let value: Value = serde_json::from_str(&content).map_err(table_error)?;
            match value {
                Value::Object(map) => icon_entries_from_object(&map).map_err(table_error),
                _ => Err(table_error(array_error)),
            }
        }
    }
}

fn icon_entries_from_object(
    map: &serde_json::Map<String, Value>,
) -> Result<Vec<IconEntry>, serde_json::Error> {
    map.iter()
        .map(|(key, locator)| {
            let locator: String = serde_json::from_value(locator.clone())?;
            Ok(IconEntry::new(key.clone(), locator))
        })
        .collect()
}

// Platform-specific configuration paths for reference:
// macOS:   ~/Library/Application Support/com.fileicons.FileIcons/
// Linux:   ~/.config/fileicons/
// Windows: %APPDATA%/fileicons/FileIcons/config/

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use tracing_test::traced_test;

    #[test]
    fn test_missing_config_is_created_with_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE);

        let config = load_config(Some(&path)).unwrap();

        assert_eq!(config, AppConfig::default());
        assert!(path.exists());
    }

    #[test]
    fn test_config_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let config = AppConfig {
            extra_icons: vec![IconEntry::new("folder-projects", "custom/projects.svg")],
            use_category_icons: true,
            max_depth: None,
            ..Default::default()
        };

        save_config(&config, Some(&path)).unwrap();

        assert_eq!(load_config(Some(&path)).unwrap(), config);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, r#"{"include_hidden": true}"#).unwrap();

        let config = load_config(Some(&path)).unwrap();

        assert!(config.include_hidden);
        assert_eq!(config.max_depth, AppConfig::default().max_depth);
    }

    #[traced_test]
    #[test]
    fn test_corrupt_config_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "{ not json").unwrap();

        assert_eq!(load_config(Some(&path)).unwrap(), AppConfig::default());
        assert!(logs_contain("Legacy migration failed"));
        assert!(logs_contain("Falling back to default config"));
    }

    #[traced_test]
    #[test]
    fn test_legacy_icon_object_is_migrated_in_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(
            &path,
            r#"{"extra_icons": {"zeta": "z.svg", "alpha": "a.svg"}, "use_category_icons": true}"#,
        )
        .unwrap();

        let config = load_config(Some(&path)).unwrap();

        assert_eq!(
            config.extra_icons,
            vec![
                IconEntry::new("zeta", "z.svg"),
                IconEntry::new("alpha", "a.svg"),
            ]
        );
        assert!(config.use_category_icons);
        assert!(logs_contain("Attempting legacy migration"));
        assert!(!logs_contain("Falling back to default config"));
    }

    #[test]
    fn test_icon_table_accepts_array_and_object() {
        let dir = tempdir().unwrap();
        let array_path = dir.path().join("array.json");
        let object_path = dir.path().join("object.json");
        fs::write(
            &array_path,
            r#"[{"key": "b", "locator": "b.svg"}, {"key": "a", "locator": "a.svg"}]"#,
        )
        .unwrap();
        fs::write(&object_path, r#"{"b": "b.svg", "a": "a.svg"}"#).unwrap();

        let expected = vec![
            IconEntry::new("b", "b.svg"),
            IconEntry::new("a", "a.svg"),
        ];
        assert_eq!(load_icon_table(&array_path).unwrap(), expected);
        assert_eq!(load_icon_table(&object_path).unwrap(), expected);
    }

    #[test]
    fn test_icon_table_errors_carry_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        match load_icon_table(&path) {
            Err(CoreError::IconTable(_, error_path)) => assert_eq!(error_path, path),
            other => panic!("expected icon table error, got {other:?}"),
        }

        let missing = dir.path().join("missing.json");
        let missing_table = load_icon_table(&missing);
        assert!(matches!(missing_table, Err(CoreError::Io(_, _))));
    }
}
