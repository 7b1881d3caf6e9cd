//! Settings parser for config.toml

use std::path::{Path, PathBuf};

use launchdeck_core::prelude::*;

use super::types::Settings;

pub const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "launchdeck";

const DEFAULT_CONFIG: &str = r#"# launchdeck configuration

[api]
endpoint = "https://api.spacex.land/graphql/"
cache_ttl_secs = 30     # 0 disables the response cache

[ui]
page_size = 30          # 30, 50 or 100
"#;

/// Platform config directory for launchdeck, e.g. `~/.config/launchdeck`.
pub fn default_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR))
        .ok_or_else(|| Error::config("Could not determine config directory"))
}

/// Load settings from `config_dir/config.toml`.
///
/// Never fails: a missing file yields defaults, and an unreadable or invalid
/// file is logged and also yields defaults.
pub fn load_settings(config_dir: &Path) -> Settings {
    let config_path = config_dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match read_settings(&config_path) {
        Ok(settings) => {
            debug!("Loaded settings from {:?}", config_path);
            settings
        }
        Err(e) => {
            warn!("{}; using defaults", e);
            Settings::default()
        }
    }
}

/// Read and parse one config file.
pub fn read_settings(config_path: &Path) -> Result<Settings> {
    let content = std::fs::read_to_string(config_path)
        .map_err(|e| Error::config_invalid(config_path, e.to_string()))?;
    toml::from_str(&content).map_err(|e| Error::config_invalid(config_path, e.message()))
}

/// Create the config directory and a commented default config.toml.
///
/// An existing config file is left untouched.
pub fn init_config_dir(config_dir: &Path) -> Result<()> {
    if !config_dir.exists() {
        std::fs::create_dir_all(config_dir)
            .map_err(|e| Error::config(format!("Failed to create config dir: {}", e)))?;
    }

    let config_path = config_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        std::fs::write(&config_path, DEFAULT_CONFIG)
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Created default config at {:?}", config_path);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use launchdeck_core::PageSize;
    use tempfile::tempdir;

    #[test]
    fn test_load_settings_defaults() {
        let temp = tempdir().unwrap();
        let settings = load_settings(temp.path());

        assert_eq!(settings.api.endpoint, "https://api.spacex.land/graphql/");
        assert_eq!(settings.api.cache_ttl_secs, 30);
        assert_eq!(settings.ui.page_size, PageSize::Thirty);
    }

    #[test]
    fn test_load_settings_custom() {
        let temp = tempdir().unwrap();
        let config = r#"
[api]
endpoint = "http://localhost:4000/graphql"
cache_ttl_secs = 0

[ui]
page_size = 50
"#;
        std::fs::write(temp.path().join(CONFIG_FILENAME), config).unwrap();

        let settings = load_settings(temp.path());

        assert_eq!(settings.api.endpoint, "http://localhost:4000/graphql");
        assert!(settings.api.cache_ttl().is_zero());
        assert_eq!(settings.ui.page_size, PageSize::Fifty);
    }

    #[test]
    fn test_load_settings_partial_sections_keep_defaults() {
        let temp = tempdir().unwrap();
        std::fs::write(temp.path().join(CONFIG_FILENAME), "[ui]\npage_size = 100\n").unwrap();

        let settings = load_settings(temp.path());

        assert_eq!(settings.ui.page_size, PageSize::Hundred);
        assert_eq!(settings.api.cache_ttl_secs, 30);
    }

    #[test]
    fn test_load_settings_invalid_toml() {
        let temp = tempdir().unwrap();
        std::fs::write(temp.path().join(CONFIG_FILENAME), "not valid [[[").unwrap();

        let settings = load_settings(temp.path());
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_read_settings_reports_file_and_cause() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[ui]\npage_size = 42\n").unwrap();

        let err = read_settings(&path).unwrap_err();

        match err {
            Error::ConfigInvalid { path: got, message } => {
                assert_eq!(got, path);
                assert!(message.contains("42"));
            }
            other => panic!("expected ConfigInvalid, got {:?}", other),
        }
    }

    #[test]
    fn test_read_settings_missing_file_is_invalid() {
        let temp = tempdir().unwrap();
        let err = read_settings(&temp.path().join(CONFIG_FILENAME)).unwrap_err();
        assert!(matches!(err, Error::ConfigInvalid { .. }));
    }

    #[test]
    fn test_load_settings_rejects_unsupported_page_size() {
        let temp = tempdir().unwrap();
        std::fs::write(temp.path().join(CONFIG_FILENAME), "[ui]\npage_size = 42\n").unwrap();

        let settings = load_settings(temp.path());
        assert_eq!(settings.ui.page_size, PageSize::Thirty);
    }

    #[test]
    fn test_init_config_dir_writes_loadable_default() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join("launchdeck");

        init_config_dir(&dir).unwrap();

        assert!(dir.join(CONFIG_FILENAME).exists());
        assert_eq!(load_settings(&dir), Settings::default());
    }

    #[test]
    fn test_init_config_dir_keeps_existing_file() {
        let temp = tempdir().unwrap();
        std::fs::write(temp.path().join(CONFIG_FILENAME), "[ui]\npage_size = 50\n").unwrap();

        init_config_dir(temp.path()).unwrap();

        let content = std::fs::read_to_string(temp.path().join(CONFIG_FILENAME)).unwrap();
        assert_eq!(content, "[ui]\npage_size = 50\n");
    }
}
