use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

const DEFAULT_ENV_PREFIX: &str = "ANIVISION";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub ui: UIConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
    #[serde(default)]
    pub download: DownloadConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CatalogConfig {
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UIConfig {
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Terminal width (columns) at or below which outside clicks close the menu.
    #[serde(default = "default_narrow_width")]
    pub narrow_width: u16,
    #[serde(default = "default_tick_rate", with = "humantime_serde")]
    pub tick_rate: Duration,
}

impl Default for UIConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            narrow_width: default_narrow_width(),
            tick_rate: default_tick_rate(),
        }
    }
}

fn default_theme() -> String {
    "default".into()
}

fn default_narrow_width() -> u16 {
    100
}

fn default_tick_rate() -> Duration {
    Duration::from_millis(120)
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationConfig {
    #[serde(default = "default_notification_ttl", with = "humantime_serde")]
    pub ttl: Duration,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            ttl: default_notification_ttl(),
        }
    }
}

fn default_notification_ttl() -> Duration {
    Duration::from_secs(3)
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DownloadConfig {
    #[serde(default = "default_qualities")]
    pub qualities: Vec<String>,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            qualities: default_qualities(),
        }
    }
}

fn default_qualities() -> Vec<String> {
    vec!["1080p".into(), "720p".into(), "480p".into(), "360p".into()]
}

#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    pub config_file: Option<PathBuf>,
    pub env_prefix: Option<String>,
}

pub fn load(options: LoadOptions) -> Result<Config> {
    let path = options.config_file.or_else(default_config_path);
    let mut cfg = match path {
        Some(path) if path.exists() => read_config_file(&path)?,
        _ => Config::default(),
    };

    let prefix = options.env_prefix.as_deref().unwrap_or(DEFAULT_ENV_PREFIX);
    apply_env(&mut cfg, prefix);

    Ok(cfg)
}

fn read_config_file(path: &Path) -> Result<Config> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;
    let config: Config = serde_yaml::from_str(&data)
        .with_context(|| format!("Failed to parse config file at {}", path.display()))?;
    Ok(config)
}

fn apply_env(cfg: &mut Config, prefix: &str) {
    let upper_prefix = format!("{}_", prefix.to_uppercase());

    for (key, value) in env::vars() {
        if let Some(stripped) = key.strip_prefix(&upper_prefix) {
            let normalized = stripped.to_ascii_lowercase().replace("__", ".");
            apply_env_value(cfg, &normalized, value);
        }
    }
}

fn apply_env_value(cfg: &mut Config, key: &str, value: String) {
    match key {
        "catalog.path" => cfg.catalog.path = Some(PathBuf::from(value)),
        "ui.theme" => cfg.ui.theme = value,
        "ui.narrow_width" => {
            if let Ok(parsed) = value.trim().parse::<u16>() {
                cfg.ui.narrow_width = parsed;
            }
        }
        "ui.tick_rate" => {
            if let Ok(duration) = humantime::parse_duration(value.trim()) {
                cfg.ui.tick_rate = duration;
            }
        }
        "notifications.ttl" => {
            if let Ok(duration) = humantime::parse_duration(value.trim()) {
                cfg.notifications.ttl = duration;
            }
        }
        "download.qualities" => {
            cfg.download.qualities = value
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }
        _ => {}
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("anivision").join("config.yaml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::tempdir;

    fn isolated() -> LoadOptions {
        let dir = tempdir().unwrap();
        LoadOptions {
            config_file: Some(dir.path().join("missing.yaml")),
            env_prefix: Some("ANIVISION_TEST_NONE".into()),
        }
    }

    #[test]
    fn load_defaults_without_files() {
        let cfg = load(isolated()).unwrap();
        assert_eq!(cfg.ui.theme, "default");
        assert_eq!(cfg.ui.narrow_width, 100);
        assert_eq!(cfg.notifications.ttl, Duration::from_secs(3));
        assert_eq!(cfg.download.qualities, ["1080p", "720p", "480p", "360p"]);
        assert!(cfg.catalog.path.is_none());
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(
            &path,
            "catalog:\n  path: /tmp/videos.yaml\nui:\n  narrow_width: 60\nnotifications:\n  ttl: 5s\ndownload:\n  qualities: [4k, 1080p]\n",
        )
        .unwrap();
        let cfg = load(LoadOptions {
            config_file: Some(path),
            env_prefix: Some("ANIVISION_TEST_NONE".into()),
        })
        .unwrap();
        assert_eq!(cfg.catalog.path, Some(PathBuf::from("/tmp/videos.yaml")));
        assert_eq!(cfg.ui.narrow_width, 60);
        assert_eq!(cfg.ui.tick_rate, Duration::from_millis(120));
        assert_eq!(cfg.notifications.ttl, Duration::from_secs(5));
        assert_eq!(cfg.download.qualities, ["4k", "1080p"]);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "ui: [not, a, map").unwrap();
        let err = load(LoadOptions {
            config_file: Some(path),
            env_prefix: Some("ANIVISION_TEST_NONE".into()),
        })
        .unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config file"));
    }

    #[test]
    fn env_overrides() {
        env::set_var("ANIVISION_ENV_TEST_UI__THEME", "dracula");
        env::set_var("ANIVISION_ENV_TEST_NOTIFICATIONS__TTL", "750ms");
        env::set_var("ANIVISION_ENV_TEST_DOWNLOAD__QUALITIES", "720p, 360p");
        let mut options = isolated();
        options.env_prefix = Some("ANIVISION_ENV_TEST".into());
        let cfg = load(options).unwrap();
        assert_eq!(cfg.ui.theme, "dracula");
        assert_eq!(cfg.notifications.ttl, Duration::from_millis(750));
        assert_eq!(cfg.download.qualities, ["720p", "360p"]);
        env::remove_var("ANIVISION_ENV_TEST_UI__THEME");
        env::remove_var("ANIVISION_ENV_TEST_NOTIFICATIONS__TTL");
        env::remove_var("ANIVISION_ENV_TEST_DOWNLOAD__QUALITIES");
    }

    #[test]
    fn env_restores_default_over_file_value() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "ui:\n  narrow_width: 60\nnotifications:\n  ttl: 10s\n").unwrap();
        env::set_var("ANIVISION_RESTORE_TEST_UI__NARROW_WIDTH", "100");
        env::set_var("ANIVISION_RESTORE_TEST_NOTIFICATIONS__TTL", "3s");
        let cfg = load(LoadOptions {
            config_file: Some(path),
            env_prefix: Some("ANIVISION_RESTORE_TEST".into()),
        })
        .unwrap();
        env::remove_var("ANIVISION_RESTORE_TEST_UI__NARROW_WIDTH");
        env::remove_var("ANIVISION_RESTORE_TEST_NOTIFICATIONS__TTL");
        assert_eq!(cfg.ui.narrow_width, 100);
        assert_eq!(cfg.notifications.ttl, Duration::from_secs(3));
    }

    #[test]
    fn unparsable_env_value_keeps_file_value() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "ui:\n  narrow_width: 60\n").unwrap();
        env::set_var("ANIVISION_BADNUM_TEST_UI__NARROW_WIDTH", "wide");
        let cfg = load(LoadOptions {
            config_file: Some(path),
            env_prefix: Some("ANIVISION_BADNUM_TEST".into()),
        })
        .unwrap();
        env::remove_var("ANIVISION_BADNUM_TEST_UI__NARROW_WIDTH");
        assert_eq!(cfg.ui.narrow_width, 60);
    }
}
