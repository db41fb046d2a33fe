use std::path::{Path, PathBuf};
use std::time::Duration;

use config::ConfigError;
use serde::Deserialize;

use crate::presentation::config::{keybindings::KeyBindings, styles::Styles};
use crate::utils;

const CONFIG: &str = include_str!("../../.config/config.json5");

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: KeyBindings,
    #[serde(default)]
    pub styles: Styles,
    /// Terminal width (columns) below which the compact layout is used
    #[serde(default = "default_compact_width")]
    pub compact_width: u16,
    #[serde(default = "default_live_demo_interval_ms")]
    pub live_demo_interval_ms: u64,
    #[serde(default = "default_count_up_ms")]
    pub count_up_ms: u64,
    #[serde(default = "default_assets_dir")]
    pub assets_dir: PathBuf,
    /// External deck file; the built-in deck is used when absent
    #[serde(default)]
    pub deck: Option<PathBuf>,
}

fn default_compact_width() -> u16 {
    80
}

fn default_live_demo_interval_ms() -> u64 {
    2000
}

fn default_count_up_ms() -> u64 {
    800
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from("assets")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config: AppConfig::default(),
            keybindings: KeyBindings::default(),
            styles: Styles::default(),
            compact_width: default_compact_width(),
            live_demo_interval_ms: default_live_demo_interval_ms(),
            count_up_ms: default_count_up_ms(),
            assets_dir: default_assets_dir(),
            deck: None,
        }
    }
}

impl Config {
    /// Built-in defaults only, without looking at the filesystem
    pub fn embedded() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    /// Defaults merged with the user's config directory
    pub fn new() -> Result<Self, ConfigError> {
        Self::load(&utils::get_config_dir())
    }

    pub fn load(config_dir: &Path) -> Result<Self, ConfigError> {
        let default_config = Self::embedded()?;
        let data_dir = utils::get_data_dir();
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().to_string())?
            .set_default("_config_dir", config_dir.to_string_lossy().to_string())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            log::info!(
                "No configuration file in {}, using built-in defaults",
                config_dir.display()
            );
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;

        // Merge default keybindings into user config (flat mapping)
        for (keyseq, action) in default_config.keybindings.iter() {
            cfg.keybindings
                .entry(keyseq.clone())
                .or_insert_with(|| *action);
        }
        for (style_key, style) in default_config.styles.iter() {
            cfg.styles
                .entry(style_key.clone())
                .or_insert_with(|| *style);
        }

        if cfg.compact_width == 0 {
            log::warn!("compact_width must be positive, using {}", default_compact_width());
            cfg.compact_width = default_compact_width();
        }

        Ok(cfg)
    }

    pub fn live_demo_interval(&self) -> Duration {
        Duration::from_millis(self.live_demo_interval_ms)
    }

    pub fn count_up(&self) -> Duration {
        Duration::from_millis(self.count_up_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::config::Action;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;
    use ratatui::style::{Color, Style};

    #[test]
    fn test_embedded_config() -> Result<(), ConfigError> {
        let cfg = Config::embedded()?;
        assert_eq!(cfg.compact_width, 80);
        assert_eq!(cfg.live_demo_interval_ms, 2000);
        assert_eq!(cfg.count_up_ms, 800);
        assert_eq!(cfg.assets_dir, PathBuf::from("assets"));
        assert_eq!(cfg.deck, None);
        assert_eq!(
            cfg.keybindings
                .action_for(KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE)),
            Some(Action::Next)
        );
        assert_eq!(
            cfg.keybindings
                .action_for(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)),
            Some(Action::CloseMenu)
        );
        Ok(())
    }

    #[test]
    fn test_missing_user_config_is_not_an_error() -> Result<(), ConfigError> {
        let dir = tempfile::tempdir().map_err(|e| ConfigError::Foreign(Box::new(e)))?;
        let cfg = Config::load(dir.path())?;
        assert_eq!(cfg.compact_width, 80);
        assert_eq!(
            cfg.keybindings
                .action_for(KeyEvent::new(KeyCode::Right, KeyModifiers::NONE)),
            Some(Action::Next)
        );
        Ok(())
    }

    #[test]
    fn test_user_config_merges_over_defaults() -> Result<(), ConfigError> {
        let dir = tempfile::tempdir().map_err(|e| ConfigError::Foreign(Box::new(e)))?;
        std::fs::write(
            dir.path().join("config.json5"),
            r#"{
                keybindings: { "<x>": "Quit" },
                styles: { "title": "yellow" },
                compact_width: 100,
                assets_dir: "/opt/hawkshield/assets",
            }"#,
        )
        .map_err(|e| ConfigError::Foreign(Box::new(e)))?;

        let cfg = Config::load(dir.path())?;
        assert_eq!(cfg.compact_width, 100);
        assert_eq!(cfg.assets_dir, PathBuf::from("/opt/hawkshield/assets"));
        assert_eq!(
            cfg.keybindings
                .action_for(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE)),
            Some(Action::Quit)
        );
        // defaults still present
        assert_eq!(
            cfg.keybindings
                .action_for(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)),
            Some(Action::Quit)
        );
        assert_eq!(cfg.styles.get("title"), Some(&Style::default().fg(Color::Yellow)));
        assert!(cfg.styles.contains_key("accent"));
        Ok(())
    }
}
