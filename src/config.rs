//! Configuration loading for glint.
//!
//! Handles loading and deserializing settings from `glint.toml`. The
//! file supplies defaults only; every option can still be overridden by
//! a flag. A missing or invalid file falls back to the built-in
//! defaults without aborting the run.

use crate::ui::theme::{ThemeOverrides, ThemeVariant};

use serde::Deserialize;

use std::fs;
use std::path::PathBuf;

/// Raw configuration as read from the toml file.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct RawConfig {
    display: DisplayConfig,
    theme: ThemeOverrides,
}

/// `[display]` table: presentation defaults.
#[derive(Deserialize, Debug)]
#[serde(default)]
struct DisplayConfig {
    icons: bool,
    human_readable: bool,
    dirs_first: bool,
    theme: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            icons: true,
            human_readable: true,
            dirs_first: false,
            theme: "dark".to_string(),
        }
    }
}

/// Processed configuration used by the rest of glint.
#[derive(Debug, Default)]
pub struct Config {
    display: DisplayConfig,
    theme: ThemeOverrides,
}

impl Config {
    /// Loads the configuration from [Config::default_path].
    ///
    /// A missing file is normal and silent; a file that fails to parse
    /// is reported once and ignored.
    pub fn load() -> Self {
        let path = Self::default_path();
        if !path.exists() {
            return Config::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => match toml::from_str::<RawConfig>(&content) {
                Ok(raw) => Config {
                    display: raw.display,
                    theme: raw.theme,
                },
                Err(e) => {
                    eprintln!("gls: ignoring invalid config {}: {}", path.display(), e);
                    Config::default()
                }
            },
            Err(_) => Config::default(),
        }
    }

    /// `GLINT_CONFIG` wins, then `<config dir>/glint/glint.toml`.
    pub fn default_path() -> PathBuf {
        if let Ok(custom) = std::env::var("GLINT_CONFIG")
            && !custom.trim().is_empty()
        {
            return PathBuf::from(custom);
        }
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("glint")
            .join("glint.toml")
    }

    /// Parses one raw config document; split out for tests.
    #[cfg(test)]
    fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        let raw: RawConfig = toml::from_str(content)?;
        Ok(Config {
            display: raw.display,
            theme: raw.theme,
        })
    }

    // Getters

    #[inline]
    pub fn icons(&self) -> bool {
        self.display.icons
    }

    #[inline]
    pub fn human_readable(&self) -> bool {
        self.display.human_readable
    }

    #[inline]
    pub fn dirs_first(&self) -> bool {
        self.display.dirs_first
    }

    pub fn theme_variant(&self) -> ThemeVariant {
        match self.display.theme.as_str() {
            "light" => ThemeVariant::Light,
            _ => ThemeVariant::Dark,
        }
    }

    #[inline]
    pub fn theme_overrides(&self) -> &ThemeOverrides {
        &self.theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_a_file() {
        let config = Config::default();
        assert!(config.icons());
        assert!(config.human_readable());
        assert!(!config.dirs_first());
        assert_eq!(config.theme_variant(), ThemeVariant::Dark);
    }

    #[test]
    fn display_table_overrides_defaults() -> Result<(), Box<dyn std::error::Error>> {
        let config = Config::from_toml(
            r#"
            [display]
            icons = false
            dirs_first = true
            theme = "light"
            "#,
        )?;
        assert!(!config.icons());
        assert!(config.human_readable());
        assert!(config.dirs_first());
        assert_eq!(config.theme_variant(), ThemeVariant::Light);
        Ok(())
    }

    #[test]
    fn unknown_theme_name_falls_back_to_dark() -> Result<(), Box<dyn std::error::Error>> {
        let config = Config::from_toml("[display]\ntheme = \"solarized\"\n")?;
        assert_eq!(config.theme_variant(), ThemeVariant::Dark);
        Ok(())
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(Config::from_toml("display = nonsense").is_err());
    }
}
