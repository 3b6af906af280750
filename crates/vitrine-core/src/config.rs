use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::carousel::{AutoplayOptions, Breakpoint, CarouselOptions, Direction};
use crate::{Error, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub sections: SectionsConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            api: ApiConfig::default(),
            ui: UiConfig::default(),
            sections: SectionsConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the studio's REST backend
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_timeout(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
        }
    }
}

/// Carousel options for the three showcase sections. Defaults
/// reproduce the studio site: an RTL hero deck on a 7-second autoplay,
/// an RTL team roster regrouping with width, and an LTR project strip
/// on a fast cadence. Breakpoint widths are terminal columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionsConfig {
    #[serde(default = "default_hero")]
    pub hero: CarouselOptions,
    #[serde(default = "default_team")]
    pub team: CarouselOptions,
    #[serde(default = "default_showcase")]
    pub showcase: CarouselOptions,
}

impl Default for SectionsConfig {
    fn default() -> Self {
        Self {
            hero: default_hero(),
            team: default_team(),
            showcase: default_showcase(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_base_url() -> String {
    "https://api.vitrine.studio".to_string()
}

fn default_timeout() -> u64 {
    15
}

fn default_tick_rate() -> u64 {
    250
}

fn default_hero() -> CarouselOptions {
    CarouselOptions {
        loop_enabled: true,
        direction: Direction::Rtl,
        autoplay: Some(AutoplayOptions {
            interval_ms: 7000,
            start_playing: true,
        }),
        breakpoints: vec![Breakpoint { min_width: 0, group_size: 1 }],
    }
}

fn default_team() -> CarouselOptions {
    CarouselOptions {
        loop_enabled: true,
        direction: Direction::Rtl,
        autoplay: None,
        breakpoints: vec![
            Breakpoint { min_width: 0, group_size: 1 },
            Breakpoint { min_width: 90, group_size: 2 },
            Breakpoint { min_width: 130, group_size: 3 },
            Breakpoint { min_width: 170, group_size: 4 },
        ],
    }
}

fn default_showcase() -> CarouselOptions {
    CarouselOptions {
        loop_enabled: true,
        direction: Direction::Ltr,
        autoplay: Some(AutoplayOptions {
            interval_ms: 2500,
            start_playing: true,
        }),
        breakpoints: vec![
            Breakpoint { min_width: 0, group_size: 1 },
            Breakpoint { min_width: 110, group_size: 2 },
            Breakpoint { min_width: 170, group_size: 3 },
        ],
    }
}

impl AppConfig {
    /// Load configuration from the default path, falling back to
    /// defaults when no file exists.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| {
                Error::Config(format!(
                    "Failed to parse {}: {}",
                    config_path.display(),
                    e
                ))
            })
        } else {
            Ok(Self::default())
        }
    }

    /// Write the current configuration to the default path.
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Path to the configuration file
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("vitrine")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sections_match_call_sites() {
        let config = AppConfig::default();

        assert!(config.sections.hero.loop_enabled);
        assert!(config.sections.hero.direction.is_rtl());
        let autoplay = config.sections.hero.autoplay.unwrap();
        assert_eq!(autoplay.interval_ms, 7000);
        assert!(autoplay.start_playing);

        assert!(config.sections.team.autoplay.is_none());
        assert_eq!(config.sections.team.breakpoints.len(), 4);

        assert!(!config.sections.showcase.direction.is_rtl());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = AppConfig::default();
        let content = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&content).unwrap();
        assert_eq!(
            parsed.sections.hero.autoplay,
            config.sections.hero.autoplay
        );
        assert_eq!(parsed.api.base_url, config.api.base_url);
        assert_eq!(parsed.ui.tick_rate_ms, config.ui.tick_rate_ms);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let parsed: AppConfig = toml::from_str(
            r#"
            [api]
            base_url = "http://localhost:3000"

            [sections.hero.autoplay]
            interval_ms = 4000
            "#,
        )
        .unwrap();
        assert_eq!(parsed.api.base_url, "http://localhost:3000");
        assert_eq!(parsed.api.request_timeout_secs, 15);
        let autoplay = parsed.sections.hero.autoplay.unwrap();
        assert_eq!(autoplay.interval_ms, 4000);
        assert!(autoplay.start_playing);
        assert_eq!(parsed.sections.team.breakpoints.len(), 4);
    }
}
