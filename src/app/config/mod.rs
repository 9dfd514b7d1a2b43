// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[viewer]` - Swipe threshold and full-resolution size
//! - `[prefetch]` - Asset cache limits
//! - `[diagnostics]` - Event buffer and stderr echo
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI flag or `ICED_GALLERY_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_gallery::app::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load_with_override(None);
//!
//! config.general.language = Some("fr".to_string());
//! config::save_to_path(&config, std::path::Path::new("settings.toml"))
//!     .expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::diagnostics::BufferCapacity;
use crate::domain::gallery::{FullResolution, SwipeThreshold};
use crate::error::{Error, Result};
use crate::media::prefetch::PrefetchConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Lightbox viewer settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewerConfig {
    /// Horizontal swipe distance (logical pixels) that triggers navigation.
    #[serde(
        default = "default_swipe_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub swipe_threshold: Option<f32>,

    /// Width substituted into sized asset URLs for the viewer.
    #[serde(
        default = "default_full_resolution",
        skip_serializing_if = "Option::is_none"
    )]
    pub full_resolution_width: Option<u32>,

    /// Height substituted into sized asset URLs for the viewer.
    #[serde(
        default = "default_full_resolution",
        skip_serializing_if = "Option::is_none"
    )]
    pub full_resolution_height: Option<u32>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: default_swipe_threshold(),
            full_resolution_width: default_full_resolution(),
            full_resolution_height: default_full_resolution(),
        }
    }
}

impl ViewerConfig {
    /// Swipe threshold clamped to its valid range.
    #[must_use]
    pub fn swipe_threshold(&self) -> SwipeThreshold {
        self.swipe_threshold
            .map(SwipeThreshold::new)
            .unwrap_or_default()
    }

    /// Full-resolution size clamped to its valid range.
    #[must_use]
    pub fn full_resolution(&self) -> FullResolution {
        FullResolution::new(
            self.full_resolution_width.unwrap_or(DEFAULT_FULL_RESOLUTION),
            self.full_resolution_height.unwrap_or(DEFAULT_FULL_RESOLUTION),
        )
    }
}

/// Asset cache settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PrefetchSettings {
    /// Whether neighbor assets are fetched ahead of navigation.
    #[serde(default = "default_true", skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Maximum number of cached assets.
    #[serde(
        default = "default_prefetch_max_images",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_images: Option<usize>,

    /// Cache budget in megabytes of decoded pixels.
    #[serde(
        default = "default_prefetch_max_megabytes",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_megabytes: Option<u32>,
}

impl Default for PrefetchSettings {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            max_images: default_prefetch_max_images(),
            max_megabytes: default_prefetch_max_megabytes(),
        }
    }
}

impl PrefetchSettings {
    /// Builds the cache configuration, clamping limits to their valid ranges.
    #[must_use]
    pub fn cache_config(&self) -> PrefetchConfig {
        let megabytes = self
            .max_megabytes
            .unwrap_or(DEFAULT_PREFETCH_MAX_MB)
            .clamp(MIN_PREFETCH_MAX_MB, MAX_PREFETCH_MAX_MB);
        let config = PrefetchConfig::new(
            megabytes as usize * 1024 * 1024,
            self.max_images.unwrap_or(DEFAULT_PREFETCH_MAX_IMAGES),
        );
        if self.enabled.unwrap_or(true) {
            config
        } else {
            PrefetchConfig {
                enabled: false,
                ..config
            }
        }
    }
}

/// Diagnostics settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticsConfig {
    /// Number of events kept in memory.
    #[serde(
        default = "default_buffer_capacity",
        skip_serializing_if = "Option::is_none"
    )]
    pub buffer_capacity: Option<usize>,

    /// Echo every event to stderr as a JSON line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_to_stderr: Option<bool>,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: default_buffer_capacity(),
            log_to_stderr: Some(false),
        }
    }
}

impl DiagnosticsConfig {
    #[must_use]
    pub fn buffer_capacity(&self) -> BufferCapacity {
        self.buffer_capacity
            .map(BufferCapacity::new)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn log_to_stderr(&self) -> bool {
        self.log_to_stderr.unwrap_or(false)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub viewer: ViewerConfig,

    #[serde(default)]
    pub prefetch: PrefetchSettings,

    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_true() -> Option<bool> {
    Some(true)
}

fn default_swipe_threshold() -> Option<f32> {
    Some(DEFAULT_SWIPE_THRESHOLD)
}

fn default_full_resolution() -> Option<u32> {
    Some(DEFAULT_FULL_RESOLUTION)
}

fn default_prefetch_max_images() -> Option<usize> {
    Some(DEFAULT_PREFETCH_MAX_IMAGES)
}

fn default_prefetch_max_megabytes() -> Option<u32> {
    Some(DEFAULT_PREFETCH_MAX_MB)
}

fn default_buffer_capacity() -> Option<usize> {
    Some(DEFAULT_DIAGNOSTICS_BUFFER)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from `base_dir`, or from the default directory
/// when `None`.
///
/// Returns a tuple of (config, optional_warning). A missing file yields the
/// defaults silently; an unreadable or invalid file yields the defaults and
/// the i18n key of a warning.
#[must_use]
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(_) => {
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.language, None);
        assert_eq!(config.viewer.swipe_threshold().value(), 40.0);
        assert_eq!(config.viewer.full_resolution(), FullResolution::default());
        assert_eq!(config.prefetch.max_images, Some(16));
        assert_eq!(config.prefetch.max_megabytes, Some(64));
        assert_eq!(config.diagnostics.buffer_capacity().value(), 500);
        assert!(!config.diagnostics.log_to_stderr());
    }

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        config.viewer.swipe_threshold = Some(75.0);
        config.viewer.full_resolution_width = Some(2000);
        config.prefetch.enabled = Some(false);
        config.diagnostics.log_to_stderr = Some(true);

        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn partial_file_fills_missing_sections_with_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[viewer]\nswipe_threshold = 60.0\n")
            .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.viewer.swipe_threshold().value(), 60.0);
        assert_eq!(loaded.viewer.full_resolution_height, Some(1400));
        assert_eq!(loaded.prefetch, PrefetchSettings::default());
    }

    #[test]
    fn out_of_range_values_are_clamped_on_use() {
        let mut config = Config::default();
        config.viewer.swipe_threshold = Some(1.0);
        config.viewer.full_resolution_width = Some(100_000);
        config.prefetch.max_megabytes = Some(1);
        config.diagnostics.buffer_capacity = Some(1);

        assert_eq!(config.viewer.swipe_threshold().value(), MIN_SWIPE_THRESHOLD);
        assert_eq!(config.viewer.full_resolution().width(), 8192);
        assert_eq!(
            config.prefetch.cache_config().max_bytes,
            MIN_PREFETCH_MAX_MB as usize * 1024 * 1024
        );
        assert_eq!(config.diagnostics.buffer_capacity().value(), 10);
    }

    #[test]
    fn disabled_prefetch_produces_disabled_cache_config() {
        let settings = PrefetchSettings {
            enabled: Some(false),
            ..PrefetchSettings::default()
        };
        assert!(!settings.cache_config().enabled);
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[viewer\nbroken")
            .expect("failed to write corrupted config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn saved_file_is_found_by_load_with_override() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let mut config = Config::default();
        config.general.language = Some("en-US".to_string());

        save_to_path(&config, &temp_dir.path().join(CONFIG_FILE)).expect("failed to save config");
        let (loaded, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert!(warning.is_none());
        assert_eq!(loaded.general.language.as_deref(), Some("en-US"));
    }

    #[test]
    fn saved_config_uses_sectioned_format() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        save_to_path(&Config::default(), &config_path).expect("failed to save config");

        let content = fs::read_to_string(&config_path).expect("failed to read config");
        assert!(content.contains("[viewer]"));
        assert!(content.contains("[prefetch]"));
        assert!(content.contains("[diagnostics]"));
    }
}
