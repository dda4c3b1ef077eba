use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::character::avatar::DEFAULT_GALLERY_URL;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub tui: TuiConfig,
    pub export: ExportConfig,
    pub gallery: GalleryConfig,
}

/// TUI-specific configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Tick interval in milliseconds for the event loop.
    pub tick_rate_ms: u64,
    /// Enable mouse support in the terminal.
    pub mouse_enabled: bool,
}

/// Where exported sheets are written.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Override the default export directory.
    pub dir: Option<PathBuf>,
}

/// Official avatar gallery.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    pub url: String,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 50,
            mouse_enabled: false,
        }
    }
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_GALLERY_URL.to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `path`, or `~/.config/arcadia/config.toml` when `None`.
    /// Returns `Default` if the file is missing or unparseable.
    pub fn load(path: Option<&Path>) -> Self {
        let config_path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_path);
        match std::fs::read_to_string(&config_path) {
            Ok(contents) => Self::parse(&contents, &config_path),
            Err(_) => {
                log::debug!(
                    "No config file at {}, using defaults",
                    config_path.display()
                );
                Self::default()
            }
        }
    }

    fn parse(contents: &str, origin: &Path) -> Self {
        match toml::from_str(contents) {
            Ok(config) => {
                log::info!("Loaded config from {}", origin.display());
                config
            }
            Err(e) => {
                log::warn!(
                    "Failed to parse config at {}: {e}; using defaults",
                    origin.display()
                );
                Self::default()
            }
        }
    }

    /// Resolved export directory (override, download dir, or cwd).
    pub fn export_dir(&self) -> PathBuf {
        self.export
            .dir
            .clone()
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Default config file location.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("arcadia").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}
