use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_SCREENSHOT_DIR, RAY_COUNT, SCREEN_HEIGHT, SCREEN_WIDTH, TARGET_FPS};
use crate::projector::Viewport;
use crate::renderer::RenderOptions;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error reading config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    pub ray_count: usize,
    pub target_fps: u32,
    pub shade_sides: bool,
    pub show_minimap: bool,
    pub map: Option<PathBuf>,
    pub font: Option<PathBuf>,
    pub screenshot_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            ray_count: RAY_COUNT,
            target_fps: TARGET_FPS,
            shade_sides: false,
            show_minimap: false,
            map: None,
            font: None,
            screenshot_dir: PathBuf::from(DEFAULT_SCREENSHOT_DIR),
        }
    }
}

impl Config {
    /// Reads `path`, falling back to defaults when the file does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let shown = path.display().to_string();
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %shown, "no config file, using defaults");
                return Ok(Config::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: shown,
                    source,
                });
            }
        };
        let config: Config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: shown.clone(),
            source,
        })?;
        config.validate()?;
        tracing::info!(path = %shown, "loaded config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "screen size {}x{} must be non-zero",
                self.width, self.height
            )));
        }
        if self.ray_count == 0 || self.ray_count > self.width {
            return Err(ConfigError::Invalid(format!(
                "ray_count {} must be between 1 and the screen width {}",
                self.ray_count, self.width
            )));
        }
        if self.target_fps == 0 {
            return Err(ConfigError::Invalid("target_fps must be positive".into()));
        }
        Ok(())
    }

    pub fn viewport(&self) -> Viewport {
        Viewport {
            width: self.width,
            height: self.height,
            ray_count: self.ray_count,
            ..Viewport::default()
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            shade_sides: self.shade_sides,
            show_minimap: self.show_minimap,
            show_hud: self.font.is_some(),
        }
    }
}
