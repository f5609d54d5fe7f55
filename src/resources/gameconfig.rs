//! Demo configuration resource.
//!
//! Settings loaded from an INI configuration file, with safe defaults for
//! startup when the file or individual keys are missing.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1280
//! height = 720
//! vsync = true
//! msaa = true
//! target_fps = 120
//!
//! [assets]
//! sprite = assets/blob.png
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TARGET_FPS: u32 = 120;
const DEFAULT_VSYNC: bool = true;
const DEFAULT_MSAA: bool = true;
const DEFAULT_SPRITE_PATH: &str = "assets/blob.png";
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Demo configuration resource.
///
/// Stores window settings and asset paths. `main` loads the file once at
/// startup; load errors are ignored and the defaults win.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Enable vertical sync.
    pub vsync: bool,
    /// Request 4x multisampling.
    pub msaa: bool,
    /// Path to the blob sprite image.
    pub sprite_path: PathBuf,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            vsync: DEFAULT_VSYNC,
            msaa: DEFAULT_MSAA,
            sprite_path: PathBuf::from(DEFAULT_SPRITE_PATH),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }
        if let Some(vsync) = config.getbool("window", "vsync").ok().flatten() {
            self.vsync = vsync;
        }
        if let Some(msaa) = config.getbool("window", "msaa").ok().flatten() {
            self.msaa = msaa;
        }

        // [assets] section
        if let Some(sprite) = config.get("assets", "sprite") {
            self.sprite_path = PathBuf::from(sprite);
        }

        info!(
            "Loaded config: {}x{} window, fps={}, vsync={}, msaa={}, sprite={:?}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.vsync,
            self.msaa,
            self.sprite_path
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    #[allow(dead_code)]
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));
        config.set("window", "vsync", Some(self.vsync.to_string()));
        config.set("window", "msaa", Some(self.msaa.to_string()));
        config.set(
            "assets",
            "sprite",
            Some(self.sprite_path.display().to_string()),
        );

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::new();
        assert_eq!(config.window_size(), (1280, 720));
        assert_eq!(config.target_fps, 120);
        assert!(config.vsync);
        assert!(config.msaa);
        assert_eq!(config.sprite_path, PathBuf::from("assets/blob.png"));
    }

    #[test]
    fn test_with_path_keeps_defaults() {
        let config = GameConfig::with_path("/tmp/does-not-exist.ini");
        assert_eq!(config.config_path, PathBuf::from("/tmp/does-not-exist.ini"));
        assert_eq!(config.window_size(), (1280, 720));
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let mut config = GameConfig::with_path("/tmp/squishy-no-such-config.ini");
        assert!(config.load_from_file().is_err());
        // Defaults survive a failed load.
        assert_eq!(config.window_size(), (1280, 720));
    }
}
