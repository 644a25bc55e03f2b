//! Construction-time configuration for the player and its panel, loadable from TOML.
//!
//! Every key is optional:
//!
//! ```toml
//! videos = ["https://vimeo.com/822195781"]
//! width = 480
//! height = 270
//! x = 10
//! y = 10
//! muted = false
//! show_controls = true
//! ```

use crate::embed::Playback;
use crate::panel::{self, Panel};
use crate::player::Player;
use crate::playlist::{Playlist, SAMPLE_VIDEO};
use crate::Error;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_WIDTH: f32 = 640.0;
pub const DEFAULT_HEIGHT: f32 = 360.0;
pub const DEFAULT_X: f32 = 10.0;
pub const DEFAULT_Y: f32 = 10.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub videos: Vec<String>,
    pub width: f32,
    pub height: f32,
    pub x: f32,
    pub y: f32,
    pub muted: bool,
    pub show_controls: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            videos: vec![SAMPLE_VIDEO.to_owned()],
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            x: DEFAULT_X,
            y: DEFAULT_Y,
            muted: true,
            show_controls: true,
        }
    }
}

impl Config {
    pub fn from_toml_str(source: &str) -> Result<Self, Error> {
        Ok(toml::from_str(source)?)
    }

    pub fn to_toml_string(&self) -> Result<String, Error> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn playback(&self) -> Playback {
        Playback {
            muted: self.muted,
            controls: self.show_controls,
        }
    }

    /// Builds the player. An empty `videos` list is an error.
    pub fn player(&self) -> Result<Player, Error> {
        let playlist = Playlist::new(self.videos.iter().cloned())?;
        Ok(Player::new(playlist, self.playback()))
    }

    pub fn panel(&self) -> Panel {
        Panel::new(panel::Settings {
            position: iced::Point::new(self.x, self.y),
            size: iced::Size::new(self.width, self.height),
            ..panel::Settings::default()
        })
    }
}

pub fn load_from_path(path: &Path) -> Result<Config, Error> {
    let content = fs::read_to_string(path)?;
    let config = Config::from_toml_str(&content)?;
    log::debug!("loaded {} video(s) from {}", config.videos.len(), path.display());
    Ok(config)
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<(), Error> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, config.to_toml_string()?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Interaction;
    use tempfile::tempdir;

    #[test]
    fn empty_document_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.videos, vec![SAMPLE_VIDEO.to_owned()]);
        assert!(config.muted);
        assert!(config.show_controls);
    }

    #[test]
    fn partial_document_overrides_given_keys() {
        let config = Config::from_toml_str(
            r#"
            videos = ["https://vimeo.com/822195781"]
            width = 320
            muted = false
            "#,
        )
        .unwrap();
        assert_eq!(config.width, 320.0);
        assert_eq!(config.height, DEFAULT_HEIGHT);
        assert!(!config.muted);

        let player = config.player().unwrap();
        assert_eq!(
            player.embed().unwrap().url().as_str(),
            "https://player.vimeo.com/video/822195781?autoplay=1&muted=0&controls=1"
        );
    }

    #[test]
    fn panel_starts_at_configured_geometry() {
        let config = Config {
            x: 40.0,
            y: 50.0,
            width: 200.0,
            height: 100.0,
            ..Config::default()
        };
        let panel = config.panel();
        assert_eq!(panel.position(), iced::Point::new(40.0, 50.0));
        assert_eq!(panel.size(), iced::Size::new(200.0, 100.0));
        assert_eq!(panel.interaction(), Interaction::Idle);
    }

    #[test]
    fn empty_videos_cannot_build_player() {
        let config = Config::from_toml_str("videos = []").unwrap();
        assert!(matches!(config.player(), Err(Error::EmptyPlaylist)));
    }

    #[test]
    fn invalid_document_is_config_error() {
        let err = Config::from_toml_str("width = \"wide\"").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn save_and_load_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("panel.toml");
        let config = Config {
            videos: vec!["https://youtu.be/abc".to_owned()],
            show_controls: false,
            ..Config::default()
        };
        save_to_path(&config, &path).unwrap();
        assert_eq!(load_from_path(&path).unwrap(), config);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let err = load_from_path(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
