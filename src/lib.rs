//! A floating video panel for [iced](https://github.com/iced-rs/iced).
//!
//! The crate has two halves:
//!
//! - [`Embed`], [`Playlist`] and [`Player`] turn YouTube/Vimeo page URLs into
//!   embed addresses and cycle through them.
//! - [`Panel`] and [`FloatingPanel`] host any content in a box the user can
//!   drag by its body and resize by its bottom-right handle.
//!
//! ```no_run
//! use iced::Element;
//! use iced_floating_video::{EmbedView, FloatingPanel, Panel, Player};
//!
//! #[derive(Clone, Debug)]
//! enum Message {
//!     Next,
//! }
//!
//! struct App {
//!     player: Player,
//!     panel: Panel,
//! }
//!
//! impl App {
//!     fn view(&self) -> Element<'_, Message> {
//!         FloatingPanel::new(
//!             &self.panel,
//!             EmbedView::new(&self.player).on_next(Message::Next),
//!         )
//!         .into()
//!     }
//! }
//! ```

pub mod config;
mod embed;
mod floating_panel;
mod panel;
mod player;
mod playlist;

use thiserror::Error;

pub use config::Config;
pub use embed::{Embed, Playback, Provider};
pub use floating_panel::FloatingPanel;
pub use panel::{Geometry, Interaction, Panel, Settings};
pub use player::{EmbedView, Player};
pub use playlist::Playlist;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Uri(#[from] url::ParseError),
    #[error("unsupported video source: {0}")]
    Unsupported(String),
    #[error("video source has no video id")]
    MissingVideoId,
    #[error("playlist is empty")]
    EmptyPlaylist,
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Config(#[from] toml::de::Error),
    #[error("{0}")]
    Serialize(#[from] toml::ser::Error),
}
