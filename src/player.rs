use crate::embed::{Embed, Playback};
use crate::playlist::{Playlist, SAMPLE_VIDEOS};
use crate::Error;
use iced::widget::{button, column, container, text};
use iced::{Alignment, Color, Element, Length};

/// A playlist paired with the embed address of its current entry.
#[derive(Debug)]
pub struct Player {
    playlist: Playlist,
    playback: Playback,
    embed: Result<Embed, Error>,
}

impl Player {
    /// Creates a player showing the first entry of `playlist`.
    pub fn new(playlist: Playlist, playback: Playback) -> Self {
        let embed = Embed::resolve(playlist.current(), playback);
        Player {
            playlist,
            playback,
            embed,
        }
    }

    /// A player over the bundled demo videos.
    pub fn sample() -> Self {
        let playlist = Playlist::new(SAMPLE_VIDEOS).unwrap_or_default();
        Player::new(playlist, Playback::default())
    }

    /// Advances to the next video, wrapping around, and resolves its embed address.
    pub fn next(&mut self) -> Result<&Embed, &Error> {
        let source = self.playlist.advance();
        self.embed = Embed::resolve(source, self.playback);
        self.embed.as_ref()
    }

    /// Embed address of the current video, or why it could not be built.
    pub fn embed(&self) -> Result<&Embed, &Error> {
        self.embed.as_ref()
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    pub fn playback(&self) -> Playback {
        self.playback
    }
}

impl Default for Player {
    fn default() -> Self {
        Player::new(Playlist::default(), Playback::default())
    }
}

/// View of a [`Player`]: the embed surface plus a "Next Video" button.
pub struct EmbedView<'a, Message> {
    player: &'a Player,
    width: Length,
    height: Length,
    on_next: Option<Message>,
}

impl<'a, Message> EmbedView<'a, Message> {
    pub fn new(player: &'a Player) -> Self {
        EmbedView {
            player,
            width: Length::Fill,
            height: Length::Fill,
            on_next: None,
        }
    }

    /// Sets the width of the embed surface.
    pub fn width(self, width: impl Into<Length>) -> Self {
        EmbedView {
            width: width.into(),
            ..self
        }
    }

    /// Sets the height of the embed surface.
    pub fn height(self, height: impl Into<Length>) -> Self {
        EmbedView {
            height: height.into(),
            ..self
        }
    }

    /// Message to send when "Next Video" is pressed.
    /// The button is disabled without one.
    pub fn on_next(self, on_next: Message) -> Self {
        EmbedView {
            on_next: Some(on_next),
            ..self
        }
    }
}

impl<'a, Message> From<EmbedView<'a, Message>> for Element<'a, Message>
where
    Message: 'a + Clone,
{
    fn from(view: EmbedView<'a, Message>) -> Self {
        let surface: Element<'a, Message> = match view.player.embed() {
            Ok(embed) => column![
                text(embed.provider().to_string()).size(14.0),
                text(embed.url().as_str()).size(12.0),
            ]
            .spacing(4.0)
            .align_x(Alignment::Center)
            .into(),
            Err(err) => column![
                text("Unsupported video source").size(14.0),
                text(err.to_string()).size(12.0),
                text(view.player.playlist().current()).size(12.0),
            ]
            .spacing(4.0)
            .align_x(Alignment::Center)
            .into(),
        };
        let background = if view.player.embed().is_err() {
            Color::from_rgb(0.35, 0.1, 0.1)
        } else {
            Color::BLACK
        };

        let screen = container(surface)
            .center_x(view.width)
            .center_y(view.height)
            .style(move |_theme: &iced::Theme| container::Style {
                background: Some(background.into()),
                text_color: Some(Color::WHITE),
                ..container::Style::default()
            });

        column![screen, button("Next Video").on_press_maybe(view.on_next)]
            .spacing(8.0)
            .padding(8.0)
            .align_x(Alignment::Center)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embed::Provider;

    #[test]
    fn default_player_shows_sample() {
        let player = Player::default();
        let embed = player.embed().unwrap();
        assert_eq!(
            embed.url().as_str(),
            "https://www.youtube.com/embed/_-2ZUciZgls?autoplay=1&mute=1&controls=1"
        );
    }

    #[test]
    fn next_cycles_through_sample() {
        let mut player = Player::sample();
        assert_eq!(player.embed().unwrap().provider(), Provider::YouTube);

        assert_eq!(player.next().unwrap().video_id(), "822195781");
        assert_eq!(player.next().unwrap().video_id(), "894215300");
        assert_eq!(player.next().unwrap().video_id(), "822195781");
        assert_eq!(player.next().unwrap().provider(), Provider::YouTube);
        assert_eq!(player.playlist().index(), 0);
    }

    #[test]
    fn unsupported_entry_is_kept_and_skippable() {
        let playlist =
            Playlist::new(["https://example.com/video", "https://vimeo.com/42"]).unwrap();
        let mut player = Player::new(playlist, Playback::default());
        assert!(matches!(player.embed(), Err(Error::Unsupported(_))));

        let embed = player.next().unwrap();
        assert_eq!(embed.video_id(), "42");
    }

    #[test]
    fn playback_is_fixed_for_lifetime() {
        let playback = Playback {
            muted: false,
            controls: false,
        };
        let playlist = Playlist::new(["https://youtu.be/a", "https://youtu.be/b"]).unwrap();
        let mut player = Player::new(playlist, playback);
        player.next().unwrap();
        assert_eq!(player.playback(), playback);
        assert_eq!(
            player.embed().unwrap().url().as_str(),
            "https://www.youtube.com/embed/b?autoplay=1&mute=0&controls=0"
        );
    }
}
