use iced::{
    widget::{Column, Container, Text},
    Element,
};
use iced_floating_video::{config, Config, EmbedView, FloatingPanel, Geometry, Panel, Player};

fn main() -> iced::Result {
    iced::application(App::default, App::update, App::view)
        .title("Iced Floating Video")
        .run()
}

#[derive(Clone, Debug)]
enum Message {
    Next,
    Moved(Geometry),
}

struct App {
    player: Player,
    panel: Panel,
    status: String,
}

impl Default for App {
    fn default() -> Self {
        // first CLI argument may point at a TOML config
        let config = match std::env::args().nth(1) {
            Some(path) => config::load_from_path(path.as_ref()).unwrap_or_else(|err| {
                eprintln!("falling back to defaults: {err}");
                Config::default()
            }),
            None => Config {
                videos: Player::sample().playlist().entries().to_vec(),
                ..Config::default()
            },
        };

        App {
            player: config.player().unwrap_or_default(),
            panel: config.panel(),
            status: String::new(),
        }
    }
}

impl App {
    fn update(&mut self, message: Message) {
        match message {
            Message::Next => {
                if let Err(err) = self.player.next() {
                    println!("cannot embed: {err}");
                }
            }
            Message::Moved(geometry) => {
                self.status = format!(
                    "{:.0},{:.0} {:.0}x{:.0}",
                    geometry.position.x,
                    geometry.position.y,
                    geometry.size.width,
                    geometry.size.height,
                );
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        Column::new()
            .push(
                FloatingPanel::new(
                    &self.panel,
                    Container::new(EmbedView::new(&self.player).on_next(Message::Next)),
                )
                .on_change(Message::Moved),
            )
            .push(
                Container::new(Text::new(&self.status))
                    .padding(iced::Padding::new(5.0).left(10.0).right(10.0)),
            )
            .into()
    }
}
