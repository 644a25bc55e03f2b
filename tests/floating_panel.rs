use iced::widget::container;
use iced::{mouse, Event, Point, Size};
use iced_floating_video::{EmbedView, FloatingPanel, Geometry, Interaction, Panel, Player};
use iced_test::simulator;

#[derive(Debug, Clone, PartialEq)]
enum Message {
    Next,
    Changed(Geometry),
}

fn press() -> Event {
    Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
}

fn release() -> Event {
    Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
}

fn move_to(x: f32, y: f32) -> Event {
    Event::Mouse(mouse::Event::CursorMoved {
        position: Point::new(x, y),
    })
}

#[test]
fn drag_continues_outside_panel_until_release() {
    let player = Player::default();
    let panel = Panel::default();
    let mut ui = simulator(FloatingPanel::new(
        &panel,
        EmbedView::new(&player).on_next(Message::Next),
    ));

    ui.point_at(Point::new(100.0, 100.0));
    ui.simulate([press()]);
    assert_eq!(panel.interaction(), Interaction::Dragging);

    ui.simulate([move_to(900.0, 600.0)]);
    assert_eq!(panel.position(), Point::new(900.0 - 320.0, 600.0 - 180.0));

    ui.point_at(Point::new(1000.0, 700.0));
    ui.simulate([release()]);
    assert_eq!(panel.interaction(), Interaction::Idle);

    ui.simulate([move_to(50.0, 50.0)]);
    assert_eq!(panel.position(), Point::new(580.0, 420.0));
}

#[test]
fn handle_press_resizes() {
    let player = Player::default();
    let panel = Panel::default();
    let handle = panel.handle_bounds().center();
    let mut ui = simulator(FloatingPanel::new(
        &panel,
        EmbedView::new(&player).on_next(Message::Next),
    ));

    ui.point_at(handle);
    ui.simulate([press()]);
    assert_eq!(panel.interaction(), Interaction::Resizing);

    ui.simulate([move_to(210.0, 160.0)]);
    assert_eq!(panel.size(), Size::new(200.0, 150.0));
    assert_eq!(panel.position(), Point::new(10.0, 10.0));

    ui.simulate([release()]);
    assert_eq!(panel.interaction(), Interaction::Idle);
}

#[test]
fn next_button_does_not_start_drag() -> Result<(), iced_test::Error> {
    let player = Player::default();
    let panel = Panel::default();
    let mut ui = simulator(FloatingPanel::new(
        &panel,
        EmbedView::new(&player).on_next(Message::Next),
    ));

    ui.click("Next Video")?;
    assert_eq!(panel.interaction(), Interaction::Idle);
    assert_eq!(panel.position(), Point::new(10.0, 10.0));

    let messages: Vec<Message> = ui.into_messages().collect();
    assert_eq!(messages, vec![Message::Next]);
    Ok(())
}

#[test]
fn pointer_is_translated_into_stage_coordinates() {
    let player = Player::default();
    let panel = Panel::default();
    let mut ui = simulator(
        container(FloatingPanel::new(
            &panel,
            EmbedView::new(&player).on_next(Message::Next),
        ))
        .padding(100.0),
    );

    // (5, 5) inside the stage is outside the panel
    ui.point_at(Point::new(105.0, 105.0));
    ui.simulate([press()]);
    assert_eq!(panel.interaction(), Interaction::Idle);
    ui.simulate([release()]);

    ui.point_at(Point::new(200.0, 200.0));
    ui.simulate([press()]);
    assert_eq!(panel.interaction(), Interaction::Dragging);

    ui.simulate([move_to(600.0, 500.0)]);
    assert_eq!(panel.position(), Point::new(500.0 - 320.0, 400.0 - 180.0));
}

#[test]
fn remounted_panel_drops_stale_drag() {
    let player = Player::default();
    let panel = Panel::default();

    {
        let mut ui = simulator(FloatingPanel::new(
            &panel,
            EmbedView::new(&player).on_next(Message::Next),
        ));
        ui.point_at(Point::new(100.0, 100.0));
        ui.simulate([press()]);
        assert_eq!(panel.interaction(), Interaction::Dragging);
    }

    let mut ui = simulator(FloatingPanel::new(
        &panel,
        EmbedView::new(&player).on_next(Message::Next),
    ));
    ui.simulate([move_to(900.0, 600.0)]);

    assert_eq!(panel.interaction(), Interaction::Idle);
    assert_eq!(panel.position(), Point::new(10.0, 10.0));
}

#[test]
fn on_change_can_read_panel() {
    let player = Player::default();
    let panel = Panel::default();
    let mut ui = simulator(
        FloatingPanel::new(&panel, EmbedView::new(&player).on_next(Message::Next)).on_change(
            |geometry| {
                assert_eq!(panel.geometry(), geometry);
                Message::Changed(geometry)
            },
        ),
    );

    ui.point_at(Point::new(100.0, 100.0));
    ui.simulate([press(), move_to(400.0, 300.0)]);

    let messages: Vec<Message> = ui.into_messages().collect();
    assert_eq!(
        messages,
        vec![Message::Changed(Geometry {
            position: Point::new(80.0, 120.0),
            size: Size::new(640.0, 360.0),
        })]
    );
}
