use crate::panel::{Geometry, Interaction, Panel};
use iced::{
    advanced::{
        self, layout, mouse, overlay, renderer,
        widget::{self, tree},
        Widget,
    },
    Color, Element, Event, Length, Rectangle, Size, Vector,
};

/// Stage widget that lays its content out inside a draggable, resizable [`Panel`].
///
/// Cursor movement and button releases are tracked for the whole stage,
/// so an interaction keeps going when the pointer leaves the panel.
pub struct FloatingPanel<'a, Message, Theme = iced::Theme, Renderer = iced::Renderer> {
    panel: &'a Panel,
    content: Element<'a, Message, Theme, Renderer>,
    width: Length,
    height: Length,
    handle_color: Color,
    on_change: Option<Box<dyn Fn(Geometry) -> Message + 'a>>,
}

impl<'a, Message, Theme, Renderer> FloatingPanel<'a, Message, Theme, Renderer> {
    /// Creates a new floating panel for the given state and content.
    pub fn new(
        panel: &'a Panel,
        content: impl Into<Element<'a, Message, Theme, Renderer>>,
    ) -> Self {
        FloatingPanel {
            panel,
            content: content.into(),
            width: Length::Fill,
            height: Length::Fill,
            handle_color: Color::from_rgb(0.5, 0.5, 0.5),
            on_change: None,
        }
    }

    /// Sets the width of the stage the panel moves on.
    pub fn width(self, width: impl Into<Length>) -> Self {
        FloatingPanel {
            width: width.into(),
            ..self
        }
    }

    /// Sets the height of the stage the panel moves on.
    pub fn height(self, height: impl Into<Length>) -> Self {
        FloatingPanel {
            height: height.into(),
            ..self
        }
    }

    /// Sets the color of the resize handle.
    pub fn handle_color(self, handle_color: Color) -> Self {
        FloatingPanel {
            handle_color,
            ..self
        }
    }

    /// Message to send whenever a drag or resize changes the panel geometry.
    pub fn on_change<F>(self, on_change: F) -> Self
    where
        F: 'a + Fn(Geometry) -> Message,
    {
        FloatingPanel {
            on_change: Some(Box::new(on_change)),
            ..self
        }
    }
}

/// Per-tree state. A drag or resize only counts while the tree that started it
/// is alive; a fresh tree finds any leftover interaction and releases it.
#[derive(Debug, Default)]
struct State {
    owns_interaction: bool,
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for FloatingPanel<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn size(&self) -> Size<Length> {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::default())
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&[&self.content]);
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let stage = limits.resolve(self.width, self.height, Size::ZERO);
        let Geometry { position, size } = self.panel.geometry();

        // content gets exactly the panel size, whatever it asks for
        let size = Size::new(size.width.max(0.0), size.height.max(0.0));
        let content = self
            .content
            .as_widget_mut()
            .layout(
                &mut tree.children[0],
                renderer,
                &layout::Limits::new(size, size),
            )
            .move_to(position);

        layout::Node::with_children(stage, vec![content])
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: advanced::Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        let Some(content_layout) = layout.children().next() else {
            return;
        };

        self.content.as_widget().draw(
            &tree.children[0],
            renderer,
            theme,
            style,
            content_layout,
            cursor,
            viewport,
        );

        renderer.fill_quad(
            renderer::Quad {
                bounds: self.panel.handle_bounds() + stage_offset(layout),
                ..renderer::Quad::default()
            },
            self.handle_color,
        );
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: advanced::Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn advanced::Clipboard,
        shell: &mut advanced::Shell<'_, Message>,
        viewport: &iced::Rectangle,
    ) {
        // the content goes first so its own buttons keep working
        if let Some(content_layout) = layout.children().next() {
            self.content.as_widget_mut().update(
                &mut tree.children[0],
                event,
                content_layout,
                cursor,
                renderer,
                clipboard,
                shell,
                viewport,
            );
        }

        let Event::Mouse(event) = event else {
            return;
        };

        let offset = stage_offset(layout);
        let state = tree.state.downcast_mut::<State>();

        if !state.owns_interaction {
            let mut inner = self.panel.0.borrow_mut();
            if inner.interaction != Interaction::Idle {
                log::debug!("dropping interaction left over from an unmounted panel");
                inner.release();
            }
        }

        match event {
            mouse::Event::ButtonPressed(mouse::Button::Left) => {
                if shell.is_event_captured() {
                    return;
                }
                let Some(position) = cursor.position() else {
                    return;
                };
                if self.panel.0.borrow_mut().press(position - offset) != Interaction::Idle {
                    state.owns_interaction = true;
                    shell.capture_event();
                }
            }
            mouse::Event::CursorMoved { position } => {
                let changed = {
                    let mut inner = self.panel.0.borrow_mut();
                    inner.track(*position - offset).then_some(inner.geometry)
                };

                if let Some(geometry) = changed {
                    if let Some(ref on_change) = self.on_change {
                        shell.publish(on_change(geometry));
                    }
                    shell.invalidate_layout();
                    shell.request_redraw();
                    shell.capture_event();
                }
            }
            mouse::Event::ButtonReleased(mouse::Button::Left) => {
                state.owns_interaction = false;
                let mut inner = self.panel.0.borrow_mut();
                if inner.interaction != Interaction::Idle {
                    inner.release();
                    shell.request_redraw();
                }
            }
            _ => {}
        }
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: advanced::Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        let owned = tree.state.downcast_ref::<State>().owns_interaction;
        match self.panel.interaction() {
            _ if !owned => {}
            Interaction::Dragging => return mouse::Interaction::Grabbing,
            Interaction::Resizing => return mouse::Interaction::ResizingDiagonallyDown,
            Interaction::Idle => {}
        }

        let offset = stage_offset(layout);
        if cursor.is_over(self.panel.handle_bounds() + offset) {
            return mouse::Interaction::ResizingDiagonallyDown;
        }

        let content = match layout.children().next() {
            Some(content_layout) => self.content.as_widget().mouse_interaction(
                &tree.children[0],
                content_layout,
                cursor,
                viewport,
                renderer,
            ),
            None => mouse::Interaction::None,
        };

        if content == mouse::Interaction::None && cursor.is_over(self.panel.bounds() + offset) {
            mouse::Interaction::Pointer
        } else {
            content
        }
    }

    fn operate(
        &mut self,
        tree: &mut widget::Tree,
        layout: advanced::Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        if let Some(content_layout) = layout.children().next() {
            self.content.as_widget_mut().operate(
                &mut tree.children[0],
                content_layout,
                renderer,
                operation,
            );
        }
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut widget::Tree,
        layout: advanced::Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        let content_layout = layout.children().next()?;
        self.content.as_widget_mut().overlay(
            &mut tree.children[0],
            content_layout,
            renderer,
            viewport,
            translation,
        )
    }
}

/// Panel geometry is relative to the stage; pointer positions are not.
fn stage_offset(layout: advanced::Layout<'_>) -> Vector {
    let stage = layout.bounds();
    Vector::new(stage.x, stage.y)
}

impl<'a, Message, Theme, Renderer> From<FloatingPanel<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: 'a + renderer::Renderer,
{
    fn from(floating_panel: FloatingPanel<'a, Message, Theme, Renderer>) -> Self {
        Self::new(floating_panel)
    }
}
