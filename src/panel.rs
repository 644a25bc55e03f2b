use iced::{Point, Rectangle, Size, Vector};
use std::cell::RefCell;

/// Side length of the square resize handle in the bottom-right corner.
pub const HANDLE_SIZE: f32 = 16.0;

/// What pointer movement currently does to the panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Interaction {
    #[default]
    Idle,
    /// The panel is centered under the pointer.
    Dragging,
    /// The bottom-right corner follows the pointer.
    Resizing,
}

/// Position and size of the panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub position: Point,
    pub size: Size,
}

impl Geometry {
    pub fn bounds(&self) -> Rectangle {
        Rectangle::new(self.position, self.size)
    }
}

/// Initial placement of a [`Panel`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub position: Point,
    pub size: Size,
    /// Resizing never shrinks the panel below this.
    pub min_size: Size,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            position: Point::new(10.0, 10.0),
            size: Size::new(640.0, 360.0),
            min_size: Size::new(HANDLE_SIZE, HANDLE_SIZE),
        }
    }
}

pub(crate) struct Internal {
    pub(crate) geometry: Geometry,
    pub(crate) min_size: Size,
    pub(crate) interaction: Interaction,
}

impl Internal {
    pub(crate) fn handle_bounds(&self) -> Rectangle {
        let Geometry { position, size } = self.geometry;
        let handle = Size::new(
            HANDLE_SIZE.min(size.width.max(0.0)),
            HANDLE_SIZE.min(size.height.max(0.0)),
        );
        Rectangle::new(
            Point::new(
                position.x + size.width - handle.width,
                position.y + size.height - handle.height,
            ),
            handle,
        )
    }

    pub(crate) fn press(&mut self, point: Point) -> Interaction {
        if self.interaction != Interaction::Idle {
            return self.interaction;
        }

        if self.handle_bounds().contains(point) {
            self.begin(Interaction::Resizing);
        } else if self.geometry.bounds().contains(point) {
            self.begin(Interaction::Dragging);
        }
        self.interaction
    }

    pub(crate) fn begin(&mut self, interaction: Interaction) {
        if self.interaction == Interaction::Idle {
            log::debug!("panel interaction: {interaction:?}");
            self.interaction = interaction;
        }
    }

    pub(crate) fn track(&mut self, point: Point) -> bool {
        let geometry = match self.interaction {
            Interaction::Idle => return false,
            Interaction::Dragging => Geometry {
                position: point - Vector::new(self.geometry.size.width, self.geometry.size.height) * 0.5,
                ..self.geometry
            },
            Interaction::Resizing => {
                let origin = self.geometry.position;
                Geometry {
                    size: Size::new(
                        (point.x - origin.x).max(self.min_size.width),
                        (point.y - origin.y).max(self.min_size.height),
                    ),
                    ..self.geometry
                }
            }
        };

        let changed = geometry != self.geometry;
        self.geometry = geometry;
        changed
    }

    pub(crate) fn release(&mut self) {
        if self.interaction != Interaction::Idle {
            log::debug!("panel interaction: Idle");
        }
        self.interaction = Interaction::Idle;
    }
}

/// The floating box state driven by a [`FloatingPanel`](crate::FloatingPanel).
///
/// Geometry only changes through pointer interaction. A drag or resize belongs
/// to the mounted panel widget that started it and ends with that widget.
pub struct Panel(pub(crate) RefCell<Internal>);

impl std::fmt::Debug for Panel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.0.borrow();
        f.debug_struct("Panel")
            .field("geometry", &inner.geometry)
            .field("interaction", &inner.interaction)
            .finish()
    }
}

impl Default for Panel {
    fn default() -> Self {
        Panel::new(Settings::default())
    }
}

impl Panel {
    pub fn new(settings: Settings) -> Self {
        Panel(RefCell::new(Internal {
            geometry: Geometry {
                position: settings.position,
                size: settings.size,
            },
            min_size: settings.min_size,
            interaction: Interaction::Idle,
        }))
    }

    pub fn geometry(&self) -> Geometry {
        self.0.borrow().geometry
    }

    /// Top-left corner of the panel.
    pub fn position(&self) -> Point {
        self.0.borrow().geometry.position
    }

    pub fn size(&self) -> Size {
        self.0.borrow().geometry.size
    }

    pub fn bounds(&self) -> Rectangle {
        self.0.borrow().geometry.bounds()
    }

    /// Area of the resize handle.
    pub fn handle_bounds(&self) -> Rectangle {
        self.0.borrow().handle_bounds()
    }

    pub fn interaction(&self) -> Interaction {
        self.0.borrow().interaction
    }

    /// Starts resizing if `point` is on the handle, dragging if it is on the body.
    ///
    /// Has no effect unless the panel is idle. Returns the resulting interaction.
    pub fn press(&mut self, point: Point) -> Interaction {
        self.0.get_mut().press(point)
    }

    pub fn begin_drag(&mut self) {
        self.0.get_mut().begin(Interaction::Dragging);
    }

    pub fn begin_resize(&mut self) {
        self.0.get_mut().begin(Interaction::Resizing);
    }

    /// Applies a pointer position to the current interaction.
    /// Returns `true` if the geometry changed.
    pub fn track(&mut self, point: Point) -> bool {
        self.0.get_mut().track(point)
    }

    /// Ends any interaction.
    pub fn release(&mut self) {
        self.0.get_mut().release()
    }
}
