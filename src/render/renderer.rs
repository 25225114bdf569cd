//! The renderer: owns one coordinate system's scene and drives it from
//! pointer events.

use crate::config::Config;
use crate::convert::ScreenToPointsConverter;
use crate::errors::{ConfigError, GeometryError};
use crate::log::{debug, warn};
use crate::space::{BasisRole, CoordinateSystem};
use crate::types::{Point, ScreenPoint};

use super::context::{DispatchContext, DrawContext};
use super::handler::{AnyHandler, HandleState, Interactive, PointerEvent, VectorEndHandler};
use super::objects::{
    AxisObject, BasisVectorObject, Drawable, GridObject, PointObject, ScreenObject, VectorObject,
};
use super::surface::Surface;
use super::types::{HandlerId, ObjectId};

/// What one redraw did
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    /// Objects drawn without error.
    pub drawn: usize,
    /// Objects whose draw call failed; the rest of the frame still drew.
    pub failures: Vec<(ObjectId, GeometryError)>,
    /// Basis updates refused during the event that led to this frame.
    pub rejected: Vec<(BasisRole, GeometryError)>,
}

impl Frame {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty() && self.rejected.is_empty()
    }
}

/// Draws a coordinate system with its grid, axes and draggable basis vectors
pub struct CoordinateSystemRenderer<S: Surface> {
    surface: S,
    converter: ScreenToPointsConverter,
    config: Config,
    system: CoordinateSystem,
    objects: Vec<ScreenObject>,
    handlers: Vec<AnyHandler>,
}

impl<S: Surface> CoordinateSystemRenderer<S> {
    /// Validate `config` against the surface and build the scene. Nothing is
    /// drawn until the first [`draw`](Self::draw) or event.
    pub fn new(surface: S, system: CoordinateSystem, config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let converter = ScreenToPointsConverter::new(surface.viewport(), config.pixels_per_unit)?;

        let mut renderer = Self {
            surface,
            converter,
            config,
            system,
            objects: Vec::new(),
            handlers: Vec::new(),
        };
        renderer.build_scene();
        Ok(renderer)
    }

    /// Cartesian system with the default configuration.
    pub fn with_defaults(surface: S) -> Result<Self, ConfigError> {
        Self::new(surface, CoordinateSystem::cartesian(), Config::default())
    }

    fn build_scene(&mut self) {
        let system = self.system.clone();
        self.add_object(GridObject::new(&system));
        self.add_object(AxisObject::new(&system, BasisRole::E1));
        self.add_object(AxisObject::new(&system, BasisRole::E2));
        for role in [BasisRole::E1, BasisRole::E2] {
            let handler = HandlerId(self.handlers.len());
            let object = self.add_object(BasisVectorObject::new(&system, role, handler));
            self.add_handler(VectorEndHandler::new(object));
        }
        self.add_object(PointObject::new(system.origin()));
        debug!(objects = self.objects.len(), handlers = self.handlers.len(), "scene built");
    }

    // ========================================================================
    // Scene
    // ========================================================================

    /// Append an object; it is drawn after everything already in the scene.
    pub fn add_object(&mut self, object: impl Into<ScreenObject>) -> ObjectId {
        let id = ObjectId(self.objects.len());
        self.objects.push(object.into());
        id
    }

    /// Append a handler; handlers see events in the order they were added.
    pub fn add_handler(&mut self, handler: impl Into<AnyHandler>) -> HandlerId {
        let id = HandlerId(self.handlers.len());
        self.handlers.push(handler.into());
        id
    }

    /// Add a free vector whose head can be dragged.
    pub fn add_draggable_vector(&mut self, tail: Point, head: Point) -> (ObjectId, HandlerId) {
        let object = self.add_object(VectorObject::new(tail, head));
        let handler = self.add_handler(VectorEndHandler::new(object));
        (object, handler)
    }

    // ========================================================================
    // Events
    // ========================================================================

    /// Run `event` through every handler, fold basis drags back into the
    /// coordinate system and redraw.
    pub fn dispatch(&mut self, event: PointerEvent) -> Frame {
        let mut ctx = DispatchContext {
            converter: &self.converter,
            hit_radius_px: self.config.hit_radius_px,
            drag_claimed: self.handlers.iter().any(|h| h.state() == HandleState::Dragging),
        };

        let mut moved = Vec::new();
        for handler in &mut self.handlers {
            let id = handler.object();
            let Some(object) = self.objects.get_mut(id.index()) else {
                warn!(object = id.index(), "handler refers to a missing object");
                continue;
            };
            let response = handler.handle(event, object, &mut ctx);
            if response.changed() {
                debug!(
                    object = id.index(),
                    from = ?response.previous,
                    to = ?response.current,
                    "handle state changed"
                );
            }
            if response.moved {
                moved.push(id);
            }
        }

        let mut rejected = Vec::new();
        for id in moved {
            if let Err(rejection) = self.commit_basis(id) {
                rejected.push(rejection);
            }
        }
        self.sync_objects();

        let mut frame = self.draw();
        frame.rejected = rejected;
        frame
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) -> Frame {
        self.dispatch(PointerEvent::moved(x, y))
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) -> Frame {
        self.dispatch(PointerEvent::down(x, y))
    }

    pub fn pointer_up(&mut self, x: f64, y: f64) -> Frame {
        self.dispatch(PointerEvent::up(x, y))
    }

    /// Write a dragged basis vector into the coordinate system. Free vectors
    /// are left alone.
    fn commit_basis(&mut self, id: ObjectId) -> Result<(), (BasisRole, GeometryError)> {
        let Some(basis_vector) = self
            .objects
            .get(id.index())
            .and_then(ScreenObject::as_basis_vector)
        else {
            return Ok(());
        };
        let role = basis_vector.role;
        let value = basis_vector.vector.value();

        match self.system.set_basis_vector(role, value) {
            Ok(()) => {
                debug!(?role, x = value.x, y = value.y, "basis vector updated");
                Ok(())
            }
            Err(err) => {
                warn!(
                    ?role,
                    x = value.x,
                    y = value.y,
                    "degenerate basis rejected, handle snapped back"
                );
                Err((role, err))
            }
        }
    }

    /// Rebuild the geometry that mirrors the coordinate system.
    fn sync_objects(&mut self) {
        for object in &mut self.objects {
            object.sync_with(&self.system);
        }
    }

    // ========================================================================
    // Drawing
    // ========================================================================

    /// Clear the surface and draw every object in scene order.
    pub fn draw(&mut self) -> Frame {
        let ctx = DrawContext::new(
            &self.converter,
            &self.config.theme,
            self.config.clip,
            &self.handlers,
        );
        self.surface.clear(&self.config.theme.background);

        let mut frame = Frame::default();
        for (index, object) in self.objects.iter().enumerate() {
            match object.draw(&mut self.surface, &ctx) {
                Ok(()) => frame.drawn += 1,
                Err(err) => {
                    warn!(object = index, kind = object.kind(), error = %err, "draw call skipped");
                    frame.failures.push((ObjectId(index), err));
                }
            }
        }
        frame
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn coordinate_system(&self) -> &CoordinateSystem {
        &self.system
    }

    pub fn converter(&self) -> &ScreenToPointsConverter {
        &self.converter
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn objects(&self) -> &[ScreenObject] {
        &self.objects
    }

    pub fn object(&self, id: ObjectId) -> Option<&ScreenObject> {
        self.objects.get(id.index())
    }

    pub fn handler_state(&self, id: HandlerId) -> HandleState {
        self.handlers.get(id.index()).map(|h| h.state()).unwrap_or_default()
    }

    /// State of the handle on basis vector `role`.
    pub fn basis_handle_state(&self, role: BasisRole) -> HandleState {
        self.objects
            .iter()
            .filter_map(ScreenObject::as_basis_vector)
            .find(|b| b.role == role)
            .map(|b| self.handler_state(b.handler))
            .unwrap_or_default()
    }

    /// Model point under the device position `(x, y)`.
    pub fn model_point_at(&self, x: f64, y: f64) -> Point {
        self.converter.point_by_screen_coord(ScreenPoint::new(x, y))
    }
}
