//! Scene objects: everything the renderer draws, one variant per kind.
//!
//! Objects hold model-space geometry only. Styles come from the [`Theme`]
//! in the draw context, and interaction state is looked up through the
//! handler table, so an object never needs a reference back to the renderer.
//!
//! [`Theme`]: super::types::Theme

use enum_dispatch::enum_dispatch;

use crate::errors::GeometryError;
use crate::space::{BasisRole, CoordinateSystem};
use crate::types::{Point, Vector};

use super::context::DrawContext;
use super::geometry::{draw_arrow, draw_line, fill_dot};
use super::grid::draw_grid;
use super::handler::HandleState;
use super::surface::Surface;
use super::types::{HandlerId, VectorStyle};

/// Something the renderer can paint
#[enum_dispatch]
pub trait Drawable {
    fn draw(&self, surface: &mut dyn Surface, ctx: &DrawContext<'_>) -> Result<(), GeometryError>;

    /// Short name for logs.
    fn kind(&self) -> &'static str;
}

/// Every drawable object kind
#[enum_dispatch(Drawable)]
#[derive(Debug, Clone)]
pub enum ScreenObject {
    Grid(GridObject),
    Axis(AxisObject),
    Vector(VectorObject),
    BasisVector(BasisVectorObject),
    Point(PointObject),
}

impl ScreenObject {
    /// The underlying vector, for objects that have one.
    pub fn as_vector(&self) -> Option<&VectorObject> {
        match self {
            ScreenObject::Vector(v) => Some(v),
            ScreenObject::BasisVector(b) => Some(&b.vector),
            _ => None,
        }
    }

    pub fn as_vector_mut(&mut self) -> Option<&mut VectorObject> {
        match self {
            ScreenObject::Vector(v) => Some(v),
            ScreenObject::BasisVector(b) => Some(&mut b.vector),
            _ => None,
        }
    }

    pub fn as_basis_vector(&self) -> Option<&BasisVectorObject> {
        match self {
            ScreenObject::BasisVector(b) => Some(b),
            _ => None,
        }
    }

    /// Pull geometry that mirrors the coordinate system back in line with it.
    pub(crate) fn sync_with(&mut self, system: &CoordinateSystem) {
        match self {
            ScreenObject::Grid(grid) => grid.system = system.clone(),
            ScreenObject::Axis(axis) => {
                axis.origin = system.origin();
                axis.direction = system.basis().get(axis.role);
            }
            ScreenObject::BasisVector(b) => {
                b.vector.tail = system.origin();
                b.vector.head = system.origin() + system.basis().get(b.role);
            }
            ScreenObject::Vector(_) | ScreenObject::Point(_) => {}
        }
    }
}

// ============================================================================
// Grid
// ============================================================================

/// The lattice of lines spanned by a coordinate system's basis
#[derive(Debug, Clone)]
pub struct GridObject {
    system: CoordinateSystem,
}

impl GridObject {
    pub fn new(system: &CoordinateSystem) -> Self {
        Self { system: system.clone() }
    }

    pub fn system(&self) -> &CoordinateSystem {
        &self.system
    }
}

impl Drawable for GridObject {
    fn draw(&self, surface: &mut dyn Surface, ctx: &DrawContext<'_>) -> Result<(), GeometryError> {
        draw_grid(surface, ctx, &self.system, &ctx.theme.grid).map(|_| ())
    }

    fn kind(&self) -> &'static str {
        "grid"
    }
}

// ============================================================================
// Axis
// ============================================================================

/// The infinite line through the origin along one basis vector
#[derive(Debug, Clone)]
pub struct AxisObject {
    pub origin: Point,
    pub direction: Vector,
    pub role: BasisRole,
}

impl AxisObject {
    pub fn new(system: &CoordinateSystem, role: BasisRole) -> Self {
        Self {
            origin: system.origin(),
            direction: system.basis().get(role),
            role,
        }
    }
}

impl Drawable for AxisObject {
    fn draw(&self, surface: &mut dyn Surface, ctx: &DrawContext<'_>) -> Result<(), GeometryError> {
        let anchor = ctx.converter.screen_coord(self.origin);
        let direction = ctx.converter.vector_to_screen(self.direction);
        draw_line(surface, ctx, anchor, direction, &ctx.theme.axis).map(|_| ())
    }

    fn kind(&self) -> &'static str {
        "axis"
    }
}

// ============================================================================
// Vectors
// ============================================================================

/// A bound vector drawn as an arrow from `tail` to `head`
#[derive(Debug, Clone, PartialEq)]
pub struct VectorObject {
    pub tail: Point,
    pub head: Point,
}

impl VectorObject {
    pub fn new(tail: Point, head: Point) -> Self {
        Self { tail, head }
    }

    /// The free vector `head - tail`.
    pub fn value(&self) -> Vector {
        self.head - self.tail
    }

    fn draw_styled(
        &self,
        surface: &mut dyn Surface,
        ctx: &DrawContext<'_>,
        style: &VectorStyle,
    ) -> Result<(), GeometryError> {
        if self.value().is_zero() {
            return Err(GeometryError::ZeroLengthVector);
        }
        let tail = ctx.converter.screen_coord(self.tail);
        let head = ctx.converter.screen_coord(self.head);
        draw_arrow(surface, tail, head, style)
    }
}

impl Drawable for VectorObject {
    fn draw(&self, surface: &mut dyn Surface, ctx: &DrawContext<'_>) -> Result<(), GeometryError> {
        self.draw_styled(surface, ctx, &ctx.theme.vector)
    }

    fn kind(&self) -> &'static str {
        "vector"
    }
}

/// One of the two basis vectors, drawn in its handle's state color
#[derive(Debug, Clone)]
pub struct BasisVectorObject {
    pub vector: VectorObject,
    pub role: BasisRole,
    pub handler: HandlerId,
}

impl BasisVectorObject {
    pub fn new(system: &CoordinateSystem, role: BasisRole, handler: HandlerId) -> Self {
        let origin = system.origin();
        Self {
            vector: VectorObject::new(origin, origin + system.basis().get(role)),
            role,
            handler,
        }
    }
}

impl Drawable for BasisVectorObject {
    fn draw(&self, surface: &mut dyn Surface, ctx: &DrawContext<'_>) -> Result<(), GeometryError> {
        let state = ctx.handler_state(self.handler);
        let style = match state {
            HandleState::None => ctx.theme.vector.clone(),
            _ => ctx.theme.vector.with_color(ctx.theme.handle.color_for(state).clone()),
        };
        self.vector.draw_styled(surface, ctx, &style)
    }

    fn kind(&self) -> &'static str {
        "basis vector"
    }
}

// ============================================================================
// Point
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct PointObject {
    pub position: Point,
}

impl PointObject {
    pub fn new(position: Point) -> Self {
        Self { position }
    }
}

impl Drawable for PointObject {
    fn draw(&self, surface: &mut dyn Surface, ctx: &DrawContext<'_>) -> Result<(), GeometryError> {
        let center = ctx.converter.screen_coord(self.position);
        fill_dot(surface, center, ctx.theme.point.radius_px, &ctx.theme.point.color);
        Ok(())
    }

    fn kind(&self) -> &'static str {
        "point"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::ScreenToPointsConverter;
    use crate::render::clip::ClipStrategy;
    use crate::render::handler::{AnyHandler, Interactive, PointerEvent, VectorEndHandler};
    use crate::render::context::DispatchContext;
    use crate::render::surface::{DrawCommand, RecordingSurface};
    use crate::render::types::{ObjectId, Theme};
    use crate::types::{Color, ScreenPoint, Viewport};

    fn converter() -> ScreenToPointsConverter {
        ScreenToPointsConverter::new(Viewport::try_new(300.0, 150.0).unwrap(), 50.0).unwrap()
    }

    fn draw(
        object: &ScreenObject,
        handlers: &[AnyHandler],
    ) -> (Result<(), GeometryError>, RecordingSurface) {
        let conv = converter();
        let theme = Theme::default();
        let ctx = DrawContext::new(&conv, &theme, ClipStrategy::Exact, handlers);
        let mut surface = RecordingSurface::with_viewport(conv.viewport());
        let result = object.draw(&mut surface, &ctx);
        (result, surface)
    }

    #[test]
    fn axis_spans_viewport_through_origin() {
        let axis: ScreenObject =
            AxisObject::new(&CoordinateSystem::cartesian(), BasisRole::E2).into();
        let (result, surface) = draw(&axis, &[]);
        result.unwrap();
        assert_eq!(
            surface.segments(),
            vec![(ScreenPoint::new(150.0, 150.0), ScreenPoint::new(150.0, 0.0))]
        );
    }

    #[test]
    fn vector_draws_shaft_then_arrowhead() {
        let v: ScreenObject = VectorObject::new(Point::ZERO, Point::new(1.0, 0.0)).into();
        let (result, surface) = draw(&v, &[]);
        result.unwrap();
        let segments = surface.segments();
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0], (ScreenPoint::new(150.0, 75.0), ScreenPoint::new(200.0, 75.0)));
        assert!(segments[1..].iter().all(|(tip, _)| *tip == ScreenPoint::new(200.0, 75.0)));
    }

    #[test]
    fn zero_length_vector_is_an_error() {
        let tail = Point::new(1.0, 1.0);
        for d in [0.0, 1e-9, 5e-5, 9.9e-5] {
            let mut head = tail;
            head.set(tail.x + d, tail.y);
            let v: ScreenObject = VectorObject::new(tail, head).into();
            let (result, surface) = draw(&v, &[]);
            assert_eq!(result, Err(GeometryError::ZeroLengthVector), "offset {d}");
            assert!(surface.commands().is_empty(), "offset {d}");
        }
    }

    #[test]
    fn basis_vector_color_follows_handle_state() {
        let system = CoordinateSystem::cartesian();
        let object: ScreenObject =
            BasisVectorObject::new(&system, BasisRole::E1, HandlerId(0)).into();
        let theme = Theme::default();

        let idle = [AnyHandler::from(VectorEndHandler::new(ObjectId(0)))];
        let (_, surface) = draw(&object, &idle);
        assert_eq!(surface.stroke_colors()[0], &theme.vector.line.color);

        // hover it
        let conv = converter();
        let mut hovered = idle.clone();
        let mut target = object.clone();
        let mut dispatch = DispatchContext {
            converter: &conv,
            hit_radius_px: 10.0,
            drag_claimed: false,
        };
        hovered[0].handle(PointerEvent::moved(201.0, 74.0), &mut target, &mut dispatch);
        let (_, surface) = draw(&object, &hovered);
        assert_eq!(surface.stroke_colors()[0], &theme.handle.hovered);
        assert!(surface.stroke_colors().iter().all(|c| **c == theme.handle.hovered));
    }

    #[test]
    fn point_is_a_filled_dot() {
        let p: ScreenObject = PointObject::new(Point::ZERO).into();
        let (result, surface) = draw(&p, &[]);
        result.unwrap();
        let fill = DrawCommand::FillColor(Color::Rgba(0x10, 0x00, 0x57, 0xff));
        assert!(surface.commands().contains(&fill));
        assert!(surface.commands().contains(&DrawCommand::Fill));
    }

    #[test]
    fn sync_follows_basis_changes() {
        let mut system = CoordinateSystem::cartesian();
        let mut axis: ScreenObject = AxisObject::new(&system, BasisRole::E1).into();
        let mut arrow: ScreenObject =
            BasisVectorObject::new(&system, BasisRole::E1, HandlerId(0)).into();

        system.set_basis_vector(BasisRole::E1, Vector::new(2.0, 1.0)).unwrap();
        axis.sync_with(&system);
        arrow.sync_with(&system);

        let ScreenObject::Axis(axis) = axis else { unreachable!() };
        assert_eq!(axis.direction, Vector::new(2.0, 1.0));
        assert_eq!(arrow.as_vector().unwrap().head, Point::new(2.0, 1.0));
        assert_eq!(arrow.as_basis_vector().unwrap().role, BasisRole::E1);
    }
}
