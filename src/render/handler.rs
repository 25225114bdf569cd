//! Pointer handlers and the hover/drag state machine.
//!
//! A handler belongs to one scene object, which it refers to by [`ObjectId`]
//! rather than by reference, so the renderer can store objects and handlers
//! in plain tables. The renderer hands the handler its object for the
//! duration of a single event.

use enum_dispatch::enum_dispatch;

use crate::convert::ScreenToPointsConverter;
use crate::types::ScreenPoint;

use super::context::DispatchContext;
use super::objects::ScreenObject;
use super::types::ObjectId;

/// Interaction state of a handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HandleState {
    #[default]
    None,
    Hovered,
    Dragging,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventKind {
    Move,
    Down,
    Up,
}

/// A pointer event in surface-local device coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub position: ScreenPoint,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, x: f64, y: f64) -> Self {
        Self {
            kind,
            position: ScreenPoint::new(x, y),
        }
    }

    pub fn moved(x: f64, y: f64) -> Self {
        Self::new(PointerEventKind::Move, x, y)
    }

    pub fn down(x: f64, y: f64) -> Self {
        Self::new(PointerEventKind::Down, x, y)
    }

    pub fn up(x: f64, y: f64) -> Self {
        Self::new(PointerEventKind::Up, x, y)
    }
}

/// Outcome of one handler seeing one event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Response {
    pub previous: HandleState,
    pub current: HandleState,
    /// The handler moved its object's geometry.
    pub moved: bool,
}

impl Response {
    pub fn changed(&self) -> bool {
        self.previous != self.current
    }
}

/// Something that reacts to pointer events on behalf of a scene object
#[enum_dispatch]
pub trait Interactive {
    /// The object this handler acts on.
    fn object(&self) -> ObjectId;

    fn state(&self) -> HandleState;

    /// Whether `cursor` is on this handler's hot spot of `object`.
    fn hit_test(
        &self,
        object: &ScreenObject,
        converter: &ScreenToPointsConverter,
        hit_radius_px: f64,
        cursor: ScreenPoint,
    ) -> bool;

    /// Run one state transition.
    fn handle(
        &mut self,
        event: PointerEvent,
        object: &mut ScreenObject,
        ctx: &mut DispatchContext<'_>,
    ) -> Response;
}

/// Every handler kind the scene knows
#[enum_dispatch(Interactive)]
#[derive(Debug, Clone)]
pub enum AnyHandler {
    VectorEnd(VectorEndHandler),
}

/// Lets the head of a vector object be hovered and dragged
#[derive(Debug, Clone)]
pub struct VectorEndHandler {
    object: ObjectId,
    state: HandleState,
}

impl VectorEndHandler {
    pub fn new(object: ObjectId) -> Self {
        Self {
            object,
            state: HandleState::None,
        }
    }
}

impl Interactive for VectorEndHandler {
    fn object(&self) -> ObjectId {
        self.object
    }

    fn state(&self) -> HandleState {
        self.state
    }

    fn hit_test(
        &self,
        object: &ScreenObject,
        converter: &ScreenToPointsConverter,
        hit_radius_px: f64,
        cursor: ScreenPoint,
    ) -> bool {
        let Some(vector) = object.as_vector() else {
            return false;
        };
        let head = converter.screen_coord(vector.head);
        head.distance_squared(cursor) < hit_radius_px * hit_radius_px
    }

    fn handle(
        &mut self,
        event: PointerEvent,
        object: &mut ScreenObject,
        ctx: &mut DispatchContext<'_>,
    ) -> Response {
        let previous = self.state;
        let hit = self.hit_test(object, ctx.converter, ctx.hit_radius_px, event.position);
        let mut moved = false;

        self.state = match (self.state, event.kind) {
            (HandleState::Dragging, PointerEventKind::Move) => {
                if let Some(vector) = object.as_vector_mut() {
                    vector.head = ctx.converter.point_by_screen_coord(event.position);
                    moved = true;
                }
                HandleState::Dragging
            }
            (HandleState::Dragging, PointerEventKind::Up) => HandleState::None,
            (HandleState::Dragging, PointerEventKind::Down) => {
                ctx.drag_claimed = true;
                HandleState::Dragging
            }
            (_, PointerEventKind::Down) if hit && !ctx.drag_claimed => {
                ctx.drag_claimed = true;
                HandleState::Dragging
            }
            (_, PointerEventKind::Move | PointerEventKind::Down) => {
                if hit {
                    HandleState::Hovered
                } else {
                    HandleState::None
                }
            }
            (state, PointerEventKind::Up) => state,
        };

        Response {
            previous,
            current: self.state,
            moved,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::objects::VectorObject;
    use crate::types::{Point, Viewport};

    const HIT_RADIUS: f64 = 10.0;

    fn converter() -> ScreenToPointsConverter {
        ScreenToPointsConverter::new(Viewport::try_new(300.0, 150.0).unwrap(), 50.0).unwrap()
    }

    /// Vector (0,0)->(1,0): head at screen (200, 75).
    fn object() -> ScreenObject {
        VectorObject::new(Point::ZERO, Point::new(1.0, 0.0)).into()
    }

    fn handler_in(state: HandleState) -> VectorEndHandler {
        VectorEndHandler {
            object: ObjectId(0),
            state,
        }
    }

    fn run(
        state: HandleState,
        event: PointerEvent,
        claimed: bool,
    ) -> (Response, ScreenObject, bool) {
        let conv = converter();
        let mut handler = handler_in(state);
        let mut object = object();
        let mut ctx = DispatchContext {
            converter: &conv,
            hit_radius_px: HIT_RADIUS,
            drag_claimed: claimed,
        };
        let response = handler.handle(event, &mut object, &mut ctx);
        (response, object, ctx.drag_claimed)
    }

    const NEAR: (f64, f64) = (203.0, 75.0);
    const FAR: (f64, f64) = (260.0, 120.0);

    #[test]
    fn hit_radius_boundary() {
        let conv = converter();
        let handler = handler_in(HandleState::None);
        let obj = object();
        let hits =
            |x: f64, y: f64| handler.hit_test(&obj, &conv, HIT_RADIUS, ScreenPoint::new(x, y));
        assert!(hits(200.0 + HIT_RADIUS - 1.0, 75.0));
        assert!(!hits(200.0, 75.0 + HIT_RADIUS + 1.0));
        assert!(!hits(200.0 + HIT_RADIUS, 75.0));
    }

    #[test]
    fn transition_table() {
        use HandleState::{Dragging, Hovered};
        use HandleState::None as Idle;

        let near_move = PointerEvent::moved(NEAR.0, NEAR.1);
        let far_move = PointerEvent::moved(FAR.0, FAR.1);
        let near_down = PointerEvent::down(NEAR.0, NEAR.1);
        let far_down = PointerEvent::down(FAR.0, FAR.1);
        let near_up = PointerEvent::up(NEAR.0, NEAR.1);
        let far_up = PointerEvent::up(FAR.0, FAR.1);

        let table = [
            (Idle, near_move, Hovered),
            (Idle, far_move, Idle),
            (Idle, near_down, Dragging),
            (Idle, far_down, Idle),
            (Idle, near_up, Idle),
            (Idle, far_up, Idle),
            (Hovered, near_move, Hovered),
            (Hovered, far_move, Idle),
            (Hovered, near_down, Dragging),
            (Hovered, far_down, Idle),
            (Hovered, near_up, Hovered),
            (Hovered, far_up, Hovered),
            (Dragging, near_move, Dragging),
            (Dragging, far_move, Dragging),
            (Dragging, near_down, Dragging),
            (Dragging, far_down, Dragging),
            (Dragging, near_up, Idle),
            (Dragging, far_up, Idle),
        ];

        for (from, event, expected) in table {
            let (response, _, _) = run(from, event, false);
            assert_eq!(response.current, expected, "{from:?} + {event:?}");
            assert_eq!(response.previous, from);
        }
    }

    #[test]
    fn dragging_move_puts_head_under_cursor() {
        let event = PointerEvent::moved(FAR.0, FAR.1);
        let (response, object, _) = run(HandleState::Dragging, event, false);
        assert!(response.moved);
        let head = object.as_vector().unwrap().head;
        assert!((head.x - 2.2).abs() < 1e-12);
        assert!((head.y - -0.9).abs() < 1e-12);
    }

    #[test]
    fn hover_does_not_move_head() {
        let event = PointerEvent::moved(NEAR.0, NEAR.1);
        let (response, object, _) = run(HandleState::None, event, false);
        assert!(!response.moved);
        assert_eq!(object.as_vector().unwrap().head, Point::new(1.0, 0.0));
    }

    #[test]
    fn claimed_drag_blocks_second_handler() {
        let press = PointerEvent::down(NEAR.0, NEAR.1);
        let (response, _, claimed) = run(HandleState::Hovered, press, true);
        assert_eq!(response.current, HandleState::Hovered);
        assert!(claimed);

        let (response, _, claimed) = run(HandleState::None, press, false);
        assert_eq!(response.current, HandleState::Dragging);
        assert!(claimed, "a successful press claims the drag");
    }
}
