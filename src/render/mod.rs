//! Scene rendering for a coordinate system
//!
//! This module is organized into submodules:
//! - `defaults`: Default sizes, colors and limits
//! - `types`: Object/handler ids and the style records composed in `Theme`
//! - `surface`: The `Surface` trait and the recording implementation
//! - `clip`: Clipping infinite lines to the viewport
//! - `geometry`: Lines, arrows and dots on a surface
//! - `grid`: Grid traversal
//! - `context`: Per-draw and per-dispatch context
//! - `objects`: Drawable scene objects
//! - `handler`: Pointer handlers and their state machine
//! - `renderer`: The renderer that owns a scene

pub mod clip;
pub mod context;
pub mod defaults;
pub mod geometry;
pub mod grid;
pub mod handler;
pub mod objects;
pub mod renderer;
pub mod surface;
pub mod types;

pub use clip::{ClipStrategy, Segment};
pub use context::{DispatchContext, DrawContext};
pub use handler::{
    AnyHandler, HandleState, Interactive, PointerEvent, PointerEventKind, VectorEndHandler,
};
pub use objects::{
    AxisObject, BasisVectorObject, Drawable, GridObject, PointObject, ScreenObject, VectorObject,
};
pub use renderer::{CoordinateSystemRenderer, Frame};
pub use surface::{DrawCommand, RecordingSurface, Surface};
pub use types::*;
