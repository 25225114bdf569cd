//! An interactive 2D coordinate grid with draggable basis vectors.
//!
//! A [`CoordinateSystem`] (origin plus basis e1, e2) is drawn as its grid,
//! both axes and the two basis vectors. Dragging the head of a basis vector
//! changes the basis, and the grid follows on the next redraw.
//!
//! Drawing goes through the [`Surface`] trait; [`RecordingSurface`] keeps a
//! display list and is what the tests use.
//!
//! ```
//! use basisgrid::{render_default, RecordingSurface};
//!
//! let surface = RecordingSurface::new(300.0, 150.0)?;
//! let mut renderer = render_default(surface)?;
//!
//! renderer.pointer_down(200.0, 75.0);
//! renderer.pointer_move(250.0, 75.0);
//! renderer.pointer_up(250.0, 75.0);
//! assert_eq!(renderer.coordinate_system().basis().e1.x, 2.0);
//! # Ok::<(), miette::Report>(())
//! ```

pub mod config;
pub mod convert;
pub mod errors;
pub mod log;
pub mod render;
pub mod space;
pub mod types;

pub use config::Config;
pub use convert::ScreenToPointsConverter;
pub use errors::{ConfigError, GeometryError};
pub use render::{
    ClipStrategy, CoordinateSystemRenderer, Frame, HandleState, PointerEvent, PointerEventKind,
    RecordingSurface, Surface, Theme,
};
pub use space::{AffineSpace, Basis, BasisRole, CoordinateSystem, VectorSpace};
pub use types::{Color, Point, ScreenPoint, ScreenVector, Vector, Viewport};

/// Build the default cartesian scene on `surface` and draw it once.
pub fn render_default<S: Surface>(surface: S) -> miette::Result<CoordinateSystemRenderer<S>> {
    let mut renderer = CoordinateSystemRenderer::with_defaults(surface)?;
    let frame = renderer.draw();
    if let Some((object, err)) = frame.failures.into_iter().next() {
        let context = format!("failed to draw object {}", object.index());
        return Err(miette::Report::new(err).wrap_err(context));
    }
    Ok(renderer)
}
