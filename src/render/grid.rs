//! Grid traversal.
//!
//! Lines parallel to e2 are laid at every integer multiple of e1 from the
//! origin, and lines parallel to e1 at every multiple of e2. Each family is
//! swept in both directions until the cursor leaves the viewport.

use crate::errors::GeometryError;
use crate::log::{debug, warn};
use crate::space::CoordinateSystem;
use crate::types::{Point, Vector};

use super::context::DrawContext;
use super::defaults::{MAX_GRID_LINES, MIN_GRID_STEP_PX};
use super::geometry::draw_line;
use super::surface::Surface;
use super::types::LineStyle;

/// Draw the grid of `system`. Returns the number of lines laid down.
pub fn draw_grid(
    surface: &mut dyn Surface,
    ctx: &DrawContext<'_>,
    system: &CoordinateSystem,
    style: &LineStyle,
) -> Result<usize, GeometryError> {
    let basis = *system.basis();
    let space = system.affine_space().vector_space();

    let e1_screen = ctx.converter.vector_to_screen(basis.e1);
    let e2_screen = ctx.converter.vector_to_screen(basis.e2);
    if e1_screen.is_zero() || e2_screen.is_zero() {
        return Err(GeometryError::ZeroLengthVector);
    }

    let sweeps = [
        (basis.e1, basis.e2, true),
        (space.scale(basis.e1, -1.0), basis.e2, false),
        (basis.e2, basis.e1, true),
        (space.scale(basis.e2, -1.0), basis.e1, false),
    ];

    let mut total = 0;
    for (step, line_direction, include_origin) in sweeps {
        total += sweep(surface, ctx, system, step, line_direction, include_origin, style)?;
    }
    debug!(lines = total, "grid drawn");
    Ok(total)
}

/// Lay lines along `line_direction` at origin + k*step for k = 0, 1, 2, ...
/// (k >= 1 when `include_origin` is false) while the cursor stays visible.
fn sweep(
    surface: &mut dyn Surface,
    ctx: &DrawContext<'_>,
    system: &CoordinateSystem,
    step: Vector,
    line_direction: Vector,
    include_origin: bool,
    style: &LineStyle,
) -> Result<usize, GeometryError> {
    let converter = ctx.converter;
    let space = system.affine_space();

    let step_px = converter.vector_to_screen(step).length();
    if step_px < MIN_GRID_STEP_PX {
        warn!(step_px, "grid step too small, sweep skipped");
        return Ok(0);
    }
    let direction = converter.vector_to_screen(line_direction);

    let mut cursor = Point::ZERO;
    system.move_point_at_origin(&mut cursor);
    if !include_origin {
        cursor = space.add_vector_to_point(cursor, step);
    }

    let mut lines = 0;
    while converter.is_point_in_viewport(cursor) && lines < MAX_GRID_LINES {
        draw_line(surface, ctx, converter.screen_coord(cursor), direction, style)?;
        lines += 1;
        cursor = space.add_vector_to_point(cursor, step);
    }
    if lines == MAX_GRID_LINES {
        warn!(lines, "grid sweep hit the line cap");
    }
    Ok(lines)
}
