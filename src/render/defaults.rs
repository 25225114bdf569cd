//! Default sizes, colors and limits (all in pixels unless noted)

use std::f64::consts::PI;

use crate::types::Color;

/// Zoom of the default converter: model units to pixels.
pub const PIXELS_PER_UNIT: f64 = 50.0;
/// Cursor distance below which a vector handle counts as hit.
pub const HIT_RADIUS_PX: f64 = 10.0;

pub const BACKGROUND_COLOR: &str = "PapayaWhip";

pub const GRID_COLOR: Color = Color::Rgb(0xdd, 0xdd, 0xdd);
pub const GRID_WIDTH: f64 = 1.0;

pub const AXIS_COLOR: Color = Color::Rgba(0x10, 0x00, 0x57, 0xff);
pub const AXIS_WIDTH: f64 = 1.0;

pub const VECTOR_COLOR: Color = Color::Rgba(0x57, 0x30, 0x00, 0xff);
pub const VECTOR_WIDTH: f64 = 3.0;
/// Angle between the shaft and each arrowhead stroke, in radians.
pub const ARROW_ANGLE_RAD: f64 = PI / 6.0;
pub const ARROW_SIZE: f64 = 10.0;

pub const HANDLE_HOVERED_COLOR: Color = Color::Rgba(0xa6, 0x5c, 0x00, 0xff);
pub const HANDLE_DRAGGING_COLOR: Color = Color::Rgba(0xe0, 0x7b, 0x00, 0xff);

pub const POINT_COLOR: Color = Color::Rgba(0x10, 0x00, 0x57, 0xff);
pub const POINT_RADIUS: f64 = 3.0;

/// Grid sweeps whose on-screen step is shorter than this are skipped.
pub const MIN_GRID_STEP_PX: f64 = 0.5;
/// Upper bound on lines drawn by a single grid sweep.
pub const MAX_GRID_LINES: usize = 10_000;
