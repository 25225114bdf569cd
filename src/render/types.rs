//! Core types for scene rendering: object/handler identifiers and styles

use crate::types::Color;

use super::defaults;
use super::handler::HandleState;

/// Index of an object in the renderer's object table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub(crate) usize);

impl ObjectId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Index of a handler in the renderer's handler table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandlerId(pub(crate) usize);

impl HandlerId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Stroke color and width for lines
#[derive(Debug, Clone, PartialEq)]
pub struct LineStyle {
    pub color: Color,
    pub width: f64,
}

impl LineStyle {
    pub fn new(color: Color, width: f64) -> Self {
        Self { color, width }
    }
}

/// Line style plus arrowhead geometry
#[derive(Debug, Clone, PartialEq)]
pub struct VectorStyle {
    pub line: LineStyle,
    pub arrow_angle_rad: f64,
    pub arrow_size_px: f64,
}

impl VectorStyle {
    /// Same geometry, different stroke color.
    pub fn with_color(&self, color: Color) -> Self {
        Self {
            line: LineStyle::new(color, self.line.width),
            ..self.clone()
        }
    }
}

impl Default for VectorStyle {
    fn default() -> Self {
        Self {
            line: LineStyle::new(defaults::VECTOR_COLOR, defaults::VECTOR_WIDTH),
            arrow_angle_rad: defaults::ARROW_ANGLE_RAD,
            arrow_size_px: defaults::ARROW_SIZE,
        }
    }
}

/// Colors of a draggable vector in each interaction state
#[derive(Debug, Clone, PartialEq)]
pub struct HandleStyle {
    pub idle: Color,
    pub hovered: Color,
    pub dragging: Color,
}

impl HandleStyle {
    pub fn color_for(&self, state: HandleState) -> &Color {
        match state {
            HandleState::None => &self.idle,
            HandleState::Hovered => &self.hovered,
            HandleState::Dragging => &self.dragging,
        }
    }
}

impl Default for HandleStyle {
    fn default() -> Self {
        Self {
            idle: defaults::VECTOR_COLOR,
            hovered: defaults::HANDLE_HOVERED_COLOR,
            dragging: defaults::HANDLE_DRAGGING_COLOR,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PointStyle {
    pub color: Color,
    pub radius_px: f64,
}

impl Default for PointStyle {
    fn default() -> Self {
        Self {
            color: defaults::POINT_COLOR,
            radius_px: defaults::POINT_RADIUS,
        }
    }
}

/// Every style the scene draws with, configured once at start-up
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub grid: LineStyle,
    pub axis: LineStyle,
    pub vector: VectorStyle,
    pub handle: HandleStyle,
    pub point: PointStyle,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::Named(defaults::BACKGROUND_COLOR.to_string()),
            grid: LineStyle::new(defaults::GRID_COLOR, defaults::GRID_WIDTH),
            axis: LineStyle::new(defaults::AXIS_COLOR, defaults::AXIS_WIDTH),
            vector: VectorStyle::default(),
            handle: HandleStyle::default(),
            point: PointStyle::default(),
        }
    }
}
