//! The drawing surface the scene paints through.
//!
//! Hosts implement [`Surface`] over whatever actually puts pixels on screen
//! (a canvas context, a GPU painter). [`RecordingSurface`] keeps the calls as
//! a display list instead, which is what the tests and the demo use.

use std::fmt;

use crate::errors::ConfigError;
use crate::types::{Color, ScreenPoint, Viewport};

/// Path-based 2D drawing primitives, in device pixels
pub trait Surface {
    /// Current size of the drawable area.
    fn viewport(&self) -> Viewport;

    /// Paint the whole surface with `background`.
    fn clear(&mut self, background: &Color);

    fn save(&mut self);
    fn restore(&mut self);

    fn begin_path(&mut self);
    fn move_to(&mut self, p: ScreenPoint);
    fn line_to(&mut self, p: ScreenPoint);
    /// Add a circular arc from `start_angle` to `end_angle` (radians) to the path.
    fn arc(&mut self, center: ScreenPoint, radius: f64, start_angle: f64, end_angle: f64);

    fn stroke(&mut self);
    fn fill(&mut self);

    fn set_stroke_color(&mut self, color: &Color);
    fn set_line_width(&mut self, width: f64);
    fn set_fill_color(&mut self, color: &Color);
}

/// One recorded surface call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Save,
    Restore,
    BeginPath,
    MoveTo(ScreenPoint),
    LineTo(ScreenPoint),
    Arc {
        center: ScreenPoint,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
    Stroke,
    Fill,
    StrokeColor(Color),
    LineWidth(f64),
    FillColor(Color),
}

impl fmt::Display for DrawCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawCommand::Clear(c) => write!(f, "clear {}", c),
            DrawCommand::Save => write!(f, "save"),
            DrawCommand::Restore => write!(f, "restore"),
            DrawCommand::BeginPath => write!(f, "begin_path"),
            DrawCommand::MoveTo(p) => write!(f, "move_to {} {}", fmt_num(p.x), fmt_num(p.y)),
            DrawCommand::LineTo(p) => write!(f, "line_to {} {}", fmt_num(p.x), fmt_num(p.y)),
            DrawCommand::Arc { center, radius, start_angle, end_angle } => write!(
                f,
                "arc {} {} r={} {}..{}",
                fmt_num(center.x),
                fmt_num(center.y),
                fmt_num(*radius),
                fmt_num(*start_angle),
                fmt_num(*end_angle)
            ),
            DrawCommand::Stroke => write!(f, "stroke"),
            DrawCommand::Fill => write!(f, "fill"),
            DrawCommand::StrokeColor(c) => write!(f, "stroke_color {}", c),
            DrawCommand::LineWidth(w) => write!(f, "line_width {}", fmt_num(*w)),
            DrawCommand::FillColor(c) => write!(f, "fill_color {}", c),
        }
    }
}

/// A [`Surface`] that records every call
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    viewport: Viewport,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Result<Self, ConfigError> {
        Ok(Self::with_viewport(Viewport::try_new(width, height)?))
    }

    pub fn with_viewport(viewport: Viewport) -> Self {
        Self {
            viewport,
            commands: Vec::new(),
        }
    }

    /// Everything recorded so far.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Commands issued after the most recent clear, or all of them if the
    /// surface was never cleared.
    pub fn last_frame(&self) -> &[DrawCommand] {
        let start = self
            .commands
            .iter()
            .rposition(|c| matches!(c, DrawCommand::Clear(_)))
            .map_or(0, |i| i + 1);
        &self.commands[start..]
    }

    /// Straight segments of the last frame that were actually stroked.
    pub fn segments(&self) -> Vec<(ScreenPoint, ScreenPoint)> {
        let mut stroked = Vec::new();
        let mut pending = Vec::new();
        let mut cursor: Option<ScreenPoint> = None;

        for command in self.last_frame() {
            match command {
                DrawCommand::BeginPath => {
                    pending.clear();
                    cursor = None;
                }
                DrawCommand::MoveTo(p) => cursor = Some(*p),
                DrawCommand::LineTo(p) => {
                    if let Some(from) = cursor {
                        pending.push((from, *p));
                    }
                    cursor = Some(*p);
                }
                DrawCommand::Stroke => stroked.append(&mut pending),
                _ => {}
            }
        }
        stroked
    }

    /// Stroke colors set during the last frame, in order.
    pub fn stroke_colors(&self) -> Vec<&Color> {
        self.last_frame()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::StrokeColor(color) => Some(color),
                _ => None,
            })
            .collect()
    }

    pub fn clear_log(&mut self) {
        self.commands.clear();
    }
}

impl fmt::Display for RecordingSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for command in &self.commands {
            writeln!(f, "{}", command)?;
        }
        Ok(())
    }
}

impl Surface for RecordingSurface {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn clear(&mut self, background: &Color) {
        self.commands.push(DrawCommand::Clear(background.clone()));
    }

    fn save(&mut self) {
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        self.commands.push(DrawCommand::Restore);
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, p: ScreenPoint) {
        self.commands.push(DrawCommand::MoveTo(p));
    }

    fn line_to(&mut self, p: ScreenPoint) {
        self.commands.push(DrawCommand::LineTo(p));
    }

    fn arc(&mut self, center: ScreenPoint, radius: f64, start_angle: f64, end_angle: f64) {
        self.commands.push(DrawCommand::Arc {
            center,
            radius,
            start_angle,
            end_angle,
        });
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke);
    }

    fn fill(&mut self) {
        self.commands.push(DrawCommand::Fill);
    }

    fn set_stroke_color(&mut self, color: &Color) {
        self.commands.push(DrawCommand::StrokeColor(color.clone()));
    }

    fn set_line_width(&mut self, width: f64) {
        self.commands.push(DrawCommand::LineWidth(width));
    }

    fn set_fill_color(&mut self, color: &Color) {
        self.commands.push(DrawCommand::FillColor(color.clone()));
    }
}

/// Format a number with 6 significant figures, trailing zeros trimmed.
pub(crate) fn fmt_num(value: f64) -> String {
    const SIG_FIGS: i32 = 6;

    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs().log10().floor() as i32;
    let scale = 10_f64.powi(SIG_FIGS - 1 - magnitude);
    let rounded = (value * scale).round() / scale;

    let decimals = (SIG_FIGS - 1 - magnitude).max(0) as usize;
    let s = format!("{:.prec$}", rounded, prec = decimals);
    if decimals == 0 {
        return s;
    }
    let s = s.trim_end_matches('0');
    let s = s.trim_end_matches('.');
    s.to_string()
}
