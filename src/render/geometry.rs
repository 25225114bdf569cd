//! Geometry drawing helpers: clipped lines, segments, arrowheads and dots.
//!
//! All coordinates here are device pixels. Each helper wraps its calls in
//! `save`/`restore` so styles never leak between objects.

use std::f64::consts::TAU;

use crate::errors::GeometryError;
use crate::types::{Color, ScreenPoint, ScreenVector};

use super::clip::clip_line;
use super::context::DrawContext;
use super::surface::Surface;
use super::types::{LineStyle, VectorStyle};

/// Stroke the straight segment `a`-`b`.
pub fn stroke_segment(
    surface: &mut dyn Surface,
    a: ScreenPoint,
    b: ScreenPoint,
    style: &LineStyle,
) {
    surface.save();
    surface.set_stroke_color(&style.color);
    surface.set_line_width(style.width);

    surface.begin_path();
    surface.move_to(a);
    surface.line_to(b);
    surface.stroke();

    surface.restore();
}

/// Draw the infinite line through `anchor` along `direction`, clipped to the
/// viewport. Returns whether anything was visible.
pub fn draw_line(
    surface: &mut dyn Surface,
    ctx: &DrawContext<'_>,
    anchor: ScreenPoint,
    direction: ScreenVector,
    style: &LineStyle,
) -> Result<bool, GeometryError> {
    match clip_line(ctx.converter.viewport(), anchor, direction, ctx.clip)? {
        Some(segment) => {
            stroke_segment(surface, segment.start, segment.end, style);
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Two strokes from `tip`, each at `arrow_angle_rad` off the reversed
/// direction and `arrow_size_px` long.
pub fn draw_arrowhead(
    surface: &mut dyn Surface,
    tip: ScreenPoint,
    direction: ScreenVector,
    style: &VectorStyle,
) -> Result<(), GeometryError> {
    let back = direction.normalize()?.scale(-style.arrow_size_px);

    let p1 = tip + back.rotate(style.arrow_angle_rad);
    let p2 = tip + back.rotate(-style.arrow_angle_rad);

    surface.save();
    surface.set_stroke_color(&style.line.color);
    surface.set_line_width(style.line.width);

    surface.begin_path();
    surface.move_to(tip);
    surface.line_to(p1);
    surface.move_to(tip);
    surface.line_to(p2);
    surface.stroke();

    surface.restore();
    Ok(())
}

/// Shaft from `tail` to `head` plus an arrowhead at `head`.
///
/// Nothing is drawn when the two points coincide.
pub fn draw_arrow(
    surface: &mut dyn Surface,
    tail: ScreenPoint,
    head: ScreenPoint,
    style: &VectorStyle,
) -> Result<(), GeometryError> {
    let direction = head - tail;
    direction.normalize()?;

    stroke_segment(surface, tail, head, &style.line);
    draw_arrowhead(surface, head, direction, style)
}

/// Filled circle.
pub fn fill_dot(surface: &mut dyn Surface, center: ScreenPoint, radius: f64, color: &Color) {
    surface.save();
    surface.set_fill_color(color);

    surface.begin_path();
    surface.arc(center, radius, 0.0, TAU);
    surface.fill();

    surface.restore();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::surface::{DrawCommand, RecordingSurface};

    fn sp(x: f64, y: f64) -> ScreenPoint {
        ScreenPoint::new(x, y)
    }

    #[test]
    fn arrowhead_strokes_are_symmetric() {
        let mut surface = RecordingSurface::new(300.0, 150.0).unwrap();
        let style = VectorStyle::default();
        let direction = ScreenVector::new(50.0, 0.0);
        draw_arrowhead(&mut surface, sp(200.0, 75.0), direction, &style).unwrap();

        let segments = surface.segments();
        assert_eq!(segments.len(), 2);
        let (_, p1) = segments[0];
        let (_, p2) = segments[1];

        // 10px back along -x, rotated by ±30°
        let dx = 10.0 * (std::f64::consts::PI / 6.0).cos();
        let dy = 10.0 * (std::f64::consts::PI / 6.0).sin();
        assert!((p1.x - (200.0 - dx)).abs() < 1e-9);
        assert!((p2.x - (200.0 - dx)).abs() < 1e-9);
        assert!(((p1.y - 75.0).abs() - dy).abs() < 1e-9);
        assert!((p1.y - 75.0 + (p2.y - 75.0)).abs() < 1e-9);
    }

    #[test]
    fn arrowhead_rejects_zero_direction() {
        let mut surface = RecordingSurface::new(300.0, 150.0).unwrap();
        let style = VectorStyle::default();
        for len in [0.0, 1e-7, 9e-5] {
            let direction = ScreenVector::new(len, 0.0);
            let result = draw_arrowhead(&mut surface, sp(10.0, 10.0), direction, &style);
            assert!(matches!(result, Err(GeometryError::ZeroDirection { .. })));
        }
        assert!(surface.commands().is_empty(), "nothing may be drawn on failure");
    }

    #[test]
    fn arrow_with_coincident_ends_draws_nothing() {
        let mut surface = RecordingSurface::new(300.0, 150.0).unwrap();
        let style = VectorStyle::default();
        let tail = sp(5.0, 5.0);
        for d in [0.0, 1e-9, 5e-5, 9.9e-5] {
            let mut head = tail;
            head.set(tail.x + d, tail.y);
            let result = draw_arrow(&mut surface, tail, head, &style);
            assert!(
                matches!(result, Err(GeometryError::ZeroDirection { .. })),
                "offset {d}: {result:?}"
            );
        }
        assert!(surface.commands().is_empty());
    }

    #[test]
    fn segment_is_wrapped_in_save_restore() {
        let mut surface = RecordingSurface::new(300.0, 150.0).unwrap();
        let style = LineStyle::new(Color::Rgb(1, 2, 3), 2.0);
        stroke_segment(&mut surface, sp(0.0, 0.0), sp(1.0, 1.0), &style);

        let commands = surface.commands();
        assert_eq!(commands.first(), Some(&DrawCommand::Save));
        assert_eq!(commands.last(), Some(&DrawCommand::Restore));
        assert!(commands.contains(&DrawCommand::LineWidth(2.0)));
    }

    #[test]
    fn dot_fills_full_circle() {
        let mut surface = RecordingSurface::new(300.0, 150.0).unwrap();
        fill_dot(&mut surface, sp(150.0, 75.0), 3.0, &Color::Rgb(0, 0, 0));
        assert!(surface.commands().contains(&DrawCommand::Arc {
            center: sp(150.0, 75.0),
            radius: 3.0,
            start_angle: 0.0,
            end_angle: TAU,
        }));
        assert!(surface.commands().contains(&DrawCommand::Fill));
    }
}
