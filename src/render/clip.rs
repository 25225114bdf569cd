//! Clipping infinite lines to the viewport.
//!
//! A grid or axis line has no ends in model space; on screen it is the chord
//! of the viewport rectangle cut by the line through an anchor point.

use crate::errors::GeometryError;
use crate::types::{ScreenPoint, ScreenVector, Viewport};

/// Direction components smaller than this are treated as parallel to an edge.
const PARALLEL_EPS: f64 = 1e-12;

/// How [`clip_line`] finds the viewport crossings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClipStrategy {
    /// Closed-form slab clip; endpoints lie exactly on the viewport boundary.
    #[default]
    Exact,
    /// March a cursor in unit steps until it leaves the viewport. Endpoints
    /// land up to one pixel outside the boundary.
    Marching,
}

/// A finite piece of a line in device space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: ScreenPoint,
    pub end: ScreenPoint,
}

impl Segment {
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }
}

/// The visible part of the infinite line through `anchor` along `direction`.
///
/// Returns `Ok(None)` when the line misses the viewport (only possible with
/// [`ClipStrategy::Exact`]; marching from an outside anchor yields a
/// zero-length segment at the anchor instead). `start` lies on the side of
/// `-direction`, `end` on the side of `direction`.
pub fn clip_line(
    viewport: Viewport,
    anchor: ScreenPoint,
    direction: ScreenVector,
    strategy: ClipStrategy,
) -> Result<Option<Segment>, GeometryError> {
    let unit = direction.normalize()?;
    Ok(match strategy {
        ClipStrategy::Exact => clip_exact(viewport, anchor, unit),
        ClipStrategy::Marching => Some(clip_marching(viewport, anchor, unit)),
    })
}

/// Liang-Barsky with an unbounded parameter range.
fn clip_exact(viewport: Viewport, anchor: ScreenPoint, unit: ScreenVector) -> Option<Segment> {
    let mut t_min = f64::NEG_INFINITY;
    let mut t_max = f64::INFINITY;

    let slabs = [
        (anchor.x, unit.dx, viewport.width()),
        (anchor.y, unit.dy, viewport.height()),
    ];
    for (pos, dir, max) in slabs {
        if dir.abs() < PARALLEL_EPS {
            if pos < 0.0 || pos > max {
                return None;
            }
            continue;
        }
        let t0 = -pos / dir;
        let t1 = (max - pos) / dir;
        t_min = t_min.max(t0.min(t1));
        t_max = t_max.min(t0.max(t1));
    }

    if t_min > t_max {
        return None;
    }
    Some(Segment {
        start: anchor + unit.scale(t_min),
        end: anchor + unit.scale(t_max),
    })
}

fn clip_marching(viewport: Viewport, anchor: ScreenPoint, unit: ScreenVector) -> Segment {
    // Any chord is shorter than the perimeter.
    let max_steps = (2.0 * (viewport.width() + viewport.height())).ceil() as usize + 2;

    let march = |step: ScreenVector| {
        let mut cursor = anchor;
        let mut steps = 0;
        while viewport.contains(cursor) && steps < max_steps {
            cursor.add_vector(step);
            steps += 1;
        }
        cursor
    };

    Segment {
        start: march(-unit),
        end: march(unit),
    }
}
