//! The drawing surface boundary.
//!
//! Shapes emit canvas-style path and style commands through the [`Surface`]
//! trait and never touch a rendering context directly. Hit-testing goes
//! through the same trait: a shape replays its path in suppress-stroke mode
//! and then asks the surface whether a pixel lies within the stroked region
//! of the current path. Rendering and hit-testing therefore share one
//! path-construction code path and cannot disagree on geometry.
//!
//! [`RecordingSurface`] is the bundled implementation: it records every
//! command (which makes it the natural test double) and answers
//! `is_point_in_stroke` by measuring pixel distance to the current path.

use glam::DVec2;

use crate::color::Color;
use crate::geometry::dist_to_segment;

/// Segments used to flatten one full ellipse turn for hit-testing.
const ELLIPSE_STEPS: usize = 64;

/// A canvas-style stroke target.
pub trait Surface {
    /// Start a new path, discarding the current one.
    fn begin_path(&mut self);
    /// Start a new subpath at `p`.
    fn move_to(&mut self, p: DVec2);
    /// Extend the current subpath with a segment to `p`.
    fn line_to(&mut self, p: DVec2);
    /// Close the current subpath back to its first point.
    fn close_path(&mut self);
    /// Add a full ellipse subpath with semi-axes `radii`, rotated by
    /// `rotation` radians.
    fn ellipse(&mut self, center: DVec2, radii: DVec2, rotation: f64);

    fn set_stroke_style(&mut self, color: Color);
    fn set_line_width(&mut self, width: f64);
    fn set_global_alpha(&mut self, alpha: f32);

    /// Stroke the current path with the current style.
    fn stroke(&mut self);

    /// Whether the pixel lies within the stroked region of the current path
    /// at the current line width.
    fn is_point_in_stroke(&self, x: f64, y: f64) -> bool;
}

/// One recorded surface command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceOp {
    BeginPath,
    MoveTo(DVec2),
    LineTo(DVec2),
    ClosePath,
    Ellipse {
        center: DVec2,
        radii: DVec2,
        rotation: f64,
    },
    StrokeStyle(Color),
    LineWidth(f64),
    GlobalAlpha(f32),
    Stroke,
}

#[derive(Debug, Clone, Default)]
struct Subpath {
    points: Vec<DVec2>,
    closed: bool,
}

/// A [`Surface`] that records commands and keeps the current path as flat
/// polylines for distance-based stroke hit-testing.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    ops: Vec<SurfaceOp>,
    path: Vec<Subpath>,
    line_width: f64,
}

impl RecordingSurface {
    pub fn new() -> RecordingSurface {
        RecordingSurface {
            ops: Vec::new(),
            path: Vec::new(),
            line_width: 1.0,
        }
    }

    /// Every command received so far, in order.
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Number of executed stroke commands.
    pub fn stroke_count(&self) -> usize {
        self.ops.iter().filter(|op| matches!(op, SurfaceOp::Stroke)).count()
    }

    /// The most recently set stroke color, if any.
    pub fn stroke_style(&self) -> Option<Color> {
        self.ops.iter().rev().find_map(|op| match op {
            SurfaceOp::StrokeStyle(c) => Some(*c),
            _ => None,
        })
    }

    /// The current line width.
    pub fn line_width(&self) -> f64 {
        self.line_width
    }

    /// Forget all recorded commands and reset the path and line width.
    pub fn reset(&mut self) {
        self.ops.clear();
        self.path.clear();
        self.line_width = 1.0;
    }

    fn current_subpath(&mut self) -> &mut Subpath {
        if self.path.is_empty() {
            self.path.push(Subpath::default());
        }
        self.path.last_mut().unwrap()
    }
}

impl Default for RecordingSurface {
    fn default() -> RecordingSurface {
        RecordingSurface::new()
    }
}

impl Surface for RecordingSurface {
    fn begin_path(&mut self) {
        self.ops.push(SurfaceOp::BeginPath);
        self.path.clear();
    }

    fn move_to(&mut self, p: DVec2) {
        self.ops.push(SurfaceOp::MoveTo(p));
        self.path.push(Subpath {
            points: vec![p],
            closed: false,
        });
    }

    fn line_to(&mut self, p: DVec2) {
        self.ops.push(SurfaceOp::LineTo(p));
        self.current_subpath().points.push(p);
    }

    fn close_path(&mut self) {
        self.ops.push(SurfaceOp::ClosePath);
        if let Some(sub) = self.path.last_mut() {
            sub.closed = true;
        }
    }

    fn ellipse(&mut self, center: DVec2, radii: DVec2, rotation: f64) {
        self.ops.push(SurfaceOp::Ellipse {
            center,
            radii,
            rotation,
        });
        let rot = DVec2::from_angle(rotation);
        let points = (0..ELLIPSE_STEPS)
            .map(|i| {
                let theta = std::f64::consts::TAU * i as f64 / ELLIPSE_STEPS as f64;
                let local = DVec2::new(radii.x * theta.cos(), radii.y * theta.sin());
                center + rot.rotate(local)
            })
            .collect();
        self.path.push(Subpath {
            points,
            closed: true,
        });
    }

    fn set_stroke_style(&mut self, color: Color) {
        self.ops.push(SurfaceOp::StrokeStyle(color));
    }

    fn set_line_width(&mut self, width: f64) {
        self.ops.push(SurfaceOp::LineWidth(width));
        self.line_width = width;
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.ops.push(SurfaceOp::GlobalAlpha(alpha));
    }

    fn stroke(&mut self) {
        self.ops.push(SurfaceOp::Stroke);
    }

    fn is_point_in_stroke(&self, x: f64, y: f64) -> bool {
        let p = DVec2::new(x, y);
        let half_width = self.line_width / 2.0;
        for sub in &self.path {
            if sub.points.len() < 2 {
                continue;
            }
            let mut segments: Vec<(DVec2, DVec2)> = sub
                .points
                .windows(2)
                .map(|w| (w[0], w[1]))
                .collect();
            if sub.closed {
                segments.push((*sub.points.last().unwrap(), sub.points[0]));
            }
            if segments
                .iter()
                .any(|&(a, b)| dist_to_segment(p, a, b) <= half_width)
            {
                return true;
            }
        }
        false
    }
}
