//! Open polylines and closed polygons over sky-anchored vertices.

use crate::coords::{Frame, SkyCoord};
use crate::errors::ShapeError;
use crate::geometry::Bbox;
use crate::surface::Surface;
use crate::view::View;

use super::style::{InheritedStyle, ShapeOptions};
use super::{Common, Shape, resolve_line_width, resolve_stroke_color};

/// A chain of segments through sky positions, optionally closed into a
/// polygon.
#[derive(Debug, Clone)]
pub struct PolylineShape {
    common: Common,
    vertices: Vec<SkyCoord>,
    frame: Frame,
    closed: bool,
}

impl PolylineShape {
    /// An open polyline. Needs at least 2 finite vertices.
    pub fn new(
        vertices: Vec<SkyCoord>,
        frame: Frame,
        options: ShapeOptions,
    ) -> Result<PolylineShape, ShapeError> {
        Self::build(vertices, frame, options, false, 2, "polyline")
    }

    /// A closed polygon. Needs at least 3 finite vertices; the closing
    /// segment is implicit.
    pub fn polygon(
        vertices: Vec<SkyCoord>,
        frame: Frame,
        options: ShapeOptions,
    ) -> Result<PolylineShape, ShapeError> {
        Self::build(vertices, frame, options, true, 3, "polygon")
    }

    fn build(
        vertices: Vec<SkyCoord>,
        frame: Frame,
        options: ShapeOptions,
        closed: bool,
        min: usize,
        kind: &'static str,
    ) -> Result<PolylineShape, ShapeError> {
        if vertices.len() < min {
            return Err(ShapeError::TooFewVertices {
                min,
                got: vertices.len(),
            });
        }
        if vertices.iter().any(|v| !v.is_finite()) {
            return Err(ShapeError::NonFiniteCoordinate);
        }
        Ok(PolylineShape {
            common: Common::new(kind, &options),
            vertices,
            frame,
            closed,
        })
    }

    pub fn vertices(&self) -> &[SkyCoord] {
        &self.vertices
    }

    pub fn frame(&self) -> Frame {
        self.frame
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl Shape for PolylineShape {
    fn common(&self) -> &Common {
        &self.common
    }

    fn common_mut(&mut self) -> &mut Common {
        &mut self.common
    }

    fn draw(
        &self,
        surface: &mut dyn Surface,
        view: &View,
        inherited: &InheritedStyle,
        suppress_stroke: bool,
    ) {
        if !self.common.visible {
            return;
        }

        // All-or-nothing projection: any vertex outside the representable
        // domain skips the whole shape for this frame.
        let mut projected = Vec::with_capacity(self.vertices.len());
        for &v in &self.vertices {
            let Some(p) = view.project(v, self.frame) else {
                return;
            };
            projected.push(p);
        }

        let Some(bbox) = Bbox::from_points(&projected) else {
            return;
        };
        if bbox.is_outside(view.width(), view.height()) {
            return;
        }

        let color = resolve_stroke_color(
            &self.common.style,
            self.common.selected,
            self.common.hovered,
            inherited,
        );
        let width = resolve_line_width(&self.common.style, inherited);
        if bbox.smaller_than(width) {
            return;
        }

        surface.set_stroke_style(color);
        surface.set_line_width(width);
        surface.set_global_alpha(self.common.style.opacity.unwrap_or(1.0));

        surface.begin_path();
        surface.move_to(projected[0]);
        for &p in &projected[1..] {
            surface.line_to(p);
        }
        if self.closed {
            surface.close_path();
        }

        if !suppress_stroke {
            surface.stroke();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{RecordingSurface, SurfaceOp};
    use glam::dvec2;

    fn flat_view() -> View {
        View::new(200.0, 200.0, |c: SkyCoord, _: Frame| {
            Some(dvec2(c.lon, c.lat))
        })
    }

    fn coords(pts: &[(f64, f64)]) -> Vec<SkyCoord> {
        pts.iter().map(|&(lon, lat)| SkyCoord::new(lon, lat)).collect()
    }

    #[test]
    fn polyline_needs_two_vertices() {
        let err = PolylineShape::new(coords(&[(0.0, 0.0)]), Frame::Icrs, ShapeOptions::default());
        assert_eq!(err.unwrap_err(), ShapeError::TooFewVertices { min: 2, got: 1 });
    }

    #[test]
    fn polygon_needs_three_vertices() {
        let err = PolylineShape::polygon(
            coords(&[(0.0, 0.0), (10.0, 0.0)]),
            Frame::Icrs,
            ShapeOptions::default(),
        );
        assert_eq!(err.unwrap_err(), ShapeError::TooFewVertices { min: 3, got: 2 });
    }

    #[test]
    fn rejects_non_finite_vertex() {
        let err = PolylineShape::new(
            coords(&[(0.0, 0.0), (f64::NAN, 1.0)]),
            Frame::Icrs,
            ShapeOptions::default(),
        );
        assert_eq!(err.unwrap_err(), ShapeError::NonFiniteCoordinate);
    }

    #[test]
    fn open_polyline_path() {
        let p = PolylineShape::new(
            coords(&[(10.0, 10.0), (50.0, 80.0), (120.0, 40.0)]),
            Frame::Icrs,
            ShapeOptions::default(),
        )
        .unwrap();
        let mut s = RecordingSurface::new();
        p.draw(&mut s, &flat_view(), &InheritedStyle::default(), false);
        assert!(s.ops().contains(&SurfaceOp::MoveTo(dvec2(10.0, 10.0))));
        assert!(s.ops().contains(&SurfaceOp::LineTo(dvec2(120.0, 40.0))));
        assert!(!s.ops().contains(&SurfaceOp::ClosePath));
        assert_eq!(s.stroke_count(), 1);
    }

    #[test]
    fn polygon_closes_the_path() {
        let p = PolylineShape::polygon(
            coords(&[(10.0, 10.0), (80.0, 10.0), (40.0, 60.0)]),
            Frame::Icrs,
            ShapeOptions::default(),
        )
        .unwrap();
        assert!(p.is_closed());
        assert_eq!(p.id().kind(), "polygon");
        let mut s = RecordingSurface::new();
        p.draw(&mut s, &flat_view(), &InheritedStyle::default(), false);
        assert!(s.ops().contains(&SurfaceOp::ClosePath));
        assert_eq!(s.stroke_count(), 1);
    }

    #[test]
    fn one_unprojectable_vertex_skips_everything() {
        let view = View::new(200.0, 200.0, |c: SkyCoord, _: Frame| {
            (c.lat < 50.0).then(|| dvec2(c.lon, c.lat))
        });
        let p = PolylineShape::new(
            coords(&[(10.0, 10.0), (50.0, 80.0), (120.0, 40.0)]),
            Frame::Icrs,
            ShapeOptions::default(),
        )
        .unwrap();
        let mut s = RecordingSurface::new();
        p.draw(&mut s, &view, &InheritedStyle::default(), false);
        assert!(s.ops().is_empty(), "no partial rendering");
    }

    #[test]
    fn polygon_closing_segment_is_hit_testable() {
        let p = PolylineShape::polygon(
            coords(&[(10.0, 10.0), (110.0, 10.0), (110.0, 110.0)]),
            Frame::Icrs,
            ShapeOptions::new().line_width(4.0),
        )
        .unwrap();
        let mut s = RecordingSurface::new();
        // midpoint of the implicit closing segment (110,110) -> (10,10)
        assert!(p.is_in_stroke(&mut s, &flat_view(), &InheritedStyle::default(), 60.0, 60.0));
        // centroid region is not part of the stroke
        assert!(!p.is_in_stroke(&mut s, &flat_view(), &InheritedStyle::default(), 90.0, 30.0));
    }
}
