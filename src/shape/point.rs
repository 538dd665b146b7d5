//! Point markers: a fixed-pixel-radius ring around a sky position.

use glam::DVec2;

use crate::coords::{Frame, SkyCoord};
use crate::defaults;
use crate::errors::ShapeError;
use crate::geometry::Bbox;
use crate::surface::Surface;
use crate::view::View;

use super::style::{InheritedStyle, ShapeOptions};
use super::{Common, Shape, resolve_line_width, resolve_stroke_color};

/// A marker at a single sky position. Unlike [`CircleShape`], the radius is
/// a screen-space quantity and does not change with zoom.
///
/// [`CircleShape`]: super::CircleShape
#[derive(Debug, Clone)]
pub struct PointShape {
    common: Common,
    position: SkyCoord,
    frame: Frame,
    radius: f64,
}

impl PointShape {
    /// Fails when the position is non-finite.
    pub fn new(
        position: SkyCoord,
        frame: Frame,
        options: ShapeOptions,
    ) -> Result<PointShape, ShapeError> {
        if !position.is_finite() {
            return Err(ShapeError::NonFiniteCoordinate);
        }
        Ok(PointShape {
            common: Common::new("point", &options),
            position,
            frame,
            radius: defaults::POINT_RADIUS,
        })
    }

    pub fn position(&self) -> SkyCoord {
        self.position
    }

    pub fn frame(&self) -> Frame {
        self.frame
    }

    /// Marker radius in pixels.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn set_position(&mut self, position: SkyCoord) {
        self.position = position;
    }

    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius;
    }
}

impl Shape for PointShape {
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
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return;
        }

        let Some(p) = view.project(self.position, self.frame) else {
            return;
        };

        let bbox = Bbox::around(p, DVec2::splat(self.radius));
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
        surface.ellipse(p, DVec2::splat(self.radius), 0.0);

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

    fn marker(lon: f64, lat: f64) -> PointShape {
        PointShape::new(SkyCoord::new(lon, lat), Frame::Icrs, ShapeOptions::default()).unwrap()
    }

    #[test]
    fn draws_a_fixed_radius_ring() {
        let p = marker(100.0, 100.0);
        let mut s = RecordingSurface::new();
        p.draw(&mut s, &flat_view(), &InheritedStyle::default(), false);
        assert!(s.ops().contains(&SurfaceOp::Ellipse {
            center: dvec2(100.0, 100.0),
            radii: dvec2(defaults::POINT_RADIUS, defaults::POINT_RADIUS),
            rotation: 0.0,
        }));
        assert_eq!(s.stroke_count(), 1);
    }

    #[test]
    fn marker_just_off_viewport_still_draws_when_ring_overlaps() {
        // center 3px left of the viewport, radius 5: the ring pokes in
        let p = marker(-3.0, 100.0);
        let mut s = RecordingSurface::new();
        p.draw(&mut s, &flat_view(), &InheritedStyle::default(), false);
        assert_eq!(s.stroke_count(), 1);
    }

    #[test]
    fn far_off_viewport_is_culled() {
        let p = marker(-50.0, 100.0);
        let mut s = RecordingSurface::new();
        p.draw(&mut s, &flat_view(), &InheritedStyle::default(), false);
        assert!(s.ops().is_empty());
    }

    #[test]
    fn oversized_line_width_swallows_the_marker() {
        let mut p = marker(100.0, 100.0);
        p.set_line_width(Some(20.0));
        let mut s = RecordingSurface::new();
        p.draw(&mut s, &flat_view(), &InheritedStyle::default(), false);
        assert_eq!(s.stroke_count(), 0);
    }

    #[test]
    fn degenerate_radius_is_skipped() {
        let mut p = marker(100.0, 100.0);
        p.set_radius(0.0);
        let mut s = RecordingSurface::new();
        p.draw(&mut s, &flat_view(), &InheritedStyle::default(), false);
        assert!(s.ops().is_empty());
        p.set_radius(f64::NAN);
        p.draw(&mut s, &flat_view(), &InheritedStyle::default(), false);
        assert!(s.ops().is_empty());
    }
}
