//! Circles with a sky-anchored center and an angular radius.

use glam::DVec2;

use crate::coords::{Frame, SkyCoord};
use crate::errors::ShapeError;
use crate::geometry::Bbox;
use crate::surface::Surface;
use crate::view::View;

use super::style::{InheritedStyle, ShapeOptions};
use super::{Common, Shape, resolve_line_width, resolve_stroke_color};

/// A circle of `radius` degrees around a sky position.
///
/// The pixel radius is derived each frame by projecting the center and a
/// point displaced by the radius along the meridian (toward the equator, so
/// the probe stays away from the poles) and measuring the pixel distance.
#[derive(Debug, Clone)]
pub struct CircleShape {
    common: Common,
    center: SkyCoord,
    radius: f64,
    frame: Frame,
}

impl CircleShape {
    /// Fails on a non-finite center or a non-positive radius.
    pub fn new(
        center: SkyCoord,
        radius: f64,
        frame: Frame,
        options: ShapeOptions,
    ) -> Result<CircleShape, ShapeError> {
        if !center.is_finite() {
            return Err(ShapeError::NonFiniteCoordinate);
        }
        if !radius.is_finite() || radius <= 0.0 {
            return Err(ShapeError::InvalidRadius(radius));
        }
        Ok(CircleShape {
            common: Common::new("circle", &options),
            center,
            radius,
            frame,
        })
    }

    pub fn center(&self) -> SkyCoord {
        self.center
    }

    /// Angular radius in degrees.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn frame(&self) -> Frame {
        self.frame
    }

    pub fn set_center(&mut self, center: SkyCoord) {
        self.center = center;
    }

    fn edge_probe(&self) -> SkyCoord {
        let toward_equator = if self.center.lat >= 0.0 { 180.0 } else { 0.0 };
        self.center.displaced(self.radius, toward_equator)
    }
}

impl Shape for CircleShape {
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

        let Some(c) = view.project(self.center, self.frame) else {
            return;
        };
        let Some(edge) = view.project(self.edge_probe(), self.frame) else {
            return;
        };
        let r = c.distance(edge);

        let bbox = Bbox::around(c, DVec2::splat(r));
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
        surface.ellipse(c, DVec2::splat(r), 0.0);

        if !suppress_stroke {
            surface.stroke();
        }
    }
}
