//! Ellipses with a sky-anchored center, angular semi-axes and a position
//! angle.

use glam::DVec2;

use crate::coords::{Frame, SkyCoord};
use crate::errors::ShapeError;
use crate::geometry::Bbox;
use crate::surface::Surface;
use crate::view::View;

use super::style::{InheritedStyle, ShapeOptions};
use super::{Common, Shape, resolve_line_width, resolve_stroke_color};

/// An ellipse with semi-axes in degrees and a position angle (degrees,
/// 0 = major axis toward the north pole).
///
/// Screen geometry is derived each frame from two projections: the center,
/// and the major-axis endpoint displaced by `semi_major` along the position
/// angle. The projected vector fixes both the pixel semi-major axis and the
/// screen rotation; the semi-minor axis scales by the axis ratio.
#[derive(Debug, Clone)]
pub struct EllipseShape {
    common: Common,
    center: SkyCoord,
    semi_major: f64,
    semi_minor: f64,
    angle: f64,
    frame: Frame,
}

impl EllipseShape {
    /// Fails on a non-finite center, non-positive or unordered semi-axes,
    /// or a non-finite position angle.
    pub fn new(
        center: SkyCoord,
        semi_major: f64,
        semi_minor: f64,
        angle: f64,
        frame: Frame,
        options: ShapeOptions,
    ) -> Result<EllipseShape, ShapeError> {
        if !center.is_finite() {
            return Err(ShapeError::NonFiniteCoordinate);
        }
        let finite_positive = |v: f64| v.is_finite() && v > 0.0;
        if !finite_positive(semi_major) || !finite_positive(semi_minor) || semi_minor > semi_major
        {
            return Err(ShapeError::InvalidAxes {
                major: semi_major,
                minor: semi_minor,
            });
        }
        if !angle.is_finite() {
            return Err(ShapeError::NonFiniteAngle);
        }
        Ok(EllipseShape {
            common: Common::new("ellipse", &options),
            center,
            semi_major,
            semi_minor,
            angle,
            frame,
        })
    }

    pub fn center(&self) -> SkyCoord {
        self.center
    }

    /// Semi-major axis in degrees.
    pub fn semi_major(&self) -> f64 {
        self.semi_major
    }

    /// Semi-minor axis in degrees.
    pub fn semi_minor(&self) -> f64 {
        self.semi_minor
    }

    /// Position angle in degrees.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn frame(&self) -> Frame {
        self.frame
    }

    pub fn set_center(&mut self, center: SkyCoord) {
        self.center = center;
    }
}

impl Shape for EllipseShape {
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
        let tip_sky = self.center.displaced(self.semi_major, self.angle);
        let Some(tip) = view.project(tip_sky, self.frame) else {
            return;
        };

        let axis = tip - c;
        let a = axis.length();
        if a == 0.0 {
            return;
        }
        let b = a * (self.semi_minor / self.semi_major);
        let rotation = axis.y.atan2(axis.x);

        // conservative: circumscribes the rotated ellipse
        let bbox = Bbox::around(c, DVec2::splat(a.max(b)));
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
        surface.ellipse(c, DVec2::new(a, b), rotation);

        if !suppress_stroke {
            surface.stroke();
        }
    }
}
