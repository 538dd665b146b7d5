//! A line is a graphical overlay connecting two sky positions, with an
//! optional arrowhead at the second endpoint.

use crate::coords::{Frame, SkyCoord};
use crate::defaults;
use crate::errors::ShapeError;
use crate::geometry::{Bbox, arrow_flanks};
use crate::surface::Surface;
use crate::view::View;

use super::style::{InheritedStyle, ShapeOptions};
use super::{Common, Shape, resolve_line_width, resolve_stroke_color};

/// A single sky-anchored segment.
#[derive(Debug, Clone)]
pub struct LineShape {
    common: Common,
    from: SkyCoord,
    to: SkyCoord,
    frame: Frame,
    arrow: bool,
}

impl LineShape {
    /// Fails when either endpoint is non-finite.
    pub fn new(
        from: SkyCoord,
        to: SkyCoord,
        frame: Frame,
        options: ShapeOptions,
    ) -> Result<LineShape, ShapeError> {
        if !from.is_finite() || !to.is_finite() {
            return Err(ShapeError::NonFiniteCoordinate);
        }
        Ok(LineShape {
            common: Common::new("line", &options),
            from,
            to,
            frame,
            arrow: options.arrow,
        })
    }

    pub fn from_position(&self) -> SkyCoord {
        self.from
    }

    pub fn to_position(&self) -> SkyCoord {
        self.to
    }

    pub fn frame(&self) -> Frame {
        self.frame
    }

    pub fn has_arrow(&self) -> bool {
        self.arrow
    }

    /// Move the first endpoint.
    pub fn set_from_position(&mut self, from: SkyCoord) {
        self.from = from;
    }

    /// Move the second endpoint (the arrowhead end).
    pub fn set_to_position(&mut self, to: SkyCoord) {
        self.to = to;
    }
}

impl Shape for LineShape {
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

        let Some(v1) = view.project(self.from, self.frame) else {
            return;
        };
        let Some(v2) = view.project(self.to, self.frame) else {
            return;
        };

        let bbox = Bbox {
            min: v1.min(v2),
            max: v1.max(v2),
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

        // too small to distinguish from a dot at this stroke width
        if bbox.smaller_than(width) {
            return;
        }

        surface.set_stroke_style(color);
        surface.set_line_width(width);
        surface.set_global_alpha(self.common.style.opacity.unwrap_or(1.0));

        surface.begin_path();
        surface.move_to(v1);
        surface.line_to(v2);

        if self.arrow {
            // Arrow proportions are a screen-space concern: the angle comes
            // from the projected vector, not the sky-frame one.
            let rad = width * defaults::ARROW_LENGTH_FACTOR;
            let (left, right) = arrow_flanks(v1, v2, rad);
            surface.move_to(left);
            surface.line_to(v2);
            surface.line_to(right);
        }

        if !suppress_stroke {
            surface.stroke();
        }
    }
}
