//! The polymorphic shape contract.
//!
//! Every concrete variant implements [`Shape`]: the same state machine
//! (visibility, selection, hover), the same style resolution and the same
//! draw/hit-test entry points, with only the geometric path construction
//! differing. The shared logic lives here once — as provided trait methods
//! over a [`Common`] state block each variant embeds — rather than being
//! re-derived per variant.
//!
//! [`ShapeEnum`] gives uniform storage with static dispatch; overlays hold
//! `Vec<ShapeEnum>`.

mod circle;
mod ellipse;
mod line;
mod point;
mod polyline;
mod style;

pub use circle::CircleShape;
pub use ellipse::EllipseShape;
pub use line::LineShape;
pub use point::PointShape;
pub use polyline::PolylineShape;
pub use style::{InheritedStyle, ShapeOptions, Style};

pub(crate) use style::{resolve_line_width, resolve_stroke_color};

use std::fmt;

use enum_dispatch::enum_dispatch;
use uuid::Uuid;

use crate::color::Color;
use crate::overlay::OverlayId;
use crate::surface::Surface;
use crate::view::View;

/// Process-unique shape identifier, assigned at construction.
///
/// Displays as `<kind>-<uuid>`, e.g. `line-67e55044-…`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeId {
    kind: &'static str,
    uuid: Uuid,
}

impl ShapeId {
    pub(crate) fn new(kind: &'static str) -> ShapeId {
        ShapeId {
            kind,
            uuid: Uuid::new_v4(),
        }
    }

    /// The shape kind this id was minted for ("line", "circle", ...).
    pub fn kind(&self) -> &'static str {
        self.kind
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.kind, self.uuid)
    }
}

/// State every shape variant carries: identity, own style, interaction
/// flags and the non-owning container association.
#[derive(Debug, Clone)]
pub struct Common {
    id: ShapeId,
    style: Style,
    visible: bool,
    selected: bool,
    hovered: bool,
    footprint: bool,
    overlay: Option<OverlayId>,
}

impl Common {
    pub(crate) fn new(kind: &'static str, options: &ShapeOptions) -> Common {
        Common {
            id: ShapeId::new(kind),
            style: options.style(),
            visible: true,
            selected: false,
            hovered: false,
            footprint: false,
            overlay: None,
        }
    }

    pub(crate) fn attach(&mut self, overlay: OverlayId) {
        self.overlay = Some(overlay);
    }

    pub(crate) fn detach(&mut self) {
        self.overlay = None;
    }
}

/// The capability set every overlay shape implements.
///
/// State setters are plain flag flips with no immediate redraw; the view's
/// frame loop owns redrawing. `draw` and `is_in_stroke` never fail and never
/// panic: projection failures and geometric degeneracies skip the shape.
#[enum_dispatch]
pub trait Shape {
    fn common(&self) -> &Common;
    fn common_mut(&mut self) -> &mut Common;

    /// Build and (unless `suppress_stroke`) stroke this shape's path for the
    /// current view state. `inherited` is the container's default-style
    /// snapshot; pass `InheritedStyle::default()` for a detached shape.
    fn draw(
        &self,
        surface: &mut dyn Surface,
        view: &View,
        inherited: &InheritedStyle,
        suppress_stroke: bool,
    );

    fn id(&self) -> ShapeId {
        self.common().id
    }

    fn is_showing(&self) -> bool {
        self.common().visible
    }

    fn show(&mut self) {
        self.common_mut().visible = true;
    }

    fn hide(&mut self) {
        self.common_mut().visible = false;
    }

    fn is_selected(&self) -> bool {
        self.common().selected
    }

    fn select(&mut self) {
        self.common_mut().selected = true;
    }

    fn deselect(&mut self) {
        self.common_mut().selected = false;
    }

    fn is_hovered(&self) -> bool {
        self.common().hovered
    }

    fn hover(&mut self) {
        self.common_mut().hovered = true;
    }

    fn unhover(&mut self) {
        self.common_mut().hovered = false;
    }

    fn color(&self) -> Option<Color> {
        self.common().style.color
    }

    /// `None` restores inheritance from the container.
    fn set_color(&mut self, color: Option<Color>) {
        self.common_mut().style.color = color;
    }

    fn line_width(&self) -> Option<f64> {
        self.common().style.line_width
    }

    /// `None` restores inheritance from the container.
    fn set_line_width(&mut self, width: Option<f64>) {
        self.common_mut().style.line_width = width;
    }

    fn selection_color(&self) -> Option<Color> {
        self.common().style.selection_color
    }

    fn set_selection_color(&mut self, color: Option<Color>) {
        self.common_mut().style.selection_color = color;
    }

    fn hover_color(&self) -> Option<Color> {
        self.common().style.hover_color
    }

    fn set_hover_color(&mut self, color: Option<Color>) {
        self.common_mut().style.hover_color = color;
    }

    fn opacity(&self) -> Option<f32> {
        self.common().style.opacity
    }

    /// Whether this shape represents a catalog source's outline rather than
    /// a free-standing annotation.
    fn is_footprint(&self) -> bool {
        self.common().footprint
    }

    fn set_footprint(&mut self, footprint: bool) {
        self.common_mut().footprint = footprint;
    }

    /// The overlay this shape is attached to, if any. Never used for
    /// lifetime management.
    fn overlay(&self) -> Option<OverlayId> {
        self.common().overlay
    }

    /// Hit-test a pixel against this shape's rendered stroke.
    ///
    /// Replays `draw` in suppress-stroke mode on `surface`, then queries the
    /// surface's current path. Hidden shapes return false without touching
    /// the surface.
    fn is_in_stroke(
        &self,
        surface: &mut dyn Surface,
        view: &View,
        inherited: &InheritedStyle,
        x: f64,
        y: f64,
    ) -> bool {
        if !self.common().visible {
            return false;
        }
        self.draw(surface, view, inherited, true);
        surface.is_point_in_stroke(x, y)
    }
}

/// Uniform storage for any shape variant.
#[enum_dispatch(Shape)]
#[derive(Debug, Clone)]
pub enum ShapeEnum {
    Line(LineShape),
    Polyline(PolylineShape),
    Circle(CircleShape),
    Ellipse(EllipseShape),
    Point(PointShape),
}
