//! Style state and the inheritance-resolution rules.
//!
//! Every style field is optional on the shape; `None` means "inherit from
//! the container". Resolution is a pure function over
//! (own value, container default, hard default), so the precedence rules are
//! testable without drawing anything.

use crate::color::Color;
use crate::defaults;

/// A shape's own style. `None` fields inherit from the container.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Style {
    pub color: Option<Color>,
    pub opacity: Option<f32>,
    pub line_width: Option<f64>,
    pub selection_color: Option<Color>,
    pub hover_color: Option<Color>,
}

/// Snapshot of a container's default style, taken once per frame by the
/// overlay draw loop and passed to every member shape.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InheritedStyle {
    pub color: Option<Color>,
    pub line_width: Option<f64>,
}

/// Construction options for any shape variant.
///
/// Recognized keys mirror the facade contract: `color`, `opacity`,
/// `line_width`, `selection_color` (default `#00ff00`), `hover_color` and
/// `arrow` (default false, honored by line shapes only).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeOptions {
    pub color: Option<Color>,
    pub opacity: Option<f32>,
    pub line_width: Option<f64>,
    pub selection_color: Option<Color>,
    pub hover_color: Option<Color>,
    pub arrow: bool,
}

impl Default for ShapeOptions {
    fn default() -> ShapeOptions {
        ShapeOptions {
            color: None,
            opacity: None,
            line_width: None,
            selection_color: Some(defaults::SELECTION_COLOR),
            hover_color: None,
            arrow: false,
        }
    }
}

impl ShapeOptions {
    pub fn new() -> ShapeOptions {
        ShapeOptions::default()
    }

    pub fn color(mut self, color: Color) -> ShapeOptions {
        self.color = Some(color);
        self
    }

    pub fn opacity(mut self, opacity: f32) -> ShapeOptions {
        self.opacity = Some(opacity);
        self
    }

    pub fn line_width(mut self, width: f64) -> ShapeOptions {
        self.line_width = Some(width);
        self
    }

    pub fn selection_color(mut self, color: Color) -> ShapeOptions {
        self.selection_color = Some(color);
        self
    }

    pub fn hover_color(mut self, color: Color) -> ShapeOptions {
        self.hover_color = Some(color);
        self
    }

    pub fn arrow(mut self, arrow: bool) -> ShapeOptions {
        self.arrow = arrow;
        self
    }

    pub(crate) fn style(&self) -> Style {
        Style {
            color: self.color,
            opacity: self.opacity,
            line_width: self.line_width,
            selection_color: self.selection_color,
            hover_color: self.hover_color,
        }
    }
}

/// Three-level precedence: own value, then container default, then the hard
/// fallback.
pub(crate) fn resolve<T: Copy>(own: Option<T>, inherited: Option<T>, fallback: T) -> T {
    own.or(inherited).unwrap_or(fallback)
}

/// The stroke color for one draw call. Selection is checked before hover, so
/// selection wins when both states are set.
pub(crate) fn resolve_stroke_color(
    style: &Style,
    selected: bool,
    hovered: bool,
    inherited: &InheritedStyle,
) -> Color {
    let base = resolve(style.color, inherited.color, defaults::COLOR);
    if selected {
        style
            .selection_color
            .unwrap_or_else(|| base.brighten(defaults::SELECT_BRIGHTEN))
    } else if hovered {
        style
            .hover_color
            .unwrap_or_else(|| base.brighten(defaults::HOVER_BRIGHTEN))
    } else {
        base
    }
}

pub(crate) fn resolve_line_width(style: &Style, inherited: &InheritedStyle) -> f64 {
    resolve(style.line_width, inherited.line_width, defaults::LINE_WIDTH)
}
