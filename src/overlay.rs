//! Overlays: insertion-ordered shape containers with inheritable defaults.
//!
//! An overlay owns its shapes. Members are drawn strictly in insertion
//! order, so later shapes paint on top of earlier ones — that ordering is a
//! rendering contract, not an optimization. A shape keeps a non-owning
//! [`OverlayId`] back-association while attached, used only to identify its
//! container, never to manage lifetime.

use std::fmt;

use uuid::Uuid;

use crate::color::Color;
use crate::log;
use crate::shape::{InheritedStyle, Shape, ShapeEnum, ShapeId};
use crate::surface::Surface;
use crate::view::View;

/// Process-unique overlay identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OverlayId(Uuid);

impl fmt::Display for OverlayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "overlay-{}", self.0)
    }
}

/// Construction options for an overlay.
#[derive(Debug, Clone, Default)]
pub struct OverlayOptions {
    pub name: Option<String>,
    pub color: Option<Color>,
    pub line_width: Option<f64>,
}

impl OverlayOptions {
    pub fn new() -> OverlayOptions {
        OverlayOptions::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> OverlayOptions {
        self.name = Some(name.into());
        self
    }

    pub fn color(mut self, color: Color) -> OverlayOptions {
        self.color = Some(color);
        self
    }

    pub fn line_width(mut self, width: f64) -> OverlayOptions {
        self.line_width = Some(width);
        self
    }
}

/// An insertion-ordered group of shapes sharing default style values.
#[derive(Debug)]
pub struct Overlay {
    id: OverlayId,
    name: String,
    color: Option<Color>,
    line_width: Option<f64>,
    visible: bool,
    shapes: Vec<ShapeEnum>,
}

impl Overlay {
    pub fn new(options: OverlayOptions) -> Overlay {
        Overlay {
            id: OverlayId(Uuid::new_v4()),
            name: options.name.unwrap_or_else(|| "overlay".to_string()),
            color: options.color,
            line_width: options.line_width,
            visible: true,
            shapes: Vec::new(),
        }
    }

    pub fn id(&self) -> OverlayId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Default stroke color members inherit when they have none of their
    /// own.
    pub fn default_color(&self) -> Option<Color> {
        self.color
    }

    /// Default stroke width members inherit when they have none of their
    /// own.
    pub fn default_line_width(&self) -> Option<f64> {
        self.line_width
    }

    pub fn is_showing(&self) -> bool {
        self.visible
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    /// A hidden overlay draws and hit-tests none of its shapes.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// The per-frame snapshot of this overlay's defaults, as consumed by
    /// member shapes during style resolution.
    pub fn inherited(&self) -> InheritedStyle {
        InheritedStyle {
            color: self.color,
            line_width: self.line_width,
        }
    }

    /// Append a shape, attaching it to this overlay. Returns its id.
    pub fn add(&mut self, shape: impl Into<ShapeEnum>) -> ShapeId {
        let mut shape = shape.into();
        shape.common_mut().attach(self.id);
        let id = shape.id();
        log::debug!(shape = %id, overlay = %self.id, "shape attached");
        self.shapes.push(shape);
        id
    }

    /// Detach and return the shape with `id`, preserving the order of the
    /// rest.
    pub fn remove(&mut self, id: ShapeId) -> Option<ShapeEnum> {
        let idx = self.shapes.iter().position(|s| s.id() == id)?;
        let mut shape = self.shapes.remove(idx);
        shape.common_mut().detach();
        log::debug!(shape = %id, overlay = %self.id, "shape detached");
        Some(shape)
    }

    /// Detach every shape.
    pub fn clear(&mut self) {
        for shape in &mut self.shapes {
            shape.common_mut().detach();
        }
        self.shapes.clear();
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Members in insertion order.
    pub fn shapes(&self) -> &[ShapeEnum] {
        &self.shapes
    }

    pub fn get(&self, id: ShapeId) -> Option<&ShapeEnum> {
        self.shapes.iter().find(|s| s.id() == id)
    }

    pub fn get_mut(&mut self, id: ShapeId) -> Option<&mut ShapeEnum> {
        self.shapes.iter_mut().find(|s| s.id() == id)
    }

    /// Draw every visible member in insertion order.
    pub fn draw(&self, surface: &mut dyn Surface, view: &View) {
        if !self.visible {
            return;
        }
        let inherited = self.inherited();
        for shape in &self.shapes {
            shape.draw(surface, view, &inherited, false);
        }
    }

    /// The topmost member whose rendered stroke contains the pixel.
    ///
    /// Members are tested in reverse insertion order so the shape painted
    /// last wins, matching what the user sees.
    pub fn hit_test(
        &self,
        surface: &mut dyn Surface,
        view: &View,
        x: f64,
        y: f64,
    ) -> Option<ShapeId> {
        if !self.visible {
            return None;
        }
        let inherited = self.inherited();
        self.shapes
            .iter()
            .rev()
            .find(|s| s.is_in_stroke(surface, view, &inherited, x, y))
            .map(|s| s.id())
    }
}

impl Default for Overlay {
    fn default() -> Overlay {
        Overlay::new(OverlayOptions::default())
    }
}
