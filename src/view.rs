//! The per-frame rendering context and the projection engine boundary.

use std::fmt;

use glam::DVec2;

use crate::coords::{Frame, SkyCoord};
use crate::overlay::{Overlay, OverlayId};
use crate::shape::ShapeId;
use crate::surface::Surface;

/// The sky-to-pixel projection engine.
///
/// `project` is a pure function of the current view transform: it must be
/// callable many times per frame with no side effects, and returns `None`
/// for coordinates outside the representable domain. Closures implement
/// this directly, which keeps test projectors inline.
pub trait Projector {
    fn project(&self, coord: SkyCoord, frame: Frame) -> Option<DVec2>;
}

impl<F> Projector for F
where
    F: Fn(SkyCoord, Frame) -> Option<DVec2>,
{
    fn project(&self, coord: SkyCoord, frame: Frame) -> Option<DVec2> {
        self(coord, frame)
    }
}

/// Viewport dimensions, the projector handle and the ordered overlay list.
///
/// One `render` call is one frame: overlays draw in list order, each
/// overlay's shapes in insertion order, strictly sequentially. The drawing
/// surface is borrowed per call rather than owned, so the view itself stays
/// immutable during a frame.
pub struct View {
    width: f64,
    height: f64,
    projector: Box<dyn Projector>,
    overlays: Vec<Overlay>,
}

impl View {
    pub fn new(width: f64, height: f64, projector: impl Projector + 'static) -> View {
        View {
            width,
            height,
            projector: Box::new(projector),
            overlays: Vec::new(),
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Update the viewport dimensions (e.g. on window resize).
    pub fn set_size(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Replace the projection engine (e.g. on projection or frame change).
    pub fn set_projector(&mut self, projector: impl Projector + 'static) {
        self.projector = Box::new(projector);
    }

    /// Project a sky coordinate to pixels for the current view state.
    ///
    /// Normalizes engine misbehavior: a non-finite result is treated the
    /// same as a projection failure.
    pub fn project(&self, coord: SkyCoord, frame: Frame) -> Option<DVec2> {
        self.projector
            .project(coord, frame)
            .filter(|p| p.is_finite())
    }

    /// Append an overlay; later overlays render on top of earlier ones.
    pub fn add_overlay(&mut self, overlay: Overlay) -> OverlayId {
        let id = overlay.id();
        self.overlays.push(overlay);
        id
    }

    pub fn remove_overlay(&mut self, id: OverlayId) -> Option<Overlay> {
        let idx = self.overlays.iter().position(|o| o.id() == id)?;
        Some(self.overlays.remove(idx))
    }

    pub fn overlays(&self) -> &[Overlay] {
        &self.overlays
    }

    pub fn overlay(&self, id: OverlayId) -> Option<&Overlay> {
        self.overlays.iter().find(|o| o.id() == id)
    }

    pub fn overlay_mut(&mut self, id: OverlayId) -> Option<&mut Overlay> {
        self.overlays.iter_mut().find(|o| o.id() == id)
    }

    /// Draw one frame: every visible overlay, in order.
    pub fn render(&self, surface: &mut dyn Surface) {
        for overlay in &self.overlays {
            overlay.draw(surface, self);
        }
    }

    /// The topmost shape across all overlays whose rendered stroke contains
    /// the pixel. Overlays are swept in reverse order, topmost first.
    pub fn hit_test(&self, surface: &mut dyn Surface, x: f64, y: f64) -> Option<ShapeId> {
        self.overlays
            .iter()
            .rev()
            .find_map(|o| o.hit_test(surface, self, x, y))
    }
}

impl fmt::Debug for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("View")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("overlays", &self.overlays.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::overlay::OverlayOptions;
    use crate::shape::{LineShape, ShapeOptions};
    use crate::surface::RecordingSurface;
    use glam::dvec2;

    fn flat_view() -> View {
        View::new(200.0, 200.0, |c: SkyCoord, _: Frame| {
            Some(dvec2(c.lon, c.lat))
        })
    }

    fn line(y: f64, width: f64) -> LineShape {
        LineShape::new(
            SkyCoord::new(10.0, y),
            SkyCoord::new(150.0, y),
            Frame::Icrs,
            ShapeOptions::new().line_width(width),
        )
        .unwrap()
    }

    #[test]
    fn non_finite_projection_is_normalized_to_none() {
        let view = View::new(100.0, 100.0, |_: SkyCoord, _: Frame| {
            Some(dvec2(f64::NAN, 3.0))
        });
        assert_eq!(view.project(SkyCoord::new(0.0, 0.0), Frame::Icrs), None);
    }

    #[test]
    fn render_sweeps_overlays_in_order() {
        let mut view = flat_view();
        let mut bottom = Overlay::new(OverlayOptions::new().color(Color::rgb(1, 0, 0)));
        bottom.add(line(50.0, 2.0));
        let mut top = Overlay::new(OverlayOptions::new().color(Color::rgb(2, 0, 0)));
        top.add(line(70.0, 2.0));
        view.add_overlay(bottom);
        view.add_overlay(top);

        let mut s = RecordingSurface::new();
        view.render(&mut s);
        assert_eq!(s.stroke_count(), 2);
    }

    #[test]
    fn hit_test_prefers_later_overlays() {
        let mut view = flat_view();
        let mut bottom = Overlay::default();
        bottom.add(line(50.0, 4.0));
        let mut top = Overlay::default();
        let top_line = top.add(line(50.0, 4.0));
        view.add_overlay(bottom);
        view.add_overlay(top);

        let mut s = RecordingSurface::new();
        assert_eq!(view.hit_test(&mut s, 80.0, 50.0), Some(top_line));
        assert_eq!(view.hit_test(&mut s, 80.0, 120.0), None);
    }

    #[test]
    fn overlay_registry_round_trip() {
        let mut view = flat_view();
        let id = view.add_overlay(Overlay::new(OverlayOptions::new().name("fov")));
        assert_eq!(view.overlay(id).unwrap().name(), "fov");
        view.overlay_mut(id).unwrap().hide();
        assert!(!view.overlay(id).unwrap().is_showing());
        assert!(view.remove_overlay(id).is_some());
        assert!(view.overlay(id).is_none());
    }

    #[test]
    fn resize_changes_culling_viewport() {
        let mut view = flat_view();
        let mut overlay = Overlay::default();
        overlay.add(line(150.0, 2.0));
        view.add_overlay(overlay);

        let mut s = RecordingSurface::new();
        view.render(&mut s);
        assert_eq!(s.stroke_count(), 1);

        view.set_size(200.0, 100.0);
        let mut s = RecordingSurface::new();
        view.render(&mut s);
        assert_eq!(s.stroke_count(), 0);
    }
}
