//! Sky-anchored vector overlays.
//!
//! `skymark` draws annotation shapes — lines, polylines, polygons, circles,
//! ellipses, point markers — over a celestial-coordinate visualization.
//! Control points live in a sky frame, never in pixels: every frame, each
//! shape re-projects through the view's [`Projector`], culls itself against
//! the viewport, resolves its stroke style (own values, then its overlay's
//! defaults, then hard fallbacks, with selection/hover overrides) and emits
//! canvas-style commands to a [`Surface`].
//!
//! Hit-testing replays the identical path construction in suppress-stroke
//! mode and asks the surface whether the pixel lies in the stroked region,
//! so rendering and picking can never disagree on geometry.
//!
//! ```
//! use glam::dvec2;
//! use skymark::{
//!     Color, Frame, LineShape, Overlay, OverlayOptions, RecordingSurface, ShapeOptions,
//!     SkyCoord, View,
//! };
//!
//! // a trivial projector: degrees map straight to pixels
//! let mut view = View::new(800.0, 600.0, |c: SkyCoord, _: Frame| {
//!     Some(dvec2(c.lon, c.lat))
//! });
//!
//! let mut overlay = Overlay::new(OverlayOptions::new().color(Color::rgb(0xee, 0x23, 0x45)));
//! overlay.add(
//!     LineShape::new(
//!         SkyCoord::new(100.0, 100.0),
//!         SkyCoord::new(400.0, 300.0),
//!         Frame::Icrs,
//!         ShapeOptions::new().arrow(true),
//!     )
//!     .unwrap(),
//! );
//! view.add_overlay(overlay);
//!
//! let mut surface = RecordingSurface::new();
//! view.render(&mut surface);
//! assert_eq!(surface.stroke_count(), 1);
//! ```

pub mod color;
pub mod coords;
pub mod defaults;
pub mod errors;
pub mod geometry;
pub mod log;
pub mod overlay;
pub mod shape;
pub mod surface;
pub mod view;

pub use color::Color;
pub use coords::{Frame, SkyCoord};
pub use errors::{ColorParseError, ShapeError};
pub use overlay::{Overlay, OverlayId, OverlayOptions};
pub use shape::{
    CircleShape, EllipseShape, InheritedStyle, LineShape, PointShape, PolylineShape, Shape,
    ShapeEnum, ShapeId, ShapeOptions, Style,
};
pub use surface::{RecordingSurface, Surface, SurfaceOp};
pub use view::{Projector, View};
