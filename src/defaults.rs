//! Hard-coded fallback style values (all pixel units).

use crate::color::Color;

/// Stroke color when neither the shape nor its overlay supplies one.
pub const COLOR: Color = Color::rgb(0xff, 0x00, 0x00);

/// Selection highlight assigned to shapes at construction.
pub const SELECTION_COLOR: Color = Color::rgb(0x00, 0xff, 0x00);

/// Stroke width when neither the shape nor its overlay supplies one.
pub const LINE_WIDTH: f64 = 2.0;

/// Pixel radius of a point marker.
pub const POINT_RADIUS: f64 = 5.0;

/// Arrowhead flank length as a multiple of the resolved line width.
pub const ARROW_LENGTH_FACTOR: f64 = 3.0;

/// Brightening step applied to the base color of a selected shape.
pub const SELECT_BRIGHTEN: f64 = 50.0;

/// Brightening step applied to the base color of a hovered shape.
pub const HOVER_BRIGHTEN: f64 = 25.0;
