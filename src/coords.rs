//! Sky-frame coordinates.
//!
//! Shape control points live in a named celestial reference system, never in
//! pixels. Pixel positions are derived per frame through the view's
//! projector, because the projection can change between frames.

/// A celestial reference system in which coordinates are expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Frame {
    /// Equatorial ICRS (J2000).
    #[default]
    Icrs,
    /// Galactic longitude/latitude.
    Galactic,
}

/// A position on the celestial sphere, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkyCoord {
    /// Longitude-like angle (right ascension for [`Frame::Icrs`]).
    pub lon: f64,
    /// Latitude-like angle (declination for [`Frame::Icrs`]).
    pub lat: f64,
}

impl SkyCoord {
    pub const fn new(lon: f64, lat: f64) -> SkyCoord {
        SkyCoord { lon, lat }
    }

    pub fn is_finite(self) -> bool {
        self.lon.is_finite() && self.lat.is_finite()
    }

    /// The coordinate displaced by `dist` degrees along `position_angle`
    /// degrees (0 = toward the north pole, 90 = toward increasing
    /// longitude), using the small-offset tangent-plane approximation.
    pub fn displaced(self, dist: f64, position_angle: f64) -> SkyCoord {
        let pa = position_angle.to_radians();
        let lat = self.lat + dist * pa.cos();
        let cos_lat = self.lat.to_radians().cos();
        let lon = if cos_lat.abs() < 1e-9 {
            self.lon
        } else {
            self.lon + dist * pa.sin() / cos_lat
        };
        SkyCoord { lon, lat }
    }
}
