//! Pixel-space geometry helpers: bounding boxes, arrowhead construction and
//! point-to-segment distance.

use glam::DVec2;

/// Axis-aligned pixel bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bbox {
    pub min: DVec2,
    pub max: DVec2,
}

impl Bbox {
    /// Smallest box containing all `points`. `None` when `points` is empty.
    pub fn from_points(points: &[DVec2]) -> Option<Bbox> {
        let (&first, rest) = points.split_first()?;
        let mut bbox = Bbox { min: first, max: first };
        for &p in rest {
            bbox.min = bbox.min.min(p);
            bbox.max = bbox.max.max(p);
        }
        Some(bbox)
    }

    /// Box of half-extent `half` around `center`.
    pub fn around(center: DVec2, half: DVec2) -> Bbox {
        Bbox {
            min: center - half,
            max: center + half,
        }
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// True when the box has no overlap with the viewport
    /// `[0, width] x [0, height]`.
    pub fn is_outside(&self, width: f64, height: f64) -> bool {
        self.max.x < 0.0 || self.min.x > width || self.max.y < 0.0 || self.min.y > height
    }

    /// True when the box is smaller than `size` in both axes. Shapes this
    /// small would render as an indistinguishable dot at stroke width
    /// `size`.
    pub fn smaller_than(&self, size: f64) -> bool {
        self.width() < size && self.height() < size
    }
}

/// The two flank points of an open "V" arrowhead at `tip`, for a segment
/// arriving from `from`. Each flank sits at distance `rad` from the tip, at
/// ±135° from the segment direction.
pub fn arrow_flanks(from: DVec2, tip: DVec2, rad: f64) -> (DVec2, DVec2) {
    let angle = (tip.y - from.y).atan2(tip.x - from.x);
    let left = tip + rad * DVec2::from_angle(angle + std::f64::consts::FRAC_PI_4 * 3.0);
    let right = tip + rad * DVec2::from_angle(angle - std::f64::consts::FRAC_PI_4 * 3.0);
    (left, right)
}

/// Distance from `p` to the segment `a`-`b`.
pub fn dist_to_segment(p: DVec2, a: DVec2, b: DVec2) -> f64 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    #[test]
    fn bbox_from_points() {
        let bbox = Bbox::from_points(&[dvec2(3.0, -1.0), dvec2(-2.0, 4.0), dvec2(0.0, 0.0)]).unwrap();
        assert_eq!(bbox.min, dvec2(-2.0, -1.0));
        assert_eq!(bbox.max, dvec2(3.0, 4.0));
        assert_eq!(bbox.width(), 5.0);
        assert_eq!(bbox.height(), 5.0);
        assert!(Bbox::from_points(&[]).is_none());
    }

    #[test]
    fn bbox_viewport_rejection() {
        // fully left of the viewport
        assert!(Bbox::from_points(&[dvec2(-10.0, 5.0), dvec2(-1.0, 8.0)])
            .unwrap()
            .is_outside(100.0, 100.0));
        // below the viewport
        assert!(Bbox::from_points(&[dvec2(5.0, 110.0), dvec2(8.0, 150.0)])
            .unwrap()
            .is_outside(100.0, 100.0));
        // straddling an edge still intersects
        assert!(!Bbox::from_points(&[dvec2(-10.0, 5.0), dvec2(10.0, 8.0)])
            .unwrap()
            .is_outside(100.0, 100.0));
    }

    #[test]
    fn bbox_degenerate_threshold() {
        let sliver = Bbox::from_points(&[dvec2(0.0, 0.0), dvec2(1.0, 1.5)]).unwrap();
        assert!(sliver.smaller_than(2.0));
        // long but flat: one large axis is enough to survive
        let flat = Bbox::from_points(&[dvec2(0.0, 0.0), dvec2(10.0, 0.0)]).unwrap();
        assert!(!flat.smaller_than(2.0));
    }

    #[test]
    fn arrow_flanks_horizontal_segment() {
        // Segment (0,0) -> (10,0), flank radius 6: flanks at 0 ± 135°.
        let (left, right) = arrow_flanks(dvec2(0.0, 0.0), dvec2(10.0, 0.0), 6.0);
        let off = 6.0 * std::f64::consts::FRAC_1_SQRT_2;
        assert!((left.x - (10.0 - off)).abs() < 1e-6);
        assert!((left.y - off).abs() < 1e-6);
        assert!((right.x - (10.0 - off)).abs() < 1e-6);
        assert!((right.y + off).abs() < 1e-6);
    }

    #[test]
    fn arrow_flanks_sit_at_given_radius() {
        let tip = dvec2(4.0, -7.0);
        let (left, right) = arrow_flanks(dvec2(-3.0, 2.0), tip, 9.0);
        assert!((left.distance(tip) - 9.0).abs() < 1e-9);
        assert!((right.distance(tip) - 9.0).abs() < 1e-9);
    }

    #[test]
    fn segment_distance() {
        let a = dvec2(0.0, 0.0);
        let b = dvec2(10.0, 0.0);
        assert!((dist_to_segment(dvec2(5.0, 3.0), a, b) - 3.0).abs() < 1e-9);
        // beyond an endpoint, distance is to the endpoint
        assert!((dist_to_segment(dvec2(13.0, 4.0), a, b) - 5.0).abs() < 1e-9);
        // degenerate segment
        assert!((dist_to_segment(dvec2(3.0, 4.0), a, a) - 5.0).abs() < 1e-9);
    }
}
