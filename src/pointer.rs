//! Screen-space regions for pointer hit testing.

use crate::float::Float;
use crate::vec::Vec2;

/// Axis-aligned bounding region of one string, in screen pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Region<F: Float> {
    pub left: F,
    pub top: F,
    pub width: F,
    pub height: F,
}

impl<F: Float> Region<F> {
    pub fn new(left: F, top: F, width: F, height: F) -> Self {
        Region { left, top, width, height }
    }

    /// Inclusive containment test, matching element bounding-box hit rules.
    pub fn contains(&self, p: Vec2<F>) -> bool {
        p.x >= self.left
            && p.x <= self.left + self.width
            && p.y >= self.top
            && p.y <= self.top + self.height
    }

    /// Map a screen point into this region's unit box.
    ///
    /// Output components are in [0, 1] when the point is inside the region.
    pub fn normalized(&self, p: Vec2<F>) -> Vec2<F> {
        Vec2::new(
            (p.x - self.left) / self.width,
            (p.y - self.top) / self.height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_edge_inclusive() {
        let r = Region::new(10.0f32, 20.0, 100.0, 30.0);
        assert!(r.contains(Vec2::new(10.0, 20.0)));
        assert!(r.contains(Vec2::new(110.0, 50.0)));
        assert!(!r.contains(Vec2::new(9.9, 25.0)));
        assert!(!r.contains(Vec2::new(50.0, 50.1)));
    }

    #[test]
    fn normalized_maps_corners() {
        let r = Region::new(10.0f32, 20.0, 100.0, 30.0);
        let tl = r.normalized(Vec2::new(10.0, 20.0));
        let br = r.normalized(Vec2::new(110.0, 50.0));
        assert!((tl.x).abs() < 1e-6 && (tl.y).abs() < 1e-6);
        assert!((br.x - 1.0).abs() < 1e-6 && (br.y - 1.0).abs() < 1e-6);
    }
}
