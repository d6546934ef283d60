//! Smooth curve serialization for a chain's current shape.

use crate::float::Float;
use crate::point::PluckPoint;
use alloc::string::String;
use core::fmt::Write;

/// Serialize a chain's points into an SVG path description in pixel space.
///
/// Starts with a move to the first point, then one quadratic segment per
/// consecutive pair: the control point is the first point of the pair and
/// the endpoint is the pair's midpoint. Threading the curve through the
/// midpoints keeps the piecewise-quadratic join visually smooth.
///
/// Pure state-in, path-out: the caller owns the path element and feeds the
/// returned string to its `d` attribute.
pub fn path_data<F: Float>(points: &[PluckPoint<F>], width: F, height: F) -> String {
    let mut d = String::new();
    if points.is_empty() {
        return d;
    }

    let _ = write!(d, "M 0 {}", points[0].y * height);
    for pair in points.windows(2) {
        let (p1, p2) = (&pair[0], &pair[1]);
        let xc = (p1.x + p2.x) * width / F::two();
        let yc = (p1.y + p2.y) * height / F::two();
        let _ = write!(d, " Q {} {}, {} {}", p1.x * width, p1.y * height, xc, yc);
    }
    d
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::PluckChain;
    use crate::config::Tuning;

    #[test]
    fn path_starts_at_first_point() {
        let chain: PluckChain<f32> = PluckChain::new(4, &Tuning::new()).unwrap();
        let d = path_data(chain.points(), 100.0, 10.0);
        assert!(d.starts_with("M 0 5"), "unexpected path start: {}", d);
    }

    #[test]
    fn one_quadratic_per_segment() {
        let chain: PluckChain<f32> = PluckChain::new(40, &Tuning::new()).unwrap();
        let d = path_data(chain.points(), 300.0, 12.0);
        assert_eq!(d.matches('Q').count(), 40);
    }

    #[test]
    fn segment_endpoint_is_midpoint() {
        let chain: PluckChain<f32> = PluckChain::new(2, &Tuning::new()).unwrap();
        // Points at x = 0, 0.5, 1 and y = 0.5: first segment ends at the
        // midpoint of the first pair, (0.25 * w, 0.5 * h).
        let d = path_data(chain.points(), 100.0, 10.0);
        assert!(d.contains(", 25 5"), "midpoint missing from: {}", d);
    }

    #[test]
    fn empty_points_empty_path() {
        let points: [crate::point::PluckPoint<f32>; 0] = [];
        assert_eq!(path_data(&points, 100.0, 10.0), "");
    }
}
