/// Returns the perpendicular distance from point `(px, py)` to the infinite
/// line through `(ax, ay)` and `(bx, by)`.
#[must_use]
pub fn point_to_line_dist(px: f64, py: f64, ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    let dx = bx - ax;
    let dy = by - ay;
    let len_sq = dx * dx + dy * dy;

    if len_sq < 1e-20 {
        // Degenerate carrier (zero length).
        return ((px - ax).powi(2) + (py - ay).powi(2)).sqrt();
    }

    // Project point onto the infinite line, no clamping.
    let t = ((px - ax) * dx + (py - ay) * dy) / len_sq;

    let closest_x = ax + t * dx;
    let closest_y = ay + t * dy;

    ((px - closest_x).powi(2) + (py - closest_y).powi(2)).sqrt()
}

/// Returns the shared length of two 1D intervals, or `0.0` when they are
/// disjoint. Endpoint order within each interval does not matter.
#[must_use]
pub fn interval_overlap(a0: f64, a1: f64, b0: f64, b1: f64) -> f64 {
    let (a_lo, a_hi) = if a0 <= a1 { (a0, a1) } else { (a1, a0) };
    let (b_lo, b_hi) = if b0 <= b1 { (b0, b1) } else { (b1, b0) };
    (a_hi.min(b_hi) - a_lo.max(b_lo)).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    #[test]
    fn line_dist_perpendicular() {
        // Point (1, 1) to line through (0,0)→(2,0). Dist = 1.
        let d = point_to_line_dist(1.0, 1.0, 0.0, 0.0, 2.0, 0.0);
        assert!((d - 1.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn line_dist_beyond_endpoint() {
        // Point (5, 1) projects past the carrier points; the infinite
        // line still gives the perpendicular distance.
        let d = point_to_line_dist(5.0, 1.0, 0.0, 0.0, 2.0, 0.0);
        assert!((d - 1.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn line_dist_on_line() {
        let d = point_to_line_dist(1.0, 0.0, 0.0, 0.0, 2.0, 0.0);
        assert!(d.abs() < TOL, "d={d}");
    }

    #[test]
    fn line_dist_degenerate_carrier() {
        // Zero-length carrier: distance is point-to-point.
        let d = point_to_line_dist(3.0, 4.0, 0.0, 0.0, 0.0, 0.0);
        assert!((d - 5.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn overlap_partial() {
        let o = interval_overlap(0.0, 4.0, 3.0, 10.0);
        assert!((o - 1.0).abs() < TOL, "o={o}");
    }

    #[test]
    fn overlap_contained() {
        let o = interval_overlap(0.0, 10.0, 2.0, 5.0);
        assert!((o - 3.0).abs() < TOL, "o={o}");
    }

    #[test]
    fn overlap_disjoint_is_zero() {
        let o = interval_overlap(0.0, 1.0, 2.0, 3.0);
        assert!(o.abs() < TOL, "o={o}");
    }

    #[test]
    fn overlap_unordered_endpoints() {
        let o = interval_overlap(4.0, 0.0, 10.0, 3.0);
        assert!((o - 1.0).abs() < TOL, "o={o}");
    }
}
