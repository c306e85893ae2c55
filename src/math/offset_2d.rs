use super::{Point3, Vector3, TOLERANCE};
use crate::error::SegmentError;

/// Computes the normalized XY direction from point `a` to point `b`.
///
/// # Errors
///
/// Returns `SegmentError::DegenerateCurve` if the segment has zero length.
pub fn segment_direction(a: &Point3, b: &Point3) -> Result<Vector3, SegmentError> {
    let d = b - a;
    let len = (d.x * d.x + d.y * d.y).sqrt();
    if len < TOLERANCE {
        return Err(SegmentError::DegenerateCurve);
    }
    Ok(Vector3::new(d.x / len, d.y / len, 0.0))
}

/// Returns the left-pointing normal of a direction vector in the XY plane.
#[must_use]
pub fn left_normal(dir: Vector3) -> Vector3 {
    Vector3::new(-dir.y, dir.x, 0.0)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn segment_direction_basic() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(3.0, 4.0, 0.0);
        let dir = segment_direction(&a, &b).unwrap();
        assert!((dir.x - 0.6).abs() < TOLERANCE);
        assert!((dir.y - 0.8).abs() < TOLERANCE);
    }

    #[test]
    fn segment_direction_zero_length() {
        let a = Point3::new(1.0, 1.0, 0.0);
        let b = Point3::new(1.0, 1.0, 0.0);
        assert!(matches!(
            segment_direction(&a, &b),
            Err(SegmentError::DegenerateCurve)
        ));
    }

    #[test]
    fn segment_direction_ignores_z() {
        // Vertical extent must not contribute to the plan direction.
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(2.0, 0.0, 9.0);
        let dir = segment_direction(&a, &b).unwrap();
        assert!((dir.x - 1.0).abs() < TOLERANCE);
        assert!(dir.y.abs() < TOLERANCE);
        assert!(dir.z.abs() < TOLERANCE);
    }

    #[test]
    fn left_normal_basic() {
        let dir = Vector3::new(1.0, 0.0, 0.0);
        let n = left_normal(dir);
        assert!(n.x.abs() < TOLERANCE);
        assert!((n.y - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn left_normal_of_up_points_left() {
        let dir = Vector3::new(0.0, 1.0, 0.0);
        let n = left_normal(dir);
        assert!((n.x + 1.0).abs() < TOLERANCE);
        assert!(n.y.abs() < TOLERANCE);
    }
}
