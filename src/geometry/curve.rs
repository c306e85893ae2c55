use crate::error::SegmentError;
use crate::math::offset_2d::segment_direction;
use crate::math::{Point3, Vector3, TOLERANCE};

/// Distinguishes straight segments from circular arcs.
///
/// Arcs carry the point halfway along the sweep; together with the two
/// endpoints this pins the circle without storing center or radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CurveKind {
    Line,
    Arc { mid: Point3 },
}

/// A bounded plan curve: the path a wall axis or a room boundary edge
/// follows in the XY plane, at the elevation of its z coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveSegment {
    pub start: Point3,
    pub end: Point3,
    pub kind: CurveKind,
}

impl CurveSegment {
    /// Creates a straight segment between two points.
    #[must_use]
    pub fn line(start: Point3, end: Point3) -> Self {
        Self {
            start,
            end,
            kind: CurveKind::Line,
        }
    }

    /// Creates a circular arc from `start` to `end` passing through `mid`.
    #[must_use]
    pub fn arc(start: Point3, mid: Point3, end: Point3) -> Self {
        Self {
            start,
            end,
            kind: CurveKind::Arc { mid },
        }
    }

    /// Straight-line distance between the endpoints.
    #[must_use]
    pub fn chord_length(&self) -> f64 {
        let d = self.end - self.start;
        (d.x * d.x + d.y * d.y).sqrt()
    }

    /// True when the chord is too short to carry a direction.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.chord_length() < TOLERANCE
    }

    /// Normalized XY direction of the chord.
    ///
    /// # Errors
    ///
    /// Returns `SegmentError::DegenerateCurve` for a zero-length chord.
    pub fn direction(&self) -> Result<Vector3, SegmentError> {
        segment_direction(&self.start, &self.end)
    }

    /// Returns a copy rigidly translated by `offset`.
    ///
    /// Arc midpoints move with the endpoints, so the shape is preserved.
    #[must_use]
    pub fn translated(&self, offset: Vector3) -> Self {
        let kind = match self.kind {
            CurveKind::Line => CurveKind::Line,
            CurveKind::Arc { mid } => CurveKind::Arc { mid: mid + offset },
        };
        Self {
            start: self.start + offset,
            end: self.end + offset,
            kind,
        }
    }
}
