use super::curve::CurveSegment;
use crate::error::SegmentError;
use crate::math::offset_2d::left_normal;

/// Offsets a boundary segment toward the interior of its loop.
///
/// Boundary loops are wound so that travelling a segment keeps the room
/// area on the left; the inward offset is therefore a rigid translation
/// along the left normal of the chord. Arcs translate without reshaping.
///
/// # Errors
///
/// Returns `SegmentError::DegenerateCurve` for a zero-length chord, so a
/// NaN direction can never reach wall creation.
pub fn offset_inward(curve: &CurveSegment, distance: f64) -> Result<CurveSegment, SegmentError> {
    let dir = curve.direction()?;
    let normal = left_normal(dir);
    Ok(curve.translated(normal * distance))
}
