use super::separator::SeparatorId;
use super::wall::WallId;
use crate::geometry::CurveSegment;

/// The element a boundary segment runs along, when one exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundingElement {
    Wall(WallId),
    Separator(SeparatorId),
}

/// One directed edge of a resolved room boundary.
#[derive(Debug, Clone)]
pub struct BoundarySegment {
    /// The plan curve of the edge, at finish-face location.
    pub curve: CurveSegment,
    /// The wall or separator the edge runs along; `None` for a free
    /// boundary face.
    pub bounding: Option<BoundingElement>,
}

/// A closed ring of boundary segments.
///
/// Ring 0 is the outer boundary; further rings wrap islands inside the
/// room. All rings keep the room area on the left of travel.
#[derive(Debug, Clone)]
pub struct BoundaryLoop {
    pub segments: Vec<BoundarySegment>,
}
