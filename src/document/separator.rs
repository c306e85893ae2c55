use crate::geometry::CurveSegment;

slotmap::new_key_type! {
    /// Unique identifier for a room separation line in the document.
    pub struct SeparatorId;
}

/// Data associated with a room separation line.
///
/// Separators bound rooms without carrying any wall mass.
#[derive(Debug, Clone)]
pub struct SeparatorData {
    /// The plan curve the separator runs along.
    pub curve: CurveSegment,
}

impl SeparatorData {
    /// Creates a new separation line along the given curve.
    #[must_use]
    pub fn new(curve: CurveSegment) -> Self {
        Self { curve }
    }
}
