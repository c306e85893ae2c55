pub mod curve;
pub mod offset;

pub use curve::{CurveKind, CurveSegment};
pub use offset::offset_inward;
