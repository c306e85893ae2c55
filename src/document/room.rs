use super::level::LevelId;
use super::parameter::ParameterSet;
use crate::geometry::CurveSegment;

slotmap::new_key_type! {
    /// Unique identifier for a room in the document.
    pub struct RoomId;
}

/// One stored boundary loop of a room, in travel order.
///
/// Loops are wound so that travelling a curve keeps the room area on the
/// left: outer loops counter-clockwise, island loops clockwise.
#[derive(Debug, Clone, Default)]
pub struct RoomLoop {
    pub curves: Vec<CurveSegment>,
}

impl RoomLoop {
    /// Creates a loop from curves already in travel order.
    #[must_use]
    pub fn new(curves: Vec<CurveSegment>) -> Self {
        Self { curves }
    }
}

/// Data associated with a room.
#[derive(Debug, Clone)]
pub struct RoomData {
    /// Display name.
    pub name: String,
    /// Room number as shown on plans.
    pub number: String,
    /// Placed floor area in square feet; zero for unplaced rooms.
    pub area: f64,
    /// Base level the room sits on.
    pub level: LevelId,
    /// Unbounded height in feet.
    pub unbounded_height: f64,
    /// Boundary geometry fixed when the room was placed. The first loop
    /// is the outer boundary; further loops wrap islands.
    pub loops: Vec<RoomLoop>,
    /// Room attributes (finish descriptions and the like).
    pub parameters: ParameterSet,
}

impl RoomData {
    /// Creates an unplaced room on the given level.
    #[must_use]
    pub fn new(name: impl Into<String>, number: impl Into<String>, level: LevelId) -> Self {
        Self {
            name: name.into(),
            number: number.into(),
            area: 0.0,
            level,
            unbounded_height: 8.0,
            loops: Vec::new(),
            parameters: ParameterSet::new(),
        }
    }

    /// True when the room is placed and encloses area.
    #[must_use]
    pub fn is_placed(&self) -> bool {
        self.area > 0.0
    }
}
