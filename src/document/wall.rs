use super::level::LevelId;
use super::parameter::ParameterSet;
use super::wall_type::WallTypeId;
use crate::geometry::CurveSegment;

slotmap::new_key_type! {
    /// Unique identifier for a wall instance in the document.
    pub struct WallId;
}

/// Name of the built-in comments parameter present on every wall.
pub const COMMENTS_PARAM: &str = "Comments";

/// Name of the built-in location-line parameter present on every wall.
pub const LOCATION_LINE_PARAM: &str = "Location Line";

/// Reference line a wall is positioned by.
///
/// Stored in the built-in location-line parameter as an integer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallLocationLine {
    WallCenterline = 0,
    CoreCenterline = 1,
    FinishFaceExterior = 2,
    FinishFaceInterior = 3,
    CoreFaceExterior = 4,
    CoreFaceInterior = 5,
}

impl WallLocationLine {
    /// Integer code stored in the parameter.
    #[must_use]
    pub fn code(self) -> i64 {
        self as i64
    }
}

/// Arguments for [`crate::document::Document::create_wall`].
#[derive(Debug, Clone)]
pub struct NewWall {
    /// Plan curve the wall is extruded along.
    pub axis: CurveSegment,
    /// Type governing kind, layers, and width.
    pub wall_type: WallTypeId,
    /// Base level of the wall.
    pub level: LevelId,
    /// Unconnected height in feet.
    pub height: f64,
    /// Base offset from the level, in feet.
    pub base_offset: f64,
    /// Whether the wall's orientation is flipped across its axis.
    pub flipped: bool,
    /// Whether the wall bears load.
    pub structural: bool,
}

/// Data associated with a wall instance.
#[derive(Debug, Clone)]
pub struct WallData {
    /// Plan curve the wall is extruded along.
    pub axis: CurveSegment,
    /// Type governing kind, layers, and width.
    pub wall_type: WallTypeId,
    /// Base level of the wall.
    pub level: LevelId,
    /// Unconnected height in feet.
    pub height: f64,
    /// Base offset from the level, in feet.
    pub base_offset: f64,
    /// Whether the wall's orientation is flipped across its axis.
    pub flipped: bool,
    /// Whether the wall bears load.
    pub structural: bool,
    /// Instance parameters, including the built-in slots.
    pub parameters: ParameterSet,
}
