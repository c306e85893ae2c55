use crate::math::mm_to_feet;
use serde::{Deserialize, Serialize};

/// Naming contract and sizing for generated paint walls.
///
/// The defaults match what the generator has always produced; a persisted
/// settings file can override any of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaintConfig {
    /// Reserved name identifying the paint wall type.
    pub wall_type_name: String,

    /// Wall attribute receiving the source room's name.
    pub room_name_attr: String,

    /// Wall attribute receiving the source room's number.
    pub room_number_attr: String,

    /// Wall attribute receiving the copied finish text.
    pub finish_attr: String,

    /// Room attribute the finish text is copied from.
    pub finish_source_attr: String,

    /// Marker text written into every generated wall's comments.
    pub marker_text: String,

    /// Paint layer thickness in millimetres.
    pub thickness_mm: f64,
}

impl Default for PaintConfig {
    fn default() -> Self {
        Self {
            wall_type_name: "Paint - 5mm".to_owned(),
            room_name_attr: "Paint Room Name".to_owned(),
            room_number_attr: "Paint Room Number".to_owned(),
            finish_attr: "Paint Finish".to_owned(),
            finish_source_attr: "Wall Finish".to_owned(),
            marker_text: "Generated paint wall".to_owned(),
            thickness_mm: 5.0,
        }
    }
}

impl PaintConfig {
    /// Layer thickness in feet, the document's length unit.
    #[must_use]
    pub fn thickness_feet(&self) -> f64 {
        mm_to_feet(self.thickness_mm)
    }

    /// Inward offset distance in feet: half the thickness, so the outer
    /// face of the generated wall lies on the room boundary.
    #[must_use]
    pub fn offset_feet(&self) -> f64 {
        self.thickness_feet() / 2.0
    }
}
