slotmap::new_key_type! {
    /// Unique identifier for a level in the document.
    pub struct LevelId;
}

/// Data associated with a building level.
#[derive(Debug, Clone)]
pub struct LevelData {
    /// Display name of the level.
    pub name: String,
    /// Elevation above the project origin, in feet.
    pub elevation: f64,
}

impl LevelData {
    /// Creates a new level.
    #[must_use]
    pub fn new(name: impl Into<String>, elevation: f64) -> Self {
        Self {
            name: name.into(),
            elevation,
        }
    }
}
