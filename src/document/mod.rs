pub mod boundary;
pub mod level;
pub mod parameter;
pub mod room;
pub mod separator;
mod transaction;
pub mod wall;
pub mod wall_type;

pub use boundary::{BoundaryLoop, BoundarySegment, BoundingElement};
pub use level::{LevelData, LevelId};
pub use parameter::{Parameter, ParameterSet, ParameterValue};
pub use room::{RoomData, RoomId, RoomLoop};
pub use separator::{SeparatorData, SeparatorId};
pub use wall::{
    NewWall, WallData, WallId, WallLocationLine, COMMENTS_PARAM, LOCATION_LINE_PARAM,
};
pub use wall_type::{LayerFunction, WallKind, WallLayer, WallTypeData, WallTypeId};

use crate::error::DocumentError;
use slotmap::SlotMap;
use std::collections::BTreeSet;

/// Central arena that owns all building elements of one model.
///
/// Elements reference each other via typed IDs (generational indices);
/// an ID stays valid until its element is deleted.
#[derive(Debug, Clone, Default)]
pub struct Document {
    levels: SlotMap<LevelId, LevelData>,
    rooms: SlotMap<RoomId, RoomData>,
    walls: SlotMap<WallId, WallData>,
    wall_types: SlotMap<WallTypeId, WallTypeData>,
    separators: SlotMap<SeparatorId, SeparatorData>,
    wall_bindings: BTreeSet<String>,
}

impl Document {
    /// Creates a new, empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Level operations ---

    /// Inserts a level and returns its ID.
    pub fn add_level(&mut self, data: LevelData) -> LevelId {
        self.levels.insert(data)
    }

    /// Returns a reference to the level data.
    ///
    /// # Errors
    ///
    /// Returns an error if the level is not found in the document.
    pub fn level(&self, id: LevelId) -> Result<&LevelData, DocumentError> {
        self.levels.get(id).ok_or(DocumentError::LevelNotFound(id))
    }

    // --- Room operations ---

    /// Inserts a room and returns its ID.
    pub fn add_room(&mut self, data: RoomData) -> RoomId {
        self.rooms.insert(data)
    }

    /// Returns a reference to the room data.
    ///
    /// # Errors
    ///
    /// Returns an error if the room is not found in the document.
    pub fn room(&self, id: RoomId) -> Result<&RoomData, DocumentError> {
        self.rooms.get(id).ok_or(DocumentError::RoomNotFound(id))
    }

    /// Returns a mutable reference to the room data.
    ///
    /// # Errors
    ///
    /// Returns an error if the room is not found in the document.
    pub fn room_mut(&mut self, id: RoomId) -> Result<&mut RoomData, DocumentError> {
        self.rooms
            .get_mut(id)
            .ok_or(DocumentError::RoomNotFound(id))
    }

    /// Iterates all rooms in the document.
    pub fn rooms(&self) -> impl Iterator<Item = (RoomId, &RoomData)> {
        self.rooms.iter()
    }

    // --- Separator operations ---

    /// Inserts a room separation line and returns its ID.
    pub fn add_separator(&mut self, data: SeparatorData) -> SeparatorId {
        self.separators.insert(data)
    }

    /// Iterates all room separation lines.
    pub fn separators(&self) -> impl Iterator<Item = (SeparatorId, &SeparatorData)> {
        self.separators.iter()
    }

    // --- Wall type operations ---

    /// Inserts a wall type and returns its ID.
    ///
    /// # Errors
    ///
    /// Returns an error if a type with the same name already exists.
    pub fn add_wall_type(&mut self, data: WallTypeData) -> Result<WallTypeId, DocumentError> {
        if self.find_wall_type(&data.name).is_some() {
            return Err(DocumentError::DuplicateTypeName(data.name));
        }
        Ok(self.wall_types.insert(data))
    }

    /// Returns a reference to the wall type data.
    ///
    /// # Errors
    ///
    /// Returns an error if the type is not found in the document.
    pub fn wall_type(&self, id: WallTypeId) -> Result<&WallTypeData, DocumentError> {
        self.wall_types
            .get(id)
            .ok_or(DocumentError::WallTypeNotFound(id))
    }

    /// Iterates all wall types in the document.
    pub fn wall_types(&self) -> impl Iterator<Item = (WallTypeId, &WallTypeData)> {
        self.wall_types.iter()
    }

    /// Finds a wall type by exact name.
    #[must_use]
    pub fn find_wall_type(&self, name: &str) -> Option<WallTypeId> {
        self.wall_types
            .iter()
            .find(|(_, data)| data.name == name)
            .map(|(id, _)| id)
    }

    /// Duplicates a wall type under a new name, copying kind and layers.
    ///
    /// # Errors
    ///
    /// Returns an error if the source type does not exist or the new name
    /// is already taken.
    pub fn duplicate_wall_type(
        &mut self,
        source: WallTypeId,
        new_name: &str,
    ) -> Result<WallTypeId, DocumentError> {
        let template = self.wall_type(source)?.clone();
        if self.find_wall_type(new_name).is_some() {
            return Err(DocumentError::DuplicateTypeName(new_name.to_owned()));
        }
        Ok(self.wall_types.insert(WallTypeData {
            name: new_name.to_owned(),
            ..template
        }))
    }

    /// Replaces the compound structure of a wall type.
    ///
    /// # Errors
    ///
    /// Returns an error if the type does not exist or is not a basic wall
    /// type (only basic types accept structure edits).
    pub fn set_wall_type_layers(
        &mut self,
        id: WallTypeId,
        layers: Vec<WallLayer>,
    ) -> Result<(), DocumentError> {
        let data = self
            .wall_types
            .get_mut(id)
            .ok_or(DocumentError::WallTypeNotFound(id))?;
        if data.kind != WallKind::Basic {
            return Err(DocumentError::NotABasicType(data.name.clone()));
        }
        data.layers = layers;
        Ok(())
    }

    // --- Wall operations ---

    /// Creates a wall and returns its ID.
    ///
    /// The new wall carries one empty writable text parameter per bound
    /// name, plus the built-in comments and location-line slots.
    ///
    /// # Errors
    ///
    /// Returns an error if the axis curve is degenerate, the height is not
    /// positive, or the referenced type or level does not exist.
    pub fn create_wall(&mut self, new_wall: NewWall) -> Result<WallId, DocumentError> {
        if new_wall.axis.is_degenerate() {
            return Err(DocumentError::InvalidCurve);
        }
        if new_wall.height <= 0.0 {
            return Err(DocumentError::InvalidHeight(new_wall.height));
        }
        self.wall_type(new_wall.wall_type)?;
        self.level(new_wall.level)?;

        let mut parameters = ParameterSet::new();
        for name in &self.wall_bindings {
            parameters.insert(name.clone(), ParameterValue::Text(String::new()));
        }
        parameters.insert(COMMENTS_PARAM, ParameterValue::Text(String::new()));
        parameters.insert(
            LOCATION_LINE_PARAM,
            ParameterValue::Integer(WallLocationLine::WallCenterline.code()),
        );

        Ok(self.walls.insert(WallData {
            axis: new_wall.axis,
            wall_type: new_wall.wall_type,
            level: new_wall.level,
            height: new_wall.height,
            base_offset: new_wall.base_offset,
            flipped: new_wall.flipped,
            structural: new_wall.structural,
            parameters,
        }))
    }

    /// Returns a reference to the wall data.
    ///
    /// # Errors
    ///
    /// Returns an error if the wall is not found in the document.
    pub fn wall(&self, id: WallId) -> Result<&WallData, DocumentError> {
        self.walls.get(id).ok_or(DocumentError::WallNotFound(id))
    }

    /// Returns a mutable reference to the wall data.
    ///
    /// # Errors
    ///
    /// Returns an error if the wall is not found in the document.
    pub fn wall_mut(&mut self, id: WallId) -> Result<&mut WallData, DocumentError> {
        self.walls
            .get_mut(id)
            .ok_or(DocumentError::WallNotFound(id))
    }

    /// Iterates all walls in the document.
    pub fn walls(&self) -> impl Iterator<Item = (WallId, &WallData)> {
        self.walls.iter()
    }

    /// Deletes a batch of walls and returns how many were removed.
    ///
    /// Every ID is validated before anything is removed, so a failed batch
    /// leaves the document untouched. An ID repeated in the batch counts
    /// once.
    ///
    /// # Errors
    ///
    /// Returns an error if any ID does not name a live wall.
    pub fn delete_walls(&mut self, ids: &[WallId]) -> Result<usize, DocumentError> {
        for &id in ids {
            if !self.walls.contains_key(id) {
                return Err(DocumentError::WallNotFound(id));
            }
        }
        Ok(ids
            .iter()
            .filter(|&&id| self.walls.remove(id).is_some())
            .count())
    }

    // --- Parameter bindings ---

    /// Declares a shared text parameter carried by every wall, current and
    /// future. Binding the same name twice is a no-op.
    pub fn bind_wall_parameter(&mut self, name: &str) {
        if !self.wall_bindings.insert(name.to_owned()) {
            return;
        }
        for wall in self.walls.values_mut() {
            if !wall.parameters.contains(name) {
                wall.parameters
                    .insert(name.to_owned(), ParameterValue::Text(String::new()));
            }
        }
    }
}
