use crate::config::PaintConfig;
use crate::document::{Document, LayerFunction, WallKind, WallLayer, WallTypeId};
use crate::error::ProvisionError;
use tracing::{debug, warn};

/// Ensures the document holds the paint wall type, creating it on demand.
///
/// The type is looked up by its reserved name. When present it is
/// normalized in place; when absent it is duplicated from the first basic
/// wall type in the document and then normalized.
pub struct EnsurePaintWallType<'a> {
    config: &'a PaintConfig,
}

impl<'a> EnsurePaintWallType<'a> {
    /// Creates a new provisioning operation.
    #[must_use]
    pub fn new(config: &'a PaintConfig) -> Self {
        Self { config }
    }

    /// Executes the lookup-or-create.
    ///
    /// # Errors
    ///
    /// Returns `ProvisionError::NoTemplateType` if the type must be created
    /// and the document has no basic wall type to duplicate from.
    pub fn execute(&self, doc: &mut Document) -> Result<WallTypeId, ProvisionError> {
        // Step 1: reserved-name lookup.
        if let Some(existing) = doc.find_wall_type(&self.config.wall_type_name) {
            self.normalize(doc, existing);
            return Ok(existing);
        }

        // Step 2: duplicate the first basic type under the reserved name.
        let template = doc
            .wall_types()
            .find(|(_, data)| data.kind == WallKind::Basic)
            .map(|(id, _)| id)
            .ok_or(ProvisionError::NoTemplateType)?;
        let created = doc.duplicate_wall_type(template, &self.config.wall_type_name)?;
        debug!("created wall type {:?}", self.config.wall_type_name);

        // Step 3: reduce the copy to the single paint layer.
        self.normalize(doc, created);
        Ok(created)
    }

    /// Rewrites the type's structure to one structural layer of the
    /// configured thickness, whatever the current layers hold. A type with
    /// no layers is left alone, and a rejected structure edit is logged and
    /// the type used as-is.
    fn normalize(&self, doc: &mut Document, id: WallTypeId) {
        let Ok(data) = doc.wall_type(id) else { return };
        if data.layers.is_empty() {
            return;
        }
        let layers = vec![WallLayer::new(
            LayerFunction::Structure,
            self.config.thickness_feet(),
        )];
        if let Err(err) = doc.set_wall_type_layers(id, layers) {
            warn!(
                "structure of wall type {:?} not updated: {err}",
                self.config.wall_type_name
            );
        }
    }
}
