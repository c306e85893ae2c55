use crate::config::PaintConfig;
use crate::document::{Document, WallId};
use crate::error::{RemovalError, Result};
use tracing::debug;

/// Outcome of one removal pass.
#[derive(Debug, Default)]
pub struct RemoveReport {
    /// Walls removed by this pass.
    pub walls_deleted: usize,
}

impl RemoveReport {
    /// One-line human summary of the pass.
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{} paint wall(s) deleted", self.walls_deleted)
    }
}

/// Deletes every wall of the paint type in a single batch.
///
/// Walls are matched by type identity alone, so renamed or retagged paint
/// walls still go, and ordinary walls are never touched.
pub struct DeletePaintWalls<'a> {
    config: &'a PaintConfig,
}

impl<'a> DeletePaintWalls<'a> {
    /// Creates a new removal operation.
    #[must_use]
    pub fn new(config: &'a PaintConfig) -> Self {
        Self { config }
    }

    /// Runs one removal pass.
    ///
    /// A document without the paint type has nothing to remove; the pass
    /// succeeds with an empty report.
    ///
    /// # Errors
    ///
    /// Returns an error if the batch delete is rejected, in which case the
    /// document is left untouched.
    pub fn execute(&self, doc: &mut Document) -> Result<RemoveReport> {
        let Some(paint_type) = doc.find_wall_type(&self.config.wall_type_name) else {
            debug!(
                "no wall type named {:?}, nothing to delete",
                self.config.wall_type_name
            );
            return Ok(RemoveReport::default());
        };

        doc.transact("delete paint walls", |doc| {
            let ids: Vec<WallId> = doc
                .walls()
                .filter(|(_, wall)| wall.wall_type == paint_type)
                .map(|(id, _)| id)
                .collect();
            let walls_deleted = doc
                .delete_walls(&ids)
                .map_err(RemovalError::BatchDeleteRejected)?;
            let report = RemoveReport { walls_deleted };
            debug!("{}", report.summary());
            Ok(report)
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::document::fixtures::{add_rect_room, base_document};
    use crate::document::NewWall;
    use crate::geometry::CurveSegment;
    use crate::math::Point3;
    use crate::operations::CreatePaintWalls;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn removes_what_generation_created() {
        let (mut doc, level, _) = base_document();
        add_rect_room(&mut doc, level, "Office", "101", p(0.0, 0.0, 0.0), 10.0, 8.0);
        let config = PaintConfig::default();
        CreatePaintWalls::new(&config).execute(&mut doc).unwrap();
        assert_eq!(doc.walls().count(), 4);

        let report = DeletePaintWalls::new(&config).execute(&mut doc).unwrap();
        assert_eq!(report.walls_deleted, 4);
        assert_eq!(doc.walls().count(), 0);
        assert_eq!(report.summary(), "4 paint wall(s) deleted");
    }

    #[test]
    fn round_trip_covers_every_room() {
        let (mut doc, level, _) = base_document();
        add_rect_room(&mut doc, level, "Office", "101", p(0.0, 0.0, 0.0), 10.0, 8.0);
        add_rect_room(&mut doc, level, "Meeting", "102", p(20.0, 0.0, 0.0), 10.0, 8.0);
        let config = PaintConfig::default();

        let created = CreatePaintWalls::new(&config).execute(&mut doc).unwrap();
        assert_eq!(created.walls_created, 8);
        assert_eq!(created.room_count, 2);

        let removed = DeletePaintWalls::new(&config).execute(&mut doc).unwrap();
        assert_eq!(removed.walls_deleted, 8);
        assert_eq!(
            DeletePaintWalls::new(&config)
                .execute(&mut doc)
                .unwrap()
                .walls_deleted,
            0
        );
    }

    #[test]
    fn second_pass_deletes_nothing_and_still_succeeds() {
        let (mut doc, level, _) = base_document();
        add_rect_room(&mut doc, level, "Office", "101", p(0.0, 0.0, 0.0), 10.0, 8.0);
        let config = PaintConfig::default();
        CreatePaintWalls::new(&config).execute(&mut doc).unwrap();
        DeletePaintWalls::new(&config).execute(&mut doc).unwrap();

        let report = DeletePaintWalls::new(&config).execute(&mut doc).unwrap();
        assert_eq!(report.walls_deleted, 0);
    }

    #[test]
    fn absent_paint_type_is_an_empty_success() {
        let (mut doc, _, _) = base_document();
        let config = PaintConfig::default();

        let report = DeletePaintWalls::new(&config).execute(&mut doc).unwrap();
        assert_eq!(report.walls_deleted, 0);
        assert_eq!(doc.walls().count(), 0);
    }

    #[test]
    fn ordinary_walls_survive_removal() {
        let (mut doc, level, generic) = base_document();
        add_rect_room(&mut doc, level, "Office", "101", p(0.0, 0.0, 0.0), 10.0, 8.0);
        let kept = doc
            .create_wall(NewWall {
                axis: CurveSegment::line(p(0.0, -5.0, 0.0), p(10.0, -5.0, 0.0)),
                wall_type: generic,
                level,
                height: 10.0,
                base_offset: 0.0,
                flipped: false,
                structural: true,
            })
            .unwrap();
        let config = PaintConfig::default();
        CreatePaintWalls::new(&config).execute(&mut doc).unwrap();

        let report = DeletePaintWalls::new(&config).execute(&mut doc).unwrap();
        assert_eq!(report.walls_deleted, 4);
        assert!(doc.wall(kept).is_ok());
        assert_eq!(doc.walls().count(), 1);
    }
}
