use super::boundaries::RoomBoundaries;
use super::provision::EnsurePaintWallType;
use super::tag::{tag_paint_wall, RoomProvenance};
use crate::config::PaintConfig;
use crate::document::{
    BoundingElement, Document, LevelId, NewWall, ParameterValue, RoomId, WallLocationLine,
    WallTypeId, LOCATION_LINE_PARAM,
};
use crate::error::{Result, SegmentError};
use crate::geometry::{offset_inward, CurveSegment};
use tracing::{debug, warn};

/// A boundary segment that produced no wall, and why.
#[derive(Debug)]
pub struct SegmentFailure {
    pub room: RoomId,
    pub loop_index: usize,
    pub segment_index: usize,
    pub error: SegmentError,
}

/// Outcome of one generation pass.
#[derive(Debug, Default)]
pub struct GenerateReport {
    /// Walls materialized by this pass.
    pub walls_created: usize,
    /// Placed rooms the pass visited.
    pub room_count: usize,
    /// Segments dropped along the way; the pass itself still succeeded.
    pub failures: Vec<SegmentFailure>,
}

impl GenerateReport {
    /// One-line human summary of the pass.
    #[must_use]
    pub fn summary(&self) -> String {
        let mut text = format!(
            "{} paint wall(s) created for {} room(s)",
            self.walls_created, self.room_count
        );
        if !self.failures.is_empty() {
            text.push_str(&format!("; {} segment(s) dropped", self.failures.len()));
        }
        text
    }
}

/// One wall the pass has decided to build.
#[derive(Debug)]
struct WallPlan {
    room: RoomId,
    loop_index: usize,
    segment_index: usize,
    axis: CurveSegment,
    level: LevelId,
    height: f64,
    provenance: RoomProvenance,
}

/// Generates paint walls along the interior boundary of every placed room.
///
/// Segments already bounded by a paint wall are skipped, so repeated
/// passes over an unchanged model converge instead of stacking walls.
pub struct CreatePaintWalls<'a> {
    config: &'a PaintConfig,
}

impl<'a> CreatePaintWalls<'a> {
    /// Creates a new generation operation.
    #[must_use]
    pub fn new(config: &'a PaintConfig) -> Self {
        Self { config }
    }

    /// Runs one generation pass.
    ///
    /// The pass is a single transaction: provisioning, planning, and wall
    /// creation either all land or the document is left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error when the paint wall type cannot be provisioned or
    /// a document primitive fails outside segment scope. Per-segment
    /// problems never error; they are collected into the report.
    pub fn execute(&self, doc: &mut Document) -> Result<GenerateReport> {
        doc.transact("create paint walls", |doc| {
            // Step 1: make sure the paint wall type exists.
            let paint_type = EnsurePaintWallType::new(self.config).execute(doc)?;

            // Step 2: plan every wall against the pre-pass state.
            let (plans, mut report) = self.plan(doc, paint_type)?;

            // Step 3: materialize the plans.
            for plan in plans {
                match self.apply(doc, paint_type, &plan) {
                    Ok(()) => report.walls_created += 1,
                    Err(error) => {
                        warn!(
                            "segment {}.{} of room {:?} dropped: {error}",
                            plan.loop_index, plan.segment_index, plan.room
                        );
                        report.failures.push(SegmentFailure {
                            room: plan.room,
                            loop_index: plan.loop_index,
                            segment_index: plan.segment_index,
                            error,
                        });
                    }
                }
            }
            debug!("{}", report.summary());
            Ok(report)
        })
    }

    /// Decides which walls to build, without touching the document.
    fn plan(
        &self,
        doc: &Document,
        paint_type: WallTypeId,
    ) -> Result<(Vec<WallPlan>, GenerateReport)> {
        let offset = self.config.offset_feet();
        let mut plans = Vec::new();
        let mut report = GenerateReport::default();

        for (room_id, room) in doc.rooms() {
            if !room.is_placed() {
                continue;
            }
            report.room_count += 1;

            // A room whose level is gone cannot size its walls.
            if doc.level(room.level).is_err() {
                warn!("room {room_id:?} skipped: its level is gone");
                continue;
            }

            let provenance = RoomProvenance {
                name: room.name.clone(),
                number: room.number.clone(),
                finish: room
                    .parameters
                    .get(&self.config.finish_source_attr)
                    .and_then(|p| p.value.as_text())
                    .map(str::to_owned),
            };

            let loops = RoomBoundaries::new(room_id).execute(doc)?;
            for (loop_index, ring) in loops.iter().enumerate() {
                for (segment_index, segment) in ring.segments.iter().enumerate() {
                    if is_paint_wall(doc, segment.bounding, paint_type) {
                        continue;
                    }
                    match offset_inward(&segment.curve, offset) {
                        Ok(axis) => plans.push(WallPlan {
                            room: room_id,
                            loop_index,
                            segment_index,
                            axis,
                            level: room.level,
                            height: room.unbounded_height,
                            provenance: provenance.clone(),
                        }),
                        Err(error) => {
                            warn!(
                                "segment {loop_index}.{segment_index} of room {room_id:?} \
                                 dropped: {error}"
                            );
                            report.failures.push(SegmentFailure {
                                room: room_id,
                                loop_index,
                                segment_index,
                                error,
                            });
                        }
                    }
                }
            }
        }
        Ok((plans, report))
    }

    /// Builds one planned wall and stamps its metadata.
    fn apply(
        &self,
        doc: &mut Document,
        paint_type: WallTypeId,
        plan: &WallPlan,
    ) -> std::result::Result<(), SegmentError> {
        let wall_id = doc.create_wall(NewWall {
            axis: plan.axis,
            wall_type: paint_type,
            level: plan.level,
            height: plan.height,
            base_offset: 0.0,
            flipped: false,
            structural: false,
        })?;

        let wall = doc.wall_mut(wall_id)?;
        // Exterior finish face on the boundary, where the slot allows it.
        wall.parameters.try_set(
            LOCATION_LINE_PARAM,
            ParameterValue::Integer(WallLocationLine::FinishFaceExterior.code()),
        );
        tag_paint_wall(wall, &plan.provenance, self.config);
        Ok(())
    }
}

/// True when the segment's bounding element is a wall of the paint type.
fn is_paint_wall(doc: &Document, bounding: Option<BoundingElement>, paint_type: WallTypeId) -> bool {
    match bounding {
        Some(BoundingElement::Wall(id)) => {
            doc.wall(id).is_ok_and(|wall| wall.wall_type == paint_type)
        }
        _ => false,
    }
}
