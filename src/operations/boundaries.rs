use crate::document::{
    BoundaryLoop, BoundarySegment, BoundingElement, Document, RoomId, SeparatorId, WallId,
};
use crate::error::DocumentError;
use crate::geometry::CurveSegment;
use crate::math::distance_2d::{interval_overlap, point_to_line_dist};
use crate::math::{Point3, Vector3, TOLERANCE};

/// Slack allowed when matching a boundary edge to the element that bounds
/// it, in feet (about 1.5 mm).
const MATCH_TOLERANCE: f64 = 0.005;

/// Resolves the boundary loops of a room at finish-face location.
///
/// Free faces are included. Each edge is matched against the model: the
/// nearest wall running along the edge wins; failing that, a separation
/// line on the edge; failing both, the face is free. Walls added since
/// the room was placed take part, which is how a previous pass's paint
/// walls show up as bounding elements on the next pass.
pub struct RoomBoundaries {
    room: RoomId,
}

impl RoomBoundaries {
    /// Creates a new boundary query for the given room.
    #[must_use]
    pub fn new(room: RoomId) -> Self {
        Self { room }
    }

    /// Executes the query. Unplaced rooms store no loops and yield an
    /// empty vector.
    ///
    /// # Errors
    ///
    /// Returns an error if the room is not found in the document.
    pub fn execute(&self, doc: &Document) -> Result<Vec<BoundaryLoop>, DocumentError> {
        let room = doc.room(self.room)?;
        let mut loops = Vec::with_capacity(room.loops.len());
        for ring in &room.loops {
            let mut segments = Vec::with_capacity(ring.curves.len());
            for curve in &ring.curves {
                segments.push(BoundarySegment {
                    curve: *curve,
                    bounding: resolve_bounding(doc, curve)?,
                });
            }
            loops.push(BoundaryLoop { segments });
        }
        Ok(loops)
    }
}

/// Finds the element a boundary edge runs along.
fn resolve_bounding(
    doc: &Document,
    curve: &CurveSegment,
) -> Result<Option<BoundingElement>, DocumentError> {
    let Ok(dir) = curve.direction() else {
        // A zero-length edge runs along nothing.
        return Ok(None);
    };
    let span = curve.chord_length();

    if let Some(wall) = nearest_wall(doc, curve, dir, span)? {
        return Ok(Some(BoundingElement::Wall(wall)));
    }
    Ok(on_edge_separator(doc, curve, dir, span).map(BoundingElement::Separator))
}

/// Picks the closest wall whose axis runs along the edge: parallel,
/// sharing longitudinal extent, and within half its width (plus slack) of
/// the edge line. Ties go to the wall on the interior side of the edge.
fn nearest_wall(
    doc: &Document,
    curve: &CurveSegment,
    dir: Vector3,
    span: f64,
) -> Result<Option<WallId>, DocumentError> {
    let mut best: Option<(WallId, f64, bool)> = None;
    for (id, wall) in doc.walls() {
        let Ok(axis_dir) = wall.axis.direction() else {
            continue;
        };
        if !is_parallel(dir, axis_dir) {
            continue;
        }
        let mid = chord_midpoint(&wall.axis);
        let distance = distance_to_edge_line(curve, &mid);
        let half_width = doc.wall_type(wall.wall_type)?.width() / 2.0;
        if distance > half_width + MATCH_TOLERANCE {
            continue;
        }
        if !shares_extent(curve, dir, span, &wall.axis) {
            continue;
        }
        let left = is_left_of(curve, dir, &mid);
        let replace = match best {
            None => true,
            Some((_, best_distance, best_left)) => {
                distance < best_distance - TOLERANCE
                    || ((distance - best_distance).abs() <= TOLERANCE && left && !best_left)
            }
        };
        if replace {
            best = Some((id, distance, left));
        }
    }
    Ok(best.map(|(id, _, _)| id))
}

/// Finds a separation line lying on the edge with shared extent.
fn on_edge_separator(
    doc: &Document,
    curve: &CurveSegment,
    dir: Vector3,
    span: f64,
) -> Option<SeparatorId> {
    for (id, separator) in doc.separators() {
        let Ok(sep_dir) = separator.curve.direction() else {
            continue;
        };
        if !is_parallel(dir, sep_dir) {
            continue;
        }
        let mid = chord_midpoint(&separator.curve);
        if distance_to_edge_line(curve, &mid) > MATCH_TOLERANCE {
            continue;
        }
        if shares_extent(curve, dir, span, &separator.curve) {
            return Some(id);
        }
    }
    None
}

/// True when two unit directions run along the same carrier, in either
/// orientation.
fn is_parallel(a: Vector3, b: Vector3) -> bool {
    (a.x * b.y - a.y * b.x).abs() < TOLERANCE
}

/// Perpendicular distance from a point to the edge's infinite line.
fn distance_to_edge_line(curve: &CurveSegment, point: &Point3) -> f64 {
    point_to_line_dist(
        point.x,
        point.y,
        curve.start.x,
        curve.start.y,
        curve.end.x,
        curve.end.y,
    )
}

/// True when `other` overlaps the edge's longitudinal extent.
fn shares_extent(curve: &CurveSegment, dir: Vector3, span: f64, other: &CurveSegment) -> bool {
    let t_of = |p: &Point3| dir.x * (p.x - curve.start.x) + dir.y * (p.y - curve.start.y);
    interval_overlap(t_of(&other.start), t_of(&other.end), 0.0, span) > TOLERANCE
}

/// True when the point lies on the left of travel, the interior side.
fn is_left_of(curve: &CurveSegment, dir: Vector3, point: &Point3) -> bool {
    dir.x * (point.y - curve.start.y) - dir.y * (point.x - curve.start.x) > 0.0
}

fn chord_midpoint(curve: &CurveSegment) -> Point3 {
    Point3::new(
        (curve.start.x + curve.end.x) / 2.0,
        (curve.start.y + curve.end.y) / 2.0,
        (curve.start.z + curve.end.z) / 2.0,
    )
}
