use crate::config::PaintConfig;
use crate::document::{ParameterValue, WallData, COMMENTS_PARAM};

/// Provenance copied from a room onto the walls generated for it.
#[derive(Debug, Clone)]
pub struct RoomProvenance {
    pub name: String,
    pub number: String,
    /// Text of the room's finish attribute, when the room carries one.
    pub finish: Option<String>,
}

/// Stamps room provenance and the generation marker onto a wall.
///
/// Every write is best-effort: a slot that is missing, read-only, or of
/// another kind is skipped silently. The marker makes generated walls
/// recognizable in schedules; identity for skip and removal decisions
/// stays with the wall type.
pub fn tag_paint_wall(wall: &mut WallData, provenance: &RoomProvenance, config: &PaintConfig) {
    let params = &mut wall.parameters;
    params.try_set(
        &config.room_name_attr,
        ParameterValue::Text(provenance.name.clone()),
    );
    params.try_set(
        &config.room_number_attr,
        ParameterValue::Text(provenance.number.clone()),
    );
    if let Some(finish) = provenance.finish.as_deref() {
        if !finish.is_empty() {
            params.try_set(&config.finish_attr, ParameterValue::Text(finish.to_owned()));
        }
    }
    params.try_set(
        COMMENTS_PARAM,
        ParameterValue::Text(config.marker_text.clone()),
    );
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::document::fixtures::base_document;
    use crate::document::{Document, LevelId, NewWall, WallId};
    use crate::geometry::CurveSegment;
    use crate::math::Point3;

    fn tagged_wall(doc: &mut Document, level: LevelId, bind_all: bool) -> WallId {
        let config = PaintConfig::default();
        if bind_all {
            doc.bind_wall_parameter(&config.room_name_attr);
            doc.bind_wall_parameter(&config.room_number_attr);
            doc.bind_wall_parameter(&config.finish_attr);
        }
        let wall_type = doc.find_wall_type("Generic - 200mm").unwrap();
        doc.create_wall(NewWall {
            axis: CurveSegment::line(Point3::new(0.0, 0.0, 0.0), Point3::new(5.0, 0.0, 0.0)),
            wall_type,
            level,
            height: 10.0,
            base_offset: 0.0,
            flipped: false,
            structural: false,
        })
        .unwrap()
    }

    fn provenance(finish: Option<&str>) -> RoomProvenance {
        RoomProvenance {
            name: "Kitchen".to_owned(),
            number: "104".to_owned(),
            finish: finish.map(str::to_owned),
        }
    }

    fn text_of(doc: &Document, wall: WallId, name: &str) -> Option<String> {
        doc.wall(wall)
            .unwrap()
            .parameters
            .get(name)
            .and_then(|p| p.value.as_text())
            .map(str::to_owned)
    }

    #[test]
    fn writes_all_bound_attributes() {
        let (mut doc, level, _) = base_document();
        let config = PaintConfig::default();
        let wall = tagged_wall(&mut doc, level, true);

        tag_paint_wall(
            doc.wall_mut(wall).unwrap(),
            &provenance(Some("Satin white")),
            &config,
        );

        assert_eq!(text_of(&doc, wall, &config.room_name_attr).as_deref(), Some("Kitchen"));
        assert_eq!(text_of(&doc, wall, &config.room_number_attr).as_deref(), Some("104"));
        assert_eq!(text_of(&doc, wall, &config.finish_attr).as_deref(), Some("Satin white"));
        assert_eq!(text_of(&doc, wall, COMMENTS_PARAM).as_deref(), Some("Generated paint wall"));
    }

    #[test]
    fn unbound_attributes_are_skipped() {
        let (mut doc, level, _) = base_document();
        let config = PaintConfig::default();
        let wall = tagged_wall(&mut doc, level, false);

        let data = doc.wall_mut(wall).unwrap();
        tag_paint_wall(data, &provenance(Some("Satin white")), &config);

        assert!(!data.parameters.contains(&config.room_name_attr));
        // The built-in comments slot still takes the marker.
        assert_eq!(
            data.parameters.get(COMMENTS_PARAM).unwrap().value.as_text(),
            Some("Generated paint wall")
        );
    }

    #[test]
    fn read_only_slot_is_left_alone() {
        let (mut doc, level, _) = base_document();
        let config = PaintConfig::default();
        let wall = tagged_wall(&mut doc, level, true);

        let data = doc.wall_mut(wall).unwrap();
        data.parameters
            .insert_read_only(config.room_name_attr.clone(), ParameterValue::Text("Locked".into()));
        tag_paint_wall(data, &provenance(None), &config);

        assert_eq!(
            data.parameters
                .get(&config.room_name_attr)
                .unwrap()
                .value
                .as_text(),
            Some("Locked")
        );
        assert_eq!(
            data.parameters
                .get(&config.room_number_attr)
                .unwrap()
                .value
                .as_text(),
            Some("104")
        );
    }

    #[test]
    fn empty_finish_is_not_copied() {
        let (mut doc, level, _) = base_document();
        let config = PaintConfig::default();
        let wall = tagged_wall(&mut doc, level, true);

        let data = doc.wall_mut(wall).unwrap();
        data.parameters
            .insert(config.finish_attr.clone(), ParameterValue::Text("Keep".into()));
        tag_paint_wall(data, &provenance(Some("")), &config);

        assert_eq!(
            data.parameters.get(&config.finish_attr).unwrap().value.as_text(),
            Some("Keep")
        );
    }

    #[test]
    fn missing_finish_is_not_copied() {
        let (mut doc, level, _) = base_document();
        let config = PaintConfig::default();
        let wall = tagged_wall(&mut doc, level, true);

        let data = doc.wall_mut(wall).unwrap();
        data.parameters
            .insert(config.finish_attr.clone(), ParameterValue::Text("Keep".into()));
        tag_paint_wall(data, &provenance(None), &config);

        assert_eq!(
            data.parameters.get(&config.finish_attr).unwrap().value.as_text(),
            Some("Keep")
        );
    }
}
