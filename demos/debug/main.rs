//! Muralis debug driver: builds a small model, then runs one generation
//! pass and one removal pass through the dispatcher, printing outcomes.
//!
//! Usage:
//! ```text
//! cargo run --example debug                      # outcome summaries
//! RUST_LOG=muralis=debug cargo run --example debug   # per-pass tracing
//! ```

use muralis::config::PaintConfig;
use muralis::dispatch::{CreatePaintWallsRequest, Dispatcher};
use muralis::document::{
    Document, LayerFunction, LevelData, ParameterValue, RoomData, RoomLoop, WallKind, WallLayer,
    WallTypeData,
};
use muralis::geometry::CurveSegment;
use muralis::math::Point3;

fn p(x: f64, y: f64) -> Point3 {
    Point3::new(x, y, 0.0)
}

fn rect_loop(x0: f64, y0: f64, x1: f64, y1: f64) -> RoomLoop {
    RoomLoop::new(vec![
        CurveSegment::line(p(x0, y0), p(x1, y0)),
        CurveSegment::line(p(x1, y0), p(x1, y1)),
        CurveSegment::line(p(x1, y1), p(x0, y1)),
        CurveSegment::line(p(x0, y1), p(x0, y0)),
    ])
}

fn sample_document() -> muralis::Result<Document> {
    let mut doc = Document::new();
    let level = doc.add_level(LevelData::new("Level 1", 0.0));
    doc.add_wall_type(WallTypeData::new(
        "Generic - 200mm",
        WallKind::Basic,
        vec![WallLayer::new(LayerFunction::Structure, 200.0 / 304.8)],
    ))?;

    doc.bind_wall_parameter("Paint Room Name");
    doc.bind_wall_parameter("Paint Room Number");
    doc.bind_wall_parameter("Paint Finish");

    let mut office = RoomData::new("Office", "101", level);
    office.area = 80.0;
    office.unbounded_height = 9.0;
    office.loops = vec![rect_loop(0.0, 0.0, 10.0, 8.0)];
    office
        .parameters
        .insert("Wall Finish", ParameterValue::Text("Satin white".into()));
    doc.add_room(office);

    // Hall with a structural island: the inner ring runs clockwise.
    let mut hall = RoomData::new("Hall", "102", level);
    hall.area = 375.0;
    hall.unbounded_height = 12.0;
    hall.loops = vec![
        rect_loop(15.0, 0.0, 35.0, 20.0),
        RoomLoop::new(vec![
            CurveSegment::line(p(22.0, 8.0), p(22.0, 12.0)),
            CurveSegment::line(p(22.0, 12.0), p(26.0, 12.0)),
            CurveSegment::line(p(26.0, 12.0), p(26.0, 8.0)),
            CurveSegment::line(p(26.0, 8.0), p(22.0, 8.0)),
        ]),
    ];
    doc.add_room(hall);

    Ok(doc)
}

fn main() -> muralis::Result<()> {
    // Default: WARN for everything, INFO for muralis.
    // Override with RUST_LOG env var (e.g. RUST_LOG=muralis=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("muralis=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let dispatcher = Dispatcher::spawn(sample_document()?, PaintConfig::default());
    let client = dispatcher.client();

    let created = client.create_paint_walls(CreatePaintWallsRequest::default())?;
    println!("create: {}", created.message);

    let repeated = client.create_paint_walls(CreatePaintWallsRequest::default())?;
    println!("repeat: {}", repeated.message);

    let removed = client.delete_paint_walls()?;
    println!("delete: {}", removed.message);

    let document = dispatcher.join();
    println!("walls left in the model: {}", document.walls().count());
    Ok(())
}
