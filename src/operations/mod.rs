pub mod boundaries;
pub mod generate;
pub mod provision;
pub mod remove;
pub mod tag;

pub use boundaries::RoomBoundaries;
pub use generate::{CreatePaintWalls, GenerateReport, SegmentFailure};
pub use provision::EnsurePaintWallType;
pub use remove::{DeletePaintWalls, RemoveReport};
pub use tag::{tag_paint_wall, RoomProvenance};
