pub mod distance_2d;
pub mod offset_2d;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Millimetres per foot.
///
/// Documents measure length in feet; configuration expresses wall
/// thickness in millimetres.
pub const MM_PER_FOOT: f64 = 304.8;

/// Converts a length in millimetres to feet.
#[must_use]
pub fn mm_to_feet(mm: f64) -> f64 {
    mm / MM_PER_FOOT
}
