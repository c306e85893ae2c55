pub mod config;
pub mod dispatch;
pub mod document;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{MuralisError, Result};
