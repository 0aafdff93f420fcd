//! Core domain types for face shape classification.

mod classifier;
mod landmarks;
mod report;
mod shape;
mod styles;

pub use classifier::{classify, ShapeMeasurements};
pub use landmarks::{roles, LandmarkPoint, LandmarkSet, FACE_MESH_LANDMARKS};
pub use report::{ImageDimensions, ImageInfo, ShapeReport};
pub use shape::FaceShape;
pub use styles::StyleTable;
