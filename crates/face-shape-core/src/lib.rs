//! Face Shape Core - Domain logic and landmark inference
//!
//! This crate contains the core domain types, the geometric face shape
//! classifier, the port traits for injecting detection and output
//! implementations, and a candle-based Face Mesh landmark regressor.

pub mod analysis;
pub mod domain;
pub mod inference;
pub mod ports;

pub use domain::{
    classify, FaceShape, ImageDimensions, ImageInfo, LandmarkPoint, LandmarkSet, ShapeMeasurements,
    ShapeReport, StyleTable,
};
pub use ports::{FaceLandmarker, ImageSource, ProgressEvent, ProgressSink, ResultOutput};
