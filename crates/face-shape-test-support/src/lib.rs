//! Test support utilities for face-shape.
//!
//! Provides mocks for the core ports and builders for landmark sets with
//! known geometry.
//!
//! # Example
//!
//! ```
//! use face_shape_test_support::{LandmarkSetBuilder, StaticLandmarker};
//!
//! // A landmark set that classifies as heart shaped
//! let landmarks = LandmarkSetBuilder::heart();
//!
//! // A landmarker that always reports that face
//! let landmarker = StaticLandmarker::with_landmarks(landmarks);
//! ```

mod builders;
mod mocks;

pub use builders::LandmarkSetBuilder;
pub use mocks::{MockImageSource, MockProgressSink, MockResultOutput, StaticLandmarker};
