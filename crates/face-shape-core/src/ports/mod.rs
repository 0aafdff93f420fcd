//! Port definitions for hexagonal architecture.
//!
//! These traits define the boundaries between the domain core and external
//! adapters: image loading, landmark detection, output, and progress.

mod image_source;
mod landmarker;
mod progress;
mod result_output;

pub use image_source::ImageSource;
pub use landmarker::FaceLandmarker;
pub use progress::{ProgressEvent, ProgressSink};
pub use result_output::ResultOutput;
