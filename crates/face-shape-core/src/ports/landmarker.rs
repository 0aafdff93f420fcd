//! Landmark detection port.

use crate::domain::{ImageInfo, LandmarkSet};

/// Port for obtaining facial landmarks from an image.
///
/// Implementations wrap a detection engine (native inference or an
/// external process); the classifier depends only on this interface.
/// If multiple faces are present, implementations return the first.
pub trait FaceLandmarker: Send + Sync {
    /// Detects facial landmarks in an image.
    ///
    /// Returns `None` when no face is found. That outcome is reported to
    /// the user at the call site and is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the detection engine itself fails.
    fn landmarks(&self, image: &ImageInfo) -> anyhow::Result<Option<LandmarkSet>>;
}
