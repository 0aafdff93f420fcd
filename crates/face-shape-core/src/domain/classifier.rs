//! Geometric face shape classifier.
//!
//! Maps a landmark set to a face shape category using two distance ratios
//! and a fixed decision tree. The branch order is significant: the numeric
//! ranges overlap, and the first matching branch wins.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use super::landmarks::{roles, LandmarkPoint, LandmarkSet};
use super::shape::FaceShape;

/// Height/width ratio below which a face is square or round.
const COMPACT_RATIO: f32 = 1.1;

/// Height/width ratio above which a face is oblong.
const ELONGATED_RATIO: f32 = 1.5;

/// Jaw/face width fraction above which a compact face is square.
const SQUARE_JAW_FRACTION: f32 = 0.95;

/// Jaw/face width fraction below which a mid-ratio face is heart shaped.
const HEART_JAW_FRACTION: f32 = 0.85;

/// Jaw/face width fraction above which a mid-ratio face is oval.
const OVAL_JAW_FRACTION: f32 = 0.9;

/// The derived scalars driving a classification.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ShapeMeasurements {
    /// Face height divided by face width.
    pub height_width_ratio: f32,
    /// Jaw width divided by face width.
    pub jaw_width_ratio: f32,
}

/// Classifies a landmark set into a face shape category.
///
/// # Errors
///
/// Returns an error if a required landmark index is missing from the set,
/// or if the cheek landmarks coincide (zero face width makes the ratio
/// undefined). Degenerate geometry is never mapped to a category.
pub fn classify(landmarks: &LandmarkSet) -> Result<(FaceShape, ShapeMeasurements)> {
    let forehead = role_point(landmarks, roles::FOREHEAD, "forehead")?;
    let chin = role_point(landmarks, roles::CHIN, "chin")?;
    let left_cheek = role_point(landmarks, roles::LEFT_CHEEK, "left cheek")?;
    let right_cheek = role_point(landmarks, roles::RIGHT_CHEEK, "right cheek")?;
    let left_jaw = role_point(landmarks, roles::LEFT_JAW, "left jaw")?;
    let right_jaw = role_point(landmarks, roles::RIGHT_JAW, "right jaw")?;

    let face_height = forehead.distance(&chin);
    let face_width = left_cheek.distance(&right_cheek);
    let jaw_width = left_jaw.distance(&right_jaw);

    if face_width == 0.0 {
        bail!("Degenerate landmark geometry: cheek landmarks coincide (zero face width)");
    }

    let ratio = face_height / face_width;
    if !ratio.is_finite() {
        bail!("Degenerate landmark geometry: non-finite height/width ratio");
    }

    let measurements = ShapeMeasurements {
        height_width_ratio: ratio,
        jaw_width_ratio: jaw_width / face_width,
    };

    // First matching branch wins; the ranges are not mutually exclusive.
    let shape = if ratio < COMPACT_RATIO {
        if jaw_width > face_width * SQUARE_JAW_FRACTION {
            FaceShape::Square
        } else {
            FaceShape::Round
        }
    } else if ratio > ELONGATED_RATIO {
        FaceShape::Oblong
    } else if jaw_width < face_width * HEART_JAW_FRACTION {
        FaceShape::Heart
    } else if jaw_width > face_width * OVAL_JAW_FRACTION {
        FaceShape::Oval
    } else {
        FaceShape::Diamond
    };

    Ok((shape, measurements))
}

fn role_point(landmarks: &LandmarkSet, index: usize, name: &str) -> Result<LandmarkPoint> {
    landmarks.get(index).ok_or_else(|| {
        anyhow::anyhow!(
            "Landmark set has {} points, missing {name} landmark (index {index})",
            landmarks.len()
        )
    })
}
