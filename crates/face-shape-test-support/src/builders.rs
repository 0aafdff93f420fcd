//! Landmark set builders for testing.

use face_shape_core::domain::{roles, FACE_MESH_LANDMARKS};
use face_shape_core::{LandmarkPoint, LandmarkSet};

/// Builder for landmark sets with known geometry.
///
/// Produces full-topology sets where the six classifier role points are
/// placed to hit a specific decision tree branch; all other points sit at
/// the image center.
pub struct LandmarkSetBuilder;

impl LandmarkSetBuilder {
    /// Builds a set with explicit role point positions.
    #[must_use]
    pub fn with_roles(
        forehead: (f32, f32),
        chin: (f32, f32),
        left_cheek: (f32, f32),
        right_cheek: (f32, f32),
        left_jaw: (f32, f32),
        right_jaw: (f32, f32),
    ) -> LandmarkSet {
        let mut points = vec![LandmarkPoint::new(0.5, 0.5); FACE_MESH_LANDMARKS];
        points[roles::FOREHEAD] = LandmarkPoint::new(forehead.0, forehead.1);
        points[roles::CHIN] = LandmarkPoint::new(chin.0, chin.1);
        points[roles::LEFT_CHEEK] = LandmarkPoint::new(left_cheek.0, left_cheek.1);
        points[roles::RIGHT_CHEEK] = LandmarkPoint::new(right_cheek.0, right_cheek.1);
        points[roles::LEFT_JAW] = LandmarkPoint::new(left_jaw.0, left_jaw.1);
        points[roles::RIGHT_JAW] = LandmarkPoint::new(right_jaw.0, right_jaw.1);
        LandmarkSet::new(points)
    }

    /// Compact face with a wide jaw: classifies as square.
    #[must_use]
    pub fn square() -> LandmarkSet {
        Self::with_roles(
            (0.5, 0.2),
            (0.5, 0.7),
            (0.2, 0.5),
            (0.8, 0.5),
            (0.205, 0.6),
            (0.795, 0.6),
        )
    }

    /// Compact face with a narrow jaw: classifies as round.
    #[must_use]
    pub fn round() -> LandmarkSet {
        Self::with_roles(
            (0.5, 0.2),
            (0.5, 0.7),
            (0.2, 0.5),
            (0.8, 0.5),
            (0.25, 0.6),
            (0.75, 0.6),
        )
    }

    /// Tall narrow face: classifies as oblong.
    #[must_use]
    pub fn oblong() -> LandmarkSet {
        Self::with_roles(
            (0.5, 0.05),
            (0.5, 0.95),
            (0.3, 0.5),
            (0.7, 0.5),
            (0.3, 0.8),
            (0.7, 0.8),
        )
    }

    /// Mid-ratio face with a narrow jaw: classifies as heart.
    #[must_use]
    pub fn heart() -> LandmarkSet {
        Self::with_roles(
            (0.5, 0.1),
            (0.5, 0.9),
            (0.2, 0.5),
            (0.8, 0.5),
            (0.25, 0.8),
            (0.75, 0.8),
        )
    }

    /// Mid-ratio face with a wide jaw: classifies as oval.
    #[must_use]
    pub fn oval() -> LandmarkSet {
        Self::with_roles(
            (0.5, 0.1),
            (0.5, 0.9),
            (0.2, 0.5),
            (0.8, 0.5),
            (0.21, 0.8),
            (0.79, 0.8),
        )
    }

    /// Mid-ratio face with a middling jaw: classifies as diamond.
    #[must_use]
    pub fn diamond() -> LandmarkSet {
        Self::with_roles(
            (0.5, 0.1),
            (0.5, 0.9),
            (0.2, 0.5),
            (0.8, 0.5),
            (0.24, 0.8),
            (0.76, 0.8),
        )
    }

    /// Degenerate geometry: cheek landmarks coincide (zero face width).
    #[must_use]
    pub fn zero_width() -> LandmarkSet {
        Self::with_roles(
            (0.5, 0.1),
            (0.5, 0.9),
            (0.5, 0.5),
            (0.5, 0.5),
            (0.25, 0.8),
            (0.75, 0.8),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use face_shape_core::{classify, FaceShape};

    #[test]
    fn test_builders_hit_their_branches() {
        let cases = [
            (LandmarkSetBuilder::square(), FaceShape::Square),
            (LandmarkSetBuilder::round(), FaceShape::Round),
            (LandmarkSetBuilder::oblong(), FaceShape::Oblong),
            (LandmarkSetBuilder::heart(), FaceShape::Heart),
            (LandmarkSetBuilder::oval(), FaceShape::Oval),
            (LandmarkSetBuilder::diamond(), FaceShape::Diamond),
        ];

        for (set, expected) in cases {
            let (shape, _) = classify(&set).unwrap();
            assert_eq!(shape, expected);
        }
    }

    #[test]
    fn test_zero_width_is_degenerate() {
        assert!(classify(&LandmarkSetBuilder::zero_width()).is_err());
    }

    #[test]
    fn test_full_topology() {
        assert_eq!(LandmarkSetBuilder::heart().len(), FACE_MESH_LANDMARKS);
    }
}
