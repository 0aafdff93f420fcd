//! Facial landmark types.

/// Number of points in the Face Mesh landmark topology.
pub const FACE_MESH_LANDMARKS: usize = 468;

/// Role indices into the Face Mesh topology consumed by the classifier.
pub mod roles {
    /// Center of the forehead at the hairline.
    pub const FOREHEAD: usize = 10;
    /// Tip of the chin.
    pub const CHIN: usize = 152;
    /// Outermost point of the left cheekbone.
    pub const LEFT_CHEEK: usize = 234;
    /// Outermost point of the right cheekbone.
    pub const RIGHT_CHEEK: usize = 454;
    /// Left jaw corner.
    pub const LEFT_JAW: usize = 127;
    /// Right jaw corner.
    pub const RIGHT_JAW: usize = 356;
}

/// A single facial landmark in normalized `[0,1]` image coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LandmarkPoint {
    pub x: f32,
    pub y: f32,
}

impl LandmarkPoint {
    /// Creates a landmark point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance(&self, other: &Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx.hypot(dy)
    }
}

/// An indexed set of facial landmarks following the detector topology.
///
/// Indexing is stable; there is no ordering invariant beyond the topology
/// the detector produces.
#[derive(Debug, Clone)]
pub struct LandmarkSet {
    points: Vec<LandmarkPoint>,
}

impl LandmarkSet {
    /// Creates a landmark set from detector output.
    #[must_use]
    pub fn new(points: Vec<LandmarkPoint>) -> Self {
        Self { points }
    }

    /// Returns the point at `index`, if present.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<LandmarkPoint> {
        self.points.get(index).copied()
    }

    /// Number of landmarks in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the set holds no landmarks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates over all landmarks in index order.
    pub fn iter(&self) -> impl Iterator<Item = &LandmarkPoint> {
        self.points.iter()
    }
}
