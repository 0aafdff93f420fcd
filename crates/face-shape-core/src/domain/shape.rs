//! Face shape categories.

use serde::{Deserialize, Serialize};

/// One of the six face shape categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaceShape {
    Square,
    Round,
    Oblong,
    Heart,
    Oval,
    Diamond,
}

impl FaceShape {
    /// All categories, in a stable order.
    pub const ALL: [Self; 6] = [
        Self::Square,
        Self::Round,
        Self::Oblong,
        Self::Heart,
        Self::Oval,
        Self::Diamond,
    ];

    /// Returns the lowercase category name used as the style table key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Square => "square",
            Self::Round => "round",
            Self::Oblong => "oblong",
            Self::Heart => "heart",
            Self::Oval => "oval",
            Self::Diamond => "diamond",
        }
    }
}

impl std::fmt::Display for FaceShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_lowercase_name() {
        for shape in FaceShape::ALL {
            let json = serde_json::to_string(&shape).unwrap();
            assert_eq!(json, format!("\"{}\"", shape.as_str()));
        }
    }

    #[test]
    fn test_roundtrip() {
        for shape in FaceShape::ALL {
            let json = serde_json::to_string(&shape).unwrap();
            let back: FaceShape = serde_json::from_str(&json).unwrap();
            assert_eq!(back, shape);
        }
    }

    #[test]
    fn test_display_matches_key() {
        assert_eq!(FaceShape::Heart.to_string(), "heart");
        assert_eq!(FaceShape::Oblong.to_string(), "oblong");
    }
}
