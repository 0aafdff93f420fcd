//! Analysis result types.

use serde::{Deserialize, Serialize};

use super::classifier::ShapeMeasurements;
use super::shape::FaceShape;

/// Complete classification result for a single photo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShapeReport {
    /// Path to the analyzed photo.
    pub path: String,
    /// Timestamp of analysis (ISO 8601).
    pub timestamp: String,
    /// Image dimensions.
    pub dimensions: ImageDimensions,
    /// The detected face shape category.
    pub shape: FaceShape,
    /// The ratios the classification was derived from.
    pub measurements: ShapeMeasurements,
    /// Recommended hairstyles for the category, in table order.
    /// Empty when the style table has no entry for the shape.
    pub styles: Vec<String>,
}

/// Image dimensions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ImageDimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl ImageDimensions {
    /// Creates image dimensions.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Basic image information extracted during loading.
#[derive(Debug, Clone)]
pub struct ImageInfo {
    /// Path to the image file.
    pub path: String,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Decoded image data.
    pub image: image::DynamicImage,
}

impl ImageInfo {
    /// Creates image info from a decoded image.
    #[must_use]
    pub fn new(path: impl Into<String>, image: image::DynamicImage) -> Self {
        use image::GenericImageView;
        let (width, height) = image.dimensions();
        Self {
            path: path.into(),
            width,
            height,
            image,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_info_dimensions() {
        let img = image::DynamicImage::new_rgb8(320, 240);
        let info = ImageInfo::new("test.jpg", img);
        assert_eq!(info.width, 320);
        assert_eq!(info.height, 240);
        assert_eq!(info.path, "test.jpg");
    }

    #[test]
    fn test_report_serialization() {
        let report = ShapeReport {
            path: "photo.jpg".into(),
            timestamp: "2025-01-01T00:00:00Z".into(),
            dimensions: ImageDimensions::new(640, 480),
            shape: FaceShape::Oval,
            measurements: ShapeMeasurements {
                height_width_ratio: 1.33,
                jaw_width_ratio: 0.92,
            },
            styles: vec!["Layered cut".into()],
        };

        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&report).unwrap()).unwrap();
        assert_eq!(json["shape"], "oval");
        assert_eq!(json["styles"][0], "Layered cut");
        assert_eq!(json["dimensions"]["width"], 640);
    }
}
