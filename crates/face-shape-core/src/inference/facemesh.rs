//! Face Mesh landmark regression model.
//!
//! Regresses a dense 468-point facial landmark mesh from a face-centered
//! crop, in the style of the MediaPipe Face Mesh network. The backbone is
//! built from depthwise-separable residual blocks; two heads produce the
//! landmark coordinates and a face presence score.

// Allow common ML code patterns
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use candle_core::{DType, Device, Module, Tensor};
use candle_nn::{conv2d, Conv2d, Conv2dConfig, VarBuilder};
use once_cell::sync::OnceCell;
use tracing::debug;

use super::{get_device, load_safetensors};
use crate::domain::{ImageInfo, LandmarkPoint, LandmarkSet, FACE_MESH_LANDMARKS};
use crate::ports::FaceLandmarker;

/// Input image size for the mesh regressor.
pub const INPUT_SIZE: usize = 192;

/// Regression output values (x, y, z per landmark).
const OUTPUT_VALUES: usize = FACE_MESH_LANDMARKS * 3;

/// Face presence score below which an image is treated as faceless.
const PRESENCE_THRESHOLD: f32 = 0.5;

/// Depthwise-separable residual block.
///
/// Convolutions carry bias (BatchNorm folded into the exported weights).
struct MeshBlock {
    depthwise: Conv2d,
    pointwise: Conv2d,
    channel_pad: usize,
    stride: usize,
}

impl MeshBlock {
    fn new(
        in_channels: usize,
        out_channels: usize,
        kernel_size: usize,
        stride: usize,
        vb: &VarBuilder,
    ) -> Result<Self> {
        let padding = if stride == 2 {
            0
        } else {
            (kernel_size - 1) / 2
        };

        let depthwise = conv2d(
            in_channels,
            in_channels,
            kernel_size,
            Conv2dConfig {
                stride,
                padding,
                groups: in_channels,
                ..Conv2dConfig::default()
            },
            vb.pp("depthwise"),
        )?;

        let pointwise = conv2d(
            in_channels,
            out_channels,
            1,
            Conv2dConfig::default(),
            vb.pp("pointwise"),
        )?;

        let channel_pad = out_channels.saturating_sub(in_channels);

        Ok(Self {
            depthwise,
            pointwise,
            channel_pad,
            stride,
        })
    }
}

impl Module for MeshBlock {
    fn forward(&self, x: &Tensor) -> candle_core::Result<Tensor> {
        // Asymmetric padding for stride-2 blocks
        let x_padded = if self.stride == 2 {
            x.pad_with_zeros(2, 0, 2)?.pad_with_zeros(3, 0, 2)?
        } else {
            x.clone()
        };

        let h = self.depthwise.forward(&x_padded)?;
        let h = h.relu()?;
        let h = self.pointwise.forward(&h)?;

        let residual = if self.stride == 2 {
            x.max_pool2d(2)?
        } else {
            x.clone()
        };

        let residual = if self.channel_pad > 0 {
            residual.pad_with_zeros(1, 0, self.channel_pad)?
        } else {
            residual
        };

        (h + residual)?.relu()
    }
}

/// Face Mesh landmark regression model.
pub struct FaceMesh {
    stem: Conv2d,
    backbone: Vec<MeshBlock>,
    landmark_head: Conv2d,
    presence_head: Conv2d,
    device: Device,
}

impl FaceMesh {
    /// Creates a Face Mesh model from weights.
    ///
    /// # Errors
    ///
    /// Returns an error if model weights cannot be loaded or are invalid.
    #[allow(clippy::needless_pass_by_value)]
    pub fn new(vb: VarBuilder) -> Result<Self> {
        let device = vb.device().clone();

        // Stem: 3 -> 16 channels, stride 2 (192 -> 96)
        let stem = conv2d(
            3,
            16,
            3,
            Conv2dConfig {
                stride: 2,
                padding: 0,
                ..Conv2dConfig::default()
            },
            vb.pp("stem"),
        )?;

        // Backbone: four stride-2 stages, 96 -> 48 -> 24 -> 12 -> 6
        let backbone_config = [
            (16, 16, 3, 1),
            (16, 16, 3, 1),
            (16, 32, 3, 2),
            (32, 32, 3, 1),
            (32, 32, 3, 1),
            (32, 64, 3, 2),
            (64, 64, 3, 1),
            (64, 64, 3, 1),
            (64, 128, 3, 2),
            (128, 128, 3, 1),
            (128, 128, 3, 1),
            (128, 128, 3, 2),
            (128, 128, 3, 1),
            (128, 128, 3, 1),
        ];

        let mut backbone = Vec::new();
        for (i, (in_c, out_c, k, s)) in backbone_config.iter().enumerate() {
            let block = MeshBlock::new(*in_c, *out_c, *k, *s, &vb.pp(format!("backbone.{i}")))?;
            backbone.push(block);
        }

        // Heads collapse the 6x6 feature map to 1x1
        let landmark_head = conv2d(
            128,
            OUTPUT_VALUES,
            6,
            Conv2dConfig::default(),
            vb.pp("landmark_head"),
        )?;
        let presence_head = conv2d(128, 1, 6, Conv2dConfig::default(), vb.pp("presence_head"))?;

        Ok(Self {
            stem,
            backbone,
            landmark_head,
            presence_head,
            device,
        })
    }

    /// Preprocesses an image for mesh regression.
    ///
    /// Resizes to 192x192 and normalizes to `[-1, 1]`, NCHW layout.
    ///
    /// # Errors
    ///
    /// Returns an error if tensor creation fails.
    pub fn preprocess(&self, image: &image::DynamicImage) -> Result<Tensor> {
        let resized = image.resize_exact(
            INPUT_SIZE as u32,
            INPUT_SIZE as u32,
            image::imageops::FilterType::Lanczos3,
        );
        let rgb = resized.to_rgb8();

        let data: Vec<f32> = rgb
            .pixels()
            .flat_map(|p| {
                [
                    (f32::from(p[0]) / 127.5) - 1.0,
                    (f32::from(p[1]) / 127.5) - 1.0,
                    (f32::from(p[2]) / 127.5) - 1.0,
                ]
            })
            .collect();

        let tensor = Tensor::from_vec(data, (1, INPUT_SIZE, INPUT_SIZE, 3), &self.device)?;
        tensor
            .permute((0, 3, 1, 2))?
            .to_dtype(DType::F32)
            .context("Failed to preprocess image")
    }

    /// Runs the network on a preprocessed input tensor.
    ///
    /// Returns the raw presence logit and landmark coordinates.
    fn forward(&self, x: &Tensor) -> Result<(f32, Vec<f32>)> {
        // Stem with asymmetric padding
        let x = x.pad_with_zeros(2, 0, 1)?.pad_with_zeros(3, 0, 1)?;
        let x = self.stem.forward(&x)?;
        let mut h = x.relu()?;

        for block in &self.backbone {
            h = block.forward(&h)?;
        }

        let presence = self.presence_head.forward(&h)?;
        let presence = presence.flatten_all()?.to_vec1::<f32>()?;

        let coords = self.landmark_head.forward(&h)?;
        let coords = coords.flatten_all()?.to_vec1::<f32>()?;

        anyhow::ensure!(
            presence.len() == 1 && coords.len() == OUTPUT_VALUES,
            "Unexpected head output sizes: {} / {}",
            presence.len(),
            coords.len()
        );

        Ok((presence[0], coords))
    }

    /// Regresses facial landmarks from an image.
    ///
    /// Returns `None` when the face presence score is below threshold.
    ///
    /// # Errors
    ///
    /// Returns an error if inference fails.
    pub fn landmarks(&self, image: &image::DynamicImage) -> Result<Option<LandmarkSet>> {
        let input = self.preprocess(image)?;
        let (presence_logit, coords) = self.forward(&input)?;

        let presence = sigmoid(presence_logit);
        if presence < PRESENCE_THRESHOLD {
            debug!("No face: presence score {presence:.3}");
            return Ok(None);
        }

        // Coordinates are in input pixel units; normalize to [0,1] and
        // drop the z component.
        let scale = INPUT_SIZE as f32;
        let points = coords
            .chunks_exact(3)
            .map(|c| LandmarkPoint::new((c[0] / scale).clamp(0.0, 1.0), (c[1] / scale).clamp(0.0, 1.0)))
            .collect();

        Ok(Some(LandmarkSet::new(points)))
    }
}

/// Sigmoid activation.
#[inline]
fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}

/// Lazily-loaded Face Mesh model implementing the [`FaceLandmarker`] port.
///
/// The weights file is read on first use, so constructing the landmarker
/// is cheap and configuration errors surface at analysis time.
pub struct FaceMeshLandmarker {
    weights_path: PathBuf,
    model: OnceCell<std::result::Result<FaceMesh, String>>,
}

impl FaceMeshLandmarker {
    /// Creates a landmarker backed by the given weights file.
    #[must_use]
    pub fn new(weights_path: impl AsRef<Path>) -> Self {
        Self {
            weights_path: weights_path.as_ref().to_path_buf(),
            model: OnceCell::new(),
        }
    }

    fn get_model(&self) -> Result<&FaceMesh> {
        let result = self.model.get_or_init(|| {
            let device = get_device();
            debug!("Loading Face Mesh from {}", self.weights_path.display());
            load_safetensors(&self.weights_path, &device)
                .and_then(FaceMesh::new)
                .map_err(|e| format!("{e:#}"))
        });

        result.as_ref().map_err(|e| anyhow::anyhow!("{e}"))
    }
}

impl FaceLandmarker for FaceMeshLandmarker {
    fn landmarks(&self, image: &ImageInfo) -> Result<Option<LandmarkSet>> {
        let model = self.get_model()?;
        model
            .landmarks(&image.image)
            .context("Landmark regression failed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sigmoid() {
        assert!((sigmoid(0.0) - 0.5).abs() < 1e-6);
        assert!(sigmoid(10.0) > 0.999);
        assert!(sigmoid(-10.0) < 0.001);
    }

    #[test]
    fn test_zero_weight_model_output_shape() {
        // Zero weights give a presence logit of 0 -> score 0.5, which
        // passes the threshold; the decoded set must cover the topology.
        let vb = VarBuilder::zeros(DType::F32, &Device::Cpu);
        let model = FaceMesh::new(vb).unwrap();

        let image = image::DynamicImage::new_rgb8(64, 64);
        let set = model.landmarks(&image).unwrap().unwrap();
        assert_eq!(set.len(), FACE_MESH_LANDMARKS);
    }

    #[test]
    fn test_landmarker_missing_weights_errors() {
        let landmarker = FaceMeshLandmarker::new("/nonexistent/facemesh.safetensors");
        let image = ImageInfo::new("test.jpg", image::DynamicImage::new_rgb8(64, 64));
        assert!(landmarker.landmarks(&image).is_err());
    }
}
