//! ML inference using Candle.
//!
//! Provides the Face Mesh landmark regression model backing the
//! [`FaceLandmarker`](crate::ports::FaceLandmarker) port.

mod device;
mod facemesh;
mod loader;

pub use device::get_device;
pub use facemesh::{FaceMesh, FaceMeshLandmarker, INPUT_SIZE};
pub use loader::load_safetensors;
