//! Face Shape Adapters - External adapters for face-shape.
//!
//! This crate provides adapters for:
//! - Filesystem image source
//! - Hairstyle recommendation table loading
//! - Model downloading and caching

pub mod fs;
pub mod models;
pub mod styles;

pub use fs::FsImageSource;
pub use models::{model_path, models_dir, set_models_dir};
pub use styles::load_style_table;
