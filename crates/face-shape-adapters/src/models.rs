//! Model downloading and caching adapter.

use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::sync::RwLock;

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use sha2::{Digest, Sha256};
use tracing::{debug, info};

/// Placeholder checksum indicating verification should be skipped.
const PLACEHOLDER_CHECKSUM: &str =
    "0000000000000000000000000000000000000000000000000000000000000000";

/// Progress callback: model name, downloaded bytes, total bytes if known.
pub type ProgressCallback = Box<dyn Fn(&str, u64, Option<u64>) + Send + Sync>;

/// Model metadata.
#[derive(Debug, Clone)]
pub struct ModelInfo {
    /// Model name/identifier.
    pub name: &'static str,
    /// Download URL (GitHub releases).
    pub url: &'static str,
    /// Expected SHA256 hash. Set to all zeros to skip verification during development.
    pub sha256: &'static str,
    /// Filename in models directory.
    pub filename: &'static str,
}

/// Known models.
pub const MODELS: &[ModelInfo] = &[ModelInfo {
    name: "facemesh",
    url: "https://github.com/cwygoda/face-shape/releases/download/models-v1/facemesh.safetensors",
    sha256: "0000000000000000000000000000000000000000000000000000000000000000", // TODO: Update with real hash
    filename: "facemesh.safetensors",
}];

/// Process-wide models directory override.
static MODELS_DIR_OVERRIDE: Lazy<RwLock<Option<PathBuf>>> = Lazy::new(|| RwLock::new(None));

/// Overrides the models directory for the current process.
///
/// Passing `None` restores the default location.
pub fn set_models_dir(dir: Option<PathBuf>) {
    if let Ok(mut guard) = MODELS_DIR_OVERRIDE.write() {
        *guard = dir;
    }
}

/// Returns the models directory path.
///
/// Uses the process-wide override when set, otherwise
/// `XDG_DATA_HOME/face-shape/models` or `~/.local/share/face-shape/models`.
#[must_use]
pub fn models_dir() -> PathBuf {
    if let Ok(guard) = MODELS_DIR_OVERRIDE.read() {
        if let Some(dir) = guard.as_ref() {
            return dir.clone();
        }
    }

    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("face-shape")
        .join("models")
}

/// Ensures all required models are downloaded.
///
/// # Errors
///
/// Returns an error if the models directory cannot be created, a download
/// fails, or a checksum doesn't match.
pub fn ensure_models() -> Result<()> {
    ensure_models_with_progress(None)
}

/// Like [`ensure_models`], reporting download progress via `progress`.
///
/// # Errors
///
/// See [`ensure_models`].
pub fn ensure_models_with_progress(progress: Option<&ProgressCallback>) -> Result<()> {
    let dir = models_dir();
    fs::create_dir_all(&dir).context("Failed to create models directory")?;

    for model in MODELS {
        let path = dir.join(model.filename);
        if path.exists() {
            debug!("Model {} already exists", model.name);
        } else {
            download_model(model, &path, progress)?;
        }
    }

    Ok(())
}

/// Downloads a model from its URL.
fn download_model(
    model: &ModelInfo,
    path: &PathBuf,
    progress: Option<&ProgressCallback>,
) -> Result<()> {
    info!("Downloading model: {}", model.name);

    let mut response = reqwest::blocking::get(model.url)
        .with_context(|| format!("Failed to download {}", model.name))?;

    if !response.status().is_success() {
        anyhow::bail!("Download failed with status: {}", response.status());
    }

    let total = response.content_length();
    let mut bytes = Vec::new();
    let mut buf = [0u8; 64 * 1024];

    loop {
        let n = response
            .read(&mut buf)
            .with_context(|| format!("Failed to read response for {}", model.name))?;
        if n == 0 {
            break;
        }
        bytes.extend_from_slice(&buf[..n]);
        if let Some(cb) = progress {
            cb(model.name, bytes.len() as u64, total);
        }
    }

    // Verify checksum (skip if placeholder)
    if model.sha256 == PLACEHOLDER_CHECKSUM {
        debug!(
            "Skipping checksum verification for {} (placeholder checksum)",
            model.name
        );
    } else {
        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        let hash = format!("{:x}", hasher.finalize());

        if hash != model.sha256 {
            anyhow::bail!(
                "Checksum mismatch for {}: expected {}, got {}. \
                 Try deleting {} and re-running to download a fresh copy.",
                model.name,
                model.sha256,
                hash,
                path.display()
            );
        }
    }

    fs::write(path, &bytes).with_context(|| format!("Failed to write {}", model.name))?;

    info!("Downloaded {} ({} bytes)", model.name, bytes.len());
    Ok(())
}

/// Returns the path to a specific model file.
#[must_use]
pub fn model_path(name: &str) -> Option<PathBuf> {
    MODELS
        .iter()
        .find(|m| m.name == name)
        .map(|m| models_dir().join(m.filename))
}

/// Lists models with their installed status.
#[must_use]
pub fn list_models() -> Vec<(String, bool)> {
    let dir = models_dir();
    MODELS
        .iter()
        .map(|m| (m.name.to_string(), dir.join(m.filename).exists()))
        .collect()
}
