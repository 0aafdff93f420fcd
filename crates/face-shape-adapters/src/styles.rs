//! Hairstyle recommendation table loading.

use std::path::Path;

use anyhow::{Context, Result};
use face_shape_core::StyleTable;
use tracing::debug;

/// Loads a style table from a JSON file.
///
/// The file maps lowercase category names to arrays of hairstyle names:
///
/// ```json
/// { "oval": ["Layered cut", "Side-swept bangs"], "round": ["Long bob"] }
/// ```
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid table.
pub fn load_style_table(path: impl AsRef<Path>) -> Result<StyleTable> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read style table: {}", path.display()))?;

    let table = StyleTable::from_json(&json)
        .with_context(|| format!("Failed to parse style table: {}", path.display()))?;

    debug!(
        "Loaded style table from {} ({} categories)",
        path.display(),
        table.len()
    );

    Ok(table)
}
