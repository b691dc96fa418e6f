//! Default on-disk locations.

use anyhow::{Context, Result};
use std::path::PathBuf;

/// The default data directory (`~/.linkdeck`).
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_data_dir() -> Result<PathBuf> {
    let home_dir = dirs::home_dir().context("Failed to get home directory")?;
    Ok(home_dir.join(".linkdeck"))
}

/// The default directory for stored avatar objects.
pub fn default_objects_dir() -> Result<PathBuf> {
    Ok(default_data_dir()?.join("objects"))
}
