//! In-place front matter insertion for a single file

use crate::core::{has_front_matter, prepend_front_matter};
use crate::error::{MatterStampError, Result};
use crate::notify::Outcome;
use log::{debug, info};
use std::fs;
use std::path::Path;

/// Prepend `front_matter` to the file at `path` unless it already has some.
///
/// The file is read once and, when needed, rewritten in a single write. There
/// is no temp-file staging, so a crash mid-write can leave the file truncated.
pub fn add_front_matter<P: AsRef<Path>>(path: P, front_matter: &str) -> Result<Outcome> {
    let path = path.as_ref();
    debug!("Reading {}", path.display());

    let content = fs::read_to_string(path).map_err(|err| MatterStampError::from_io(path, err))?;

    if has_front_matter(&content) {
        info!("Skipping {}: front matter already present", path.display());
        return Ok(Outcome::Skipped);
    }

    let new_content = prepend_front_matter(&content, front_matter);
    fs::write(path, new_content).map_err(|err| MatterStampError::from_io(path, err))?;

    info!("Added front matter to {}", path.display());
    Ok(Outcome::Added)
}
