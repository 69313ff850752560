//! Recursive folder traversal

use crate::config::Config;
use crate::error::{MatterStampError, Result};
use crate::io::writer::add_front_matter;
use crate::notify::{Notification, NotificationSink, Outcome};
use log::{debug, info, warn};
use std::fs;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// Suffix a file name must end with to be processed (case-sensitive)
pub const MARKDOWN_SUFFIX: &str = ".md";

/// Counts of what a completed run did
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub added: usize,
    pub skipped: usize,
}

impl Summary {
    /// Total number of markdown files visited
    pub fn processed(&self) -> usize {
        self.added + self.skipped
    }

    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Added => self.added += 1,
            Outcome::Skipped => self.skipped += 1,
        }
    }
}

/// Whether `path` names a qualifying markdown file
pub fn is_markdown(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().ends_with(MARKDOWN_SUFFIX))
        .unwrap_or(false)
}

/// Regular files and symlinks that resolve to files; symlinked directories
/// are not descended.
fn is_markdown_file(entry: &DirEntry) -> bool {
    let is_file =
        entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file());
    is_file && is_markdown(entry.path())
}

/// Add `front_matter` to every markdown file under `folder`.
///
/// Stops at the first error. Files rewritten before the failure stay
/// rewritten.
pub fn process_folder<P, S>(folder: P, front_matter: &str, sink: &mut S) -> Result<Summary>
where
    P: AsRef<Path>,
    S: NotificationSink + ?Sized,
{
    let folder = folder.as_ref();

    let metadata = fs::metadata(folder).map_err(|err| MatterStampError::from_io(folder, err))?;
    if !metadata.is_dir() {
        return Err(MatterStampError::not_a_directory(folder));
    }

    let mut summary = Summary::default();

    for entry in WalkDir::new(folder).sort_by_file_name() {
        let entry = entry?;
        if !is_markdown_file(&entry) {
            continue;
        }
        debug!("Processing file: {}", entry.path().display());

        let outcome = add_front_matter(entry.path(), front_matter)?;
        summary.record(outcome);
        sink.notify(&Notification::new(entry.path(), outcome));
    }

    if summary.processed() == 0 {
        warn!("No markdown files found under {}", folder.display());
    }
    info!(
        "Processed {} markdown files under {} ({} added, {} skipped)",
        summary.processed(),
        folder.display(),
        summary.added,
        summary.skipped
    );

    Ok(summary)
}

/// [`process_folder`] driven by a loaded [`Config`]
pub fn process_config<S>(config: &Config, sink: &mut S) -> Result<Summary>
where
    S: NotificationSink + ?Sized,
{
    process_folder(&config.folder_path, &config.yaml_front_matter, sink)
}
