//! Per-file notifications
//!
//! The walker reports each processed file through a [`NotificationSink`]
//! instead of writing to stdout directly, so library callers and tests can
//! observe outcomes without capturing process output.

use std::fmt;
use std::path::PathBuf;

/// What the writer did with a single file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Front matter was prepended and the file rewritten
    Added,
    /// The file already started with a marker and was left alone
    Skipped,
}

/// Outcome of processing one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub path: PathBuf,
    pub outcome: Outcome,
}

impl Notification {
    pub fn new(path: impl Into<PathBuf>, outcome: Outcome) -> Self {
        Self {
            path: path.into(),
            outcome,
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            Outcome::Added => write!(f, "Added YAML front matter to {}", self.path.display()),
            Outcome::Skipped => write!(
                f,
                "File {} already contains YAML front matter. Skipping.",
                self.path.display()
            ),
        }
    }
}

/// Receiver for per-file notifications
pub trait NotificationSink {
    fn notify(&mut self, notification: &Notification);
}

impl<F> NotificationSink for F
where
    F: FnMut(&Notification),
{
    fn notify(&mut self, notification: &Notification) {
        self(notification)
    }
}

/// Prints one line per notification to stdout
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl NotificationSink for StdoutSink {
    fn notify(&mut self, notification: &Notification) {
        println!("{}", notification);
    }
}

/// Keeps every notification in memory
#[derive(Debug, Default, Clone)]
pub struct CollectingSink {
    pub notifications: Vec<Notification>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Query helper: notifications whose final path component is exactly
    /// `file_name`, in the order they were received
    pub fn for_file<'a>(
        &'a self,
        file_name: &'a str,
    ) -> impl Iterator<Item = &'a Notification> + 'a {
        self.notifications
            .iter()
            .filter(move |n| n.path.file_name().is_some_and(|name| name == file_name))
    }
}

impl NotificationSink for CollectingSink {
    fn notify(&mut self, notification: &Notification) {
        self.notifications.push(notification.clone());
    }
}
