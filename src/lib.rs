//! matterstamp: add a fixed YAML front matter block to every markdown file in
//! a folder tree
//!
//! A run reads a configuration document, walks the configured folder and
//! prepends the configured block to each `.md` file that does not already
//! start with a `---` marker. Files that already have front matter are never
//! touched, so running the tool repeatedly is safe.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use matterstamp::{process_config, Config, StdoutSink, Result};
//!
//! fn main() -> Result<()> {
//!     let config = Config::load("config.yaml")?;
//!     let summary = process_config(&config, &mut StdoutSink)?;
//!     println!("{} files updated", summary.added);
//!     Ok(())
//! }
//! ```
//!
//! Notifications can be captured instead of printed:
//!
//! ```rust,no_run
//! use matterstamp::{process_folder, CollectingSink, Result};
//!
//! fn main() -> Result<()> {
//!     let mut sink = CollectingSink::new();
//!     process_folder("notes/", "tags: [inbox]", &mut sink)?;
//!     for notification in &sink.notifications {
//!         println!("{:?}: {}", notification.outcome, notification.path.display());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`config`]: configuration document loading
//! - [`core`]: marker detection and block insertion on in-memory text
//! - [`io`]: single-file rewriting and recursive folder traversal
//! - [`notify`]: per-file notifications and sinks
//! - [`error`]: error type and classification

pub use config::{Config, ConfigDocument, DEFAULT_CONFIG_FILE};
pub use error::{ErrorKind, MatterStampError, Result};
pub use io::{add_front_matter, is_markdown, process_config, process_folder, Summary};
pub use notify::{CollectingSink, Notification, NotificationSink, Outcome, StdoutSink};

pub mod config;
pub mod core;
pub mod error;
pub mod io;
pub mod notify;
