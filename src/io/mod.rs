pub mod walker;
pub mod writer;

pub use walker::{is_markdown, process_config, process_folder, Summary, MARKDOWN_SUFFIX};
pub use writer::add_front_matter;
