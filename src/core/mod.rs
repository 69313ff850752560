pub mod front_matter;

pub use front_matter::{has_front_matter, prepend_front_matter, MARKER};
