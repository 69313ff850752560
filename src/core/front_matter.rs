//! Front matter detection and insertion on in-memory text

/// Delimiter opening and closing a front matter block
pub const MARKER: &str = "---";

/// Whether `content` already starts with a front matter marker.
///
/// Only the opening marker is inspected; a file holding a lone `---` with no
/// closing delimiter still counts as having front matter.
pub fn has_front_matter(content: &str) -> bool {
    content.starts_with(MARKER)
}

/// Wrap `front_matter` in markers and place it before `content`.
///
/// `content` is kept byte for byte after the inserted block.
pub fn prepend_front_matter(content: &str, front_matter: &str) -> String {
    let mut out = String::with_capacity(content.len() + front_matter.len() + 2 * MARKER.len() + 4);
    out.push_str(MARKER);
    out.push('\n');
    out.push_str(front_matter);
    out.push('\n');
    out.push_str(MARKER);
    out.push_str("\n\n");
    out.push_str(content);
    out
}
