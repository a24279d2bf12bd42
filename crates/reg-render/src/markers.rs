//! `<!-- BEGIN:NAME -->` / `<!-- END:NAME -->` marker handling.

/// Opening marker of a named section.
#[must_use]
pub fn begin_marker(name: &str) -> String {
    format!("<!-- BEGIN:{name} -->")
}

/// Closing marker of a named section.
#[must_use]
pub fn end_marker(name: &str) -> String {
    format!("<!-- END:{name} -->")
}

/// Replace everything strictly between the markers of `name` with
/// `\n{content}\n`.
///
/// The end marker is searched after the begin marker. Returns `None` when
/// either marker is missing, leaving the caller to keep the text unchanged.
#[must_use]
pub fn replace_section(document: &str, name: &str, content: &str) -> Option<String> {
    let begin = begin_marker(name);
    let end = end_marker(name);

    let content_start = document.find(&begin)? + begin.len();
    let content_end = content_start + document[content_start..].find(&end)?;

    let before = &document[..content_start];
    let after = &document[content_end..];
    Some(format!("{before}\n{content}\n{after}"))
}
