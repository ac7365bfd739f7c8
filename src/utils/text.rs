/// Shortens `text` to at most `max_chars` characters, preferring to break at
/// the last space before the limit and falling back to a hard cut.
///
/// Returns `None` when `text` already fits.
pub fn cut_at_space(text: &str, max_chars: usize) -> Option<&str> {
    let (limit, _) = text.char_indices().nth(max_chars)?;
    let head = &text[..limit];
    match head.rfind(' ') {
        Some(idx) if idx > 0 => Some(&head[..idx]),
        _ => Some(head),
    }
}
