use super::sanitize::SafeHtml;
use super::text::cut_at_space;

pub const PREVIEW_MAX_CHARS: usize = 700;
pub const PREVIEW_LINES: usize = 5;

const LINE_BREAK: &str = "<br>";
const ELLIPSIS: &str = "...";

/// Short excerpt of a posting's plain-text body for list pages.
///
/// Blank lines are skipped, at most `max_lines` remaining lines are kept and
/// joined with `<br>`, and the result is capped at [`PREVIEW_MAX_CHARS`]. An
/// ellipsis marks any dropped text. Lines are HTML-escaped before joining.
pub fn preview(plain_text: &str, max_lines: usize) -> SafeHtml {
    let lines: Vec<String> = plain_text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| html_escape::encode_text(line).into_owned())
        .collect();

    if lines.is_empty() {
        return SafeHtml::default();
    }

    let taken = lines.len().min(max_lines);
    let mut result = lines[..taken].join(LINE_BREAK);

    if let Some(cut) = cut_at_space(&result, PREVIEW_MAX_CHARS) {
        result = format!("{}{}", drop_partial_markup(cut), ELLIPSIS);
    } else if lines.len() > taken {
        result.push_str(ELLIPSIS);
    }

    SafeHtml::from_trusted(result)
}

// A hard cut can land inside an escaped entity or a `<br>`.
fn drop_partial_markup(text: &str) -> &str {
    let mut end = text.len();
    if let Some(amp) = text.rfind('&') {
        if !text[amp..].contains(';') {
            end = amp;
        }
    }
    if let Some(lt) = text[..end].rfind('<') {
        if !text[lt..end].contains('>') {
            end = lt;
        }
    }
    &text[..end]
}
