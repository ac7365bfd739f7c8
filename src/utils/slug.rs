pub const MAX_SLUG_LEN: usize = 50;
pub const FALLBACK_SLUG: &str = "job";

/// Builds the human-readable part of a job URL from its title.
///
/// Everything outside `[a-z0-9]` collapses into a single `-`, the result is
/// capped at [`MAX_SLUG_LEN`] and never starts or ends with a separator. The
/// slug is decorative: job URLs are resolved by numeric id only.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len().min(MAX_SLUG_LEN + 1));
    let mut pending_dash = false;

    for ch in title.chars().flat_map(char::to_lowercase) {
        if slug.len() >= MAX_SLUG_LEN {
            break;
        }
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(ch);
            pending_dash = false;
        } else {
            pending_dash = true;
        }
    }

    // ascii only, so byte truncation is safe
    slug.truncate(MAX_SLUG_LEN);
    while slug.ends_with('-') {
        slug.pop();
    }

    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_lowercases_and_collapses_separators() {
        assert_eq!(slugify("Senior Rust Developer"), "senior-rust-developer");
        assert_eq!(slugify("C++ / Go -- Backend!!"), "c-go-backend");
        assert_eq!(slugify("  Remote   (EU)  "), "remote-eu");
    }

    #[test]
    fn slugify_falls_back_to_job() {
        assert_eq!(slugify(""), "job");
        assert_eq!(slugify("!!!"), "job");
        assert_eq!(slugify("Разработчик 🦀"), "job");
    }

    #[test]
    fn slugify_keeps_ascii_parts_of_mixed_titles() {
        assert_eq!(slugify("Python разработчик 3+ лет"), "python-3");
    }

    #[test]
    fn slugify_caps_length_without_trailing_separator() {
        let title = "a".repeat(49) + " bcd";
        let slug = slugify(&title);
        assert_eq!(slug, "a".repeat(49));

        let long = "word ".repeat(40);
        let slug = slugify(&long);
        assert!(slug.len() <= MAX_SLUG_LEN);
        assert!(!slug.starts_with('-'));
        assert!(!slug.ends_with('-'));
    }

    #[test]
    fn slugify_is_never_empty_and_bounded() {
        for title in ["", "-", "---a---", "Ω", "123", "x".repeat(200).as_str()] {
            let slug = slugify(title);
            assert!(!slug.is_empty());
            assert!(slug.len() <= MAX_SLUG_LEN);
            assert!(!slug.starts_with('-') && !slug.ends_with('-'), "{slug}");
        }
    }
}
