use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Markup that may be written into a page without escaping.
///
/// Only [`sanitize`] and the preview builder produce values of this type, so
/// scraped content cannot reach a template unescaped by any other route.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SafeHtml(String);

impl SafeHtml {
    pub(crate) fn from_trusted(markup: String) -> Self {
        Self(markup)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SafeHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

const ALLOWED_TAGS: [&str; 27] = [
    "p", "br", "a", "strong", "b", "em", "i", "u", "s", "ul", "ol", "li", "blockquote", "code",
    "pre", "h1", "h2", "h3", "h4", "h5", "h6", "table", "thead", "tbody", "tr", "td", "th",
];

static POLICY: LazyLock<ammonia::Builder<'static>> = LazyLock::new(|| {
    let mut builder = ammonia::Builder::default();
    builder
        .tags(ALLOWED_TAGS.into_iter().collect())
        .generic_attributes(HashSet::new())
        .tag_attributes(HashMap::from([("a", HashSet::from(["href"]))]))
        .url_schemes(HashSet::from(["http", "https", "mailto"]))
        .link_rel(None);
    builder
});

static LEADING_HSPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[\t ]+").expect("leading whitespace pattern"));

static BLANK_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("blank line pattern"));

/// Cleans scraped job markup down to basic formatting.
///
/// Anything outside the tag allow-list is dropped (`<script>` and `<style>`
/// together with their content), `href` on links is the only attribute that
/// survives and only for http, https and mailto targets. Line indentation is
/// removed and runs of blank lines are squeezed to one.
pub fn sanitize(raw: &str) -> SafeHtml {
    let cleaned = POLICY.clean(raw).to_string();
    let cleaned = LEADING_HSPACE.replace_all(&cleaned, "");
    let cleaned = BLANK_RUNS.replace_all(cleaned.trim(), "\n\n");
    SafeHtml::from_trusted(cleaned.into_owned())
}
