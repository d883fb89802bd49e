use std::sync::LazyLock;

use regex::Regex;

static WS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Flatten extracted node text onto one line: line breaks become spaces,
/// whitespace runs collapse to a single space, ends are trimmed.
pub fn normalize(s: &str) -> String {
    WS_RE.replace_all(s.trim(), " ").into_owned()
}
