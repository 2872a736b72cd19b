//! Escaping text for literal use inside a pattern

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

// constant pattern, compiled once
static METACHARACTERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[.*+?^${}()|\[\]\\]").expect("metacharacter pattern is valid")
});

/// Prefix each of `. * + ? ^ $ { } ( ) | [ ] \` with a backslash
///
/// The result matches `text` literally when embedded in a larger pattern.
/// Borrows `text` when there is nothing to escape.
pub fn escape(text: &str) -> Cow<'_, str> {
    METACHARACTERS.replace_all(text, r"\${0}")
}
