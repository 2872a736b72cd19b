//! Lazy range of non-overlapping pattern matches over a text
//!
//! Each [`Match`] borrows the original text, so the prefix (text since the
//! previous match) and suffix (text to the end) are slices, never copies.

use std::ops::Range;
use std::sync::Arc;

use regex::{CaptureMatches, Captures, Regex};

/// One occurrence of a pattern, together with the text around it
#[derive(Debug, Clone)]
pub struct Match<'t> {
    haystack: &'t str,
    captures: Arc<Captures<'t>>,
    prefix_start: usize,
    start: usize,
    end: usize,
}

impl<'t> Match<'t> {
    /// The matched text
    pub fn as_str(&self) -> &'t str {
        &self.haystack[self.start..self.end]
    }

    /// Byte range of the matched text
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    /// Text between the previous match (or the start) and this match
    pub fn prefix(&self) -> &'t str {
        &self.haystack[self.prefix_range()]
    }

    pub fn prefix_range(&self) -> Range<usize> {
        self.prefix_start..self.start
    }

    /// Text from the end of this match to the end of the haystack
    pub fn suffix(&self) -> &'t str {
        &self.haystack[self.end..]
    }

    /// Text of group `index`, `None` if the group did not take part
    pub fn get(&self, index: usize) -> Option<&'t str> {
        self.captures.get(index).map(|m| m.as_str())
    }

    /// Text of the named group, `None` if the group did not take part
    pub fn name(&self, name: &str) -> Option<&'t str> {
        self.captures.name(name).map(|m| m.as_str())
    }

    /// Whether group `index` took part in the match
    pub fn matched(&self, index: usize) -> bool {
        self.captures.get(index).is_some()
    }

    /// Number of groups in the pattern, group 0 included
    pub fn group_count(&self) -> usize {
        self.captures.len()
    }

    pub fn captures(&self) -> &Captures<'t> {
        &self.captures
    }

    /// Expand `$0`, `$name`, `${name}` and `$$` in `replacement` against this
    /// match, appending the result to `dst`
    pub fn expand(&self, replacement: &str, dst: &mut String) {
        self.captures.expand(replacement, dst);
    }
}

/// Iterator returned by [`match_range`]
#[derive(Debug)]
pub struct Matches<'r, 't> {
    haystack: &'t str,
    inner: CaptureMatches<'r, 't>,
    last_end: usize,
}

impl<'r, 't> Iterator for Matches<'r, 't> {
    type Item = Match<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let captures = self.inner.next()?;
        let whole = captures.get(0)?;
        let found = Match {
            haystack: self.haystack,
            prefix_start: self.last_end,
            start: whole.start(),
            end: whole.end(),
            captures: Arc::new(captures),
        };
        self.last_end = found.end;
        Some(found)
    }
}

/// All non-overlapping matches of `pattern` in `text`, left to right
///
/// The range is lazy; every call starts a fresh scan.
pub fn match_range<'r, 't>(text: &'t str, pattern: &'r Regex) -> Matches<'r, 't> {
    Matches {
        haystack: text,
        inner: pattern.captures_iter(text),
        last_end: 0,
    }
}
