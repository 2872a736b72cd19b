//! Streaming pattern-driven rewrite
//!
//! The engine walks the match range through a [`trailing`](crate::trailing)
//! adapter with bound 2. A step tagged 0 copies the prefix and writes the
//! replacement for that match; the single step tagged 1 copies whatever
//! follows the last match. Nothing is scanned twice and literal spans are
//! written straight from the input.

use std::borrow::Cow;
use std::fmt;
use std::iter::Take;

use regex::Regex;
use tracing::trace;

use crate::matches::{match_range, Match, Matches};
use crate::trailing::{Trailing, TrailingExt};

/// Options for [`rewrite`] and [`rewrite_into`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteFlags {
    /// Do not copy unmatched text, only replacements
    pub no_copy: bool,
    /// Replace the first match only
    pub first_only: bool,
    /// Write replacements verbatim instead of expanding `$` references
    pub no_expand: bool,
}

impl RewriteFlags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_no_copy(mut self, no_copy: bool) -> Self {
        self.no_copy = no_copy;
        self
    }

    pub fn with_first_only(mut self, first_only: bool) -> Self {
        self.first_only = first_only;
        self
    }

    pub fn with_no_expand(mut self, no_expand: bool) -> Self {
        self.no_expand = no_expand;
        self
    }
}

/// Number of matches in a text and the length of the text after the last one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchCount {
    pub matches: usize,
    /// Byte length of the unmatched tail; the whole text when nothing matched
    pub tail_len: usize,
}

/// Rewrite every match of `pattern` in `text` into `out`
///
/// `resolve` is called once per match, in order, and its result is written in
/// place of the match. An error from `resolve` or from `out` stops the rewrite
/// and is returned as is; `out` keeps whatever was written before it. Returns
/// the number of matches replaced.
pub fn rewrite_into<'t, W, F, R, E>(
    out: &mut W,
    text: &'t str,
    pattern: &Regex,
    resolve: F,
    flags: RewriteFlags,
) -> Result<usize, E>
where
    W: fmt::Write + ?Sized,
    F: FnMut(&Match<'t>) -> Result<R, E>,
    R: AsRef<str>,
    E: From<fmt::Error>,
{
    let mut steps = tagged_matches(text, pattern, flags);
    let Some(first) = steps.next() else {
        if !flags.no_copy {
            out.write_str(text)?;
        }
        return Ok(0);
    };
    stream(out, std::iter::once(first).chain(steps), resolve, flags)
}

/// Rewrite every match of `pattern` in `text` into a new string
///
/// Borrows `text` when nothing matched. See [`rewrite_into`].
pub fn rewrite<'t, F, R, E>(
    text: &'t str,
    pattern: &Regex,
    resolve: F,
    flags: RewriteFlags,
) -> Result<Cow<'t, str>, E>
where
    F: FnMut(&Match<'t>) -> Result<R, E>,
    R: AsRef<str>,
    E: From<fmt::Error>,
{
    let mut steps = tagged_matches(text, pattern, flags);
    let Some(first) = steps.next() else {
        return Ok(Cow::Borrowed(if flags.no_copy { "" } else { text }));
    };
    let mut out = String::with_capacity(text.len());
    stream(&mut out, std::iter::once(first).chain(steps), resolve, flags)?;
    Ok(Cow::Owned(out))
}

/// Count matches of `pattern` and measure the text after the last one
pub fn count_matches(text: &str, pattern: &Regex) -> MatchCount {
    let mut count = MatchCount {
        matches: 0,
        tail_len: text.len(),
    };
    for (found, tag) in match_range(text, pattern).trailing(2) {
        if tag > 0 {
            count.tail_len = found.suffix().len();
        } else {
            count.matches += 1;
        }
    }
    count
}

/// Tagged match steps; `first_only` stops the scan after one match
fn tagged_matches<'r, 't>(
    text: &'t str,
    pattern: &'r Regex,
    flags: RewriteFlags,
) -> Trailing<Take<Matches<'r, 't>>> {
    let limit = if flags.first_only { 1 } else { usize::MAX };
    match_range(text, pattern).take(limit).trailing(2)
}

fn stream<'t, W, I, F, R, E>(
    out: &mut W,
    steps: I,
    mut resolve: F,
    flags: RewriteFlags,
) -> Result<usize, E>
where
    W: fmt::Write + ?Sized,
    I: Iterator<Item = (Match<'t>, usize)>,
    F: FnMut(&Match<'t>) -> Result<R, E>,
    R: AsRef<str>,
    E: From<fmt::Error>,
{
    let copy = !flags.no_copy;
    let mut replaced = 0;
    for (found, tag) in steps {
        if tag > 0 {
            if copy {
                write_span(out, found.suffix())?;
            }
            break;
        }
        if copy {
            write_span(out, found.prefix())?;
        }
        let replacement = resolve(&found)?;
        write_replacement(out, &found, replacement.as_ref(), flags)?;
        replaced += 1;
    }
    trace!(replaced, "rewrite finished");
    Ok(replaced)
}

fn write_span<W: fmt::Write + ?Sized>(out: &mut W, span: &str) -> fmt::Result {
    if span.is_empty() {
        return Ok(());
    }
    out.write_str(span)
}

fn write_replacement<W: fmt::Write + ?Sized>(
    out: &mut W,
    found: &Match<'_>,
    replacement: &str,
    flags: RewriteFlags,
) -> fmt::Result {
    if flags.no_expand || !replacement.contains('$') {
        return write_span(out, replacement);
    }
    let mut expanded = String::new();
    found.expand(replacement, &mut expanded);
    write_span(out, &expanded)
}
