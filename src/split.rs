//! Splitting text at pattern matches

use regex::Regex;

use crate::matches::{match_range, Matches};
use crate::trailing::{Trailing, TrailingExt};

/// Iterator returned by [`split`] and [`split_n`]
#[derive(Debug)]
pub struct Split<'r, 't> {
    text: &'t str,
    steps: Trailing<Matches<'r, 't>>,
    keep_delimiters: bool,
    /// Splits still allowed, `None` for no limit
    remaining: Option<usize>,
    /// Matched delimiter waiting to be yielded after its prefix
    delimiter: Option<&'t str>,
    last_end: usize,
    finished: bool,
}

impl<'r, 't> Iterator for Split<'r, 't> {
    type Item = &'t str;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(delimiter) = self.delimiter.take() {
            return Some(delimiter);
        }
        if self.finished {
            return None;
        }
        if self.remaining == Some(0) {
            self.finished = true;
            return Some(&self.text[self.last_end..]);
        }
        match self.steps.next() {
            // only reached when nothing matched at all
            None => {
                self.finished = true;
                Some(&self.text[self.last_end..])
            }
            Some((found, tag)) if tag > 0 => {
                self.finished = true;
                Some(found.suffix())
            }
            Some((found, _)) => {
                self.last_end = found.end();
                if let Some(remaining) = self.remaining.as_mut() {
                    *remaining -= 1;
                }
                if self.keep_delimiters {
                    self.delimiter = Some(found.as_str());
                }
                Some(found.prefix())
            }
        }
    }
}

/// Pieces of `text` between matches of `pattern`
///
/// With `keep_delimiters` every match is yielded right after the piece before
/// it, so concatenating the pieces gives back `text`.
pub fn split<'r, 't>(text: &'t str, pattern: &'r Regex, keep_delimiters: bool) -> Split<'r, 't> {
    new_split(text, pattern, keep_delimiters, None)
}

/// Like [`split`], but splits at no more than the first `limit` matches
///
/// The text after the last split is yielded whole.
pub fn split_n<'r, 't>(
    text: &'t str,
    pattern: &'r Regex,
    limit: usize,
    keep_delimiters: bool,
) -> Split<'r, 't> {
    new_split(text, pattern, keep_delimiters, Some(limit))
}

fn new_split<'r, 't>(
    text: &'t str,
    pattern: &'r Regex,
    keep_delimiters: bool,
    remaining: Option<usize>,
) -> Split<'r, 't> {
    Split {
        text,
        steps: match_range(text, pattern).trailing(2),
        keep_delimiters,
        remaining,
        delimiter: None,
        last_end: 0,
        finished: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn operators() -> Regex {
        Regex::new(r"[+\-*/]").unwrap()
    }

    #[test]
    fn test_split_drops_delimiters() {
        let re = Regex::new(r"\d+").unwrap();
        let pieces: Vec<_> = split("abc123def456ghi789", &re, false).collect();
        assert_eq!(pieces, vec!["abc", "def", "ghi", ""]);
        assert_eq!(pieces.concat(), "abcdefghi");
    }

    #[test]
    fn test_split_operators() {
        let pieces: Vec<_> = split("23+68*45-96/12", &operators(), false).collect();
        assert_eq!(pieces, vec!["23", "68", "45", "96", "12"]);
    }

    #[test]
    fn test_keep_delimiters_reproduces_text() {
        let text = "23+68*45-96/12";
        let pieces: Vec<_> = split(text, &operators(), true).collect();
        assert_eq!(pieces, vec!["23", "+", "68", "*", "45", "-", "96", "/", "12"]);
        assert_eq!(pieces.concat(), text);
    }

    #[test]
    fn test_split_n_limits_splits() {
        let pieces: Vec<_> = split_n("23+68*45-96/12", &operators(), 1, false).collect();
        assert_eq!(pieces, vec!["23", "68*45-96/12"]);
        assert_eq!(pieces.concat(), "2368*45-96/12");
    }

    #[test]
    fn test_split_n_keep_delimiters() {
        let pieces: Vec<_> = split_n("1+2+3", &operators(), 1, true).collect();
        assert_eq!(pieces, vec!["1", "+", "2+3"]);
    }

    #[test]
    fn test_split_n_zero_yields_whole_text() {
        let pieces: Vec<_> = split_n("1+2", &operators(), 0, false).collect();
        assert_eq!(pieces, vec!["1+2"]);
    }

    #[test]
    fn test_split_n_larger_than_matches() {
        let pieces: Vec<_> = split_n("1+2", &operators(), 5, false).collect();
        assert_eq!(pieces, vec!["1", "2"]);
    }

    #[test]
    fn test_no_match_yields_whole_text() {
        let pieces: Vec<_> = split("plain", &operators(), true).collect();
        assert_eq!(pieces, vec!["plain"]);
    }

    #[test]
    fn test_empty_text() {
        let pieces: Vec<_> = split("", &operators(), false).collect();
        assert_eq!(pieces, vec![""]);
    }
}
