//! strtpl - `$`-placeholder string templates
//!
//! Placeholders are a delimiter followed by an identifier (`$name`), a braced
//! identifier (`${name}`) or a second delimiter (`$$`, a literal `$`). Values
//! come from any [`Lookup`] table; a missing key or a malformed placeholder is
//! an error carrying enough context to point at the source.
//!
//! Underneath sits a generic streaming rewrite engine ([`rewrite`],
//! [`rewrite_into`]) that drives any regex over a text in one pass, copying the
//! unmatched spans straight from the input.
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use strtpl::substitute;
//!
//! let values = HashMap::from([("who", "Alice"), ("what", "bananas")]);
//! let text = substitute("$who likes $what.", &values).unwrap();
//! assert_eq!(text, "Alice likes bananas.");
//! ```

pub mod error;
pub mod escape;
pub mod matches;
pub mod position;
pub mod rewrite;
pub mod split;
pub mod template;
pub mod trailing;

pub use error::{Span, SubstituteError, TemplateError};
pub use escape::escape;
pub use matches::{match_range, Match, Matches};
pub use position::Position;
pub use rewrite::{count_matches, rewrite, rewrite_into, MatchCount, RewriteFlags};
pub use split::{split, split_n, Split};
pub use template::{FnLookup, Lookup, Placeholder, Policy, Template, TemplateSpec};
pub use trailing::{Trailing, TrailingExt};

use std::fmt;
use std::sync::LazyLock;

static DEFAULT_TEMPLATE: LazyLock<Template> = LazyLock::new(|| {
    // built-in identifier patterns always compile
    Template::new(TemplateSpec::default()).expect("default template pattern is valid")
});

/// The `$` template with the default identifier grammar and strict policy
pub fn default_template() -> &'static Template {
    &DEFAULT_TEMPLATE
}

/// Substitute `text` with the default template
///
/// # Example
///
/// ```rust
/// use strtpl::{substitute, Position, SubstituteError};
///
/// let values = [("who", "Alice")];
/// let err = substitute("$who likes $.", &values).unwrap_err();
/// assert!(matches!(
///     err,
///     SubstituteError::InvalidPlaceholder { position: Position { line: 1, column: 12 }, .. }
/// ));
/// ```
pub fn substitute<L>(text: &str, values: &L) -> Result<String, SubstituteError>
where
    L: Lookup + ?Sized,
{
    DEFAULT_TEMPLATE.substitute(text, values)
}

/// Substitute `text` with the default template, writing into `out`
pub fn substitute_into<W, L>(out: &mut W, text: &str, values: &L) -> Result<(), SubstituteError>
where
    W: fmt::Write + ?Sized,
    L: Lookup + ?Sized,
{
    DEFAULT_TEMPLATE.substitute_into(out, text, values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_substitute_with_default_template() {
        let values = HashMap::from([("who", "Alice"), ("verb", "run")]);
        assert_eq!(
            substitute("$who ${verb}s fast.", &values).unwrap(),
            "Alice runs fast."
        );
    }

    #[test]
    fn test_default_template_is_shared() {
        assert!(std::ptr::eq(default_template(), default_template()));
        assert_eq!(default_template().spec(), &TemplateSpec::default());
    }

    #[test]
    fn test_substitute_into_appends() {
        let mut out = String::from("> ");
        substitute_into(&mut out, "$$$x", &[("x", "1")]).unwrap();
        assert_eq!(out, "> $1");
    }
}
