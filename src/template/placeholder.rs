//! Classification of template pattern matches

use crate::matches::Match;

/// Group names of the compiled template pattern, in precedence order
pub(crate) const NAMED: &str = "named";
pub(crate) const BRACED: &str = "braced";
pub(crate) const ESCAPED: &str = "escaped";
pub(crate) const INVALID: &str = "invalid";

/// Which alternative of the template pattern a match fired
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder<'t> {
    /// `$name`
    Named(&'t str),
    /// `${name}`
    Braced(&'t str),
    /// `$$`, a literal delimiter
    Escaped,
    /// A delimiter followed by anything else
    Invalid,
}

impl<'t> Placeholder<'t> {
    /// Classify a match of a template pattern
    ///
    /// Returns `None` when no alternative took part, which a pattern built by
    /// [`TemplateSpec::pattern_source`](super::TemplateSpec::pattern_source)
    /// never produces.
    pub fn classify(found: &Match<'t>) -> Option<Self> {
        if let Some(key) = found.name(NAMED) {
            Some(Placeholder::Named(key))
        } else if let Some(key) = found.name(BRACED) {
            Some(Placeholder::Braced(key))
        } else if found.name(ESCAPED).is_some() {
            Some(Placeholder::Escaped)
        } else if found.name(INVALID).is_some() {
            Some(Placeholder::Invalid)
        } else {
            None
        }
    }

    /// The identifier, for named and braced placeholders
    pub fn key(&self) -> Option<&'t str> {
        match *self {
            Placeholder::Named(key) | Placeholder::Braced(key) => Some(key),
            Placeholder::Escaped | Placeholder::Invalid => None,
        }
    }
}
