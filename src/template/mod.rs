//! `$`-placeholder string templates
//!
//! A [`Template`] compiles a [`TemplateSpec`] into a pattern once and then
//! substitutes any number of texts against any [`Lookup`] table.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use strtpl::{SubstituteError, Template, TemplateSpec};
//!
//! let template = Template::new(TemplateSpec::default()).unwrap();
//! let values = HashMap::from([("who", "Alice"), ("verb", "run")]);
//!
//! assert_eq!(template.substitute("$who ${verb}s fast.", &values).unwrap(), "Alice runs fast.");
//! assert!(matches!(
//!     template.substitute("$who likes $where.", &values),
//!     Err(SubstituteError::KeyNotFound { .. })
//! ));
//! ```

mod lookup;
mod placeholder;
mod spec;

pub use lookup::{FnLookup, Lookup};
pub use placeholder::Placeholder;
pub use spec::{Policy, TemplateSpec, DEFAULT_DELIMITER, DEFAULT_IDPATTERN};

use std::borrow::Cow;
use std::fmt;
use std::path::Path;

use regex::Regex;
use tracing::debug;

use crate::error::{SubstituteError, TemplateError};
use crate::matches::Match;
use crate::position::Position;
use crate::rewrite::{rewrite_into, RewriteFlags};

/// A compiled template spec
#[derive(Debug, Clone)]
pub struct Template {
    spec: TemplateSpec,
    pattern: Regex,
}

impl Template {
    /// Compile `spec`
    ///
    /// Fails on an empty delimiter or when an identifier pattern does not
    /// compile.
    pub fn new(spec: TemplateSpec) -> Result<Self, TemplateError> {
        if spec.delimiter.is_empty() {
            return Err(TemplateError::EmptyDelimiter);
        }
        let source = spec.pattern_source();
        let pattern = Regex::new(&source)?;
        debug!(delimiter = %spec.delimiter, pattern = %source, "compiled template pattern");
        Ok(Self { spec, pattern })
    }

    /// Compile a spec loaded from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, TemplateError> {
        Self::new(TemplateSpec::from_str(content)?)
    }

    /// Compile a spec loaded from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, TemplateError> {
        Self::new(TemplateSpec::from_file(path)?)
    }

    pub fn spec(&self) -> &TemplateSpec {
        &self.spec
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// Replace every placeholder in `text` with its value from `values`
    pub fn substitute<L>(&self, text: &str, values: &L) -> Result<String, SubstituteError>
    where
        L: Lookup + ?Sized,
    {
        let mut out = String::with_capacity(text.len());
        self.substitute_into(&mut out, text, values)?;
        Ok(out)
    }

    /// Like [`substitute`](Self::substitute), writing into `out`
    ///
    /// On error `out` holds the output up to the failing placeholder.
    pub fn substitute_into<W, L>(
        &self,
        out: &mut W,
        text: &str,
        values: &L,
    ) -> Result<(), SubstituteError>
    where
        W: fmt::Write + ?Sized,
        L: Lookup + ?Sized,
    {
        rewrite_into(
            out,
            text,
            &self.pattern,
            |found: &Match<'_>| self.resolve(text, found, values),
            self.flags(),
        )
        .inspect_err(|err| debug!(error = %err, "substitution failed"))?;
        Ok(())
    }

    fn flags(&self) -> RewriteFlags {
        // lookup values are inserted as they are
        self.spec.flags.with_no_expand(true)
    }

    fn resolve<'a, L>(
        &'a self,
        text: &str,
        found: &Match<'_>,
        values: &'a L,
    ) -> Result<Cow<'a, str>, SubstituteError>
    where
        L: Lookup + ?Sized,
    {
        let Some(placeholder) = Placeholder::classify(found) else {
            return Err(SubstituteError::UnrecognizedMatch);
        };
        match placeholder.key() {
            Some(key) => match values.lookup(key) {
                Some(value) => Ok(value),
                None => self.missing(key, found),
            },
            None if matches!(placeholder, Placeholder::Escaped) => {
                Ok(Cow::Borrowed(&self.spec.delimiter))
            }
            None => self.invalid(text, found),
        }
    }

    fn missing<'a>(&'a self, key: &str, found: &Match<'_>) -> Result<Cow<'a, str>, SubstituteError> {
        match &self.spec.policy {
            Policy::Strict => Err(SubstituteError::KeyNotFound {
                key: key.to_string(),
                span: found.range(),
            }),
            Policy::Sentinel { missing, .. } => {
                debug!(key, "no value for placeholder, writing sentinel");
                Ok(Cow::Borrowed(missing))
            }
        }
    }

    fn invalid<'a>(&'a self, text: &str, found: &Match<'_>) -> Result<Cow<'a, str>, SubstituteError> {
        match &self.spec.policy {
            Policy::Strict => Err(SubstituteError::InvalidPlaceholder {
                position: Position::locate(&text[..found.prefix_range().end]),
                span: found.range(),
            }),
            Policy::Sentinel { invalid, .. } => {
                debug!(offset = found.start(), "invalid placeholder, writing sentinel");
                Ok(Cow::Borrowed(invalid))
            }
        }
    }
}
