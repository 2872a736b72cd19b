//! Template configuration
//!
//! A [`TemplateSpec`] describes the placeholder grammar: the delimiter, the
//! identifier patterns and what to do with placeholders that cannot be
//! resolved. It can be built in code or loaded from TOML:
//!
//! ```toml
//! delimiter = "%"
//! idpattern = "[a-z]+"
//! braceidpattern = "[a-z.]+"
//!
//! [policy]
//! mode = "sentinel"
//! missing = "?"
//! ```

use std::path::Path;

use serde::Deserialize;

use super::placeholder::{BRACED, ESCAPED, INVALID, NAMED};
use crate::error::TemplateError;
use crate::escape::escape;
use crate::rewrite::RewriteFlags;

pub const DEFAULT_DELIMITER: &str = "$";
pub const DEFAULT_IDPATTERN: &str = "[_a-zA-Z][_a-zA-Z0-9]*";
pub const DEFAULT_MISSING_SENTINEL: &str = "NONE";
pub const DEFAULT_INVALID_SENTINEL: &str = "ERROR";

/// What to do with placeholders that have no value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Policy {
    /// Fail with `KeyNotFound` or `InvalidPlaceholder`
    #[default]
    Strict,
    /// Write `missing` for unknown keys and `invalid` for malformed
    /// placeholders; never fail on either
    Sentinel { missing: String, invalid: String },
}

impl Policy {
    /// Sentinel policy with the `NONE` / `ERROR` defaults
    pub fn sentinel() -> Self {
        Policy::Sentinel {
            missing: DEFAULT_MISSING_SENTINEL.to_string(),
            invalid: DEFAULT_INVALID_SENTINEL.to_string(),
        }
    }
}

/// Placeholder grammar and substitution options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSpec {
    /// Text that starts a placeholder, matched literally
    pub delimiter: String,
    /// Pattern for the identifier of `$name`
    pub idpattern: String,
    /// Pattern for the identifier of `${name}`
    pub braceidpattern: String,
    /// Rewrite options; `no_expand` is always forced on
    pub flags: RewriteFlags,
    pub policy: Policy,
}

/// TOML structure for deserializing template specs
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlTemplateSpec {
    delimiter: Option<String>,
    idpattern: Option<String>,
    braceidpattern: Option<String>,
    #[serde(default)]
    first_only: bool,
    #[serde(default)]
    no_copy: bool,
    policy: Option<TomlPolicy>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlPolicy {
    mode: TomlMode,
    missing: Option<String>,
    invalid: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "lowercase")]
enum TomlMode {
    Strict,
    Sentinel,
}

impl Default for TemplateSpec {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            idpattern: DEFAULT_IDPATTERN.to_string(),
            braceidpattern: DEFAULT_IDPATTERN.to_string(),
            flags: RewriteFlags::default(),
            policy: Policy::Strict,
        }
    }
}

impl TemplateSpec {
    /// Create a spec with the `$` delimiter and identifier defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a spec from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, TemplateError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a spec from a TOML string; missing keys keep their defaults
    pub fn from_str(content: &str) -> Result<Self, TemplateError> {
        let parsed: TomlTemplateSpec = toml::from_str(content)?;

        let mut spec = TemplateSpec::default();
        if let Some(delimiter) = parsed.delimiter {
            spec.delimiter = delimiter;
        }
        if let Some(idpattern) = parsed.idpattern {
            spec.braceidpattern = idpattern.clone();
            spec.idpattern = idpattern;
        }
        if let Some(braceidpattern) = parsed.braceidpattern {
            spec.braceidpattern = braceidpattern;
        }
        spec.flags = spec
            .flags
            .with_first_only(parsed.first_only)
            .with_no_copy(parsed.no_copy);
        spec.policy = match parsed.policy {
            None => Policy::Strict,
            Some(TomlPolicy {
                mode: TomlMode::Strict,
                ..
            }) => Policy::Strict,
            Some(TomlPolicy {
                mode: TomlMode::Sentinel,
                missing,
                invalid,
            }) => Policy::Sentinel {
                missing: missing.unwrap_or_else(|| DEFAULT_MISSING_SENTINEL.to_string()),
                invalid: invalid.unwrap_or_else(|| DEFAULT_INVALID_SENTINEL.to_string()),
            },
        };
        Ok(spec)
    }

    /// Set the delimiter
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Set the identifier pattern for both `$name` and `${name}`
    pub fn with_idpattern(mut self, idpattern: impl Into<String>) -> Self {
        self.idpattern = idpattern.into();
        self.braceidpattern = self.idpattern.clone();
        self
    }

    /// Set the identifier pattern for `${name}` only
    pub fn with_braceidpattern(mut self, braceidpattern: impl Into<String>) -> Self {
        self.braceidpattern = braceidpattern.into();
        self
    }

    pub fn with_flags(mut self, flags: RewriteFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    /// Source of the template pattern
    ///
    /// The alternatives are, in order: identifier, braced identifier, doubled
    /// delimiter, and an empty catch-all that fires on any other delimiter.
    pub fn pattern_source(&self) -> String {
        let delimiter = escape(&self.delimiter);
        format!(
            r"{delimiter}(?:(?P<{NAMED}>{id})|\{{(?P<{BRACED}>{braced})\}}|(?P<{ESCAPED}>{delimiter})|(?P<{INVALID}>))",
            id = self.idpattern,
            braced = self.braceidpattern,
        )
    }
}
