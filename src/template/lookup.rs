//! Lookup tables consulted for placeholder values

use std::borrow::{Borrow, Cow};
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// Read-only mapping from placeholder names to replacement text
///
/// Implemented for the standard maps, for slices and arrays of key-value
/// pairs, for TOML tables and, through [`FnLookup`], for closures.
pub trait Lookup {
    /// Replacement text for `key`, `None` if the table has no such key
    fn lookup(&self, key: &str) -> Option<Cow<'_, str>>;
}

impl<L: Lookup + ?Sized> Lookup for &L {
    fn lookup(&self, key: &str) -> Option<Cow<'_, str>> {
        (**self).lookup(key)
    }
}

impl<K, V, S> Lookup for HashMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    V: AsRef<str>,
    S: BuildHasher,
{
    fn lookup(&self, key: &str) -> Option<Cow<'_, str>> {
        self.get(key).map(|v| Cow::Borrowed(v.as_ref()))
    }
}

impl<K, V> Lookup for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: AsRef<str>,
{
    fn lookup(&self, key: &str) -> Option<Cow<'_, str>> {
        self.get(key).map(|v| Cow::Borrowed(v.as_ref()))
    }
}

impl<K, V> Lookup for [(K, V)]
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    fn lookup(&self, key: &str) -> Option<Cow<'_, str>> {
        self.iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| Cow::Borrowed(v.as_ref()))
    }
}

impl<K, V, const N: usize> Lookup for [(K, V); N]
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    fn lookup(&self, key: &str) -> Option<Cow<'_, str>> {
        self.as_slice().lookup(key)
    }
}

impl<K, V> Lookup for Vec<(K, V)>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    fn lookup(&self, key: &str) -> Option<Cow<'_, str>> {
        self.as_slice().lookup(key)
    }
}

/// Scalars render as their TOML text; arrays and tables are not values
impl Lookup for toml::Table {
    fn lookup(&self, key: &str) -> Option<Cow<'_, str>> {
        match self.get(key)? {
            toml::Value::String(s) => Some(Cow::Borrowed(s.as_str())),
            toml::Value::Integer(i) => Some(Cow::Owned(i.to_string())),
            toml::Value::Float(f) => Some(Cow::Owned(f.to_string())),
            toml::Value::Boolean(b) => Some(Cow::Owned(b.to_string())),
            toml::Value::Datetime(d) => Some(Cow::Owned(d.to_string())),
            toml::Value::Array(_) | toml::Value::Table(_) => None,
        }
    }
}

/// Adapts a closure into a [`Lookup`]
///
/// ```
/// use strtpl::{substitute, FnLookup};
///
/// let env = FnLookup(|key: &str| Some(key.to_uppercase()));
/// assert_eq!(substitute("$a-$b", &env).unwrap(), "A-B");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnLookup<F>(pub F);

impl<F> Lookup for FnLookup<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn lookup(&self, key: &str) -> Option<Cow<'_, str>> {
        (self.0)(key).map(Cow::Owned)
    }
}
