//! Option and alias registries consumed by the parser.
//!
//! Both registries are plain lookup tables built before parsing. The parser
//! only reads them, so a schema can back any number of concurrently parsing
//! engines by shared reference.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Declared value kind for a named option.
///
/// The set is closed. [`Nullity`](OptionKind::Nullity) means "no type
/// constraint / unregistered" and [`Error`](OptionKind::Error) is a sentinel
/// for invalid enumeration values; neither is ever declared for a real
/// option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OptionKind {
    /// Any text value.
    String,
    /// Signed 64-bit integer.
    Signed,
    /// Unsigned 64-bit integer.
    Unsigned,
    /// Floating-point number.
    Real,
    /// Boolean flag; its presence alone sets it true.
    Boolean,
    /// No constraint / not registered (the default).
    #[default]
    Nullity,
    /// Sentinel for invalid enumeration values.
    Error,
}

/// Mapping from option name to its declared [`OptionKind`].
///
/// Keys are unique: [`add_option`](OptionSchema::add_option) refuses to
/// overwrite. A key registered as [`OptionKind::Nullity`] behaves exactly
/// like an absent key at lookup.
///
/// # Examples
///
/// ```
/// use typed_argv_core::{OptionKind, OptionSchema};
///
/// let mut schema = OptionSchema::new();
/// assert!(schema.add_option("count", OptionKind::Unsigned));
/// assert!(!schema.add_option("count", OptionKind::String)); // already present
/// assert_eq!(schema.option_kind("count"), OptionKind::Unsigned);
/// assert_eq!(schema.option_kind("missing"), OptionKind::Nullity);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OptionSchema {
    options: HashMap<String, OptionKind>,
}

impl OptionSchema {
    /// Creates an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `name` with `kind`; returns `false` without mutating when
    /// the name is already registered.
    pub fn add_option(&mut self, name: &str, kind: OptionKind) -> bool {
        if self.options.contains_key(name) {
            return false;
        }
        self.options.insert(name.to_string(), kind);
        true
    }

    /// Removes `name`; returns `false` when it was not registered.
    pub fn remove_option(&mut self, name: &str) -> bool {
        self.options.remove(name).is_some()
    }

    /// The declared kind of `name`.
    ///
    /// Unknown names and names registered as [`OptionKind::Nullity`] both
    /// yield `Nullity`.
    pub fn option_kind(&self, name: &str) -> OptionKind {
        self.options.get(name).copied().unwrap_or(OptionKind::Nullity)
    }

    /// Whether `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.options.contains_key(name)
    }
}

impl<const N: usize> From<[(&str, OptionKind); N]> for OptionSchema {
    fn from(entries: [(&str, OptionKind); N]) -> Self {
        Self {
            options: entries
                .into_iter()
                .map(|(name, kind)| (name.to_string(), kind))
                .collect(),
        }
    }
}

/// Mapping from a single-dash shorthand to a canonical option name.
///
/// Same insert-once/remove semantics as [`OptionSchema`]. An alias absent
/// from the table is "unbound"; the parser records values supplied to it
/// into its invalid-alias bucket.
///
/// # Examples
///
/// ```
/// use typed_argv_core::AliasTable;
///
/// let mut aliases = AliasTable::new();
/// assert!(aliases.add_alias("t", "type"));
/// assert!(!aliases.add_alias("t", "target"));
/// assert_eq!(aliases.option_name("t"), Some("type"));
/// assert_eq!(aliases.option_name("x"), None);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AliasTable {
    aliases: HashMap<String, String>,
}

impl AliasTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `alias` to `option_name`; returns `false` without mutating when
    /// the alias is already bound.
    pub fn add_alias(&mut self, alias: &str, option_name: &str) -> bool {
        if self.aliases.contains_key(alias) {
            return false;
        }
        self.aliases
            .insert(alias.to_string(), option_name.to_string());
        true
    }

    /// Removes `alias`; returns `false` when it was not bound.
    pub fn remove_alias(&mut self, alias: &str) -> bool {
        self.aliases.remove(alias).is_some()
    }

    /// The option name bound to `alias`, if any.
    pub fn option_name(&self, alias: &str) -> Option<&str> {
        self.aliases.get(alias).map(String::as_str)
    }

    /// Whether `alias` is bound.
    pub fn contains(&self, alias: &str) -> bool {
        self.aliases.contains_key(alias)
    }
}

impl<const N: usize> From<[(&str, &str); N]> for AliasTable {
    fn from(entries: [(&str, &str); N]) -> Self {
        Self {
            aliases: entries
                .into_iter()
                .map(|(alias, name)| (alias.to_string(), name.to_string()))
                .collect(),
        }
    }
}
