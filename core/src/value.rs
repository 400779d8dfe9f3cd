//! The typed container for resolved option values.

use serde::{Deserialize, Serialize};

use crate::schema::OptionKind;

/// Value resolved for a named option.
///
/// Exactly one kind is active at a time and the set of kinds is closed.
/// Construction goes through `From` impls covering the accepted source
/// types, so an unsupported source type is a compile error rather than a
/// runtime failure. Narrower sources widen on entry: `i32` → [`Signed`],
/// `u32` → [`Unsigned`], `f32` → [`Real`].
///
/// Values are cheap to clone, never mutated after construction, and every
/// accessor is total: `get_x(default)` returns the payload when the active
/// kind is `x` and the default otherwise.
///
/// # Examples
///
/// ```
/// use typed_argv_core::TypedValue;
///
/// let v = TypedValue::from(4321u64);
/// assert!(v.is_unsigned());
/// assert_eq!(v.get_unsigned(0), 4321);
/// assert_eq!(v.get_signed(-1), -1); // wrong kind, default wins
/// assert_eq!(v.get_string(""), "4321"); // text is synthesized
/// ```
///
/// [`Signed`]: TypedValue::Signed
/// [`Unsigned`]: TypedValue::Unsigned
/// [`Real`]: TypedValue::Real
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum TypedValue {
    /// No value; also the [`Default`].
    #[default]
    Null,
    /// Text value.
    Text(String),
    /// Signed 64-bit integer.
    Signed(i64),
    /// Unsigned 64-bit integer.
    Unsigned(u64),
    /// Floating-point number.
    Real(f64),
    /// Boolean.
    Boolean(bool),
}

impl From<&str> for TypedValue {
    fn from(v: &str) -> Self {
        TypedValue::Text(v.to_string())
    }
}

impl From<String> for TypedValue {
    fn from(v: String) -> Self {
        TypedValue::Text(v)
    }
}

impl From<bool> for TypedValue {
    fn from(v: bool) -> Self {
        TypedValue::Boolean(v)
    }
}

impl From<i32> for TypedValue {
    fn from(v: i32) -> Self {
        TypedValue::Signed(i64::from(v))
    }
}

impl From<i64> for TypedValue {
    fn from(v: i64) -> Self {
        TypedValue::Signed(v)
    }
}

impl From<u32> for TypedValue {
    fn from(v: u32) -> Self {
        TypedValue::Unsigned(u64::from(v))
    }
}

impl From<u64> for TypedValue {
    fn from(v: u64) -> Self {
        TypedValue::Unsigned(v)
    }
}

impl From<f32> for TypedValue {
    fn from(v: f32) -> Self {
        TypedValue::Real(f64::from(v))
    }
}

impl From<f64> for TypedValue {
    fn from(v: f64) -> Self {
        TypedValue::Real(v)
    }
}

impl TypedValue {
    /// Returns the held value as a string.
    ///
    /// Non-text kinds are rendered: booleans as `"true"`/`"false"`, numeric
    /// kinds in standard decimal notation. Only [`Null`](TypedValue::Null)
    /// falls back to `default`.
    ///
    /// # Examples
    ///
    /// ```
    /// use typed_argv_core::TypedValue;
    ///
    /// assert_eq!(TypedValue::from("test").get_string(""), "test");
    /// assert_eq!(TypedValue::from(true).get_string(""), "true");
    /// assert_eq!(TypedValue::Null.get_string("missing"), "missing");
    /// assert_eq!(TypedValue::from(i64::MAX).get_string(""), "9223372036854775807");
    /// assert_eq!(TypedValue::from(u64::MAX).get_string(""), "18446744073709551615");
    /// ```
    pub fn get_string(&self, default: &str) -> String {
        match self {
            TypedValue::Null => default.to_string(),
            TypedValue::Text(v) => v.clone(),
            TypedValue::Signed(v) => v.to_string(),
            TypedValue::Unsigned(v) => v.to_string(),
            TypedValue::Real(v) => v.to_string(),
            TypedValue::Boolean(v) => v.to_string(),
        }
    }

    /// Returns the held signed integer, or `default` for any other kind.
    pub fn get_signed(&self, default: i64) -> i64 {
        match self {
            TypedValue::Signed(v) => *v,
            _ => default,
        }
    }

    /// Returns the held unsigned integer, or `default` for any other kind.
    pub fn get_unsigned(&self, default: u64) -> u64 {
        match self {
            TypedValue::Unsigned(v) => *v,
            _ => default,
        }
    }

    /// Returns the held floating-point number, or `default` for any other
    /// kind.
    pub fn get_real(&self, default: f64) -> f64 {
        match self {
            TypedValue::Real(v) => *v,
            _ => default,
        }
    }

    /// Returns the held boolean, or `default` for any other kind.
    pub fn get_boolean(&self, default: bool) -> bool {
        match self {
            TypedValue::Boolean(v) => *v,
            _ => default,
        }
    }

    /// Whether no value is held.
    pub fn is_null(&self) -> bool {
        matches!(self, TypedValue::Null)
    }

    /// Whether the held value is text.
    pub fn is_text(&self) -> bool {
        matches!(self, TypedValue::Text(_))
    }

    /// Whether the held value is a signed integer.
    pub fn is_signed(&self) -> bool {
        matches!(self, TypedValue::Signed(_))
    }

    /// Whether the held value is an unsigned integer.
    pub fn is_unsigned(&self) -> bool {
        matches!(self, TypedValue::Unsigned(_))
    }

    /// Whether the held value is a floating-point number.
    pub fn is_real(&self) -> bool {
        matches!(self, TypedValue::Real(_))
    }

    /// Whether the held value is a boolean.
    pub fn is_boolean(&self) -> bool {
        matches!(self, TypedValue::Boolean(_))
    }

    /// The [`OptionKind`] corresponding to the active kind.
    ///
    /// [`Null`](TypedValue::Null) reports [`OptionKind::Nullity`].
    pub fn kind(&self) -> OptionKind {
        match self {
            TypedValue::Null => OptionKind::Nullity,
            TypedValue::Text(_) => OptionKind::String,
            TypedValue::Signed(_) => OptionKind::Signed,
            TypedValue::Unsigned(_) => OptionKind::Unsigned,
            TypedValue::Real(_) => OptionKind::Real,
            TypedValue::Boolean(_) => OptionKind::Boolean,
        }
    }
}
