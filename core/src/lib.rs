//! Schema-typed command-line argument classification.
//!
//! This crate sorts a flat token sequence (the arguments following a program
//! name) into positional arguments, typed named options, boolean flags, and
//! alias shorthands, while capturing malformed input into diagnostic buckets
//! instead of failing:
//!
//! - [`TypedValue`] — the closed tagged union holding a resolved option
//!   value (null, text, signed, unsigned, real, boolean).
//! - [`OptionKind`] / [`OptionSchema`] — the declared value kind per option
//!   name.
//! - [`AliasTable`] — single-dash shorthands resolving to option names.
//! - [`ArgumentParser`] — the single-pass classifier itself.
//!
//! Options take the form `--name value`; a `--name` declared
//! [`OptionKind::Boolean`] is a flag whose presence alone sets it true, and
//! `-x value` routes through the alias table. Anything else is a positional
//! argument. Constructing the parser without a schema selects an untyped
//! legacy mode in which every option value is stored as text.
//!
//! # Example
//!
//! ```
//! use typed_argv_core::{AliasTable, ArgumentParser, OptionKind, OptionSchema, TypedValue};
//!
//! let schema = OptionSchema::from([
//!     ("length", OptionKind::Unsigned),
//!     ("flag", OptionKind::Boolean),
//!     ("name", OptionKind::String),
//! ]);
//! let aliases = AliasTable::from([("l", "length")]);
//!
//! let mut parser = ArgumentParser::with_schema_and_aliases(schema, aliases);
//! parser.parse(["hello", "--name", "echo", "--flag", "helpers", "-l", "100"])?;
//!
//! assert_eq!(parser.args(), ["hello", "helpers"]);
//! assert_eq!(parser.option("name", TypedValue::Null).get_string(""), "echo");
//! assert!(parser.option("flag", TypedValue::Null).get_boolean(false));
//! assert_eq!(parser.option("length", TypedValue::Null).get_unsigned(0), 100);
//! # Ok::<(), typed_argv_core::ParseError>(())
//! ```
//!
//! Malformed input — an option name the schema does not know, a value that
//! fails its declared kind, an alias with no binding — lands in
//! [`invalid_options`](ArgumentParser::invalid_options),
//! [`invalid_option_types`](ArgumentParser::invalid_option_types), and
//! [`invalid_alias`](ArgumentParser::invalid_alias) for the caller to
//! report. `parse` itself only fails on an internal contract violation.

mod error;
mod parser;
mod schema;
mod value;

pub use error::{ParseError, Result};
pub use parser::ArgumentParser;
pub use schema::{AliasTable, OptionKind, OptionSchema};
pub use value::TypedValue;
