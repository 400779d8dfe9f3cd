//! Sequence, string, and literal-format utilities for argument parsing.
//!
//! This crate bundles the generic operations the `typed-argv-core` parser
//! depends on:
//!
//! - [`slice`] / [`slice_str`] — bounded sub-sequence selection with an
//!   inclusive-range rule.
//! - [`split`] / [`append_all`] — delimiter splitting that preserves empty
//!   pieces, and its inverse join.
//! - [`validate`] — pure predicates deciding whether a string literal is
//!   lexically valid as a signed/unsigned integer, floating-point number, or
//!   boolean.
//!
//! Everything here is stateless and synchronous; the validators are safe to
//! call from any thread (their regex constants are initialized lazily, once).
//!
//! # Example
//!
//! ```
//! use typed_argv_util::{split, validate};
//!
//! let tokens = split("run --count 42", " ");
//! assert_eq!(tokens, vec!["run", "--count", "42"]);
//! assert!(validate::is_valid_unsigned(&tokens[2]));
//! ```

mod seq;
pub mod validate;

pub use seq::{RangeError, append_all, slice, slice_str, split};
