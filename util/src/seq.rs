//! Bounded slicing, delimiter splitting, and joining.
//!
//! The slice operations use an inclusive-range selection rule keyed on how
//! the two indices compare, rather than the half-open convention: see
//! [`slice`] for the exact cases. Both indices must land inside the sequence
//! or the call fails with [`RangeError`].

use thiserror::Error;

/// Errors from the bounded sequence operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    /// One of the requested indices lies outside the sequence.
    #[error("slice index out of range: beg={beg}, end={end}, len={len}")]
    OutOfRange { beg: usize, end: usize, len: usize },
}

/// Selects a sub-sequence of `items` using the inclusive-range rule.
///
/// Both `beg` and `end` must be valid indices (`< items.len()`). The
/// selection depends on how they compare:
///
/// - `beg < end` — elements `beg..=end`
/// - `beg > end` — elements `beg..` (to the end of the sequence)
/// - `beg == end` — elements `..=end` (from the start of the sequence)
///
/// # Examples
///
/// ```
/// use typed_argv_util::slice;
///
/// let v: Vec<char> = "abcdefg".chars().collect();
/// assert_eq!(slice(&v, 2, 3).unwrap(), vec!['c', 'd']);
/// assert_eq!(slice(&v, 3, 0).unwrap(), vec!['d', 'e', 'f', 'g']);
/// assert_eq!(slice(&v, 4, 4).unwrap(), vec!['a', 'b', 'c', 'd', 'e']);
/// assert!(slice(&v, 0, 7).is_err());
/// ```
pub fn slice<T: Clone>(items: &[T], beg: usize, end: usize) -> Result<Vec<T>, RangeError> {
    if beg >= items.len() || end >= items.len() {
        return Err(RangeError::OutOfRange {
            beg,
            end,
            len: items.len(),
        });
    }
    let selected = if beg > end {
        &items[beg..]
    } else if beg < end {
        &items[beg..=end]
    } else {
        &items[..=end]
    };
    Ok(selected.to_vec())
}

/// [`slice`] over the character sequence of a string.
///
/// # Examples
///
/// ```
/// use typed_argv_util::slice_str;
///
/// assert_eq!(slice_str("abcdefg", 2, 3).unwrap(), "cd");
/// assert_eq!(slice_str("abcdefg", 6, 0).unwrap(), "g");
/// ```
pub fn slice_str(s: &str, beg: usize, end: usize) -> Result<String, RangeError> {
    let chars: Vec<char> = s.chars().collect();
    Ok(slice(&chars, beg, end)?.into_iter().collect())
}

/// Splits `s` on `delim`, keeping empty pieces.
///
/// Every occurrence of the delimiter produces a boundary, so leading,
/// trailing, and adjacent delimiters yield empty strings in the output. An
/// empty delimiter splits into one piece per character.
///
/// # Examples
///
/// ```
/// use typed_argv_util::split;
///
/// assert_eq!(split(",a,,b,", ","), vec!["", "a", "", "b", ""]);
/// assert_eq!(split("", " "), vec![""]);
/// assert_eq!(split("abc", ""), vec!["a", "b", "c"]);
/// ```
pub fn split(s: &str, delim: &str) -> Vec<String> {
    if delim.is_empty() {
        return s.chars().map(String::from).collect();
    }
    s.split(delim).map(String::from).collect()
}

/// Joins `input` into one string, inserting `glue` between elements.
///
/// # Examples
///
/// ```
/// use typed_argv_util::append_all;
///
/// let parts = vec!["hello,".to_string(), "world!".to_string()];
/// assert_eq!(append_all(&parts, ""), "hello,world!");
/// assert_eq!(append_all(&[], "-"), "");
/// ```
pub fn append_all(input: &[String], glue: &str) -> String {
    input.join(glue)
}
