//! Aggregation, rendering and comparison built from [`reduce`].
//!
//! `describe` and `equals` themselves live next to the list type (they back
//! its `Display` and `PartialEq`) and are re-exported here.

use std::fmt;

use abstract_list_common::list::{EMPTY_MARKER, List};
pub use abstract_list_common::list::{describe, equals};
use thiserror::Error;

use crate::combinators::{reduce, try_reduce};

/// Integer arithmetic left the range of `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    #[error("{operation} overflowed i64")]
    Overflow { operation: &'static str },
}

/// Sum of a list of integers: base `0`, combined with `+`.
///
/// # Example
///
/// ```
/// use abstract_list::derived::sum;
/// use abstract_list_common::list::from_sequence;
///
/// assert_eq!(sum(&from_sequence([1, 2, 3])), 6);
/// ```
pub fn sum(list: &List<i64>) -> i64 {
    reduce(list, 0, |x, acc| x + acc)
}

/// Product of a list of integers: base `1`, combined with `*`.
///
/// ```
/// use abstract_list::derived::product;
/// use abstract_list_common::list::{List, from_sequence};
///
/// assert_eq!(product(&from_sequence([1, 2, 3, 4])), 24);
/// assert_eq!(product(&List::Empty), 1);
/// ```
pub fn product(list: &List<i64>) -> i64 {
    reduce(list, 1, |x, acc| x * acc)
}

/// [`sum`] that reports overflow instead of wrapping or panicking.
///
/// ```
/// use abstract_list::derived::{ArithmeticError, checked_sum};
/// use abstract_list_common::list::from_sequence;
///
/// assert_eq!(checked_sum(&from_sequence([1, 2, 3])), Ok(6));
/// assert_eq!(
///     checked_sum(&from_sequence([i64::MAX, 1])),
///     Err(ArithmeticError::Overflow { operation: "sum" })
/// );
/// ```
pub fn checked_sum(list: &List<i64>) -> Result<i64, ArithmeticError> {
    try_reduce(list, 0, |x, acc: i64| {
        acc.checked_add(*x).ok_or(ArithmeticError::Overflow { operation: "sum" })
    })
}

/// [`product`] that reports overflow instead of wrapping or panicking.
pub fn checked_product(list: &List<i64>) -> Result<i64, ArithmeticError> {
    try_reduce(list, 1, |x, acc: i64| {
        acc.checked_mul(*x).ok_or(ArithmeticError::Overflow { operation: "product" })
    })
}

/// [`describe`] as a reduction: the empty marker is the base and every
/// element wraps the rendering of its tail.
pub fn describe_with_reduce<E: fmt::Display>(list: &List<E>) -> String {
    reduce(list, EMPTY_MARKER.to_string(), |x, rest| {
        format!("cons({x}, {rest})")
    })
}

/// Number of elements.
pub fn length<E>(list: &List<E>) -> usize {
    reduce(list, 0, |_, n| n + 1)
}

/// Copies the elements into a `Vec`, head first.
pub fn to_vec<E: Clone>(list: &List<E>) -> Vec<E> {
    list.iter().cloned().collect()
}
