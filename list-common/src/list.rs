//! # Persistent Cons List
//!
//! An immutable singly-linked list built from two cases: the empty list and a
//! cell holding one element plus the rest of the list. Every other list
//! operation in this workspace is written against the small API below.
//!
//! ## API
//!
//! | Operation        | Meaning                                   |
//! |------------------|-------------------------------------------|
//! | [`is_empty`]     | `true` for [`List::Empty`]                |
//! | [`head`]         | element of the outermost cell (panics)    |
//! | [`tail`]         | remainder after the outermost cell (panics) |
//! | [`cons`]         | prepend one element, O(1)                 |
//! | [`from_sequence`]| build from any finite sequence            |
//!
//! ## Structural Sharing
//!
//! Tails are held behind [`Arc`], so two lists can point at the same tail:
//!
//! ```text
//! shared:          [2 -> 3 -> .empty]
//! a = cons(1, ..): 1 -> [shared]
//! b = cons(9, ..): 9 -> [shared]
//! ```
//!
//! No cell is ever mutated, which makes the sharing safe across threads.
//!
//! ## Example
//!
//! ```
//! use abstract_list_common::list::{List, cons, head, is_empty, tail};
//!
//! // (cons 1 (cons 2 (cons 3 '())))
//! let list = cons(1, cons(2, cons(3, List::Empty)));
//!
//! assert_eq!(head(&list), &1);
//! assert_eq!(head(tail(&list)), &2);
//! assert!(!is_empty(&list));
//! assert_eq!(list.to_string(), "cons(1, cons(2, cons(3, .empty)))");
//! ```

use std::fmt;
use std::sync::Arc;

use log::debug;

use crate::error::ListError;

/// Text rendered for [`List::Empty`] by [`describe`].
pub const EMPTY_MARKER: &str = ".empty";

/// An immutable singly-linked list.
///
/// A list is either [`List::Empty`] or a [`List::Cell`] carrying one element
/// and a shared reference to a strictly shorter list, so every list ends in
/// exactly one `Empty`.
#[derive(Debug, Clone)]
pub enum List<E> {
    /// The empty list.
    Empty,
    /// One element followed by the rest of the list.
    Cell(E, Arc<List<E>>),
}

impl<E> Default for List<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> List<E> {
    /// Creates the empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self::Empty
    }

    /// Prepends `element` to a tail that may already be shared with other lists.
    ///
    /// # Example
    ///
    /// ```
    /// use std::sync::Arc;
    /// use abstract_list_common::list::{List, from_sequence};
    ///
    /// let shared = Arc::new(from_sequence([2, 3]));
    /// let a = List::cons_shared(1, Arc::clone(&shared));
    /// let b = List::cons_shared(9, Arc::clone(&shared));
    ///
    /// assert!(Arc::ptr_eq(a.shared_tail().unwrap(), b.shared_tail().unwrap()));
    /// ```
    #[must_use]
    pub fn cons_shared(element: E, tail: Arc<List<E>>) -> Self {
        Self::Cell(element, tail)
    }

    /// Returns the shared handle to the tail, or `None` for the empty list.
    #[must_use]
    pub fn shared_tail(&self) -> Option<&Arc<List<E>>> {
        match self {
            Self::Empty => None,
            Self::Cell(_, tail) => Some(tail),
        }
    }

    /// Returns an iterator over the elements, head first.
    pub fn iter(&self) -> Iter<'_, E> {
        Iter { current: self }
    }
}

/// Borrowing iterator over a [`List`], created by [`List::iter`].
#[derive(Debug)]
pub struct Iter<'a, E> {
    current: &'a List<E>,
}

impl<'a, E> Iterator for Iter<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current;
        match current {
            List::Empty => None,
            List::Cell(element, rest) => {
                self.current = &**rest;
                Some(element)
            }
        }
    }
}

impl<'a, E> IntoIterator for &'a List<E> {
    type Item = &'a E;
    type IntoIter = Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E> FromIterator<E> for List<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        from_sequence(iter)
    }
}

// =============================================================================
// Primitive accessors
// =============================================================================

/// Checks if a list is empty.
#[inline]
#[must_use]
pub fn is_empty<E>(list: &List<E>) -> bool {
    matches!(list, List::Empty)
}

/// Returns the first element of a non-empty list.
///
/// # Panics
///
/// Panics with `"head on empty list"` when `list` is [`List::Empty`]. Use
/// [`try_head`] when emptiness is not already known.
#[must_use]
pub fn head<E>(list: &List<E>) -> &E {
    try_head(list).unwrap_or_else(|err| panic!("{err}"))
}

/// Returns everything after the first element of a non-empty list.
///
/// # Panics
///
/// Panics with `"tail on empty list"` when `list` is [`List::Empty`].
#[must_use]
pub fn tail<E>(list: &List<E>) -> &List<E> {
    try_tail(list).unwrap_or_else(|err| panic!("{err}"))
}

/// Returns the first element, or [`ListError::EmptyList`] for the empty list.
///
/// # Example
///
/// ```
/// use abstract_list_common::{ListError, list::{List, try_head}};
///
/// assert_eq!(try_head(&List::<i32>::Empty), Err(ListError::EmptyList { operation: "head" }));
/// ```
pub fn try_head<E>(list: &List<E>) -> Result<&E, ListError> {
    match list {
        List::Empty => Err(ListError::EmptyList { operation: "head" }),
        List::Cell(element, _) => Ok(element),
    }
}

/// Returns the tail, or [`ListError::EmptyList`] for the empty list.
pub fn try_tail<E>(list: &List<E>) -> Result<&List<E>, ListError> {
    match list {
        List::Empty => Err(ListError::EmptyList { operation: "tail" }),
        List::Cell(_, rest) => Ok(&**rest),
    }
}

// =============================================================================
// Construction
// =============================================================================

/// Builds a new list with `element` in front of `list`.
///
/// `list` is moved behind a fresh [`Arc`]; its cells are not copied.
#[inline]
#[must_use]
pub fn cons<E>(element: E, list: List<E>) -> List<E> {
    List::Cell(element, Arc::new(list))
}

/// [`cons`] with its arguments swapped, the step function of [`from_sequence`].
#[inline]
#[must_use]
pub fn flipped_cons<E>(list: List<E>, element: E) -> List<E> {
    cons(element, list)
}

/// Builds a list holding `elements` in their original order.
///
/// The list is assembled back to front, consing each element onto the
/// already-built remainder.
///
/// # Example
///
/// ```
/// use abstract_list_common::list::{List, cons, from_sequence};
///
/// assert_eq!(from_sequence([1, 2, 3]), cons(1, cons(2, cons(3, List::Empty))));
/// assert_eq!(from_sequence(Vec::<i32>::new()), List::Empty);
/// ```
pub fn from_sequence<E>(elements: impl IntoIterator<Item = E>) -> List<E> {
    let elements: Vec<E> = elements.into_iter().collect();
    debug!("building list from {} elements", elements.len());
    elements.into_iter().rfold(List::Empty, flipped_cons)
}

// =============================================================================
// Rendering and comparison
// =============================================================================

/// Renders a list as nested `cons(..)` calls ending in [`EMPTY_MARKER`].
///
/// # Example
///
/// ```
/// use abstract_list_common::list::{describe, from_sequence};
///
/// assert_eq!(describe(&from_sequence([1, 2])), "cons(1, cons(2, .empty))");
/// ```
pub fn describe<E: fmt::Display>(list: &List<E>) -> String {
    if is_empty(list) {
        EMPTY_MARKER.to_string()
    } else {
        format!("cons({}, {})", head(list), describe(tail(list)))
    }
}

/// Structural equality: same length, equal elements in the same order.
pub fn equals<E: PartialEq>(lhs: &List<E>, rhs: &List<E>) -> bool {
    match (lhs, rhs) {
        (List::Empty, List::Empty) => true,
        (List::Cell(lhs_head, lhs_tail), List::Cell(rhs_head, rhs_tail)) => {
            lhs_head == rhs_head && equals(lhs_tail, rhs_tail)
        }
        _ => false,
    }
}

impl<E: fmt::Display> fmt::Display for List<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&describe(self))
    }
}

impl<E: PartialEq> PartialEq for List<E> {
    fn eq(&self, other: &Self) -> bool {
        equals(self, other)
    }
}

impl<E: Eq> Eq for List<E> {}
