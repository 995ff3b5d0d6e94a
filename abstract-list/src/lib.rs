//! # Abstract List
//!
//! map, filter and reduce seen as abstractions over recursive list traversal.
//!
//! Hand-written traversals over a cons list all share one shape: a base case
//! for the empty list and a recursive case that does something with the head
//! and recurses on the tail. This crate pulls that shape out into three
//! combinators and shows the hand-written versions collapsing into them:
//!
//! - [`combinators`]: `map`, `filter`, `reduce` (right fold) and their fallible forms
//! - [`derived`]: `sum`, `product`, `describe`, `equals` and friends built on `reduce`
//! - [`worked_examples`]: hand-written traversals checked against the combinators
//!
//! ## Example
//!
//! ```
//! use abstract_list::combinators::{filter, map, reduce};
//! use abstract_list_common::list::from_sequence;
//!
//! let list = from_sequence([1, 2, 3]);
//!
//! assert_eq!(map(&list, |n| n + 1), from_sequence([2, 3, 4]));
//! assert_eq!(filter(&list, |n| n % 2 == 1), from_sequence([1, 3]));
//! assert_eq!(reduce(&list, 0, |n, acc| n + acc), 6);
//! ```

pub mod combinators;
pub mod derived;
pub mod worked_examples;

pub use abstract_list_common::{List, ListError};
