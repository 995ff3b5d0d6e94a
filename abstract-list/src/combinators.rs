//! map, filter and reduce over [`List`]
//!
//! Each combinator is the recursion pattern of a family of hand-written
//! traversals with the varying part pulled out into a callback:
//!
//! - `map` keeps the shape and rewrites every element
//! - `filter` keeps or drops each element
//! - `reduce` replaces `cons` with `combine` and `Empty` with `base`
//!
//! All three walk the list structurally: the base case is [`List::Empty`] and
//! the recursive case works on the tail. An empty list never reaches a
//! callback. A panicking callback unwinds straight through the combinator;
//! the `try_` variants carry `Result`-returning callbacks and hand back the
//! callback's error unchanged.

use abstract_list_common::list::{List, cons, head, is_empty, tail};

// =============================================================================
// map
// =============================================================================

/// Applies `transform` to every element, keeping order and length.
///
/// # Example
///
/// ```
/// use abstract_list::combinators::map;
/// use abstract_list_common::list::from_sequence;
///
/// let incremented = map(&from_sequence([1, 2, 3]), |n| n + 1);
/// assert_eq!(incremented, from_sequence([2, 3, 4]));
/// ```
pub fn map<E, R, F>(list: &List<E>, transform: F) -> List<R>
where
    F: Fn(&E) -> R,
{
    fn go<E, R, F>(list: &List<E>, transform: &F) -> List<R>
    where
        F: Fn(&E) -> R,
    {
        if is_empty(list) {
            List::Empty
        } else {
            cons(transform(head(list)), go(tail(list), transform))
        }
    }
    go(list, &transform)
}

/// [`map`] with a fallible `transform`; the first error wins.
pub fn try_map<E, R, Err, F>(list: &List<E>, transform: F) -> Result<List<R>, Err>
where
    F: Fn(&E) -> Result<R, Err>,
{
    fn go<E, R, Err, F>(list: &List<E>, transform: &F) -> Result<List<R>, Err>
    where
        F: Fn(&E) -> Result<R, Err>,
    {
        if is_empty(list) {
            Ok(List::Empty)
        } else {
            let mapped = transform(head(list))?;
            Ok(cons(mapped, go(tail(list), transform)?))
        }
    }
    go(list, &transform)
}

// =============================================================================
// filter
// =============================================================================

/// Keeps the elements satisfying `predicate`, in their original order.
///
/// # Example
///
/// ```
/// use abstract_list::combinators::filter;
/// use abstract_list_common::list::from_sequence;
///
/// let odds = filter(&from_sequence([1, 2, 3, 4, 5]), |n| n % 2 == 1);
/// assert_eq!(odds, from_sequence([1, 3, 5]));
/// ```
pub fn filter<E, P>(list: &List<E>, predicate: P) -> List<E>
where
    E: Clone,
    P: Fn(&E) -> bool,
{
    fn go<E, P>(list: &List<E>, predicate: &P) -> List<E>
    where
        E: Clone,
        P: Fn(&E) -> bool,
    {
        if is_empty(list) {
            List::Empty
        } else if predicate(head(list)) {
            cons(head(list).clone(), go(tail(list), predicate))
        } else {
            go(tail(list), predicate)
        }
    }
    go(list, &predicate)
}

/// [`filter`] with a fallible `predicate`; the first error wins.
pub fn try_filter<E, Err, P>(list: &List<E>, predicate: P) -> Result<List<E>, Err>
where
    E: Clone,
    P: Fn(&E) -> Result<bool, Err>,
{
    fn go<E, Err, P>(list: &List<E>, predicate: &P) -> Result<List<E>, Err>
    where
        E: Clone,
        P: Fn(&E) -> Result<bool, Err>,
    {
        if is_empty(list) {
            Ok(List::Empty)
        } else if predicate(head(list))? {
            Ok(cons(head(list).clone(), go(tail(list), predicate)?))
        } else {
            go(tail(list), predicate)
        }
    }
    go(list, &predicate)
}

// =============================================================================
// reduce
// =============================================================================

/// Right fold: `combine(e1, combine(e2, combine(e3, base)))`.
///
/// `combine` first sees the last element together with `base`, then works
/// back towards the head.
///
/// # Example
///
/// ```
/// use abstract_list::combinators::reduce;
/// use abstract_list_common::list::from_sequence;
///
/// let list = from_sequence([1, 2, 3]);
/// assert_eq!(reduce(&list, 0, |x, acc| x + acc), 6);
///
/// // Right association shows with a non-commutative combine.
/// let nested = reduce(&list, "nil".to_string(), |x, acc| format!("({x} . {acc})"));
/// assert_eq!(nested, "(1 . (2 . (3 . nil)))");
/// ```
pub fn reduce<E, R, F>(list: &List<E>, base: R, combine: F) -> R
where
    F: Fn(&E, R) -> R,
{
    fn go<E, R, F>(list: &List<E>, base: R, combine: &F) -> R
    where
        F: Fn(&E, R) -> R,
    {
        if is_empty(list) {
            base
        } else {
            combine(head(list), go(tail(list), base, combine))
        }
    }
    go(list, base, &combine)
}

/// [`reduce`] with a fallible `combine`.
///
/// Evaluation starts at the end of the list, so the error returned is the one
/// raised closest to the tail.
pub fn try_reduce<E, R, Err, F>(list: &List<E>, base: R, combine: F) -> Result<R, Err>
where
    F: Fn(&E, R) -> Result<R, Err>,
{
    fn go<E, R, Err, F>(list: &List<E>, base: R, combine: &F) -> Result<R, Err>
    where
        F: Fn(&E, R) -> Result<R, Err>,
    {
        if is_empty(list) {
            Ok(base)
        } else {
            let rest = go(tail(list), base, combine)?;
            combine(head(list), rest)
        }
    }
    go(list, base, &combine)
}

// =============================================================================
// map and filter as reductions
// =============================================================================

/// [`map`] written as a [`reduce`] whose `combine` conses the transformed element.
pub fn map_with_reduce<E, R, F>(list: &List<E>, transform: F) -> List<R>
where
    F: Fn(&E) -> R,
{
    reduce(list, List::Empty, |element, mapped| cons(transform(element), mapped))
}

/// [`filter`] written as a [`reduce`] with a conditional cons.
pub fn filter_with_reduce<E, P>(list: &List<E>, predicate: P) -> List<E>
where
    E: Clone,
    P: Fn(&E) -> bool,
{
    reduce(list, List::Empty, |element, kept| {
        if predicate(element) {
            cons(element.clone(), kept)
        } else {
            kept
        }
    })
}
