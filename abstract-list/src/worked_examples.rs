//! Hand-written traversals next to their combinator versions.
//!
//! Every function here comes in two flavours: one that walks the list with
//! explicit structural recursion, and one that hands the same job to
//! [`map`], [`filter`] or [`reduce`]. [`run_self_checks`] runs both flavours
//! on the same input and records whether they agree.

use std::fmt;

use abstract_list_common::list::{List, cons, from_sequence, head, is_empty, tail};
use log::{info, warn};
use thiserror::Error;

use crate::combinators::{filter, filter_with_reduce, map, map_with_reduce, reduce, try_map};
use crate::derived::{
    ArithmeticError, checked_product, checked_sum, describe, describe_with_reduce, product, sum,
};

// =============================================================================
// Players
// =============================================================================

/// A named score; client payload for the examples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub score: i64,
}

impl Player {
    pub fn new(name: impl Into<String>, score: i64) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player(name: {}, score: {})", self.name, self.score)
    }
}

/// Andrew (22), Petro (10) and James (35).
pub fn sample_players() -> List<Player> {
    from_sequence([
        Player::new("Andrew", 22),
        Player::new("Petro", 10),
        Player::new("James", 35),
    ])
}

// =============================================================================
// Increment every element
// =============================================================================

pub fn add1(n: i64) -> i64 {
    n + 1
}

/// Structural recursion: `Empty` stays empty, otherwise increment the head
/// and recurse on the tail.
pub fn add1_to_each(list: &List<i64>) -> List<i64> {
    if is_empty(list) {
        List::Empty
    } else {
        cons(add1(*head(list)), add1_to_each(tail(list)))
    }
}

pub fn add1_to_each_with_map(list: &List<i64>) -> List<i64> {
    map(list, |n| add1(*n))
}

pub fn checked_add1(n: i64) -> Result<i64, ArithmeticError> {
    n.checked_add(1).ok_or(ArithmeticError::Overflow { operation: "add1" })
}

pub fn checked_add1_to_each(list: &List<i64>) -> Result<List<i64>, ArithmeticError> {
    try_map(list, |n| checked_add1(*n))
}

pub fn add1_score_to_player(player: &Player) -> Player {
    Player::new(player.name.clone(), add1(player.score))
}

pub fn add1_score_to_each_player(players: &List<Player>) -> List<Player> {
    if is_empty(players) {
        List::Empty
    } else {
        cons(
            add1_score_to_player(head(players)),
            add1_score_to_each_player(tail(players)),
        )
    }
}

pub fn add1_score_to_each_player_with_map(players: &List<Player>) -> List<Player> {
    map(players, add1_score_to_player)
}

// =============================================================================
// Select players above a score
// =============================================================================

/// Players scoring strictly more than `score`, in their original order.
pub fn extract_greater_than(players: &List<Player>, score: i64) -> List<Player> {
    if is_empty(players) {
        List::Empty
    } else if head(players).score > score {
        cons(
            head(players).clone(),
            extract_greater_than(tail(players), score),
        )
    } else {
        extract_greater_than(tail(players), score)
    }
}

pub fn extract_greater_than_with_filter(players: &List<Player>, score: i64) -> List<Player> {
    filter(players, |player| player.score > score)
}

// =============================================================================
// Aggregation
// =============================================================================

pub fn sum_recursive(list: &List<i64>) -> i64 {
    if is_empty(list) {
        0
    } else {
        head(list) + sum_recursive(tail(list))
    }
}

pub fn product_recursive(list: &List<i64>) -> i64 {
    if is_empty(list) {
        1
    } else {
        head(list) * product_recursive(tail(list))
    }
}

/// Renders the list as nested dotted pairs, `(1 . (2 . nil))`.
pub fn nested_pairs<E: fmt::Display>(list: &List<E>) -> String {
    if is_empty(list) {
        "nil".to_string()
    } else {
        format!("({} . {})", head(list), nested_pairs(tail(list)))
    }
}

pub fn nested_pairs_with_reduce<E: fmt::Display>(list: &List<E>) -> String {
    reduce(list, "nil".to_string(), |x, acc| format!("({x} . {acc})"))
}

// =============================================================================
// Self-checks
// =============================================================================

/// Result of running one hand-written traversal against its combinator version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub name: &'static str,
    pub expected: String,
    pub actual: String,
}

impl CheckOutcome {
    fn new(name: &'static str, expected: impl fmt::Display, actual: impl fmt::Display) -> Self {
        Self {
            name,
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    pub fn passed(&self) -> bool {
        self.expected == self.actual
    }
}

/// Why the worked examples could not be confirmed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    /// The inputs are out of range for the integer examples.
    #[error(transparent)]
    Overflow(#[from] ArithmeticError),
    /// A hand-written traversal and its combinator version disagreed.
    #[error("{name}: expected {expected}, got {actual}")]
    Mismatch {
        name: &'static str,
        expected: String,
        actual: String,
    },
}

/// Runs every equivalence on the given inputs, in a fixed order.
///
/// `expected` is always the hand-written (or direct) result and `actual` the
/// combinator-based one, both rendered with [`describe`] where the result is
/// a list.
///
/// Fails with [`CheckError::Overflow`] before comparing anything if the
/// integer examples would leave the range of `i64`.
pub fn run_self_checks(
    numbers: &List<i64>,
    players: &List<Player>,
    threshold: i64,
) -> Result<Vec<CheckOutcome>, CheckError> {
    checked_add1_to_each(numbers)?;
    try_map(players, |player| checked_add1(player.score))?;
    checked_sum(numbers)?;
    checked_product(numbers)?;

    let outcomes = vec![
        CheckOutcome::new(
            "add1_to_each",
            add1_to_each(numbers),
            add1_to_each_with_map(numbers),
        ),
        CheckOutcome::new(
            "add1_score_to_each_player",
            add1_score_to_each_player(players),
            add1_score_to_each_player_with_map(players),
        ),
        CheckOutcome::new(
            "extract_greater_than",
            extract_greater_than(players, threshold),
            extract_greater_than_with_filter(players, threshold),
        ),
        CheckOutcome::new("sum", sum_recursive(numbers), sum(numbers)),
        CheckOutcome::new("product", product_recursive(numbers), product(numbers)),
        CheckOutcome::new(
            "fold_right",
            nested_pairs(numbers),
            nested_pairs_with_reduce(numbers),
        ),
        CheckOutcome::new("describe", describe(numbers), describe_with_reduce(numbers)),
        CheckOutcome::new(
            "map_with_reduce",
            map(numbers, |n| add1(*n)),
            map_with_reduce(numbers, |n| add1(*n)),
        ),
        CheckOutcome::new(
            "filter_with_reduce",
            filter(players, |p| p.score > threshold),
            filter_with_reduce(players, |p| p.score > threshold),
        ),
    ];

    for outcome in &outcomes {
        if outcome.passed() {
            info!("{}: {}", outcome.name, outcome.actual);
        } else {
            warn!(
                "{}: expected {}, got {}",
                outcome.name, outcome.expected, outcome.actual
            );
        }
    }
    Ok(outcomes)
}

/// Fails with the first outcome whose two sides disagree.
pub fn verify_all(outcomes: &[CheckOutcome]) -> Result<(), CheckError> {
    match outcomes.iter().find(|outcome| !outcome.passed()) {
        Some(failed) => Err(CheckError::Mismatch {
            name: failed.name,
            expected: failed.expected.clone(),
            actual: failed.actual.clone(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of_ints() -> List<i64> {
        cons(1, cons(2, cons(3, List::Empty)))
    }

    #[test]
    fn test_add1_to_each() {
        let expected = from_sequence([2, 3, 4]);
        assert_eq!(add1_to_each(&list_of_ints()), expected);
        assert_eq!(add1_to_each_with_map(&list_of_ints()), expected);
    }

    #[test]
    fn test_add1_score_to_each_player() {
        let players = sample_players();
        let expected = from_sequence([
            Player::new("Andrew", 23),
            Player::new("Petro", 11),
            Player::new("James", 36),
        ]);
        assert_eq!(add1_score_to_each_player(&players), expected);
        assert_eq!(add1_score_to_each_player_with_map(&players), expected);
    }

    #[test]
    fn test_extract_greater_than() {
        let players = sample_players();

        let above_20 = extract_greater_than(&players, 20);
        assert_eq!(map(&above_20, |p| p.score), from_sequence([22, 35]));

        for score in [0, 20, 50] {
            assert_eq!(
                extract_greater_than(&players, score),
                extract_greater_than_with_filter(&players, score)
            );
        }
        assert_eq!(extract_greater_than(&players, 0), players);
        assert_eq!(extract_greater_than(&players, 50), List::Empty);
    }

    #[test]
    fn test_product_and_sum() {
        assert_eq!(product_recursive(&list_of_ints()), 6);
        assert_eq!(product(&list_of_ints()), 6);
        assert_eq!(sum_recursive(&list_of_ints()), 6);
        assert_eq!(sum(&list_of_ints()), 6);
    }

    #[test]
    fn test_player_display() {
        assert_eq!(
            Player::new("Petro", 10).to_string(),
            "Player(name: Petro, score: 10)"
        );
        assert_eq!(
            describe(&from_sequence([Player::new("James", 35)])),
            "cons(Player(name: James, score: 35), .empty)"
        );
    }

    #[test]
    fn test_checked_add1_to_each() {
        assert_eq!(checked_add1_to_each(&list_of_ints()), Ok(from_sequence([2, 3, 4])));
        assert_eq!(
            checked_add1_to_each(&from_sequence([1, i64::MAX])),
            Err(ArithmeticError::Overflow { operation: "add1" })
        );
    }

    #[test]
    fn test_nested_pairs() {
        assert_eq!(nested_pairs(&list_of_ints()), "(1 . (2 . (3 . nil)))");
        assert_eq!(nested_pairs_with_reduce(&list_of_ints()), nested_pairs(&list_of_ints()));
        assert_eq!(nested_pairs_with_reduce(&List::<i64>::Empty), "nil");
    }

    #[test]
    fn test_run_self_checks() {
        let outcomes = run_self_checks(&list_of_ints(), &sample_players(), 20).unwrap();
        assert_eq!(outcomes.len(), 9);
        assert!(outcomes.iter().all(CheckOutcome::passed));
        assert_eq!(verify_all(&outcomes), Ok(()));

        let rendered = outcomes.iter().find(|o| o.name == "describe").unwrap();
        assert_eq!(rendered.actual, "cons(1, cons(2, cons(3, .empty)))");

        let folded = outcomes.iter().find(|o| o.name == "fold_right").unwrap();
        assert_eq!(folded.actual, "(1 . (2 . (3 . nil)))");
    }

    #[test]
    fn test_run_self_checks_rejects_overflowing_numbers() {
        let result = run_self_checks(&from_sequence([i64::MAX]), &sample_players(), 20);
        assert_eq!(
            result,
            Err(CheckError::Overflow(ArithmeticError::Overflow { operation: "add1" }))
        );

        let result = run_self_checks(&from_sequence([i64::MAX / 2, 3]), &sample_players(), 20);
        assert_eq!(result.unwrap_err().to_string(), "product overflowed i64");

        let near_max = from_sequence([i64::MAX - 1, i64::MAX - 1]);
        let result = run_self_checks(&near_max, &List::Empty, 0);
        assert_eq!(
            result,
            Err(CheckError::Overflow(ArithmeticError::Overflow { operation: "sum" }))
        );
    }

    #[test]
    fn test_run_self_checks_rejects_overflowing_scores() {
        let players = from_sequence([Player::new("Max", i64::MAX)]);
        let result = run_self_checks(&list_of_ints(), &players, 0);
        assert_eq!(
            result,
            Err(CheckError::Overflow(ArithmeticError::Overflow { operation: "add1" }))
        );
    }

    #[test]
    fn test_run_self_checks_on_empty_inputs() {
        let outcomes = run_self_checks(&List::Empty, &List::Empty, 0).unwrap();
        assert!(verify_all(&outcomes).is_ok());
        let sum = outcomes.iter().find(|o| o.name == "sum").unwrap();
        assert_eq!(sum.actual, "0");
    }

    #[test]
    fn test_verify_all_reports_first_mismatch() {
        let outcomes = vec![
            CheckOutcome::new("ok", 1, 1),
            CheckOutcome::new("broken", 1, 2),
            CheckOutcome::new("also_broken", 3, 4),
        ];
        let err = verify_all(&outcomes).unwrap_err();
        assert_eq!(
            err,
            CheckError::Mismatch {
                name: "broken",
                expected: "1".to_string(),
                actual: "2".to_string(),
            }
        );
        assert_eq!(err.to_string(), "broken: expected 1, got 2");
    }
}
