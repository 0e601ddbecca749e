#![cfg(feature = "effect")]
//! Property-based tests for Monad laws.
//!
//! This module verifies that the Monad instances satisfy the required laws:
//!
//! - **Left Identity**: `pure(a).bind(f) == f(a)`
//! - **Right Identity**: `m.bind(pure) == m`
//! - **Associativity**: `m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))`
//!
//! `Program` values are compared through both interpreters.

use freefold::control::{List, ListKind};
use freefold::effect::{Program, read_f, run, run_latest, write_f};
use freefold::typeclass::{Monad, OptionKind, bind, pure};
use proptest::prelude::*;

fn write_all_then_read(writes: Vec<i32>) -> Program<i32> {
    writes
        .into_iter()
        .fold(Program::pure(()), |program, value| program >> write_f(value))
        >> read_f()
}

/// Writes a value derived from `x`, then reads; branches on the List side.
fn echo_shifted(x: i32) -> Program<i32> {
    write_f(x.wrapping_add(1)) >> read_f()
}

fn echo_doubled(x: i32) -> Program<i32> {
    write_f(x.wrapping_mul(2)) >> read_f().fmap(move |y| y.wrapping_sub(x))
}

fn spread(x: i32) -> List<i32> {
    List::from(vec![x, x.wrapping_add(1)])
}

fn keep_even(x: i32) -> List<i32> {
    if x % 2 == 0 { List::singleton(x / 2) } else { List::new() }
}

// =============================================================================
// List<A> Property Tests
// =============================================================================

proptest! {
    /// Left Identity Law for List<i32>
    #[test]
    fn prop_list_left_identity_law(value in any::<i32>()) {
        prop_assert_eq!(bind::<ListKind, _, _>(pure::<ListKind, _>(value), spread), spread(value));
    }

    /// Right Identity Law for List<i32>
    #[test]
    fn prop_list_right_identity_law(values in prop::collection::vec(any::<i32>(), 0..50)) {
        let list = List::from(values);
        prop_assert_eq!(list.clone().bind(ListKind::pure), list);
    }

    /// Associativity Law for List<i32>
    #[test]
    fn prop_list_associativity_law(values in prop::collection::vec(any::<i32>(), 0..30)) {
        let list = List::from(values);

        let left = list.clone().bind(spread).bind(keep_even);
        let right = list.bind(|x| spread(x).bind(keep_even));

        prop_assert_eq!(left, right);
    }

    /// Bind concatenates continuation results in input order
    #[test]
    fn prop_list_bind_preserves_order(values in prop::collection::vec(any::<i32>(), 0..30)) {
        let bound = List::from(values.clone()).bind(spread);
        let expected: Vec<i32> = values.iter().flat_map(|&x| spread(x)).collect();

        prop_assert_eq!(bound.into_vec(), expected);
    }

    /// Pure produces exactly one element
    #[test]
    fn prop_list_pure_has_length_one(value in any::<i64>()) {
        prop_assert_eq!(ListKind::pure(value).len(), 1);
    }
}

// =============================================================================
// Option<A> Property Tests
// =============================================================================

proptest! {
    /// Associativity Law for Option<i32>
    #[test]
    fn prop_option_associativity_law(value in any::<Option<i32>>()) {
        let half = |n: i32| (n % 2 == 0).then_some(n / 2);
        let shift = |n: i32| n.checked_add(3);

        let left = bind::<OptionKind, _, _>(bind::<OptionKind, _, _>(value, half), shift);
        let right = value.and_then(|x| half(x).and_then(shift));

        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Program<A> Property Tests
// =============================================================================

proptest! {
    /// Left Identity Law for Program<i32>
    #[test]
    fn prop_program_left_identity_law(value in any::<i32>()) {
        let left = Program::pure(value).bind(echo_shifted);
        let right = echo_shifted(value);

        prop_assert_eq!(run(left.clone()), run(right.clone()));
        prop_assert_eq!(run_latest(left), run_latest(right));
    }

    /// Right Identity Law for Program<i32>
    #[test]
    fn prop_program_right_identity_law(writes in prop::collection::vec(any::<i32>(), 0..6)) {
        let program = write_all_then_read(writes);
        let bound = program.clone().bind(Program::pure);

        prop_assert_eq!(run(bound.clone()), run(program.clone()));
        prop_assert_eq!(run_latest(bound), run_latest(program));
    }

    /// Associativity Law for Program<i32>
    #[test]
    fn prop_program_associativity_law(writes in prop::collection::vec(any::<i32>(), 0..5)) {
        let program = write_all_then_read(writes);

        let left = program.clone().bind(echo_shifted).bind(echo_doubled);
        let right = program.bind(|x| echo_shifted(x).bind(echo_doubled));

        prop_assert_eq!(run(left.clone()), run(right.clone()));
        prop_assert_eq!(run_latest(left), run_latest(right));
    }
}
