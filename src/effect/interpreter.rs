//! Interpreters giving meaning to Read/Write programs.
//!
//! Two interpretations of the same [`Program`] are provided, each a
//! [`NaturalTransformation`] folded with [`fold_free`]:
//!
//! - [`Interpreter`] into [`List`]: every `Read` branches once per value
//!   written earlier on the same path
//! - [`LatestInterpreter`] into `Option`: every `Read` sees the latest write,
//!   and fails when there is none
//!
//! Both keep their write history in the interpreter value itself. A fresh
//! interpreter is created by every [`run`] / [`run_latest`] call, and the fold
//! hands each branch its own copy of the history.

use crate::control::{List, ListKind, NaturalTransformation, fold_free};
use crate::typeclass::{Functor, OptionKind};

use super::prog::{Prog, ProgKind, Program};

// =============================================================================
// List interpretation
// =============================================================================

/// Interprets [`Prog`] into [`List`], replaying history on every read.
///
/// - `Read` resumes once per value written so far, in write order. With no
///   prior write it resumes zero times and the branch produces no result.
/// - `Write` records its value and resumes exactly once.
///
/// # Examples
///
/// ```rust
/// use freefold::control::ListKind;
/// use freefold::effect::{Interpreter, read_f, write_f};
/// use freefold::list;
///
/// let program = write_f(4) >> write_f(5) >> read_f();
/// assert_eq!(program.fold::<ListKind, _>(Interpreter::new()), list![4, 5]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Interpreter {
    written: List<i32>,
}

impl Interpreter {
    /// Creates an interpreter with an empty history.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            written: List::new(),
        }
    }

    /// The values written so far, oldest first.
    #[inline]
    #[must_use]
    pub const fn written(&self) -> &List<i32> {
        &self.written
    }
}

impl NaturalTransformation<ProgKind, ListKind> for Interpreter {
    fn transform<X: 'static>(&mut self, effect: Prog<X>) -> List<X> {
        match effect {
            Prog::Read { next } => {
                tracing::trace!(branches = self.written.len(), "read");
                ListKind::fmap::<i32, X, _>(self.written.clone(), move |value| next(value))
            }
            Prog::Write { value, next } => {
                self.written.push(value);
                tracing::trace!(value, history = self.written.len(), "write");
                List::singleton(next(()))
            }
        }
    }
}

/// Runs `program` and collects every result it can produce.
///
/// # Examples
///
/// ```rust
/// use freefold::effect::{read_f, run, write_f};
/// use freefold::list;
///
/// assert_eq!(run(read_f()), list![]);
/// assert_eq!(run(write_f(10) >> read_f()), list![10]);
/// ```
pub fn run<A: 'static>(program: Program<A>) -> List<A> {
    let span = tracing::debug_span!("run");
    let _entered = span.enter();

    let results = fold_free::<ProgKind, ListKind, A, _>(Interpreter::new(), program);
    tracing::debug!(results = results.len(), "program finished");
    results
}

// =============================================================================
// Option interpretation
// =============================================================================

/// Interprets [`Prog`] into `Option`, reading the most recent write.
///
/// A `Read` before any `Write` yields `None`, which aborts the whole run.
///
/// # Examples
///
/// ```rust
/// use freefold::typeclass::OptionKind;
/// use freefold::effect::{LatestInterpreter, read_f, write_f};
///
/// let program = write_f(1) >> write_f(2) >> read_f();
/// assert_eq!(program.fold::<OptionKind, _>(LatestInterpreter::new()), Some(2));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LatestInterpreter {
    written: List<i32>,
}

impl LatestInterpreter {
    /// Creates an interpreter with an empty history.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            written: List::new(),
        }
    }

    /// The most recent value written, if any.
    #[inline]
    #[must_use]
    pub fn latest(&self) -> Option<i32> {
        self.written.as_slice().last().copied()
    }
}

impl NaturalTransformation<ProgKind, OptionKind> for LatestInterpreter {
    fn transform<X: 'static>(&mut self, effect: Prog<X>) -> Option<X> {
        match effect {
            Prog::Read { next } => {
                let latest = self.latest();
                tracing::trace!(?latest, "read");
                latest.map(|value| next(value))
            }
            Prog::Write { value, next } => {
                self.written.push(value);
                tracing::trace!(value, history = self.written.len(), "write");
                Some(next(()))
            }
        }
    }
}

/// Runs `program` against the latest-write interpretation.
///
/// # Examples
///
/// ```rust
/// use freefold::effect::{read_f, run_latest, write_f};
///
/// assert_eq!(run_latest(read_f()), None);
/// assert_eq!(run_latest(write_f(10) >> read_f()), Some(10));
/// ```
pub fn run_latest<A: 'static>(program: Program<A>) -> Option<A> {
    let span = tracing::debug_span!("run_latest");
    let _entered = span.enter();

    let result = fold_free::<ProgKind, OptionKind, A, _>(LatestInterpreter::new(), program);
    tracing::debug!(finished = result.is_some(), "program finished");
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::Free;
    use crate::effect::{read_f, write_f};
    use crate::list;
    use rstest::rstest;

    fn compound() -> Program<i32> {
        (write_f(10) >> read_f())
            .bind(|x| (write_f(20) >> read_f()).bind(move |y| Program::pure(x + y)))
    }

    // =========================================================================
    // Interpreter
    // =========================================================================

    #[rstest]
    fn read_without_history_has_no_result() {
        assert_eq!(run(read_f()), list![]);
    }

    #[rstest]
    fn write_then_read_sees_the_write() {
        assert_eq!(run(write_f(10) >> read_f()), list![10]);
    }

    #[rstest]
    fn compound_program_branches_per_prior_write() {
        assert_eq!(run(compound()), list![20, 30]);
    }

    #[rstest]
    fn pure_program_has_one_result() {
        assert_eq!(run(Program::pure("done")), list!["done"]);
    }

    #[rstest]
    fn write_only_program_has_one_unit_result() {
        assert_eq!(run(write_f(1) >> write_f(2)), list![()]);
    }

    #[rstest]
    fn read_replays_history_in_write_order() {
        let program = write_f(3) >> write_f(1) >> write_f(2) >> read_f();
        assert_eq!(run(program), list![3, 1, 2]);
    }

    #[rstest]
    fn sibling_branches_do_not_share_writes() {
        let program =
            (write_f(1) >> write_f(2) >> read_f()).bind(|x| write_f(x * 100) >> read_f());
        assert_eq!(run(program), list![1, 2, 100, 1, 2, 200]);
    }

    #[rstest]
    fn transform_records_writes_and_resumes_once() {
        let mut interpreter = Interpreter::new();
        let resumed = interpreter.transform(Prog::write(9, |()| "next"));

        assert_eq!(resumed, list!["next"]);
        assert_eq!(interpreter.written(), &list![9]);
    }

    #[rstest]
    fn transform_of_read_does_not_change_history() {
        let mut interpreter = Interpreter::new();
        let _ = interpreter.transform(Prog::write(4, |()| ()));
        let resumed = interpreter.transform(Prog::read(|value| value + 1));

        assert_eq!(resumed, list![5]);
        assert_eq!(interpreter.written(), &list![4]);
    }

    #[rstest]
    fn each_run_starts_from_empty_history() {
        assert_eq!(run(write_f(5) >> read_f()), list![5]);
        assert_eq!(run(read_f()), list![]);
    }

    #[rstest]
    fn fold_of_return_ignores_interpreter_state() {
        let mut interpreter = Interpreter::new();
        let _ = interpreter.transform(Prog::write(1, |()| ()));
        let folded = fold_free::<ProgKind, ListKind, _, _>(interpreter, Free::pure(8));
        assert_eq!(folded, list![8]);
    }

    // =========================================================================
    // LatestInterpreter
    // =========================================================================

    #[rstest]
    #[case(vec![], None)]
    #[case(vec![10], Some(10))]
    #[case(vec![1, 2, 3], Some(3))]
    fn latest_read_sees_last_write(#[case] writes: Vec<i32>, #[case] expected: Option<i32>) {
        let program = writes
            .into_iter()
            .fold(Program::pure(()), |program, value| program >> write_f(value))
            >> read_f();
        assert_eq!(run_latest(program), expected);
    }

    #[rstest]
    fn latest_compound_program_sums_latest_reads() {
        assert_eq!(run_latest(compound()), Some(30));
    }

    #[rstest]
    fn latest_failure_aborts_remaining_program() {
        let program = read_f().bind(|x| write_f(x) >> read_f());
        assert_eq!(run_latest(program), None);
    }

    #[rstest]
    fn latest_tracks_most_recent_write() {
        let mut interpreter = LatestInterpreter::new();
        assert_eq!(interpreter.latest(), None);

        let _ = interpreter.transform(Prog::write(6, |()| ()));
        let _ = interpreter.transform(Prog::write(7, |()| ()));
        assert_eq!(interpreter.latest(), Some(7));
    }
}
