//! Monad type class - sequencing computations within a context.
//!
//! This module provides the `Monad` trait, which extends [`Functor`] with
//! the ability to lift a plain value (`pure`) and to sequence computations
//! where each step can depend on the result of the previous step (`bind`).
//!
//! # Laws
//!
//! All `Monad` implementations must satisfy these laws:
//!
//! ## Left Identity Law
//!
//! ```text
//! M::bind(M::pure(a), f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! M::bind(m, M::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! M::bind(M::bind(m, f), g) == M::bind(m, |x| M::bind(f(x), g))
//! ```
//!
//! # Capability Checking
//!
//! A constructor with only a `Functor` instance cannot be sequenced:
//!
//! ```compile_fail
//! use freefold::effect::{Prog, ProgKind};
//! use freefold::typeclass::pure;
//!
//! let _: Prog<i32> = pure::<ProgKind, _>(1);
//! ```
//!
//! # Examples
//!
//! ```rust
//! use freefold::control::ListKind;
//! use freefold::list;
//! use freefold::typeclass::{bind, pure};
//!
//! let squares = bind::<ListKind, _, _>(list![1, 2, 3], |x: i32| {
//!     bind::<ListKind, _, _>(pure::<ListKind, _>(x * x), move |y| list![x, y])
//! });
//! assert_eq!(squares, list![1, 1, 2, 4, 3, 9]);
//! ```

use super::functor::Functor;

/// A type class for type constructors that support sequencing.
///
/// `Monad` requires [`Functor`]; a marker without a `Functor` instance can
/// never be a `Monad`.
///
/// # Examples
///
/// ```rust
/// use freefold::control::{List, ListKind};
/// use freefold::typeclass::Monad;
///
/// let pairs = ListKind::bind(List::from(vec![1, 2]), |n: i32| List::from(vec![n, n * 10]));
/// assert_eq!(pairs, List::from(vec![1, 10, 2, 20]));
/// ```
pub trait Monad: Functor {
    /// Lifts a value into the monad with no other effect.
    ///
    /// In Haskell, this is `pure` / `return`.
    fn pure<A>(value: A) -> Self::Applied<A>
    where
        A: 'static;

    /// Feeds every result of `ma` to `function` and combines the continuations.
    ///
    /// In Haskell, this is `>>=` (bind).
    fn bind<A, B, F>(ma: Self::Applied<A>, function: F) -> Self::Applied<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> Self::Applied<B> + Clone + 'static;

    /// Sequences two computations, discarding the results of the first.
    ///
    /// In Haskell, this is the `>>` operator.
    #[inline]
    fn then<A, B>(ma: Self::Applied<A>, next: Self::Applied<B>) -> Self::Applied<B>
    where
        A: 'static,
        B: 'static,
        Self::Applied<B>: Clone,
    {
        Self::bind::<A, B, _>(ma, move |_| next.clone())
    }
}

/// Lifts `value` into the monad `M`.
#[inline]
pub fn pure<M, A>(value: A) -> M::Applied<A>
where
    M: Monad,
    A: 'static,
{
    M::pure::<A>(value)
}

/// Sequences `ma` into `function` using the `Monad` instance of `M`.
#[inline]
pub fn bind<M, A, B>(
    ma: M::Applied<A>,
    function: impl Fn(A) -> M::Applied<B> + Clone + 'static,
) -> M::Applied<B>
where
    M: Monad,
    A: 'static,
    B: 'static,
{
    M::bind::<A, B, _>(ma, function)
}

/// Runs `ma`, discards its results and continues with `next`.
#[inline]
pub fn then<M, A, B>(ma: M::Applied<A>, next: M::Applied<B>) -> M::Applied<B>
where
    M: Monad,
    A: 'static,
    B: 'static,
    M::Applied<B>: Clone,
{
    M::then::<A, B>(ma, next)
}
