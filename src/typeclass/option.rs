//! `Functor` and `Monad` instances for [`Option`].
//!
//! `Option` is the short-circuiting monad: the first `None` aborts the rest
//! of a `bind` chain. It is the target of interpreters that either produce
//! exactly one result or fail.

use super::functor::Functor;
use super::higher::TypeConstructor;
use super::monad::Monad;

/// Marker for the `Option` type constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {}

impl TypeConstructor for OptionKind {
    type Applied<A> = Option<A>;
}

impl Functor for OptionKind {
    #[inline]
    fn fmap<A, B, F>(fa: Option<A>, function: F) -> Option<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + Clone + 'static,
    {
        fa.map(function)
    }
}

impl Monad for OptionKind {
    #[inline]
    fn pure<A: 'static>(value: A) -> Option<A> {
        Some(value)
    }

    #[inline]
    fn bind<A, B, F>(ma: Option<A>, function: F) -> Option<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> Option<B> + Clone + 'static,
    {
        ma.and_then(function)
    }
}
