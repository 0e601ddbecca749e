//! Functor type class - mapping over the payload of a type constructor.
//!
//! This module provides the `Functor` trait, implemented for a
//! [`TypeConstructor`] marker whenever a structure-preserving map exists for
//! the constructor it stands for.
//!
//! # Laws
//!
//! All `Functor` implementations must satisfy these laws:
//!
//! ## Identity Law
//!
//! Mapping the identity function returns an equivalent value:
//!
//! ```text
//! K::fmap(fa, |x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! Mapping two functions in sequence is equivalent to mapping their composition:
//!
//! ```text
//! K::fmap(K::fmap(fa, f), g) == K::fmap(fa, |x| g(f(x)))
//! ```
//!
//! # Capability Checking
//!
//! The capability is a trait bound, so mapping over a constructor without a
//! `Functor` instance is rejected by the compiler:
//!
//! ```compile_fail
//! use freefold::typeclass::{fmap, TypeConstructor};
//!
//! enum OpaqueKind {}
//!
//! impl TypeConstructor for OpaqueKind {
//!     type Applied<A> = Vec<A>;
//! }
//!
//! let _ = fmap::<OpaqueKind, _, _>(|x: i32| x + 1, vec![1, 2, 3]);
//! ```
//!
//! # Examples
//!
//! ```rust
//! use freefold::control::ListKind;
//! use freefold::list;
//! use freefold::typeclass::fmap;
//!
//! let lengths = fmap::<ListKind, _, _>(|s: &str| s.len(), list!["a", "bcd"]);
//! assert_eq!(lengths, list![1, 3]);
//! ```

use super::higher::TypeConstructor;

/// A type class for type constructors whose payload can be mapped over.
///
/// The mapping function is `Fn + Clone` rather than `FnOnce`: a constructor
/// may hold several payloads (a list), or hold its payload behind stored
/// continuations that are called more than once.
///
/// # Examples
///
/// ```rust
/// use freefold::control::{List, ListKind};
/// use freefold::typeclass::Functor;
///
/// let doubled = ListKind::fmap(List::from(vec![1, 2, 3]), |n: i32| n * 2);
/// assert_eq!(doubled, List::from(vec![2, 4, 6]));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies `function` to every payload of `fa`, keeping its shape.
    ///
    /// `fa` is consumed; no effect beyond those of `function` is introduced.
    fn fmap<A, B, F>(fa: Self::Applied<A>, function: F) -> Self::Applied<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + Clone + 'static;

    /// Replaces every payload of `fa` with `value`.
    #[inline]
    fn replace<A, B>(fa: Self::Applied<A>, value: B) -> Self::Applied<B>
    where
        A: 'static,
        B: Clone + 'static,
    {
        Self::fmap::<A, B, _>(fa, move |_| value.clone())
    }

    /// Discards every payload of `fa`, keeping only its shape.
    #[inline]
    fn void<A>(fa: Self::Applied<A>) -> Self::Applied<()>
    where
        A: 'static,
    {
        Self::replace::<A, ()>(fa, ())
    }
}

/// Maps `function` over `fa` using the `Functor` instance of `K`.
///
/// The marker cannot be inferred from `K::Applied<A>`, so it is named
/// explicitly: `fmap::<ListKind, _, _>(f, list)`.
#[inline]
pub fn fmap<K, A, B>(
    function: impl Fn(A) -> B + Clone + 'static,
    fa: K::Applied<A>,
) -> K::Applied<B>
where
    K: Functor,
    A: 'static,
    B: 'static,
{
    K::fmap::<A, B, _>(fa, function)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    /// Holds exactly one payload.
    #[derive(Debug, PartialEq, Eq)]
    struct Single<A>(A);

    enum SingleKind {}

    impl TypeConstructor for SingleKind {
        type Applied<A> = Single<A>;
    }

    impl Functor for SingleKind {
        fn fmap<A, B, F>(fa: Single<A>, function: F) -> Single<B>
        where
            A: 'static,
            B: 'static,
            F: Fn(A) -> B + Clone + 'static,
        {
            Single(function(fa.0))
        }
    }

    #[rstest]
    fn fmap_transforms_the_payload() {
        assert_eq!(SingleKind::fmap(Single(5), |n: i32| n.to_string()), Single("5".to_string()));
    }

    #[rstest]
    fn free_function_takes_function_first() {
        assert_eq!(fmap::<SingleKind, _, _>(|n: i32| n + 1, Single(1)), Single(2));
    }

    #[rstest]
    fn replace_substitutes_the_payload() {
        assert_eq!(SingleKind::replace(Single(5), "replaced"), Single("replaced"));
    }

    #[rstest]
    fn void_keeps_only_the_shape() {
        assert_eq!(SingleKind::void(Single(5)), Single(()));
    }

    #[rstest]
    #[case(0)]
    #[case(-7)]
    #[case(i32::MAX)]
    fn identity_law(#[case] value: i32) {
        assert_eq!(SingleKind::fmap(Single(value), |x| x), Single(value));
    }

    #[rstest]
    fn composition_law() {
        let function1 = |n: i32| n + 1;
        let function2 = |n: i32| n * 2;

        let left = SingleKind::fmap(SingleKind::fmap(Single(5), function1), function2);
        let right = SingleKind::fmap(Single(5), move |x| function2(function1(x)));

        assert_eq!(left, right);
        assert_eq!(left, Single(12));
    }
}
