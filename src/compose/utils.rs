//! Helper functions (combinators) for function composition.
//!
//! - [`identity`]: The identity function (I combinator)
//! - [`constant`]: A function that always returns the same value (K combinator)
//! - [`compose`]: Right-to-left composition of two functions (B combinator)
//!
//! Every function returned here is `Fn + Clone` whenever its inputs are, so
//! it can be stored as a continuation and handed to `fmap` / `bind`.

/// Returns the value unchanged.
///
/// The identity function is the unit element of function composition:
/// `compose(identity, f)` and `compose(f, identity)` both behave as `f`.
///
/// # Examples
///
/// ```
/// use freefold::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// ```
#[inline]
pub const fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns a clone of `value`, ignoring its input.
///
/// # Examples
///
/// ```
/// use freefold::compose::constant;
///
/// let always_five = constant::<_, i32>(5);
/// assert_eq!(always_five(100), 5);
/// assert_eq!(always_five(-1), 5);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T + Clone {
    move |_| value.clone()
}

/// Composes two functions right to left: `compose(f, g)(x) == f(g(x))`.
///
/// # Examples
///
/// ```
/// use freefold::compose::compose;
///
/// let add_one_after_double = compose(|x: i32| x + 1, |x: i32| x * 2);
/// assert_eq!(add_one_after_double(5), 11);
/// ```
#[inline]
pub fn compose<A, B, C, F, G>(outer: F, inner: G) -> impl Fn(A) -> C + Clone
where
    F: Fn(B) -> C + Clone,
    G: Fn(A) -> B + Clone,
{
    move |input| outer(inner(input))
}
