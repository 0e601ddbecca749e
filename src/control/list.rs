//! The list monad: ordered nondeterminism.
//!
//! This module provides [`List`], an ordered sequence whose monad instance
//! models branching computation. A `List<A>` is the collection of every
//! result a computation may produce, in the order the branches were taken.
//!
//! # Semantics
//!
//! | Operation | Result |
//! |-----------|--------|
//! | `pure(a)` | `[a]` |
//! | `fmap(l, f)` | `[f(x) for x in l]`, same length, same order |
//! | `bind(l, f)` | concatenation of `f(x)` for each `x` in `l`, in order |
//!
//! Results are never deduplicated nor reordered.
//!
//! # Examples
//!
//! ```rust
//! use freefold::list;
//! use freefold::control::List;
//!
//! let coins = list!['H', 'T'];
//! let two_flips = coins.clone().bind(move |first| {
//!     coins.clone().fmap(move |second| format!("{first}{second}"))
//! });
//!
//! assert_eq!(two_flips, list!["HH", "HT", "TH", "TT"].fmap(String::from));
//! ```

use std::ops::Shr;

use crate::typeclass::{Functor, Monad, TypeConstructor};

/// An ordered sequence of results.
///
/// Insertion order is significant and preserved by every operation;
/// duplicates are allowed. Equality is order-sensitive.
///
/// # Examples
///
/// ```rust
/// use freefold::control::List;
///
/// let list: List<i32> = (1..=3).collect();
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.as_slice(), &[1, 2, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct List<A>(Vec<A>);

/// Marker for the [`List`] type constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {}

impl TypeConstructor for ListKind {
    type Applied<A> = List<A>;
}

impl Functor for ListKind {
    #[inline]
    fn fmap<A, B, F>(fa: List<A>, function: F) -> List<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + Clone + 'static,
    {
        List(fa.0.into_iter().map(function).collect())
    }
}

impl Monad for ListKind {
    #[inline]
    fn pure<A: 'static>(value: A) -> List<A> {
        List::singleton(value)
    }

    #[inline]
    fn bind<A, B, F>(ma: List<A>, function: F) -> List<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> List<B> + Clone + 'static,
    {
        List(ma.0.into_iter().flat_map(function).collect())
    }
}

impl<A> List<A> {
    /// Creates an empty list.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Creates a list holding exactly `value`.
    #[inline]
    #[must_use]
    pub fn singleton(value: A) -> Self {
        Self(vec![value])
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the list has no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over references to the elements, in order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, A> {
        self.0.iter()
    }

    /// Views the elements as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[A] {
        &self.0
    }

    /// Unwraps the list into its backing vector.
    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<A> {
        self.0
    }

    /// Appends `value` at the end.
    ///
    /// Only meant for accumulators that own the list exclusively, such as an
    /// interpreter's write history.
    #[inline]
    pub fn push(&mut self, value: A) {
        self.0.push(value);
    }
}

impl<A: 'static> List<A> {
    /// Method form of [`Functor::fmap`] for `ListKind`.
    ///
    /// ```rust
    /// use freefold::list;
    ///
    /// assert_eq!(list![1, 2, 3].fmap(|x| -x), list![-1, -2, -3]);
    /// ```
    #[inline]
    #[must_use]
    pub fn fmap<B: 'static>(self, function: impl Fn(A) -> B + Clone + 'static) -> List<B> {
        ListKind::fmap(self, function)
    }

    /// Method form of [`Monad::bind`] for `ListKind` (Haskell's `>>=`).
    ///
    /// ```rust
    /// use freefold::list;
    ///
    /// let result = list![1, 2].bind(|x| list![x, x * 10]);
    /// assert_eq!(result, list![1, 10, 2, 20]);
    /// ```
    #[inline]
    #[must_use]
    pub fn bind<B: 'static>(self, function: impl Fn(A) -> List<B> + Clone + 'static) -> List<B> {
        ListKind::bind(self, function)
    }

    /// Alias for [`List::bind`].
    #[inline]
    #[must_use]
    pub fn flat_map<B: 'static>(
        self,
        function: impl Fn(A) -> List<B> + Clone + 'static,
    ) -> List<B> {
        self.bind(function)
    }

    /// Sequences `next` once per element of `self` (Haskell's `>>`).
    ///
    /// The result has `self.len() * next.len()` elements.
    #[inline]
    #[must_use]
    pub fn then<B: Clone + 'static>(self, next: List<B>) -> List<B> {
        ListKind::then(self, next)
    }
}

impl<A: 'static, B: Clone + 'static> Shr<List<B>> for List<A> {
    type Output = List<B>;

    /// `m >> n`: runs `n` once per result of `m`.
    #[inline]
    fn shr(self, next: List<B>) -> List<B> {
        self.then(next)
    }
}

impl<A> From<Vec<A>> for List<A> {
    #[inline]
    fn from(elements: Vec<A>) -> Self {
        Self(elements)
    }
}

impl<A> From<List<A>> for Vec<A> {
    #[inline]
    fn from(list: List<A>) -> Self {
        list.0
    }
}

impl<A> FromIterator<A> for List<A> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<A> Extend<A> for List<A> {
    #[inline]
    fn extend<I: IntoIterator<Item = A>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl<A> IntoIterator for List<A> {
    type Item = A;
    type IntoIter = std::vec::IntoIter<A>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, A> IntoIterator for &'a List<A> {
    type Item = &'a A;
    type IntoIter = std::slice::Iter<'a, A>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Creates a [`List`] containing the arguments, in order.
///
/// # Examples
///
/// ```rust
/// use freefold::list;
/// use freefold::control::List;
///
/// let empty: List<i32> = list![];
/// assert!(empty.is_empty());
///
/// assert_eq!(list![1, 2, 3].into_vec(), vec![1, 2, 3]);
/// ```
#[macro_export]
macro_rules! list {
    () => {
        $crate::control::List::new()
    };
    ($($element:expr),+ $(,)?) => {
        $crate::control::List::from(vec![$($element),+])
    };
}
