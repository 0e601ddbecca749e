//! Control structures for functional programming.
//!
//! This module provides the two monads programs are built from and folded
//! into:
//!
//! - [`List`]: Ordered nondeterminism; a computation with any number of results
//! - [`Free`]: The free monad over an effect signature, built as data and
//!   interpreted later through a [`NaturalTransformation`]
//!
//! # Examples
//!
//! ## Nondeterminism
//!
//! ```rust
//! use freefold::list;
//!
//! let sums = list![1, 2].bind(|x| list![10, 20].fmap(move |y| x + y));
//! assert_eq!(sums, list![11, 21, 12, 22]);
//! ```
//!
//! ## Programs as Data
//!
//! ```rust
//! use freefold::control::Free;
//! use freefold::effect::ProgKind;
//!
//! let program: Free<ProgKind, i32> = Free::pure(1).fmap(|x| x + 1);
//! assert_eq!(program.into_return(), Some(2));
//! ```

mod free;
mod list;

pub use free::{
    Free, FreeKind, NaturalTransformation, fold_free, lift_free, make_bind, make_return,
};
pub use list::{List, ListKind};
