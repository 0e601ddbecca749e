//! Type class traits for functional programming abstractions.
//!
//! This module provides the capabilities that every other module builds on:
//!
//! - [`Functor`]: Mapping over the payload of a type constructor
//! - [`Monad`]: Lifting values and sequencing computations with dependency
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! Capabilities are therefore implemented for marker types implementing
//! [`TypeConstructor`], whose generic associated type `Applied<A>` is the
//! constructor applied to `A`. Instance lookup is ordinary trait resolution:
//! "is `K` a functor" is the bound `K: Functor`, checked at compile time.
//!
//! ## Instances
//!
//! - [`OptionKind`]: `Option`, the short-circuiting monad
//! - `ListKind`, `FreeKind<F>` (in `control`) and `ProgKind` (in `effect`)
//!
//! # Examples
//!
//! ```rust
//! use freefold::typeclass::{Functor, Monad, OptionKind};
//!
//! let parsed = OptionKind::bind(Some("42"), |s: &str| s.parse::<i32>().ok());
//! assert_eq!(OptionKind::fmap(parsed, |n| n * 2), Some(84));
//! ```

mod functor;
mod higher;
mod monad;
mod option;

pub use functor::{Functor, fmap};
pub use higher::TypeConstructor;
pub use monad::{Monad, bind, pure, then};
pub use option::OptionKind;
