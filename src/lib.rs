//! # freefold
//!
//! Effectful programs as inert data, interpreted later by user-supplied
//! handlers.
//!
//! ## Overview
//!
//! - **Type Classes**: [`Functor`](typeclass::Functor) and
//!   [`Monad`](typeclass::Monad) capabilities attached to type-constructor
//!   markers, resolved by the trait system
//! - **Function Composition**: `identity`, `constant`, `compose` and the
//!   `compose!` macro
//! - **Control Structures**: the nondeterministic [`List`](control::List)
//!   monad and the [`Free`](control::Free) monad over any functor
//! - **Effects**: a two-instruction Read/Write algebra, [`Program`](effect::Program),
//!   and interpreters folding programs into `List` or `Option`
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Monad)
//! - `compose`: Function composition utilities
//! - `control`: List and Free monads
//! - `effect`: Read/Write programs and their interpreters
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use freefold::prelude::*;
//!
//! let program = (write_f(10) >> read_f()).bind(|x| {
//!     (write_f(20) >> read_f()).bind(move |y| Program::pure(x + y))
//! });
//!
//! assert_eq!(run(program), list![20, 30]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use freefold::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "control")]
    pub use crate::list;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "effect")]
pub mod effect;
