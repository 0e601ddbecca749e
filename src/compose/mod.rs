//! Function composition utilities.
//!
//! Programs built from effect signatures store their continuations as
//! functions; mapping over an instruction is composing a function onto its
//! continuation. This module holds the small combinators used for that.
//!
//! # Overview
//!
//! - [`compose!`](crate::compose!): Compose any number of functions right-to-left
//! - [`identity`]: The identity function - returns its argument unchanged
//! - [`constant`]: Creates a function that always returns the same value
//! - [`compose`]: Composes two functions right-to-left
//!
//! # Examples
//!
//! ```
//! use freefold::compose;
//! use freefold::compose::{constant, identity};
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! let composed = compose!(add_one, double, identity);
//! assert_eq!(composed(5), 11);
//!
//! let always_zero = constant::<_, &str>(0);
//! assert_eq!(always_zero("ignored"), 0);
//! ```

mod compose_macro;
mod utils;

pub use utils::{compose, constant, identity};
