//! A Read/Write effect algebra and its interpreters.
//!
//! This module is a small but complete use of the free monad:
//!
//! - [`Prog`]: the effect signature, a [`Functor`](crate::typeclass::Functor)
//!   with two instructions
//! - [`Program`]: programs over `Prog`, built with [`read_f`], [`write_f`],
//!   `bind` and `>>`
//! - [`Interpreter`] / [`run`]: folds a program into the list monad
//! - [`LatestInterpreter`] / [`run_latest`]: folds the same program into `Option`
//!
//! # Examples
//!
//! ```rust
//! use freefold::effect::{Program, read_f, run, run_latest, write_f};
//! use freefold::list;
//!
//! let program = (write_f(10) >> read_f()).bind(|x| {
//!     (write_f(20) >> read_f()).bind(move |y| Program::pure(x + y))
//! });
//!
//! assert_eq!(run(program.clone()), list![20, 30]);
//! assert_eq!(run_latest(program), Some(30));
//! ```

mod interpreter;
mod prog;

pub use interpreter::{Interpreter, LatestInterpreter, run, run_latest};
pub use prog::{Prog, ProgKind, Program, read_f, write_f};
