//! The Read/Write effect signature.
//!
//! [`Prog`] has two instructions, each carrying the continuation that
//! receives its result:
//!
//! | Instruction | Payload | Continuation input |
//! |-------------|---------|--------------------|
//! | `Read` | none | `i32` |
//! | `Write` | the `i32` written | `()` |
//!
//! `Prog` is a [`Functor`] but deliberately not a [`Monad`]: programs are
//! sequenced by lifting instructions into [`Program`], the free monad over
//! `Prog`.
//!
//! # Examples
//!
//! ```rust
//! use freefold::effect::{read_f, run, write_f};
//! use freefold::list;
//!
//! let program = write_f(1) >> write_f(2) >> read_f();
//! assert_eq!(run(program), list![1, 2]);
//! ```

use std::fmt::{self, Debug, Formatter};
use std::rc::Rc;

use crate::compose;
use crate::compose::identity;
use crate::control::{Free, lift_free};
use crate::typeclass::{Functor, Monad, TypeConstructor};

/// One instruction of a Read/Write program.
///
/// `Next` is what the rest of the program looks like once the instruction
/// has produced its result; inside a [`Program`] it is the remaining program.
pub enum Prog<Next> {
    /// Reads an `i32` and continues with it.
    Read {
        /// Receives the value read.
        next: Rc<dyn Fn(i32) -> Next>,
    },

    /// Writes `value` and continues.
    Write {
        /// The value written.
        value: i32,
        /// Resumes once the write is done.
        next: Rc<dyn Fn(()) -> Next>,
    },
}

/// Marker for the [`Prog`] type constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgKind {}

static_assertions::assert_impl_all!(ProgKind: Functor);
static_assertions::assert_not_impl_any!(ProgKind: Monad);

/// A program over the Read/Write signature.
pub type Program<A> = Free<ProgKind, A>;

impl<Next> Prog<Next> {
    /// Builds a `Read` whose result is handed to `next`.
    #[inline]
    pub fn read(next: impl Fn(i32) -> Next + 'static) -> Self {
        Self::Read {
            next: Rc::new(next),
        }
    }

    /// Builds a `Write` of `value` that resumes through `next`.
    #[inline]
    pub fn write(value: i32, next: impl Fn(()) -> Next + 'static) -> Self {
        Self::Write {
            value,
            next: Rc::new(next),
        }
    }
}

impl TypeConstructor for ProgKind {
    type Applied<A> = Prog<A>;
}

impl Functor for ProgKind {
    /// Composes `function` after the continuation. The written value is
    /// left untouched.
    fn fmap<A, B, F>(fa: Prog<A>, function: F) -> Prog<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + Clone + 'static,
    {
        match fa {
            Prog::Read { next } => Prog::Read {
                next: Rc::new(compose!(function, move |value: i32| next(value))),
            },
            Prog::Write { value, next } => Prog::Write {
                value,
                next: Rc::new(compose!(function, move |unit: ()| next(unit))),
            },
        }
    }
}

impl<Next> Clone for Prog<Next> {
    fn clone(&self) -> Self {
        match self {
            Self::Read { next } => Self::Read {
                next: Rc::clone(next),
            },
            Self::Write { value, next } => Self::Write {
                value: *value,
                next: Rc::clone(next),
            },
        }
    }
}

impl<Next> Debug for Prog<Next> {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { .. } => formatter.write_str("Read"),
            Self::Write { value, .. } => formatter
                .debug_struct("Write")
                .field("value", value)
                .finish(),
        }
    }
}

/// The program that performs one `Read` and returns the value read.
///
/// # Examples
///
/// ```rust
/// use freefold::effect::read_f;
///
/// assert!(!read_f().is_return());
/// ```
#[inline]
pub fn read_f() -> Program<i32> {
    lift_free::<ProgKind, i32>(Prog::read(identity))
}

/// The program that performs one `Write` of `value`.
///
/// # Examples
///
/// ```rust
/// use freefold::effect::write_f;
///
/// assert_eq!(format!("{:?}", write_f(3)), "Bind(Write { value: 3 })");
/// ```
#[inline]
pub fn write_f(value: i32) -> Program<()> {
    lift_free::<ProgKind, ()>(Prog::write(value, identity))
}
