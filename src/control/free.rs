//! Free monad for DSL construction.
//!
//! Turns any [`Functor`] (an effect signature) into a [`Monad`], so that
//! programs over the signature can be built by composition and interpreted
//! later.
//!
//! # Design
//!
//! ```text
//! Free<F, A> = Return(A)
//!            | Bind(F<Free<F, A>>)
//! ```
//!
//! A `Bind` node holds one pending effect whose payload is the rest of the
//! program. Nothing is executed while a program is built: `fmap` and `bind`
//! only rewrite the tree, pushing the function down to every `Return` leaf.
//! Meaning is given afterwards by [`fold_free`], which consumes the tree one
//! effect at a time through a caller-supplied [`NaturalTransformation`] into
//! any target monad.
//!
//! # Stack Usage
//!
//! `fmap`, `bind` and `fold_free` recurse once per `Bind` node on the path
//! they traverse, so the call-stack depth grows with the depth of the
//! program tree. Exhausting the stack is fatal.
//!
//! # Examples
//!
//! ## Counter DSL
//!
//! ```rust
//! use freefold::control::{ListKind, List, NaturalTransformation, lift_free};
//! use freefold::typeclass::{Functor, TypeConstructor};
//!
//! // One instruction: increment and continue with the new count.
//! struct Tick<Next>(std::rc::Rc<dyn Fn(u32) -> Next>);
//!
//! enum TickKind {}
//!
//! impl TypeConstructor for TickKind {
//!     type Applied<A> = Tick<A>;
//! }
//!
//! impl Functor for TickKind {
//!     fn fmap<A: 'static, B: 'static, F>(fa: Tick<A>, function: F) -> Tick<B>
//!     where
//!         F: Fn(A) -> B + Clone + 'static,
//!     {
//!         let next = fa.0;
//!         Tick(std::rc::Rc::new(move |count| function(next(count))))
//!     }
//! }
//!
//! #[derive(Clone, Default)]
//! struct Counter(u32);
//!
//! impl NaturalTransformation<TickKind, ListKind> for Counter {
//!     fn transform<X: 'static>(&mut self, effect: Tick<X>) -> List<X> {
//!         self.0 += 1;
//!         List::singleton((effect.0)(self.0))
//!     }
//! }
//!
//! let tick = || lift_free::<TickKind, u32>(Tick(std::rc::Rc::new(|count: u32| count)));
//! let program = tick().bind(move |_| tick()).bind(move |_| tick());
//!
//! assert_eq!(program.fold::<ListKind, _>(Counter::default()), List::singleton(3));
//! ```

use std::convert::Infallible;
use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::ops::Shr;

use crate::typeclass::{Functor, Monad, TypeConstructor};

// =============================================================================
// Free Monad
// =============================================================================

/// The free monad over the effect signature `F`.
///
/// # Type Parameters
///
/// * `F` - Marker of the effect signature; a [`Functor`] for every operation
///   beyond construction
/// * `A` - The result type of the program
///
/// # Laws
///
/// Free satisfies the Monad laws whenever `F` satisfies the Functor laws:
///
/// - **Left Identity**: `Free::pure(a).bind(f) == f(a)`
/// - **Right Identity**: `m.bind(Free::pure) == m`
/// - **Associativity**: `m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))`
///
/// Values are immutable; every combinator builds a new tree.
pub enum Free<F: TypeConstructor, A> {
    /// A finished program: no pending effect.
    Return(A),

    /// One pending effect whose payload is the rest of the program.
    Bind(Box<F::Applied<Free<F, A>>>),
}

/// Marker for the `Free<F, _>` type constructor.
///
/// Uninhabited; exists only to carry the [`Functor`] and [`Monad`] instances
/// of `Free<F, _>`.
pub struct FreeKind<F>(Infallible, PhantomData<fn() -> F>);

impl<F: TypeConstructor> TypeConstructor for FreeKind<F> {
    type Applied<A> = Free<F, A>;
}

impl<F: Functor> Functor for FreeKind<F> {
    /// `fmap(Return(a), f) = Return(f(a))`;
    /// `fmap(Bind(x), f) = Bind(fmap(x, |sub| fmap(sub, f)))`.
    fn fmap<A, B, G>(fa: Free<F, A>, function: G) -> Free<F, B>
    where
        A: 'static,
        B: 'static,
        G: Fn(A) -> B + Clone + 'static,
    {
        match fa {
            Free::Return(value) => Free::Return(function(value)),
            Free::Bind(effect) => Free::Bind(Box::new(F::fmap::<Free<F, A>, Free<F, B>, _>(
                *effect,
                move |sub| Self::fmap::<A, B, G>(sub, function.clone()),
            ))),
        }
    }
}

impl<F: Functor> Monad for FreeKind<F> {
    #[inline]
    fn pure<A: 'static>(value: A) -> Free<F, A> {
        Free::Return(value)
    }

    /// `bind(Return(a), f) = f(a)`;
    /// `bind(Bind(x), f) = Bind(fmap(x, |sub| bind(sub, f)))`.
    ///
    /// The effect itself is never interpreted; `function` is substituted at
    /// every `Return` leaf.
    fn bind<A, B, G>(ma: Free<F, A>, function: G) -> Free<F, B>
    where
        A: 'static,
        B: 'static,
        G: Fn(A) -> Free<F, B> + Clone + 'static,
    {
        match ma {
            Free::Return(value) => function(value),
            Free::Bind(effect) => Free::Bind(Box::new(F::fmap::<Free<F, A>, Free<F, B>, _>(
                *effect,
                move |sub| Self::bind::<A, B, G>(sub, function.clone()),
            ))),
        }
    }
}

// =============================================================================
// Interpretation
// =============================================================================

/// A transformation from the effect signature `F` into the monad `M`,
/// uniform in the payload type.
///
/// This is the single extension point of the free monad: a new meaning for a
/// DSL is a new implementation of this trait, never a change to [`Free`] or
/// [`fold_free`].
///
/// `&mut self` lets an interpreter accumulate state while it handles an
/// effect. [`fold_free`] clones the transformation for every continuation it
/// resumes, so that state is threaded down each branch of the target monad
/// and never shared between sibling branches.
pub trait NaturalTransformation<F: TypeConstructor, M: TypeConstructor> {
    /// Gives meaning to one effect, keeping its payload untouched.
    fn transform<X: 'static>(&mut self, effect: F::Applied<X>) -> M::Applied<X>;
}

/// Interprets `free` in the monad `M` through `transform`.
///
/// ```text
/// fold_free(t, Return(a)) = M::pure(a)
/// fold_free(t, Bind(x))   = M::bind(t(x), |sub| fold_free(t, sub))
/// ```
///
/// Failures raised by `transform` or by continuations inside the program
/// propagate unchanged.
pub fn fold_free<F, M, A, T>(mut transform: T, free: Free<F, A>) -> M::Applied<A>
where
    F: Functor,
    M: Monad,
    A: 'static,
    T: NaturalTransformation<F, M> + Clone + 'static,
{
    match free {
        Free::Return(value) => M::pure::<A>(value),
        Free::Bind(effect) => {
            let handled = transform.transform::<Free<F, A>>(*effect);
            M::bind::<Free<F, A>, A, _>(handled, move |sub| {
                fold_free::<F, M, A, T>(transform.clone(), sub)
            })
        }
    }
}

// =============================================================================
// Construction
// =============================================================================

/// Builds a finished program holding `value`.
#[inline]
pub const fn make_return<F: TypeConstructor, A>(value: A) -> Free<F, A> {
    Free::Return(value)
}

/// Builds a program from a pre-built effect node.
#[inline]
pub fn make_bind<F: TypeConstructor, A>(effect: F::Applied<Free<F, A>>) -> Free<F, A> {
    Free::Bind(Box::new(effect))
}

/// Embeds a single effect as the program "perform `fa`, then return its result".
///
/// Defined as `make_bind(fmap(fa, make_return))`.
#[inline]
pub fn lift_free<F: Functor, A: 'static>(fa: F::Applied<A>) -> Free<F, A> {
    make_bind::<F, A>(F::fmap::<A, Free<F, A>, _>(fa, make_return::<F, A>))
}

impl<F: TypeConstructor, A> Free<F, A> {
    /// Lifts a pure value into Free (the `return`/`pure` operation of the Monad).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use freefold::effect::Program;
    ///
    /// let program: Program<i32> = Program::pure(42);
    /// assert!(program.is_return());
    /// ```
    #[inline]
    pub const fn pure(value: A) -> Self {
        Self::Return(value)
    }

    /// Returns `true` if no effect is pending.
    #[inline]
    pub const fn is_return(&self) -> bool {
        matches!(self, Self::Return(_))
    }

    /// Returns the result of a finished program, or `None` if an effect is pending.
    #[inline]
    pub fn into_return(self) -> Option<A> {
        match self {
            Self::Return(value) => Some(value),
            Self::Bind(_) => None,
        }
    }
}

impl<F: Functor, A: 'static> Free<F, A> {
    /// Method form of [`lift_free`].
    #[inline]
    pub fn lift(fa: F::Applied<A>) -> Self {
        lift_free::<F, A>(fa)
    }

    /// Applies a function to every result of the program (Functor `fmap`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use freefold::effect::{Program, read_f, run, write_f};
    /// use freefold::list;
    ///
    /// let shown = (write_f(7) >> read_f()).fmap(|x| x.to_string());
    /// assert_eq!(run(shown), list!["7".to_string()]);
    /// ```
    #[inline]
    #[must_use]
    pub fn fmap<B: 'static>(self, function: impl Fn(A) -> B + Clone + 'static) -> Free<F, B> {
        FreeKind::<F>::fmap::<A, B, _>(self, function)
    }

    /// Chains computations together (Monad `bind`, Haskell's `>>=`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use freefold::effect::{Program, read_f, run, write_f};
    /// use freefold::list;
    ///
    /// let doubled = (write_f(21) >> read_f()).bind(|x| Program::pure(x * 2));
    /// assert_eq!(run(doubled), list![42]);
    /// ```
    #[inline]
    #[must_use]
    pub fn bind<B: 'static>(
        self,
        function: impl Fn(A) -> Free<F, B> + Clone + 'static,
    ) -> Free<F, B> {
        FreeKind::<F>::bind::<A, B, _>(self, function)
    }

    /// Alias for [`Free::bind`].
    #[inline]
    #[must_use]
    pub fn flat_map<B: 'static>(
        self,
        function: impl Fn(A) -> Free<F, B> + Clone + 'static,
    ) -> Free<F, B> {
        self.bind(function)
    }

    /// Sequences two programs, discarding the result of the first (Haskell's `>>`).
    #[inline]
    #[must_use]
    pub fn then<B: 'static>(self, next: Free<F, B>) -> Free<F, B>
    where
        Free<F, B>: Clone,
    {
        FreeKind::<F>::then::<A, B>(self, next)
    }

    /// Method form of [`fold_free`].
    #[inline]
    pub fn fold<M, T>(self, transform: T) -> M::Applied<A>
    where
        M: Monad,
        T: NaturalTransformation<F, M> + Clone + 'static,
    {
        fold_free::<F, M, A, T>(transform, self)
    }
}

impl<F, A, B> Shr<Free<F, B>> for Free<F, A>
where
    F: Functor,
    A: 'static,
    B: 'static,
    Free<F, B>: Clone,
{
    type Output = Free<F, B>;

    /// `m >> n`: runs `m`, discards its result, continues with `n`.
    #[inline]
    fn shr(self, next: Free<F, B>) -> Free<F, B> {
        self.then(next)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<F, A> Clone for Free<F, A>
where
    F: TypeConstructor,
    A: Clone,
    F::Applied<Self>: Clone,
{
    fn clone(&self) -> Self {
        match self {
            Self::Return(value) => Self::Return(value.clone()),
            Self::Bind(effect) => Self::Bind(effect.clone()),
        }
    }
}

impl<F, A> Debug for Free<F, A>
where
    F: TypeConstructor,
    A: Debug,
    F::Applied<Self>: Debug,
{
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Return(value) => formatter.debug_tuple("Return").field(value).finish(),
            Self::Bind(effect) => formatter.debug_tuple("Bind").field(effect).finish(),
        }
    }
}
