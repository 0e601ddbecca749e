//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot name a partially applied type such as `List` or `Prog` on its
//! own, so a trait cannot be implemented for "the `List` constructor". This
//! module works around that by giving every type constructor a marker type
//! that carries the constructor as a generic associated type.
//!
//! # Example
//!
//! ```rust
//! use freefold::typeclass::TypeConstructor;
//!
//! enum PairKind {}
//!
//! impl TypeConstructor for PairKind {
//!     type Applied<A> = (A, A);
//! }
//!
//! let pair: <PairKind as TypeConstructor>::Applied<i32> = (1, 2);
//! assert_eq!(pair, (1, 2));
//! ```

/// A marker standing for a type constructor `F<_>`.
///
/// Capabilities such as [`Functor`](super::Functor) and
/// [`Monad`](super::Monad) are implemented for the marker, never for the
/// applied type. Markers are usually uninhabited enums: they exist only at
/// the type level.
///
/// # Laws
///
/// For a marker `K`, `K::Applied<A>` and `K::Applied<B>` must be the same
/// constructor applied to different arguments. An implementation mapping
/// `A` to unrelated shapes breaks every capability built on top.
pub trait TypeConstructor: 'static {
    /// The constructor applied to `A`.
    ///
    /// For `ListKind`, `Applied<String>` is `List<String>`.
    type Applied<A>;
}
