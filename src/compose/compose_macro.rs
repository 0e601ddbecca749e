//! The `compose!` macro for function composition.
//!
//! This module provides the [`compose!`] macro which composes functions
//! from right to left, following the mathematical notation for function
//! composition. Each step is built with [`compose`](super::compose), so the
//! composed function stays `Fn + Clone`.

/// Composes functions from right to left.
///
/// `compose!(f, g, h)(x)` is equivalent to `f(g(h(x)))`.
///
/// # Laws
///
/// - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
/// - **Left Identity**: `compose!(identity, f) == f`
/// - **Right Identity**: `compose!(f, identity) == f`
///
/// # Syntax
///
/// - `compose!(f)` - Returns `f` unchanged
/// - `compose!(f, g)` - Returns `|x| f(g(x))`
/// - `compose!(f, g, h, ...)` - Composes any number of functions
///
/// All functions must be `Fn + Clone`; the output type of each function must
/// match the input type of the next one to its left.
///
/// # Examples
///
/// ```
/// use freefold::compose;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
/// fn square(x: i32) -> i32 { x * x }
///
/// // add_one(double(square(3))) = add_one(double(9)) = 19
/// let composed = compose!(add_one, double, square);
/// assert_eq!(composed(3), 19);
/// ```
///
/// ## Verifying associativity
///
/// ```
/// use freefold::compose;
///
/// fn f(x: i32) -> i32 { x + 1 }
/// fn g(x: i32) -> i32 { x * 2 }
/// fn h(x: i32) -> i32 { x - 3 }
///
/// let left = compose!(f, compose!(g, h));
/// let right = compose!(compose!(f, g), h);
///
/// assert_eq!(left(10), right(10));
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr $(,)?) => {
        $function
    };

    ($outer_function:expr, $inner_function:expr $(,)?) => {
        $crate::compose::compose($outer_function, $inner_function)
    };

    ($outer_function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::compose::compose($outer_function, $crate::compose!($($remaining_functions),+))
    };
}
