//! Partial application
//!
//! Every comparison operator can be given its first operand alone, producing a
//! function that waits for the second. Fully applying the result always yields
//! the operator's ordinary result, never another function.
//!
//! ```
//! use morph_ord::{partial, Comparer, Value};
//!
//! let comparer = Comparer::default();
//! let exceeds_three = partial::less_than(&comparer, Value::Int(3));
//! assert_eq!(exceeds_three(&Value::Int(5)), Ok(true));
//! ```

use crate::compare::Compare;
use crate::ordering::Ordering;

/// Bind the first argument of a two-argument function.
pub fn partial<A, B, R, F>(f: F, a: A) -> impl Fn(&B) -> R
where
    F: Fn(&A, &B) -> R,
    B: ?Sized,
{
    move |b| f(&a, b)
}

pub fn compare<'c, C, T>(comparer: &'c C, a: T) -> impl Fn(&T) -> Result<Ordering, C::Error> + 'c
where
    C: Compare<T> + ?Sized,
    T: 'c,
{
    move |b| comparer.compare(&a, b)
}

pub fn less_than<'c, C, T>(comparer: &'c C, a: T) -> impl Fn(&T) -> Result<bool, C::Error> + 'c
where
    C: Compare<T> + ?Sized,
    T: 'c,
{
    move |b| comparer.less_than(&a, b)
}

pub fn less_than_or_equal<'c, C, T>(
    comparer: &'c C,
    a: T,
) -> impl Fn(&T) -> Result<bool, C::Error> + 'c
where
    C: Compare<T> + ?Sized,
    T: 'c,
{
    move |b| comparer.less_than_or_equal(&a, b)
}

pub fn greater_than<'c, C, T>(comparer: &'c C, a: T) -> impl Fn(&T) -> Result<bool, C::Error> + 'c
where
    C: Compare<T> + ?Sized,
    T: 'c,
{
    move |b| comparer.greater_than(&a, b)
}

pub fn greater_than_or_equal<'c, C, T>(
    comparer: &'c C,
    a: T,
) -> impl Fn(&T) -> Result<bool, C::Error> + 'c
where
    C: Compare<T> + ?Sized,
    T: 'c,
{
    move |b| comparer.greater_than_or_equal(&a, b)
}

/// `max` awaiting its second operand; the bound operand is cloned per call.
pub fn max<'c, C, T>(comparer: &'c C, a: T) -> impl Fn(T) -> Result<T, C::Error> + 'c
where
    C: Compare<T> + ?Sized,
    T: Clone + 'c,
{
    move |b| comparer.max(a.clone(), b)
}

/// `min` awaiting its second operand; the bound operand is cloned per call.
pub fn min<'c, C, T>(comparer: &'c C, a: T) -> impl Fn(T) -> Result<T, C::Error> + 'c
where
    C: Compare<T> + ?Sized,
    T: Clone + 'c,
{
    move |b| comparer.min(a.clone(), b)
}
