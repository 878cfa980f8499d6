//! Compile-time ordering capability
//!
//! [`Ordered`] is the statically checked form of the ordering protocol: a type
//! that implements it supplies `compare`, and must already have equality.
//! Comparing values of different types is rejected by the compiler, so the
//! free functions here are total.
//!
//! Primitive implementations follow the default fallback: equal values are
//! `EQ`, otherwise the host `<` decides between `LT` and `GT`. Composite
//! implementations are lexicographic, built with the ordering monoid.

use std::convert::Infallible;

use crate::compare::Compare;
use crate::ordering::{Ordering, EQ, GT, LT};

/// A totally ordered type.
///
/// `a.compare(b) == EQ` must agree with `a == b`.
pub trait Ordered: Eq {
    /// Order `self` relative to `other`.
    fn compare(&self, other: &Self) -> Ordering;
}

/// Equality first, then the host's primitive `<`.
fn fallback<T: PartialEq + PartialOrd + ?Sized>(a: &T, b: &T) -> Ordering {
    if a == b {
        EQ
    } else if a < b {
        LT
    } else {
        GT
    }
}

macro_rules! impl_ordered_primitive {
    ($($t:ty),* $(,)?) => {
        $(
            impl Ordered for $t {
                #[inline]
                fn compare(&self, other: &Self) -> Ordering {
                    fallback(self, other)
                }
            }
        )*
    };
}

impl_ordered_primitive!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char, str, String,
);

impl Ordered for () {
    fn compare(&self, _other: &Self) -> Ordering {
        EQ
    }
}

impl Ordered for Ordering {
    fn compare(&self, other: &Self) -> Ordering {
        i8::from(*self).compare(&i8::from(*other))
    }
}

impl<T: Ordered + ?Sized> Ordered for &T {
    fn compare(&self, other: &Self) -> Ordering {
        (**self).compare(*other)
    }
}

impl<T: Ordered + ?Sized> Ordered for Box<T> {
    fn compare(&self, other: &Self) -> Ordering {
        (**self).compare(&**other)
    }
}

/// `Nothing` sorts before any `Just`.
impl<T: Ordered> Ordered for Option<T> {
    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (None, None) => EQ,
            (None, Some(_)) => LT,
            (Some(_), None) => GT,
            (Some(a), Some(b)) => a.compare(b),
        }
    }
}

/// Element-wise, with a proper prefix ordered first.
impl<T: Ordered> Ordered for [T] {
    fn compare(&self, other: &Self) -> Ordering {
        for (a, b) in self.iter().zip(other.iter()) {
            match a.compare(b) {
                EQ => continue,
                decided => return decided,
            }
        }
        self.len().compare(&other.len())
    }
}

impl<T: Ordered> Ordered for Vec<T> {
    fn compare(&self, other: &Self) -> Ordering {
        self.as_slice().compare(other.as_slice())
    }
}

impl<T: Ordered, const N: usize> Ordered for [T; N] {
    fn compare(&self, other: &Self) -> Ordering {
        self.as_slice().compare(other.as_slice())
    }
}

macro_rules! impl_ordered_tuple {
    ($($name:ident . $idx:tt),+) => {
        impl<$($name: Ordered),+> Ordered for ($($name,)+) {
            fn compare(&self, other: &Self) -> Ordering {
                EQ $(.then_with(|| self.$idx.compare(&other.$idx)))+
            }
        }
    };
}

impl_ordered_tuple!(A.0);
impl_ordered_tuple!(A.0, B.1);
impl_ordered_tuple!(A.0, B.1, C.2);
impl_ordered_tuple!(A.0, B.1, C.2, D.3);

/// Reverses the ordering of the wrapped value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Down<T>(pub T);

impl<T: Ordered> Ordered for Down<T> {
    fn compare(&self, other: &Self) -> Ordering {
        other.0.compare(&self.0)
    }
}

/// Build a comparison from a key projection.
pub fn comparing<T, K, F>(key: F) -> impl Fn(&T, &T) -> Ordering
where
    T: ?Sized,
    K: Ordered,
    F: Fn(&T) -> K,
{
    move |a, b| key(a).compare(&key(b))
}

/// Comparer for [`Ordered`] types. Never fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Natural;

impl<T: Ordered + ?Sized> Compare<T> for Natural {
    type Error = Infallible;

    fn compare(&self, a: &T, b: &T) -> Result<Ordering, Infallible> {
        Ok(a.compare(b))
    }
}

fn total<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

/// Order `a` relative to `b`.
pub fn compare<T: Ordered + ?Sized>(a: &T, b: &T) -> Ordering {
    total(Compare::compare(&Natural, a, b))
}

pub fn less_than<T: Ordered + ?Sized>(a: &T, b: &T) -> bool {
    total(Natural.less_than(a, b))
}

pub fn less_than_or_equal<T: Ordered + ?Sized>(a: &T, b: &T) -> bool {
    total(Natural.less_than_or_equal(a, b))
}

pub fn greater_than<T: Ordered + ?Sized>(a: &T, b: &T) -> bool {
    total(Natural.greater_than(a, b))
}

pub fn greater_than_or_equal<T: Ordered + ?Sized>(a: &T, b: &T) -> bool {
    total(Natural.greater_than_or_equal(a, b))
}

/// The larger value; ties return `b`.
pub fn max<T: Ordered>(a: T, b: T) -> T {
    total(Natural.max(a, b))
}

/// The smaller value; ties return `a`.
pub fn min<T: Ordered>(a: T, b: T) -> T {
    total(Natural.min(a, b))
}

/// Single-argument forms of the operators above.
///
/// ```
/// use morph_ord::ordered::curry;
///
/// let five_exceeds = curry::greater_than(5);
/// assert!(five_exceeds(&3));
/// assert!(!five_exceeds(&8));
/// assert!(curry::less_than(3)(&5));
/// ```
pub mod curry {
    use super::Ordered;
    use crate::ordering::Ordering;

    pub fn compare<T: Ordered>(a: T) -> impl Fn(&T) -> Ordering {
        move |b| super::compare(&a, b)
    }

    pub fn less_than<T: Ordered>(a: T) -> impl Fn(&T) -> bool {
        move |b| super::less_than(&a, b)
    }

    pub fn less_than_or_equal<T: Ordered>(a: T) -> impl Fn(&T) -> bool {
        move |b| super::less_than_or_equal(&a, b)
    }

    pub fn greater_than<T: Ordered>(a: T) -> impl Fn(&T) -> bool {
        move |b| super::greater_than(&a, b)
    }

    pub fn greater_than_or_equal<T: Ordered>(a: T) -> impl Fn(&T) -> bool {
        move |b| super::greater_than_or_equal(&a, b)
    }

    pub fn max<T: Ordered + Clone>(a: T) -> impl Fn(T) -> T {
        move |b| super::max(a.clone(), b)
    }

    pub fn min<T: Ordered + Clone>(a: T) -> impl Fn(T) -> T {
        move |b| super::min(a.clone(), b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers() {
        assert_eq!(compare(&3, &5), LT);
        assert_eq!(compare(&5, &3), GT);
        assert_eq!(compare(&4, &4), EQ);
        assert!(less_than(&3, &5));
        assert!(!greater_than_or_equal(&3, &5));
        assert_eq!(max(3, 5), 5);
        assert_eq!(min(3, 5), 3);
    }

    #[test]
    fn strings_and_chars() {
        assert_eq!(compare("apple", "banana"), LT);
        assert_eq!(compare(&'z', &'a'), GT);
        assert_eq!(compare(&String::from("x"), &String::from("x")), EQ);
    }

    #[test]
    fn tuples_are_lexicographic() {
        assert_eq!(compare(&(1, 2), &(1, 3)), LT);
        assert_eq!(compare(&(2, 1), &(1, 9)), GT);
        assert_eq!(compare(&(1, 'a', "z"), &(1, 'a', "z")), EQ);
        assert_eq!(compare(&(0, 0, 0, 1), &(0, 0, 0, 0)), GT);
        assert_eq!(compare(&(7,), &(8,)), LT);
    }

    #[test]
    fn sequences_order_prefixes_first() {
        assert_eq!(compare(&vec![1, 2, 3], &vec![4, 5, 6]), LT);
        assert_eq!(compare(&vec![1, 2], &vec![1, 2, 0]), LT);
        assert_eq!(compare(&[3, 1], &[2, 9]), GT);
        assert_eq!(compare::<[i32]>(&[], &[]), EQ);
    }

    #[test]
    fn options_put_none_first() {
        assert_eq!(compare(&None, &Some(0)), LT);
        assert_eq!(compare(&Some(2), &Some(1)), GT);
    }

    #[test]
    fn orderings_compare_by_coercion() {
        assert_eq!(compare(&LT, &GT), LT);
        assert_eq!(compare(&GT, &EQ), GT);
        let mut orderings = vec![GT, LT, EQ, LT];
        orderings.sort_by(|a, b| compare(a, b).into());
        assert_eq!(orderings, vec![LT, LT, EQ, GT]);
    }

    #[test]
    fn down_reverses() {
        assert_eq!(compare(&Down(3), &Down(5)), GT);
        assert_eq!(max(Down(3), Down(5)), Down(3));
    }

    #[test]
    fn comparing_projects_keys() {
        let by_len = comparing(|s: &&str| s.len());
        assert_eq!(by_len(&"abc", &"de"), GT);
        assert_eq!(by_len(&"ab", &"de"), EQ);
    }

    #[test]
    fn curried_forms_await_second_operand() {
        let lt3 = curry::less_than(3);
        assert!(lt3(&5));
        assert!(!lt3(&1));
        assert_eq!(curry::compare(4)(&4), EQ);
        assert_eq!(curry::max(3)(5), 5);
        assert_eq!(curry::min(3)(5), 3);
        assert!(curry::less_than_or_equal(5)(&5));
        assert!(curry::greater_than(6)(&5));
        assert!(curry::greater_than_or_equal(5)(&5));
    }
}
