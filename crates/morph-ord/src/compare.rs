//! Relational operators derived from a single comparison
//!
//! [`Compare`] has one required method. Every relational operator and
//! `max`/`min` is a provided method expressed only through the three possible
//! results of `compare`, so any comparer gets all of them by implementing the
//! one primitive.

use crate::ordering::{Ordering, GT, LT};

/// A comparison strategy over values of type `T`.
pub trait Compare<T: ?Sized> {
    /// Failure produced when two values cannot be ordered.
    type Error;

    /// Order `a` relative to `b`.
    fn compare(&self, a: &T, b: &T) -> Result<Ordering, Self::Error>;

    /// `a < b`
    fn less_than(&self, a: &T, b: &T) -> Result<bool, Self::Error> {
        Ok(self.compare(a, b)? == LT)
    }

    /// `a <= b`
    fn less_than_or_equal(&self, a: &T, b: &T) -> Result<bool, Self::Error> {
        Ok(self.compare(a, b)? != GT)
    }

    /// `a > b`
    fn greater_than(&self, a: &T, b: &T) -> Result<bool, Self::Error> {
        Ok(self.compare(a, b)? == GT)
    }

    /// `a >= b`
    fn greater_than_or_equal(&self, a: &T, b: &T) -> Result<bool, Self::Error> {
        Ok(self.compare(a, b)? != LT)
    }

    /// The larger of `a` and `b`; ties return `b`.
    fn max(&self, a: T, b: T) -> Result<T, Self::Error>
    where
        T: Sized,
    {
        Ok(if self.less_than_or_equal(&a, &b)? { b } else { a })
    }

    /// The smaller of `a` and `b`; ties return `a`.
    fn min(&self, a: T, b: T) -> Result<T, Self::Error>
    where
        T: Sized,
    {
        Ok(if self.less_than_or_equal(&a, &b)? { a } else { b })
    }
}

impl<T: ?Sized, C: Compare<T> + ?Sized> Compare<T> for &C {
    type Error = C::Error;

    fn compare(&self, a: &T, b: &T) -> Result<Ordering, Self::Error> {
        (**self).compare(a, b)
    }
}
