//! Monoid traits
//!
//! `Ordering` is the monoid this crate cares about, but the traits are kept
//! general so that composite comparison results can be folded the same way.
//!
//! ## Laws
//! - Associativity: `a.combine(&b).combine(&c) == a.combine(&b.combine(&c))`
//! - Left identity: `Self::identity().combine(&a) == a`
//! - Right identity: `a.combine(&Self::identity()) == a`

/// A type with an associative binary combination.
pub trait Semigroup: Sized {
    /// Combine two elements (`<>` / `mappend`).
    fn combine(&self, other: &Self) -> Self;
}

/// A semigroup with an identity element.
pub trait Monoid: Semigroup {
    /// The identity element (`mempty`).
    fn identity() -> Self;

    /// Fold a sequence with [`Semigroup::combine`], starting from the identity.
    fn concat<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        items
            .into_iter()
            .fold(Self::identity(), |acc, item| acc.combine(&item))
    }
}
