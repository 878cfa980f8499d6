//! The three-valued comparison result
//!
//! `Ordering` is a closed enum, so the three values exist exactly once in the
//! sense that matters: every `EQ` is the same tag and branching is a `match`.
//! It forms a monoid with [`EQ`] as identity and a left-biased combination,
//! which is what lexicographic comparison is built from.

use serde::{Deserialize, Serialize};
use std::cmp;
use std::fmt;
use std::str::FromStr;

use crate::algebra::{Monoid, Semigroup};
use crate::errors::OrdError;

/// Result of comparing two values.
///
/// The derived `Ord` places `LT < EQ < GT`, matching the `i8` coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(i8)]
pub enum Ordering {
    /// Less than
    #[serde(rename = "LT")]
    Less = -1,
    /// Equal
    #[serde(rename = "EQ")]
    Equal = 0,
    /// Greater than
    #[serde(rename = "GT")]
    Greater = 1,
}

/// The "less than" ordering.
pub const LT: Ordering = Ordering::Less;
/// The "equal" ordering, identity of the ordering monoid.
pub const EQ: Ordering = Ordering::Equal;
/// The "greater than" ordering.
pub const GT: Ordering = Ordering::Greater;

impl Ordering {
    /// `-1`, `0` or `1`.
    pub const fn value(self) -> i8 {
        self as i8
    }

    /// Tag name: `LT`, `EQ` or `GT`.
    pub const fn tag(self) -> &'static str {
        match self {
            Ordering::Less => "LT",
            Ordering::Equal => "EQ",
            Ordering::Greater => "GT",
        }
    }

    pub const fn is_lt(self) -> bool {
        matches!(self, Ordering::Less)
    }

    pub const fn is_eq(self) -> bool {
        matches!(self, Ordering::Equal)
    }

    pub const fn is_gt(self) -> bool {
        matches!(self, Ordering::Greater)
    }

    pub const fn is_le(self) -> bool {
        !self.is_gt()
    }

    pub const fn is_ge(self) -> bool {
        !self.is_lt()
    }

    /// Swap `LT` and `GT`.
    pub const fn reverse(self) -> Self {
        match self {
            Ordering::Less => Ordering::Greater,
            Ordering::Equal => Ordering::Equal,
            Ordering::Greater => Ordering::Less,
        }
    }

    /// Monoid combination by value: `self` unless it is `EQ`, else `other`.
    pub const fn then(self, other: Ordering) -> Self {
        match self {
            Ordering::Equal => other,
            decided => decided,
        }
    }

    /// Like [`Ordering::then`] but only evaluates the tie-breaker on `EQ`.
    pub fn then_with<F>(self, f: F) -> Self
    where
        F: FnOnce() -> Ordering,
    {
        match self {
            Ordering::Equal => f(),
            decided => decided,
        }
    }

    /// Fallible [`Ordering::then_with`], for tie-breakers that may fail.
    pub fn try_then_with<E, F>(self, f: F) -> Result<Self, E>
    where
        F: FnOnce() -> Result<Ordering, E>,
    {
        match self {
            Ordering::Equal => f(),
            decided => Ok(decided),
        }
    }
}

impl Semigroup for Ordering {
    fn combine(&self, other: &Self) -> Self {
        self.then(*other)
    }
}

impl Monoid for Ordering {
    fn identity() -> Self {
        EQ
    }
}

impl Default for Ordering {
    fn default() -> Self {
        EQ
    }
}

impl From<Ordering> for i8 {
    fn from(ord: Ordering) -> Self {
        ord.value()
    }
}

impl From<cmp::Ordering> for Ordering {
    fn from(ord: cmp::Ordering) -> Self {
        match ord {
            cmp::Ordering::Less => LT,
            cmp::Ordering::Equal => EQ,
            cmp::Ordering::Greater => GT,
        }
    }
}

impl From<Ordering> for cmp::Ordering {
    fn from(ord: Ordering) -> Self {
        match ord {
            Ordering::Less => cmp::Ordering::Less,
            Ordering::Equal => cmp::Ordering::Equal,
            Ordering::Greater => cmp::Ordering::Greater,
        }
    }
}

impl fmt::Display for Ordering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Ordering {
    type Err = OrdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LT" => Ok(LT),
            "EQ" => Ok(EQ),
            "GT" => Ok(GT),
            other => Err(OrdError::config(format!("unknown ordering tag `{other}`"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Ordering; 3] = [LT, EQ, GT];

    #[test]
    fn identity_is_eq() {
        assert_eq!(Ordering::identity(), EQ);
        for x in ALL {
            assert_eq!(EQ.combine(&x), x);
            assert_eq!(x.combine(&EQ), x);
        }
    }

    #[test]
    fn combine_keeps_first_decided_operand() {
        for x in ALL {
            assert_eq!(LT.combine(&x), LT);
            assert_eq!(GT.combine(&x), GT);
        }
    }

    #[test]
    fn concat_is_lexicographic() {
        assert_eq!(Ordering::concat([EQ, EQ, GT, LT]), GT);
        assert_eq!(Ordering::concat(Vec::new()), EQ);
    }

    #[test]
    fn coercion_is_strictly_increasing() {
        assert_eq!(i8::from(LT), -1);
        assert_eq!(i8::from(EQ), 0);
        assert_eq!(i8::from(GT), 1);
        assert!(LT < EQ && EQ < GT);
    }

    #[test]
    fn then_with_is_lazy() {
        let decided = LT.then_with(|| panic!("tie-breaker evaluated"));
        assert_eq!(decided, LT);
        assert_eq!(EQ.then_with(|| GT), GT);
    }

    #[test]
    fn tags_round_trip_through_display() {
        for x in ALL {
            assert_eq!(x.to_string().parse::<Ordering>(), Ok(x));
        }
        assert!("NE".parse::<Ordering>().is_err());
    }

    #[test]
    fn serializes_as_tag() {
        assert_eq!(serde_json::to_string(&GT).ok().as_deref(), Some("\"GT\""));
    }
}
