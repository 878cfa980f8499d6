//! Built-in comparable data types
//!
//! [`Pair`] and [`List`] hold arbitrary [`Value`]s and order themselves
//! structurally, comparing components through the active [`Comparer`]. They
//! are registered in the default registry.

use std::fmt;

use crate::compare::Compare;
use crate::dispatch::Comparer;
use crate::errors::Result;
use crate::ordering::{Ordering, EQ};
use crate::types::{Data, OrdData};
use crate::value::Value;

/// An ordered pair, compared on `fst` and then on `snd`.
#[derive(Debug, Clone, PartialEq)]
pub struct Pair {
    fst: Value,
    snd: Value,
}

impl Pair {
    pub fn new(fst: impl Into<Value>, snd: impl Into<Value>) -> Self {
        Self {
            fst: fst.into(),
            snd: snd.into(),
        }
    }

    pub fn fst(&self) -> &Value {
        &self.fst
    }

    pub fn snd(&self) -> &Value {
        &self.snd
    }

    /// `(a, b)` becomes `(b, a)`.
    pub fn swap(&self) -> Self {
        Self {
            fst: self.snd.clone(),
            snd: self.fst.clone(),
        }
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.fst, self.snd)
    }
}

impl Data for Pair {}

impl OrdData for Pair {
    fn compare(&self, other: &Self, comparer: &Comparer) -> Result<Ordering> {
        comparer
            .compare(&self.fst, &other.fst)?
            .try_then_with(|| comparer.compare(&self.snd, &other.snd))
    }
}

impl From<Pair> for Value {
    fn from(pair: Pair) -> Self {
        Value::data(pair)
    }
}

/// A finite sequence, compared element-wise with a proper prefix first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct List {
    items: Vec<Value>,
}

impl List {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn head(&self) -> Option<&Value> {
        self.items.first()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.items.iter()
    }
}

impl<V: Into<Value>> FromIterator<V> for List {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("]")
    }
}

impl Data for List {}

impl OrdData for List {
    fn compare(&self, other: &Self, comparer: &Comparer) -> Result<Ordering> {
        for (a, b) in self.items.iter().zip(other.items.iter()) {
            match comparer.compare(a, b)? {
                EQ => continue,
                decided => return Ok(decided),
            }
        }
        Ok(self.len().cmp(&other.len()).into())
    }
}

impl From<List> for Value {
    fn from(list: List) -> Self {
        Value::data(list)
    }
}
