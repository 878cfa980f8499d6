//! Morph Ord - Haskell-style total ordering protocol
//!
//! This crate provides a uniform way to compare values of the same logical
//! type, producing a three-valued [`Ordering`], and derives the relational
//! operators and `max`/`min` from that single comparison.
//!
//! # Architecture
//!
//! ## Ordering monoid
//! - [`Ordering`]: `LT | EQ | GT`, identity `EQ`, left-biased combination
//! - `compare(a1, b1).combine(&compare(a2, b2))` is lexicographic comparison
//!
//! ## Two forms of the ordering capability
//! - [`Ordered`]: static, checked by the compiler; comparison is total
//! - [`Comparer`]: dynamic, over [`Value`]s; dispatches to the comparator a
//!   data type registered in a [`Registry`], falling back to equality and then
//!   the primitive `<`. Incompatible operands are [`OrdError::TypeMismatch`];
//!   distinct values of a data type with no comparator are
//!   [`OrdError::NotOrderable`].
//!
//! ## Derived operators
//! - [`Compare`]: `less_than`, `less_than_or_equal`, `greater_than`,
//!   `greater_than_or_equal`, `max`, `min`, all defined through `compare`
//! - [`partial`]: each operator with only its first operand bound
//!
//! ## Laws
//! - Reflexivity: `compare(a, a) == EQ`
//! - Antisymmetry: `compare(a, b) == LT` iff `compare(b, a) == GT`
//! - Monoid: `EQ <> x == x`, `x <> EQ == x`, `LT <> _ == LT`, `GT <> _ == GT`

#![allow(missing_docs)]
#![forbid(unsafe_code)]

/// Monoid traits
pub mod algebra;

/// The comparison result and its monoid
pub mod ordering;

/// Relational operators derived from `compare`
pub mod compare;

/// Compile-time ordering for Rust types
pub mod ordered;

/// Type descriptors and user-defined data types
pub mod types;

/// Dynamically typed values
pub mod value;

/// Ordering capability registry
pub mod registry;

/// The dynamic `compare` dispatcher
pub mod dispatch;

/// Built-in comparable data types
pub mod data;

/// Partial application of the operators
pub mod partial;

/// Dispatcher configuration
pub mod config;

/// Error handling
pub mod errors;

// === Public API Re-exports ===

pub use algebra::{Monoid, Semigroup};
pub use compare::Compare;
pub use config::{CompareConfig, NanPolicy, SentinelPolicy};
pub use data::{List, Pair};
pub use dispatch::Comparer;
pub use errors::{OrdError, Operation, Result};
pub use ordered::{comparing, Down, Natural, Ordered};
pub use ordering::{Ordering, EQ, GT, LT};
pub use registry::{default_registry, Comparator, Registry};
pub use types::{Data, DataType, OrdData, PrimitiveKind, TypeDescriptor};
pub use value::Value;
