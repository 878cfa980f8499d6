//! Type descriptors and user-defined data types
//!
//! A [`Value`](crate::value::Value) is either a primitive or an instance of a
//! user-defined data type. [`TypeDescriptor`] answers `dataType(value)`: two
//! values can only be ordered when their descriptors are compatible.

use std::any::{type_name, Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::dispatch::Comparer;
use crate::errors::Result;
use crate::ordering::Ordering;

/// Kind of a primitive value.
///
/// Integers and floats share [`PrimitiveKind::Number`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Unit,
    Bool,
    Number,
    Char,
    String,
}

impl PrimitiveKind {
    pub fn name(&self) -> &'static str {
        match self {
            PrimitiveKind::Unit => "unit",
            PrimitiveKind::Bool => "boolean",
            PrimitiveKind::Number => "number",
            PrimitiveKind::Char => "char",
            PrimitiveKind::String => "string",
        }
    }
}

/// Identity of a user-defined data type.
#[derive(Debug, Clone, Copy)]
pub struct DataType {
    id: TypeId,
    name: &'static str,
}

impl DataType {
    /// Descriptor for `T`.
    pub fn of<T: Any>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Type name with module paths removed, generic arguments included.
    pub fn name(&self) -> String {
        short_type_name(self.name)
    }

    /// Fully qualified type name.
    pub fn full_name(&self) -> &'static str {
        self.name
    }
}

/// `a::Wrapper<b::Bar, [c::Baz; 2]>` becomes `Wrapper<Bar, [Baz; 2]>`.
fn short_type_name(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    let mut segment_start = 0;
    let mut chars = full.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            ':' if chars.peek() == Some(&':') => {
                chars.next();
                out.truncate(segment_start);
            }
            '<' | '>' | ',' | ' ' | '(' | ')' | '[' | ']' | ';' | '&' | '*' => {
                out.push(c);
                segment_start = out.len();
            }
            _ => out.push(c),
        }
    }
    out
}

impl PartialEq for DataType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for DataType {}

impl Hash for DataType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// The comparable type of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeDescriptor {
    Primitive(PrimitiveKind),
    Data(DataType),
}

impl TypeDescriptor {
    /// Whether values of these two types may be compared at all.
    pub fn matches(&self, other: &TypeDescriptor) -> bool {
        self == other
    }

    pub fn data_type(&self) -> Option<DataType> {
        match self {
            TypeDescriptor::Data(data_type) => Some(*data_type),
            TypeDescriptor::Primitive(_) => None,
        }
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDescriptor::Primitive(kind) => f.write_str(kind.name()),
            TypeDescriptor::Data(data_type) => fmt::Display::fmt(data_type, f),
        }
    }
}

/// A user-defined data type that can be carried in a `Value`.
///
/// `PartialEq` is the type's equality, used by `PartialEq for Value`. Ordering
/// additionally requires [`OrdData`] and registration in a
/// [`Registry`](crate::registry::Registry).
pub trait Data: Any + fmt::Debug + fmt::Display + PartialEq + Send + Sync {}

/// A data type with its own comparator.
///
/// The comparator receives the active [`Comparer`] so that components holding
/// further values are compared with the same registry and configuration.
/// Results must agree with `PartialEq`: `EQ` exactly when the values are equal.
pub trait OrdData: Data {
    fn compare(&self, other: &Self, comparer: &Comparer) -> Result<Ordering>;
}

/// Object-safe view over [`Data`], used for type-erased storage.
pub trait DynData: fmt::Debug + fmt::Display + Send + Sync {
    fn data_type(&self) -> DataType;

    fn as_any(&self) -> &dyn Any;

    fn dyn_eq(&self, other: &dyn DynData) -> bool;
}

impl<T: Data> DynData for T {
    fn data_type(&self) -> DataType {
        DataType::of::<T>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn dyn_eq(&self, other: &dyn DynData) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }
}
