//! Dynamically typed comparable values
//!
//! `PartialEq for Value` is the equality protocol the dispatcher falls back to.
//! It never equates values of different kinds, except that integers and floats
//! are compared numerically.

use std::cmp;
use std::fmt;
use std::sync::Arc;

use crate::types::{Data, DataType, DynData, PrimitiveKind, TypeDescriptor};

/// A value that can be handed to the dispatcher.
#[derive(Debug, Clone)]
pub enum Value {
    Unit,
    Bool(bool),
    Int(i64),
    /// `Float(f64::INFINITY)` is the positive-infinity sentinel.
    Float(f64),
    Char(char),
    Str(String),
    Data(Arc<dyn DynData>),
}

impl Value {
    /// The positive-infinity sentinel.
    pub const INFINITY: Value = Value::Float(f64::INFINITY);

    /// Wrap an instance of a user-defined data type.
    pub fn data<T: Data>(data: T) -> Self {
        Value::Data(Arc::new(data))
    }

    /// `dataType(value)`
    pub fn descriptor(&self) -> TypeDescriptor {
        match self {
            Value::Unit => TypeDescriptor::Primitive(PrimitiveKind::Unit),
            Value::Bool(_) => TypeDescriptor::Primitive(PrimitiveKind::Bool),
            Value::Int(_) | Value::Float(_) => TypeDescriptor::Primitive(PrimitiveKind::Number),
            Value::Char(_) => TypeDescriptor::Primitive(PrimitiveKind::Char),
            Value::Str(_) => TypeDescriptor::Primitive(PrimitiveKind::String),
            Value::Data(data) => TypeDescriptor::Data(data.data_type()),
        }
    }

    pub fn data_type(&self) -> Option<DataType> {
        self.descriptor().data_type()
    }

    pub fn is_sentinel(&self) -> bool {
        matches!(self, Value::Float(x) if *x == f64::INFINITY)
    }

    /// Borrow the wrapped data if it is a `T`.
    pub fn downcast_ref<T: Data>(&self) -> Option<&T> {
        match self {
            Value::Data(data) => data.as_any().downcast_ref::<T>(),
            _ => None,
        }
    }

    /// Exact numeric order of two numbers; `None` for non-numbers and NaN.
    pub(crate) fn numeric_cmp(&self, other: &Value) -> Option<cmp::Ordering> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
            (Value::Float(a), Value::Float(b)) => a.partial_cmp(b),
            (Value::Int(a), Value::Float(b)) => int_float_cmp(*a, *b),
            (Value::Float(a), Value::Int(b)) => int_float_cmp(*b, *a).map(cmp::Ordering::reverse),
            _ => None,
        }
    }
}

/// `i64::MIN` as a float, exactly `-2^63`.
const I64_MIN_F64: f64 = -9_223_372_036_854_775_808.0;

/// Compares an integer with a float without rounding the integer.
///
/// Floats in `[-2^63, 2^63)` have an integral part that fits `i64` exactly;
/// the remaining fraction only matters when the integral parts are equal.
pub(crate) fn int_float_cmp(int: i64, float: f64) -> Option<cmp::Ordering> {
    if float.is_nan() {
        return None;
    }
    if float >= -I64_MIN_F64 {
        return Some(cmp::Ordering::Less);
    }
    if float < I64_MIN_F64 {
        return Some(cmp::Ordering::Greater);
    }
    let whole = float.trunc();
    match int.cmp(&(whole as i64)) {
        cmp::Ordering::Equal => 0.0f64.partial_cmp(&(float - whole)),
        decided => Some(decided),
    }
}

/// Total order of an integer against a float, consistent with
/// `f64::total_cmp`: NaN lies beyond the infinity of its sign, and integer
/// zero sits with `+0.0`, above `-0.0`.
pub(crate) fn int_float_total_cmp(int: i64, float: f64) -> cmp::Ordering {
    match int_float_cmp(int, float) {
        None if float.is_sign_negative() => cmp::Ordering::Greater,
        None => cmp::Ordering::Less,
        Some(cmp::Ordering::Equal) if float.is_sign_negative() => cmp::Ordering::Greater,
        Some(ord) => ord,
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Unit, Value::Unit) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Char(a), Value::Char(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Data(a), Value::Data(b)) => a.dyn_eq(b.as_ref()),
            (a, b) => a.numeric_cmp(b) == Some(cmp::Ordering::Equal),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Unit => f.write_str("()"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(x) => write!(f, "{x}"),
            Value::Float(x) if x.is_infinite() => {
                f.write_str(if *x > 0.0 { "Infinity" } else { "-Infinity" })
            }
            Value::Float(x) => write!(f, "{x}"),
            Value::Char(c) => write!(f, "{c:?}"),
            Value::Str(s) => write!(f, "{s:?}"),
            Value::Data(data) => fmt::Display::fmt(data.as_ref(), f),
        }
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Unit
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(x: i64) -> Self {
        Value::Int(x)
    }
}

impl From<i32> for Value {
    fn from(x: i32) -> Self {
        Value::Int(i64::from(x))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Char(c)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_share_a_kind() {
        assert_eq!(Value::Int(1).descriptor(), Value::Float(2.5).descriptor());
        assert_ne!(Value::Int(1).descriptor(), Value::from("1").descriptor());
    }

    #[test]
    fn equality_is_kind_aware() {
        assert_eq!(Value::Int(2), Value::Float(2.0));
        assert_ne!(Value::Int(1), Value::from("1"));
        assert_ne!(Value::Bool(true), Value::Int(1));
        assert_ne!(Value::Float(f64::NAN), Value::Float(f64::NAN));
    }

    #[test]
    fn int_float_equality_is_exact() {
        let above = Value::Int(9_007_199_254_740_993);
        let float = Value::Float(9_007_199_254_740_992.0);
        let exact = Value::Int(9_007_199_254_740_992);
        assert_ne!(above, float);
        assert_eq!(exact, float);
        assert_eq!(float, exact);
        assert_ne!(above, exact);
    }

    #[test]
    fn int_float_order_at_the_edges() {
        use std::cmp::Ordering::{Equal, Greater, Less};
        assert_eq!(int_float_cmp(9_007_199_254_740_993, 9_007_199_254_740_992.0), Some(Greater));
        assert_eq!(int_float_cmp(3, 3.5), Some(Less));
        assert_eq!(int_float_cmp(-3, -3.5), Some(Greater));
        assert_eq!(int_float_cmp(-3, -3.0), Some(Equal));
        assert_eq!(int_float_cmp(0, -0.0), Some(Equal));
        assert_eq!(int_float_cmp(i64::MAX, 9_223_372_036_854_775_808.0), Some(Less));
        assert_eq!(int_float_cmp(i64::MIN, -9_223_372_036_854_775_808.0), Some(Equal));
        assert_eq!(int_float_cmp(i64::MIN, f64::NEG_INFINITY), Some(Greater));
        assert_eq!(int_float_cmp(i64::MAX, f64::INFINITY), Some(Less));
        assert_eq!(int_float_cmp(0, f64::NAN), None);
    }

    #[test]
    fn int_float_total_order_places_nan_and_negative_zero() {
        use std::cmp::Ordering::{Equal, Greater, Less};
        assert_eq!(int_float_total_cmp(i64::MAX, f64::NAN), Less);
        assert_eq!(int_float_total_cmp(i64::MIN, -f64::NAN), Greater);
        assert_eq!(int_float_total_cmp(0, -0.0), Greater);
        assert_eq!(int_float_total_cmp(0, 0.0), Equal);
        assert_eq!(int_float_total_cmp(-1, -0.5), Less);
    }

    #[test]
    fn only_positive_infinity_is_the_sentinel() {
        assert!(Value::INFINITY.is_sentinel());
        assert!(!Value::Float(f64::NEG_INFINITY).is_sentinel());
        assert!(!Value::Int(i64::MAX).is_sentinel());
    }

    #[test]
    fn display_quotes_text() {
        assert_eq!(Value::from("a").to_string(), "\"a\"");
        assert_eq!(Value::from('a').to_string(), "'a'");
        assert_eq!(Value::INFINITY.to_string(), "Infinity");
        assert_eq!(Value::Int(-3).to_string(), "-3");
    }
}
