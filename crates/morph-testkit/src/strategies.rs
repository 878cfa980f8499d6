//! Property test strategies for ordering types
//!
//! Values are generated per primitive kind so that pairs drawn from the same
//! strategy are always comparable. Mixed-kind strategies exist for exercising
//! the type-mismatch path.

use proptest::prelude::*;

// Re-export proptest for convenience
pub use proptest;

use morph_ord::{List, Ordering, Pair, Value, EQ, GT, LT};

/// Strategy for the three orderings
pub fn arb_ordering() -> impl Strategy<Value = Ordering> {
    prop_oneof![Just(LT), Just(EQ), Just(GT)]
}

/// 2^53, past which not every integer is a float.
const EXACT_FLOAT_LIMIT: i64 = 1 << 53;

/// Mostly small integers, so that equal pairs come up often, plus integers
/// around 2^53 and the `i64` extremes
pub fn arb_int_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        3 => -20i64..20,
        1 => (EXACT_FLOAT_LIMIT - 4)..(EXACT_FLOAT_LIMIT + 4),
        1 => (-EXACT_FLOAT_LIMIT - 4)..(-EXACT_FLOAT_LIMIT + 4),
        1 => prop_oneof![Just(i64::MIN), Just(i64::MAX)],
    ]
    .prop_map(Value::Int)
}

/// Finite floats, excluding NaN and the infinities, including the integral
/// floats around 2^53
pub fn arb_finite_float_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        3 => -1000.0f64..1000.0,
        1 => (-4i64..4).prop_map(|d| (EXACT_FLOAT_LIMIT + 2 * d) as f64),
        1 => Just(-0.0),
    ]
    .prop_map(Value::Float)
}

/// Floats of every class, NaN and signed zeros included
pub fn arb_any_float_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        arb_finite_float_value(),
        Just(Value::Float(f64::NAN)),
        Just(Value::Float(-f64::NAN)),
        Just(Value::Float(0.0)),
        Just(Value::Float(f64::NEG_INFINITY)),
    ]
}

/// Integers and floats mixed; both are numbers
pub fn arb_number_value() -> impl Strategy<Value = Value> {
    prop_oneof![arb_int_value(), arb_finite_float_value()]
}

/// Short lowercase strings
pub fn arb_str_value() -> impl Strategy<Value = Value> {
    "[a-c]{0,3}".prop_map(Value::Str)
}

pub fn arb_char_value() -> impl Strategy<Value = Value> {
    proptest::char::range('a', 'f').prop_map(Value::Char)
}

pub fn arb_bool_value() -> impl Strategy<Value = Value> {
    any::<bool>().prop_map(Value::Bool)
}

/// Pairs of small integers
pub fn arb_pair_value() -> impl Strategy<Value = Value> {
    (-3i64..3, -3i64..3).prop_map(|(a, b)| Pair::new(a, b).into())
}

/// Lists of small integers, including the empty list
pub fn arb_list_value() -> impl Strategy<Value = Value> {
    prop::collection::vec(-3i64..3, 0..4).prop_map(|items| items.into_iter().collect::<List>().into())
}

/// A value of any comparable kind
pub fn arb_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        arb_number_value(),
        arb_str_value(),
        arb_char_value(),
        arb_bool_value(),
        arb_pair_value(),
        arb_list_value(),
    ]
}

/// Two values of the same kind
pub fn arb_comparable_pair() -> impl Strategy<Value = (Value, Value)> {
    prop_oneof![
        (arb_number_value(), arb_number_value()),
        (arb_str_value(), arb_str_value()),
        (arb_char_value(), arb_char_value()),
        (arb_bool_value(), arb_bool_value()),
        (arb_pair_value(), arb_pair_value()),
        (arb_list_value(), arb_list_value()),
    ]
}

/// Three values of the same kind
pub fn arb_comparable_triple() -> impl Strategy<Value = (Value, Value, Value)> {
    prop_oneof![
        (arb_number_value(), arb_number_value(), arb_number_value()),
        (arb_str_value(), arb_str_value(), arb_str_value()),
        (arb_pair_value(), arb_pair_value(), arb_pair_value()),
        (arb_list_value(), arb_list_value(), arb_list_value()),
    ]
}

/// Two values of different kinds, neither of them the sentinel
pub fn arb_mismatched_pair() -> impl Strategy<Value = (Value, Value)> {
    prop_oneof![
        (arb_number_value(), arb_str_value()),
        (arb_str_value(), arb_char_value()),
        (arb_bool_value(), arb_int_value()),
        (arb_pair_value(), arb_list_value()),
        (arb_list_value(), arb_number_value()),
    ]
}
