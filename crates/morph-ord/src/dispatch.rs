//! The `compare` dispatcher for dynamic values
//!
//! Resolution order for `compare(a, b)`:
//!
//! 1. the positive-infinity sentinel, per [`SentinelPolicy`]
//! 2. type compatibility; incompatible operands are a type mismatch
//! 3. the data type's registered comparator, whose result is returned verbatim;
//!    without one, equal values are `EQ` and distinct values are not orderable
//! 4. equality, giving `EQ`
//! 5. the primitive `<`, giving `LT`, otherwise `GT`
//!
//! Integers and floats are compared exactly, never by rounding the integer.
//! Under [`NanPolicy::Total`] numbers skip steps 4 and 5 and use the IEEE 754
//! total order directly.
//!
//! Relational operators and `max`/`min` come from [`Compare`]; the inherent
//! methods on [`Comparer`] only tag the comparison with the operation name so
//! that a mismatch reports where it was requested from.

use std::cmp;
use std::sync::Arc;

use crate::compare::Compare;
use crate::config::{CompareConfig, NanPolicy, SentinelPolicy};
use crate::errors::{OrdError, Operation, Result};
use crate::ordering::{Ordering, EQ, GT, LT};
use crate::registry::{default_registry, Registry};
use crate::types::TypeDescriptor;
use crate::value::{int_float_total_cmp, Value};

/// Compares [`Value`]s using a capability registry.
#[derive(Debug, Clone)]
pub struct Comparer {
    registry: Arc<Registry>,
    config: CompareConfig,
    origin: Operation,
}

impl Default for Comparer {
    fn default() -> Self {
        Self::new(default_registry(), CompareConfig::default())
    }
}

impl Comparer {
    pub fn new(registry: Arc<Registry>, config: CompareConfig) -> Self {
        if !config.is_reflexive() {
            tracing::warn!(
                sentinel = ?config.sentinel,
                "comparer built with a non-reflexive sentinel policy"
            );
        }
        Self {
            registry,
            config,
            origin: Operation::Compare,
        }
    }

    /// Default registry with a custom configuration.
    pub fn with_config(config: CompareConfig) -> Self {
        Self::new(default_registry(), config)
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn config(&self) -> &CompareConfig {
        &self.config
    }

    /// Operation reported by type mismatches raised through this comparer.
    pub fn origin(&self) -> Operation {
        self.origin
    }

    fn at(&self, origin: Operation) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
            config: self.config,
            origin,
        }
    }

    /// `typeCheck(a, b)`: same primitive kind, or the same data type.
    pub fn type_check(&self, a: &Value, b: &Value) -> bool {
        a.descriptor().matches(&b.descriptor())
    }

    fn sentinel(&self, a: &Value, b: &Value) -> Option<Ordering> {
        match self.config.sentinel {
            SentinelPolicy::Reflexive => match (a.is_sentinel(), b.is_sentinel()) {
                (true, true) => Some(EQ),
                (true, false) => Some(GT),
                (false, true) => Some(LT),
                (false, false) => None,
            },
            SentinelPolicy::LeftBiased if a.is_sentinel() => Some(GT),
            SentinelPolicy::LeftBiased if b.is_sentinel() => Some(LT),
            SentinelPolicy::LeftBiased | SentinelPolicy::Disabled => None,
        }
    }

    fn primitive_less_than(&self, a: &Value, b: &Value) -> bool {
        match (a, b) {
            (Value::Bool(x), Value::Bool(y)) => x < y,
            (Value::Char(x), Value::Char(y)) => x < y,
            (Value::Str(x), Value::Str(y)) => x < y,
            _ => a.numeric_cmp(b) == Some(cmp::Ordering::Less),
        }
    }

    /// Number order under [`NanPolicy::Total`], decided without the equality
    /// step so that NaN and signed zeros keep their total positions.
    fn total_numeric(&self, a: &Value, b: &Value) -> Option<Ordering> {
        let ord = match (a, b) {
            (Value::Float(x), Value::Float(y)) => x.total_cmp(y),
            (Value::Int(x), Value::Float(y)) => int_float_total_cmp(*x, *y),
            (Value::Float(x), Value::Int(y)) => int_float_total_cmp(*y, *x).reverse(),
            _ => return None,
        };
        Some(ord.into())
    }

    fn mismatch(&self, a: &Value, b: &Value) -> OrdError {
        let err = OrdError::type_mismatch(a, b, self.origin);
        tracing::debug!(origin = %self.origin, left = %a, right = %b, "type mismatch");
        err
    }

    /// `max(a, b)`; ties return `b`.
    pub fn max(&self, a: Value, b: Value) -> Result<Value> {
        Compare::max(&self.at(Operation::Max), a, b)
    }

    /// `min(a, b)`; ties return `a`.
    pub fn min(&self, a: Value, b: Value) -> Result<Value> {
        Compare::min(&self.at(Operation::Min), a, b)
    }

    pub fn less_than(&self, a: &Value, b: &Value) -> Result<bool> {
        Compare::less_than(&self.at(Operation::LessThan), a, b)
    }

    pub fn less_than_or_equal(&self, a: &Value, b: &Value) -> Result<bool> {
        Compare::less_than_or_equal(&self.at(Operation::LessThanOrEqual), a, b)
    }

    pub fn greater_than(&self, a: &Value, b: &Value) -> Result<bool> {
        Compare::greater_than(&self.at(Operation::GreaterThan), a, b)
    }

    pub fn greater_than_or_equal(&self, a: &Value, b: &Value) -> Result<bool> {
        Compare::greater_than_or_equal(&self.at(Operation::GreaterThanOrEqual), a, b)
    }
}

impl Compare<Value> for Comparer {
    type Error = OrdError;

    fn compare(&self, a: &Value, b: &Value) -> Result<Ordering> {
        if let Some(ord) = self.sentinel(a, b) {
            tracing::trace!(origin = %self.origin, %ord, "sentinel short-circuit");
            return Ok(ord);
        }

        if !self.type_check(a, b) {
            return Err(self.mismatch(a, b));
        }

        if let TypeDescriptor::Data(data_type) = a.descriptor() {
            let Some(comparator) = self.registry.comparator(&data_type) else {
                if a == b {
                    return Ok(EQ);
                }
                tracing::debug!(origin = %self.origin, %data_type, "no ordering declared");
                return Err(OrdError::not_orderable(a, b, self.origin));
            };
            tracing::trace!(origin = %self.origin, %data_type, "delegating to registered comparator");
            return (comparator.as_ref())(self, a, b);
        }

        if self.config.nan == NanPolicy::Total {
            if let Some(ord) = self.total_numeric(a, b) {
                return Ok(ord);
            }
        }

        if a == b {
            return Ok(EQ);
        }
        Ok(if self.primitive_less_than(a, b) { LT } else { GT })
    }
}

/// `compare(a, b)` with the default comparer.
pub fn compare(a: &Value, b: &Value) -> Result<Ordering> {
    Comparer::default().compare(a, b)
}

pub fn less_than(a: &Value, b: &Value) -> Result<bool> {
    Comparer::default().less_than(a, b)
}

pub fn less_than_or_equal(a: &Value, b: &Value) -> Result<bool> {
    Comparer::default().less_than_or_equal(a, b)
}

pub fn greater_than(a: &Value, b: &Value) -> Result<bool> {
    Comparer::default().greater_than(a, b)
}

pub fn greater_than_or_equal(a: &Value, b: &Value) -> Result<bool> {
    Comparer::default().greater_than_or_equal(a, b)
}

pub fn max(a: Value, b: Value) -> Result<Value> {
    Comparer::default().max(a, b)
}

pub fn min(a: Value, b: Value) -> Result<Value> {
    Comparer::default().min(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Pair;
    use std::fmt;

    fn int(x: i64) -> Value {
        Value::Int(x)
    }

    #[test]
    fn primitives_follow_host_order() {
        let cmp = Comparer::default();
        assert_eq!(cmp.compare(&int(3), &int(5)), Ok(LT));
        assert_eq!(cmp.compare(&int(5), &int(3)), Ok(GT));
        assert_eq!(cmp.compare(&int(4), &int(4)), Ok(EQ));
        assert_eq!(cmp.compare(&Value::from("a"), &Value::from("b")), Ok(LT));
        assert_eq!(cmp.compare(&Value::from(false), &Value::from(true)), Ok(LT));
        assert_eq!(cmp.compare(&Value::Unit, &Value::Unit), Ok(EQ));
    }

    #[test]
    fn ints_and_floats_compare_numerically() {
        let cmp = Comparer::default();
        assert_eq!(cmp.compare(&int(2), &Value::Float(2.5)), Ok(LT));
        assert_eq!(cmp.compare(&Value::Float(2.0), &int(2)), Ok(EQ));
    }

    #[test]
    fn cross_kind_comparison_is_a_mismatch() {
        let err = compare(&int(1), &Value::from("a")).unwrap_err();
        assert_eq!(err.origin(), Some(Operation::Compare));
        assert!(compare(&int(1), &int(1)).is_ok());
    }

    #[test]
    fn derived_operators_report_their_origin() {
        let cmp = Comparer::default();
        let err = cmp.max(int(1), Value::from('x')).unwrap_err();
        assert_eq!(err.origin(), Some(Operation::Max));
        let err = cmp.greater_than_or_equal(&int(1), &Value::from(true)).unwrap_err();
        assert_eq!(err.origin(), Some(Operation::GreaterThanOrEqual));
    }

    #[test]
    fn reflexive_sentinel() {
        let cmp = Comparer::default();
        assert_eq!(cmp.compare(&Value::INFINITY, &Value::INFINITY), Ok(EQ));
        assert_eq!(cmp.compare(&Value::INFINITY, &int(i64::MAX)), Ok(GT));
        assert_eq!(cmp.compare(&int(0), &Value::INFINITY), Ok(LT));
        // The sentinel sits above values of every kind.
        assert_eq!(cmp.compare(&Value::from("z"), &Value::INFINITY), Ok(LT));
    }

    #[test]
    fn left_biased_sentinel_always_wins_on_the_left() {
        let cmp = Comparer::with_config(CompareConfig::left_biased());
        assert_eq!(cmp.compare(&Value::INFINITY, &Value::INFINITY), Ok(GT));
        assert_eq!(cmp.compare(&int(0), &Value::INFINITY), Ok(LT));
    }

    #[test]
    fn disabled_sentinel_is_an_ordinary_float() {
        let cmp = Comparer::with_config(
            CompareConfig::default().with_sentinel(SentinelPolicy::Disabled),
        );
        assert_eq!(cmp.compare(&Value::INFINITY, &Value::INFINITY), Ok(EQ));
        assert!(cmp.compare(&Value::INFINITY, &Value::from("z")).is_err());
    }

    #[test]
    fn nan_policies() {
        let nan = Value::Float(f64::NAN);
        let host = Comparer::default();
        assert_eq!(host.compare(&nan, &int(1)), Ok(GT));
        assert_eq!(host.compare(&int(1), &nan), Ok(GT));
        assert_eq!(host.compare(&nan, &nan), Ok(GT));

        let total = Comparer::with_config(CompareConfig::default().with_nan(NanPolicy::Total));
        assert_eq!(total.compare(&nan, &int(1)), Ok(GT));
        assert_eq!(total.compare(&int(1), &nan), Ok(LT));
        assert_eq!(total.compare(&nan, &nan), Ok(EQ));
        assert_eq!(total.compare(&nan, &Value::Float(f64::NAN)), Ok(EQ));
    }

    #[test]
    fn total_policy_orders_signed_zeros() {
        let total = Comparer::with_config(CompareConfig::default().with_nan(NanPolicy::Total));
        let neg_zero = Value::Float(-0.0);
        let pos_zero = Value::Float(0.0);
        assert_eq!(total.compare(&neg_zero, &pos_zero), Ok(LT));
        assert_eq!(total.compare(&pos_zero, &neg_zero), Ok(GT));
        assert_eq!(total.compare(&neg_zero, &int(0)), Ok(LT));
        assert_eq!(total.compare(&int(0), &pos_zero), Ok(EQ));
        assert_eq!(total.compare(&int(3), &Value::Float(2.5)), Ok(GT));
    }

    #[test]
    fn large_ints_against_floats_stay_transitive() {
        let cmp = Comparer::default();
        let above = int(9_007_199_254_740_993);
        let float = Value::Float(9_007_199_254_740_992.0);
        let exact = int(9_007_199_254_740_992);
        assert_eq!(cmp.compare(&above, &float), Ok(GT));
        assert_eq!(cmp.compare(&float, &exact), Ok(EQ));
        assert_eq!(cmp.compare(&above, &exact), Ok(GT));
        assert_eq!(cmp.compare(&float, &above), Ok(LT));
        assert_eq!(cmp.compare(&int(i64::MAX), &Value::Float(9.3e18)), Ok(LT));
    }

    #[test]
    fn registered_data_delegates() {
        let cmp = Comparer::default();
        let a = Value::data(Pair::new(1, 2));
        let b = Value::data(Pair::new(1, 3));
        assert_eq!(cmp.compare(&a, &b), Ok(LT));
        assert!(cmp.compare(&a, &int(1)).is_err());
    }

    #[derive(Debug, PartialEq)]
    struct Opaque(u8);

    impl fmt::Display for Opaque {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "Opaque({})", self.0)
        }
    }

    impl crate::types::Data for Opaque {}

    #[test]
    fn unregistered_data_is_equal_to_itself() {
        let cmp = Comparer::default();
        let a = Value::data(Opaque(1));
        assert_eq!(cmp.compare(&a, &a.clone()), Ok(EQ));
        assert_eq!(cmp.compare(&a, &Value::data(Opaque(1))), Ok(EQ));
        assert_eq!(cmp.less_than_or_equal(&a, &a), Ok(true));
    }

    #[test]
    fn distinct_unregistered_data_is_not_orderable() {
        let cmp = Comparer::default();
        let a = Value::data(Opaque(1));
        let b = Value::data(Opaque(2));
        let err = cmp.less_than(&a, &b).unwrap_err();
        assert_eq!(err.origin(), Some(Operation::LessThan));
        assert!(matches!(&err, OrdError::NotOrderable { data_type, .. } if data_type == "Opaque"));
        assert!(!err.to_string().contains("cannot compare"));
    }

    #[test]
    fn empty_registry_rejects_builtins() {
        let cmp = Comparer::new(Arc::new(Registry::new()), CompareConfig::default());
        let a = Value::data(Pair::new(1, 2));
        let b = Value::data(Pair::new(1, 3));
        assert_eq!(cmp.compare(&a, &a), Ok(EQ));
        assert!(cmp.compare(&a, &b).is_err());
    }
}
