//! Ordering capability table
//!
//! Maps a [`DataType`] to the comparator it declared. A data type that is not
//! in the table does not implement ordering, and its values cannot be compared.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::data::{List, Pair};
use crate::dispatch::Comparer;
use crate::errors::{OrdError, Result};
use crate::ordering::Ordering;
use crate::types::{DataType, OrdData};
use crate::value::Value;

/// Type-erased comparator for one data type.
pub type Comparator = Arc<dyn Fn(&Comparer, &Value, &Value) -> Result<Ordering> + Send + Sync>;

static DEFAULT_REGISTRY: Lazy<Arc<Registry>> = Lazy::new(|| Arc::new(Registry::with_builtins()));

/// Registry shared by [`Comparer::default`], with the built-in data types.
pub fn default_registry() -> Arc<Registry> {
    Arc::clone(&DEFAULT_REGISTRY)
}

#[derive(Clone, Default)]
pub struct Registry {
    comparators: HashMap<DataType, Comparator>,
}

impl Registry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with [`Pair`] and [`List`] registered.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register::<Pair>().register::<List>();
        registry
    }

    /// Declare that `T` implements ordering through [`OrdData::compare`].
    pub fn register<T: OrdData>(&mut self) -> &mut Self {
        let comparator: Comparator = Arc::new(|comparer: &Comparer, a: &Value, b: &Value| {
            match (a.downcast_ref::<T>(), b.downcast_ref::<T>()) {
                (Some(a), Some(b)) => a.compare(b, comparer),
                _ => Err(OrdError::type_mismatch(a, b, comparer.origin())),
            }
        });
        let data_type = DataType::of::<T>();
        tracing::debug!(%data_type, "registered ordering capability");
        self.comparators.insert(data_type, comparator);
        self
    }

    /// Declare a comparator for `data_type` directly.
    pub fn register_with(&mut self, data_type: DataType, comparator: Comparator) -> &mut Self {
        tracing::debug!(%data_type, "registered ordering capability");
        self.comparators.insert(data_type, comparator);
        self
    }

    /// `implementsOrdering(type)`
    pub fn implements_ordering(&self, data_type: &DataType) -> bool {
        self.comparators.contains_key(data_type)
    }

    pub fn comparator(&self, data_type: &DataType) -> Option<&Comparator> {
        self.comparators.get(data_type)
    }

    pub fn len(&self) -> usize {
        self.comparators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comparators.is_empty()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.comparators.keys()).finish()
    }
}
