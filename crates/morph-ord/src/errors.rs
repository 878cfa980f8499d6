//! Error type for ordering operations
//!
//! Comparison fails in two ways: the operands' types are not mutually
//! comparable, or they share a data type that declares no ordering and are
//! not equal. Configuration loading adds a third, unrelated kind.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value::Value;

/// The exported operation a failure originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// `compare`
    Compare,
    /// `lessThan`
    LessThan,
    /// `lessThanOrEqual`
    LessThanOrEqual,
    /// `greaterThan`
    GreaterThan,
    /// `greaterThanOrEqual`
    GreaterThanOrEqual,
    /// `max`
    Max,
    /// `min`
    Min,
}

impl Operation {
    /// Name of the operation as exported.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Compare => "compare",
            Operation::LessThan => "lessThan",
            Operation::LessThanOrEqual => "lessThanOrEqual",
            Operation::GreaterThan => "greaterThan",
            Operation::GreaterThanOrEqual => "greaterThanOrEqual",
            Operation::Max => "max",
            Operation::Min => "min",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error type for all ordering operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum OrdError {
    /// Two values of incompatible types were compared
    #[error(
        "Type mismatch in {origin}: cannot compare {left} ({left_type}) with {right} ({right_type})"
    )]
    TypeMismatch {
        /// Rendering of the left operand
        left: String,
        /// Type of the left operand
        left_type: String,
        /// Rendering of the right operand
        right: String,
        /// Type of the right operand
        right_type: String,
        /// Operation the comparison was requested by
        origin: Operation,
    },

    /// Two values of a data type that declares no ordering were compared
    #[error("No ordering for {data_type} in {origin}: {left} and {right} are distinct but unordered")]
    NotOrderable {
        /// Rendering of the left operand
        left: String,
        /// Rendering of the right operand
        right: String,
        /// The data type shared by both operands
        data_type: String,
        /// Operation the comparison was requested by
        origin: Operation,
    },

    /// Configuration could not be loaded or is inconsistent
    #[error("Invalid configuration: {message}")]
    Config {
        /// Error message describing the configuration problem
        message: String,
    },
}

impl OrdError {
    /// Create a type mismatch error for two operands
    pub fn type_mismatch(left: &Value, right: &Value, origin: Operation) -> Self {
        Self::TypeMismatch {
            left: left.to_string(),
            left_type: left.descriptor().to_string(),
            right: right.to_string(),
            right_type: right.descriptor().to_string(),
            origin,
        }
    }

    /// Create an error for distinct values of an unordered data type
    pub fn not_orderable(left: &Value, right: &Value, origin: Operation) -> Self {
        Self::NotOrderable {
            left: left.to_string(),
            right: right.to_string(),
            data_type: left.descriptor().to_string(),
            origin,
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Operation a comparison failure originated from.
    pub fn origin(&self) -> Option<Operation> {
        match self {
            Self::TypeMismatch { origin, .. } | Self::NotOrderable { origin, .. } => Some(*origin),
            Self::Config { .. } => None,
        }
    }
}

/// Standard Result type for ordering operations
pub type Result<T> = std::result::Result<T, OrdError>;

impl From<toml::de::Error> for OrdError {
    fn from(err: toml::de::Error) -> Self {
        Self::config(err.to_string())
    }
}

impl From<serde_json::Error> for OrdError {
    fn from(err: serde_json::Error) -> Self {
        Self::config(err.to_string())
    }
}
