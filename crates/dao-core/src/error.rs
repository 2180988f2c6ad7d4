// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Error types.
//!
//! | Error | Raised when | Recovered? |
//! |-------|-------------|------------|
//! | [`ConfigError`] | Building a query (negative pagination, bad operator) | No, before SQL runs |
//! | [`DaoError::Execution`] | The executor fails | No, never retried |
//! | [`DaoError::Mapping`] | A row cannot become an entity | No |
//! | [`ValueError`] | A value does not fit a field type | Becomes `Mapping` |
//!
//! Column reads that fail for a single field (for example a column missing
//! from the result set) are not errors at all: the field keeps its default.

use std::error::Error as StdError;

use thiserror::Error;

use crate::filter::Operator;

/// Boxed executor error.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Invalid query configuration, detected before any statement executes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `offset` was negative.
    #[error("offset cannot be negative: {0}")]
    NegativeOffset(i64),

    /// `limit` was negative.
    #[error("limit cannot be negative: {0}")]
    NegativeLimit(i64),

    /// An operator name did not match any known operator.
    #[error("unsupported operator: {0}")]
    UnsupportedOperator(String),

    /// A list operator got a scalar, or a scalar operator got a list.
    #[error("operator {operator} on field `{field}` {expected}")]
    OperatorValueMismatch {
        /// Filtered field name.
        field:    String,
        /// Operator used.
        operator: Operator,
        /// What the operator needs.
        expected: &'static str
    },

    /// Insert attempted with an empty change-set.
    #[error("entity has no persistable fields to insert into table {table}")]
    EmptyInsert {
        /// Target table.
        table: String
    }
}

/// Conversion failure between a [`Value`](crate::Value) and a Rust type.
#[derive(Debug, Error)]
pub enum ValueError {
    /// The value variant does not fit the target type.
    #[error("expected {expected} value, found {found}")]
    TypeMismatch {
        /// Expected variant.
        expected: &'static str,
        /// Actual variant.
        found:    &'static str
    },

    /// Integer does not fit the target width.
    #[error("integer {value} out of range for {target}")]
    OutOfRange {
        /// Source integer.
        value:  i64,
        /// Target type name.
        target: &'static str
    },

    /// JSON text could not be decoded.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// No persistable field with this name exists on the entity.
    #[error("unknown field `{0}`")]
    UnknownField(String)
}

/// Error returned by every [`GenericDao`](crate::GenericDao) operation.
#[derive(Debug, Error)]
pub enum DaoError {
    /// Query configuration is invalid.
    #[error(transparent)]
    Configuration(#[from] ConfigError),

    /// The executor reported a failure.
    #[error("error executing {operation} against table {table}: {source}")]
    Execution {
        /// Operation name (`insert`, `filter`, ...).
        operation: &'static str,
        /// Target table.
        table:     String,
        /// Underlying executor error.
        #[source]
        source:    BoxError
    },

    /// A result row could not be mapped into the entity type.
    #[error("failed to map row into {entity} (field `{field}`): {source}")]
    Mapping {
        /// Entity type name.
        entity: &'static str,
        /// Field being assigned.
        field:  &'static str,
        /// Underlying conversion error.
        #[source]
        source: ValueError
    }
}

impl DaoError {
    /// Wrap an executor error with table context.
    pub fn execution<E>(operation: &'static str, table: &str, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static
    {
        Self::Execution {
            operation,
            table: table.to_owned(),
            source: Box::new(source)
        }
    }

    /// Check if this is a configuration error.
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    /// Check if this is an execution error.
    pub const fn is_execution(&self) -> bool {
        matches!(self, Self::Execution { .. })
    }

    /// Check if this is a mapping error.
    pub const fn is_mapping(&self) -> bool {
        matches!(self, Self::Mapping { .. })
    }
}
