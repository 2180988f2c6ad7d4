// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! SQL generation.
//!
//! Everything that turns entities and [`Filtering`](crate::Filtering)s into
//! SQL text lives here, so it can be tested without a database.
//!
//! # Module Structure
//!
//! ```text
//! sql/
//! ├── predicate.rs   — WHERE clause compiler
//! ├── builder.rs     — INSERT / UPDATE / SELECT / COUNT / DELETE statements
//! └── placeholder.rs — named → positional placeholder rewriting per dialect
//! ```
//!
//! # Placeholders
//!
//! Generated SQL uses three neutral placeholder forms:
//!
//! | Form | Meaning |
//! |------|---------|
//! | `:name` | named scalar parameter |
//! | `<name>` | named list parameter, expanded element by element |
//! | `?` | positional parameter |
//!
//! Executors call [`placeholder::bind`] to get dialect-specific SQL and
//! values in binding order.

pub mod builder;
pub mod placeholder;
pub mod predicate;

pub use builder::SqlBuilder;
pub use placeholder::{BindError, BoundStatement, Dialect};
pub use predicate::WhereClause;

use crate::value::Value;

/// SQL text plus its parameter plan.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Statement {
    /// SQL with neutral placeholders.
    pub sql: String,

    /// Named parameters (`:name` and `<name>`).
    pub params: Vec<(String, Value)>,

    /// Positional parameters (`?`), in order.
    pub positional: Vec<Value>
}

impl Statement {
    /// Statement without parameters.
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            ..Self::default()
        }
    }

    /// Add a named parameter.
    #[must_use]
    pub fn bind(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.push((name.into(), value.into()));
        self
    }

    /// Add a positional parameter.
    #[must_use]
    pub fn bind_positional(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Look up a named parameter.
    pub fn param(&self, name: &str) -> Option<&Value> {
        self.params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Total number of parameters.
    pub fn param_count(&self) -> usize {
        self.params.len() + self.positional.len()
    }
}
