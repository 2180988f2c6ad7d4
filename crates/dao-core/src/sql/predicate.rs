// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! WHERE clause compiler.
//!
//! # Rendering
//!
//! | Operator | Fragment |
//! |----------|----------|
//! | `Eq` | `name = :name` |
//! | `NotEq` | `name != :name` |
//! | `Like` | `name LIKE :name` |
//! | `NotLike` | `name NOT LIKE :name` |
//! | `In` | `name IN (<name>)` |
//! | `NotIn` | `name NOT IN (<name>)` |
//!
//! Fragments are joined with the filtering's combinator. No surviving
//! filters means no WHERE clause at all. Values only ever reach the
//! parameter list; the SQL text holds field names and placeholders.

use std::collections::HashSet;

use crate::{
    error::ConfigError,
    filter::{Filter, Filtering, Operator},
    value::Value
};

/// Compiled predicate: condition text (without the `WHERE` keyword) and its
/// named parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WhereClause {
    /// Condition text, empty when nothing filters.
    pub condition: String,

    /// Named parameters referenced by `condition`.
    pub params: Vec<(String, Value)>
}

impl WhereClause {
    /// Compile the filters of `filtering`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::OperatorValueMismatch`] if a filter's value shape does
    /// not fit its operator.
    pub fn compile(filtering: &Filtering) -> Result<Self, ConfigError> {
        let mut taken = HashSet::new();
        let mut fragments = Vec::new();
        let mut params = Vec::new();

        for filter in filtering.filters() {
            filter.check()?;
            let key = placeholder_name(&filter.name, &mut taken);
            fragments.push(render(filter, &key, &mut params));
        }

        let separator = format!(" {} ", filtering.operator().as_sql());
        Ok(Self {
            condition: fragments.join(&separator),
            params
        })
    }

    /// Check if there is no condition.
    pub fn is_empty(&self) -> bool {
        self.condition.is_empty()
    }

    /// ` WHERE <condition>`, or an empty string.
    pub fn to_sql(&self) -> String {
        if self.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", self.condition)
        }
    }
}

fn render(filter: &Filter, key: &str, params: &mut Vec<(String, Value)>) -> String {
    let name = &filter.name;
    let operator = filter.operator;

    if let Value::List(values) = &filter.value {
        if values.is_empty() {
            // IN () is not valid SQL
            return match operator {
                Operator::NotIn => "1 = 1".to_owned(),
                _ => "1 = 0".to_owned()
            };
        }
        params.push((key.to_owned(), filter.value.clone()));
        return format!("{name} {operator} (<{key}>)");
    }

    params.push((key.to_owned(), filter.value.clone()));
    format!("{name} {operator} :{key}")
}

/// Placeholder identifier for a field.
///
/// Characters outside `[A-Za-z0-9_]` become `_`; repeated fields get a
/// numeric suffix so every filter keeps its own value.
fn placeholder_name(field: &str, taken: &mut HashSet<String>) -> String {
    let base: String = field
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    let mut candidate = base.clone();
    let mut suffix = 2;
    while taken.contains(&candidate) {
        candidate = format!("{base}_{suffix}");
        suffix += 1;
    }
    taken.insert(candidate.clone());
    candidate
}
