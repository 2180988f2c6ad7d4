// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Placeholder rewriting.
//!
//! Turns a [`Statement`] with neutral placeholders into driver SQL and a flat
//! list of values in binding order.
//!
//! | Neutral | Postgres | SQLite |
//! |---------|----------|--------|
//! | `:name` | `$n` | `?` |
//! | `<name>` with 3 elements | `$n, $n+1, $n+2` | `?, ?, ?` |
//! | `?` | `$n` | `?` |
//!
//! Text inside single-quoted literals and `::` casts is left alone.
//!
//! [`Dialect::limit_offset`] renders the pagination tail, which differs
//! between the two engines when only an offset is set.

use std::{iter::Peekable, str::CharIndices};

use thiserror::Error;

use super::Statement;
use crate::value::Value;

/// Target SQL dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dialect {
    /// Numbered `$1, $2, ...`.
    #[default]
    Postgres,

    /// Anonymous `?`.
    Sqlite
}

impl Dialect {
    fn placeholder(self, index: usize) -> String {
        match self {
            Self::Postgres => format!("${index}"),
            Self::Sqlite => "?".to_owned()
        }
    }

    /// ` LIMIT n OFFSET m` tail of a select, each part only when set.
    ///
    /// SQLite accepts `OFFSET` only after a `LIMIT`, so an offset alone is
    /// rendered as `LIMIT -1 OFFSET m` there.
    pub fn limit_offset(self, limit: Option<u64>, offset: Option<u64>) -> String {
        let mut sql = String::new();
        match (limit, offset, self) {
            (Some(limit), _, _) => sql.push_str(&format!(" LIMIT {limit}")),
            (None, Some(_), Self::Sqlite) => sql.push_str(" LIMIT -1"),
            _ => {}
        }
        if let Some(offset) = offset {
            sql.push_str(&format!(" OFFSET {offset}"));
        }
        sql
    }
}

/// Driver-ready SQL and its values in binding order.
///
/// Every value is a scalar: lists are expanded and JSON is already text.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundStatement {
    /// SQL in the target dialect.
    pub sql:    String,
    /// Scalar values, one per placeholder.
    pub values: Vec<Value>
}

/// Placeholder rewriting failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    /// `:name` or `<name>` has no parameter.
    #[error("no value bound for parameter `{0}`")]
    MissingParameter(String),

    /// More `?` than positional values.
    #[error("no value bound for positional parameter {0}")]
    MissingPositional(usize),

    /// `<name>` bound to a scalar.
    #[error("parameter `{0}` is used as a list but bound to a scalar")]
    ExpectedList(String),

    /// `:name` bound to a list, or a list nested in a list.
    #[error("parameter `{0}` is used as a scalar but bound to a list")]
    UnexpectedList(String),

    /// `<name>` bound to an empty list.
    #[error("list parameter `{0}` is empty")]
    EmptyList(String)
}

/// Rewrite `statement` for `dialect`.
///
/// # Errors
///
/// Returns [`BindError`] when a placeholder has no matching value or the
/// value shape does not fit the placeholder.
pub fn bind(statement: &Statement, dialect: Dialect) -> Result<BoundStatement, BindError> {
    let source = statement.sql.as_str();
    let mut sql = String::with_capacity(source.len());
    let mut values = Vec::with_capacity(statement.param_count());
    let mut positional = statement.positional.iter();
    let mut positional_index = 0;
    let mut chars = source.char_indices().peekable();

    let mut push = |sql: &mut String, value: &Value| {
        values.push(value.clone().into_storage());
        sql.push_str(&dialect.placeholder(values.len()));
    };

    while let Some((_, c)) = chars.next() {
        match c {
            '\'' => {
                sql.push(c);
                for (_, inner) in chars.by_ref() {
                    sql.push(inner);
                    if inner == '\'' {
                        break;
                    }
                }
            }
            ':' if chars.peek().is_some_and(|(_, next)| *next == ':') => {
                sql.push_str("::");
                chars.next();
            }
            ':' if chars.peek().is_some_and(|(_, next)| is_ident(*next)) => {
                let name = take_ident(&mut chars);
                match lookup(statement, &name)? {
                    Value::List(_) => return Err(BindError::UnexpectedList(name)),
                    value => push(&mut sql, value)
                }
            }
            '<' => match list_name(source, &chars) {
                Some(name) => {
                    for _ in 0..=name.len() {
                        chars.next();
                    }
                    let Value::List(items) = lookup(statement, name)? else {
                        return Err(BindError::ExpectedList(name.to_owned()));
                    };
                    if items.is_empty() {
                        return Err(BindError::EmptyList(name.to_owned()));
                    }
                    for (i, item) in items.iter().enumerate() {
                        if item.is_list() {
                            return Err(BindError::UnexpectedList(name.to_owned()));
                        }
                        if i > 0 {
                            sql.push_str(", ");
                        }
                        push(&mut sql, item);
                    }
                }
                None => sql.push(c)
            },
            '?' => {
                positional_index += 1;
                let value = positional
                    .next()
                    .ok_or(BindError::MissingPositional(positional_index))?;
                push(&mut sql, value);
            }
            _ => sql.push(c)
        }
    }

    Ok(BoundStatement {
        sql,
        values
    })
}

fn is_ident(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn take_ident(chars: &mut Peekable<CharIndices<'_>>) -> String {
    let mut name = String::new();
    while let Some((_, c)) = chars.next_if(|(_, c)| is_ident(*c)) {
        name.push(c);
    }
    name
}

/// Name of a `<name>` placeholder starting right after the `<` at the
/// iterator position, if the text there is one.
fn list_name<'s>(source: &'s str, chars: &Peekable<CharIndices<'_>>) -> Option<&'s str> {
    let start = chars.clone().peek()?.0;
    let rest = &source[start..];
    let end = rest.find(|c: char| !is_ident(c))?;
    (end > 0 && rest[end..].starts_with('>')).then(|| &rest[..end])
}

fn lookup<'a>(statement: &'a Statement, name: &str) -> Result<&'a Value, BindError> {
    statement
        .param(name)
        .ok_or_else(|| BindError::MissingParameter(name.to_owned()))
}
