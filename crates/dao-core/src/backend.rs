// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! sqlx-backed executors.
//!
//! | Feature | Executor | Row |
//! |---------|----------|-----|
//! | `postgres` | [`PgExecutor`] over `sqlx::PgPool` | `sqlx::postgres::PgRow` |
//! | `sqlite` | [`SqliteExecutor`] over `sqlx::SqlitePool` | `sqlx::sqlite::SqliteRow` |
//!
//! JSON fields are stored in text columns.

#[cfg(feature = "postgres")]
mod postgres;
#[cfg(feature = "sqlite")]
mod sqlite;

#[cfg(feature = "postgres")]
pub use postgres::PgExecutor;
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteExecutor;

use sqlx::{Database, Encode, Type, query::Query};
use thiserror::Error;

use crate::{sql::BindError, value::Value};

/// Failure inside a sqlx executor.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The statement could not be rewritten for the driver.
    #[error(transparent)]
    Bind(#[from] BindError),

    /// The driver reported an error.
    #[error(transparent)]
    Database(#[from] sqlx::Error)
}

/// Build a sqlx query with every value bound in order.
fn query<'q, DB>(sql: &'q str, values: Vec<Value>) -> Query<'q, DB, DB::Arguments<'q>>
where
    DB: Database,
    String: Encode<'q, DB> + Type<DB>,
    Option<String>: Encode<'q, DB> + Type<DB>,
    i64: Encode<'q, DB> + Type<DB>,
    f64: Encode<'q, DB> + Type<DB>,
    bool: Encode<'q, DB> + Type<DB>
{
    values
        .into_iter()
        .fold(sqlx::query::<DB>(sql), |query, value| match value.into_storage() {
            Value::Text(text) => query.bind(text),
            Value::Integer(n) => query.bind(n),
            Value::Float(f) => query.bind(f),
            Value::Bool(b) => query.bind(b),
            // lists are expanded by `sql::placeholder::bind`
            Value::Null | Value::Json(_) | Value::List(_) => query.bind(None::<String>)
        })
}
