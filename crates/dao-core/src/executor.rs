// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Statement execution.
//!
//! The DAO never talks to a driver directly. It hands [`Statement`]s to an
//! [`Executor`] and gets rows or counts back. Enable the `postgres` or
//! `sqlite` feature for sqlx-backed implementations.

use std::error::Error as StdError;

use async_trait::async_trait;

use crate::{
    row::Row,
    sql::{Dialect, Statement}
};

/// Runs statements against a database.
///
/// Implementations own their connection handling; every call borrows a
/// connection only for its own duration.
#[async_trait]
pub trait Executor: Send + Sync {
    /// Row type returned by queries.
    type Row: Row + Send;

    /// Driver error.
    type Error: StdError + Send + Sync + 'static;

    /// SQL dialect the statements are rendered for.
    fn dialect(&self) -> Dialect;

    /// Run an INSERT / UPDATE / DELETE, returning the affected row count.
    async fn execute(&self, statement: &Statement) -> Result<u64, Self::Error>;

    /// Run a query, returning every row.
    async fn fetch_all(&self, statement: &Statement) -> Result<Vec<Self::Row>, Self::Error>;

    /// Run a query, returning the first row if any.
    async fn fetch_optional(&self, statement: &Statement)
    -> Result<Option<Self::Row>, Self::Error>;

    /// Run a single-value aggregate such as `COUNT(*)`.
    async fn fetch_count(&self, statement: &Statement) -> Result<i64, Self::Error>;
}
