// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! The generic DAO facade.
//!
//! One [`GenericDao`] per entity type and table. Every operation derives its
//! SQL from the entity's field registry at call time, hands the statement to
//! the [`Executor`] and maps the rows back.
//!
//! # Operations
//!
//! | Method | SQL | Returns |
//! |--------|-----|---------|
//! | [`insert`](GenericDao::insert) | `INSERT INTO t (...) VALUES (...)` | `()` |
//! | [`get_by_id`](GenericDao::get_by_id) | `SELECT * FROM t WHERE id = ?` | `Option<T>` |
//! | [`filter`](GenericDao::filter) | `SELECT * FROM t [WHERE] [ORDER BY] [LIMIT] [OFFSET]` | `Vec<T>` |
//! | [`count`](GenericDao::count) | `SELECT COUNT(*) FROM t [WHERE]` | `u64` |
//! | [`update`](GenericDao::update) | `UPDATE t SET ... WHERE id = :id` | affected rows |
//! | [`delete`](GenericDao::delete) | `DELETE FROM t WHERE id = ?` | affected rows |
//! | [`list_all`](GenericDao::list_all) | `SELECT * FROM t` | `Vec<T>` |
//! | [`find_where`](GenericDao::find_where) | `SELECT * FROM t WHERE a = :a AND ...` | `Vec<T>` |

use std::{fmt, marker::PhantomData};

use crate::{
    entity::Entity,
    error::DaoError,
    executor::Executor,
    filter::Filtering,
    row::map_row,
    sql::{SqlBuilder, Statement},
    value::Value
};

/// CRUD and filtered queries for entity type `T` over executor `E`.
///
/// Holds no per-call state; share one instance across tasks.
pub struct GenericDao<T, E> {
    executor: E,
    table:    String,
    entity:   PhantomData<fn() -> T>
}

impl<T, E: fmt::Debug> fmt::Debug for GenericDao<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenericDao")
            .field("executor", &self.executor)
            .field("table", &self.table)
            .finish()
    }
}

impl<T: Entity, E: Executor> GenericDao<T, E> {
    /// DAO over `T::TABLE`.
    pub fn new(executor: E) -> Self {
        Self::with_table(executor, T::TABLE)
    }

    /// DAO over an explicit table.
    pub fn with_table(executor: E, table: impl Into<String>) -> Self {
        Self {
            executor,
            table: table.into(),
            entity: PhantomData
        }
    }

    /// Target table.
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Underlying executor.
    pub const fn executor(&self) -> &E {
        &self.executor
    }

    fn sql(&self) -> SqlBuilder<'_> {
        SqlBuilder::new(&self.table).with_dialect(self.executor.dialect())
    }

    /// Insert every non-null, non-transient field of `entity`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::EmptyInsert`](crate::ConfigError::EmptyInsert) for an
    /// entity with nothing to persist, [`DaoError::Execution`] on driver
    /// failure.
    pub async fn insert(&self, entity: &T) -> Result<(), DaoError> {
        let statement = self.sql().insert(entity.changes())?;
        self.execute("insert", &statement).await?;
        Ok(())
    }

    /// Load the row with `id`.
    ///
    /// # Errors
    ///
    /// [`DaoError::Execution`] or [`DaoError::Mapping`].
    pub async fn get_by_id(&self, id: &str) -> Result<Option<T>, DaoError> {
        let statement = self.sql().select_by_id(id);
        log_statement("get_by_id", &self.table, &statement);

        let row = self
            .executor
            .fetch_optional(&statement)
            .await
            .map_err(|err| DaoError::execution("get_by_id", &self.table, err))?;
        row.as_ref().map(map_row).transpose()
    }

    /// Rows matching `filtering`, sorted and paginated as configured.
    ///
    /// # Errors
    ///
    /// [`DaoError::Configuration`] for invalid filters, otherwise
    /// [`DaoError::Execution`] or [`DaoError::Mapping`].
    pub async fn filter(&self, filtering: &Filtering) -> Result<Vec<T>, DaoError> {
        let statement = self.sql().select(filtering)?;
        self.fetch_all("filter", &statement).await
    }

    /// Number of rows matching `filtering`; pagination and sorting are
    /// ignored.
    ///
    /// # Errors
    ///
    /// [`DaoError::Configuration`] or [`DaoError::Execution`].
    pub async fn count(&self, filtering: &Filtering) -> Result<u64, DaoError> {
        let statement = self.sql().count(filtering)?;
        log_statement("count", &self.table, &statement);

        let count = self
            .executor
            .fetch_count(&statement)
            .await
            .map_err(|err| DaoError::execution("count", &self.table, err))?;
        Ok(u64::try_from(count).unwrap_or_default())
    }

    /// Write every non-null field of `entity` except `id` to the row with
    /// `entity.id()`.
    ///
    /// Returns `0` without touching the database when only `id` is set.
    ///
    /// # Errors
    ///
    /// [`DaoError::Execution`] on driver failure.
    pub async fn update(&self, entity: &T) -> Result<u64, DaoError> {
        let Some(statement) = self.sql().update(entity.id(), entity.changes()) else {
            tracing::debug!(table = %self.table, id = entity.id(), "nothing to update");
            return Ok(0);
        };
        self.execute("update", &statement).await
    }

    /// Delete the row with `id`, returning the number of rows removed.
    ///
    /// # Errors
    ///
    /// [`DaoError::Execution`] on driver failure.
    pub async fn delete(&self, id: &str) -> Result<u64, DaoError> {
        let statement = self.sql().delete_by_id(id);
        self.execute("delete", &statement).await
    }

    /// Every row of the table.
    ///
    /// # Errors
    ///
    /// [`DaoError::Execution`] or [`DaoError::Mapping`].
    pub async fn list_all(&self) -> Result<Vec<T>, DaoError> {
        self.filter(&Filtering::new()).await
    }

    /// Rows where every `(column, value)` pair matches by equality.
    ///
    /// ```rust,ignore
    /// let hotels = dao.find_where([("name", "Grand".into()), ("stars", 5.into())]).await?;
    /// ```
    ///
    /// # Errors
    ///
    /// Same as [`filter`](Self::filter).
    pub async fn find_where<I, K>(&self, conditions: I) -> Result<Vec<T>, DaoError>
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>
    {
        let filtering = conditions
            .into_iter()
            .fold(Filtering::new(), |filtering, (name, value)| filtering.eq(name, value));
        self.filter(&filtering).await
    }

    async fn execute(
        &self,
        operation: &'static str,
        statement: &Statement
    ) -> Result<u64, DaoError> {
        log_statement(operation, &self.table, statement);
        self.executor
            .execute(statement)
            .await
            .map_err(|err| DaoError::execution(operation, &self.table, err))
    }

    async fn fetch_all(
        &self,
        operation: &'static str,
        statement: &Statement
    ) -> Result<Vec<T>, DaoError> {
        log_statement(operation, &self.table, statement);
        let rows = self
            .executor
            .fetch_all(statement)
            .await
            .map_err(|err| DaoError::execution(operation, &self.table, err))?;
        rows.iter().map(map_row).collect()
    }
}

fn log_statement(operation: &str, table: &str, statement: &Statement) {
    tracing::debug!(
        operation,
        table,
        sql = %statement.sql,
        params = statement.param_count(),
        "executing statement"
    );
}
