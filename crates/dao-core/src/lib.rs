// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Runtime for generic-dao.
//!
//! One generic data-access object performs CRUD and filtered queries for any
//! entity type, deriving SQL from the entity's field registry at call time.
//! Most users depend on `generic-dao`, which re-exports this crate together
//! with `#[derive(Entity)]`.
//!
//! # Overview
//!
//! - [`Entity`] — identifier, field registry and uniform field accessors
//! - [`ChangeSet`] — non-null, non-transient fields of an instance
//! - [`Filtering`] — filters, combinator, pagination and sorting
//! - [`sql`] — predicate compiler and statement builder
//! - [`map_row`] — rebuilds an entity from a result row
//! - [`Executor`] — runs statements; sqlx implementations behind features
//! - [`GenericDao`] — the facade
//!
//! # Module Structure
//!
//! ```text
//! dao-core/src/
//! ├── value.rs       — Value, ToValue / FromValue, JSON helpers
//! ├── field.rs       — FieldDescriptor, FieldKind
//! ├── entity.rs      — Entity trait
//! ├── change_set.rs  — change-set extraction
//! ├── filter.rs      — Operator, Filter, Filtering
//! ├── sql/           — WHERE compiler, statement builder, placeholders
//! ├── row.rs         — Row trait, map_row
//! ├── executor.rs    — Executor trait
//! ├── backend/       — PgExecutor, SqliteExecutor (features)
//! ├── dao.rs         — GenericDao
//! └── error.rs       — DaoError, ConfigError, ValueError
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use dao_core::prelude::*;
//!
//! let dao = GenericDao::<Hotel, _>::new(SqliteExecutor::new(pool));
//! dao.insert(&hotel).await?;
//!
//! let page = dao
//!     .filter(
//!         &Filtering::new()
//!             .like("id", "Hotel%")
//!             .with_sorting("id", SortDirection::Desc)
//!             .with_limit(10)?
//!     )
//!     .await?;
//! ```
//!
//! # Features
//!
//! | Feature | Adds |
//! |---------|------|
//! | `postgres` | `PgExecutor`, `Row` for `PgRow` |
//! | `sqlite` | `SqliteExecutor`, `Row` for `SqliteRow` |

#![warn(missing_docs)]
#![warn(clippy::all)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod change_set;
pub mod dao;
pub mod entity;
pub mod error;
pub mod executor;
pub mod field;
pub mod filter;
pub mod prelude;
pub mod row;
pub mod sql;
pub mod value;

#[cfg(any(feature = "postgres", feature = "sqlite"))]
#[cfg_attr(docsrs, doc(cfg(any(feature = "postgres", feature = "sqlite"))))]
pub mod backend;

#[cfg(test)]
mod testing;

/// Re-export async_trait for executor implementations.
pub use async_trait::async_trait;
#[cfg(feature = "postgres")]
pub use backend::PgExecutor;
#[cfg(feature = "sqlite")]
pub use backend::SqliteExecutor;
#[cfg(any(feature = "postgres", feature = "sqlite"))]
pub use backend::BackendError;
pub use change_set::ChangeSet;
pub use dao::GenericDao;
pub use entity::Entity;
pub use error::{BoxError, ConfigError, DaoError, ValueError};
pub use executor::Executor;
pub use field::{FieldDescriptor, FieldKind};
pub use filter::{Filter, Filtering, LogicalOperator, Operator, Pagination, Sort, SortDirection};
pub use row::{Row, map_row};
pub use sql::{Statement, WhereClause};
pub use value::{FromValue, ToValue, Value};

/// Name of the primary key column every entity table has.
pub const ID_COLUMN: &str = "id";
