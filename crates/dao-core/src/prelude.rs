// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! # Usage
//!
//! ```rust,ignore
//! use dao_core::prelude::*;
//! ```

#[cfg(feature = "postgres")]
pub use crate::PgExecutor;
#[cfg(feature = "sqlite")]
pub use crate::SqliteExecutor;
pub use crate::{
    ConfigError, DaoError, Entity, Executor, Filter, Filtering, GenericDao, LogicalOperator,
    Operator, Pagination, SortDirection, Value, async_trait
};
