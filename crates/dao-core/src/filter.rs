// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Filter predicates and the [`Filtering`] builder.
//!
//! # Overview
//!
//! - [`Operator`] — comparison / membership / pattern operator
//! - [`Filter`] — one `(field, operator, value)` predicate
//! - [`LogicalOperator`] — `AND` / `OR`, applied between all filters
//! - [`Filtering`] — filters plus pagination and sorting
//!
//! # Trust Boundary
//!
//! Field names are written into SQL as-is. Values are always bound as
//! parameters, but **never** build a field name from user input.
//!
//! # Example
//!
//! ```rust
//! use dao_core::{Filtering, LogicalOperator, SortDirection};
//!
//! let filtering = Filtering::new()
//!     .like("id", "Hotel%")
//!     .is_in("city", vec!["Girne", "Magusa"])
//!     .with_operator(LogicalOperator::Or)
//!     .with_sorting("id", SortDirection::Desc)
//!     .with_limit(10)?
//!     .with_offset(20)?;
//!
//! assert_eq!(filtering.filters().count(), 2);
//! assert_eq!(filtering.limit(), Some(10));
//! # Ok::<(), dao_core::ConfigError>(())
//! ```

use std::{fmt, str::FromStr};

use crate::{error::ConfigError, value::Value};

/// Predicate operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `field = value`
    Eq,

    /// `field != value`
    NotEq,

    /// `field LIKE pattern`
    Like,

    /// `field NOT LIKE pattern`
    NotLike,

    /// `field IN (values...)`
    In,

    /// `field NOT IN (values...)`
    NotIn
}

impl Operator {
    /// SQL spelling of the operator.
    pub const fn as_sql(&self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::NotEq => "!=",
            Self::Like => "LIKE",
            Self::NotLike => "NOT LIKE",
            Self::In => "IN",
            Self::NotIn => "NOT IN"
        }
    }

    /// Whether the operator takes a list value.
    pub const fn takes_list(&self) -> bool {
        matches!(self, Self::In | Self::NotIn)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

impl FromStr for Operator {
    type Err = ConfigError;

    /// Parse an operator name.
    ///
    /// Accepts SQL spellings (`=`, `!=`, `<>`, `NOT LIKE`, ...) and names
    /// (`eq`, `not_eq`, `NotIn`, ...), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "=" | "eq" => Ok(Self::Eq),
            "!=" | "<>" | "ne" | "noteq" => Ok(Self::NotEq),
            "like" => Ok(Self::Like),
            "notlike" => Ok(Self::NotLike),
            "in" => Ok(Self::In),
            "notin" => Ok(Self::NotIn),
            _ => Err(ConfigError::UnsupportedOperator(s.to_owned()))
        }
    }
}

/// Combinator applied uniformly between all filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LogicalOperator {
    /// Every filter must match.
    #[default]
    And,

    /// Any filter may match.
    Or
}

impl LogicalOperator {
    /// SQL keyword.
    pub const fn as_sql(&self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR"
        }
    }
}

/// Sort direction for ordered queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Ascending order (A-Z, 0-9, oldest first).
    #[default]
    Asc,

    /// Descending order (Z-A, 9-0, newest first).
    Desc
}

impl SortDirection {
    /// Convert to SQL keyword.
    pub const fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC"
        }
    }
}

/// `ORDER BY` specification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    /// Column to sort by.
    pub field:     String,
    /// Direction.
    pub direction: SortDirection
}

/// Pagination parameters.
///
/// # Example
///
/// ```rust
/// use dao_core::Pagination;
///
/// let page = Pagination::new(10, 0); // First 10 items
/// let next = Pagination::page(1, 10); // offset=10, limit=10
/// assert_eq!(next.offset, 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Maximum number of results to return.
    pub limit: i64,

    /// Number of results to skip.
    pub offset: i64
}

impl Pagination {
    /// Create new pagination parameters.
    pub const fn new(limit: i64, offset: i64) -> Self {
        Self {
            limit,
            offset
        }
    }

    /// Create pagination for a specific page (0-indexed).
    ///
    /// The offset saturates at `i64::MIN` / `i64::MAX`.
    pub const fn page(page: i64, per_page: i64) -> Self {
        Self {
            limit:  per_page,
            offset: page.saturating_mul(per_page)
        }
    }
}

/// One predicate: `name <operator> value`.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    /// Column name, written into SQL verbatim.
    pub name:     String,
    /// Operator.
    pub operator: Operator,
    /// Comparison value; a `List` for `In` / `NotIn`.
    pub value:    Value
}

impl Filter {
    /// Create a filter.
    pub fn new(name: impl Into<String>, operator: Operator, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            operator,
            value: value.into()
        }
    }

    /// A filter takes part in a query only with a non-blank name and a
    /// non-null value.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && !self.value.is_null()
    }

    /// Check that the value shape fits the operator.
    ///
    /// # Errors
    ///
    /// [`ConfigError::OperatorValueMismatch`] for a list operator with a
    /// scalar value or a nested list, or a scalar operator with a list.
    pub fn check(&self) -> Result<(), ConfigError> {
        let expected = match (self.operator.takes_list(), &self.value) {
            (true, Value::List(items)) if items.iter().any(Value::is_list) => {
                "requires a list of scalar values"
            }
            (true, Value::List(_)) => return Ok(()),
            (true, _) => "requires a list value",
            (false, Value::List(_)) => "does not accept a list value",
            (false, _) => return Ok(())
        };
        Err(ConfigError::OperatorValueMismatch {
            field: self.name.clone(),
            operator: self.operator,
            expected
        })
    }
}

/// Query configuration: filters, combinator, pagination and sorting.
///
/// Consuming builder; `with_offset` / `with_limit` reject negative values
/// immediately.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filtering {
    filters:  Vec<Filter>,
    operator: LogicalOperator,
    offset:   Option<u64>,
    limit:    Option<u64>,
    sort:     Option<Sort>
}

impl Filtering {
    /// Empty configuration: matches every row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a predicate.
    #[must_use]
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Add a predicate with an operator given by name.
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnsupportedOperator`] if `operator` is not recognized.
    pub fn with(
        self,
        name: impl Into<String>,
        operator: &str,
        value: impl Into<Value>
    ) -> Result<Self, ConfigError> {
        let operator = operator.parse()?;
        Ok(self.with_filter(Filter::new(name, operator, value)))
    }

    /// `name = value`
    #[must_use]
    pub fn eq(self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.with_filter(Filter::new(name, Operator::Eq, value))
    }

    /// `name != value`
    #[must_use]
    pub fn not_eq(self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.with_filter(Filter::new(name, Operator::NotEq, value))
    }

    /// `name LIKE pattern`
    #[must_use]
    pub fn like(self, name: impl Into<String>, pattern: impl Into<Value>) -> Self {
        self.with_filter(Filter::new(name, Operator::Like, pattern))
    }

    /// `name NOT LIKE pattern`
    #[must_use]
    pub fn not_like(self, name: impl Into<String>, pattern: impl Into<Value>) -> Self {
        self.with_filter(Filter::new(name, Operator::NotLike, pattern))
    }

    /// `name IN (values...)`
    #[must_use]
    pub fn is_in<I, V>(self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>
    {
        let list = Value::List(values.into_iter().map(Into::into).collect());
        self.with_filter(Filter::new(name, Operator::In, list))
    }

    /// `name NOT IN (values...)`
    #[must_use]
    pub fn not_in<I, V>(self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>
    {
        let list = Value::List(values.into_iter().map(Into::into).collect());
        self.with_filter(Filter::new(name, Operator::NotIn, list))
    }

    /// Set the combinator used between filters.
    #[must_use]
    pub fn with_operator(mut self, operator: LogicalOperator) -> Self {
        self.operator = operator;
        self
    }

    /// Skip the first `offset` rows.
    ///
    /// # Errors
    ///
    /// [`ConfigError::NegativeOffset`] if `offset < 0`.
    pub fn with_offset(mut self, offset: i64) -> Result<Self, ConfigError> {
        self.offset = Some(u64::try_from(offset).map_err(|_| ConfigError::NegativeOffset(offset))?);
        Ok(self)
    }

    /// Return at most `limit` rows.
    ///
    /// # Errors
    ///
    /// [`ConfigError::NegativeLimit`] if `limit < 0`.
    pub fn with_limit(mut self, limit: i64) -> Result<Self, ConfigError> {
        self.limit = Some(u64::try_from(limit).map_err(|_| ConfigError::NegativeLimit(limit))?);
        Ok(self)
    }

    /// Set limit and offset at once.
    ///
    /// # Errors
    ///
    /// Same as [`with_limit`](Self::with_limit) and
    /// [`with_offset`](Self::with_offset).
    pub fn with_pagination(self, pagination: Pagination) -> Result<Self, ConfigError> {
        self.with_limit(pagination.limit)?.with_offset(pagination.offset)
    }

    /// Sort by `field`.
    #[must_use]
    pub fn with_sorting(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.sort = Some(Sort {
            field: field.into(),
            direction
        });
        self
    }

    /// Copy with pagination and sorting removed; the filters and combinator
    /// are kept.
    #[must_use]
    pub fn without_pagination(&self) -> Self {
        Self {
            filters:  self.filters.clone(),
            operator: self.operator,
            offset:   None,
            limit:    None,
            sort:     None
        }
    }

    /// Filters that take part in the query (blank names and null values
    /// dropped).
    pub fn filters(&self) -> impl Iterator<Item = &Filter> {
        self.filters.iter().filter(|filter| filter.is_valid())
    }

    /// Every filter added, including invalid ones.
    pub fn all_filters(&self) -> &[Filter] {
        &self.filters
    }

    /// Combinator.
    pub const fn operator(&self) -> LogicalOperator {
        self.operator
    }

    /// Offset, if set.
    pub const fn offset(&self) -> Option<u64> {
        self.offset
    }

    /// Limit, if set.
    pub const fn limit(&self) -> Option<u64> {
        self.limit
    }

    /// Sort specification, if set.
    pub const fn sort(&self) -> Option<&Sort> {
        self.sort.as_ref()
    }
}
