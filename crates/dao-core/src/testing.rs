// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Fixtures for unit tests: a hand-written entity, an in-memory row and a
//! recording executor.

use std::{collections::HashMap, sync::Mutex};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{
    entity::Entity,
    error::{BoxError, ValueError},
    executor::Executor,
    field::{FieldDescriptor, FieldKind},
    row::Row,
    sql::{Dialect, Statement},
    value::{FromValue, ToValue, Value, from_json, to_json}
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub city: String
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Hotel {
    pub id:      String,
    pub name:    Option<String>,
    pub stars:   Option<i32>,
    pub rating:  Option<f64>,
    pub open:    Option<bool>,
    pub address: Option<Address>,
    pub visits:  u32
}

impl Entity for Hotel {
    const NAME: &'static str = "Hotel";
    const TABLE: &'static str = "hotel";

    fn fields() -> &'static [FieldDescriptor] {
        const FIELDS: &[FieldDescriptor] = &[
            FieldDescriptor::new("id", FieldKind::Text),
            FieldDescriptor::new("name", FieldKind::Text),
            FieldDescriptor::new("stars", FieldKind::Integer),
            FieldDescriptor::new("rating", FieldKind::Float),
            FieldDescriptor::new("open", FieldKind::Boolean),
            FieldDescriptor::new("address", FieldKind::Json).json(),
            FieldDescriptor::new("visits", FieldKind::Integer).transient()
        ];
        FIELDS
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn get_field(&self, name: &str) -> Option<Value> {
        match name {
            "id" => Some(self.id.to_value()),
            "name" => Some(self.name.to_value()),
            "stars" => Some(self.stars.to_value()),
            "rating" => Some(self.rating.to_value()),
            "open" => Some(self.open.to_value()),
            "address" => Some(to_json(&self.address)),
            _ => None
        }
    }

    fn set_field(&mut self, name: &str, value: Value) -> Result<(), ValueError> {
        match name {
            "id" => self.id = FromValue::from_value(value)?,
            "name" => self.name = FromValue::from_value(value)?,
            "stars" => self.stars = FromValue::from_value(value)?,
            "rating" => self.rating = FromValue::from_value(value)?,
            "open" => self.open = FromValue::from_value(value)?,
            "address" => self.address = from_json(value)?,
            other => return Err(ValueError::UnknownField(other.to_owned()))
        }
        Ok(())
    }
}

/// Row backed by a map; the requested kind is ignored.
#[derive(Debug, Clone, Default)]
pub struct MapRow {
    columns: HashMap<String, Value>
}

impl MapRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.columns.insert(column.to_owned(), value.into());
        self
    }
}

impl Row for MapRow {
    fn read(&self, column: &str, _kind: FieldKind) -> Result<Value, BoxError> {
        self.columns
            .get(column)
            .cloned()
            .ok_or_else(|| format!("no such column: {column}").into())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("connection refused")]
pub struct ConnectionRefused;

/// Records every statement and answers with canned rows.
#[derive(Debug, Default)]
pub struct RecordingExecutor {
    statements: Mutex<Vec<Statement>>,
    rows:       Vec<MapRow>,
    affected:   u64,
    fail:       bool,
    dialect:    Dialect
}

impl RecordingExecutor {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn with_rows(mut self, rows: Vec<MapRow>) -> Self {
        self.rows = rows;
        self
    }

    pub fn with_affected(mut self, affected: u64) -> Self {
        self.affected = affected;
        self
    }

    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    pub fn statements(&self) -> Vec<Statement> {
        self.statements.lock().unwrap().clone()
    }

    fn record(&self, statement: &Statement) -> Result<(), ConnectionRefused> {
        self.statements.lock().unwrap().push(statement.clone());
        if self.fail { Err(ConnectionRefused) } else { Ok(()) }
    }
}

#[async_trait]
impl Executor for RecordingExecutor {
    type Row = MapRow;
    type Error = ConnectionRefused;

    fn dialect(&self) -> Dialect {
        self.dialect
    }

    async fn execute(&self, statement: &Statement) -> Result<u64, Self::Error> {
        self.record(statement)?;
        Ok(self.affected)
    }

    async fn fetch_all(&self, statement: &Statement) -> Result<Vec<MapRow>, Self::Error> {
        self.record(statement)?;
        Ok(self.rows.clone())
    }

    async fn fetch_optional(&self, statement: &Statement) -> Result<Option<MapRow>, Self::Error> {
        self.record(statement)?;
        Ok(self.rows.first().cloned())
    }

    async fn fetch_count(&self, statement: &Statement) -> Result<i64, Self::Error> {
        self.record(statement)?;
        Ok(self.rows.len() as i64)
    }
}
