// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Row reconstruction.
//!
//! [`map_row`] rebuilds an entity from one result row: it starts from
//! `T::default()` and assigns every persistent field through
//! [`Entity::set_field`].
//!
//! | Column state | Result |
//! |--------------|--------|
//! | absent / unreadable | field keeps its default (trace log) |
//! | `NULL` | field keeps its default |
//! | JSON text that does not parse | [`DaoError::Mapping`] |
//! | value the field cannot accept | [`DaoError::Mapping`] |

use crate::{
    entity::Entity,
    error::{BoxError, DaoError, ValueError},
    field::{FieldDescriptor, FieldKind},
    value::Value
};

/// One result row, read column by column.
pub trait Row {
    /// Read `column` as `kind`.
    ///
    /// `Json` columns may be returned as [`Value::Text`]; the mapper decodes
    /// them. SQL `NULL` is [`Value::Null`].
    ///
    /// # Errors
    ///
    /// Any driver error, including a missing column.
    fn read(&self, column: &str, kind: FieldKind) -> Result<Value, BoxError>;
}

/// Build an entity from `row`.
///
/// # Errors
///
/// [`DaoError::Mapping`] when a column value cannot be assigned.
pub fn map_row<T, R>(row: &R) -> Result<T, DaoError>
where
    T: Entity,
    R: Row + ?Sized
{
    let mut entity = T::default();

    for field in T::fields().iter().filter(|field| field.is_persistent()) {
        let value = match row.read(field.name, field.kind) {
            Ok(value) => value,
            Err(err) => {
                tracing::trace!(
                    entity = T::NAME,
                    field = field.name,
                    kind = field.kind.as_str(),
                    error = %err,
                    "column not readable, keeping default"
                );
                continue;
            }
        };
        if value.is_null() {
            continue;
        }

        decode(field, value)
            .and_then(|value| entity.set_field(field.name, value))
            .map_err(|source| DaoError::Mapping {
                entity: T::NAME,
                field: field.name,
                source
            })?;
    }

    Ok(entity)
}

fn decode(field: &FieldDescriptor, value: Value) -> Result<Value, ValueError> {
    if !field.is_json() {
        return Ok(value);
    }
    match value {
        Value::Text(text) => Ok(Value::Json(serde_json::from_str(&text)?)),
        json @ Value::Json(_) => Ok(json),
        other => Err(ValueError::TypeMismatch {
            expected: "json",
            found:    other.type_name()
        })
    }
}
