// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Dynamic storage values.
//!
//! Every value that crosses the boundary between an entity and the database
//! is carried as a [`Value`]. Entities convert their typed fields with
//! [`ToValue`] and [`FromValue`]; filters accept anything that converts
//! `Into<Value>`.
//!
//! # Conversions
//!
//! | Rust type | Value |
//! |-----------|-------|
//! | `String`, `&str` | `Text` |
//! | `i8`..`i64`, `u8`..`u32` | `Integer` |
//! | `f32`, `f64` | `Float` |
//! | `bool` | `Bool` |
//! | `Option<T>` | `Null` or the inner value |
//! | `Vec<T>` | `List` (for `IN` / `NOT IN`) |
//! | any `Serialize` via [`to_json`] | `Json` |

use serde::{Serialize, de::DeserializeOwned};

use crate::error::ValueError;

/// A single value bound to a statement or read from a row.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// SQL `NULL` / absent Rust value.
    Null,

    /// Character data.
    Text(String),

    /// Signed 64-bit integer.
    Integer(i64),

    /// Double precision float.
    Float(f64),

    /// Boolean.
    Bool(bool),

    /// Structured JSON document, stored as JSON text.
    Json(serde_json::Value),

    /// Ordered collection, expanded for `IN` / `NOT IN`.
    List(Vec<Value>)
}

impl Value {
    /// Check if this is `Null`.
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Check if this is a `List`.
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Short lowercase name of the variant, used in error messages.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Text(_) => "text",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Bool(_) => "bool",
            Self::Json(_) => "json",
            Self::List(_) => "list"
        }
    }

    /// Convert into the representation written to a column.
    ///
    /// `Json` becomes its JSON text; everything else is returned unchanged.
    pub fn into_storage(self) -> Self {
        match self {
            Self::Json(json) => Self::Text(json.to_string()),
            other => other
        }
    }
}

/// Read a typed field as a [`Value`].
///
/// Implemented by every field type the `Entity` derive supports natively.
pub trait ToValue {
    /// Convert to a value; absent values return [`Value::Null`].
    fn to_value(&self) -> Value;
}

/// Build a typed field from a [`Value`].
pub trait FromValue: Sized {
    /// Convert from a value.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError`] when the variant does not fit the type.
    fn from_value(value: Value) -> Result<Self, ValueError>;
}

fn mismatch(expected: &'static str, found: &Value) -> ValueError {
    ValueError::TypeMismatch {
        expected,
        found: found.type_name()
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }
}

impl ToValue for str {
    fn to_value(&self) -> Value {
        Value::Text(self.to_owned())
    }
}

impl FromValue for String {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Text(text) => Ok(text),
            Value::Json(json) => Ok(json.to_string()),
            other => Err(mismatch("text", &other))
        }
    }
}

macro_rules! integer_value {
    ($($ty:ty),*) => {
        $(
            impl ToValue for $ty {
                fn to_value(&self) -> Value {
                    Value::Integer(i64::from(*self))
                }
            }

            impl FromValue for $ty {
                fn from_value(value: Value) -> Result<Self, ValueError> {
                    match value {
                        Value::Integer(n) => <$ty>::try_from(n).map_err(|_| ValueError::OutOfRange {
                            value:  n,
                            target: stringify!($ty)
                        }),
                        other => Err(mismatch("integer", &other))
                    }
                }
            }

            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Integer(i64::from(value))
                }
            }
        )*
    };
}

integer_value!(i8, i16, i32, i64, u8, u16, u32);

impl ToValue for f64 {
    fn to_value(&self) -> Value {
        Value::Float(*self)
    }
}

impl ToValue for f32 {
    fn to_value(&self) -> Value {
        Value::Float(f64::from(*self))
    }
}

impl FromValue for f64 {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Float(f) => Ok(f),
            #[allow(clippy::cast_precision_loss)]
            Value::Integer(n) => Ok(n as f64),
            other => Err(mismatch("float", &other))
        }
    }
}

impl FromValue for f32 {
    #[allow(clippy::cast_possible_truncation)]
    fn from_value(value: Value) -> Result<Self, ValueError> {
        f64::from_value(value).map(|f| f as f32)
    }
}

impl ToValue for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl FromValue for bool {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Bool(b) => Ok(b),
            // SQLite has no boolean storage class
            Value::Integer(0) => Ok(false),
            Value::Integer(1) => Ok(true),
            other => Err(mismatch("bool", &other))
        }
    }
}

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Value {
        self.as_ref().map_or(Value::Null, ToValue::to_value)
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Null => Ok(None),
            other => T::from_value(other).map(Some)
        }
    }
}

impl<T: ToValue + ?Sized> ToValue for &T {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

/// Serialize a field into a [`Value::Json`].
///
/// Used by generated code for `#[field(json)]` fields. Values that serialize
/// to JSON `null` become [`Value::Null`] so they are left out of change-sets.
/// A serialization failure is logged and treated as absent.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Value {
    match serde_json::to_value(value) {
        Ok(serde_json::Value::Null) => Value::Null,
        Ok(json) => Value::Json(json),
        Err(err) => {
            tracing::warn!(error = %err, "failed to serialize JSON field, treating it as null");
            Value::Null
        }
    }
}

/// Deserialize a field from a [`Value::Json`] or JSON text.
///
/// # Errors
///
/// Returns [`ValueError::Json`] if the text is not valid JSON or does not
/// match `T`, and [`ValueError::TypeMismatch`] for non-JSON variants.
pub fn from_json<T: DeserializeOwned>(value: Value) -> Result<T, ValueError> {
    let json = match value {
        Value::Json(json) => json,
        Value::Text(text) => serde_json::from_str(&text)?,
        Value::Null => serde_json::Value::Null,
        other => return Err(mismatch("json", &other))
    };
    Ok(serde_json::from_value(json)?)
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        Self::Json(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value> + Clone> From<&[T]> for Value {
    fn from(values: &[T]) -> Self {
        Self::List(values.iter().cloned().map(Into::into).collect())
    }
}
