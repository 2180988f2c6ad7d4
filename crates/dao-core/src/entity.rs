// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! The entity contract.
//!
//! An entity is a record with a string `id` plus any number of named fields.
//! Instead of runtime reflection, every entity exposes:
//!
//! - a static field registry ([`Entity::fields`]),
//! - one uniform accessor pair ([`Entity::get_field`] / [`Entity::set_field`]).
//!
//! `#[derive(Entity)]` writes all of it; manual implementations are fine as
//! long as every persistent descriptor is reachable through both accessors.
//!
//! # Manual Implementation
//!
//! ```rust
//! use dao_core::{Entity, FieldDescriptor, FieldKind, FromValue, ToValue, Value, ValueError};
//!
//! #[derive(Default)]
//! struct Tag {
//!     id:    String,
//!     label: Option<String>
//! }
//!
//! impl Entity for Tag {
//!     const NAME: &'static str = "Tag";
//!     const TABLE: &'static str = "tag";
//!
//!     fn fields() -> &'static [FieldDescriptor] {
//!         const FIELDS: &[FieldDescriptor] = &[
//!             FieldDescriptor::new("id", FieldKind::Text),
//!             FieldDescriptor::new("label", FieldKind::Text)
//!         ];
//!         FIELDS
//!     }
//!
//!     fn id(&self) -> &str {
//!         &self.id
//!     }
//!
//!     fn get_field(&self, name: &str) -> Option<Value> {
//!         match name {
//!             "id" => Some(self.id.to_value()),
//!             "label" => Some(self.label.to_value()),
//!             _ => None
//!         }
//!     }
//!
//!     fn set_field(&mut self, name: &str, value: Value) -> Result<(), ValueError> {
//!         match name {
//!             "id" => self.id = FromValue::from_value(value)?,
//!             "label" => self.label = FromValue::from_value(value)?,
//!             other => return Err(ValueError::UnknownField(other.to_owned()))
//!         }
//!         Ok(())
//!     }
//! }
//!
//! let tag = Tag { id: "t1".into(), label: None };
//! assert_eq!(tag.changes().len(), 1);
//! ```

use crate::{change_set::ChangeSet, error::ValueError, field::FieldDescriptor, value::Value};

/// A persistable record identified by a string `id`.
pub trait Entity: Default + Send + Sync + 'static {
    /// Type name, used in error messages.
    const NAME: &'static str;

    /// Default table name.
    const TABLE: &'static str;

    /// Field registry in declaration order.
    fn fields() -> &'static [FieldDescriptor];

    /// Primary key.
    fn id(&self) -> &str;

    /// Read a persistent field.
    ///
    /// Returns `None` for unknown or transient names and `Some(Value::Null)`
    /// for fields that are currently absent.
    fn get_field(&self, name: &str) -> Option<Value>;

    /// Assign a persistent field.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError`] if the value does not fit the field type or the
    /// name is unknown.
    fn set_field(&mut self, name: &str, value: Value) -> Result<(), ValueError>;

    /// Current non-null, non-transient fields.
    fn changes(&self) -> ChangeSet {
        ChangeSet::from_entity(self)
    }
}
