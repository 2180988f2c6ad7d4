// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Change-set extraction.
//!
//! A [`ChangeSet`] is the column → value mapping INSERT and UPDATE are built
//! from. It holds every field that is not transient and not currently null,
//! in registry order, with JSON fields already turned into JSON text.

use crate::{entity::Entity, value::Value};

/// Ordered column → value mapping with no null values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChangeSet {
    entries: Vec<(&'static str, Value)>
}

impl ChangeSet {
    /// Walk the field registry of `entity`.
    pub fn from_entity<T: Entity>(entity: &T) -> Self {
        let entries = T::fields()
            .iter()
            .filter(|field| field.is_persistent())
            .filter_map(|field| {
                let value = entity.get_field(field.name)?;
                if value.is_null() {
                    return None;
                }
                let value = if field.is_json() {
                    value.into_storage()
                } else {
                    value
                };
                Some((field.name, value))
            })
            .collect();

        Self {
            entries
        }
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no column is set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a column value.
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(name, _)| *name == column)
            .map(|(_, value)| value)
    }

    /// Check if a column is present.
    pub fn contains(&self, column: &str) -> bool {
        self.get(column).is_some()
    }

    /// Remove a column, returning its value.
    pub fn remove(&mut self, column: &str) -> Option<Value> {
        let index = self.entries.iter().position(|(name, _)| *name == column)?;
        Some(self.entries.remove(index).1)
    }

    /// Column names in order.
    pub fn columns(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    /// Column/value pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Value)> {
        self.entries.iter().map(|(name, value)| (*name, value))
    }
}

impl IntoIterator for ChangeSet {
    type Item = (&'static str, Value);
    type IntoIter = std::vec::IntoIter<(&'static str, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
