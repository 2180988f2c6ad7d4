// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field registry metadata.
//!
//! Each entity type declares a static list of [`FieldDescriptor`]s, usually
//! generated by `#[derive(Entity)]`:
//!
//! ```rust,ignore
//! #[derive(Entity, Default)]
//! pub struct Hotel {
//!     pub id: String,                 // FieldDescriptor::new("id", FieldKind::Text)
//!     pub name: Option<String>,       // FieldDescriptor::new("name", FieldKind::Text)
//!     #[field(json)]
//!     pub address: Option<Address>,   // FieldDescriptor::new("address", FieldKind::Json).json()
//!     #[field(transient)]
//!     pub visits: u32,                // ....transient()
//! }
//! ```
//!
//! The list is `&'static`, read-only, and shared by every DAO of that type.

/// Storage type used to read a column back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Character data.
    Text,

    /// Integer of any width.
    Integer,

    /// Floating point.
    Float,

    /// Boolean.
    Boolean,

    /// JSON document stored as text.
    Json
}

impl FieldKind {
    /// Lowercase kind name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Boolean => "boolean",
            Self::Json => "json"
        }
    }
}

/// Static description of one entity field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field and column name (exact, case-sensitive).
    pub name: &'static str,

    /// Storage kind.
    pub kind: FieldKind,

    /// Excluded from change-sets and row mapping.
    pub transient: bool,

    /// Stored as JSON text.
    pub json: bool
}

impl FieldDescriptor {
    /// Plain persisted field.
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            transient: false,
            json: false
        }
    }

    /// Mark as transient.
    #[must_use]
    pub const fn transient(mut self) -> Self {
        self.transient = true;
        self
    }

    /// Mark as JSON-encoded. Also forces the storage kind to [`FieldKind::Json`].
    #[must_use]
    pub const fn json(mut self) -> Self {
        self.json = true;
        self.kind = FieldKind::Json;
        self
    }

    /// Whether the field takes part in persistence at all.
    pub const fn is_persistent(&self) -> bool {
        !self.transient
    }

    /// Whether the value is marshalled through JSON text.
    ///
    /// Always `false` for transient fields.
    pub const fn is_json(&self) -> bool {
        self.json && !self.transient
    }
}
