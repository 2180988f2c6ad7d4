// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field definitions and `#[field(...)]` options.
//!
//! ```rust,ignore
//! pub name: Option<String>,      // Text
//!
//! #[field(json)]                 // Json, any serde type
//! pub address: Option<Address>,
//!
//! #[field(transient)]            // not persisted, not read back
//! pub visits: u32,
//! ```

use syn::{Attribute, Field, Ident, Type, ext::IdentExt};

use super::StorageKind;

/// Field definition with its parsed options.
#[derive(Debug)]
pub struct FieldDef {
    /// Field identifier.
    pub ident: Ident,

    /// Field type as written.
    pub ty: Type,

    /// Storage kind; `Json` for JSON fields.
    pub kind: StorageKind,

    /// `#[field(transient)]`.
    pub transient: bool,

    /// `#[field(json)]`.
    pub json: bool
}

impl FieldDef {
    /// Parse a named struct field.
    ///
    /// # Errors
    ///
    /// - tuple struct field
    /// - unknown `#[field(...)]` option
    /// - type without a storage mapping and neither `json` nor `transient`
    pub fn from_field(field: &Field) -> darling::Result<Self> {
        let ident = field.ident.clone().ok_or_else(|| {
            darling::Error::custom("Entity fields must be named").with_span(field)
        })?;

        let mut transient = false;
        let mut json = false;
        for attr in field.attrs.iter().filter(|attr| attr.path().is_ident("field")) {
            parse_field_attr(attr, &mut transient, &mut json)?;
        }

        let kind = if json {
            StorageKind::Json
        } else if let Some(kind) = StorageKind::infer(&field.ty) {
            kind
        } else if transient {
            StorageKind::Text
        } else {
            return Err(darling::Error::custom(
                "unsupported field type; mark the field #[field(json)] or #[field(transient)]"
            )
            .with_span(&field.ty));
        };

        Ok(Self {
            ident,
            ty: field.ty.clone(),
            kind,
            transient,
            json
        })
    }

    /// Column name: the field name without any `r#` prefix.
    #[must_use]
    pub fn name_str(&self) -> String {
        self.ident.unraw().to_string()
    }

    /// Check if this is the identifier field.
    #[must_use]
    pub fn is_id(&self) -> bool {
        self.name_str() == "id"
    }

    /// Check if the field is persisted.
    #[must_use]
    pub fn is_persistent(&self) -> bool {
        !self.transient
    }

    /// Check if the field goes through JSON text.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.json && !self.transient
    }
}

fn parse_field_attr(attr: &Attribute, transient: &mut bool, json: &mut bool) -> syn::Result<()> {
    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("transient") {
            *transient = true;
            Ok(())
        } else if meta.path.is_ident("json") {
            *json = true;
            Ok(())
        } else {
            Err(meta.error("unknown field option; expected `json` or `transient`"))
        }
    })
}
