// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Parsed entity definition.

use convert_case::{Case, Casing};
use darling::FromDeriveInput;
use syn::{DeriveInput, Generics, Ident};

use super::{EntityAttrs, FieldDef, StorageKind};
use crate::utils::types::option_inner;

/// Complete parsed entity definition passed to every generator.
#[derive(Debug)]
pub struct EntityDef {
    /// Struct identifier (e.g., `Hotel`).
    pub ident: Ident,

    /// Struct generics.
    pub generics: Generics,

    /// Table name.
    pub table: String,

    /// Runtime crate path used in generated code.
    pub krate: syn::Path,

    /// Fields in declaration order.
    pub fields: Vec<FieldDef>,

    id_field_index: usize
}

impl EntityDef {
    /// Parse entity definition from syn's `DeriveInput`.
    ///
    /// # Errors
    ///
    /// - applied to an enum, union, tuple or unit struct
    /// - unknown `#[entity(...)]` key
    /// - any field error (see [`FieldDef::from_field`])
    /// - no `id` field, or `id` not a plain persisted `String`
    pub fn from_derive_input(input: &DeriveInput) -> darling::Result<Self> {
        let attrs = EntityAttrs::from_derive_input(input)?;

        let fields: Vec<FieldDef> = match &input.data {
            syn::Data::Struct(data) => match &data.fields {
                syn::Fields::Named(named) => named
                    .named
                    .iter()
                    .map(FieldDef::from_field)
                    .collect::<darling::Result<Vec<_>>>()?,
                _ => {
                    return Err(darling::Error::custom("Entity requires named fields")
                        .with_span(&input.ident));
                }
            },
            _ => {
                return Err(
                    darling::Error::custom("Entity can only be derived for structs")
                        .with_span(&input.ident)
                );
            }
        };

        let id_field_index = fields.iter().position(FieldDef::is_id).ok_or_else(|| {
            darling::Error::custom("Entity must have an `id: String` field")
                .with_span(&input.ident)
        })?;
        validate_id(&fields[id_field_index])?;

        let table = attrs
            .table
            .unwrap_or_else(|| attrs.ident.to_string().to_case(Case::Snake));

        Ok(Self {
            ident: attrs.ident,
            generics: attrs.generics,
            table,
            krate: attrs.krate,
            fields,
            id_field_index
        })
    }

    /// Struct name as a string.
    #[must_use]
    pub fn name_str(&self) -> String {
        self.ident.to_string()
    }

    /// The `id` field.
    #[must_use]
    pub fn id_field(&self) -> &FieldDef {
        &self.fields[self.id_field_index]
    }

    /// Fields that are persisted, in declaration order.
    pub fn persistent_fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.iter().filter(|field| field.is_persistent())
    }
}

fn validate_id(field: &FieldDef) -> darling::Result<()> {
    if field.transient || field.json {
        return Err(
            darling::Error::custom("`id` cannot be transient or json").with_span(&field.ident)
        );
    }
    if field.kind != StorageKind::Text || option_inner(&field.ty).is_some() {
        return Err(darling::Error::custom("`id` must be of type `String`").with_span(&field.ty));
    }
    Ok(())
}
