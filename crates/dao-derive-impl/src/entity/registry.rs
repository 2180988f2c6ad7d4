// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field registry generation.
//!
//! ```rust,ignore
//! fn fields() -> &'static [::generic_dao::FieldDescriptor] {
//!     const FIELDS: &[::generic_dao::FieldDescriptor] = &[
//!         ::generic_dao::FieldDescriptor::new("id", ::generic_dao::FieldKind::Text),
//!         ::generic_dao::FieldDescriptor::new("address", ::generic_dao::FieldKind::Json).json(),
//!         ::generic_dao::FieldDescriptor::new("visits", ::generic_dao::FieldKind::Integer).transient()
//!     ];
//!     FIELDS
//! }
//! ```
//!
//! Transient fields stay in the registry so the descriptor list mirrors the
//! struct; the runtime skips them.

use proc_macro2::TokenStream;
use quote::quote;

use super::parse::{EntityDef, FieldDef};

/// Generate `fn fields()`.
pub fn generate(entity: &EntityDef) -> TokenStream {
    let krate = &entity.krate;
    let descriptors = entity.fields.iter().map(|field| descriptor(field, krate));

    quote! {
        fn fields() -> &'static [#krate::FieldDescriptor] {
            const FIELDS: &[#krate::FieldDescriptor] = &[#(#descriptors),*];
            FIELDS
        }
    }
}

fn descriptor(field: &FieldDef, krate: &syn::Path) -> TokenStream {
    let name = field.name_str();
    let kind = field.kind.to_tokens(krate);
    let json = field.json.then(|| quote!(.json()));
    let transient = field.transient.then(|| quote!(.transient()));

    quote! {
        #krate::FieldDescriptor::new(#name, #kind) #json #transient
    }
}
