// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Container attributes.

use darling::FromDeriveInput;
use syn::{Generics, Ident};

/// Default path of the runtime crate in generated code.
pub fn default_crate_path() -> syn::Path {
    syn::parse_quote!(::generic_dao)
}

/// Entity-level attributes parsed from `#[entity(...)]`.
///
/// ```rust,ignore
/// #[entity(table = "hotels", crate = "generic_dao")]
/// ```
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(entity), supports(struct_named))]
pub struct EntityAttrs {
    /// Struct identifier.
    pub ident: Ident,

    /// Struct generics, forwarded to the impl.
    pub generics: Generics,

    /// Table name. Defaults to the snake_case struct name.
    #[darling(default)]
    pub table: Option<String>,

    /// Path of the runtime crate.
    ///
    /// Set it when `generic_dao` is renamed in `Cargo.toml` or when deriving
    /// against `dao_core` directly.
    #[darling(rename = "crate", default = "default_crate_path")]
    pub krate: syn::Path
}
