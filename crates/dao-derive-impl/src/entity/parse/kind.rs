// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Storage kind inference.
//!
//! | Field type (Option unwrapped) | Kind |
//! |-------------------------------|------|
//! | `String` | `Text` |
//! | `i8`, `i16`, `i32`, `i64`, `u8`, `u16`, `u32` | `Integer` |
//! | `f32`, `f64` | `Float` |
//! | `bool` | `Boolean` |
//! | anything with `#[field(json)]` | `Json` |

use proc_macro2::TokenStream;
use quote::quote;
use syn::Type;

use crate::utils::types::{simple_name, unwrap_option};

/// Storage kind of a field, mirrored as `FieldKind` in generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    /// Character data.
    Text,
    /// Integer.
    Integer,
    /// Floating point.
    Float,
    /// Boolean.
    Boolean,
    /// JSON text.
    Json
}

impl StorageKind {
    /// Infer the kind of a natively supported field type.
    ///
    /// Returns `None` for types that need `#[field(json)]`.
    pub fn infer(ty: &Type) -> Option<Self> {
        let name = simple_name(unwrap_option(ty))?;
        match name.as_str() {
            "String" => Some(Self::Text),
            "i8" | "i16" | "i32" | "i64" | "u8" | "u16" | "u32" => Some(Self::Integer),
            "f32" | "f64" => Some(Self::Float),
            "bool" => Some(Self::Boolean),
            _ => None
        }
    }

    /// `FieldKind` variant path under `krate`.
    pub fn to_tokens(self, krate: &syn::Path) -> TokenStream {
        let variant = match self {
            Self::Text => quote!(Text),
            Self::Integer => quote!(Integer),
            Self::Float => quote!(Float),
            Self::Boolean => quote!(Boolean),
            Self::Json => quote!(Json)
        };
        quote!(#krate::FieldKind::#variant)
    }
}
