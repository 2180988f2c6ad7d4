// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Uniform accessor generation: `id`, `get_field`, `set_field`.
//!
//! | Field | `get_field` | `set_field` |
//! |-------|-------------|-------------|
//! | plain | `ToValue::to_value(&self.f)` | `FromValue::from_value(value)?` |
//! | `json` | `value::to_json(&self.f)` | `value::from_json(value)?` |
//! | `transient` | `None` | `UnknownField` |

use proc_macro2::TokenStream;
use quote::quote;

use super::parse::EntityDef;

/// Generate `fn id`, `fn get_field` and `fn set_field`.
pub fn generate(entity: &EntityDef) -> TokenStream {
    let krate = &entity.krate;
    let id = &entity.id_field().ident;

    let getters = entity.persistent_fields().map(|field| {
        let ident = &field.ident;
        let name = field.name_str();
        if field.is_json() {
            quote! { #name => ::core::option::Option::Some(#krate::value::to_json(&self.#ident)) }
        } else {
            quote! { #name => ::core::option::Option::Some(#krate::ToValue::to_value(&self.#ident)) }
        }
    });

    let setters = entity.persistent_fields().map(|field| {
        let ident = &field.ident;
        let name = field.name_str();
        if field.is_json() {
            quote! { #name => self.#ident = #krate::value::from_json(value)? }
        } else {
            quote! { #name => self.#ident = #krate::FromValue::from_value(value)? }
        }
    });

    quote! {
        fn id(&self) -> &str {
            &self.#id
        }

        fn get_field(&self, name: &str) -> ::core::option::Option<#krate::Value> {
            match name {
                #(#getters,)*
                _ => ::core::option::Option::None
            }
        }

        fn set_field(
            &mut self,
            name: &str,
            value: #krate::Value
        ) -> ::core::result::Result<(), #krate::ValueError> {
            match name {
                #(#setters,)*
                other => {
                    return ::core::result::Result::Err(
                        #krate::ValueError::UnknownField(::std::string::ToString::to_string(other))
                    );
                }
            }
            ::core::result::Result::Ok(())
        }
    }
}
