// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Entity derive orchestration.
//!
//! Parses the input into an [`EntityDef`] and stitches the generated pieces
//! into one `impl Entity` block.

mod accessors;
pub mod parse;
mod registry;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

use self::parse::EntityDef;

/// Main entry point for the Entity derive macro.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match EntityDef::from_derive_input(&input) {
        Ok(entity) => generate(&entity).into(),
        Err(err) => err.write_errors().into()
    }
}

fn generate(entity: &EntityDef) -> TokenStream2 {
    let krate = &entity.krate;
    let ident = &entity.ident;
    let name = ident.to_string();
    let table = &entity.table;
    let (impl_generics, ty_generics, where_clause) = entity.generics.split_for_impl();

    let fields = registry::generate(entity);
    let accessors = accessors::generate(entity);

    quote! {
        impl #impl_generics #krate::Entity for #ident #ty_generics #where_clause {
            const NAME: &'static str = #name;
            const TABLE: &'static str = #table;

            #fields
            #accessors
        }
    }
}
