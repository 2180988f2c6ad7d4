// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

//! # Architecture
//!
//! ```text
//! dao-derive-impl/src/
//! ├── lib.rs            — proc-macro entry point
//! ├── entity.rs         — derive orchestration
//! ├── entity/
//! │   ├── parse.rs      — EntityDef, FieldDef, StorageKind
//! │   ├── registry.rs   — `fields()` descriptor table
//! │   └── accessors.rs  — `id`, `get_field`, `set_field`
//! └── utils/
//!     └── types.rs      — Option unwrapping, type name helpers
//! ```

mod entity;
mod utils;

use proc_macro::TokenStream;

/// Derive `Entity` for a named struct.
///
/// Generates an `impl Entity` with the table name, a static field registry
/// and the uniform `get_field` / `set_field` accessors.
///
/// # Requirements
///
/// - a field `id: String`;
/// - `Default` (derived or manual);
/// - every persisted field is `String`, an integer up to 64 bits signed
///   (`u32` unsigned), `f32`/`f64`, `bool`, or an `Option` of one of
///   them, unless it is marked `json` or `transient`.
///
/// # Attributes
///
/// ```rust,ignore
/// #[derive(Entity, Default)]
/// #[entity(table = "hotels", crate = "generic_dao")]
/// pub struct Hotel {
///     pub id: String,
///
///     pub name: Option<String>,
///
///     #[field(json)]
///     pub address: Option<Address>,
///
///     #[field(transient)]
///     pub visits: u32
/// }
/// ```
///
/// # Generated Code
///
/// ```rust,ignore
/// impl ::generic_dao::Entity for Hotel {
///     const NAME: &'static str = "Hotel";
///     const TABLE: &'static str = "hotels";
///
///     fn fields() -> &'static [::generic_dao::FieldDescriptor] { ... }
///     fn id(&self) -> &str { &self.id }
///     fn get_field(&self, name: &str) -> Option<::generic_dao::Value> { ... }
///     fn set_field(&mut self, name: &str, value: ::generic_dao::Value)
///         -> Result<(), ::generic_dao::ValueError> { ... }
/// }
/// ```
#[proc_macro_derive(Entity, attributes(entity, field))]
pub fn derive_entity(input: TokenStream) -> TokenStream {
    entity::derive(input)
}
