// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Parsing of `#[derive(Entity)]` input.
//!
//! # Module Structure
//!
//! ```text
//! parse/
//! ├── attrs.rs — `#[entity(...)]` via darling
//! ├── def.rs   — EntityDef, the parsed entity
//! ├── field.rs — FieldDef and `#[field(...)]`
//! └── kind.rs  — storage kind inference from field types
//! ```

mod attrs;
mod def;
mod field;
mod kind;

pub use attrs::EntityAttrs;
pub use def::EntityDef;
pub use field::FieldDef;
pub use kind::StorageKind;
