// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Type inspection helpers.
//!
//! Proc-macros only see tokens, so these work on the last path segment:
//! `std::option::Option<String>` and `Option<String>` are treated alike, a
//! type alias for `Option` is not.

use syn::{GenericArgument, PathArguments, Type};

/// Inner type of `Option<T>`, or `None` if `ty` is not an `Option`.
pub fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    let segment = type_path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first()? {
        GenericArgument::Type(inner) => Some(inner),
        _ => None
    }
}

/// `ty` with one `Option` layer removed.
pub fn unwrap_option(ty: &Type) -> &Type {
    option_inner(ty).unwrap_or(ty)
}

/// Name of a plain path type without generic arguments (`String`, `i32`,
/// `std::string::String`).
pub fn simple_name(ty: &Type) -> Option<String> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    if type_path.qself.is_some() {
        return None;
    }
    let segment = type_path.path.segments.last()?;
    matches!(segment.arguments, PathArguments::None).then(|| segment.ident.to_string())
}
