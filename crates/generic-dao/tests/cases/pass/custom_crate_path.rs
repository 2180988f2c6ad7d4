// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use dao_core::Entity as _;

mod runtime {
    pub use generic_dao::*;
}

#[derive(Default, generic_dao::Entity)]
#[entity(table = "tags", crate = "runtime")]
pub struct Tag {
    pub id: String,
    pub r#type: Option<String>
}

fn main() {
    assert_eq!(Tag::TABLE, "tags");
    assert_eq!(Tag::fields()[1].name, "type");

    let tag = Tag {
        id: "t1".to_string(),
        r#type: Some("amenity".to_string())
    };
    assert_eq!(tag.changes().columns().collect::<Vec<_>>(), vec!["id", "type"]);
}
