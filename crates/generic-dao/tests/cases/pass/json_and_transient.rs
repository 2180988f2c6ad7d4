// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use std::collections::HashMap;

use generic_dao::{Entity, FieldKind, Value};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub city: String
}

#[derive(Debug, Default, Entity)]
#[entity(table = "hotels")]
pub struct Hotel {
    pub id: String,
    #[field(json)]
    pub address: Option<Address>,
    #[field(json)]
    pub tags: Vec<String>,
    #[field(transient)]
    pub cache: HashMap<String, String>,
    #[field(transient)]
    pub visits: u32
}

fn main() {
    assert_eq!(Hotel::TABLE, "hotels");

    let address = Hotel::fields().iter().find(|f| f.name == "address").unwrap();
    assert_eq!(address.kind, FieldKind::Json);
    assert!(address.is_json());

    let visits = Hotel::fields().iter().find(|f| f.name == "visits").unwrap();
    assert!(!visits.is_persistent());

    let hotel = Hotel {
        id: "h1".to_string(),
        address: Some(Address {
            city: "Magusa".to_string()
        }),
        visits: 4,
        ..Hotel::default()
    };

    let changes = hotel.changes();
    assert_eq!(
        changes.get("address"),
        Some(&Value::Text(r#"{"city":"Magusa"}"#.to_string()))
    );
    assert_eq!(changes.get("tags"), Some(&Value::Text("[]".to_string())));
    assert!(!changes.contains("visits"));
    assert!(!changes.contains("cache"));

    let mut loaded = Hotel::default();
    loaded
        .set_field("address", Value::Text(r#"{"city":"Girne"}"#.to_string()))
        .unwrap();
    assert_eq!(loaded.address.as_ref().unwrap().city, "Girne");
    assert!(loaded.set_field("visits", Value::Integer(1)).is_err());
}
