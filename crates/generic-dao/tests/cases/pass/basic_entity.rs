// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use generic_dao::{Entity, FieldKind, Value};

#[derive(Debug, Default, Entity)]
pub struct HotelRoom {
    pub id: String,
    pub name: Option<String>,
    pub floor: i16,
    pub price: Option<f64>,
    pub smoking: bool
}

fn main() {
    assert_eq!(HotelRoom::TABLE, "hotel_room");
    assert_eq!(HotelRoom::NAME, "HotelRoom");

    let kinds: Vec<_> = HotelRoom::fields().iter().map(|f| (f.name, f.kind)).collect();
    assert_eq!(
        kinds,
        vec![
            ("id", FieldKind::Text),
            ("name", FieldKind::Text),
            ("floor", FieldKind::Integer),
            ("price", FieldKind::Float),
            ("smoking", FieldKind::Boolean)
        ]
    );

    let mut room = HotelRoom {
        id: "r1".to_string(),
        ..HotelRoom::default()
    };
    assert_eq!(room.id(), "r1");
    assert_eq!(room.get_field("name"), Some(Value::Null));
    assert_eq!(room.get_field("floor"), Some(Value::Integer(0)));
    assert_eq!(room.get_field("missing"), None);

    room.set_field("name", Value::Text("Sea view".into())).unwrap();
    room.set_field("floor", Value::Integer(3)).unwrap();
    assert_eq!(room.name.as_deref(), Some("Sea view"));
    assert_eq!(room.floor, 3);

    assert!(room.set_field("floor", Value::Integer(100_000)).is_err());
    assert!(room.set_field("missing", Value::Null).is_err());

    // price is still None
    assert_eq!(
        room.changes().columns().collect::<Vec<_>>(),
        vec!["id", "name", "floor", "smoking"]
    );
}
