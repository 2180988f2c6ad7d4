// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! End-to-end DAO behavior against an in-memory SQLite database.

use generic_dao::{
    Entity, Filter, Filtering, GenericDao, LogicalOperator, Operator, SortDirection,
    SqliteExecutor, Value
};
use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqlitePoolOptions;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Address {
    city: String
}

#[derive(Debug, Clone, Default, PartialEq, Entity)]
struct Hotel {
    id:      String,
    name:    Option<String>,
    stars:   Option<i32>,
    rating:  Option<f64>,
    open:    Option<bool>,
    #[field(json)]
    address: Option<Address>,
    #[field(transient)]
    visits:  u32
}

type HotelDao = GenericDao<Hotel, SqliteExecutor>;

const SCHEMA: &str = "CREATE TABLE hotel (id TEXT PRIMARY KEY, name TEXT, stars INTEGER, \
                      rating REAL, open BOOLEAN, address TEXT)";

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

async fn empty_dao() -> HotelDao {
    init_tracing();
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    sqlx::query(SCHEMA).execute(&pool).await.unwrap();
    GenericDao::new(SqliteExecutor::new(pool))
}

fn hotel(id: &str, name: Option<&str>, stars: Option<i32>, city: Option<&str>) -> Hotel {
    Hotel {
        id: id.to_owned(),
        name: name.map(str::to_owned),
        stars,
        open: stars.map(|stars| stars >= 4),
        address: city.map(|city| Address {
            city: city.to_owned()
        }),
        ..Hotel::default()
    }
}

/// Hotel1..Hotel3 plus Villa1 with no name and no stars.
async fn seeded_dao() -> HotelDao {
    let dao = empty_dao().await;
    for hotel in [
        hotel("Hotel1", Some("Grand"), Some(5), Some("Magusa")),
        hotel("Hotel2", Some("Plaza"), Some(3), Some("Girne")),
        hotel("Hotel3", Some("Grand Palace"), Some(4), None),
        hotel("Villa1", None, None, None)
    ] {
        dao.insert(&hotel).await.unwrap();
    }
    dao
}

async fn ids(dao: &HotelDao, filtering: Filtering) -> Vec<String> {
    dao.filter(&filtering.with_sorting("id", SortDirection::Asc))
        .await
        .unwrap()
        .into_iter()
        .map(|hotel| hotel.id)
        .collect()
}

#[tokio::test]
async fn insert_then_get_by_id_round_trips() {
    let dao = empty_dao().await;
    let inserted = Hotel {
        id:      "Hotel1".into(),
        name:    Some("Grand".into()),
        stars:   Some(5),
        rating:  Some(9.5),
        open:    Some(true),
        address: Some(Address {
            city: "Magusa".into()
        }),
        visits:  12
    };
    dao.insert(&inserted).await.unwrap();

    let loaded = dao.get_by_id("Hotel1").await.unwrap().unwrap();
    assert_eq!(
        loaded,
        Hotel {
            visits: 0,
            ..inserted
        }
    );
}

#[tokio::test]
async fn json_column_holds_json_text() {
    let dao = empty_dao().await;
    dao.insert(&hotel("Hotel1", None, None, Some("Magusa")))
        .await
        .unwrap();

    let (text,): (String,) = sqlx::query_as("SELECT address FROM hotel WHERE id = 'Hotel1'")
        .fetch_one(dao.executor().pool())
        .await
        .unwrap();
    assert_eq!(text, r#"{"city":"Magusa"}"#);
}

#[tokio::test]
async fn get_by_id_missing_is_none() {
    let dao = seeded_dao().await;
    assert!(dao.get_by_id("Hotel9").await.unwrap().is_none());
}

#[tokio::test]
async fn null_columns_stay_absent() {
    let dao = seeded_dao().await;
    let villa = dao.get_by_id("Villa1").await.unwrap().unwrap();
    assert_eq!(villa, hotel("Villa1", None, None, None));
}

#[tokio::test]
async fn update_writes_only_set_fields() {
    let dao = seeded_dao().await;
    let patch = Hotel {
        id: "Hotel2".into(),
        stars: Some(4),
        address: Some(Address {
            city: "Lefkoşa".into()
        }),
        ..Hotel::default()
    };
    assert_eq!(dao.update(&patch).await.unwrap(), 1);

    let loaded = dao.get_by_id("Hotel2").await.unwrap().unwrap();
    assert_eq!(loaded.name.as_deref(), Some("Plaza"));
    assert_eq!(loaded.stars, Some(4));
    assert_eq!(loaded.address.unwrap().city, "Lefkoşa");
}

#[tokio::test]
async fn update_with_only_id_changes_nothing() {
    let dao = seeded_dao().await;
    let bare = Hotel {
        id: "Hotel1".into(),
        visits: 3,
        ..Hotel::default()
    };
    assert_eq!(dao.update(&bare).await.unwrap(), 0);
    assert_eq!(
        dao.get_by_id("Hotel1").await.unwrap().unwrap().name.as_deref(),
        Some("Grand")
    );
}

#[tokio::test]
async fn update_missing_row_affects_nothing() {
    let dao = seeded_dao().await;
    let ghost = hotel("Hotel9", Some("Ghost"), None, None);
    assert_eq!(dao.update(&ghost).await.unwrap(), 0);
}

#[tokio::test]
async fn delete_reports_removed_rows() {
    let dao = seeded_dao().await;
    assert_eq!(dao.delete("Hotel2").await.unwrap(), 1);
    assert!(dao.get_by_id("Hotel2").await.unwrap().is_none());
    assert_eq!(dao.delete("Hotel2").await.unwrap(), 0);
    assert_eq!(dao.delete("Hotel9").await.unwrap(), 0);
}

#[tokio::test]
async fn duplicate_insert_is_an_execution_error() {
    let dao = seeded_dao().await;
    let err = dao
        .insert(&hotel("Hotel1", None, None, None))
        .await
        .unwrap_err();
    assert!(err.is_execution());
    assert!(err.to_string().contains("hotel"));
}

#[tokio::test]
async fn empty_filtering_returns_every_row() {
    let dao = seeded_dao().await;
    assert_eq!(dao.filter(&Filtering::new()).await.unwrap().len(), 4);
    assert_eq!(dao.list_all().await.unwrap().len(), 4);
    assert_eq!(dao.count(&Filtering::new()).await.unwrap(), 4);
}

#[tokio::test]
async fn comparison_operators() {
    let dao = seeded_dao().await;

    assert_eq!(ids(&dao, Filtering::new().eq("name", "Grand")).await, ["Hotel1"]);
    assert_eq!(
        ids(&dao, Filtering::new().not_eq("stars", 5)).await,
        ["Hotel2", "Hotel3"]
    );
    assert_eq!(
        ids(&dao, Filtering::new().eq("open", true)).await,
        ["Hotel1", "Hotel3"]
    );
}

#[tokio::test]
async fn pattern_operators() {
    let dao = seeded_dao().await;

    assert_eq!(
        ids(&dao, Filtering::new().like("name", "Grand%")).await,
        ["Hotel1", "Hotel3"]
    );
    assert_eq!(
        ids(&dao, Filtering::new().not_like("name", "Grand%")).await,
        ["Hotel2"]
    );
}

#[tokio::test]
async fn list_operators() {
    let dao = seeded_dao().await;

    assert_eq!(
        ids(&dao, Filtering::new().is_in("stars", [3, 4])).await,
        ["Hotel2", "Hotel3"]
    );
    assert_eq!(
        ids(&dao, Filtering::new().not_in("id", ["Hotel1", "Villa1"])).await,
        ["Hotel2", "Hotel3"]
    );
}

#[tokio::test]
async fn empty_lists_match_nothing_or_everything() {
    let dao = seeded_dao().await;

    let none = Filtering::new().is_in("id", Vec::<String>::new());
    assert!(dao.filter(&none).await.unwrap().is_empty());

    let all = Filtering::new().not_in("id", Vec::<String>::new());
    assert_eq!(dao.filter(&all).await.unwrap().len(), 4);
}

#[tokio::test]
async fn filters_combine_with_and_by_default() {
    let dao = seeded_dao().await;
    let filtering = Filtering::new().like("name", "Grand%").eq("stars", 4);
    assert_eq!(ids(&dao, filtering).await, ["Hotel3"]);
}

#[tokio::test]
async fn filters_combine_with_or() {
    let dao = seeded_dao().await;
    let filtering = Filtering::new()
        .eq("name", "Plaza")
        .eq("stars", 5)
        .with_operator(LogicalOperator::Or);
    assert_eq!(ids(&dao, filtering).await, ["Hotel1", "Hotel2"]);
}

#[tokio::test]
async fn same_column_filtered_twice() {
    let dao = seeded_dao().await;
    let filtering = Filtering::new()
        .eq("stars", 3)
        .eq("stars", 5)
        .with_operator(LogicalOperator::Or);
    assert_eq!(ids(&dao, filtering).await, ["Hotel1", "Hotel2"]);
}

#[tokio::test]
async fn like_on_id_sorted_descending() {
    let dao = seeded_dao().await;
    let filtering = Filtering::new()
        .like("id", "Hotel%")
        .with_sorting("id", SortDirection::Desc);
    let hotels = dao.filter(&filtering).await.unwrap();
    let ids: Vec<_> = hotels.iter().map(|hotel| hotel.id.as_str()).collect();
    assert_eq!(ids, ["Hotel3", "Hotel2", "Hotel1"]);
}

#[tokio::test]
async fn offset_and_limit_page_through_sorted_rows() {
    let dao = seeded_dao().await;
    let filtering = Filtering::new()
        .like("id", "Hotel%")
        .with_sorting("id", SortDirection::Asc)
        .with_offset(1)
        .unwrap()
        .with_limit(1)
        .unwrap();

    let page = dao.filter(&filtering).await.unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].id, "Hotel2");
}

#[tokio::test]
async fn offset_without_limit_skips_rows() {
    let dao = seeded_dao().await;
    let filtering = Filtering::new()
        .like("id", "Hotel%")
        .with_sorting("id", SortDirection::Asc)
        .with_offset(1)
        .unwrap();

    let rest = dao.filter(&filtering).await.unwrap();
    let ids: Vec<_> = rest.iter().map(|hotel| hotel.id.as_str()).collect();
    assert_eq!(ids, ["Hotel2", "Hotel3"]);
}

#[tokio::test]
async fn nested_list_is_a_configuration_error() {
    let dao = seeded_dao().await;
    let err = dao
        .filter(&Filtering::new().is_in("id", vec![vec!["Hotel1"]]))
        .await
        .unwrap_err();
    assert!(err.is_configuration());
}

#[tokio::test]
async fn count_ignores_pagination() {
    let dao = seeded_dao().await;
    let filtering = Filtering::new()
        .like("id", "Hotel%")
        .with_limit(1)
        .unwrap();

    let count = dao.count(&filtering).await.unwrap();
    let all = dao.filter(&filtering.without_pagination()).await.unwrap();
    assert_eq!(count, 3);
    assert_eq!(count, all.len() as u64);
    assert_eq!(dao.filter(&filtering).await.unwrap().len(), 1);
}

#[tokio::test]
async fn operator_names_parse() {
    let dao = seeded_dao().await;
    let filtering = Filtering::new()
        .with("name", "like", "Grand%")
        .unwrap()
        .with("stars", "!=", 5)
        .unwrap();
    assert_eq!(ids(&dao, filtering).await, ["Hotel3"]);
    assert!(Filtering::new().with("name", "~", "x").is_err());
}

#[test]
fn negative_pagination_is_rejected() {
    assert!(Filtering::new().with_offset(-1).is_err());
    assert!(Filtering::new().with_limit(-5).is_err());
}

#[tokio::test]
async fn mismatched_operator_value_is_a_configuration_error() {
    let dao = seeded_dao().await;
    let filtering = Filtering::new().with_filter(Filter::new("stars", Operator::In, 3));
    let err = dao.filter(&filtering).await.unwrap_err();
    assert!(err.is_configuration());
}

#[tokio::test]
async fn unknown_column_is_an_execution_error() {
    let dao = seeded_dao().await;
    let err = dao
        .filter(&Filtering::new().eq("nope", 1))
        .await
        .unwrap_err();
    assert!(err.is_execution());
}

#[tokio::test]
async fn find_where_matches_every_pair() {
    let dao = seeded_dao().await;
    let hotels = dao
        .find_where([("name", Value::from("Grand")), ("stars", Value::from(5))])
        .await
        .unwrap();
    assert_eq!(hotels.len(), 1);
    assert_eq!(hotels[0].address.as_ref().unwrap().city, "Magusa");

    let none = dao
        .find_where([("name", Value::from("Grand")), ("stars", Value::from(4))])
        .await
        .unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn malformed_json_is_a_mapping_error() {
    let dao = empty_dao().await;
    sqlx::query("INSERT INTO hotel (id, address) VALUES ('Hotel1', 'not json')")
        .execute(dao.executor().pool())
        .await
        .unwrap();

    let err = dao.get_by_id("Hotel1").await.unwrap_err();
    assert!(err.is_mapping());
    assert!(err.to_string().contains("address"));
}

#[tokio::test]
async fn custom_table_name() {
    let dao = empty_dao().await;
    let pool = dao.executor().pool().clone();
    sqlx::query(&SCHEMA.replace("hotel", "hotel_archive"))
        .execute(&pool)
        .await
        .unwrap();

    let archive: HotelDao = GenericDao::with_table(SqliteExecutor::new(pool), "hotel_archive");
    archive
        .insert(&hotel("Hotel1", Some("Grand"), Some(5), None))
        .await
        .unwrap();

    assert_eq!(archive.table(), "hotel_archive");
    assert_eq!(archive.list_all().await.unwrap().len(), 1);
    assert!(dao.list_all().await.unwrap().is_empty());
}
