use diesel_migrations::MigrationHarness;
use serde_json::{json, Value};
use warp::http::StatusCode;

use plant_inventory::models::NewPlant;
use plant_inventory::{actions, api, build_pool, DbPool, MIGRATIONS};

/// A pool capped at one connection, so every request sees the same
/// in-memory database.
fn test_pool() -> DbPool {
    let pool = build_pool(":memory:", 1).expect("building pool");
    let mut conn = pool.get().expect("checking out connection");
    conn.run_pending_migrations(MIGRATIONS)
        .expect("running migrations");
    pool
}

fn seed(pool: &DbPool, name: &str, image: &str, price: f64, is_in_stock: bool) -> i32 {
    let mut conn = pool.get().expect("checking out connection");
    actions::insert_new_plant(
        &mut conn,
        &NewPlant {
            name: name.to_string(),
            image: image.to_string(),
            price,
            is_in_stock,
        },
    )
    .expect("seeding plant")
    .id
}

fn seed_aloe(pool: &DbPool) -> i32 {
    seed(pool, "Aloe", "./images/aloe.jpg", 11.50, true)
}

fn body_json(body: &[u8]) -> Value {
    serde_json::from_slice(body).expect("JSON body")
}

#[tokio::test]
async fn get_plant_by_id_returns_one_plant() {
    let pool = test_pool();
    let id = seed_aloe(&pool);

    let res = warp::test::request()
        .method("GET")
        .path(&format!("/plants/{id}"))
        .reply(&api::routes(pool))
        .await;

    assert_eq!(res.status(), StatusCode::OK);
    let body = body_json(res.body());
    assert_eq!(body["id"], id);
    assert_eq!(body["name"], "Aloe");
    assert_eq!(body["image"], "./images/aloe.jpg");
    assert_eq!(body["price"], 11.5);
    assert_eq!(body["is_in_stock"], true);
}

#[tokio::test]
async fn get_unknown_plant_returns_404() {
    let pool = test_pool();
    seed_aloe(&pool);

    let res = warp::test::request()
        .method("GET")
        .path("/plants/999")
        .reply(&api::routes(pool))
        .await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn patch_updates_is_in_stock_and_leaves_the_rest() {
    let pool = test_pool();
    let id = seed_aloe(&pool);

    let res = warp::test::request()
        .method("PATCH")
        .path(&format!("/plants/{id}"))
        .json(&json!({ "is_in_stock": false }))
        .reply(&api::routes(pool))
        .await;

    assert_eq!(res.status(), StatusCode::OK);
    let body = body_json(res.body());
    assert_eq!(body["id"], id);
    assert_eq!(body["is_in_stock"], false);
    assert_eq!(body["name"], "Aloe");
    assert_eq!(body["image"], "./images/aloe.jpg");
    assert_eq!(body["price"], 11.5);
}

#[tokio::test]
async fn patch_unknown_plant_returns_404() {
    let pool = test_pool();

    let res = warp::test::request()
        .method("PATCH")
        .path("/plants/999")
        .json(&json!({ "is_in_stock": false }))
        .reply(&api::routes(pool))
        .await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn patch_with_empty_body_returns_the_unchanged_plant() {
    let pool = test_pool();
    let id = seed_aloe(&pool);

    let res = warp::test::request()
        .method("PATCH")
        .path(&format!("/plants/{id}"))
        .json(&json!({}))
        .reply(&api::routes(pool))
        .await;

    assert_eq!(res.status(), StatusCode::OK);
    let body = body_json(res.body());
    assert_eq!(body["name"], "Aloe");
    assert_eq!(body["is_in_stock"], true);
}

#[tokio::test]
async fn patch_with_wrong_field_type_returns_400() {
    let pool = test_pool();
    let id = seed_aloe(&pool);

    let res = warp::test::request()
        .method("PATCH")
        .path(&format!("/plants/{id}"))
        .json(&json!({ "is_in_stock": "nope" }))
        .reply(&api::routes(pool))
        .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn delete_removes_the_plant() {
    let pool = test_pool();
    seed_aloe(&pool);
    let id = seed(
        &pool,
        "Live Oak",
        "https://www.nwf.org/live-oak.jpg",
        250.00,
        false,
    );

    let routes = api::routes(pool);

    let res = warp::test::request()
        .method("DELETE")
        .path(&format!("/plants/{id}"))
        .reply(&routes)
        .await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    assert!(res.body().is_empty());

    let res = warp::test::request()
        .method("GET")
        .path(&format!("/plants/{id}"))
        .reply(&routes)
        .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_unknown_plant_returns_404() {
    let pool = test_pool();
    seed_aloe(&pool);

    let res = warp::test::request()
        .method("DELETE")
        .path("/plants/999")
        .reply(&api::routes(pool))
        .await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn post_creates_a_plant_and_list_shows_it() {
    let pool = test_pool();
    seed_aloe(&pool);

    let routes = api::routes(pool);

    let res = warp::test::request()
        .method("POST")
        .path("/plants")
        .json(&json!({
            "name": "Monstera",
            "image": "./images/monstera.jpg",
            "price": 30.0,
            "is_in_stock": true
        }))
        .reply(&routes)
        .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let created = body_json(res.body());
    assert_eq!(created["name"], "Monstera");
    let id = created["id"].as_i64().expect("assigned id");
    assert!(id > 0);

    let res = warp::test::request()
        .method("GET")
        .path("/plants")
        .reply(&routes)
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    let all = body_json(res.body());
    let names: Vec<&str> = all
        .as_array()
        .expect("JSON array")
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Aloe", "Monstera"]);
}

#[tokio::test]
async fn post_with_missing_field_returns_400() {
    let pool = test_pool();

    let res = warp::test::request()
        .method("POST")
        .path("/plants")
        .json(&json!({ "name": "Fern" }))
        .reply(&api::routes(pool))
        .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}
