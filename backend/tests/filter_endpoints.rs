use std::path::{Path, PathBuf};

use backend::{db_utils::listings_file::ListingsFile, server::{AppState, build_router}};
use common::{filter_response::{FilterCountResponse, InsertListingResponse}, listing::Listing};
use serde_json::{Value, json};
use tempfile::{TempDir, tempdir};

fn fixture_listings() -> Value {
    let prices = [100, 120, 150, 200, 250];
    Value::Array(
        prices
            .iter()
            .enumerate()
            .map(|(i, price)| {
                json!({
                    "id": i + 1,
                    "name": format!("Stay {}", i + 1),
                    "pricePerDay": price,
                    "roomType": if i % 2 == 0 { "room" } else { "entire home" },
                    "bedrooms": 1 + i % 3,
                    "beds": 2,
                    "bathrooms": 1,
                    "amenities": if i < 2 { vec!["wifi", "pool"] } else { vec!["wifi"] },
                    "bookingOptions": ["instant"],
                    "buildingType": "apartment",
                    "age": 10,
                    "city": if i == 4 { "Busan" } else { "Seoul" },
                })
            })
            .collect(),
    )
}

fn write_fixture(dir: &Path) -> PathBuf {
    let path = dir.join("rooms.json");
    std::fs::write(&path, serde_json::to_vec_pretty(&fixture_listings()).expect("encode fixture"))
        .expect("write fixture");
    path
}

async fn spawn_server(listings_path: PathBuf) -> std::net::SocketAddr {
    let state = AppState::new(ListingsFile::new(listings_path));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, build_router(state)).await.expect("serve");
    });
    addr
}

async fn fixture_server() -> (TempDir, PathBuf, std::net::SocketAddr) {
    let dir = tempdir().expect("tempdir");
    let path = write_fixture(dir.path());
    let addr = spawn_server(path.clone()).await;
    (dir, path, addr)
}

async fn get_count(addr: std::net::SocketAddr, query: &str) -> u64 {
    let response = reqwest::get(format!("http://{addr}/filter?{query}"))
        .await
        .expect("send request");
    assert_eq!(response.status(), 200);
    response.json::<FilterCountResponse>().await.expect("count body").count
}

#[tokio::test]
async fn price_range_query_counts_inclusive_bounds() {
    let (_dir, _path, addr) = fixture_server().await;
    let response = reqwest::get(format!("http://{addr}/filter?priceMin=120&priceMax=200"))
        .await
        .expect("send request");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("json body");
    assert_eq!(body, json!({ "count": 3 }));
}

#[tokio::test]
async fn combined_filters_and_lenient_parsing() {
    let (_dir, _path, addr) = fixture_server().await;
    assert_eq!(get_count(addr, "").await, 5);
    assert_eq!(get_count(addr, "amenities=wifi,pool").await, 2);
    assert_eq!(get_count(addr, "amenities=wifi,gym").await, 0);
    assert_eq!(get_count(addr, "roomType=room&city=Seoul").await, 2);
    assert_eq!(get_count(addr, "roomType=entire%20home").await, 2);
    assert_eq!(get_count(addr, "roomType=%EC%A7%91%20%EC%A0%84%EC%B2%B4").await, 2);
    assert_eq!(get_count(addr, "roomType=castle").await, 0);
    assert_eq!(get_count(addr, "roomType=").await, 5);
    assert_eq!(get_count(addr, "bedrooms=2&bookingOptions=instant").await, 2);
    assert_eq!(get_count(addr, "priceMin=abc&priceMax=&bedrooms=two").await, 5);
    assert_eq!(get_count(addr, "name=Stay%205&age=10").await, 1);
}

#[tokio::test]
async fn missing_storage_fails_the_request() {
    let dir = tempdir().expect("tempdir");
    let addr = spawn_server(dir.path().join("absent.json")).await;
    let response = reqwest::get(format!("http://{addr}/filter"))
        .await
        .expect("send request");
    assert_eq!(response.status(), 500);
}

#[tokio::test]
async fn corrupt_storage_fails_the_request() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("rooms.json");
    std::fs::write(&path, "{not json").expect("write corrupt storage");
    let addr = spawn_server(path.clone()).await;

    let response = reqwest::get(format!("http://{addr}/filter"))
        .await
        .expect("send request");
    assert_eq!(response.status(), 500);

    let response = reqwest::Client::new()
        .post(format!("http://{addr}/filter"))
        .json(&json!({
            "id": 1, "name": "x", "pricePerDay": 5, "roomType": "room",
            "bedrooms": 1, "beds": 1, "bathrooms": 1, "age": 1
        }))
        .send()
        .await
        .expect("send post");
    assert_eq!(response.status(), 500);
    assert_eq!(std::fs::read_to_string(&path).expect("read storage"), "{not json");
}

#[tokio::test]
async fn post_appends_and_rewrites_storage() {
    let (_dir, path, addr) = fixture_server().await;
    let client = reqwest::Client::new();
    let new_listing = json!({
        "id": 6,
        "name": "Mountain cabin",
        "pricePerDay": 180,
        "roomType": "entire home",
        "bedrooms": 2,
        "beds": 2,
        "bathrooms": 1,
        "amenities": ["fireplace"],
        "bookingOptions": [],
        "buildingType": "cabin",
        "age": 8,
        "city": "Gangneung"
    });

    let response = client
        .post(format!("http://{addr}/filter"))
        .json(&new_listing)
        .send()
        .await
        .expect("send post");
    assert_eq!(response.status(), 200);
    let body: InsertListingResponse = response.json().await.expect("json body");
    assert_eq!(body, InsertListingResponse::success());

    let stored: Vec<Listing> =
        serde_json::from_str(&std::fs::read_to_string(&path).expect("read storage")).expect("parse storage");
    assert_eq!(stored.len(), 6);
    assert_eq!(stored.last().map(|l| l.id), Some(6));
    assert_eq!(get_count(addr, "priceMin=120&priceMax=200").await, 4);

    let duplicate = client
        .post(format!("http://{addr}/filter"))
        .json(&new_listing)
        .send()
        .await
        .expect("send duplicate");
    assert_eq!(duplicate.status(), 409);
}

#[tokio::test]
async fn post_rejects_invalid_listings() {
    let (_dir, path, addr) = fixture_server().await;
    let client = reqwest::Client::new();

    let negative_price = json!({
        "id": 7, "name": "x", "pricePerDay": -5, "roomType": "",
        "bedrooms": 1, "beds": 1, "bathrooms": 1, "age": 1
    });
    let response = client
        .post(format!("http://{addr}/filter"))
        .json(&negative_price)
        .send()
        .await
        .expect("send post");
    assert_eq!(response.status(), 422);

    let negative_beds = json!({
        "id": 8, "name": "x", "pricePerDay": 5, "bedrooms": -1, "beds": 1, "bathrooms": 1, "age": 1
    });
    let response = client
        .post(format!("http://{addr}/filter"))
        .json(&negative_beds)
        .send()
        .await
        .expect("send post");
    assert!(response.status().is_client_error());

    let stored: Vec<Listing> =
        serde_json::from_str(&std::fs::read_to_string(&path).expect("read storage")).expect("parse storage");
    assert_eq!(stored.len(), 5);
}
