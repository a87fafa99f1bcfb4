//! API integration tests against a running server

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_list_beaches() {
    let client = Client::new();

    let response = client
        .get(format!("{}/beaches", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let beaches = body.as_array().expect("Expected an array");
    assert_eq!(beaches.len(), 10);
    assert_eq!(beaches[0], "Pantai Parangtritis");
}

#[tokio::test]
#[ignore]
async fn test_create_and_query_visitor() {
    let client = Client::new();

    let response = client
        .post(format!("{}/visitors", BASE_URL))
        .json(&json!({
            "name": "Integration Tester",
            "city": "Yogyakarta",
            "beach": "Pantai Samas",
            "date": "2030-01-01"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    let created: Value = response.json().await.expect("Failed to parse response");

    let response = client
        .get(format!("{}/visitors", BASE_URL))
        .query(&[("beach", "Pantai Samas"), ("search", "integration")])
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body[0]["id"], created["id"]);
}

#[tokio::test]
#[ignore]
async fn test_create_visitor_missing_beach() {
    let client = Client::new();

    let response = client
        .post(format!("{}/visitors", BASE_URL))
        .json(&json!({
            "name": "Integration Tester",
            "city": "Yogyakarta"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_point_crud() {
    let client = Client::new();

    // Create
    let response = client
        .post(format!("{}/points", BASE_URL))
        .json(&json!({
            "name": "Integration Point",
            "coordinates": "-8.0252,110.3294",
            "accuration": "10 m"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    let created: Value = response.json().await.expect("Failed to parse response");
    let id = created["id"].as_str().expect("No id in response").to_string();
    assert!(created["maps_url"].as_str().unwrap_or_default().contains("-8.0252,110.3294"));

    // Update
    let response = client
        .patch(format!("{}/points/{}", BASE_URL, id))
        .json(&json!({ "accuration": "4 m" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 204);

    // Delete
    let response = client
        .delete(format!("{}/points/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 204);

    let response = client
        .get(format!("{}/points/markers", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    let markers: Value = response.json().await.expect("Failed to parse response");
    assert!(markers
        .as_array()
        .expect("Expected an array")
        .iter()
        .all(|m| m["id"] != id.as_str()));
}
