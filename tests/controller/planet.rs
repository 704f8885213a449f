//! Tests for the planet catalog endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use holocron::server::controller::{
    planet::{get_all_planets, get_planet},
    util::extract::AppPath,
};
use serde_json::json;

use super::*;

/// Tests that a stored planet is returned with exactly its stored fields.
///
/// Expected: Ok with 200 OK and the planet as JSON
#[tokio::test]
async fn get_planet_returns_stored_fields() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_planet("Tatooine")
        .build()
        .await?;

    let result = get_planet(State(test.to_app_state()), AppPath(1)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        json_body(resp).await,
        json!({
            "id": 1,
            "name": "Tatooine",
            "population": "200000",
            "terrain": "desert",
            "climate": "arid"
        })
    );

    Ok(())
}

/// Tests the 404 response for a planet that was never inserted.
///
/// Expected: Err with 404 NOT_FOUND and the not found message
#[tokio::test]
async fn get_planet_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let result = get_planet(State(test.to_app_state()), AppPath(42)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(resp).await, json!({ "message": "Planet not found" }));

    Ok(())
}

/// Tests listing all planets in insertion order.
///
/// Expected: Ok with 200 OK and every planet
#[tokio::test]
async fn get_all_planets_lists_every_planet() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_planet("Tatooine")
        .with_mock_planet("Hoth")
        .build()
        .await?;

    let result = get_all_planets(State(test.to_app_state())).await;

    assert!(result.is_ok());
    let body = json_body(result.unwrap().into_response()).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Tatooine", "Hoth"]);

    Ok(())
}

/// Tests that an empty catalog is an empty array, not an error.
///
/// Expected: Ok with 200 OK and `[]`
#[tokio::test]
async fn get_all_planets_empty() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let (status, body) = test.send(get("/planet")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    Ok(())
}

/// Tests that a missing table surfaces as a generic server error.
///
/// Expected: Err with 500 INTERNAL_SERVER_ERROR
#[tokio::test]
async fn get_all_planets_error_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = get_all_planets(State(test.to_app_state())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        json_body(resp).await,
        json!({ "message": "Internal server error" })
    );

    Ok(())
}

/// Tests that a non-numeric ID is rejected before reaching the handler.
///
/// Expected: 400 BAD_REQUEST with a message body
#[tokio::test]
async fn get_planet_rejects_non_numeric_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let (status, body) = test.send(get("/planet/abc")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());

    Ok(())
}
