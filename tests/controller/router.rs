//! Tests for the assembled router: route listing, documentation and path handling.

use axum::http::{Method, StatusCode};
use serde_json::{json, Value};

use super::*;

/// Tests that the route listing at `/` names every API route.
///
/// Expected: 200 OK with each method and path pair exactly once
#[tokio::test]
async fn sitemap_lists_every_route() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let (status, body) = test.send(get("/")).await;

    assert_eq!(status, StatusCode::OK);
    let routes: Vec<(String, String)> = body["routes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| {
            (
                r["method"].as_str().unwrap().to_string(),
                r["path"].as_str().unwrap().to_string(),
            )
        })
        .collect();

    let expected = [
        ("GET", "/"),
        ("GET", "/character"),
        ("GET", "/character/{id}"),
        ("GET", "/favorite"),
        ("DELETE", "/favorite/character/{id}"),
        ("POST", "/favorite/character/{id}"),
        ("DELETE", "/favorite/planet/{id}"),
        ("POST", "/favorite/planet/{id}"),
        ("GET", "/favorite/{id}"),
        ("GET", "/planet"),
        ("GET", "/planet/{id}"),
        ("GET", "/user"),
        ("POST", "/user"),
        ("GET", "/user/favorite/{id}"),
        ("GET", "/user/{id}"),
    ];
    let expected: Vec<(String, String)> = expected
        .iter()
        .map(|(m, p)| (m.to_string(), p.to_string()))
        .collect();
    assert_eq!(routes, expected);

    Ok(())
}

/// Tests that the OpenAPI document is served.
///
/// Expected: 200 OK with the documented paths
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let (status, body) = test.send(get("/docs/openapi.json")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["title"], "Holocron");
    assert!(body["paths"]["/favorite/planet/{id}"]["delete"].is_object());

    Ok(())
}

/// Tests that the Swagger UI index is reachable despite trailing slash trimming.
///
/// Expected: 200 OK at `/docs/`
#[tokio::test]
async fn serves_swagger_ui() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let (status, _) = test.send(get("/docs/")).await;

    assert_eq!(status, StatusCode::OK);

    Ok(())
}

/// Tests that a trailing slash reaches the same handler, including for path parameters.
///
/// Expected: 200 OK for `/planet/1/`, 404 NOT_FOUND for `/user/1/`
#[tokio::test]
async fn trims_trailing_slash() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_planet("Tatooine")
        .build()
        .await?;

    let (status, body) = test.send(get("/planet/1/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Tatooine");

    let (status, body) = test.send(get("/user/1/")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "User not found" }));

    Ok(())
}

/// Tests that unknown paths are not found.
///
/// Expected: 404 NOT_FOUND
#[tokio::test]
async fn unknown_route_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let (status, _) = test.send(get("/starship")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);

    Ok(())
}

/// Tests that a known path with an unsupported method is rejected.
///
/// Expected: 405 METHOD_NOT_ALLOWED
#[tokio::test]
async fn unsupported_method_not_allowed() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let (status, _) = test
        .send(json_request(Method::PUT, "/planet", Value::Null))
        .await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

    Ok(())
}
