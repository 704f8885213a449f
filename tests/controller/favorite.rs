//! Tests for the favorite endpoints.

use axum::{
    extract::State,
    http::{Method, StatusCode},
    response::IntoResponse,
};
use holocron::{
    model::user::FavoriteUserDto,
    server::controller::{
        favorite::{
            add_favorite_character, add_favorite_planet, delete_favorite_character,
            delete_favorite_planet, get_all_favorites, get_favorite,
        },
        util::extract::{AppJson, AppPath},
    },
};
use serde_json::json;

use super::*;

async fn seeded() -> Result<TestContext, TestError> {
    TestBuilder::new()
        .with_catalog_tables()
        .with_mock_user("luke@x.com")
        .with_mock_planet("Tatooine")
        .with_mock_character("Leia Organa")
        .build()
        .await
}

/// Tests adding a favorite planet, then adding it again.
///
/// Expected: 200 OK with the success message both times, and two independent rows
#[tokio::test]
async fn add_favorite_planet_twice_creates_two_rows() -> Result<(), TestError> {
    let test = seeded().await?;

    for _ in 0..2 {
        let result = add_favorite_planet(
            State(test.to_app_state()),
            AppPath(1),
            AppJson(FavoriteUserDto { id: 1 }),
        )
        .await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            json_body(resp).await,
            json!({ "message": "Favorite planet created successfully." })
        );
    }

    let (_, favorites) = test.send(get("/favorite")).await;
    let favorites = favorites.as_array().unwrap();
    assert_eq!(favorites.len(), 2);
    assert_ne!(favorites[0]["id"], favorites[1]["id"]);
    assert!(favorites
        .iter()
        .all(|f| f["planet"]["id"] == 1 && f["user"]["id"] == 1));

    Ok(())
}

/// Tests adding a favorite character through the router.
///
/// Expected: 200 OK with the success message
#[tokio::test]
async fn add_favorite_character_success() -> Result<(), TestError> {
    let test = seeded().await?;

    let (status, body) = test
        .send(json_request(
            Method::POST,
            "/favorite/character/1",
            json!({ "id": 1 }),
        ))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "message": "Favorite character created successfully." })
    );

    let (_, favorites) = test.send(get("/user/favorite/1")).await;
    assert_eq!(favorites[0]["character"]["name"], "Leia Organa");
    assert!(favorites[0]["planet"].is_null());

    Ok(())
}

/// Tests adding a favorite for a user that does not exist.
///
/// Expected: Err with 404 NOT_FOUND and the user message, nothing written
#[tokio::test]
async fn add_favorite_planet_user_not_found() -> Result<(), TestError> {
    let test = seeded().await?;

    let result = add_favorite_planet(
        State(test.to_app_state()),
        AppPath(1),
        AppJson(FavoriteUserDto { id: 99 }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(resp).await, json!({ "message": "User not found" }));

    let (_, favorites) = test.send(get("/favorite")).await;
    assert_eq!(favorites, json!([]));

    Ok(())
}

/// Tests adding a favorite for a planet that does not exist.
///
/// Expected: Err with 404 NOT_FOUND and the planet message
#[tokio::test]
async fn add_favorite_planet_planet_not_found() -> Result<(), TestError> {
    let test = seeded().await?;

    let result = add_favorite_planet(
        State(test.to_app_state()),
        AppPath(99),
        AppJson(FavoriteUserDto { id: 1 }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        json_body(resp).await,
        json!({ "message": "Planet not found" })
    );

    Ok(())
}

/// Tests adding a favorite for a character that does not exist.
///
/// Expected: Err with 404 NOT_FOUND and the character message
#[tokio::test]
async fn add_favorite_character_character_not_found() -> Result<(), TestError> {
    let test = seeded().await?;

    let result = add_favorite_character(
        State(test.to_app_state()),
        AppPath(99),
        AppJson(FavoriteUserDto { id: 1 }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        json_body(resp).await,
        json!({ "message": "Character not found" })
    );

    Ok(())
}

/// Tests that a favorite body without a user ID is rejected.
///
/// Expected: 422 UNPROCESSABLE_ENTITY
#[tokio::test]
async fn add_favorite_planet_rejects_missing_user_id() -> Result<(), TestError> {
    let test = seeded().await?;

    let (status, body) = test
        .send(json_request(Method::POST, "/favorite/planet/1", json!({})))
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["message"].is_string());

    Ok(())
}

/// Tests deleting a favorite planet, then deleting it again.
///
/// Expected: 200 OK with the success message, then 404 NOT_FOUND
#[tokio::test]
async fn delete_favorite_planet_then_not_found() -> Result<(), TestError> {
    let test = seeded().await?;
    test.user().insert_favorite_planet(1, 1).await?;

    let (status, body) = test
        .send(json_request(
            Method::DELETE,
            "/favorite/planet/1",
            json!({ "id": 1 }),
        ))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Favorite deleted successfully." }));

    let (status, body) = test
        .send(json_request(
            Method::DELETE,
            "/favorite/planet/1",
            json!({ "id": 1 }),
        ))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Favorite not found" }));

    Ok(())
}

/// Tests deleting a favorite character through the router.
///
/// Expected: 200 OK with the success message and the favorite removed
#[tokio::test]
async fn delete_favorite_character_success() -> Result<(), TestError> {
    let test = seeded().await?;
    test.user().insert_favorite_character(1, 1).await?;

    let (status, body) = test
        .send(json_request(
            Method::DELETE,
            "/favorite/character/1",
            json!({ "id": 1 }),
        ))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Favorite deleted successfully." }));

    let (_, favorites) = test.send(get("/user/favorite/1")).await;
    assert_eq!(favorites, json!([]));

    Ok(())
}

/// Tests that deleting removes a single row when the favorite was added twice.
///
/// Expected: Ok with 200 OK, one row left
#[tokio::test]
async fn delete_favorite_planet_removes_one_duplicate() -> Result<(), TestError> {
    let test = seeded().await?;
    test.user().insert_favorite_planet(1, 1).await?;
    test.user().insert_favorite_planet(1, 1).await?;

    let result = delete_favorite_planet(
        State(test.to_app_state()),
        AppPath(1),
        AppJson(FavoriteUserDto { id: 1 }),
    )
    .await;

    assert!(result.is_ok());
    let (_, favorites) = test.send(get("/favorite")).await;
    assert_eq!(favorites.as_array().map(Vec::len), Some(1));

    Ok(())
}

/// Tests that deleting a character favorite leaves another user's favorite untouched.
///
/// Expected: Err with 404 NOT_FOUND for the user without the favorite
#[tokio::test]
async fn delete_favorite_character_only_own() -> Result<(), TestError> {
    let test = seeded().await?;
    let leia = test.user().insert_mock_user("leia@x.com").await?;
    test.user().insert_favorite_character(1, 1).await?;

    let result = delete_favorite_character(
        State(test.to_app_state()),
        AppPath(1),
        AppJson(FavoriteUserDto { id: leia.id }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let (_, favorites) = test.send(get("/user/favorite/1")).await;
    assert_eq!(favorites.as_array().map(Vec::len), Some(1));

    Ok(())
}

/// Tests deleting a favorite for a user that does not exist.
///
/// Expected: Err with 404 NOT_FOUND and the user message
#[tokio::test]
async fn delete_favorite_character_user_not_found() -> Result<(), TestError> {
    let test = seeded().await?;

    let result = delete_favorite_character(
        State(test.to_app_state()),
        AppPath(1),
        AppJson(FavoriteUserDto { id: 5 }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(resp).await, json!({ "message": "User not found" }));

    Ok(())
}

/// Tests getting a favorite that references neither a planet nor a character.
///
/// Expected: Ok with 200 OK and `null` planet and character
#[tokio::test]
async fn get_favorite_without_targets() -> Result<(), TestError> {
    let test = seeded().await?;
    let favorite = test.user().insert_favorite(1, None, None).await?;

    let result = get_favorite(State(test.to_app_state()), AppPath(favorite.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        json_body(resp).await,
        json!({
            "id": favorite.id,
            "planet": null,
            "character": null,
            "user": { "id": 1, "name": "Test User", "email": "luke@x.com" }
        })
    );

    Ok(())
}

/// Tests the 404 response for a favorite that does not exist.
///
/// Expected: Err with 404 NOT_FOUND and the favorite message
#[tokio::test]
async fn get_favorite_not_found() -> Result<(), TestError> {
    let test = seeded().await?;

    let result = get_favorite(State(test.to_app_state()), AppPath(3)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        json_body(resp).await,
        json!({ "message": "Favorite not found" })
    );

    Ok(())
}

/// Tests listing all favorites across users.
///
/// Expected: Ok with 200 OK and every favorite with its owner embedded
#[tokio::test]
async fn get_all_favorites_across_users() -> Result<(), TestError> {
    let test = seeded().await?;
    let leia = test.user().insert_mock_user("leia@x.com").await?;
    test.user().insert_favorite_planet(1, 1).await?;
    test.user().insert_favorite_character(leia.id, 1).await?;

    let result = get_all_favorites(State(test.to_app_state())).await;

    assert!(result.is_ok());
    let body = json_body(result.unwrap().into_response()).await;
    let favorites = body.as_array().unwrap();
    assert_eq!(favorites.len(), 2);
    assert_eq!(favorites[0]["user"]["email"], "luke@x.com");
    assert_eq!(favorites[1]["user"]["email"], "leia@x.com");

    Ok(())
}
