mod common;

use axum::http::{Method, StatusCode};
use sea_orm::{ConnectionTrait, Statement};
use serde_json::json;
use starwars_blog_api::{app::build_app, state::AppState};

use common::Payload;

#[tokio::test]
async fn add_list_and_delete_planet_favorite() -> anyhow::Result<()> {
    let app = common::test_app().await?;

    let (status, favorite) = common::send(
        &app,
        Method::POST,
        "/favorite/planet/5",
        Payload::Json(json!({ "user_id": 1 })),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(favorite["planet_id"], json!(5));
    assert_eq!(favorite["user_id"], json!(1));
    assert_eq!(favorite["people_id"], json!(null));

    let (status, favorites) = common::get(&app, "/users/favorites").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(favorites, json!([favorite.clone()]));

    let (status, body) = common::send(
        &app,
        Method::DELETE,
        "/favorite/planet/5",
        Payload::Json(json!({ "user_id": 1 })),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Favorite deleted" }));

    let (_, favorites) = common::get(&app, "/users/favorites").await?;
    assert_eq!(favorites, json!([]));
    Ok(())
}

#[tokio::test]
async fn add_and_delete_person_favorite() -> anyhow::Result<()> {
    let app = common::test_app().await?;

    let (status, favorite) = common::send(
        &app,
        Method::POST,
        "/favorite/people/3",
        Payload::Json(json!({ "user_id": 2 })),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(favorite["people_id"], json!(3));
    assert_eq!(favorite["planet_id"], json!(null));

    let (_, favorites) = common::get(&app, "/users/favorites?user_id=2").await?;
    assert_eq!(favorites, json!([favorite]));

    // A planet favorite with the same id is a different row.
    let (status, _) = common::send(
        &app,
        Method::DELETE,
        "/favorite/planet/3",
        Payload::Json(json!({ "user_id": 2 })),
    )
    .await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = common::send(
        &app,
        Method::DELETE,
        "/favorite/people/3",
        Payload::Json(json!({ "user_id": 2 })),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn favorites_are_scoped_to_their_user() -> anyhow::Result<()> {
    let app = common::test_app().await?;

    common::send(
        &app,
        Method::POST,
        "/favorite/planet/1",
        Payload::Json(json!({ "user_id": 3 })),
    )
    .await?;

    let (_, default_user) = common::get(&app, "/users/favorites").await?;
    assert_eq!(default_user, json!([]));

    let (_, other_user) = common::get(&app, "/users/favorites?user_id=3").await?;
    assert_eq!(other_user.as_array().map(Vec::len), Some(1));

    let (status, _) = common::send(
        &app,
        Method::DELETE,
        "/favorite/planet/1",
        Payload::Json(json!({ "user_id": 1 })),
    )
    .await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn duplicate_favorites_are_deleted_one_at_a_time() -> anyhow::Result<()> {
    let app = common::test_app().await?;

    let mut ids = Vec::new();
    for _ in 0..2 {
        let (_, favorite) = common::send(
            &app,
            Method::POST,
            "/favorite/planet/2",
            Payload::Json(json!({ "user_id": 1 })),
        )
        .await?;
        ids.push(favorite["id"].clone());
    }

    let (status, _) = common::send(
        &app,
        Method::DELETE,
        "/favorite/planet/2",
        Payload::Json(json!({ "user_id": 1 })),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);

    let (_, remaining) = common::get(&app, "/users/favorites").await?;
    let remaining = remaining.as_array().cloned().unwrap_or_default();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0]["id"], ids[1]);
    Ok(())
}

#[tokio::test]
async fn create_without_user_id_is_400() -> anyhow::Result<()> {
    let app = common::test_app().await?;

    let (status, body) =
        common::send(&app, Method::POST, "/favorite/planet/5", Payload::Empty).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "user_id is required" }));

    let (status, _) = common::send(
        &app,
        Method::POST,
        "/favorite/people/1",
        Payload::Json(json!({})),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, favorites) = common::get(&app, "/users/favorites").await?;
    assert_eq!(favorites, json!([]));
    Ok(())
}

#[tokio::test]
async fn delete_without_user_id_is_404() -> anyhow::Result<()> {
    let app = common::test_app().await?;

    let (status, body) =
        common::send(&app, Method::DELETE, "/favorite/people/1", Payload::Empty).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "user_id is required" }));
    Ok(())
}

#[tokio::test]
async fn delete_of_absent_favorite_is_404() -> anyhow::Result<()> {
    let app = common::test_app().await?;

    let (status, body) = common::send(
        &app,
        Method::DELETE,
        "/favorite/planet/5",
        Payload::Json(json!({ "user_id": 1 })),
    )
    .await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Favorite not found" }));
    Ok(())
}

#[tokio::test]
async fn malformed_body_uses_api_exception_shape() -> anyhow::Result<()> {
    let app = common::test_app().await?;

    let (status, body) = common::send(
        &app,
        Method::POST,
        "/favorite/planet/1",
        Payload::Raw("{\"user_id\": "),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status_code"], json!(400));
    assert!(body["message"].as_str().is_some_and(|m| m.starts_with("Invalid JSON body")));
    assert!(body.get("error").is_none());
    Ok(())
}

#[tokio::test]
async fn failed_insert_is_a_client_error() -> anyhow::Result<()> {
    let orm = common::seeded_db().await?;
    orm.execute(Statement::from_string(
        orm.get_database_backend(),
        "DROP TABLE favorites",
    ))
    .await?;
    let app = build_app(AppState { orm });

    let (status, body) = common::send(
        &app,
        Method::POST,
        "/favorite/planet/1",
        Payload::Json(json!({ "user_id": 1 })),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Favorite could not be saved" }));
    Ok(())
}

#[tokio::test]
async fn trailing_slash_on_favorite_routes() -> anyhow::Result<()> {
    let app = common::test_app().await?;

    let (status, favorite) = common::send(
        &app,
        Method::POST,
        "/favorite/planet/5/",
        Payload::Json(json!({ "user_id": 1 })),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(favorite["planet_id"], json!(5));

    let (status, _) = common::send(
        &app,
        Method::DELETE,
        "/favorite/planet/5/",
        Payload::Json(json!({ "user_id": 1 })),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn non_integer_favorite_target_is_404() -> anyhow::Result<()> {
    let app = common::test_app().await?;

    let (status, body) = common::send(
        &app,
        Method::POST,
        "/favorite/people/luke",
        Payload::Json(json!({ "user_id": 1 })),
    )
    .await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status_code"], json!(404));
    assert_eq!(body["path"], json!("/favorite/people/luke"));
    Ok(())
}

#[tokio::test]
async fn bad_user_id_query_is_json_400() -> anyhow::Result<()> {
    let app = common::test_app().await?;

    let (status, body) = common::get(&app, "/users/favorites?user_id=x").await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status_code"], json!(400));
    assert!(body["message"].as_str().is_some_and(|m| !m.is_empty()));
    Ok(())
}

#[tokio::test]
async fn string_user_id_is_rejected_by_the_typed_body() -> anyhow::Result<()> {
    let app = common::test_app().await?;

    let (status, body) = common::send(
        &app,
        Method::POST,
        "/favorite/planet/1",
        Payload::Json(json!({ "user_id": "1" })),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status_code"], json!(400));
    assert!(body["message"].as_str().is_some_and(|m| m.starts_with("Invalid JSON body")));
    Ok(())
}

#[tokio::test]
async fn unavailable_database_on_insert_is_a_client_error() -> anyhow::Result<()> {
    let orm = common::seeded_db().await?;
    let app = build_app(AppState { orm: orm.clone() });
    orm.close().await?;

    let (status, body) = common::send(
        &app,
        Method::POST,
        "/favorite/people/1",
        Payload::Json(json!({ "user_id": 1 })),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Favorite could not be saved" }));
    Ok(())
}
