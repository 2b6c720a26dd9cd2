use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::post,
};

use crate::{
    dto::favorites::FavoriteRequest,
    error::{AppError, AppResult},
    middleware::{json_body::JsonBody, params::IdPath},
    models::Favorite,
    response::{ErrorBody, MessageResponse},
    services::favorite_service::{self, FavoriteTarget},
    state::AppState,
};

const USER_ID_REQUIRED: &str = "user_id is required";

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/favorite/planet/{planet_id}",
            post(add_favorite_planet).delete(delete_favorite_planet),
        )
        .route(
            "/favorite/people/{people_id}",
            post(add_favorite_person).delete(delete_favorite_person),
        )
}

#[utoipa::path(
    post,
    path = "/favorite/planet/{planet_id}",
    params(
        ("planet_id" = i32, Path, description = "Planet ID")
    ),
    request_body = FavoriteRequest,
    responses(
        (status = 201, description = "Planet added to favorites", body = Favorite),
        (status = 400, description = "user_id missing or favorite not saved", body = ErrorBody)
    ),
    tag = "Favorites"
)]
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    IdPath(planet_id): IdPath<i32>,
    JsonBody(payload): JsonBody<FavoriteRequest>,
) -> AppResult<(StatusCode, Json<Favorite>)> {
    create(&state, payload, FavoriteTarget::Planet(planet_id)).await
}

#[utoipa::path(
    post,
    path = "/favorite/people/{people_id}",
    params(
        ("people_id" = i32, Path, description = "Person ID")
    ),
    request_body = FavoriteRequest,
    responses(
        (status = 201, description = "Person added to favorites", body = Favorite),
        (status = 400, description = "user_id missing or favorite not saved", body = ErrorBody)
    ),
    tag = "Favorites"
)]
pub async fn add_favorite_person(
    State(state): State<AppState>,
    IdPath(people_id): IdPath<i32>,
    JsonBody(payload): JsonBody<FavoriteRequest>,
) -> AppResult<(StatusCode, Json<Favorite>)> {
    create(&state, payload, FavoriteTarget::Person(people_id)).await
}

#[utoipa::path(
    delete,
    path = "/favorite/planet/{planet_id}",
    params(
        ("planet_id" = i32, Path, description = "Planet ID")
    ),
    request_body = FavoriteRequest,
    responses(
        (status = 200, description = "Favorite deleted", body = MessageResponse),
        (status = 404, description = "user_id missing or favorite not found", body = ErrorBody)
    ),
    tag = "Favorites"
)]
pub async fn delete_favorite_planet(
    State(state): State<AppState>,
    IdPath(planet_id): IdPath<i32>,
    JsonBody(payload): JsonBody<FavoriteRequest>,
) -> AppResult<Json<MessageResponse>> {
    remove(&state, payload, FavoriteTarget::Planet(planet_id)).await
}

#[utoipa::path(
    delete,
    path = "/favorite/people/{people_id}",
    params(
        ("people_id" = i32, Path, description = "Person ID")
    ),
    request_body = FavoriteRequest,
    responses(
        (status = 200, description = "Favorite deleted", body = MessageResponse),
        (status = 404, description = "user_id missing or favorite not found", body = ErrorBody)
    ),
    tag = "Favorites"
)]
pub async fn delete_favorite_person(
    State(state): State<AppState>,
    IdPath(people_id): IdPath<i32>,
    JsonBody(payload): JsonBody<FavoriteRequest>,
) -> AppResult<Json<MessageResponse>> {
    remove(&state, payload, FavoriteTarget::Person(people_id)).await
}

async fn create(
    state: &AppState,
    payload: FavoriteRequest,
    target: FavoriteTarget,
) -> AppResult<(StatusCode, Json<Favorite>)> {
    let user_id = payload
        .user_id
        .ok_or_else(|| AppError::Validation(USER_ID_REQUIRED.into()))?;

    let favorite = favorite_service::add_favorite(&state.orm, user_id, target).await?;
    Ok((StatusCode::CREATED, Json(favorite)))
}

// A missing user_id answers 404 here, unlike creation.
async fn remove(
    state: &AppState,
    payload: FavoriteRequest,
    target: FavoriteTarget,
) -> AppResult<Json<MessageResponse>> {
    let user_id = payload
        .user_id
        .ok_or_else(|| AppError::MissingField(USER_ID_REQUIRED.into()))?;

    favorite_service::remove_favorite(&state.orm, user_id, target).await?;
    Ok(Json(MessageResponse::new("Favorite deleted")))
}
