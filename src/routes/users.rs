use axum::{
    Json, Router,
    extract::State,
    routing::get,
};

use crate::{
    dto::favorites::UserFavoritesQuery,
    error::AppResult,
    middleware::params::QueryParams,
    models::{Favorite, User},
    services::{favorite_service, user_service},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users))
        .route("/users/favorites", get(list_user_favorites))
}

#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All users", body = Vec<User>)
    ),
    tag = "Users"
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = user_service::list_users(&state.orm).await?;
    Ok(Json(users))
}

#[utoipa::path(
    get,
    path = "/users/favorites",
    params(UserFavoritesQuery),
    responses(
        (status = 200, description = "Favorites of the current user", body = Vec<Favorite>)
    ),
    tag = "Users"
)]
pub async fn list_user_favorites(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<UserFavoritesQuery>,
) -> AppResult<Json<Vec<Favorite>>> {
    let favorites = favorite_service::list_for_user(&state.orm, query.user_id()).await?;
    Ok(Json(favorites))
}
