use axum::{
    Json, Router,
    extract::State,
    routing::get,
};

use crate::{
    error::{AppError, AppResult},
    middleware::params::IdPath,
    models::Planet,
    response::ErrorBody,
    services::planet_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/planets", get(list_planets))
        .route("/planets/{id}", get(get_planet))
}

#[utoipa::path(
    get,
    path = "/planets",
    responses(
        (status = 200, description = "All planets", body = Vec<Planet>)
    ),
    tag = "Planets"
)]
pub async fn list_planets(State(state): State<AppState>) -> AppResult<Json<Vec<Planet>>> {
    let planets = planet_service::list_planets(&state.orm).await?;
    Ok(Json(planets))
}

#[utoipa::path(
    get,
    path = "/planets/{id}",
    params(
        ("id" = i32, Path, description = "Planet ID")
    ),
    responses(
        (status = 200, description = "Get planet", body = Planet),
        (status = 404, description = "Planet not found", body = ErrorBody),
    ),
    tag = "Planets"
)]
pub async fn get_planet(
    IdPath(id): IdPath<i32>,
    State(state): State<AppState>,
) -> AppResult<Json<Planet>> {
    let planet = planet_service::find_planet(&state.orm, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Planet not found".into()))?;
    Ok(Json(planet))
}
