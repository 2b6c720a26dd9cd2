use axum::{
    Json, Router,
    extract::State,
    routing::get,
};

use crate::{
    error::{AppError, AppResult},
    middleware::params::IdPath,
    models::Person,
    response::ErrorBody,
    services::people_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/people", get(list_people))
        .route("/people/{id}", get(get_person))
}

#[utoipa::path(
    get,
    path = "/people",
    responses(
        (status = 200, description = "All people", body = Vec<Person>)
    ),
    tag = "People"
)]
pub async fn list_people(State(state): State<AppState>) -> AppResult<Json<Vec<Person>>> {
    let people = people_service::list_people(&state.orm).await?;
    Ok(Json(people))
}

#[utoipa::path(
    get,
    path = "/people/{id}",
    params(
        ("id" = i32, Path, description = "Person ID")
    ),
    responses(
        (status = 200, description = "Get person", body = Person),
        (status = 404, description = "Person not found", body = ErrorBody),
    ),
    tag = "People"
)]
pub async fn get_person(
    IdPath(id): IdPath<i32>,
    State(state): State<AppState>,
) -> AppResult<Json<Person>> {
    let person = people_service::find_person(&state.orm, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Person not found".into()))?;
    Ok(Json(person))
}
