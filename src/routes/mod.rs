use axum::{Router, routing::get};

use crate::state::AppState;

pub mod doc;
pub mod favorites;
pub mod health;
pub mod people;
pub mod planets;
pub mod sitemap;
pub mod users;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/", get(sitemap::sitemap))
        .route("/health", get(health::health_check))
        .merge(users::router())
        .merge(people::router())
        .merge(planets::router())
        .merge(favorites::router())
}
