use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::favorites::FavoriteRequest,
    models::{Favorite, Person, Planet, User},
    response::{ErrorBody, MessageResponse},
    routes::{favorites, health, people, planets, sitemap, users},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        sitemap::sitemap,
        health::health_check,
        users::list_users,
        users::list_user_favorites,
        people::list_people,
        people::get_person,
        planets::list_planets,
        planets::get_planet,
        favorites::add_favorite_planet,
        favorites::add_favorite_person,
        favorites::delete_favorite_planet,
        favorites::delete_favorite_person
    ),
    components(
        schemas(
            User,
            Person,
            Planet,
            Favorite,
            FavoriteRequest,
            ErrorBody,
            MessageResponse,
            health::HealthData,
            sitemap::RouteEntry,
            sitemap::RouteList
        )
    ),
    tags(
        (name = "Sitemap", description = "Generated list of endpoints"),
        (name = "Health", description = "Health check endpoint"),
        (name = "Users", description = "User endpoints"),
        (name = "People", description = "People endpoints"),
        (name = "Planets", description = "Planet endpoints"),
        (name = "Favorites", description = "Favorite endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
