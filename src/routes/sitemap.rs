use axum::Json;
use serde::Serialize;
use utoipa::{OpenApi, ToSchema, openapi::path::PathItem};

use crate::routes::doc::ApiDoc;

#[derive(Debug, Serialize, ToSchema, PartialEq, Eq)]
pub struct RouteEntry {
    pub method: String,
    pub path: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RouteList {
    pub routes: Vec<RouteEntry>,
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Every documented endpoint", body = RouteList)
    ),
    tag = "Sitemap"
)]
pub async fn sitemap() -> Json<RouteList> {
    Json(RouteList {
        routes: documented_routes(),
    })
}

/// Endpoints listed in the OpenAPI document, sorted by path.
pub fn documented_routes() -> Vec<RouteEntry> {
    let doc = ApiDoc::openapi();
    doc.paths
        .paths
        .iter()
        .flat_map(|(path, item)| {
            methods(item).into_iter().map(move |method| RouteEntry {
                method: method.to_string(),
                path: path.clone(),
            })
        })
        .collect()
}

fn methods(item: &PathItem) -> Vec<&'static str> {
    [
        ("GET", item.get.is_some()),
        ("POST", item.post.is_some()),
        ("PUT", item.put.is_some()),
        ("PATCH", item.patch.is_some()),
        ("DELETE", item.delete.is_some()),
    ]
    .into_iter()
    .filter_map(|(method, present)| present.then_some(method))
    .collect()
}
