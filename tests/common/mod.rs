#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Method, Request, StatusCode, header::CONTENT_TYPE},
};
use sea_orm::DatabaseConnection;
use serde_json::Value;
use starwars_blog_api::{
    app::{App, build_app},
    db::{create_orm_conn, run_migrations},
    seed::seed_all,
    state::AppState,
};
use tower::ServiceExt;

/// Fresh in-memory database with the schema applied and sample data loaded.
pub async fn seeded_db() -> anyhow::Result<DatabaseConnection> {
    let orm = create_orm_conn("sqlite::memory:").await?;
    run_migrations(&orm).await?;
    seed_all(&orm).await?;
    Ok(orm)
}

pub async fn test_app() -> anyhow::Result<App> {
    let orm = seeded_db().await?;
    Ok(build_app(AppState { orm }))
}

pub enum Payload<'a> {
    Empty,
    Json(Value),
    Raw(&'a str),
}

pub async fn send(
    app: &App,
    method: Method,
    uri: &str,
    payload: Payload<'_>,
) -> anyhow::Result<(StatusCode, Value)> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match payload {
        Payload::Empty => builder.body(Body::empty())?,
        Payload::Json(value) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))?,
        Payload::Raw(text) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(text.to_owned()))?,
    };

    let response = app.clone().oneshot(request).await?;
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };
    Ok((status, body))
}

pub async fn get(app: &App, uri: &str) -> anyhow::Result<(StatusCode, Value)> {
    send(app, Method::GET, uri, Payload::Empty).await
}
