//! HTTP request handlers

use crate::api::models::{DataResponse, Item, MessageResponse, WelcomeResponse};
use crate::api::routes::ApiDoc;
use crate::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use tracing::debug;
use utoipa::openapi::{server::Server, OpenApi as OpenApiDocument};
use utoipa::OpenApi;

/// Welcome message
#[utoipa::path(
    get,
    path = "/",
    tag = "General",
    responses(
        (status = 200, description = "Welcome message", body = WelcomeResponse)
    )
)]
pub async fn home() -> Json<WelcomeResponse> {
    Json(WelcomeResponse::default())
}

/// List the sample items
#[utoipa::path(
    get,
    path = "/api/data",
    tag = "Items",
    responses(
        (status = 200, description = "All sample items", body = DataResponse)
    )
)]
pub async fn get_data() -> Json<DataResponse> {
    let items = Item::catalog();
    debug!(count = items.len(), "Serving sample items");
    Json(DataResponse::success(items))
}

/// Greet the caller by name
#[utoipa::path(
    get,
    path = "/api/message/{name}",
    tag = "Greetings",
    params(
        ("name" = String, Path, description = "Name to greet, URL-decoded")
    ),
    responses(
        (status = 200, description = "Greeting", body = MessageResponse)
    )
)]
pub async fn get_message(Path(name): Path<String>) -> Json<MessageResponse> {
    debug!(name = %name, "Building greeting");
    Json(MessageResponse::greeting(&name))
}

/// OpenAPI document for this service.
///
/// `servers` is only listed when `server.public_url` is configured.
pub async fn openapi_json(State(state): State<Arc<AppState>>) -> Json<OpenApiDocument> {
    let mut doc = ApiDoc::openapi();
    if let Some(url) = &state.settings.server.public_url {
        doc.servers = Some(vec![Server::new(url.as_str())]);
    }
    Json(doc)
}
