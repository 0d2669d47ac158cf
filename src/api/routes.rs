//! HTTP route definitions

use crate::api::handlers;
use crate::api::models::*;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Sample API",
        version = "0.1.0",
        description = "Welcome message, sample items and greetings as JSON.",
        license(name = "MIT"),
    ),
    paths(
        handlers::home,
        handlers::get_data,
        handlers::get_message,
    ),
    components(schemas(
        WelcomeResponse,
        Item,
        DataResponse,
        MessageResponse,
    )),
    tags(
        (name = "General", description = "Service entry point"),
        (name = "Items", description = "Fixed sample items"),
        (name = "Greetings", description = "Personalised greetings"),
    )
)]
pub struct ApiDoc;

/// Create the main application router
pub fn create_router(state: Arc<crate::AppState>) -> Router {
    let api_routes = Router::new()
        .route("/data", get(handlers::get_data))
        .route("/message/:name", get(handlers::get_message));

    Router::new()
        .route("/", get(handlers::home))
        .route("/api-docs/openapi.json", get(handlers::openapi_json))
        .nest("/api", api_routes)
        .with_state(state)
        // Add tracing layer
        .layer(TraceLayer::new_for_http())
        // Any origin, method and header
        .layer(CorsLayer::permissive())
}
