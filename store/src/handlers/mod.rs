//! HTTP handlers
//!
//! Axum request handlers and the router of the fake REST server.

pub mod resources;

use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::app::Catalog;

pub use resources::{
    create_resource, delete_resource, get_resource, list_nested, list_resources, update_resource,
};

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the router over a catalog. Layers are left to the caller.
pub fn router(catalog: Arc<Catalog>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/:resource", get(list_resources).post(create_resource))
        .route(
            "/:resource/:id",
            get(get_resource)
                .put(update_resource)
                .patch(update_resource)
                .delete(delete_resource),
        )
        .route("/:resource/:id/:nested", get(list_nested))
        .with_state(catalog)
}
