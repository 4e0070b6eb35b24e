//! Resource handlers
//!
//! JSONPlaceholder-style CRUD over every kind in the catalog. The first path
//! segment names the collection (`posts`, `users`, `comments`, `todos`).

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

use crate::app::{Catalog, DynResourceService};
use crate::domain::entities::{records_to_value, DeleteReceipt, Record, ResourceKind};
use crate::error::AppError;

fn resolve(collection: &str) -> Result<ResourceKind, AppError> {
    ResourceKind::from_collection(collection)
        .ok_or_else(|| AppError::NotFound(format!("unknown resource: {}", collection)))
}

fn service<'a>(catalog: &'a Catalog, collection: &str) -> Result<&'a DynResourceService, AppError> {
    Ok(catalog.get(resolve(collection)?))
}

fn body(payload: Result<Json<Value>, JsonRejection>) -> Result<Value, AppError> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

/// GET /:resource
///
/// Every query pair filters by field equality. A pair on the owner field
/// (`?userId=1`, `?postId=1`) lists by owner.
pub async fn list_resources(
    State(catalog): State<Arc<Catalog>>,
    Path(resource): Path<String>,
    Query(criteria): Query<Vec<(String, String)>>,
) -> Result<Json<Value>, AppError> {
    let records = service(&catalog, &resource)?.query(&criteria)?;
    Ok(Json(records_to_value(&records)))
}

/// POST /:resource
pub async fn create_resource(
    State(catalog): State<Arc<Catalog>>,
    Path(resource): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Record>), AppError> {
    let input = body(payload)?;
    let record = service(&catalog, &resource)?.create(&input)?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /:resource/:id
pub async fn get_resource(
    State(catalog): State<Arc<Catalog>>,
    Path((resource, id)): Path<(String, String)>,
) -> Result<Json<Record>, AppError> {
    let record = service(&catalog, &resource)?.get_by_id(id)?;
    Ok(Json(record))
}

/// PUT|PATCH /:resource/:id
pub async fn update_resource(
    State(catalog): State<Arc<Catalog>>,
    Path((resource, id)): Path<(String, String)>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Record>, AppError> {
    let patch = body(payload)?;
    let record = service(&catalog, &resource)?.update(id, &patch)?;
    Ok(Json(record))
}

/// DELETE /:resource/:id
pub async fn delete_resource(
    State(catalog): State<Arc<Catalog>>,
    Path((resource, id)): Path<(String, String)>,
) -> Result<Json<DeleteReceipt>, AppError> {
    let receipt = service(&catalog, &resource)?.delete(id)?;
    Ok(Json(receipt))
}

/// GET /:resource/:id/:nested
///
/// Records of the nested kind owned by the parent, e.g. `/posts/1/comments`.
pub async fn list_nested(
    State(catalog): State<Arc<Catalog>>,
    Path((resource, id, nested)): Path<(String, String, String)>,
) -> Result<Json<Value>, AppError> {
    let parent = resolve(&resource)?;
    let child = resolve(&nested)?;

    let owned_by_parent = catalog
        .get(child)
        .schema()
        .owner
        .is_some_and(|owner| owner.kind == parent);
    if !owned_by_parent {
        return Err(AppError::NotFound(format!(
            "{} has no nested {}",
            resource, nested
        )));
    }

    let records = catalog.get(child).list_by_owner(id)?;
    Ok(Json(records_to_value(&records)))
}
