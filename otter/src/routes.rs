//! # Dashboard Routes
//!
//! A thin axum adapter over the registry. Every route sits behind the
//! [`DashboardGate`]:
//!
//! | Route                               | Response                                  |
//! |-------------------------------------|-------------------------------------------|
//! | `GET /`                             | route names and display names             |
//! | `GET /{resource}`                   | one page of envelopes + `Content-Range`   |
//! | `GET /{resource}/relational-data`   | every row of every related resource       |
//! | `GET /{resource}/{key}`             | envelope of one row                       |
//! | `GET /{resource}/{key}/relations`   | relation descriptors of one row           |
//!
//! ```rust,ignore
//! let dashboard = Dashboard::new(registry, db, &OtterConfig::from_env());
//! let app = axum::Router::new().nest("/otter", otter::routes::router(dashboard));
//! ```

use axum::{
    Json, Router,
    extract::{Path, Query, Request, State},
    http::HeaderMap,
    middleware::{self, Next},
    response::Response,
};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::config::OtterConfig;
use crate::envelope::Envelope;
use crate::errors::OtterError;
use crate::fetcher::RelationCollections;
use crate::gate::DashboardGate;
use crate::models::ListOptions;
use crate::pagination::{calculate_content_range, parse_pagination};
use crate::registry::ResourceRegistry;
use crate::relations::RelationMap;
use crate::resource::KeyValue;

/// Shared state of the dashboard routes.
#[derive(Clone, Debug)]
pub struct Dashboard {
    pub registry: Arc<ResourceRegistry>,
    pub db: DatabaseConnection,
    pub gate: DashboardGate,
    pub per_page: u64,
}

impl Dashboard {
    pub fn new(registry: ResourceRegistry, db: DatabaseConnection, config: &OtterConfig) -> Self {
        Self {
            registry: Arc::new(registry),
            db,
            gate: DashboardGate::new(config.environment.clone()),
            per_page: config.per_page.max(1),
        }
    }

    /// Replace the environment based gate
    #[must_use]
    pub fn with_gate(mut self, gate: DashboardGate) -> Self {
        self.gate = gate;
        self
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ResourceNames {
    /// Route names, e.g. `user_addresses`
    pub resources: Vec<String>,
    /// Display names, e.g. `User Addresses`
    pub titles: Vec<String>,
}

#[derive(OpenApi)]
#[openapi(info(title = "Otter dashboard", description = "Read-only views of registered resources"))]
struct DashboardApi;

fn api_router() -> OpenApiRouter<Dashboard> {
    OpenApiRouter::with_openapi(DashboardApi::openapi())
        .routes(routes!(resource_names))
        .routes(routes!(index))
        .routes(routes!(relational_data))
        .routes(routes!(show))
        .routes(routes!(relations))
}

/// Router serving every registered resource, gated by `dashboard.gate`.
pub fn router(dashboard: Dashboard) -> Router {
    let (router, _) = api_router().split_for_parts();
    router
        .layer(middleware::from_fn_with_state(dashboard.clone(), authorize))
        .with_state(dashboard)
}

/// OpenAPI document of the dashboard routes
#[must_use]
pub fn openapi() -> utoipa::openapi::OpenApi {
    api_router().split_for_parts().1
}

async fn authorize(
    State(dashboard): State<Dashboard>,
    request: Request,
    next: Next,
) -> Result<Response, OtterError> {
    if !dashboard.gate.check(&request) {
        return Err(OtterError::forbidden("Access to the dashboard is not allowed"));
    }
    Ok(next.run(request).await)
}

fn parse_key(raw: &str) -> Result<KeyValue, OtterError> {
    if raw.trim().is_empty() {
        return Err(OtterError::bad_request("Resource key must not be blank"));
    }
    Ok(KeyValue::parse(raw))
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Names of every registered resource", body = ResourceNames),
        (status = 403, description = "Refused by the dashboard gate")
    )
)]
async fn resource_names(State(dashboard): State<Dashboard>) -> Json<ResourceNames> {
    Json(ResourceNames {
        resources: dashboard.registry.resource_names(false),
        titles: dashboard.registry.resource_names(true),
    })
}

#[utoipa::path(
    get,
    path = "/{resource}",
    params(
        ("resource" = String, Path, description = "Route name of the resource"),
        ListOptions
    ),
    responses(
        (status = 200, description = "One page of envelopes, range in the Content-Range header"),
        (status = 403, description = "Refused by the dashboard gate"),
        (status = 404, description = "No resource answers to the route name")
    )
)]
async fn index(
    State(dashboard): State<Dashboard>,
    Path(resource): Path<String>,
    Query(options): Query<ListOptions>,
) -> Result<(HeaderMap, Json<Vec<Envelope>>), OtterError> {
    let target = dashboard.registry.by_route_name(&resource)?;
    let (offset, limit) = parse_pagination(&options, dashboard.per_page);

    let (rows, total) = target
        .page(&dashboard.registry, &dashboard.db, offset, limit)
        .await?;

    let headers = calculate_content_range(offset, limit, total, &target.route_name());
    Ok((headers, Json(rows)))
}

#[utoipa::path(
    get,
    path = "/{resource}/relational-data",
    params(("resource" = String, Path, description = "Route name of the resource")),
    responses(
        (status = 200, description = "Every row of every related resource, keyed by relation"),
        (status = 403, description = "Refused by the dashboard gate"),
        (status = 404, description = "No resource answers to the route name")
    )
)]
async fn relational_data(
    State(dashboard): State<Dashboard>,
    Path(resource): Path<String>,
) -> Result<Json<RelationCollections>, OtterError> {
    let target = dashboard.registry.by_route_name(&resource)?;
    let collections = target
        .relation_collections(&dashboard.registry, &dashboard.db)
        .await?;
    Ok(Json(collections))
}

#[utoipa::path(
    get,
    path = "/{resource}/{key}",
    params(
        ("resource" = String, Path, description = "Route name of the resource"),
        ("key" = String, Path, description = "Route key of the row")
    ),
    responses(
        (status = 200, description = "Envelope of the row"),
        (status = 403, description = "Refused by the dashboard gate"),
        (status = 404, description = "Unknown resource or no row with that key")
    )
)]
async fn show(
    State(dashboard): State<Dashboard>,
    Path((resource, key)): Path<(String, String)>,
) -> Result<Json<Envelope>, OtterError> {
    let target = dashboard.registry.by_route_name(&resource)?;
    let key = parse_key(&key)?;
    let envelope = target.show(&dashboard.registry, &dashboard.db, &key).await?;
    Ok(Json(envelope))
}

#[utoipa::path(
    get,
    path = "/{resource}/{key}/relations",
    params(
        ("resource" = String, Path, description = "Route name of the resource"),
        ("key" = String, Path, description = "Route key of the row")
    ),
    responses(
        (status = 200, description = "Relation descriptors of the row, keyed by relation"),
        (status = 403, description = "Refused by the dashboard gate"),
        (status = 404, description = "Unknown resource or no row with that key")
    )
)]
async fn relations(
    State(dashboard): State<Dashboard>,
    Path((resource, key)): Path<(String, String)>,
) -> Result<Json<RelationMap>, OtterError> {
    let target = dashboard.registry.by_route_name(&resource)?;
    let key = parse_key(&key)?;
    let relations = target
        .relations(&dashboard.registry, &dashboard.db, Some(&key))
        .await?;
    Ok(Json(relations))
}
