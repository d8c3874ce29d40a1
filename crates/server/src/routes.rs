pub mod resources;

use axum::{
    extract::State,
    http::StatusCode,
    middleware,
    routing::get,
    Json, Router,
};
use common::types::Health;
use models::{customer, product, vendor};
use service::{Backend, Ready, Record, Store};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{warn, Level};

use crate::{metrics, state::AppState};

pub async fn liveness() -> Json<Health> {
    Json(Health::ok())
}

pub async fn readiness<D: Ready + 'static>(State(state): State<AppState<D>>) -> (StatusCode, Json<Health>) {
    if state.backend.ready().await {
        (StatusCode::OK, Json(Health::ok()))
    } else {
        warn!("readiness probe failed: storage unreachable");
        (StatusCode::SERVICE_UNAVAILABLE, Json(Health::failure()))
    }
}

/// The five CRUD routes of one entity kind under `base`.
fn resource_routes<R, D>(base: &str) -> Router<AppState<D>>
where
    R: Record,
    D: Store<R> + 'static,
{
    Router::new()
        .route(base, get(resources::list::<R, D>).post(resources::create::<R, D>))
        .route(
            &format!("{base}/:id"),
            get(resources::get::<R, D>)
                .put(resources::update::<R, D>)
                .delete(resources::delete::<R, D>),
        )
}

/// Build the full application router over any storage backend.
pub fn build_router<D: Backend>(state: AppState<D>, cors: CorsLayer) -> Router {
    let entities = Router::new()
        .merge(resource_routes::<customer::Model, D>("/customers"))
        .merge(resource_routes::<product::Model, D>("/products"))
        .merge(resource_routes::<models::service::Model, D>("/services"))
        .merge(resource_routes::<vendor::Model, D>("/vendors"));

    let ops = Router::new()
        .route("/liveness", get(liveness))
        .route("/readiness", get(readiness::<D>))
        .route("/metrics", get(metrics::encode_metrics));

    ops.merge(entities)
        .route_layer(middleware::from_fn(metrics::track_metrics))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx at ERROR
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
