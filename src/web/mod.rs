//! HTTP front end: routes, handlers and HTML rendering.

use axum::{Router, middleware, routing::get};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use tera::Tera;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::db::Store;

mod assets;
pub mod category;
mod error;
mod health;
mod observability;
pub mod templates;
pub mod wild;

pub use error::AppError;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,

    pub store: Store,

    pub templates: Arc<Tera>,

    pub start_time: std::time::Instant,

    pub prometheus_handle: Option<PrometheusHandle>,
}

impl AppState {
    #[must_use]
    pub const fn store(&self) -> &Store {
        &self.store
    }
}

pub fn create_app_state(
    config: Config,
    store: Store,
    prometheus_handle: Option<PrometheusHandle>,
) -> anyhow::Result<Arc<AppState>> {
    let templates = Arc::new(templates::build()?);

    Ok(Arc::new(AppState {
        config: Arc::new(config),
        store,
        templates,
        start_time: std::time::Instant::now(),
        prometheus_handle,
    }))
}

pub async fn create_app_state_from_config(
    config: Config,
    prometheus_handle: Option<PrometheusHandle>,
) -> anyhow::Result<Arc<AppState>> {
    let store = Store::with_pool_options(
        &config.general.database_path,
        config.general.max_db_connections,
        config.general.min_db_connections,
    )
    .await?;

    create_app_state(config, store, prometheus_handle)
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(wild::index))
        .route("/show", get(wild::show_without_slug))
        .route("/show/", get(wild::show_without_slug))
        .route("/show/{slug}", get(wild::show))
        .route("/wild/category/{category_name}", get(wild::show_by_category))
        .route("/wild/show/{slug}", get(wild::show))
        .route("/wild/episode/{id}", get(wild::show_episode))
        .route("/wild/{slug}/{id}", get(wild::show_by_season))
        .route("/category/add", get(category::new_category).post(category::add_category))
        .route("/health", get(health::health))
        .route("/metrics", get(observability::get_metrics))
        .route("/static/{*path}", get(assets::serve_static))
        .route_layer(middleware::from_fn(observability::logging_middleware))
        .fallback(not_found)
        .layer(middleware::from_fn(observability::security_headers_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found() -> AppError {
    AppError::NotFound("No route found for this URL.".to_string())
}
