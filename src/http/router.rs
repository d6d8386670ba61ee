use crate::app_context::AppContext;
use crate::cli::Args;
use crate::http::cors;
use crate::storage::plots::HashMapPlotsStorage;
use crate::{health, pages, plots};
use axum::{
    routing::{any, get, post},
    Router,
};

pub fn new(args: &Args, app_context: AppContext<HashMapPlotsStorage>) -> Router {
    let cors_policy = cors::layer(args);
    tracing::info!("Initialized HTTP configuration.");

    let health_routes = Router::new().route("/check", get(health::handlers::healthcheck));
    let map_routes = Router::new().route("/options", get(pages::handlers::map_options));
    let plots_routes = Router::new()
        .route("/", post(plots::handlers::plot::create))
        .route("/:plot-id/view", get(plots::handlers::plot::view))
        .route("/:plot-id/field", post(plots::handlers::plot::edit_field))
        .route("/:plot-id/ws", any(plots::handlers::plot::ws));

    Router::new()
        .route("/", get(pages::handlers::index))
        .nest("/health", health_routes)
        .nest("/map", map_routes)
        .nest("/plots", plots_routes)
        .with_state(app_context)
        .layer(cors_policy)
        .layer(axum::middleware::from_fn(crate::http::middleware::tracing))
}
