use super::{handlers, state::AppState};
use axum::extract::DefaultBodyLimit;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Creates the Axum router with all the application routes.
pub fn create_router(app_state: AppState) -> Router {
    let upload_limit = DefaultBodyLimit::max(app_state.config.max_upload_bytes());
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route(
            "/extract-by-category",
            post(handlers::extract_by_category_handler).layer(upload_limit.clone()),
        )
        .route(
            "/extract",
            post(handlers::extract_handler).layer(upload_limit),
        )
        .route("/categories", get(handlers::list_categories_handler))
        .route(
            "/categories/{category}",
            get(handlers::category_fields_handler),
        )
        .with_state(app_state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
