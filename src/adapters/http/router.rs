use crate::adapters::http::handlers::{login_handler, not_found_handler, register_handler};
use crate::adapters::http::pages::{index_handler, page_handler};
use crate::adapters::http::AppState;
use crate::domain::ports::UserStore;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn build_router<S: UserStore + 'static>(state: Arc<AppState<S>>) -> Router {
    Router::new()
        .route("/", get(index_handler::<S>))
        .route("/api/auth/register", post(register_handler::<S>))
        .route("/api/auth/login", post(login_handler::<S>))
        .route("/{*filename}", get(page_handler::<S>))
        .fallback(not_found_handler)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
