pub mod api;
pub mod health;
pub mod pages;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let static_files = ServeDir::new(state.config.site_root.clone());

    Router::new()
        .route("/", get(pages::index_handler))
        .route("/contact", post(pages::contact_form_handler))
        .route("/health", get(health::health_handler))
        .route("/api/v1/content", get(api::handle_get_content))
        .route("/api/v1/theme", get(api::handle_get_theme))
        .route("/api/v1/theme/toggle", post(api::handle_toggle_theme))
        .route("/api/v1/contact", post(api::handle_contact))
        .route("/api/v1/resume", get(api::handle_resume))
        .route("/api/v1/events", post(api::handle_events))
        .fallback_service(static_files)
        .with_state(state)
}
