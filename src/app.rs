use crate::handlers;
use crate::state::SharedState;
use axum::{routing::{get, post}, Router};

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/favorite", post(handlers::toggle_favorite_form))
        .route("/api/visit", post(handlers::visit))
        .route("/api/today", get(handlers::get_today))
        .route("/api/favorite", post(handlers::toggle_favorite))
        .route("/api/share", get(handlers::share))
        .with_state(state)
}
