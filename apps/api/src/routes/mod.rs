pub mod health;

use axum::{routing::get, Router};

use crate::roast::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/roast",
            get(handlers::handle_roast_probe).post(handlers::handle_roast),
        )
        .with_state(state)
}
