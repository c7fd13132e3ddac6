//! Admin API endpoints for reviewing registrations

pub mod registrants;

use axum::{
    Router,
    routing::{get, post},
};

use super::state::AppState;

/// Create admin API router
pub fn create_admin_router() -> Router<AppState> {
    Router::new()
        .route("/registrants", get(registrants::list_registrants))
        .route(
            "/registrants/{registrant_id}/accept",
            post(registrants::accept_registrant),
        )
        .route(
            "/registrants/{registrant_id}/reject",
            post(registrants::reject_registrant),
        )
}
